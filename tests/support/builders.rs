// tests/support/builders.rs
use chrono::{NaiveDate, NaiveDateTime};

use article_core::domain::article::{Article, ArticleIdSequence};

pub const ANDERSEN: &str = "'But he has nothing at all on!' at last cried out all the people. \
                            The Emperor was vexed, for he knew that the people were right.";

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

pub struct ArticleBuilder {
    title: String,
    author: String,
    content: String,
    publication_date: NaiveDateTime,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "The emperor's new clothes".into(),
            author: "Hans Christian Andersen".into(),
            content: ANDERSEN.into(),
            publication_date: datetime(1837, 4, 7, 12, 15, 0),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub const fn published(mut self, publication_date: NaiveDateTime) -> Self {
        self.publication_date = publication_date;
        self
    }

    pub fn build(self, sequence: &ArticleIdSequence) -> Article {
        Article::with_sequence(
            sequence,
            self.title,
            self.author,
            self.content,
            self.publication_date,
        )
    }
}
