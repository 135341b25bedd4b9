// src/application/commands/articles.rs
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleIdSequence};

pub struct CreateArticleCommand {
    pub title: String,
    pub author: String,
    pub content: String,
    pub publication_date: NaiveDateTime,
}

pub struct ArticleCommandService {
    clock: Arc<dyn Clock>,
    sequence: Arc<ArticleIdSequence>,
}

impl ArticleCommandService {
    /// Service drawing ids from the process-wide sequence.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_sequence(clock, ArticleIdSequence::global())
    }

    #[must_use]
    pub const fn with_sequence(clock: Arc<dyn Clock>, sequence: Arc<ArticleIdSequence>) -> Self {
        Self { clock, sequence }
    }

    #[must_use]
    pub fn create_article(&self, command: CreateArticleCommand) -> Article {
        let CreateArticleCommand {
            title,
            author,
            content,
            publication_date,
        } = command;
        Article::with_sequence(&self.sequence, title, author, content, publication_date)
    }

    pub fn edit_content(&self, article: &mut Article, content: impl Into<String>) {
        let now = self.clock.now();
        article.set_content(content, now);
    }
}
