// src/application/queries/articles.rs
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};
use crate::domain::article::Article;

/// Read-side views over an article.
pub struct ArticleQueryService {
    intro_chars: usize,
    top_words: usize,
}

impl ArticleQueryService {
    #[must_use]
    pub const fn new(intro_chars: usize, top_words: usize) -> Self {
        Self {
            intro_chars,
            top_words,
        }
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`](crate::application::error::ApplicationError::Domain)
    /// when the content has no break within the configured window.
    pub fn introduction(&self, article: &Article) -> ApplicationResult<String> {
        Ok(article.short_introduction(self.intro_chars)?)
    }

    #[must_use]
    pub fn summarize(&self, article: &Article) -> ArticleSummaryDto {
        let introduction = self
            .introduction(article)
            .inspect_err(|err| {
                tracing::debug!(article_id = %article.id(), error = %err, "no introduction");
            })
            .ok();

        ArticleSummaryDto {
            id: article.id().into(),
            title: article.title.clone(),
            author: article.author.clone(),
            publication_date: article.publication_date,
            last_edited: article.last_edited(),
            length: article.len(),
            introduction,
            top_words: article.most_common_words(self.top_words),
        }
    }
}
