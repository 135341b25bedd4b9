// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::articles::ArticleCommandService, ports::time::Clock,
    queries::articles::ArticleQueryService,
};
use crate::domain::article::ArticleIdSequence;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    /// Wires the services against the process-wide id sequence.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, intro_chars: usize, top_words: usize) -> Self {
        Self::from_parts(ArticleCommandService::new(clock), intro_chars, top_words)
    }

    #[must_use]
    pub fn with_sequence(
        clock: Arc<dyn Clock>,
        sequence: Arc<ArticleIdSequence>,
        intro_chars: usize,
        top_words: usize,
    ) -> Self {
        Self::from_parts(
            ArticleCommandService::with_sequence(clock, sequence),
            intro_chars,
            top_words,
        )
    }

    fn from_parts(commands: ArticleCommandService, intro_chars: usize, top_words: usize) -> Self {
        Self {
            article_commands: Arc::new(commands),
            article_queries: Arc::new(ArticleQueryService::new(intro_chars, top_words)),
        }
    }
}
