use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(pub u64);

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static GLOBAL_SEQUENCE: Lazy<Arc<ArticleIdSequence>> =
    Lazy::new(|| Arc::new(ArticleIdSequence::new()));

/// Hands out article ids starting at 0, one per call to [`ArticleIdSequence::next_id`].
///
/// The increment is a single atomic read-modify-write, so concurrent callers
/// never observe duplicated or skipped ids. A sequence is never reset.
#[derive(Debug, Default)]
pub struct ArticleIdSequence {
    next: AtomicU64,
}

impl ArticleIdSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide sequence used by [`crate::domain::article::Article::new`].
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_SEQUENCE)
    }

    #[must_use]
    pub fn next_id(&self) -> ArticleId {
        ArticleId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Id the next construction will receive.
    #[must_use]
    pub fn peek(&self) -> ArticleId {
        ArticleId(self.next.load(Ordering::Relaxed))
    }
}
