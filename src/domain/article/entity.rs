// src/domain/article/entity.rs
use crate::domain::article::repr::{iso_datetime, write_quoted};
use crate::domain::article::text::{self, WordFrequencies};
use crate::domain::article::value_objects::{ArticleId, ArticleIdSequence};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A blog article.
///
/// Articles compare and sort by `publication_date` only; use [`Article::id`]
/// for identity.
#[derive(Debug)]
pub struct Article {
    id: ArticleId,
    pub title: String,
    pub author: String,
    content: String,
    pub publication_date: NaiveDateTime,
    last_edited: Option<DateTime<Utc>>,
}

impl Article {
    /// Builds an article with the next id of the process-wide sequence.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        publication_date: NaiveDateTime,
    ) -> Self {
        Self::with_sequence(
            &ArticleIdSequence::global(),
            title,
            author,
            content,
            publication_date,
        )
    }

    #[must_use]
    pub fn with_sequence(
        sequence: &ArticleIdSequence,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        publication_date: NaiveDateTime,
    ) -> Self {
        let id = sequence.next_id();
        tracing::debug!(article_id = %id, "article created");
        Self {
            id,
            title: title.into(),
            author: author.into(),
            content: content.into(),
            publication_date,
            last_edited: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ArticleId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn last_edited(&self) -> Option<DateTime<Utc>> {
        self.last_edited
    }

    /// Replaces the content and stamps `last_edited`, even if nothing changed.
    ///
    /// `last_edited` never moves backwards: a `now` older than the stored
    /// stamp leaves the stamp as it is.
    pub fn set_content(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.content = content.into();
        let stamp = self.last_edited.map_or(now, |previous| previous.max(now));
        self.last_edited = Some(stamp);
        tracing::debug!(article_id = %self.id, edited_at = %stamp, "article content edited");
    }

    /// Length of the content in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        text::char_len(&self.content)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// See [`text::short_introduction`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Precondition`](crate::domain::errors::DomainError::Precondition)
    /// when the first `n_characters + 1` characters of the content hold no
    /// space or newline.
    pub fn short_introduction(&self, n_characters: usize) -> DomainResult<String> {
        text::short_introduction(&self.content, n_characters)
    }

    #[must_use]
    pub fn most_common_words(&self, n_words: usize) -> WordFrequencies {
        text::most_common_words(&self.content, n_words)
    }

    /// Same as the `Display` output.
    #[must_use]
    pub fn to_repr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Article title=")?;
        write_quoted(f, &self.title)?;
        f.write_str(" author=")?;
        write_quoted(f, &self.author)?;
        f.write_str(" publication_date=")?;
        write_quoted(f, &iso_datetime(self.publication_date))?;
        f.write_str(">")
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.publication_date == other.publication_date
    }
}

impl Eq for Article {}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Article {
    fn cmp(&self, other: &Self) -> Ordering {
        self.publication_date.cmp(&other.publication_date)
    }
}
