use crate::domain::article::WordFrequencies;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummaryDto {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDateTime,
    pub last_edited: Option<DateTime<Utc>>,
    pub length: usize,
    /// `None` when the content has no break inside the requested window.
    pub introduction: Option<String>,
    pub top_words: WordFrequencies,
}
