// src/config.rs
use chrono::{NaiveDateTime, Utc};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    title: String,
    author: String,
    publication_date: NaiveDateTime,
    intro_chars: usize,
    top_words: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_title() -> String {
    "Untitled".into()
}

fn default_author() -> String {
    "Anonymous".into()
}

const fn default_intro_chars() -> usize {
    60
}

const fn default_top_words() -> usize {
    5
}

fn parse_usize(key: &str, raw: Option<&str>, default: usize) -> Result<usize, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer")))
    })
}

fn parse_datetime(key: &str, raw: Option<&str>) -> Result<NaiveDateTime, ConfigError> {
    raw.map_or_else(
        || Ok(Utc::now().naive_utc()),
        |value| {
            value.trim().parse::<NaiveDateTime>().map_err(|_| {
                ConfigError::Invalid(format!("{key} must look like 1837-04-07T12:15:00"))
            })
        },
    )
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a looked-up value cannot be
    /// parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let title = lookup("ARTICLE_TITLE").unwrap_or_else(default_title);
        let author = lookup("ARTICLE_AUTHOR").unwrap_or_else(default_author);
        let publication_date = parse_datetime(
            "ARTICLE_PUBLISHED_AT",
            lookup("ARTICLE_PUBLISHED_AT").as_deref(),
        )?;
        let intro_chars = parse_usize(
            "INTRO_CHARS",
            lookup("INTRO_CHARS").as_deref(),
            default_intro_chars(),
        )?;
        let top_words = parse_usize(
            "TOP_WORDS",
            lookup("TOP_WORDS").as_deref(),
            default_top_words(),
        )?;

        Ok(Self {
            title,
            author,
            publication_date,
            intro_chars,
            top_words,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn publication_date(&self) -> NaiveDateTime {
        self.publication_date
    }

    #[must_use]
    pub const fn intro_chars(&self) -> usize {
        self.intro_chars
    }

    #[must_use]
    pub const fn top_words(&self) -> usize {
        self.top_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.title(), "Untitled");
        assert_eq!(config.author(), "Anonymous");
        assert_eq!(config.intro_chars(), 60);
        assert_eq!(config.top_words(), 5);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ARTICLE_TITLE", "The emperor's new clothes"),
            ("ARTICLE_AUTHOR", "Hans Christian Andersen"),
            ("ARTICLE_PUBLISHED_AT", "1837-04-07T12:15:00"),
            ("INTRO_CHARS", "20"),
            ("TOP_WORDS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.title(), "The emperor's new clothes");
        assert_eq!(config.author(), "Hans Christian Andersen");
        assert_eq!(
            config.publication_date().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "1837-04-07T12:15:00"
        );
        assert_eq!(config.intro_chars(), 20);
        assert_eq!(config.top_words(), 3);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("INTRO_CHARS", "-1")])).unwrap_err();
        assert!(err.to_string().contains("INTRO_CHARS"));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("ARTICLE_PUBLISHED_AT", "yesterday")]))
            .unwrap_err();
        assert!(err.to_string().contains("ARTICLE_PUBLISHED_AT"));
    }
}
