// src/domain/article/text.rs
//! Text statistics over article content.
//!
//! Lengths and positions are counted in `char`s (Unicode scalar values), not
//! bytes, so "naïve" has length 5.
use crate::domain::errors::{DomainError, DomainResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

const fn is_break(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Longest prefix of `text` of at most `n_characters` characters that ends
/// right before a space or newline.
///
/// The break is searched in the first `n_characters + 1` characters (the
/// whole text when it is shorter), so a break sitting exactly at position
/// `n_characters` still counts.
///
/// # Errors
///
/// Returns [`DomainError::Precondition`] when that window holds no space or
/// newline, including when `text` is empty.
pub fn short_introduction(text: &str, n_characters: usize) -> DomainResult<String> {
    let window = n_characters.saturating_add(1);
    let window_end = text
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(offset, _)| offset);

    text[..window_end]
        .rfind(is_break)
        .map(|cut| text[..cut].to_owned())
        .ok_or_else(|| {
            DomainError::precondition(format!(
                "no space or newline within the first {window} characters"
            ))
        })
}

/// Lower-cased runs of ASCII letters, in order of appearance.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
}

/// The `n_words` most frequent tokens of `text`, most frequent first.
///
/// Equal counts keep the order in which the words first appear.
#[must_use]
pub fn most_common_words(text: &str, n_words: usize) -> WordFrequencies {
    // token -> (first position, count)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokens(text).enumerate() {
        counts.entry(token).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (first, count))| (word, first, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    WordFrequencies(
        ranked
            .into_iter()
            .take(n_words)
            .map(|(word, _, count)| (word, count))
            .collect(),
    )
}

/// Word counts in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies(Vec<(String, usize)>);

impl WordFrequencies {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == word)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(word, _)| word.as_str())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.0
    }
}

type Entries<'a> =
    std::iter::Map<std::slice::Iter<'a, (String, usize)>, fn(&'a (String, usize)) -> (&'a str, usize)>;

impl<'a> IntoIterator for &'a WordFrequencies {
    type Item = (&'a str, usize);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let entry: fn(&'a (String, usize)) -> (&'a str, usize) =
            |(word, count)| (word.as_str(), *count);
        self.0.iter().map(entry)
    }
}

impl<const N: usize> PartialEq<[(&str, usize); N]> for WordFrequencies {
    fn eq(&self, other: &[(&str, usize); N]) -> bool {
        self.0.len() == N
            && self
                .0
                .iter()
                .zip(other)
                .all(|((word, count), (other_word, other_count))| {
                    word == other_word && count == other_count
                })
    }
}

impl Serialize for WordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}
