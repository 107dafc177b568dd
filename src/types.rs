//! Core type definitions for compile-time safety.
//!
//! Newtype wrappers keep phonetic endings, rhyme schemes and sonnet forms
//! from being mixed up with plain strings.

use serde::Serialize;
use std::fmt;

use crate::constants::patterns;
use crate::phonetics::word_contains_vowel;

/// The rhyme-relevant tail of a word's pronunciation.
///
/// Either the phonemes from the last vowel-bearing phoneme to the end,
/// concatenated, or a sentinel for a word the dictionary does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneticEnding(String);

impl PhoneticEnding {
    /// Extract the ending from a word's phonemes.
    ///
    /// Picks the last phoneme containing a vowel and joins it with every
    /// phoneme after it. With no vowel-bearing phoneme the whole
    /// transcription is used. Returns `None` for an empty transcription.
    pub fn from_phonemes<S: AsRef<str>>(phonemes: &[S]) -> Option<Self> {
        if phonemes.is_empty() {
            return None;
        }

        let start = phonemes
            .iter()
            .rposition(|p| word_contains_vowel(p.as_ref()))
            .unwrap_or(0);

        Some(Self(phonemes[start..].iter().map(AsRef::as_ref).collect()))
    }

    /// Sentinel ending for a word with no dictionary entry.
    ///
    /// Wrapped in angle brackets, which the tokenizer never lets into a
    /// phoneme, so it can only match another miss on the same word.
    pub fn unmatched(word: &str) -> Self {
        Self(format!("<{word}>"))
    }

    /// Whether this is the sentinel for an unknown word.
    pub fn is_unmatched(&self) -> bool {
        self.0.starts_with('<')
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneticEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rhyme letter per poem line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RhymeScheme(String);

impl RhymeScheme {
    /// Create an empty scheme.
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Append the letter for the next line.
    pub fn push(&mut self, letter: char) {
        self.0.push(letter);
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no lines have been labeled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RhymeScheme {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The sonnet form a rhyme scheme matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SonnetForm {
    /// `ababcdcdefefgg`
    Shakespearean,
    /// `abbaabbacdcdcd`
    Petrarchan,
    /// `ababbcbccdcdee`
    Spenserian,
    /// Anything else.
    #[default]
    Unknown,
}

impl SonnetForm {
    /// Returns the recognised forms in matching order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Shakespearean, Self::Petrarchan, Self::Spenserian]
    }

    /// Returns the human-readable name of this form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shakespearean => "Shakespearean",
            Self::Petrarchan => "Petrarchan",
            Self::Spenserian => "Spenserian",
            Self::Unknown => "Unknown",
        }
    }

    /// The fixed rhyme scheme of this form.
    #[must_use]
    pub const fn pattern(self) -> Option<&'static str> {
        match self {
            Self::Shakespearean => Some(patterns::SHAKESPEAREAN),
            Self::Petrarchan => Some(patterns::PETRARCHAN),
            Self::Spenserian => Some(patterns::SPENSERIAN),
            Self::Unknown => None,
        }
    }

    /// Classify a scheme by exact comparison against the known patterns.
    pub fn from_scheme(scheme: &RhymeScheme) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|form| form.pattern() == Some(scheme.as_str()))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for SonnetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
