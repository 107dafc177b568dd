//! Rhyme letter assignment.

use std::collections::HashMap;

use crate::constants::patterns::{ALPHABET_SIZE, LETTERS};
use crate::error::{Error, Result};

/// Issues rhyme scheme letters for one poem.
///
/// The first unseen ending gets `a`, the next `b`, and so on; an ending seen
/// before gets its earlier letter back. Create one per poem or call
/// [`RhymeLabeler::reset`] between poems.
#[derive(Debug, Clone, Default)]
pub struct RhymeLabeler {
    letters: HashMap<String, char>,
}

impl RhymeLabeler {
    /// Create a labeler with nothing assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every assignment so the next new ending gets `a` again.
    pub fn reset(&mut self) {
        self.letters.clear();
    }

    /// Return the letter for `ending`, assigning the next free one if it is new.
    ///
    /// Fails without changing state once all letters are in use.
    pub fn label(&mut self, ending: &str) -> Result<char> {
        if let Some(&letter) = self.letters.get(ending) {
            return Ok(letter);
        }

        let letter = LETTERS
            .chars()
            .nth(self.letters.len())
            .ok_or(Error::AlphabetExhausted { limit: ALPHABET_SIZE })?;
        self.letters.insert(ending.to_string(), letter);
        Ok(letter)
    }

    /// Number of distinct endings seen since the last reset.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether nothing has been labeled since the last reset.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
