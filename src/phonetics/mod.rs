//! Phonetic lookup.
//!
//! Looks words up in a pronunciation dictionary and reduces the transcription
//! to the ending that decides what the word rhymes with.

pub mod dictionary;

pub use dictionary::{Dictionary, DictionaryFile};

use crate::constants::dictionary::VOWELS;
use crate::error::Result;
use crate::types::PhoneticEnding;

/// Trait for pronunciation providers.
///
/// Implementations differ in how they hold the dictionary (rescanned from
/// disk per word, or loaded once), not in what they return.
pub trait PronunciationSource {
    /// Look up the phonemes for an uppercase word.
    ///
    /// # Returns
    /// `Ok(None)` if the word has no entry. Errors are reserved for a
    /// dictionary that cannot be read.
    fn phonemes(&self, word: &str) -> Result<Option<Vec<String>>>;
}

/// Whether a phoneme token contains one of the uppercase vowels `AEIOU`.
pub fn word_contains_vowel(token: &str) -> bool {
    token.chars().any(|c| VOWELS.contains(&c))
}

/// Find the phonetic ending of `word`.
///
/// Returns `Ok(None)` when the dictionary has no entry for the word or the
/// entry has no phonemes.
pub fn find_phonetic_ending<P>(source: &P, word: &str) -> Result<Option<PhoneticEnding>>
where
    P: PronunciationSource + ?Sized,
{
    let ending = source
        .phonemes(word)?
        .and_then(|phonemes| PhoneticEnding::from_phonemes(&phonemes));

    tracing::debug!(word, ending = ?ending.as_ref().map(PhoneticEnding::as_str), "phonetic lookup");
    Ok(ending)
}
