//! `sonnetscan` - sonnet form classification by rhyme scheme.
//!
//! This crate derives a poem's end-of-line rhyme scheme from a pronunciation
//! dictionary and matches it against the Shakespearean, Petrarchan and
//! Spenserian sonnet forms.

pub mod config;
pub mod constants;
pub mod error;
pub mod phonetics;
pub mod rhyme;
pub mod sonnet;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};
pub use sonnet::{find_rhyme_scheme, identify_sonnet, Analyzer, PoemReport, SchemeOptions};
pub use types::{PhoneticEnding, RhymeScheme, SonnetForm};
