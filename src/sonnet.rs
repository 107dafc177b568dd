//! Rhyme scheme derivation and sonnet classification.
//!
//! Each line of a poem contributes one letter: its last word is looked up in
//! the pronunciation dictionary, reduced to a phonetic ending, and labeled.
//! The finished scheme is compared exactly against the known sonnet forms.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::constants::limits;
use crate::error::{Error, Result};
use crate::phonetics::{find_phonetic_ending, Dictionary, DictionaryFile, PronunciationSource};
use crate::rhyme::RhymeLabeler;
use crate::tokenizer;
use crate::types::{PhoneticEnding, RhymeScheme, SonnetForm};

/// How poem lines are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeOptions {
    /// Longest line accepted, in bytes. Longer lines are rejected.
    pub max_line_length: usize,
    /// Leave whitespace-only lines out of the scheme.
    pub skip_blank_lines: bool,
}

impl Default for SchemeOptions {
    fn default() -> Self {
        Self {
            max_line_length: limits::MAX_LINE_LENGTH,
            skip_blank_lines: false,
        }
    }
}

impl From<&Config> for SchemeOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_line_length: config.max_line_length,
            skip_blank_lines: config.skip_blank_lines,
        }
    }
}

/// Result of analyzing one poem file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemReport {
    /// The poem file.
    pub path: PathBuf,
    /// Derived rhyme scheme.
    pub scheme: RhymeScheme,
    /// Matching sonnet form.
    pub form: SonnetForm,
    /// Last words with no dictionary entry, in line order.
    pub unmatched: Vec<String>,
}

/// Derive the rhyme scheme of the poem at `path`.
///
/// A poem that cannot be opened is an error, never an empty scheme. A final
/// line without a trailing newline still gets a letter. Invalid UTF-8 is
/// replaced rather than rejected, so a stray byte only affects its own line.
pub fn find_rhyme_scheme<P>(path: &Path, source: &P, options: &SchemeOptions) -> Result<RhymeScheme>
where
    P: PronunciationSource + ?Sized,
{
    scan_poem(path, source, options).map(|(scheme, _)| scheme)
}

/// Classify the poem at `path` as one of the known sonnet forms.
pub fn identify_sonnet<P>(path: &Path, source: &P, options: &SchemeOptions) -> Result<SonnetForm>
where
    P: PronunciationSource + ?Sized,
{
    let scheme = find_rhyme_scheme(path, source, options)?;
    Ok(SonnetForm::from_scheme(&scheme))
}

fn scan_poem<P>(path: &Path, source: &P, options: &SchemeOptions) -> Result<(RhymeScheme, Vec<String>)>
where
    P: PronunciationSource + ?Sized,
{
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    tracing::debug!("Reading poem {}", path.display());

    derive_scheme(BufReader::new(file), source, options)
        .map_err(|e| match e {
            Error::Io { source: err, path: None } => Error::io(err, path.to_path_buf()),
            other => other,
        })
}

fn derive_scheme<R, P>(reader: R, source: &P, options: &SchemeOptions) -> Result<(RhymeScheme, Vec<String>)>
where
    R: BufRead,
    P: PronunciationSource + ?Sized,
{
    let mut labeler = RhymeLabeler::new();
    let mut scheme = RhymeScheme::new();
    let mut unmatched = Vec::new();

    for (index, line) in tokenizer::lossy_lines(reader).enumerate() {
        let line = line?;

        if line.len() > options.max_line_length {
            return Err(Error::LineTooLong {
                line: index + 1,
                length: line.len(),
                max: options.max_line_length,
            });
        }

        if options.skip_blank_lines && line.trim().is_empty() {
            continue;
        }

        let word = tokenizer::last_word(&line).unwrap_or_default();
        let ending = if word.is_empty() {
            PhoneticEnding::unmatched(&word)
        } else {
            find_phonetic_ending(source, &word)?.unwrap_or_else(|| PhoneticEnding::unmatched(&word))
        };

        if ending.is_unmatched() && !word.is_empty() {
            tracing::debug!(line = index + 1, word = %word, "word not in dictionary");
            unmatched.push(word);
        }

        scheme.push(labeler.label(ending.as_str())?);
    }

    Ok((scheme, unmatched))
}

/// Runs the classification pipeline with one pronunciation source.
pub struct Analyzer {
    source: Box<dyn PronunciationSource>,
    options: SchemeOptions,
}

impl Analyzer {
    /// Create an analyzer over any pronunciation source.
    pub fn new(source: Box<dyn PronunciationSource>, options: SchemeOptions) -> Self {
        Self { source, options }
    }

    /// Build the analyzer the configuration asks for.
    ///
    /// A preloaded dictionary is read here, so a missing file fails now
    /// rather than on the first lookup.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source: Box<dyn PronunciationSource> = if config.preload_dictionary {
            Box::new(Dictionary::load(&config.dictionary_path)?)
        } else {
            tracing::info!("Scanning {} for every lookup", config.dictionary_path.display());
            Box::new(DictionaryFile::new(config.dictionary_path.clone()))
        };
        Ok(Self::new(source, SchemeOptions::from(config)))
    }

    /// Classify the poem at `path`.
    pub fn identify(&self, path: &Path) -> Result<SonnetForm> {
        identify_sonnet(path, self.source.as_ref(), &self.options)
    }

    /// Derive the scheme of poem text already in memory.
    pub fn scheme_from_text(&self, text: &str) -> Result<RhymeScheme> {
        derive_scheme(text.as_bytes(), self.source.as_ref(), &self.options).map(|(scheme, _)| scheme)
    }

    /// Analyze the poem at `path`, keeping the scheme and unmatched words.
    pub fn analyze(&self, path: &Path) -> Result<PoemReport> {
        let (scheme, unmatched) = scan_poem(path, self.source.as_ref(), &self.options)?;
        let form = SonnetForm::from_scheme(&scheme);
        tracing::info!("{}: {} ({})", path.display(), form, scheme);

        Ok(PoemReport {
            path: path.to_path_buf(),
            scheme,
            form,
            unmatched,
        })
    }
}
