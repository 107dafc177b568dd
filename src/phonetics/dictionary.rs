//! Pronunciation dictionary files.
//!
//! One entry per line: the word, then its phonemes, all separated by
//! whitespace.
//!
//! ```text
//! CAT K AE1 T
//! DON'T D OW1 N T
//! ```
//!
//! Keys are compared exactly, so the file must store them uppercase. When a
//! key appears more than once the earliest entry is the one used.

use std::collections::HashMap;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::PronunciationSource;
use crate::error::{Error, Result};
use crate::tokenizer;

/// Split a dictionary line into its key and phonemes.
///
/// Phonemes go through the word tokenizer, so they come back uppercased with
/// stress digits intact. Blank lines yield `None`.
pub fn parse_entry(line: &str) -> Option<(&str, Vec<String>)> {
    let line = line.trim_start();
    let key_end = line.find(char::is_whitespace).unwrap_or(line.len());
    let key = &line[..key_end];
    if key.is_empty() {
        return None;
    }
    Some((key, tokenizer::words(&line[key_end..]).collect()))
}

/// Dictionary read straight from disk on every lookup.
///
/// Each call opens the file, scans until the first matching key and closes
/// it again. Nothing is cached between lookups.
#[derive(Debug, Clone)]
pub struct DictionaryFile {
    path: PathBuf,
}

impl DictionaryFile {
    /// Create a lookup backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PronunciationSource for DictionaryFile {
    fn phonemes(&self, word: &str) -> Result<Option<Vec<String>>> {
        let file = fs_err::File::open(&self.path).map_err(|e| Error::io(e, self.path.clone()))?;

        for line in tokenizer::lossy_lines(BufReader::new(file)) {
            let line = line.map_err(|e| Error::io(e, self.path.clone()))?;
            if let Some((key, phonemes)) = parse_entry(&line) {
                if key == word {
                    return Ok(Some(phonemes));
                }
            }
        }

        Ok(None)
    }
}

/// Dictionary loaded into memory once.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Read and index the dictionary file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs_err::read(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let dictionary = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::info!("Loaded {} dictionary entries from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Index dictionary text that is already in memory.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut duplicates = 0usize;

        for (key, phonemes) in text.lines().filter_map(parse_entry) {
            if entries.contains_key(key) {
                duplicates += 1;
                continue;
            }
            entries.insert(key.to_string(), phonemes);
        }

        if duplicates > 0 {
            tracing::warn!("Ignored {duplicates} duplicate dictionary entries; the first entry for each word is used");
        }

        Self { entries }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationSource for Dictionary {
    fn phonemes(&self, word: &str) -> Result<Option<Vec<String>>> {
        Ok(self.entries.get(word).cloned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Write;

    const DICT: &str = "\
DAY D EY1
DAY M AA1 N D EY2

  MAY   M EY1
DON'T D OW1 N T
";

    fn write_dict(text: &str) -> tempfile::NamedTempFile {
        write_dict_bytes(text.as_bytes())
    }

    fn write_dict_bytes(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn parses_entry_line() {
        let (key, phonemes) = parse_entry("DAY D EY1").unwrap();
        assert_eq!(key, "DAY");
        assert_eq!(phonemes, vec!["D", "EY1"]);
    }

    #[test]
    fn blank_line_is_not_an_entry() {
        assert!(parse_entry("").is_none());
        assert!(parse_entry("   \t").is_none());
    }

    #[test]
    fn key_without_phonemes() {
        let (key, phonemes) = parse_entry("LONELY").unwrap();
        assert_eq!(key, "LONELY");
        assert!(phonemes.is_empty());
    }

    #[test]
    fn in_memory_first_entry_wins() {
        let dict = Dictionary::parse(DICT);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.phonemes("DAY").unwrap().unwrap(), vec!["D", "EY1"]);
        assert_eq!(dict.phonemes("MAY").unwrap().unwrap(), vec!["M", "EY1"]);
        assert_eq!(dict.phonemes("DON'T").unwrap().unwrap(), vec!["D", "OW1", "N", "T"]);
    }

    #[test]
    fn file_scan_first_entry_wins() {
        let file = write_dict(DICT);
        let dict = DictionaryFile::new(file.path());
        assert_eq!(dict.phonemes("DAY").unwrap().unwrap(), vec!["D", "EY1"]);
        assert!(dict.phonemes("NIGHT").unwrap().is_none());
    }

    #[test]
    fn file_scan_and_memory_agree() {
        let file = write_dict(DICT);
        let scanned = DictionaryFile::new(file.path());
        let loaded = Dictionary::load(file.path()).unwrap();
        for word in ["DAY", "MAY", "DON'T", "NIGHT"] {
            assert_eq!(scanned.phonemes(word).unwrap(), loaded.phonemes(word).unwrap());
        }
    }

    #[test]
    fn latin1_entry_does_not_hide_later_words() {
        let file = write_dict_bytes(b"CAF\xC9 K AE0 F EY1\nDAY D EY1\n");

        let scanned = DictionaryFile::new(file.path());
        assert_eq!(scanned.phonemes("DAY").unwrap().unwrap(), vec!["D", "EY1"]);

        let loaded = Dictionary::load(file.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.phonemes("DAY").unwrap().unwrap(), vec!["D", "EY1"]);
        assert_eq!(
            loaded.phonemes("CAF\u{FFFD}").unwrap().unwrap(),
            vec!["K", "AE0", "F", "EY1"]
        );
    }

    #[test]
    fn missing_file_is_an_error_not_a_miss() {
        let dict = DictionaryFile::new("/nonexistent/sonnetscan/dictionary.txt");
        match dict.phonemes("DAY") {
            Err(Error::Io { path: Some(p), .. }) => {
                assert!(p.ends_with("dictionary.txt"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
        assert!(Dictionary::load(Path::new("/nonexistent/sonnetscan/dictionary.txt")).is_err());
    }
}
