//! Word tokenization for poem lines and dictionary transcriptions.
//!
//! A word starts at an alphanumeric character and runs through any following
//! alphanumerics and apostrophes. Everything else separates words, so a
//! leading apostrophe is dropped (`'tis` becomes `TIS`) while internal and
//! trailing ones are kept (`don't`, `lovers'`). Words are returned uppercased.

use std::io::{self, BufRead};

/// Read `reader` line by line, replacing invalid UTF-8 with U+FFFD.
///
/// Line endings (`\n` or `\r\n`) are stripped. A bad byte only spoils the
/// line it sits on.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8_lossy(&bytes).into_owned()
        })
    })
}

/// Iterate over the uppercased words of `line` in order.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    Words { rest: line }
}

/// Return the `n`-th word (1-indexed) of `line`, uppercased.
///
/// Returns `None` when `n` is zero or the line has fewer than `n` words.
pub fn get_word(line: &str, n: usize) -> Option<String> {
    if n < 1 {
        return None;
    }
    words(line).nth(n - 1)
}

/// Count the words in `line` by probing [`get_word`] until it fails.
pub fn count_words(line: &str) -> usize {
    let mut count = 0;
    while get_word(line, count + 1).is_some() {
        count += 1;
    }
    count
}

/// Return the last word of `line`, uppercased.
pub fn last_word(line: &str) -> Option<String> {
    get_word(line, count_words(line))
}

struct Words<'a> {
    rest: &'a str,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let start = self.rest.find(char::is_alphanumeric)?;
        let tail = &self.rest[start..];
        let end = tail
            .find(|c: char| !(c.is_alphanumeric() || c == '\''))
            .unwrap_or(tail.len());

        let word = tail[..end].to_uppercase();
        self.rest = &tail[end..];
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn empty_line_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(get_word("", 1), None);
    }

    #[test]
    fn punctuation_only_line_has_no_words() {
        assert_eq!(count_words("  ,.;!? -- "), 0);
        assert_eq!(last_word("...!"), None);
    }

    #[test]
    fn counts_words_around_punctuation() {
        assert_eq!(count_words("Hello, world!"), 2);
        assert_eq!(get_word("Hello, world!", 1).as_deref(), Some("HELLO"));
        assert_eq!(get_word("Hello, world!", 2).as_deref(), Some("WORLD"));
    }

    #[test]
    fn index_out_of_range_fails() {
        assert_eq!(get_word("Hello, world!", 0), None);
        assert_eq!(get_word("Hello, world!", 3), None);
    }

    #[test]
    fn keeps_internal_apostrophes() {
        assert_eq!(get_word("I don't know", 2).as_deref(), Some("DON'T"));
        assert_eq!(last_word("Shall I compare thee to a summer's day?").as_deref(), Some("DAY"));
        assert_eq!(get_word("a summer's day", 2).as_deref(), Some("SUMMER'S"));
    }

    #[test]
    fn leading_apostrophe_is_a_separator() {
        assert_eq!(get_word("'Tis the season", 1).as_deref(), Some("TIS"));
        assert_eq!(last_word("the lovers'").as_deref(), Some("LOVERS'"));
    }

    #[test]
    fn digits_count_as_word_characters() {
        let words: Vec<String> = words("K AE1 T").collect();
        assert_eq!(words, vec!["K", "AE1", "T"]);
    }

    #[test]
    fn lossy_lines_survive_invalid_bytes() {
        let lines: Vec<String> = lossy_lines(&b"caf\xe9 au lait\r\nday\nnight"[..])
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec!["caf\u{FFFD} au lait", "day", "night"]);
    }

    #[test]
    fn uppercases_regardless_of_input_case() {
        assert_eq!(last_word("the darling buds of MaY").as_deref(), Some("MAY"));
    }
}
