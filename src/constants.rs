//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Input size limits.
pub mod limits {
    /// Default maximum length of a poem line in bytes.
    pub const MAX_LINE_LENGTH: usize = 512;

    /// Smallest line length limit accepted from configuration.
    pub const MIN_LINE_LENGTH: usize = 16;
}

/// Pronunciation dictionary constants.
pub mod dictionary {
    /// Dictionary file name, resolved relative to the working directory.
    pub const DEFAULT_PATH: &str = "dictionary.txt";

    /// Characters that mark a phoneme as vowel-bearing.
    pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];
}

/// Rhyme scheme letters and known sonnet patterns.
pub mod patterns {
    /// Letters issued to new rhyme endings, in order.
    pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

    /// Number of distinct endings a single poem may use.
    pub const ALPHABET_SIZE: usize = LETTERS.len();

    /// Three quatrains and a couplet.
    pub const SHAKESPEAREAN: &str = "ababcdcdefefgg";

    /// Enclosed octave followed by an alternating sestet.
    pub const PETRARCHAN: &str = "abbaabbacdcdcd";

    /// Interlocking quatrains and a couplet.
    pub const SPENSERIAN: &str = "ababbcbccdcdee";
}
