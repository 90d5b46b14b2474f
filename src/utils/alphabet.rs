//! Encoding alphabet defining the short code numeral system.

use std::collections::HashSet;

/// Default character set: `a-z`, `A-Z`, `0-9` (base 62).
pub const DEFAULT_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors that make a character set unusable as an encoding alphabet.
#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    #[error("Alphabet must contain at least 2 characters, got {0}")]
    TooShort(usize),

    #[error("Alphabet contains duplicate character '{0}'")]
    DuplicateChar(char),
}

/// An ordered, duplicate-free character set.
///
/// The character count is the encoding base; each character's position is
/// its digit value. Duplicates are rejected at construction because they
/// would make position lookup ambiguous and break decoding.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given characters, in order.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::TooShort`] for fewer than 2 characters and
    /// [`AlphabetError::DuplicateChar`] when a character repeats.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = chars.chars().collect();

        if chars.len() < 2 {
            return Err(AlphabetError::TooShort(chars.len()));
        }

        let mut seen = HashSet::with_capacity(chars.len());
        for &c in &chars {
            if !seen.insert(c) {
                return Err(AlphabetError::DuplicateChar(c));
            }
        }

        Ok(Self { chars })
    }

    /// The encoding base, i.e. the number of characters.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Character at `position`. Callers must pass `position < base()`.
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Digit value of `c`, or `None` when `c` is not in the alphabet.
    pub fn position(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }
}
