//! # Alphabet Module
//!
//! The ordered character set candidates are drawn from.
//!
//! Order is significant: it defines enumeration order, and therefore the
//! order of the final result sequence. Duplicate characters are preserved
//! as-is; each occurrence is a separate enumeration branch.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The default alphabet: lowercase ASCII letters followed by digits.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// An ordered, non-empty sequence of candidate characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from an ordered character sequence.
    ///
    /// Fails with [`ConfigError::EmptyAlphabet`] if the sequence is empty.
    /// Duplicates are kept in place rather than collapsed.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, ConfigError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { chars })
    }

    /// The default alphabet (lowercase letters + digits).
    pub fn lowercase_alphanumeric() -> Self {
        // DEFAULT_ALPHABET is non-empty, so this cannot fail
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }

    /// Number of characters, counting duplicates.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in enumeration order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
