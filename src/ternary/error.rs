// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for ternary transcoding and key handling.

use std::fmt;

use super::{DIGIT_WIDTH, KEY_LEN, MAX_CODE_POINT};

/// Why a candidate key string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefect {
    /// The key does not have exactly [`KEY_LEN`] symbols.
    WrongLength(usize),
    /// A symbol outside `-`, `0`, `1` was found at the given character index.
    InvalidSymbol { index: usize, symbol: char },
}

impl fmt::Display for KeyDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => write!(f, "expected {KEY_LEN} symbols, found {n}"),
            Self::InvalidSymbol { index, symbol } => {
                write!(f, "symbol {symbol:?} at position {index} is not one of '-', '0', '1'")
            }
        }
    }
}

/// Errors that can occur while transcoding text or handling keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TernaryError {
    /// A character's code point does not fit in [`DIGIT_WIDTH`] base-3 digits.
    UnsupportedCodePoint { ch: char, index: usize },
    /// The digit stream length is not a multiple of [`DIGIT_WIDTH`].
    MisalignedDigits { len: usize },
    /// A digit stream element is not 0, 1 or 2.
    InvalidDigit { index: usize, value: u8 },
    /// A decoded digit group is not a Unicode scalar value.
    InvalidCodePoint(u32),
    /// The key failed the length/alphabet grammar.
    InvalidKey(KeyDefect),
    /// Key generation was asked to derive a key from empty seed text.
    EmptySeed,
}

impl fmt::Display for TernaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCodePoint { ch, index } => write!(
                f,
                "character {ch:?} (U+{:04X}) at position {index} exceeds the encodable range 0..={MAX_CODE_POINT}",
                *ch as u32
            ),
            Self::MisalignedDigits { len } => {
                write!(f, "digit stream length {len} is not a multiple of {DIGIT_WIDTH}")
            }
            Self::InvalidDigit { index, value } => {
                write!(f, "invalid ternary digit {value} at position {index}")
            }
            Self::InvalidCodePoint(cp) => write!(f, "decoded value {cp} is not a valid character"),
            Self::InvalidKey(defect) => write!(f, "invalid key: {defect}"),
            Self::EmptySeed => write!(f, "cannot generate a key from empty seed text"),
        }
    }
}

impl std::error::Error for TernaryError {}

impl From<KeyDefect> for TernaryError {
    fn from(defect: KeyDefect) -> Self {
        Self::InvalidKey(defect)
    }
}

pub type Result<T> = std::result::Result<T, TernaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_code_point() {
        let err = TernaryError::UnsupportedCodePoint { ch: '€', index: 3 };
        let msg = err.to_string();
        assert!(msg.contains("U+20AC"), "{msg}");
        assert!(msg.contains("position 3"), "{msg}");
    }

    #[test]
    fn display_invalid_key() {
        let err = TernaryError::from(KeyDefect::WrongLength(12));
        assert_eq!(err.to_string(), "invalid key: expected 2187 symbols, found 12");
    }
}
