// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Ternary digit codec and keyed ternary cipher.
//!
//! This module is zero-dependency apart from `zeroize` for key wiping, and
//! knows nothing about images. Digit streams are `Vec<u8>` holding values
//! `0`, `1` or `2` (unbalanced ternary), one element per digit, in the same
//! way the embedding layer treats bit streams as one `u8` per bit.
//!
//! - [`transcode`]: characters ↔ fixed-width base-3 digit groups.
//! - [`cipher`]: positional modular addition against a repeating key.
//! - [`key`]: key generation from seed text and strict key parsing.

pub mod cipher;
pub mod error;
pub mod key;
pub mod transcode;

pub use error::{KeyDefect, TernaryError};
pub use key::TernaryKey;

/// Number of base-3 digits used for one character.
///
/// This is the single knob for the alphabet size: the largest encodable
/// code point and the key length are both derived from it.
pub const DIGIT_WIDTH: u32 = 7;

/// Largest code point representable in [`DIGIT_WIDTH`] digits (2186).
pub const MAX_CODE_POINT: u32 = pow3(DIGIT_WIDTH) - 1;

/// Length of a valid key in symbols (2187).
pub const KEY_LEN: usize = pow3(DIGIT_WIDTH) as usize;

/// Number of distinct digit values.
pub const RADIX: u8 = 3;

/// `3^exp` evaluated at compile time.
pub const fn pow3(exp: u32) -> u32 {
    let mut acc = 1u32;
    let mut i = 0;
    while i < exp {
        acc *= 3;
        i += 1;
    }
    acc
}

/// Returns `true` if every element of `digits` is a valid ternary digit.
pub fn is_trit_stream(digits: &[u8]) -> bool {
    check_trits(digits).is_ok()
}

/// Check that every element of `digits` is a valid ternary digit.
///
/// # Errors
/// [`TernaryError::InvalidDigit`] for the first element greater than 2.
pub fn check_trits(digits: &[u8]) -> error::Result<()> {
    match digits.iter().position(|&d| d >= RADIX) {
        Some(index) => Err(TernaryError::InvalidDigit { index, value: digits[index] }),
        None => Ok(()),
    }
}
