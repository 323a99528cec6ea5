// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Ternary key generation and validation.
//!
//! A key is exactly [`KEY_LEN`] symbols over the display alphabet
//! `-`, `0`, `1`, which stand for the signed values −1, 0, 1. The cipher
//! works on residues mod 3, so the symbols map to residues as:
//!
//! ```text
//! symbol  signed  residue
//!   '-'     -1       2
//!   '0'      0       0
//!   '1'      1       1
//! ```
//!
//! [`TernaryKey`] stores residues. The symbol string is only produced for
//! display and key files.

use std::fmt;

use zeroize::ZeroizeOnDrop;

use super::error::{KeyDefect, Result, TernaryError};
use super::{KEY_LEN, RADIX};

/// Residue for the `-` (−1) symbol.
const MINUS_RESIDUE: u8 = 2;

/// A validated ternary key of exactly [`KEY_LEN`] residues.
///
/// Key material is wiped when the value is dropped and never shown by
/// `Debug`.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct TernaryKey {
    residues: Vec<u8>,
}

impl TernaryKey {
    /// Parse and validate a key given in symbol form.
    ///
    /// # Errors
    /// [`TernaryError::InvalidKey`] describing the first defect found.
    pub fn parse(candidate: &str) -> Result<Self> {
        check(candidate)?;
        let residues = candidate.bytes().map(residue_of).collect();
        Ok(Self { residues })
    }

    /// Derive a key deterministically from arbitrary seed text.
    ///
    /// See [`generate`].
    pub fn generate(seed: &str) -> Result<Self> {
        let chars: Vec<u32> = seed.chars().map(|c| c as u32).collect();
        if chars.is_empty() {
            return Err(TernaryError::EmptySeed);
        }

        let residues = (0..KEY_LEN)
            .map(|i| {
                let cp = chars[i % chars.len()] as u64;
                // r - 1 is the signed value; its residue is (r + 2) mod 3.
                let r = ((cp + i as u64) % RADIX as u64) as u8;
                (r + MINUS_RESIDUE) % RADIX
            })
            .collect();

        Ok(Self { residues })
    }

    /// Key residues in `0..=2`, one per position.
    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// Residue applied at stream position `i` (the key repeats cyclically).
    #[inline]
    pub fn residue_at(&self, i: usize) -> u8 {
        self.residues[i % self.residues.len()]
    }

    /// Number of key positions (always [`KEY_LEN`]).
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; a valid key is never empty.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Render the key in its `-`/`0`/`1` symbol form.
    pub fn to_symbols(&self) -> String {
        self.residues.iter().map(|&r| symbol_of(r)).collect()
    }
}

impl fmt::Display for TernaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &r in &self.residues {
            write!(f, "{}", symbol_of(r))?;
        }
        Ok(())
    }
}

impl fmt::Debug for TernaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernaryKey")
            .field("len", &self.residues.len())
            .finish_non_exhaustive()
    }
}

impl std::str::FromStr for TernaryKey {
    type Err = TernaryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Derive the symbol form of a key from seed text.
///
/// For position `i` in `0..KEY_LEN`, with `cp` the code point of seed
/// character `i mod len(seed)`, the signed value is `((cp + i) mod 3) - 1`.
///
/// # Errors
/// [`TernaryError::EmptySeed`] if `seed` is empty.
pub fn generate(seed: &str) -> Result<String> {
    TernaryKey::generate(seed).map(|k| k.to_symbols())
}

/// Returns `true` iff `candidate` is exactly [`KEY_LEN`] symbols of `-`, `0`, `1`.
pub fn validate(candidate: &str) -> bool {
    check(candidate).is_ok()
}

fn check(candidate: &str) -> std::result::Result<(), KeyDefect> {
    if let Some((index, symbol)) = candidate
        .chars()
        .enumerate()
        .find(|&(_, c)| !matches!(c, '-' | '0' | '1'))
    {
        return Err(KeyDefect::InvalidSymbol { index, symbol });
    }
    // All symbols are ASCII at this point, so byte length == symbol count.
    if candidate.len() != KEY_LEN {
        return Err(KeyDefect::WrongLength(candidate.len()));
    }
    Ok(())
}

fn residue_of(symbol: u8) -> u8 {
    match symbol {
        b'-' => MINUS_RESIDUE,
        b'1' => 1,
        _ => 0,
    }
}

fn symbol_of(residue: u8) -> char {
    match residue {
        MINUS_RESIDUE => '-',
        1 => '1',
        _ => '0',
    }
}
