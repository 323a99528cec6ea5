// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Keyed ternary stream cipher.
//!
//! `c[i] = (p[i] + k[i mod KEY_LEN]) mod 3` and its inverse. The key repeats
//! cyclically, so streams longer than the key never exhaust it. This is an
//! obfuscation layer, not a secure cipher.

use super::error::Result;
use super::key::TernaryKey;
use super::{check_trits, RADIX};

/// Encrypt a plaintext digit stream.
///
/// # Errors
/// [`TernaryError::InvalidDigit`](super::TernaryError::InvalidDigit) if any
/// digit is not in `0..=2`.
pub fn encrypt(plain: &[u8], key: &TernaryKey) -> Result<Vec<u8>> {
    check_trits(plain)?;
    Ok(plain
        .iter()
        .enumerate()
        .map(|(i, &p)| (p + key.residue_at(i)) % RADIX)
        .collect())
}

/// Decrypt a ciphertext digit stream; the exact inverse of [`encrypt`].
///
/// # Errors
/// [`TernaryError::InvalidDigit`](super::TernaryError::InvalidDigit) if any
/// digit is not in `0..=2`.
pub fn decrypt(cipher: &[u8], key: &TernaryKey) -> Result<Vec<u8>> {
    check_trits(cipher)?;
    Ok(cipher
        .iter()
        .enumerate()
        .map(|(i, &c)| (c + RADIX - key.residue_at(i)) % RADIX)
        .collect())
}
