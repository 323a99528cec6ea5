// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # ternstego
//!
//! Hides text messages in the low bits of raster images after passing them
//! through a ternary transcoding and a keyed ternary cipher.
//!
//! - [`ternary`]: text ↔ base-3 digits, the repeating-key modular cipher,
//!   and key generation/validation. No image code.
//! - [`stego`]: red-channel LSB embedding, text framing, capacity, and the
//!   encrypt/decrypt pipelines.
//!
//! The cipher is an obfuscation layer only. It is not cryptographically
//! secure, offers no integrity check, and the embedding does not resist
//! steganalysis.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ternstego::{encrypt_and_embed, extract_and_decrypt, EncryptedSource, NoProgress, TernaryKey};
//!
//! let cover = std::fs::read("cover.png").unwrap();
//! let key = TernaryKey::generate("shared seed").unwrap();
//! let out = encrypt_and_embed("HI", &key, &cover, NoProgress).unwrap();
//! let symbols = key.to_symbols();
//! let text = extract_and_decrypt(EncryptedSource::Image(&out.stego_png), &symbols, NoProgress).unwrap();
//! assert_eq!(text, "HI");
//! ```

pub mod stego;
pub mod ternary;

pub use stego::{
    decrypt_message, decrypt_with_key, embed_message, encrypt_and_embed, encrypt_message,
    extract_and_decrypt, extract_message, EncryptedArtifacts, EncryptedSource, NoProgress,
    PixelBuffer, ProgressObserver, Stage, StegoError,
};
pub use stego::capacity::{capacity_chars, capacity_digits, estimate_capacity};
pub use ternary::key::{generate as generate_key, validate as validate_key};
pub use ternary::{TernaryError, TernaryKey, DIGIT_WIDTH, KEY_LEN, MAX_CODE_POINT};
