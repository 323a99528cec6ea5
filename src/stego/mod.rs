// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Steganographic embedding and the end-to-end pipelines.
//!
//! The ciphertext produced by [`crate::ternary`] leaves through one of two
//! transports:
//!
//! - **Image** ([`embed`]): one digit per pixel in the low 3 bits of the red
//!   channel, behind a 32-pixel length header. Output is always PNG.
//! - **Text** ([`frame`]): the digits wrapped in
//!   `BEGIN_ENCRYPTED_DATA` / `END_ENCRYPTED_DATA` markers.
//!
//! [`encrypt_and_embed`] produces both; [`extract_and_decrypt`] accepts
//! either.

pub mod capacity;
pub mod carrier;
pub mod embed;
pub mod error;
pub mod frame;
mod pipeline;
pub mod progress;

pub use carrier::{validate_dimensions, PixelBuffer, MAX_DIMENSION, MAX_PIXELS};
pub use error::{CarrierDefect, StegoError};
pub use pipeline::{
    decrypt_message, decrypt_with_key, embed_message, encrypt_and_embed, encrypt_message,
    extract_and_decrypt, extract_message, EncryptedArtifacts, EncryptedSource,
};
pub use progress::{NoProgress, ProgressObserver, Stage};
