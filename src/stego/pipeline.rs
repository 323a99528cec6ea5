// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Encrypt and decrypt pipelines.
//!
//! Encryption: text → ternary digits → keyed cipher → (red-channel embed
//! AND text frame). Decryption runs the chain backwards from either the
//! stego image or the framed text. Stages run strictly in sequence and any
//! failure aborts the rest of the chain.

use crate::stego::carrier::PixelBuffer;
use crate::stego::embed;
use crate::stego::error::StegoError;
use crate::stego::frame;
use crate::stego::progress::{self, ProgressObserver, Stage};
use crate::ternary::{cipher, transcode, TernaryKey};

/// Outputs of [`encrypt_and_embed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedArtifacts {
    /// `BEGIN_ENCRYPTED_DATA<digits>END_ENCRYPTED_DATA`.
    pub framed_text: String,
    /// The stego image, PNG-encoded, same dimensions as the cover.
    pub stego_png: Vec<u8>,
}

/// Where the ciphertext to decrypt comes from.
#[derive(Debug, Clone, Copy)]
pub enum EncryptedSource<'a> {
    /// Encoded stego image bytes (PNG or another lossless format).
    Image(&'a [u8]),
    /// Framed text containing the begin/end markers.
    Text(&'a str),
}

/// Transcode and encrypt `message` into a ciphertext digit stream.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] if `message` is empty.
/// - [`StegoError::Ternary`] if a character is outside the encodable range.
pub fn encrypt_message(message: &str, key: &TernaryKey) -> Result<Vec<u8>, StegoError> {
    let plain = plain_digits(message)?;
    Ok(cipher::encrypt(&plain, key)?)
}

/// Decrypt a ciphertext digit stream and transcode it back to text.
///
/// # Errors
/// [`StegoError::Ternary`] if the stream length is not a whole number of
/// characters or a digit is invalid.
pub fn decrypt_message(digits: &[u8], key: &TernaryKey) -> Result<String, StegoError> {
    let plain = cipher::decrypt(digits, key)?;
    Ok(transcode::decode(&plain)?)
}

fn plain_digits(message: &str) -> Result<Vec<u8>, StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }
    Ok(transcode::encode(message)?)
}

/// Encrypt `message` and embed it into a caller-owned pixel buffer.
///
/// Returns the ciphertext digits that were embedded. On error the buffer
/// is left unchanged.
pub fn embed_message(
    message: &str,
    key: &TernaryKey,
    buffer: &mut PixelBuffer,
) -> Result<Vec<u8>, StegoError> {
    let digits = encrypt_message(message, key)?;
    embed::embed(buffer, &digits)?;
    Ok(digits)
}

/// Extract and decrypt the message held by a pixel buffer.
pub fn extract_message(buffer: &PixelBuffer, key: &TernaryKey) -> Result<String, StegoError> {
    let digits = embed::extract(buffer)?;
    decrypt_message(&digits, key)
}

/// Full encryption flow: produce both the stego PNG and the framed text.
///
/// # Arguments
/// - `message`: non-empty text, every code point ≤ 2186.
/// - `key`: a validated key.
/// - `cover_bytes`: any decodable raster image.
/// - `observer`: receives stage updates.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] / [`StegoError::Ternary`] for bad text.
/// - [`StegoError::InvalidImage`] if the cover cannot be decoded.
/// - [`StegoError::CapacityExceeded`] if the cover is too small.
pub fn encrypt_and_embed(
    message: &str,
    key: &TernaryKey,
    cover_bytes: &[u8],
    mut observer: impl ProgressObserver,
) -> Result<EncryptedArtifacts, StegoError> {
    let obs: &mut dyn ProgressObserver = &mut observer;

    progress::report(obs, Stage::ConvertingToTernary, 10);
    let plain = plain_digits(message)?;
    log::debug!("message of {} chars → {} digits", message.chars().count(), plain.len());

    progress::report(obs, Stage::Encrypting, 20);
    let digits = cipher::encrypt(&plain, key)?;

    progress::report(obs, Stage::ProcessingCover, 40);
    let mut buffer = PixelBuffer::from_image_bytes(cover_bytes)?;
    log::debug!("cover is {}x{}", buffer.width(), buffer.height());

    progress::report(obs, Stage::Embedding, 60);
    embed::embed(&mut buffer, &digits)?;
    let stego_png = buffer.to_png()?;

    progress::report(obs, Stage::Framing, 80);
    let framed_text = frame::frame(&digits)?;

    progress::report(obs, Stage::Complete, 100);
    Ok(EncryptedArtifacts { framed_text, stego_png })
}

/// Full decryption flow from a stego image or framed text.
///
/// The key text is validated before anything else runs.
///
/// # Errors
/// - [`StegoError::Ternary`] with `InvalidKey` if the key is rejected.
/// - [`StegoError::MalformedFrame`] for text lacking its markers.
/// - [`StegoError::InvalidImage`] / [`StegoError::CorruptCarrier`] for
///   unreadable images.
pub fn extract_and_decrypt(
    source: EncryptedSource<'_>,
    key: &str,
    observer: impl ProgressObserver,
) -> Result<String, StegoError> {
    let key = TernaryKey::parse(key)?;
    decrypt_with_key(source, &key, observer)
}

/// [`extract_and_decrypt`] for callers that already hold a parsed key.
pub fn decrypt_with_key(
    source: EncryptedSource<'_>,
    key: &TernaryKey,
    mut observer: impl ProgressObserver,
) -> Result<String, StegoError> {
    let obs: &mut dyn ProgressObserver = &mut observer;

    let digits = match source {
        EncryptedSource::Image(bytes) => {
            progress::report(obs, Stage::ReadingImage, 20);
            let buffer = PixelBuffer::from_image_bytes(bytes)?;
            progress::report(obs, Stage::Extracting, 40);
            embed::extract(&buffer)?
        }
        EncryptedSource::Text(text) => {
            progress::report(obs, Stage::ExtractingText, 20);
            let digits = frame::unframe(text)?;
            progress::report(obs, Stage::Extracting, 40);
            digits
        }
    };
    log::debug!("recovered {} ciphertext digits", digits.len());

    progress::report(obs, Stage::Decrypting, 60);
    let plain = cipher::decrypt(&digits, key)?;

    progress::report(obs, Stage::ConvertingToText, 80);
    let text = transcode::decode(&plain)?;

    progress::report(obs, Stage::Complete, 100);
    Ok(text)
}
