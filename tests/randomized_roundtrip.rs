// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Seeded randomised round-trip tests for the transcoder, cipher and embedder.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ternstego::stego::embed::{embed, extract, HEADER_PIXELS};
use ternstego::stego::frame::{frame, unframe};
use ternstego::{
    decrypt_message, encrypt_message, PixelBuffer, TernaryKey, KEY_LEN, MAX_CODE_POINT,
};

fn random_message(rng: &mut ChaCha20Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from_u32(rng.gen_range(0..=MAX_CODE_POINT)).unwrap())
        .collect()
}

fn random_key(rng: &mut ChaCha20Rng) -> TernaryKey {
    let symbols: String = (0..KEY_LEN)
        .map(|_| ['-', '0', '1'][rng.gen_range(0..3)])
        .collect();
    TernaryKey::parse(&symbols).unwrap()
}

fn random_buffer(rng: &mut ChaCha20Rng, width: u32, height: u32) -> PixelBuffer {
    let mut data = vec![0u8; (width * height * 4) as usize];
    rng.fill(&mut data[..]);
    PixelBuffer::new(width, height, data).unwrap()
}

#[test]
fn message_cipher_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7e57);
    for len in [1, 2, 13, 312, 400] {
        let message = random_message(&mut rng, len);
        let key = random_key(&mut rng);
        let digits = encrypt_message(&message, &key).unwrap();
        assert_eq!(digits.len(), len * 7);
        assert_eq!(decrypt_message(&digits, &key).unwrap(), message, "len {len}");
    }
}

#[test]
fn long_message_wraps_key() {
    // 400 chars → 2800 digits, longer than the 2187-symbol key.
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let message = random_message(&mut rng, 400);
    let key = TernaryKey::generate("short seed").unwrap();
    let digits = encrypt_message(&message, &key).unwrap();
    assert!(digits.len() > KEY_LEN);
    assert_eq!(decrypt_message(&digits, &key).unwrap(), message);
}

#[test]
fn embed_extract_random_buffers() {
    let mut rng = ChaCha20Rng::seed_from_u64(1234);
    for (w, h) in [(8, 4), (10, 10), (37, 23), (64, 64)] {
        let mut buffer = random_buffer(&mut rng, w, h);
        let capacity = buffer.pixel_count() - HEADER_PIXELS;
        let len = rng.gen_range(0..=capacity);
        let digits: Vec<u8> = (0..len).map(|_| rng.gen_range(0..3)).collect();

        let before = buffer.clone();
        embed(&mut buffer, &digits).unwrap();
        assert_eq!(extract(&buffer).unwrap(), digits, "{w}x{h}");

        // Only red samples of header + payload pixels may differ.
        for (i, (a, b)) in before.as_raw().iter().zip(buffer.as_raw()).enumerate() {
            let pixel = i / 4;
            if i % 4 != 0 || pixel >= HEADER_PIXELS + len {
                assert_eq!(a, b, "sample {i} changed");
            }
        }
    }
}

#[test]
fn framing_random_digits() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for len in [0, 1, 7, 500] {
        let digits: Vec<u8> = (0..len).map(|_| rng.gen_range(0..3)).collect();
        assert_eq!(unframe(&frame(&digits).unwrap()).unwrap(), digits);
    }
}
