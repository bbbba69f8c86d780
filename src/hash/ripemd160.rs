// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Streaming RIPEMD-160, implemented from the published algorithm rather
//! than delegating to a platform provider.
//!
//! ```
//! use basecheck::hash::ripemd160::Ripemd160;
//!
//! let mut h = Ripemd160::new();
//! h.update(b"abc");
//! let digest = h.finalize();
//! assert_eq!(digest[0], 0x8e);
//! ```

use core::fmt;

const BLOCK_LEN: usize = 64;

/// Initial register values, shared with MD4/MD5/SHA-1 lineage plus `C3D2E1F0`.
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Per-round additive constants. The left line's first round and the right
/// line's last round add nothing.
const K_LEFT: [u32; 5] = [0x00000000, 0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xA953FD4E];
const K_RIGHT: [u32; 5] = [0x50A28BE6, 0x5C4DD124, 0x6D703EF3, 0x7A6D76E9, 0x00000000];

/// Message-word order per step.
const IDX_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8, //
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12, //
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2, //
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];
const IDX_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12, //
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2, //
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13, //
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14, //
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

/// Left-rotation amount per step.
const ROL_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8, //
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12, //
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5, //
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12, //
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];
const ROL_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6, //
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11, //
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5, //
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8, //
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// Nonlinear round function. The left line walks rounds 0..=4, the right
/// line walks them in reverse.
#[inline]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

/// Mix one 64-byte block into the running registers. `block` must hold at
/// least `BLOCK_LEN` bytes.
fn compress(h: &mut [u32; 5], block: &[u8]) {
    let mut x = [0u32; 16];
    for (i, word) in x.iter_mut().enumerate() {
        let j = i * 4;
        *word = u32::from_le_bytes([block[j], block[j + 1], block[j + 2], block[j + 3]]);
    }

    let (mut a, mut b, mut c, mut d, mut e) = (h[0], h[1], h[2], h[3], h[4]);
    let (mut a2, mut b2, mut c2, mut d2, mut e2) = (h[0], h[1], h[2], h[3], h[4]);

    for step in 0..80 {
        let round = step / 16;

        let t = a
            .wrapping_add(f(round, b, c, d))
            .wrapping_add(x[IDX_LEFT[step]])
            .wrapping_add(K_LEFT[round])
            .rotate_left(ROL_LEFT[step])
            .wrapping_add(e);
        a = e;
        e = d;
        d = c.rotate_left(10);
        c = b;
        b = t;

        let t = a2
            .wrapping_add(f(4 - round, b2, c2, d2))
            .wrapping_add(x[IDX_RIGHT[step]])
            .wrapping_add(K_RIGHT[round])
            .rotate_left(ROL_RIGHT[step])
            .wrapping_add(e2);
        a2 = e2;
        e2 = d2;
        d2 = c2.rotate_left(10);
        c2 = b2;
        b2 = t;
    }

    // Cross-combination of the two lines; the rotated pairing here is the
    // defining structural property of RIPEMD-160.
    let t = h[1].wrapping_add(c).wrapping_add(d2);
    h[1] = h[2].wrapping_add(d).wrapping_add(e2);
    h[2] = h[3].wrapping_add(e).wrapping_add(a2);
    h[3] = h[4].wrapping_add(a).wrapping_add(b2);
    h[4] = h[0].wrapping_add(b).wrapping_add(c2);
    h[0] = t;
}

/// Incremental RIPEMD-160 state.
///
/// Feed any number of `update` calls with buffers of any size; the digest
/// depends only on the concatenated input. `finalize` consumes the state,
/// so no further input can be fed without building a fresh one (or calling
/// `reset` beforehand and keeping a clone).
///
/// The state is exclusively owned by one logical caller; share it across
/// threads only behind external synchronization, like any `&mut`-driven
/// value.
#[derive(Clone)]
pub struct Ripemd160 {
    h: [u32; 5],
    buf: [u8; BLOCK_LEN],
    buffered: usize,
    /// Total bytes fed, modulo 2^64 as the padding scheme requires.
    total: u64,
}

impl Ripemd160 {
    #[inline]
    pub fn new() -> Self {
        Self { h: H0, buf: [0; BLOCK_LEN], buffered: 0, total: 0 }
    }

    /// Drop all fed input and return to the initial register values.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let mut data = data.as_ref();
        self.total = self.total.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = data.len().min(BLOCK_LEN - self.buffered);
            self.buf[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.h, &self.buf);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in blocks.by_ref() {
            compress(&mut self.h, block);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Apply the Merkle-Damgard padding and emit the 20-byte digest.
    pub fn finalize(mut self) -> [u8; 20] {
        let bit_len = self.total.wrapping_mul(8);

        self.update([0x80u8]);
        while self.buffered != BLOCK_LEN - 8 {
            self.update([0u8]);
        }
        self.update(bit_len.to_le_bytes());

        let mut digest = [0u8; 20];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.h) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }
}

impl Default for Ripemd160 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ripemd160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160 { .. }")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn digest_of(input: &[u8]) -> String {
        let mut h = Ripemd160::new();
        h.update(input);
        hex::encode(h.finalize())
    }

    #[test]
    fn test_published_vectors() {
        // https://homes.esat.kuleuven.be/~bosselae/ripemd160.html
        let pairs = [
            ("", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
            ("a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"),
            ("abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
            ("message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "f71c27109c692c1b56bbdceb5b9d2865b3708dbc",
            ),
            (
                "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "12a053384a9c0c88e405a06c27dcf49ada62eb2b",
            ),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "b0e20b6e3116640286ed3a87a5713079b21f5189",
            ),
        ];

        for (input, expected) in pairs {
            assert_eq!(digest_of(input.as_bytes()), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_repeated_input() {
        let input = "1234567890".repeat(8);
        assert_eq!(digest_of(input.as_bytes()), "9b752e45573d4b39f4dbd3323cab82bf63326bfb");

        let input = "a".repeat(1_000_000);
        assert_eq!(digest_of(input.as_bytes()), "52783243c1697bdbe16d37f97f68f08325dc1528");
    }

    #[test]
    fn test_chunked_updates_match_one_shot() {
        let message: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
        let whole = {
            let mut h = Ripemd160::new();
            h.update(&message);
            h.finalize()
        };

        for chunk_size in [1, 3, 7, 63, 64, 65, 200] {
            let mut h = Ripemd160::new();
            for chunk in message.chunks(chunk_size) {
                h.update(chunk);
            }
            assert_eq!(h.finalize(), whole, "chunk size {}", chunk_size);
        }

        // zero-length updates are no-ops
        let mut h = Ripemd160::new();
        h.update([0u8; 0]);
        h.update(&message);
        h.update([0u8; 0]);
        assert_eq!(h.finalize(), whole);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut h = Ripemd160::new();
        h.update(b"garbage fed before reset");
        h.reset();
        h.update(b"abc");
        assert_eq!(hex::encode(h.finalize()), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }
}
