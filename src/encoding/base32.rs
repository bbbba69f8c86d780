// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::encoding::checksum::{CheckSum, ChecksumAlgorithm, CHECKSUM_LEN};

/// RFC 4648 alphabet. No `=` padding is emitted or accepted; the encoded
/// length is always `ceil(8n/5)` characters.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// ASCII-to-digit table; `0xFF` marks characters outside the alphabet.
const DIGITS: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

pub trait ToBase32 {
    fn to_base32(&self) -> String;

    /// Append a 4-byte SHA-1 checksum to the payload before packing.
    fn to_base32_check(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase32 for T {
    #[inline]
    fn to_base32(&self) -> String {
        encode(self.as_ref())
    }

    fn to_base32_check(&self) -> String {
        let data = self.as_ref();
        let mut buf = Vec::with_capacity(data.len() + CHECKSUM_LEN);
        buf.extend_from_slice(data);
        buf.extend(data.check_sum(ChecksumAlgorithm::Sha1, CHECKSUM_LEN));

        encode(&buf)
    }
}

fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc = 0u32;
    let mut bits = 0u32;

    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(ALPHABET[((acc >> bits) & 0x1F) as usize]));
        }
    }

    if bits > 0 {
        // final group, zero-filled on the right
        out.push(char::from(ALPHABET[((acc << (5 - bits)) & 0x1F) as usize]));
    }

    out
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FromBase32Error {
    #[error("base32: invalid character '{0}' at position {1}")]
    InvalidChar(char, usize),

    #[error("base32: not enough data for a complete byte")]
    InvalidLength,

    #[error("base32: checksum mismatch")]
    InvalidChecksum,
}

pub trait FromBase32: Sized {
    type Error;

    fn from_base32<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;

    /// Decode, then strip and verify the trailing 4-byte SHA-1 checksum.
    fn from_base32_check<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

impl FromBase32 for Vec<u8> {
    type Error = FromBase32Error;

    #[inline]
    fn from_base32<T: AsRef<str>>(src: T) -> Result<Vec<u8>, FromBase32Error> {
        decode(src.as_ref())
    }

    fn from_base32_check<T: AsRef<str>>(src: T) -> Result<Vec<u8>, FromBase32Error> {
        let mut out = decode(src.as_ref())?;
        if out.len() < CHECKSUM_LEN {
            return Err(FromBase32Error::InvalidLength);
        }

        let given = out.split_off(out.len() - CHECKSUM_LEN);
        if given != out.check_sum(ChecksumAlgorithm::Sha1, CHECKSUM_LEN) {
            return Err(FromBase32Error::InvalidChecksum);
        }

        Ok(out)
    }
}

fn decode(src: &str) -> Result<Vec<u8>, FromBase32Error> {
    let len = src.chars().count() * 5 / 8;
    if len == 0 {
        return Err(FromBase32Error::InvalidLength);
    }

    let mut out = Vec::with_capacity(len);
    let mut acc = 0u32;
    let mut bits = 0u32;

    for (pos, ch) in src.chars().enumerate() {
        let up = ch.to_ascii_uppercase();
        let value = if up.is_ascii() { DIGITS[up as usize] } else { 0xFF };
        if value == 0xFF {
            return Err(FromBase32Error::InvalidChar(ch, pos));
        }

        acc = (acc << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    // trailing bits that don't fill a byte are the encoder's zero fill
    Ok(out)
}
