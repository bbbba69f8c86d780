// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::encoding::checksum::{CheckSum, ChecksumAlgorithm, CHECKSUM_LEN};

/// Bitcoin-style alphabet: `0`, `O`, `I` and `l` are excluded.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

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

pub trait ToBase58 {
    fn to_base58(&self) -> String;

    /// Frame the payload as `prefix || payload || postfix`, append a 4-byte
    /// SHA-256 checksum computed over the framed bytes, then encode.
    fn to_base58_check(&self, prefix: Option<&[u8]>, postfix: Option<&[u8]>) -> String;
}

impl<T: AsRef<[u8]>> ToBase58 for T {
    #[inline]
    fn to_base58(&self) -> String {
        encode(self.as_ref())
    }

    fn to_base58_check(&self, prefix: Option<&[u8]>, postfix: Option<&[u8]>) -> String {
        let data = self.as_ref();
        let framed = prefix.map_or(0, <[u8]>::len) + data.len() + postfix.map_or(0, <[u8]>::len);
        let mut buf = Vec::with_capacity(framed + CHECKSUM_LEN);

        if let Some(prefix) = prefix {
            buf.extend_from_slice(prefix);
        }
        buf.extend_from_slice(data);
        if let Some(postfix) = postfix {
            buf.extend_from_slice(postfix);
        }

        let check = buf.check_sum(ChecksumAlgorithm::Sha256, CHECKSUM_LEN);
        buf.extend(check);

        encode(&buf)
    }
}

fn encode(data: &[u8]) -> String {
    // leading zero bytes carry no big-integer magnitude; each one becomes
    // a literal '1' in front of the digits
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    let radix = BigUint::from(58u32);
    let mut acc = BigUint::from_bytes_be(data);
    let mut digits = Vec::new(); // least significant first

    while !acc.is_zero() {
        let (quotient, remainder) = acc.div_rem(&radix);
        let idx = remainder.iter_u32_digits().next().unwrap_or(0) as usize;
        digits.push(ALPHABET[idx]);
        acc = quotient;
    }

    std::iter::repeat('1')
        .take(zeros)
        .chain(digits.iter().rev().map(|&b| char::from(b)))
        .collect()
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FromBase58Error {
    #[error("base58: invalid character '{0}' at position {1}")]
    InvalidChar(char, usize),

    #[error("base58: not enough data for the checksum trailer")]
    InvalidLength,

    #[error("base58: checksum mismatch")]
    InvalidChecksum,
}

pub trait FromBase58: Sized {
    type Error;

    fn from_base58<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;

    /// Decode, then strip and verify the trailing 4-byte SHA-256 checksum.
    ///
    /// Any prefix/postfix framing the encoder added stays in the returned
    /// payload; callers strip their own framing bytes.
    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

impl FromBase58 for Vec<u8> {
    type Error = FromBase58Error;

    #[inline]
    fn from_base58<T: AsRef<str>>(src: T) -> Result<Vec<u8>, FromBase58Error> {
        decode(src.as_ref())
    }

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Vec<u8>, FromBase58Error> {
        let mut out = decode(src.as_ref())?;
        if out.len() < CHECKSUM_LEN {
            return Err(FromBase58Error::InvalidLength);
        }

        let given = out.split_off(out.len() - CHECKSUM_LEN);
        if given != out.check_sum(ChecksumAlgorithm::Sha256, CHECKSUM_LEN) {
            return Err(FromBase58Error::InvalidChecksum);
        }

        Ok(out)
    }
}

fn decode(src: &str) -> Result<Vec<u8>, FromBase58Error> {
    let radix = BigUint::from(58u32);
    let mut acc = BigUint::zero();

    for (pos, ch) in src.chars().enumerate() {
        let digit = if ch.is_ascii() { DIGITS[ch as usize] } else { 0xFF };
        if digit == 0xFF {
            return Err(FromBase58Error::InvalidChar(ch, pos));
        }

        acc = acc * &radix + BigUint::from(digit);
    }

    // one leading zero byte per leading '1', then the minimal big-endian
    // representation (which is empty for zero)
    let zeros = src.chars().take_while(|&c| c == '1').count();
    let mut out = vec![0u8; zeros];
    if !acc.is_zero() {
        out.extend(acc.to_bytes_be());
    }

    Ok(out)
}
