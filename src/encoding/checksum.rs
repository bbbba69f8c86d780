// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::str::FromStr;

use crate::hash::{Ripemd160, Sha1, Sha256};

/// Trailer length both the Base32 and Base58 framings agree on.
pub const CHECKSUM_LEN: usize = 4;

/// Hash backends a checksum trailer can be derived from.
///
/// SHA-1 and SHA-256 come from the standard providers; RIPEMD-160 is the
/// in-crate engine. The set matches what the codec call sites actually use.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha256,
    Ripemd160,
}

impl ChecksumAlgorithm {
    /// Hash `message` with the selected backend.
    #[inline]
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            ChecksumAlgorithm::Sha1 => message.sha1().to_vec(),
            ChecksumAlgorithm::Sha256 => message.sha256().to_vec(),
            ChecksumAlgorithm::Ripemd160 => message.ripemd160().to_vec(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("checksum: unknown hash algorithm")]
pub struct UnknownAlgorithm;

impl FromStr for ChecksumAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "ripemd" | "ripemd160" | "ripemd-160" => Ok(Self::Ripemd160),
            _ => Err(UnknownAlgorithm),
        }
    }
}

/// Truncated-hash checksum, appended to payloads before encoding and
/// re-verified after decoding.
pub trait CheckSum {
    fn check_sum(&self, algorithm: ChecksumAlgorithm, len: usize) -> Vec<u8>;
}

impl<T: AsRef<[u8]>> CheckSum for T {
    #[inline]
    fn check_sum(&self, algorithm: ChecksumAlgorithm, len: usize) -> Vec<u8> {
        let mut sum = algorithm.digest(self.as_ref());
        sum.truncate(len);
        sum
    }
}
