// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

pub trait ToBase64 {
    fn to_base64_std(&self) -> String;

    /// URL-safe alphabet, no padding.
    fn to_base64_url(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase64 for T {
    #[inline]
    fn to_base64_std(&self) -> String {
        STANDARD.encode(self.as_ref())
    }

    #[inline]
    fn to_base64_url(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.as_ref())
    }
}

#[derive(Debug, Copy, Clone, thiserror::Error)]
pub enum FromBase64Error {
    #[error("base64: invalid character '{0}'")]
    InvalidChar(char),

    #[error("base64: invalid length({0})")]
    InvalidLength(usize),

    #[error("base64: invalid padding")]
    InvalidPadding,
}

impl From<base64::DecodeError> for FromBase64Error {
    fn from(value: base64::DecodeError) -> Self {
        use base64::DecodeError as Error;
        match value {
            Error::InvalidLength(len) => Self::InvalidLength(len),
            Error::InvalidByte(_, ch) => Self::InvalidChar(ch as char),
            Error::InvalidPadding => Self::InvalidPadding,
            Error::InvalidLastSymbol(_, ch) => Self::InvalidChar(ch as char),
        }
    }
}

pub trait FromBase64: Sized {
    type Error;

    fn from_base64_std<T: AsRef<[u8]>>(src: &T) -> Result<Self, Self::Error>;

    fn from_base64_url<T: AsRef<[u8]>>(src: &T) -> Result<Self, Self::Error>;
}

impl FromBase64 for Vec<u8> {
    type Error = FromBase64Error;

    #[inline]
    fn from_base64_std<T: AsRef<[u8]>>(src: &T) -> Result<Vec<u8>, Self::Error> {
        STANDARD.decode(src.as_ref()).map_err(FromBase64Error::from)
    }

    #[inline]
    fn from_base64_url<T: AsRef<[u8]>>(src: &T) -> Result<Vec<u8>, Self::Error> {
        URL_SAFE_NO_PAD.decode(src.as_ref()).map_err(FromBase64Error::from)
    }
}
