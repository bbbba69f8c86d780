// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

pub trait ToHex {
    fn to_hex_lower(&self) -> String;

    fn to_hex_upper(&self) -> String;
}

#[inline]
fn encode_hex(data: &[u8], table: &[u8; 16]) -> String {
    let mut h = String::with_capacity(data.len() * 2);
    data.iter().for_each(|b| {
        h.push(char::from(table[(b >> 4) as usize]));
        h.push(char::from(table[(b & 0x0F) as usize]));
    });

    h
}

impl<T: AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex_lower(&self) -> String {
        encode_hex(self.as_ref(), LOWER)
    }

    #[inline]
    fn to_hex_upper(&self) -> String {
        encode_hex(self.as_ref(), UPPER)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FromHexError {
    #[error("hex: invalid character '{0}' at position {1}")]
    InvalidChar(char, usize),

    #[error("hex: odd number of digits")]
    OddLength,
}

pub trait FromHex: Sized {
    type Error;

    fn from_hex<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

#[inline]
fn nibble(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='f' => Some(ch as u8 - b'a' + 10),
        'A'..='F' => Some(ch as u8 - b'A' + 10),
        _ => None,
    }
}

impl FromHex for Vec<u8> {
    type Error = FromHexError;

    fn from_hex<T: AsRef<str>>(src: T) -> Result<Vec<u8>, FromHexError> {
        let src = src.as_ref();
        let mut out = Vec::with_capacity(src.len() / 2);
        let mut high: Option<u8> = None;

        for (pos, ch) in src.chars().enumerate() {
            let value = nibble(ch).ok_or(FromHexError::InvalidChar(ch, pos))?;
            high = match high {
                None => Some(value),
                Some(high) => {
                    out.push((high << 4) | value);
                    None
                }
            };
        }

        if high.is_some() {
            return Err(FromHexError::OddLength);
        }

        Ok(out)
    }
}
