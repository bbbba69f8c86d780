// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod base32;
mod base58;
mod base64;
mod checksum;
mod hex;

pub use base32::*;
pub use base58::*;
pub use base64::*;
pub use checksum::*;
pub use hex::*;
