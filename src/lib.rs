// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Byte-to-text codecs (Base32, Base58, Base64, Hex) with an optional
//! truncated-hash checksum trailer, plus a streaming RIPEMD-160 engine.
//!
//! All operations are pure, synchronous functions over caller-supplied
//! buffers. Nothing here performs I/O or holds global state; independent
//! inputs can be processed from any number of threads.

pub mod encoding;
pub mod hash;
