// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use basecheck::encoding::{FromBase32, FromBase58, FromHex, ToBase32, ToBase58, ToHex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base32_round_trip(data in proptest::collection::vec(any::<u8>(), 1..256)) {
        let encoded = data.to_base32();
        prop_assert_eq!(Vec::from_base32(&encoded).unwrap(), data);
    }

    #[test]
    fn base32_encoded_length(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        // ceil(8n/5) characters, 5 bits each, no padding
        prop_assert_eq!(data.to_base32().len(), (data.len() * 8 + 4) / 5);
    }

    #[test]
    fn base32_checksum_round_trip(data in proptest::collection::vec(any::<u8>(), 1..128)) {
        let encoded = data.to_base32_check();
        prop_assert_eq!(Vec::from_base32_check(&encoded).unwrap(), data);
    }

    #[test]
    fn base58_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = data.to_base58();
        prop_assert_eq!(Vec::from_base58(&encoded).unwrap(), data);
    }

    #[test]
    fn base58_checksum_round_trip(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = data.to_base58_check(None, None);
        prop_assert_eq!(Vec::from_base58_check(&encoded).unwrap(), data);
    }

    #[test]
    fn base58_framed_round_trip(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let encoded = data.to_base58_check(Some(&[0x17]), Some(&[0x01]));
        let decoded = Vec::from_base58_check(&encoded).unwrap();

        prop_assert_eq!(decoded.first(), Some(&0x17));
        prop_assert_eq!(decoded.last(), Some(&0x01));
        prop_assert_eq!(&decoded[1..decoded.len() - 1], &data[..]);
    }

    #[test]
    fn base58_leading_zero_law(
        zeros in 0usize..8,
        tail in proptest::collection::vec(1u8..=255, 0..32),
    ) {
        let mut data = vec![0u8; zeros];
        data.extend(&tail);

        let encoded = data.to_base58();
        let ones = encoded.chars().take_while(|&c| c == '1').count();
        prop_assert_eq!(ones, zeros);
    }

    #[test]
    fn hex_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(Vec::from_hex(data.to_hex_lower()).unwrap(), data.clone());
        prop_assert_eq!(Vec::from_hex(data.to_hex_upper()).unwrap(), data);
    }

    #[test]
    fn encode_is_referentially_transparent(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(data.to_base32(), data.to_base32());
        prop_assert_eq!(
            data.to_base58_check(Some(&[0x07]), None),
            data.to_base58_check(Some(&[0x07]), None)
        );
    }
}
