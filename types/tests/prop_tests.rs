use proptest::prelude::*;

use sidechain_types::{Fixed64, PrefixType, ProgramHash, Uint256};

proptest! {
    /// ProgramHash ordering agrees with byte-slice ordering.
    #[test]
    fn program_hash_order_is_bytewise(
        a in prop::array::uniform21(0u8..),
        b in prop::array::uniform21(0u8..),
    ) {
        let (ha, hb) = (ProgramHash::new(a), ProgramHash::new(b));
        prop_assert_eq!(ha.cmp(&hb), a.as_slice().cmp(b.as_slice()));
    }

    /// ProgramHash::is_empty is true only for all-zero bytes.
    #[test]
    fn program_hash_is_empty_correct(bytes in prop::array::uniform21(0u8..)) {
        prop_assert_eq!(ProgramHash::new(bytes).is_empty(), bytes == [0u8; 21]);
    }

    /// A prefix is decoded exactly when the leading byte is a known type.
    #[test]
    fn program_hash_prefix_decoding(bytes in prop::array::uniform21(0u8..)) {
        let known = PrefixType::ALL.iter().any(|p| p.as_byte() == bytes[0]);
        prop_assert_eq!(ProgramHash::new(bytes).prefix().is_some(), known);
    }

    /// Uint256 bincode serialization preserves the bytes.
    #[test]
    fn uint256_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = Uint256::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: Uint256 = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// Fixed64: checked_add(a, b) == Some(a + b) when no overflow.
    #[test]
    fn fixed64_checked_add(a in -(i64::MAX / 2)..i64::MAX / 2, b in -(i64::MAX / 2)..i64::MAX / 2) {
        prop_assert_eq!(Fixed64::new(a).checked_add(Fixed64::new(b)), Some(Fixed64::new(a + b)));
    }

    /// Fixed64 display parses back to the same raw value.
    #[test]
    fn fixed64_display_is_exact(raw in 0i64..i64::MAX) {
        let text = Fixed64::new(raw).to_string();
        let digits: String = text.chars().filter(|c| *c != '.').collect();
        prop_assert_eq!(digits.parse::<i64>().unwrap(), raw);
    }
}
