//! Output destination classification.

use sidechain_types::ProgramHash;

/// An output may pay to any recognised address type, or to the empty
/// program hash (no destination restriction).
pub fn is_recognized_destination(hash: &ProgramHash) -> bool {
    hash.prefix().is_some() || hash.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidechain_types::PrefixType;

    #[test]
    fn every_known_prefix_is_recognized() {
        for prefix in PrefixType::ALL {
            assert!(is_recognized_destination(&ProgramHash::from_parts(
                prefix, [9u8; 20]
            )));
        }
    }

    #[test]
    fn empty_sentinel_is_recognized() {
        assert!(is_recognized_destination(&ProgramHash::EMPTY));
    }

    #[test]
    fn zero_prefix_with_nonzero_body_is_not() {
        let mut bytes = [0u8; 21];
        bytes[20] = 1;
        assert!(!is_recognized_destination(&ProgramHash::new(bytes)));
    }

    #[test]
    fn unknown_prefix_is_not() {
        let mut bytes = [5u8; 21];
        bytes[0] = 0x99;
        assert!(!is_recognized_destination(&ProgramHash::new(bytes)));
    }
}
