use proptest::prelude::*;

use uniconv::{utf16_length, utf16_to_utf8, utf8_length, utf8_to_utf16};

proptest! {
    #[test]
    fn well_formed_utf16_round_trips(text in ".*") {
        let utf16: Vec<u16> = text.encode_utf16().collect();

        let utf8 = utf16_to_utf8(&utf16).unwrap();
        prop_assert_eq!(&utf8[..], text.as_bytes());

        let utf16_again = utf8_to_utf16(&utf8).unwrap();
        prop_assert_eq!(utf16_again, utf16);
    }

    #[test]
    fn measured_lengths_match_the_standard_library(text in ".*") {
        let utf16: Vec<u16> = text.encode_utf16().collect();
        prop_assert_eq!(utf8_length(&utf16).unwrap(), text.len());
        prop_assert_eq!(utf16_length(text.as_bytes()).unwrap(), utf16.len());
    }

    #[test]
    fn arbitrary_bytes_either_fail_or_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(units) = utf8_to_utf16(&bytes) {
            prop_assert_eq!(utf16_to_utf8(&units).unwrap(), bytes);
        }
    }

    #[test]
    fn arbitrary_units_either_fail_or_round_trip(units in proptest::collection::vec(any::<u16>(), 0..64)) {
        if let Ok(bytes) = utf16_to_utf8(&units) {
            prop_assert_eq!(utf8_to_utf16(&bytes).unwrap(), units);
        }
    }
}
