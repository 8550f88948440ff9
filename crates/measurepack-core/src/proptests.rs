use proptest::prelude::*;

use crate::decoder::alphabet::MAX_SYMBOL_VALUE;
use crate::{convert, decode, decode_report, package};

proptest! {
    #[test]
    fn prop_letters_without_z_map_one_to_one(s in "[a-yA-Y]*") {
        let decoded = decode(&s);
        prop_assert_eq!(decoded.len(), s.len());
        for (ch, value) in s.chars().zip(decoded) {
            prop_assert_eq!(value, ch.to_ascii_lowercase() as u8 - b'a' + 1);
        }
    }
}

proptest! {
    #[test]
    fn prop_convert_is_composition(s in "\\PC*") {
        prop_assert_eq!(convert(&s), package(&decode(&s)));
    }
}

proptest! {
    #[test]
    fn prop_decoded_values_in_range(s in "\\PC*") {
        prop_assert!(decode(&s).iter().all(|&v| v <= MAX_SYMBOL_VALUE));
    }
}

proptest! {
    // Without a z there is no look-ahead, so stripping skipped characters is neutral.
    #[test]
    fn prop_removing_skipped_characters_is_neutral(s in "[a-y_0-9 !-]*") {
        let filtered: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == '_')
            .collect();
        prop_assert_eq!(decode(&s), decode(&filtered));
    }
}

proptest! {
    #[test]
    fn prop_skipped_plus_values_cover_input_without_z(s in "[a-y_0-9 !-]*") {
        let report = decode_report(&s);
        prop_assert_eq!(report.values.len() + report.skipped.len(), s.chars().count());
    }
}

proptest! {
    #[test]
    fn prop_package_count_bounded_by_stream(values in proptest::collection::vec(0u8..=52, 0..64)) {
        let sums = package(&values);
        prop_assert!(sums.len() <= values.len());
        if !values.is_empty() {
            prop_assert!(!sums.is_empty());
        }
    }
}

proptest! {
    #[test]
    fn prop_package_total_bounded_by_stream_total(values in proptest::collection::vec(0u8..=52, 0..64)) {
        let stream_total: u32 = values.iter().map(|&v| u32::from(v)).sum();
        let package_total: u32 = package(&values).iter().sum();
        prop_assert!(package_total <= stream_total);
    }
}
