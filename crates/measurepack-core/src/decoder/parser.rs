use log::warn;
use serde::{Deserialize, Serialize};

use super::alphabet::{self, Symbol};
use super::reader::SymbolReader;

/// Character dropped by the decoder because it is not part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedChar {
    /// 0-based character index in the input.
    pub position: usize,
    /// Lower-cased character as classified.
    pub ch: char,
}

/// Decoded stream together with the characters that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub values: Vec<u8>,
    pub skipped: Vec<SkippedChar>,
}

/// Decodes `input` into its stream of values.
///
/// Letters map to `1..=26`, `_` maps to `0`, and a `z` with any follower
/// consumes that follower to produce `26 + value(follower)`. Other
/// characters are skipped with a warning.
///
/// # Examples
/// ```
/// use measurepack_core::decode;
///
/// assert_eq!(decode("dz_a_aazzaaa"), vec![4, 26, 1, 0, 1, 1, 52, 1, 1, 1]);
/// ```
pub fn decode(input: &str) -> Vec<u8> {
    decode_report(input).values
}

/// Decodes `input`, also returning the positions of skipped characters.
///
/// The follower swallowed by a `z` combination is never reported, even
/// when it is not part of the alphabet.
pub fn decode_report(input: &str) -> DecodeReport {
    let mut reader = SymbolReader::new(input);
    let mut report = DecodeReport::default();

    while let Some(symbol) = reader.peek_symbol() {
        match symbol {
            Symbol::Separator => {
                report.values.push(0);
                reader.advance(1);
            }
            Symbol::Letter(value) => match (value, reader.peek_next_symbol()) {
                (alphabet::MAX_LETTER_VALUE, Some(follower)) => {
                    report.values.push(follower.combined_value());
                    reader.advance(2);
                }
                _ => {
                    report.values.push(value);
                    reader.advance(1);
                }
            },
            Symbol::Other(ch) => {
                warn!("Skipping invalid character: {ch:?} at position {}", reader.position());
                report.skipped.push(SkippedChar {
                    position: reader.position(),
                    ch,
                });
                reader.advance(1);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{SkippedChar, decode, decode_report};

    #[test]
    fn decode_worked_example() {
        assert_eq!(decode("dz_a_aazzaaa"), vec![4, 26, 1, 0, 1, 1, 52, 1, 1, 1]);
    }

    #[test]
    fn decode_empty_and_separator() {
        assert!(decode("").is_empty());
        assert_eq!(decode("_"), vec![0]);
        assert_eq!(decode("___"), vec![0, 0, 0]);
    }

    #[test]
    fn decode_plain_letters() {
        assert_eq!(decode("abc"), vec![1, 2, 3]);
        assert_eq!(decode("ABC"), vec![1, 2, 3]);
    }

    #[test]
    fn decode_combinations() {
        assert_eq!(decode("zz"), vec![52]);
        assert_eq!(decode("za"), vec![27]);
        assert_eq!(decode("z_"), vec![26]);
        assert_eq!(decode("Za"), vec![27]);
        assert_eq!(decode("zA"), vec![27]);
    }

    #[test]
    fn decode_trailing_lone_z() {
        assert_eq!(decode("z"), vec![26]);
        assert_eq!(decode("az"), vec![1, 26]);
    }

    #[test]
    fn decode_combination_does_not_chain() {
        // second z is consumed as a follower, third starts fresh
        assert_eq!(decode("zzz"), vec![52, 26]);
        assert_eq!(decode("zzza"), vec![52, 27]);
    }

    #[test]
    fn decode_z_swallows_non_letter_follower() {
        assert_eq!(decode("z1"), vec![26]);
        assert_eq!(decode("z1a"), vec![26, 1]);
        let report = decode_report("z-");
        assert_eq!(report.values, vec![26]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn decode_skips_invalid_characters() {
        let report = decode_report("a1-b C");
        assert_eq!(report.values, vec![1, 2, 3]);
        assert_eq!(
            report.skipped,
            vec![
                SkippedChar { position: 1, ch: '1' },
                SkippedChar { position: 2, ch: '-' },
                SkippedChar { position: 4, ch: ' ' },
            ]
        );
    }

    #[test]
    fn decode_only_invalid_characters() {
        let report = decode_report("12 !");
        assert!(report.values.is_empty());
        assert_eq!(report.skipped.len(), 4);
    }
}
