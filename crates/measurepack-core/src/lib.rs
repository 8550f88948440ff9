//! measurepack core library: decoding and packaging of alphabetic
//! measurement strings.
//!
//! An encoded string is first decoded into a stream of small integers
//! (`decoder`), then read as length-prefixed records that are each reduced
//! to a sum (`packager`). Both stages are pure, deterministic and linear in
//! the input; malformed input never fails, it only yields fewer values.
//! The only I/O in this crate is the optional history store in `history`.
//!
//! Invariants:
//! - Skipped characters contribute no values to the decoded stream.
//! - Every count slot consumed produces exactly one package sum.
//! - `convert(s) == package(&decode(s))` for every input.
//!
//! # Examples
//! ```
//! use measurepack_core::{convert, decode, package};
//!
//! let decoded = decode("dz_a_aazzaaa");
//! assert_eq!(decoded, vec![4, 26, 1, 0, 1, 1, 52, 1, 1, 1]);
//! assert_eq!(package(&decoded), vec![28, 52, 1, 0]);
//! assert_eq!(convert("dz_a_aazzaaa"), vec![28, 52, 1, 0]);
//! ```

use serde::{Deserialize, Serialize};

pub mod decoder;
pub mod history;
pub mod packager;

#[cfg(test)]
mod proptests;

pub use decoder::{DecodeReport, SkippedChar, decode, decode_report};
pub use history::{
    HistoryDocument, HistoryEntry, HistoryError, HistoryLog, JsonFileHistory, MemoryHistory,
};
pub use packager::{Package, Packages, package, packages};

/// Current conversion report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Timestamp used when the current time cannot be formatted.
pub const DEFAULT_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// Result of converting one encoded string.
///
/// # Examples
/// ```
/// use measurepack_core::convert_report;
///
/// let conversion = convert_report("aa");
/// assert_eq!(conversion.decoded, vec![1, 1]);
/// assert_eq!(conversion.package_measurements, vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Report schema version (not the crate version).
    pub report_version: u32,
    /// Input exactly as converted.
    pub input: String,
    /// Decoded stream.
    pub decoded: Vec<u8>,
    /// One sum per package.
    pub package_measurements: Vec<u32>,
    /// Characters dropped during decoding, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedChar>,
}

/// Decodes `input` and packages the result.
///
/// No trimming is performed; callers strip surrounding whitespace first.
pub fn convert(input: &str) -> Vec<u32> {
    package(&decode(input))
}

/// Like [`convert`], keeping the intermediate stream and skipped characters.
pub fn convert_report(input: &str) -> Conversion {
    let DecodeReport { values, skipped } = decode_report(input);
    let package_measurements = package(&values);
    Conversion {
        report_version: REPORT_VERSION,
        input: input.to_string(),
        decoded: values,
        package_measurements,
        skipped,
    }
}
