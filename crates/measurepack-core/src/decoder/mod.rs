//! Alphabetic measurement decoding.
//!
//! The decoder maps each character of an encoded string to a small integer:
//! letters to their 1-based alphabet position, `_` to `0`. A `z` followed by
//! any character merges with it into `26 + value(follower)`, so the stream
//! can carry values up to `52`. Characters outside the alphabet are skipped
//! and reported; decoding never fails.
//!
//! The alphabet and its classifier live in `alphabet`, cursor handling in
//! `reader`, and the scanning rules in `parser`.

pub mod alphabet;
pub mod parser;
pub mod reader;

pub use parser::{DecodeReport, SkippedChar, decode, decode_report};
