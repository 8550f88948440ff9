//! Length-prefixed packaging of a decoded stream.
//!
//! The stream is read as consecutive `(count, member × count)` records and
//! each record is reduced to the sum of its members. A record that runs off
//! the end of the stream is completed with zeros, so packaging never fails
//! and always makes forward progress (the count slot itself is consumed).

pub mod parser;
pub mod reader;

pub use parser::{Package, Packages, package, packages};
