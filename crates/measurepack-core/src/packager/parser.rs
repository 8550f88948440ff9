use log::debug;
use serde::{Deserialize, Serialize};

use super::reader::StreamReader;

/// One length-prefixed record of the decoded stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Declared number of members.
    pub count: u8,
    /// Members in stream order, zero-padded to `count`.
    pub members: Vec<u8>,
    /// How many trailing members were missing from the stream.
    pub padding: usize,
    /// Sum of all members.
    pub sum: u32,
}

/// Iterator over the packages of a decoded stream.
pub struct Packages<'a> {
    reader: StreamReader<'a>,
}

impl Iterator for Packages<'_> {
    type Item = Package;

    fn next(&mut self) -> Option<Package> {
        if self.reader.is_exhausted() {
            return None;
        }
        let count = self.reader.read_count()?;
        let available = self.reader.read_members(usize::from(count));
        let padding = usize::from(count) - available.len();
        if padding > 0 {
            debug!(
                "package declares {count} members but only {} remain; padding {padding} with zeros",
                available.len()
            );
        }

        let mut members = available.to_vec();
        members.resize(usize::from(count), 0);
        let sum = members.iter().map(|&value| u32::from(value)).sum();

        Some(Package {
            count,
            members,
            padding,
            sum,
        })
    }
}

/// Splits `values` into packages without summing them eagerly.
///
/// Each package starts with a count slot followed by that many members.
/// Members missing at the end of the stream count as zero.
pub fn packages(values: &[u8]) -> Packages<'_> {
    Packages {
        reader: StreamReader::new(values),
    }
}

/// Reduces a decoded stream to one sum per package.
///
/// # Examples
/// ```
/// use measurepack_core::package;
///
/// assert_eq!(package(&[4, 26, 1, 0, 1, 1, 53, 1, 1]), vec![28, 53, 1]);
/// assert_eq!(package(&[3, 1, 1]), vec![2]);
/// ```
pub fn package(values: &[u8]) -> Vec<u32> {
    packages(values).map(|pkg| pkg.sum).collect()
}
