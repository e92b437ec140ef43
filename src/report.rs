use std::fmt;
use std::io::{self, Write};

use crate::{args::SortMode, stats::IpCounts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub address: String,
    pub count: u64,
}

impl ReportEntry {
    pub fn new(address: impl Into<String>, count: u64) -> Self {
        Self {
            address: address.into(),
            count,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.address)
    }
}

/// Orders the counted addresses and keeps the first `top` of them.
///
/// Addresses compare as plain text in both modes, so "10.0.0.1" sorts
/// before "9.0.0.1". A `top` of zero or less keeps everything.
pub fn build_report(counts: &IpCounts, sort: SortMode, top: i64) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = counts
        .iter()
        .map(|(address, count)| ReportEntry::new(address, count))
        .collect();

    match sort {
        SortMode::Count => entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.address.cmp(&b.address))
        }),
        SortMode::Ip => entries.sort_by(|a, b| a.address.cmp(&b.address)),
    }

    if top > 0 {
        entries.truncate(usize::try_from(top).unwrap_or(usize::MAX));
    }

    entries
}

pub fn write_report<W: Write>(mut out: W, entries: &[ReportEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    out.flush()
}
