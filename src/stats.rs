use std::collections::HashMap;

/// Occurrence count per address string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IpCounts {
    counts: HashMap<String, u64>,
}

impl IpCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, address: &str) {
        if let Some(count) = self.counts.get_mut(address) {
            *count += 1;
        } else {
            self.counts.insert(address.to_string(), 1);
        }
    }

    pub fn get(&self, address: &str) -> u64 {
        self.counts.get(address).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(address, count)| (address.as_str(), *count))
    }

    /// Adds every count from `other` into `self`.
    pub fn merge(&mut self, other: IpCounts) {
        for (address, count) in other.counts {
            *self.counts.entry(address).or_insert(0) += count;
        }
    }
}

impl<'a> Extend<&'a str> for IpCounts {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for address in iter {
            self.record(address);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_scanned: u64,
    pub candidates_matched: u64,
    pub candidates_rejected: u64,
}

#[derive(Debug, Default)]
pub struct AnalysisResult {
    pub counts: IpCounts,
    pub stats: ScanStats,
}
