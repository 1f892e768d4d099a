use std::collections::HashMap;

use crate::date::TargetDate;
use crate::record::SkipReason;

/// Per-cookie occurrence counts, remembering the order cookies were first seen.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cookie: String) {
        match self.index.get(&cookie) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(cookie.clone(), self.counts.len());
                self.counts.push((cookie, 1));
            }
        }
    }

    pub fn count(&self, cookie: &str) -> u64 {
        self.index
            .get(cookie)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count in the table, zero when nothing was recorded.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Every cookie tied at the highest count, in first-seen order.
    pub fn most_frequent(&self) -> Vec<String> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .filter(|(_, n)| *n == max)
            .map(|(cookie, _)| cookie.clone())
            .collect()
    }
}

/// A row left out of the tally, with its 1-based line in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub timestamp: String,
    pub reason: SkipReason,
}

/// Outcome of one pass over a cookie log.
#[derive(Debug)]
pub struct Analysis {
    pub target_date: TargetDate,
    pub most_active: Vec<String>,
    pub max_count: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub skipped: Vec<SkippedRow>,
    /// Set when the scan stopped early on an unexpected error.
    pub interrupted: Option<String>,
}

impl Analysis {
    pub fn cookies(&self) -> &[String] {
        &self.most_active
    }

    pub fn into_cookies(self) -> Vec<String> {
        self.most_active
    }

    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cookies: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for cookie in cookies {
            table.record(cookie.to_string());
        }
        table
    }

    #[test]
    fn empty_table_has_no_winner() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert!(table.most_frequent().is_empty());
    }

    #[test]
    fn single_winner() {
        let table = table(&["AtY0", "AtY0", "SAZu"]);
        assert_eq!(table.count("AtY0"), 2);
        assert_eq!(table.count("SAZu"), 1);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.most_frequent(), vec!["AtY0"]);
    }

    #[test]
    fn counts_go_past_u32() {
        let mut table = table(&["busy"]);
        table.counts[0].1 = u64::from(u32::MAX);
        table.record("busy".to_string());
        assert_eq!(table.count("busy"), u64::from(u32::MAX) + 1);
        assert_eq!(table.most_frequent(), vec!["busy"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let table = table(&["cookieB", "cookieA", "cookieC", "cookieA", "cookieB"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_count(), 2);
        assert_eq!(table.most_frequent(), vec!["cookieB", "cookieA"]);
    }
}
