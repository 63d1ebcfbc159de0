use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Units contained in a single pack.
pub type PackSize = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackResult {
    pub size: PackSize,
    pub count: u64,
}

impl PackResult {
    pub fn items(&self) -> u64 {
        self.size as u64 * self.count
    }
}

impl std::fmt::Display for PackResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.size, self.count)
    }
}

/// Pack counts chosen for one order. Sizes with a zero count are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    counts: BTreeMap<PackSize, u64>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, size: PackSize, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(size).or_insert(0) += count;
    }

    pub fn count_of(&self, size: PackSize) -> u64 {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<PackSize, u64> {
        &self.counts
    }

    pub fn total_items(&self) -> u64 {
        self.counts
            .iter()
            .map(|(&size, &count)| size as u64 * count)
            .sum()
    }

    pub fn total_packs(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Results ordered from the largest pack size down.
    pub fn results(&self) -> Vec<PackResult> {
        self.counts
            .iter()
            .rev()
            .map(|(&size, &count)| PackResult { size, count })
            .collect()
    }
}

impl FromIterator<(PackSize, u64)> for Solution {
    fn from_iter<I: IntoIterator<Item = (PackSize, u64)>>(iter: I) -> Self {
        let mut solution = Solution::new();
        for (size, count) in iter {
            solution.add(size, count);
        }
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_are_dropped() {
        let mut sol = Solution::new();
        sol.add(250, 0);
        sol.add(500, 1);
        assert_eq!(sol.counts().len(), 1);
        assert_eq!(sol.count_of(250), 0);
    }

    #[test]
    fn test_totals() {
        let sol: Solution = [(5000, 2), (2000, 1), (250, 1)].into_iter().collect();
        assert_eq!(sol.total_items(), 12250);
        assert_eq!(sol.total_packs(), 4);
    }

    #[test]
    fn test_results_descending() {
        let sol: Solution = [(250, 1), (5000, 2), (2000, 1)].into_iter().collect();
        let sizes: Vec<PackSize> = sol.results().iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![5000, 2000, 250]);
    }

    #[test]
    fn test_pack_result_json_shape() {
        let json = serde_json::to_string(&PackResult { size: 500, count: 1 }).unwrap();
        assert_eq!(json, r#"{"size":500,"count":1}"#);
    }
}
