use std::cmp::Ordering;

use crate::frequency::FrequencyTable;

/// Orders words by descending count, then lexicographically.
pub fn compare(table: &FrequencyTable, a: &str, b: &str) -> Ordering {
	table.count(b).cmp(&table.count(a)).then_with(|| a.cmp(b))
}

/// Distinct words of `table` in output order.
pub fn rank(table: &FrequencyTable) -> Vec<&str> {
	let mut words: Vec<&str> = table.words().collect();
	words.sort_unstable_by(|a, b| compare(table, a, b));
	words
}
