use std::collections::HashMap;

/// Occurrence count per distinct word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	counts: HashMap<String, usize>,
}

impl FrequencyTable {
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, word: String) {
		*self.counts.entry(word).or_default() += 1;
	}

	#[inline]
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Number of distinct words.
	#[inline]
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, i.e. the number of tokens added.
	pub fn total(&self) -> usize {
		self.iter().map(|(_, count)| count).sum()
	}

	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.counts.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, &count)| (word.as_str(), count))
	}
}

impl Extend<String> for FrequencyTable {
	fn extend<T: IntoIterator<Item = String>>(&mut self, words: T) {
		for word in words {
			self.add(word);
		}
	}
}

impl FromIterator<String> for FrequencyTable {
	fn from_iter<T: IntoIterator<Item = String>>(words: T) -> Self {
		let mut table = Self::new();
		table.extend(words);
		table
	}
}
