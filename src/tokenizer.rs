/// Lowercase runs of ASCII letters in one line.
pub struct Tokens<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Tokens<'a> {
	#[inline]
	pub fn new(line: &'a [u8]) -> Self {
		Self { bytes: line, pos: 0 }
	}
}

impl Iterator for Tokens<'_> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		let mut start = self.pos;

		while self.pos <= self.bytes.len() {
			let end = self.pos;
			self.pos += 1;

			if self.bytes.get(end).is_some_and(|&byte| is_alpha(byte)) {
				continue;
			}

			if start < end {
				let word = self.bytes[start..end].iter().map(|&byte| char::from(byte.to_ascii_lowercase())).collect();
				return Some(word);
			}

			start = self.pos;
		}

		None
	}
}

#[inline]
pub fn is_alpha(byte: u8) -> bool {
	byte.is_ascii_alphabetic()
}

pub fn tokenize(text: &str) -> Vec<String> {
	text.lines().flat_map(|line| Tokens::new(line.as_bytes())).collect()
}
