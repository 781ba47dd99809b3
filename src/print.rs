use std::io::{self, Write};

use crate::frequency::FrequencyTable;

/// Writes one `%4d %s` line per word, in the given order.
pub fn print<'a, W, I>(out: &mut W, table: &FrequencyTable, words: I) -> io::Result<()>
where
	W: Write,
	I: IntoIterator<Item = &'a str>,
{
	for word in words {
		writeln!(out, "{:>4} {word}", table.count(word))?;
	}

	Ok(())
}
