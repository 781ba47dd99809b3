use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info};

pub mod error;
pub mod frequency;
pub mod print;
pub mod rank;
pub mod tokenizer;

pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use tokenizer::{tokenize, Tokens};

pub struct Config<'a> {
	/// Longest accepted line in bytes, terminator excluded.
	pub max_line_len: Option<usize>,
	/// Words counted fewer times are left out of the table.
	pub min_count: usize,
	/// Print only this many ranked words.
	pub top: Option<usize>,
	#[cfg(feature = "progression")]
	pub progress_bar: bool,
	#[cfg(feature = "progression")]
	pub bar_config: progression::Config<'a>,
	#[cfg(not(feature = "progression"))]
	pub _phantom: std::marker::PhantomData<&'a ()>,
}

impl Default for Config<'_> {
	#[inline]
	fn default() -> Self {
		Self {
			max_line_len: None,
			min_count: 0,
			top: None,
			#[cfg(feature = "progression")]
			progress_bar: false,
			#[cfg(feature = "progression")]
			bar_config: progression::Config::default(),
			#[cfg(not(feature = "progression"))]
			_phantom: std::marker::PhantomData,
		}
	}
}

pub struct Counter<'a> {
	config: Config<'a>,
}

impl<'a> Counter<'a> {
	#[inline]
	pub fn new(config: Config<'a>) -> Self {
		Self { config }
	}

	/// `len` is the input size in bytes, used for the progress bar.
	pub fn count<R: BufRead>(&self, mut reader: R, len: Option<u64>) -> Result<FrequencyTable> {
		#[cfg(feature = "progression")]
		let bar = len
			.filter(|_| self.config.progress_bar)
			.map(|len| progression::Bar::new(len, self.config.bar_config.clone()));
		#[cfg(not(feature = "progression"))]
		let _ = len;

		let mut table = FrequencyTable::new();
		let mut line = Vec::new();
		let mut line_no = 0;

		loop {
			line.clear();
			let read = reader.read_until(b'\n', &mut line)?;

			if read == 0 {
				break;
			}

			line_no += 1;

			if let Some(limit) = self.config.max_line_len {
				let content = line
					.strip_suffix(b"\r\n")
					.or_else(|| line.strip_suffix(b"\n"))
					.unwrap_or(&line);

				if content.len() > limit {
					return Err(Error::LineTooLong { line: line_no, limit });
				}
			}

			table.extend(Tokens::new(&line));

			#[cfg(feature = "progression")]
			if let Some(bar) = &bar {
				bar.inc(read as u64);
			}
		}

		debug!("read {line_no} lines");
		info!("{} words, {} distinct", table.total(), table.len());
		Ok(table)
	}

	pub fn count_file(&self, path: &Path) -> Result<FrequencyTable> {
		let open_err = |source| Error::Open { path: path.to_owned(), source };
		let file = File::open(path).map_err(open_err)?;
		let len = file.metadata().map_err(open_err)?.len();
		self.count(BufReader::new(file), Some(len))
	}

	pub fn write<W: Write>(&self, table: &FrequencyTable, out: &mut W) -> Result<()> {
		let words = rank::rank(table)
			.into_iter()
			.filter(|word| table.count(word) >= self.config.min_count)
			.take(self.config.top.unwrap_or(usize::MAX));

		print::print(out, table, words).and_then(|()| out.flush()).map_err(Error::Write)
	}

	pub fn run<R: BufRead, W: Write>(&self, reader: R, out: &mut W) -> Result<FrequencyTable> {
		let table = self.count(reader, None)?;
		self.write(&table, out)?;
		Ok(table)
	}
}

impl Default for Counter<'_> {
	#[inline]
	fn default() -> Self {
		Counter::new(Config::default())
	}
}

#[inline]
pub fn run<R: BufRead, W: Write>(reader: R, out: &mut W, config: Config) -> Result<FrequencyTable> {
	Counter::new(config).run(reader, out)
}
