use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("cannot open {}: {source}", .path.display())]
	Open { path: PathBuf, source: io::Error },

	#[error("error while reading input: {0}")]
	Read(#[from] io::Error),

	#[error("line {line} is longer than {limit} bytes")]
	LineTooLong { line: usize, limit: usize },

	#[error("error while writing output: {0}")]
	Write(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
