use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

/// Print a word frequency table, most frequent words first
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
struct Args {
	/// File to read. Reads standard input when omitted or `-`.
	file: Option<PathBuf>,

	/// Print only the N most frequent words
	#[arg(long, value_name = "N")]
	top: Option<usize>,

	/// Leave out words seen fewer than N times
	#[arg(long, value_name = "N", default_value_t = 0)]
	min_count: usize,

	/// Fail on lines longer than this many bytes
	#[arg(long, value_name = "BYTES")]
	max_line_length: Option<usize>,

	/// Show a progress bar on stderr while reading FILE
	#[cfg(feature = "progression")]
	#[arg(long)]
	progress: bool,
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let args = Args::parse();

	let counter = wordfreq::Counter::new(wordfreq::Config {
		max_line_len: args.max_line_length,
		min_count: args.min_count,
		top: args.top,
		#[cfg(feature = "progression")]
		progress_bar: args.progress,
		..Default::default()
	});

	let table = match &args.file {
		Some(path) if path.as_os_str() != "-" => counter.count_file(path),
		_ => counter.count(io::stdin().lock(), None),
	};

	let mut stdout = BufWriter::new(io::stdout().lock());

	match table.and_then(|table| counter.write(&table, &mut stdout)) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			debug!("{err:?}");
			eprintln!("wordfreq: {err}");
			ExitCode::FAILURE
		}
	}
}
