use std::io::Write;
use std::process::{Command, Output, Stdio};

fn wordfreq(args: &[&str], stdin: &str) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_wordfreq"))
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();

	child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
	child.wait_with_output().unwrap()
}

#[test]
fn it_should_count_stdin() {
	let output = wordfreq(&[], "the cat sat on the mat. The Cat ran.\n");

	assert!(output.status.success());
	assert_eq!(
		String::from_utf8_lossy(&output.stdout),
		"   3 the\n   2 cat\n   1 mat\n   1 on\n   1 ran\n   1 sat\n",
	);
	assert!(output.stderr.is_empty());
}

#[test]
fn it_should_succeed_on_empty_input() {
	let output = wordfreq(&[], "");

	assert_eq!(output.status.code(), Some(0));
	assert!(output.stdout.is_empty());
}

#[test]
fn it_should_read_file_argument() {
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cli.rs");
	let output = wordfreq(&["--top", "1", path], "");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn it_should_read_stdin_for_dash() {
	let output = wordfreq(&["-"], "b a b");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "   2 b\n   1 a\n");
}

#[test]
fn it_should_exit_with_one_on_read_error() {
	let output = wordfreq(&[concat!(env!("CARGO_MANIFEST_DIR"), "/src")], "");

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("wordfreq: error while reading input"));
}

#[test]
fn it_should_exit_with_one_on_missing_file() {
	let output = wordfreq(&["/nonexistent/wordfreq-input.txt"], "");

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("wordfreq: cannot open /nonexistent/wordfreq-input.txt"));
}

#[test]
fn it_should_exit_with_one_on_long_line() {
	let output = wordfreq(&["--max-line-length", "8"], "short\nmuch too long\n");

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert_eq!(String::from_utf8_lossy(&output.stderr), "wordfreq: line 2 is longer than 8 bytes\n");
}

#[test]
fn it_should_not_count_crlf_toward_line_length() {
	let output = wordfreq(&["--max-line-length", "5"], "abcde\r\nfghij\r\n");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "   1 abcde\n   1 fghij\n");
}

#[cfg(feature = "progression")]
#[test]
fn it_should_draw_progress_on_stderr_only() {
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cli.rs");
	let plain = wordfreq(&[path], "");
	let with_bar = wordfreq(&["--progress", path], "");

	assert!(with_bar.status.success());
	assert!(!plain.stdout.is_empty());
	assert_eq!(with_bar.stdout, plain.stdout);
	assert!(plain.stderr.is_empty());
}

#[cfg(feature = "progression")]
#[test]
fn it_should_skip_progress_for_stdin() {
	let output = wordfreq(&["--progress"], "b a b");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "   2 b\n   1 a\n");
	assert!(output.stderr.is_empty());
}
