use std::io::Write;

use tempfile::NamedTempFile;
use travesty_core::io::{load_corpus, load_corpus_from_reader};
use travesty_core::TravestyError;

fn temp_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[test]
fn whitespace_is_collapsed_to_single_spaces() {
	let corpus = load_corpus_from_reader("  the\tcat\n\nsat   on\r\nthe mat\n".as_bytes()).unwrap();
	assert_eq!(corpus.as_bytes(), b"the cat sat on the mat ");
}

#[test]
fn files_are_concatenated_in_order() {
	let first = temp_file("one two\n");
	let second = temp_file("three\n");
	let corpus = load_corpus(&[first.path(), second.path()]).unwrap();
	assert_eq!(corpus.as_bytes(), b"one two three ");
}

#[test]
fn unreadable_files_are_skipped() {
	let good = temp_file("still here");
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.txt");

	let corpus = load_corpus(&[missing.as_path(), good.path()]).unwrap();
	assert_eq!(corpus.as_bytes(), b"still here ");
}

#[test]
fn no_words_is_an_empty_corpus() {
	let blank = temp_file(" \n\t \n");
	assert!(matches!(load_corpus(&[blank.path()]), Err(TravestyError::EmptyCorpus)));
	assert!(matches!(load_corpus_from_reader(&b""[..]), Err(TravestyError::EmptyCorpus)));
}
