use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{error, info};

use crate::error::Result;
use crate::model::corpus::{Corpus, CorpusBuilder};

/// Longest word read in one piece; longer words are split.
pub const MAX_WORD_LEN: usize = 30;

/// Whitespace as understood by the C locale (`isspace`).
fn is_space(b: &u8) -> bool {
	matches!(*b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Reads whitespace-delimited words from `reader` into `builder`.
///
/// - Reads the entire input into memory
/// - Words longer than [`MAX_WORD_LEN`] bytes are cut into consecutive
///   pieces of at most that size, each pushed as its own word
///
/// Returns the number of words pushed.
pub fn read_words<R: Read>(mut reader: R, builder: &mut CorpusBuilder) -> io::Result<usize> {
	let mut contents = Vec::new();
	reader.read_to_end(&mut contents)?;

	let mut words = 0;
	for word in contents.split(is_space).filter(|w| !w.is_empty()) {
		for piece in word.chunks(MAX_WORD_LEN) {
			builder.push_word(piece);
			words += 1;
		}
	}
	Ok(words)
}

/// Builds a corpus from a single reader.
///
/// # Errors
/// Returns `EmptyCorpus` if the reader holds no words, or an I/O error.
pub fn load_corpus_from_reader<R: Read>(reader: R) -> Result<Corpus> {
	let mut builder = CorpusBuilder::new();
	read_words(reader, &mut builder)?;
	info!("read corpus: {} characters", builder.len());
	builder.finish()
}

/// Builds a corpus from every file in `paths`, in order, or from stdin
/// when `paths` is empty.
///
/// # Notes
/// - A file that cannot be opened or read is logged and skipped; the
///   remaining files are still read.
///
/// # Errors
/// Returns `EmptyCorpus` if no words were read at all.
pub fn load_corpus<P: AsRef<Path>>(paths: &[P]) -> Result<Corpus> {
	let mut builder = CorpusBuilder::new();

	if paths.is_empty() {
		read_words(io::stdin().lock(), &mut builder)?;
	}

	for path in paths {
		let path = path.as_ref();
		let read = File::open(path).and_then(|file| read_words(BufReader::new(file), &mut builder));
		if let Err(e) = read {
			error!("cannot open file \"{}\": {e}", path.display());
		}
	}

	info!("read corpus: {} characters", builder.len());
	builder.finish()
}
