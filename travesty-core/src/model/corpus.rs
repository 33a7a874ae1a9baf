use crate::error::{Result, TravestyError};
use crate::model::config::Order;

/// The statistical source for generation.
///
/// A `Corpus` is a flat byte sequence, built once before generation and
/// never mutated afterwards. Bytes are not interpreted as Unicode.
///
/// # Invariants
/// - Generation only starts once [`Corpus::validate`] accepted the corpus
///   for the run's order, so `len() > order` always holds in the loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
	bytes: Vec<u8>,
}

impl Corpus {
	/// Joins `words` into a corpus, each word followed by a single space.
	pub fn from_words<I, W>(words: I) -> Self
	where
		I: IntoIterator<Item = W>,
		W: AsRef<[u8]>,
	{
		let mut builder = CorpusBuilder::new();
		for word in words {
			builder.push_word(word.as_ref());
		}
		builder.into_corpus()
	}

	/// Number of bytes in the corpus.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Returns the `order` bytes starting at `offset`.
	///
	/// # Panics
	/// Panics if the window runs past the end of the corpus.
	pub fn window(&self, offset: usize, order: Order) -> &[u8] {
		&self.bytes[offset..offset + order.get()]
	}

	/// Checks that the corpus can drive a run of the given order.
	///
	/// # Errors
	/// - `EmptyCorpus` if there is no text at all
	/// - `CorpusTooShort` unless `len() > order`
	pub fn validate(&self, order: Order) -> Result<()> {
		if self.bytes.is_empty() {
			return Err(TravestyError::EmptyCorpus);
		}
		if self.bytes.len() <= order.get() {
			return Err(TravestyError::CorpusTooShort { len: self.bytes.len(), order: order.get() });
		}
		Ok(())
	}
}

/// Raw bytes, taken as-is with no word normalization.
impl From<Vec<u8>> for Corpus {
	fn from(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}
}

impl From<&str> for Corpus {
	fn from(text: &str) -> Self {
		Self { bytes: text.as_bytes().to_vec() }
	}
}

impl AsRef<[u8]> for Corpus {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}

/// Growable buffer accumulating words from one or more sources.
#[derive(Default, Debug)]
pub struct CorpusBuilder {
	bytes: Vec<u8>,
}

impl CorpusBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `word` followed by a single space.
	pub fn push_word(&mut self, word: &[u8]) {
		self.bytes.extend_from_slice(word);
		self.bytes.push(b' ');
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Finishes the corpus, rejecting an empty one.
	pub fn finish(self) -> Result<Corpus> {
		if self.bytes.is_empty() {
			return Err(TravestyError::EmptyCorpus);
		}
		Ok(self.into_corpus())
	}

	fn into_corpus(self) -> Corpus {
		Corpus { bytes: self.bytes }
	}
}
