use std::borrow::Cow;

use crate::model::corpus::Corpus;

/// Candidate substituted when a match ends exactly at the corpus end.
pub const BOUNDARY: u8 = b' ';

/// Looks up the characters that follow a prefix in the corpus.
///
/// Implementations must agree with [`find_candidates`]: same candidates,
/// same order, duplicates kept.
pub trait CandidateFinder {
	fn candidates(&self, prefix: &[u8]) -> Cow<'_, [u8]>;
}

/// Returns the follower of every occurrence of `prefix` in `corpus`.
///
/// Occurrences may overlap: after a match at `p` the scan resumes at
/// `p + 1`. The follower of a match at `p` is `corpus[p + prefix.len()]`,
/// or [`BOUNDARY`] when the match runs to the end of the corpus.
///
/// The result is in corpus order; each occurrence contributes one entry,
/// so frequent followers weigh more in the subsequent uniform draw.
pub fn find_candidates(corpus: &[u8], prefix: &[u8]) -> Vec<u8> {
	let order = prefix.len();
	if order == 0 || corpus.len() < order {
		return Vec::new();
	}

	corpus
		.windows(order)
		.enumerate()
		.filter(|(_, window)| *window == prefix)
		.map(|(p, _)| follower(corpus, p + order))
		.collect()
}

/// Byte at `at`, or [`BOUNDARY`] past the end.
pub(crate) fn follower(corpus: &[u8], at: usize) -> u8 {
	corpus.get(at).copied().unwrap_or(BOUNDARY)
}

/// Reference finder that rescans the corpus on every lookup.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'c> {
	corpus: &'c Corpus,
}

impl<'c> Scanner<'c> {
	pub fn new(corpus: &'c Corpus) -> Self {
		Self { corpus }
	}
}

impl CandidateFinder for Scanner<'_> {
	fn candidates(&self, prefix: &[u8]) -> Cow<'_, [u8]> {
		Cow::Owned(find_candidates(self.corpus.as_bytes(), prefix))
	}
}
