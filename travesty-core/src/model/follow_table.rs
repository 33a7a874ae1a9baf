use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::mpsc;
use std::thread;

use log::debug;

use super::candidates::{CandidateFinder, follower};
use super::config::Order;
use super::corpus::Corpus;

/// Below this many windows the table is built on the calling thread.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Chunks per CPU when building in parallel.
const CHUNK_FACTOR: usize = 8;

/// Index from every order-length window of a corpus to its followers.
///
/// For each distinct window the table stores the byte that follows each
/// of its occurrences, in corpus order, with the same boundary space
/// substitution as [`find_candidates`](super::candidates::find_candidates).
/// A lookup returns exactly what a brute-force scan would.
///
/// # Invariants
/// - Every key is `order` bytes long
/// - Every follower list is non-empty
/// - The total number of followers is `corpus.len() - order + 1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowTable {
	order: usize,
	followers: HashMap<Vec<u8>, Vec<u8>>,
}

impl FollowTable {
	fn empty(order: usize) -> Self {
		Self { order, followers: HashMap::new() }
	}

	/// Builds the table for `corpus` at the given order.
	///
	/// # Behavior
	/// - Small corpora are indexed sequentially.
	/// - Larger ones are split into `num_cpus * CHUNK_FACTOR` ranges of
	///   window offsets, indexed on scoped threads, then merged in range
	///   order so follower lists keep corpus order.
	pub fn build(corpus: &Corpus, order: Order) -> Self {
		let bytes = corpus.as_bytes();
		let order = order.get();
		if bytes.len() < order {
			return Self::empty(order);
		}

		let windows = bytes.len() - order + 1;
		let table = if windows < PARALLEL_THRESHOLD {
			Self::build_range(bytes, order, 0..windows)
		} else {
			Self::build_parallel(bytes, order, windows)
		};

		debug!("follow table: order={} {} prefixes over {} windows", order, table.len(), windows);
		table
	}

	fn build_parallel(bytes: &[u8], order: usize, windows: usize) -> Self {
		let chunks = num_cpus::get() * CHUNK_FACTOR;
		let chunk_size = windows.div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for (index, start) in (0..windows).step_by(chunk_size).enumerate() {
				let tx = tx.clone();
				let end = (start + chunk_size).min(windows);
				scope.spawn(move || {
					// rx lives until every sender is gone, send cannot fail
					let _ = tx.send((index, Self::build_range(bytes, order, start..end)));
				});
			}
		});
		drop(tx);

		let mut partials: Vec<(usize, FollowTable)> = rx.into_iter().collect();
		partials.sort_unstable_by_key(|(index, _)| *index);

		let mut table = Self::empty(order);
		for (_, partial) in partials {
			table.absorb(partial);
		}
		table
	}

	/// Indexes the windows starting at each offset of `offsets`.
	fn build_range(bytes: &[u8], order: usize, offsets: Range<usize>) -> Self {
		let mut table = Self::empty(order);
		for p in offsets {
			let window = &bytes[p..p + order];
			let next = follower(bytes, p + order);
			match table.followers.get_mut(window) {
				Some(followers) => followers.push(next),
				None => {
					table.followers.insert(window.to_vec(), vec![next]);
				}
			}
		}
		table
	}

	/// Appends the followers of a table built over later offsets.
	fn absorb(&mut self, other: Self) {
		debug_assert_eq!(self.order, other.order);
		for (window, mut followers) in other.followers {
			self.followers.entry(window).or_default().append(&mut followers);
		}
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.followers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.followers.is_empty()
	}
}

impl CandidateFinder for FollowTable {
	fn candidates(&self, prefix: &[u8]) -> Cow<'_, [u8]> {
		Cow::Borrowed(self.followers.get(prefix).map_or(&[][..], Vec::as_slice))
	}
}
