use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::{Result, TravestyError};
use crate::model::candidates::{CandidateFinder, Scanner};
use crate::model::config::{Order, Strategy, TravestyConfig};
use crate::model::corpus::Corpus;
use crate::model::follow_table::FollowTable;
use crate::model::prefix::Prefix;

/// Number of candidate bytes shown in trace logs.
const TRACE_CANDIDATES: usize = 20;

/// Drives output one character at a time.
///
/// # Behavior
/// - The prefix starts as the first `order` bytes of the corpus.
/// - Each step looks up the candidates of the current prefix. When there
///   are none, the prefix jumps to a random corpus window (a reseed) until
///   one with candidates is found.
/// - The step then emits the first prefix byte, draws one candidate
///   uniformly and slides it into the prefix.
///
/// # Randomness
/// One draw per emitted character and one per reseed, all from the same
/// stream, so output is a pure function of corpus, order and seed.
pub struct Generator<'a, R> {
	corpus: &'a Corpus,
	finder: &'a dyn CandidateFinder,
	order: Order,
	prefix: Prefix,
	rng: R,
	reseed_limit: Option<usize>,
	reseeds: u64,
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator positioned at the head of the corpus.
	///
	/// # Errors
	/// Returns `EmptyCorpus` or `CorpusTooShort` if the corpus cannot
	/// sustain the given order.
	pub fn new(corpus: &'a Corpus, finder: &'a dyn CandidateFinder, order: Order, rng: R) -> Result<Self> {
		corpus.validate(order)?;
		Ok(Self {
			corpus,
			finder,
			order,
			prefix: Prefix::new(corpus.window(0, order)),
			rng,
			reseed_limit: None,
			reseeds: 0,
		})
	}

	/// Caps the number of consecutive reseeds inside a single step.
	pub fn with_reseed_limit(mut self, limit: Option<usize>) -> Self {
		self.reseed_limit = limit;
		self
	}

	pub fn prefix(&self) -> &Prefix {
		&self.prefix
	}

	/// Total number of reseeds performed so far.
	pub fn reseeds(&self) -> u64 {
		self.reseeds
	}

	/// Emits one character.
	///
	/// # Errors
	/// Returns `ReseedLimit` if a reseed limit is set and exceeded.
	pub fn step(&mut self) -> Result<u8> {
		let mut attempts = 0;
		loop {
			let candidates = self.finder.candidates(self.prefix.as_bytes());
			trace!(
				"candidates: prefix={:?} {} candidates ({:?})",
				String::from_utf8_lossy(self.prefix.as_bytes()),
				candidates.len(),
				String::from_utf8_lossy(&candidates[..candidates.len().min(TRACE_CANDIDATES)])
			);

			if !candidates.is_empty() {
				let next = candidates[self.rng.random_range(0..candidates.len())];
				return Ok(self.prefix.shift(next));
			}

			if let Some(limit) = self.reseed_limit {
				if attempts >= limit {
					return Err(TravestyError::ReseedLimit { limit });
				}
			}
			attempts += 1;
			self.reseed();
		}
	}

	/// Jumps to a random window starting in `[0, len - order)`.
	fn reseed(&mut self) {
		let offset = self.rng.random_range(0..self.corpus.len() - self.order.get());
		self.prefix.reseed(self.corpus.window(offset, self.order));
		self.reseeds += 1;
		debug!(
			"reseed: offset={} prefix={:?}",
			offset,
			String::from_utf8_lossy(self.prefix.as_bytes())
		);
	}

	/// Emits exactly `length` characters.
	///
	/// A zero length performs no random draws.
	pub fn generate(&mut self, length: usize) -> Result<Vec<u8>> {
		let mut output = Vec::with_capacity(length);
		for _ in 0..length {
			output.push(self.step()?);
		}
		Ok(output)
	}
}

/// Generates `config.length` characters from `corpus`.
///
/// Validates the corpus against the order, seeds a xoshiro256** stream
/// from [`TravestyConfig::effective_seed`], builds the configured finder
/// and runs the generator. The caller appends the trailing newline.
///
/// # Errors
/// - `EmptyCorpus` / `CorpusTooShort` for an unusable corpus
/// - `ReseedLimit` if the configured reseed cap is exceeded
pub fn travesty(corpus: &Corpus, config: &TravestyConfig) -> Result<Vec<u8>> {
	let order = config.order();
	corpus.validate(order)?;

	let rng = Xoshiro256StarStar::seed_from_u64(config.effective_seed());
	let finder: Box<dyn CandidateFinder + '_> = match config.strategy {
		Strategy::Scan => Box::new(Scanner::new(corpus)),
		Strategy::Indexed => Box::new(FollowTable::build(corpus, order)),
	};

	let mut generator = Generator::new(corpus, finder.as_ref(), order, rng)?.with_reseed_limit(config.reseed_limit);
	let output = generator.generate(config.length)?;
	debug!("generated {} characters with {} reseeds", output.len(), generator.reseeds());
	Ok(output)
}
