use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use crate::error::{Result, TravestyError};

/// Smallest accepted order.
pub const ORDER_MIN: usize = 2;

/// Largest accepted order (amount of lookahead).
pub const ORDER_MAX: usize = 16;

/// Travesty order: the prefix length and the lookahead offset.
///
/// # Invariants
/// - `ORDER_MIN <= order <= ORDER_MAX`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Order(usize);

impl Order {
	/// Creates a validated order.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order` is outside `[ORDER_MIN, ORDER_MAX]`.
	pub fn new(order: usize) -> Result<Self> {
		if !(ORDER_MIN..=ORDER_MAX).contains(&order) {
			return Err(TravestyError::InvalidOrder { order });
		}
		Ok(Self(order))
	}

	pub fn get(self) -> usize {
		self.0
	}
}

impl Default for Order {
	fn default() -> Self {
		Self(3)
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// How candidates are looked up at each step.
///
/// Both strategies return the same candidates in the same order, so the
/// generated text for a given seed does not depend on the choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
	/// Rescan the whole corpus for every output character.
	Scan,
	/// Build a follow table once and look prefixes up in it.
	#[default]
	Indexed,
}

/// Parameters of a single travesty run.
///
/// # Responsibilities
/// - Hold the validated order
/// - Hold the output length, seed and lookup strategy
/// - Resolve a zero seed to the current time
#[derive(Clone, Debug)]
pub struct TravestyConfig {
	/// Travesty order, validated through `set_order`.
	order: Order,

	/// Number of characters to generate.
	pub length: usize,

	/// Random seed; `0` means "use the current time".
	pub seed: u64,

	/// Candidate lookup strategy.
	pub strategy: Strategy,

	/// Maximum consecutive reseeds within one step, `None` for no cap.
	pub reseed_limit: Option<usize>,
}

impl Default for TravestyConfig {
	fn default() -> Self {
		Self { order: Order::default(), length: 1000, seed: 0, strategy: Strategy::default(), reseed_limit: None }
	}
}

impl TravestyConfig {
	/// Creates a configuration with the given order and defaults elsewhere.
	///
	/// # Errors
	/// Returns `InvalidOrder` if the order is out of range.
	pub fn new(order: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_order(order)?;
		Ok(config)
	}

	/// Returns the current order.
	pub fn order(&self) -> Order {
		self.order
	}

	/// Sets the order.
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		self.order = Order::new(order)?;
		Ok(())
	}

	/// Returns the seed used to initialise the random stream.
	///
	/// A zero seed is replaced by the number of seconds since the UNIX
	/// epoch. The returned value is never zero and is logged.
	pub fn effective_seed(&self) -> u64 {
		let seed = if self.seed != 0 {
			self.seed
		} else {
			SystemTime::now()
				.duration_since(UNIX_EPOCH)
				.map(|d| d.as_secs())
				.unwrap_or(1)
				.max(1)
		};
		info!("random seed: {seed}");
		seed
	}
}
