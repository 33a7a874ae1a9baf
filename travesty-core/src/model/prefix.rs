/// The last `order` characters emitted or seeded.
///
/// Owned separately from the corpus so it can hold generated text that
/// never occurs there (for instance a substituted boundary space).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	window: Vec<u8>,
}

impl Prefix {
	pub fn new(window: &[u8]) -> Self {
		Self { window: window.to_vec() }
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.window
	}

	pub fn len(&self) -> usize {
		self.window.len()
	}

	pub fn is_empty(&self) -> bool {
		self.window.is_empty()
	}

	/// Drops the first character, appends `next` and returns the dropped one.
	///
	/// # Panics
	/// Panics on an empty prefix.
	pub fn shift(&mut self, next: u8) -> u8 {
		let first = self.window.remove(0);
		self.window.push(next);
		first
	}

	/// Replaces the whole window; `window` must have the same length.
	pub fn reseed(&mut self, window: &[u8]) {
		debug_assert_eq!(window.len(), self.window.len());
		self.window.clear();
		self.window.extend_from_slice(window);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shift_slides_the_window() {
		let mut prefix = Prefix::new(b"abc");
		assert_eq!(prefix.shift(b'd'), b'a');
		assert_eq!(prefix.shift(b'e'), b'b');
		assert_eq!(prefix.as_bytes(), b"cde");
		assert_eq!(prefix.len(), 3);
	}

	#[test]
	fn reseed_replaces_content() {
		let mut prefix = Prefix::new(b"ab");
		prefix.reseed(b"xy");
		assert_eq!(prefix.as_bytes(), b"xy");
	}
}
