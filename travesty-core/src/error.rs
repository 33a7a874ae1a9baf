use thiserror::Error;

pub type Result<T> = std::result::Result<T, TravestyError>;

#[derive(Debug, Error)]
pub enum TravestyError {
	#[error("order is outside allowed range: (2-16), got {order}")]
	InvalidOrder { order: usize },

	#[error("no input text")]
	EmptyCorpus,

	#[error("corpus of {len} characters is too short for order {order}")]
	CorpusTooShort { len: usize, order: usize },

	#[error("no prefix with candidates found after {limit} reseeds")]
	ReseedLimit { limit: usize },

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
