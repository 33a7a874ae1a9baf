//! Character-level "travesty" text generation library.
//!
//! This crate provides an order-N Markov travesty generator including:
//! - A normalized in-memory corpus and its loader
//! - Candidate lookup, either by rescanning the corpus or through a
//!   precomputed follow table
//! - A seeded, reproducible generator loop with prefix reseeding
//!
//! The usual entry point is [`travesty`], which takes a corpus and a
//! [`TravestyConfig`] and returns the generated bytes.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Corpus model, candidate finders, prefix window and generator loop.
///
/// The generator is reachable through [`travesty`]; lower level pieces are
/// exposed for callers that drive generation step by step.
pub mod model;

/// Corpus loading (files, readers, stdin).
pub mod io;

pub use error::{Result, TravestyError};
pub use model::config::{Order, Strategy, TravestyConfig};
pub use model::corpus::Corpus;
pub use model::generator::{Generator, travesty};
