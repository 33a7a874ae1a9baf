//! Top-level module for the travesty generation system.
//!
//! This module provides:
//! - The normalized input text (`Corpus`)
//! - Run configuration (`TravestyConfig`, `Order`, `Strategy`)
//! - Candidate lookup (`CandidateFinder`, `Scanner`, `FollowTable`)
//! - The sliding prefix window (`Prefix`)
//! - The generator loop (`Generator`)

/// Normalized, immutable input text.
pub mod corpus;

/// Validated run parameters.
///
/// Replaces process-wide option variables with an explicit record that is
/// handed to the generator.
pub mod config;

/// Brute-force candidate lookup over the corpus.
pub mod candidates;

/// Precomputed index from every order-length window to its followers.
///
/// Built once, in parallel, and equivalent to a brute-force scan.
pub mod follow_table;

/// Fixed-length window over the most recent characters.
pub mod prefix;

/// Character-by-character generation loop with reseeding.
pub mod generator;
