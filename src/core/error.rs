//! Typed failures of the training and serving pipeline
//!
//! `embed()` itself never fails on content; everything here happens at
//! training time or at artifact load.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
	/// The corpus retained no vocabulary after frequency filtering.
	#[error("corpus yielded no retained tokens (min count {min_count})")]
	EmptyCorpus { min_count: u64 },

	/// Reducer misconfiguration: k must satisfy 1 <= k < D.
	#[error("invalid reduction: k={k} out of range for dimension {dim}")]
	Dimension { k: usize, dim: usize },

	/// The artifact file could not be read or parsed. Fatal at startup.
	#[error("failed to load model artifact: {0}")]
	ArtifactLoad(String),

	/// The artifact carries a format tag this build does not understand.
	#[error("unsupported artifact format v{found} (this build reads v{expected})")]
	ArtifactVersionMismatch { found: u32, expected: u32 },
}
