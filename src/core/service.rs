//! Read-only embedding service over a loaded model artifact
//!
//! The hot path takes a brief read lock to clone the artifact `Arc`, then
//! runs without synchronization; unbounded concurrent `embed()` calls are
//! safe. `reload()` swaps the `Arc` under the write lock so in-flight calls
//! finish against the snapshot they started with.

use std::path::Path;
use std::sync::{Arc, RwLock};

use ndarray::Array1;

use crate::core::PipelineError;
use crate::storage::ModelArtifact;

pub struct EmbeddingService {
	artifact: RwLock<Arc<ModelArtifact>>,
}

impl EmbeddingService {
	pub fn new(artifact: ModelArtifact) -> Self {
		Self {
			artifact: RwLock::new(Arc::new(artifact)),
		}
	}

	/// Load the artifact from disk and serve it. The only fallible step;
	/// `embed()` never fails afterwards.
	pub fn load(path: &Path) -> Result<Self, PipelineError> {
		Ok(Self::new(ModelArtifact::load(path)?))
	}

	/// Embed a token sequence into a k-dimensional vector.
	///
	/// Empty input returns the zero vector without any lookup. Unknown
	/// tokens resolve to the OOV row silently. Per-token rows are averaged
	/// and passed through the stored projection.
	pub fn embed<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<f32> {
		let artifact = self.snapshot();

		if tokens.is_empty() {
			return vec![0.0; artifact.k()];
		}

		let mut sum = Array1::<f32>::zeros(artifact.dim());
		for token in tokens {
			let id = artifact.vocabulary().id_of(token.as_ref());
			sum += &artifact.table().row(id);
		}
		let averaged = sum / tokens.len() as f32;

		artifact.projection().project(averaged.view()).to_vec()
	}

	/// Length of every vector `embed()` returns.
	pub fn output_dim(&self) -> usize {
		self.snapshot().k()
	}

	/// Atomically replace the served artifact (e.g. after retraining).
	pub fn reload(&self, artifact: ModelArtifact) {
		let mut guard = self
			.artifact
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		*guard = Arc::new(artifact);
	}

	/// Consistent view of the current artifact.
	pub fn snapshot(&self) -> Arc<ModelArtifact> {
		self.artifact
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}
}
