//! Model artifact format and I/O
//!
//! The artifact is the unit of persistence: vocabulary, raw vector table,
//! projection, and metadata in one MessagePack file, tagged with a format
//! version. Saves go through a temp file and rename so a crashed training
//! run never leaves a partial artifact behind.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FORMAT_VERSION;
use crate::core::{PipelineError, Projection, RawVectorTable, TrainerConfig, Vocabulary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
	/// Content hash of the training corpus.
	pub corpus_id: String,
	pub documents: usize,
	pub min_count: u64,
	pub trainer: TrainerConfig,
	pub trained_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
	format: u32,
	dim: usize,
	k: usize,
	vocabulary: Vocabulary,
	table: RawVectorTable,
	projection: Projection,
	metadata: ArtifactMetadata,
}

/// Decoded first to check the tag before touching the rest; unknown fields
/// are skipped because the artifact is written in map form.
#[derive(Deserialize)]
struct ArtifactHeader {
	format: u32,
}

impl ModelArtifact {
	pub fn new(
		vocabulary: Vocabulary,
		table: RawVectorTable,
		projection: Projection,
		metadata: ArtifactMetadata,
	) -> Self {
		Self {
			format: FORMAT_VERSION,
			dim: table.dim(),
			k: projection.k(),
			vocabulary,
			table,
			projection,
			metadata,
		}
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn k(&self) -> usize {
		self.k
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn table(&self) -> &RawVectorTable {
		&self.table
	}

	pub fn projection(&self) -> &Projection {
		&self.projection
	}

	pub fn metadata(&self) -> &ArtifactMetadata {
		&self.metadata
	}

	/// Save atomically: write to a temp file in the destination directory,
	/// then rename over the target.
	pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)
					.map_err(|e| PipelineError::ArtifactLoad(format!("create {}: {}", parent.display(), e)))?;
			}
		}

		let bytes = rmp_serde::to_vec_named(self)
			.map_err(|e| PipelineError::ArtifactLoad(format!("serialize: {}", e)))?;

		let mut tmp = path.as_os_str().to_owned();
		tmp.push(".tmp");
		let tmp = std::path::PathBuf::from(tmp);

		fs::write(&tmp, bytes)
			.map_err(|e| PipelineError::ArtifactLoad(format!("write {}: {}", tmp.display(), e)))?;
		fs::rename(&tmp, path)
			.map_err(|e| PipelineError::ArtifactLoad(format!("rename to {}: {}", path.display(), e)))?;

		Ok(())
	}

	pub fn load(path: &Path) -> Result<Self, PipelineError> {
		let bytes = fs::read(path)
			.map_err(|e| PipelineError::ArtifactLoad(format!("read {}: {}", path.display(), e)))?;

		let header: ArtifactHeader = rmp_serde::from_slice(&bytes)
			.map_err(|e| PipelineError::ArtifactLoad(format!("parse {}: {}", path.display(), e)))?;
		if header.format != FORMAT_VERSION {
			return Err(PipelineError::ArtifactVersionMismatch {
				found: header.format,
				expected: FORMAT_VERSION,
			});
		}

		let artifact: ModelArtifact = rmp_serde::from_slice(&bytes)
			.map_err(|e| PipelineError::ArtifactLoad(format!("parse {}: {}", path.display(), e)))?;
		artifact.validate()?;

		Ok(artifact)
	}

	/// Shape invariants: every table row has D components, the projection
	/// is D×k, and the table covers every vocabulary id plus the OOV row.
	fn validate(&self) -> Result<(), PipelineError> {
		if self.table.dim() != self.dim
			|| self.projection.dim() != self.dim
			|| self.projection.k() != self.k
			|| self.table.rows() != self.vocabulary.rows()
		{
			return Err(PipelineError::ArtifactLoad(format!(
				"inconsistent shapes: table {}x{}, projection {}x{}, vocabulary {} rows",
				self.table.rows(),
				self.table.dim(),
				self.projection.dim(),
				self.projection.k(),
				self.vocabulary.rows()
			)));
		}
		Ok(())
	}
}
