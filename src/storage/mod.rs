//! Model artifact persistence

pub mod artifact;

pub use artifact::{ArtifactMetadata, ModelArtifact};
