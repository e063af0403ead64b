//! Core pipeline: vocabulary, trainer, reducer, service

pub mod error;
pub mod pca;
pub mod service;
pub mod trainer;
pub mod vocab;

pub use error::PipelineError;
pub use pca::Projection;
pub use service::EmbeddingService;
pub use trainer::{train, RawVectorTable, TrainerConfig};
pub use vocab::Vocabulary;
