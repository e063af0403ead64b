//! # Dramvec Library
//!
//! Deterministic tasting-note embeddings: a seeded skip-gram trainer, a PCA
//! reducer, and a read-only embedding service over a persisted model artifact.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
