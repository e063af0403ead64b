//! Train command - corpus to model artifact

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::core::{train, Projection, TrainerConfig, Vocabulary};
use crate::processing::Corpus;
use crate::storage::{ArtifactMetadata, ModelArtifact};
use crate::ui;

pub struct TrainArgs {
	pub dim: usize,
	pub k: usize,
	pub window: usize,
	pub epochs: usize,
	pub learning_rate: f32,
	pub negative_samples: usize,
	pub min_count: u64,
	pub seed: u64,
}

pub fn run(corpus_dir: &Path, output: &Path, args: TrainArgs) -> Result<()> {
	ui::print_logo();

	let start = Instant::now();

	ui::info(&format!("Loading corpus from {}", corpus_dir.display()));
	let corpus = Corpus::load_dir(corpus_dir)
		.with_context(|| format!("Failed to load corpus from {}", corpus_dir.display()))?;
	ui::success(&format!(
		"Loaded {} documents (corpus id {})",
		corpus.len(),
		corpus.id()
	));

	let vocabulary = Vocabulary::build(corpus.documents(), args.min_count)
		.context("Failed to build vocabulary")?;
	ui::success(&format!(
		"Vocabulary: {} tokens retained (min count {})",
		vocabulary.len(),
		args.min_count
	));

	let trainer = TrainerConfig {
		dim: args.dim,
		window: args.window,
		epochs: args.epochs,
		learning_rate: args.learning_rate,
		negative_samples: args.negative_samples,
		seed: args.seed,
	};

	ui::info(&format!(
		"Training skip-gram: {}D, window {}, {} epochs, seed {}",
		trainer.dim, trainer.window, trainer.epochs, trainer.seed
	));
	let train_start = Instant::now();
	let table = train(corpus.documents(), &vocabulary, &trainer, None);
	ui::success(&format!(
		"Trained {} vectors in {:.2}s",
		table.rows(),
		train_start.elapsed().as_secs_f32()
	));

	ui::info(&format!("Fitting PCA: {}D -> {}D", args.dim, args.k));
	let projection = Projection::fit(&table, args.k).context("Failed to fit projection")?;

	let metadata = ArtifactMetadata {
		corpus_id: corpus.id().to_string(),
		documents: corpus.len(),
		min_count: args.min_count,
		trainer,
		trained_at: Utc::now(),
	};

	let artifact = ModelArtifact::new(vocabulary, table, projection, metadata);
	artifact
		.save(output)
		.with_context(|| format!("Failed to save artifact to {}", output.display()))?;

	ui::success(&format!(
		"Saved {} in {:.2}s",
		output.display(),
		start.elapsed().as_secs_f32()
	));

	Ok(())
}
