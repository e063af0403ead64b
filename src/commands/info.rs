//! Info command - artifact metadata display

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::storage::ModelArtifact;
use crate::ui;

pub fn run(model: &Path) -> Result<()> {
	let artifact = ModelArtifact::load(model)
		.with_context(|| format!("Failed to load model from {}", model.display()))?;
	let meta = artifact.metadata();

	ui::header(&format!("─── {} ───", model.display()));
	println!("  {}  {} -> {}", "dimensions".bright_blue(), artifact.dim(), artifact.k());
	println!(
		"  {}  {} tokens (+ OOV row)",
		"vocabulary".bright_blue(),
		artifact.vocabulary().len()
	);
	println!("  {}   {}", "corpus id".bright_blue(), meta.corpus_id);
	println!("  {}   {} documents", "documents".bright_blue(), meta.documents);
	println!(
		"  {}     window {}, {} epochs, lr {}, {} negatives, seed {}",
		"trainer".bright_blue(),
		meta.trainer.window,
		meta.trainer.epochs,
		meta.trainer.learning_rate,
		meta.trainer.negative_samples,
		meta.trainer.seed
	);
	println!("  {}   {}", "min count".bright_blue(), meta.min_count);
	println!(
		"  {}  {}",
		"trained at".bright_blue(),
		meta.trained_at.to_rfc3339()
	);
	println!();

	Ok(())
}
