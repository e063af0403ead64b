//! Embed command - tokens to JSON vector

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::EmbeddingService;
use crate::ui;

pub fn run(model: &Path, tokens: Vec<String>, pretty: bool) -> Result<()> {
	let service = EmbeddingService::load(model)
		.with_context(|| format!("Failed to load model from {}", model.display()))?;

	let tokens = if tokens.is_empty() {
		read_stdin_tokens()?
	} else {
		tokens
	};

	ui::debug(&format!(
		"Embedding {} tokens into {} dimensions",
		tokens.len(),
		service.output_dim()
	));

	let embedding = service.embed(&tokens);

	let json = if pretty {
		serde_json::to_string_pretty(&embedding)?
	} else {
		serde_json::to_string(&embedding)?
	};
	println!("{}", json);

	Ok(())
}

fn read_stdin_tokens() -> Result<Vec<String>> {
	let mut input = String::new();
	std::io::stdin()
		.read_to_string(&mut input)
		.context("Failed to read tokens from stdin")?;
	Ok(input.split_whitespace().map(str::to_string).collect())
}
