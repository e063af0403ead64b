//! Training corpus loading
//!
//! A corpus is a directory of `.txt` files, one document per line. The
//! corpus id is an xxh3 hash over the tokenized content, recorded in the
//! artifact metadata so a served model can be traced back to its input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;
use xxhash_rust::xxh3::Xxh3;

use crate::config::CORPUS_EXTENSIONS;
use crate::ui;

pub struct Corpus {
	documents: Vec<Vec<String>>,
	id: String,
}

impl Corpus {
	/// Walk `dir` and load every corpus file, in path order so the corpus
	/// id and vocabulary ordering are stable across runs.
	pub fn load_dir(dir: &Path) -> Result<Self> {
		let mut files: Vec<_> = WalkDir::new(dir)
			.into_iter()
			.filter_map(|e| e.ok())
			.filter(|e| e.file_type().is_file())
			.map(|e| e.into_path())
			.filter(|p| {
				p.extension()
					.and_then(|s| s.to_str())
					.map(|ext| CORPUS_EXTENSIONS.contains(&ext))
					.unwrap_or(false)
			})
			.collect();
		files.sort();

		if files.is_empty() {
			anyhow::bail!("no corpus files (.txt) found under {}", dir.display());
		}

		let mut documents = Vec::new();
		for path in &files {
			let text = fs::read_to_string(path)
				.with_context(|| format!("Failed to read corpus file {}", path.display()))?;
			for line in text.lines() {
				let tokens = tokenize(line);
				if !tokens.is_empty() {
					documents.push(tokens);
				}
			}
			ui::debug(&format!("Loaded {}", path.display()));
		}

		Ok(Self::from_documents(documents))
	}

	pub fn from_documents(documents: Vec<Vec<String>>) -> Self {
		let id = content_id(&documents);
		Self { documents, id }
	}

	pub fn documents(&self) -> &[Vec<String>] {
		&self.documents
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	/// Content hash identifying this corpus snapshot.
	pub fn id(&self) -> &str {
		&self.id
	}
}

/// Lowercase alphanumeric tokenization; everything else is a separator.
pub fn tokenize(line: &str) -> Vec<String> {
	line.to_lowercase()
		.split(|c: char| !c.is_alphanumeric())
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}

fn content_id(documents: &[Vec<String>]) -> String {
	let mut hasher = Xxh3::new();
	for document in documents {
		for token in document {
			hasher.update(token.as_bytes());
			hasher.update(b"\x1f");
		}
		hasher.update(b"\x1e");
	}
	format!("{:016x}", hasher.digest())
}
