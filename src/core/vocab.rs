//! Frequency-ordered vocabulary with an out-of-vocabulary sentinel

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::PipelineError;

/// Token → id mapping built from a corpus snapshot. Immutable once built.
///
/// Ids are assigned by descending corpus frequency, ties broken by first
/// appearance, so rebuilding from the same corpus gives the same ids. The
/// OOV sentinel id is `len()` — one past the last retained token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "VocabEncoding")]
pub struct Vocabulary {
	tokens: Vec<String>,
	counts: Vec<u64>,
	#[serde(skip)]
	index: HashMap<String, u32>,
}

/// Wire shape: the lookup index is rebuilt on deserialization.
#[derive(Deserialize)]
struct VocabEncoding {
	tokens: Vec<String>,
	counts: Vec<u64>,
}

impl From<VocabEncoding> for Vocabulary {
	fn from(enc: VocabEncoding) -> Self {
		let index = enc
			.tokens
			.iter()
			.enumerate()
			.map(|(id, token)| (token.clone(), id as u32))
			.collect();
		Self {
			tokens: enc.tokens,
			counts: enc.counts,
			index,
		}
	}
}

impl Vocabulary {
	/// Build from a tokenized corpus, dropping tokens seen fewer than
	/// `min_count` times.
	pub fn build(corpus: &[Vec<String>], min_count: u64) -> Result<Self, PipelineError> {
		let mut seen: HashMap<&str, (u64, usize)> = HashMap::new();
		let mut order = 0usize;

		for document in corpus {
			for token in document {
				let entry = seen.entry(token.as_str()).or_insert_with(|| {
					let first = (0, order);
					order += 1;
					first
				});
				entry.0 += 1;
			}
		}

		let mut retained: Vec<(&str, u64, usize)> = seen
			.into_iter()
			.filter(|(_, (count, _))| *count >= min_count)
			.map(|(token, (count, first))| (token, count, first))
			.collect();

		if retained.is_empty() {
			return Err(PipelineError::EmptyCorpus { min_count });
		}

		// Descending frequency, then first-appearance order
		retained.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

		let tokens: Vec<String> = retained.iter().map(|(t, _, _)| t.to_string()).collect();
		let counts: Vec<u64> = retained.iter().map(|(_, c, _)| *c).collect();
		let index = tokens
			.iter()
			.enumerate()
			.map(|(id, token)| (token.clone(), id as u32))
			.collect();

		Ok(Self { tokens, counts, index })
	}

	/// Number of retained tokens (the OOV sentinel not included).
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Id for the OOV sentinel; also the index of the last table row.
	pub fn oov_id(&self) -> u32 {
		self.tokens.len() as u32
	}

	/// Total rows a vector table for this vocabulary must have.
	pub fn rows(&self) -> usize {
		self.tokens.len() + 1
	}

	/// Map a token to its id, falling back to the OOV sentinel.
	pub fn id_of(&self, token: &str) -> u32 {
		self.index.get(token).copied().unwrap_or_else(|| self.oov_id())
	}

	/// Id for a retained token only.
	pub fn get(&self, token: &str) -> Option<u32> {
		self.index.get(token).copied()
	}

	pub fn token(&self, id: u32) -> Option<&str> {
		self.tokens.get(id as usize).map(String::as_str)
	}

	/// Corpus frequency per retained id, in id order.
	pub fn counts(&self) -> &[u64] {
		&self.counts
	}
}
