//! Skip-gram trainer with negative sampling
//!
//! The objective is fixed: negative-sampling skip-gram (SGNS). Training is
//! deterministic for a fixed seed: vectors are initialized from a seeded
//! `StdRng`, epochs run for exactly the configured count, and parallel
//! shards accumulate gradients against a frozen epoch-start snapshot that
//! are merged in shard order. Thread scheduling cannot change the result.

use std::sync::atomic::{AtomicBool, Ordering};

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
	DEFAULT_DIM, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, DEFAULT_NEGATIVE_SAMPLES, DEFAULT_SEED,
	DEFAULT_WINDOW, GRADIENT_CLIP, NEGATIVE_EXPONENT, SHARD_DOCS,
};
use crate::core::Vocabulary;
use crate::ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
	/// Raw vector dimension D.
	pub dim: usize,
	/// Context window: pairs form within ± `window` positions.
	pub window: usize,
	/// Exact epoch count; no early stopping.
	pub epochs: usize,
	pub learning_rate: f32,
	/// Negative samples drawn per positive pair.
	pub negative_samples: usize,
	pub seed: u64,
}

impl Default for TrainerConfig {
	fn default() -> Self {
		Self {
			dim: DEFAULT_DIM,
			window: DEFAULT_WINDOW,
			epochs: DEFAULT_EPOCHS,
			learning_rate: DEFAULT_LEARNING_RATE,
			negative_samples: DEFAULT_NEGATIVE_SAMPLES,
			seed: DEFAULT_SEED,
		}
	}
}

/// One D-dimensional row per vocabulary id, OOV row (all zeros) last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVectorTable {
	vectors: Array2<f32>,
}

impl RawVectorTable {
	pub fn new(vectors: Array2<f32>) -> Self {
		Self { vectors }
	}

	pub fn matrix(&self) -> &Array2<f32> {
		&self.vectors
	}

	pub fn row(&self, id: u32) -> ArrayView1<'_, f32> {
		self.vectors.row(id as usize)
	}

	pub fn rows(&self) -> usize {
		self.vectors.nrows()
	}

	pub fn dim(&self) -> usize {
		self.vectors.ncols()
	}
}

/// Train raw vectors over the corpus. Runs for exactly `config.epochs`
/// epochs unless the optional stop flag is raised; the flag is checked only
/// between epochs and stopping early returns the table trained so far.
pub fn train(
	corpus: &[Vec<String>],
	vocab: &Vocabulary,
	config: &TrainerConfig,
	stop: Option<&AtomicBool>,
) -> RawVectorTable {
	let dim = config.dim;
	let n = vocab.len();

	// OOV tokens drop out of the training sequence entirely; documents
	// reduced below two tokens cannot form a pair.
	let encoded: Vec<Vec<u32>> = corpus
		.iter()
		.map(|doc| doc.iter().filter_map(|t| vocab.get(t)).collect::<Vec<u32>>())
		.filter(|doc| doc.len() >= 2)
		.collect();

	ui::debug(&format!(
		"Training {} vectors ({}D) over {} documents",
		n,
		dim,
		encoded.len()
	));

	let mut rng = StdRng::seed_from_u64(config.seed);
	let span = 0.5 / dim as f32;
	let mut input = Array2::from_shape_fn((n, dim), |_| rng.random_range(-span..span));
	let mut context = Array2::<f32>::zeros((n, dim));

	let sampler = NegativeSampler::new(vocab);

	for epoch in 0..config.epochs {
		if let Some(flag) = stop {
			if flag.load(Ordering::Relaxed) {
				ui::warn(&format!(
					"Stop requested, ending training after {} of {} epochs",
					epoch, config.epochs
				));
				break;
			}
		}

		let input_snap = input.clone();
		let context_snap = context.clone();

		let deltas: Vec<(Array2<f32>, Array2<f32>)> = encoded
			.par_chunks(SHARD_DOCS)
			.enumerate()
			.map(|(shard, docs)| {
				train_shard(
					docs,
					input_snap.view(),
					context_snap.view(),
					&sampler,
					config,
					shard_seed(config.seed, epoch, shard),
				)
			})
			.collect();

		// The only synchronization point: merge shard deltas in shard order
		for (delta_input, delta_context) in deltas {
			input += &delta_input;
			context += &delta_context;
		}

		ui::debug(&format!("Epoch {}/{} complete", epoch + 1, config.epochs));
	}

	// Assemble the final table with the zeroed OOV row appended
	let mut vectors = Array2::<f32>::zeros((n + 1, dim));
	vectors.slice_mut(ndarray::s![..n, ..]).assign(&input);

	RawVectorTable::new(vectors)
}

fn shard_seed(seed: u64, epoch: usize, shard: usize) -> u64 {
	seed ^ ((epoch as u64) << 40) ^ ((shard as u64) << 8) ^ 0x9e37_79b9
}

fn train_shard(
	docs: &[Vec<u32>],
	input: ArrayView2<'_, f32>,
	context: ArrayView2<'_, f32>,
	sampler: &NegativeSampler,
	config: &TrainerConfig,
	seed: u64,
) -> (Array2<f32>, Array2<f32>) {
	let dim = config.dim;
	let mut delta_input = Array2::<f32>::zeros(input.raw_dim());
	let mut delta_context = Array2::<f32>::zeros(context.raw_dim());
	let mut rng = StdRng::seed_from_u64(seed);

	for doc in docs {
		for (i, &center) in doc.iter().enumerate() {
			let lo = i.saturating_sub(config.window);
			let hi = (i + config.window + 1).min(doc.len());

			for j in lo..hi {
				if j == i {
					continue;
				}
				let target = doc[j];

				pair_update(
					center,
					target,
					1.0,
					input,
					context,
					&mut delta_input,
					&mut delta_context,
					config.learning_rate,
					dim,
				);

				for _ in 0..config.negative_samples {
					let negative = sampler.sample(&mut rng);
					if negative == target {
						continue;
					}
					pair_update(
						center,
						negative,
						0.0,
						input,
						context,
						&mut delta_input,
						&mut delta_context,
						config.learning_rate,
						dim,
					);
				}
			}
		}
	}

	(delta_input, delta_context)
}

/// One clipped SGD step for a (center, target) pair against the frozen
/// epoch snapshot, accumulated into the shard deltas.
#[allow(clippy::too_many_arguments)]
fn pair_update(
	center: u32,
	target: u32,
	label: f32,
	input: ArrayView2<'_, f32>,
	context: ArrayView2<'_, f32>,
	delta_input: &mut Array2<f32>,
	delta_context: &mut Array2<f32>,
	learning_rate: f32,
	dim: usize,
) {
	let c = center as usize;
	let t = target as usize;

	let u = input.row(c);
	let v = context.row(t);
	let g = (label - sigmoid(u.dot(&v))) * learning_rate;

	for d in 0..dim {
		delta_context[[t, d]] += clip(g * u[d]);
		delta_input[[c, d]] += clip(g * v[d]);
	}
}

fn sigmoid(z: f32) -> f32 {
	1.0 / (1.0 + (-z).exp())
}

fn clip(x: f32) -> f32 {
	x.clamp(-GRADIENT_CLIP, GRADIENT_CLIP)
}

/// Draws negative ids from the unigram^0.75 distribution over retained
/// vocabulary (never the OOV sentinel).
struct NegativeSampler {
	cumulative: Vec<f64>,
	total: f64,
}

impl NegativeSampler {
	fn new(vocab: &Vocabulary) -> Self {
		let mut cumulative = Vec::with_capacity(vocab.len());
		let mut total = 0.0;
		for &count in vocab.counts() {
			total += (count as f64).powf(NEGATIVE_EXPONENT);
			cumulative.push(total);
		}
		Self { cumulative, total }
	}

	fn sample(&self, rng: &mut StdRng) -> u32 {
		let x = rng.random::<f64>() * self.total;
		self.cumulative.partition_point(|&c| c <= x) as u32
	}
}
