//! Pipeline configuration and constants

// === Model Artifact ===
/// Bumped whenever the persisted artifact layout changes.
pub const FORMAT_VERSION: u32 = 1;
pub const ARTIFACT_EXT: &str = "msgpack";
pub const DEFAULT_ARTIFACT: &str = "model.msgpack";

// === Corpus ===
pub const CORPUS_EXTENSIONS: &[&str] = &["txt"];
pub const DEFAULT_MIN_COUNT: u64 = 2;

// === Training Defaults ===
pub const DEFAULT_DIM: usize = 64;
pub const DEFAULT_WINDOW: usize = 4;
pub const DEFAULT_EPOCHS: usize = 5;
pub const DEFAULT_LEARNING_RATE: f32 = 0.025;
pub const DEFAULT_NEGATIVE_SAMPLES: usize = 5;
pub const DEFAULT_SEED: u64 = 42;

/// Per-component bound on a single scaled gradient update. Keeps one noisy
/// pair from blowing up a row; there is no learning-rate decay schedule.
pub const GRADIENT_CLIP: f32 = 1.0;

/// Exponent applied to unigram counts for the negative-sampling table.
pub const NEGATIVE_EXPONENT: f64 = 0.75;

/// Documents per training shard. Shards accumulate gradients independently
/// and merge in shard order, so this only affects parallel granularity.
pub const SHARD_DOCS: usize = 32;

// === Reduction Defaults ===
pub const DEFAULT_K: usize = 16;
