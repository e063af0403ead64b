use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "dramvec",
	author,
	version,
	about = "Deterministic Word2Vec + PCA embeddings for tasting notes",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {train}  {train_args}   {train_desc}
  {bin} {embed}  {embed_args}     {embed_desc}
  {bin} {info}   {info_args}                {info_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "dramvec".bright_blue(),
		train = "train".yellow(),
		train_args = "-c ./notes/ -o model.msgpack",
		train_desc = "Train a model from a corpus".dimmed(),
		embed = "embed".yellow(),
		embed_args = "-m model.msgpack peaty smoky",
		embed_desc = "Embed tokens as JSON".dimmed(),
		info = "info".yellow(),
		info_args = "-m model.msgpack",
		info_desc = "Show artifact metadata".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Train a model: vocabulary + skip-gram vectors + PCA projection
	Train {
		/// Directory of corpus .txt files (one document per line)
		#[arg(short = 'c', long = "corpus", default_value = ".")]
		corpus: PathBuf,

		/// Output artifact path
		#[arg(short = 'o', long = "output", default_value = config::DEFAULT_ARTIFACT)]
		output: PathBuf,

		/// Raw vector dimension D
		#[arg(long = "dim", default_value_t = config::DEFAULT_DIM)]
		dim: usize,

		/// Reduced output dimension k (must be < D)
		#[arg(short = 'k', long = "components", default_value_t = config::DEFAULT_K)]
		k: usize,

		/// Context window size
		#[arg(short = 'w', long = "window", default_value_t = config::DEFAULT_WINDOW)]
		window: usize,

		/// Training epochs (exact count, no early stopping)
		#[arg(short = 'e', long = "epochs", default_value_t = config::DEFAULT_EPOCHS)]
		epochs: usize,

		/// Learning rate
		#[arg(long = "learning-rate", default_value_t = config::DEFAULT_LEARNING_RATE)]
		learning_rate: f32,

		/// Negative samples per positive pair
		#[arg(long = "negative", default_value_t = config::DEFAULT_NEGATIVE_SAMPLES)]
		negative_samples: usize,

		/// Minimum token frequency for the vocabulary
		#[arg(long = "min-count", default_value_t = config::DEFAULT_MIN_COUNT)]
		min_count: u64,

		/// PRNG seed for reproducible training
		#[arg(long = "seed", default_value_t = config::DEFAULT_SEED)]
		seed: u64,
	},

	/// Embed a token sequence with a trained model
	Embed {
		/// Model artifact path
		#[arg(short = 'm', long = "model", default_value = config::DEFAULT_ARTIFACT)]
		model: PathBuf,

		/// Tokens to embed (reads whitespace-separated stdin when omitted)
		#[arg(value_name = "TOKEN")]
		tokens: Vec<String>,

		/// Pretty-print the JSON output
		#[arg(long = "pretty")]
		pretty: bool,
	},

	/// Show model artifact metadata
	Info {
		/// Model artifact path
		#[arg(short = 'm', long = "model", default_value = config::DEFAULT_ARTIFACT)]
		model: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
