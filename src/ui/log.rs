//! Unified logging system

use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
    ____
   / __ \_________ _____ _   _____  _____
  / / / / ___/ __ `/ __ `/ | / / _ \/ ___/
 / /_/ / /  / /_/ / / / /| |/ /  __/ /__
/_____/_/   \__,_/_/ /_/ |___/\___/\___/  "#;

const SLOGANS: &[&str] = &[
	"Nose, palate, finish. Projected.",
	"Peat goes in, floats come out",
	"64 dimensions walk into a bar...",
	"Your tasting notes, but linear algebra",
	"Sherry cask? More like sherry task",
	"Now with 100% fewer adjectives",
	"Deterministic since the first fill",
	"\"smoky\" and \"peaty\" are 0.93 apart, actually",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}
