//! Dramvec - deterministic tasting-note embeddings
//!
//! Command-line front end for training, inspecting, and querying
//! Word2Vec + PCA model artifacts.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use dramvec::cli::{Cli, Command};
use dramvec::commands;
use dramvec::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Train {
			corpus,
			output,
			dim,
			k,
			window,
			epochs,
			learning_rate,
			negative_samples,
			min_count,
			seed,
		} => commands::train::run(
			&corpus,
			&output,
			commands::train::TrainArgs {
				dim,
				k,
				window,
				epochs,
				learning_rate,
				negative_samples,
				min_count,
				seed,
			},
		),
		Command::Embed { model, tokens, pretty } => commands::embed::run(&model, tokens, pretty),
		Command::Info { model } => commands::info::run(&model),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
