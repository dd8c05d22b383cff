//! A command line interface to train self-organizing maps and analyze input features.
//!
//! ## Usage
//!
//! - train a map on a csv dataset, continuing from a saved model if it exists:
//!
//!     `somkit train data.csv --models models --name som --shuffle --print`
//!
//! - print fitting statistics and feature plane distances of a trained map:
//!
//!     `somkit analyze data.csv --models models --name som --metric pearson`
//!
//! For more details, simply run
//!
//!     somkit --help

mod commands;

use self::commands::analyze::{get_analyze_app, run_analyze};
use self::commands::train::{get_train_app, run_train};
use clap::{ArgMatches, Command};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Self-organizing map toolkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to self-organizing map training and feature analysis")
        .subcommand(get_train_app())
        .subcommand(get_analyze_app())
}

fn run_subcommand(matches: &ArgMatches) -> Result<(), String> {
    match matches.subcommand() {
        Some(("train", train_matches)) => run_train(train_matches),
        Some(("analyze", analyze_matches)) => run_analyze(analyze_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
