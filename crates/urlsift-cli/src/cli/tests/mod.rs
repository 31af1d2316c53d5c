//! CLI tests: flag parsing, single-dash rewriting and batch runs.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod flags;
