//! CLI argument parsing for tabimap.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tabimap: build-time generator for a static interactive Japan tour-map page.
///
/// Reads a prefecture SVG map, applies two fixed geometry edits (moving the
/// Okinawa inset to the bottom right and inserting a divider line), and wraps
/// the result in a self-contained HTML page with click-to-reveal tourism info.
#[derive(Parser, Debug)]
#[command(name = "tabimap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tabimap.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the tour-map page.
    ///
    /// Reads the input SVG, applies the geometry edits, and writes the
    /// assembled HTML page, overwriting any existing output file.
    Build(BuildArgs),

    /// Inspect the input SVG without writing anything.
    ///
    /// Reports whether the marker substrings the geometry edits rely on
    /// are present, so a missing edit can be caught before publishing.
    Check(CheckArgs),
}

/// Arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the input SVG map.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to the output HTML page.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: tabimap.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leave the Okinawa inset at its original position.
    #[arg(long)]
    pub keep_okinawa: bool,

    /// Do not insert the Okinawa divider line.
    #[arg(long)]
    pub no_divider: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the input SVG map.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to a config file (default: tabimap.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Parse CLI arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_accepts_paths_and_flags() {
        let cli = Cli::parse_from([
            "tabimap",
            "build",
            "--input",
            "map.svg",
            "--output",
            "out.html",
            "--keep-okinawa",
        ]);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("map.svg")));
                assert_eq!(
                    args.output.as_deref(),
                    Some(std::path::Path::new("out.html"))
                );
                assert!(args.keep_okinawa);
                assert!(!args.no_divider);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn build_defaults_to_no_paths() {
        let cli = Cli::parse_from(["tabimap", "build"]);
        match cli.command {
            Command::Build(args) => {
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn check_accepts_strict() {
        let cli = Cli::parse_from(["tabimap", "check", "--strict"]);
        match cli.command {
            Command::Check(args) => assert!(args.strict),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
