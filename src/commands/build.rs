//! Implementation of the `tabimap build` command.
//!
//! Reads the input SVG, strips a leading XML declaration, applies the
//! geometry edits, wraps the result in the page templates, and atomically
//! writes the output, overwriting any existing file.
//!
//! A missing marker substring skips the affected edit with a warning on
//! stdout; only read and write failures abort the build.

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::{Result, TabimapError};
use crate::fs::atomic_write_file;
use crate::page;
use crate::svg::{EditOutcome, insert_divider, move_okinawa, strip_xml_declaration};
use std::path::PathBuf;

/// Effective options after merging config and CLI arguments.
struct BuildPlan {
    input: PathBuf,
    output: PathBuf,
    move_okinawa: bool,
    insert_divider: bool,
}

impl BuildPlan {
    /// CLI arguments override config values; config supplies defaults.
    fn resolve(args: &BuildArgs) -> Result<Self> {
        let config = Config::resolve(args.config.as_deref())?;

        Ok(Self {
            input: args
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.input)),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output)),
            move_okinawa: config.move_okinawa && !args.keep_okinawa,
            insert_divider: config.insert_divider && !args.no_divider,
        })
    }
}

/// Execute the `tabimap build` command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let plan = BuildPlan::resolve(&args)?;

    let raw = std::fs::read_to_string(&plan.input).map_err(|e| TabimapError::Read {
        path: plan.input.display().to_string(),
        message: e.to_string(),
    })?;

    let mut svg = strip_xml_declaration(&raw).to_string();

    if plan.move_okinawa {
        let (edited, outcome) = move_okinawa(svg);
        svg = edited;
        report(&outcome, "Okinawa moved.");
    }

    if plan.insert_divider {
        let (edited, outcome) = insert_divider(svg);
        svg = edited;
        report(&outcome, "Divider inserted.");
    }

    let page = page::render_page(&svg)?;

    atomic_write_file(&plan.output, &page)?;

    println!("Success: {} created.", plan.output.display());
    Ok(())
}

/// Print the result of one edit; skips are warnings, not failures.
fn report(outcome: &EditOutcome, applied_message: &str) {
    match outcome {
        EditOutcome::Applied => println!("{}", applied_message),
        EditOutcome::Skipped(reason) => println!("Warning: {}", reason),
    }
}
