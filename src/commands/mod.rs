//! Command implementations for tabimap.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod build;
mod check;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args),
        Command::Check(args) => check::cmd_check(args),
    }
}
