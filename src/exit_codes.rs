//! Exit code constants for the tabimap CLI.
//!
//! - 0: Success (including builds where an edit was skipped with a warning)
//! - 1: Build failure (input read, output write, or config error)
//! - 2: Check failure (`check` found blocking issues, or warnings with --strict)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Build failure: input could not be read, output could not be written,
/// or the config file was invalid.
pub const BUILD_FAILURE: i32 = 1;

/// Check failure: `tabimap check` found issues that block a correct build.
pub const CHECK_FAILURE: i32 = 2;
