//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for the tabimap generator.
///
/// This struct represents the contents of `tabimap.yaml`. Every field has a
/// default, so an empty (or absent) config file is valid. Unknown fields in
/// the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the input SVG map (default: "map-full.svg").
    #[serde(default = "default_input")]
    pub input: String,

    /// Path to the output HTML page (default: "index.html").
    #[serde(default = "default_output")]
    pub output: String,

    /// Whether to move the Okinawa inset to the bottom right.
    #[serde(default = "default_true")]
    pub move_okinawa: bool,

    /// Whether to insert the divider line before the closing svg tag.
    #[serde(default = "default_true")]
    pub insert_divider: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            move_okinawa: true,
            insert_divider: true,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_input() -> String {
    "map-full.svg".to_string()
}
pub(crate) fn default_output() -> String {
    "index.html".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
