//! Geometry edits applied to the source SVG map.
//!
//! The source map draws Okinawa at its true geographic position, far off the
//! main island chain. The page instead shows it as an inset at the bottom
//! right, separated from Kyushu by a divider line. Both edits are literal
//! substring operations guarded by marker substrings; there is no SVG
//! parsing, and a missing marker skips the edit rather than failing the
//! build.

mod edits;

#[cfg(test)]
mod tests;

pub use edits::{
    DIVIDER_FRAGMENT, EditOutcome, OKINAWA_MARKER, OKINAWA_TRANSFORM_MOVED,
    OKINAWA_TRANSFORM_ORIGINAL, SVG_CLOSE_TAG, insert_divider, move_okinawa,
    strip_xml_declaration,
};
