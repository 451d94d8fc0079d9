//! Assembly of the generated tour-map page.
//!
//! The page is three blocks concatenated in order: a fixed HTML head
//! (styles and the opening of the map section), the edited SVG, and a fixed
//! tail (info panel, interaction script, and the embedded tourism data
//! tables). The tables are defined as Rust data in `guide` and serialized
//! into the tail's script block, so the page itself stays dependency-free.

pub mod guide;
pub mod template;


use crate::error::Result;

pub use guide::{DefaultRecord, RegionRecord, default_record, guide_data};

/// Assemble the full page around the (already edited) SVG text.
pub fn render_page(svg: &str) -> Result<String> {
    let tail = template::render_tail()?;
    Ok(format!("{}\n{}\n{}", template::PAGE_HEAD, svg, tail))
}
