//! Literal substring edits on the SVG text.

/// Marker identifying the Okinawa prefecture group element.
///
/// The transform replacement only runs when this marker is present, so an
/// unrelated `translate(52.000000, 193.000000)` elsewhere in the document
/// cannot be rewritten by accident.
pub const OKINAWA_MARKER: &str = r#"class="okinawa kyushu-okinawa prefecture" data-code="47""#;

/// The transform carried by the Okinawa group in the source map.
pub const OKINAWA_TRANSFORM_ORIGINAL: &str = r#"transform="translate(52.000000, 193.000000)""#;

/// Replacement transform placing the Okinawa inset at the bottom right.
pub const OKINAWA_TRANSFORM_MOVED: &str = r#"transform="translate(600.000000, 800.000000)""#;

/// Divider line drawn between the relocated Okinawa inset and Kyushu.
pub const DIVIDER_FRAGMENT: &str = r##"<line class="okinawa-divider" x1="480" y1="790" x2="630" y2="650" stroke="#BBBBBB" stroke-width="2" stroke-dasharray="6 4"/>"##;

/// Closing tag the divider is inserted in front of.
pub const SVG_CLOSE_TAG: &str = "</svg>";

/// Result of attempting one geometry edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was applied.
    Applied,
    /// The edit was skipped; the message explains which marker was missing.
    Skipped(String),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Drop a leading XML declaration (`<?xml ... ?>`) if present.
///
/// The declaration is valid in a standalone SVG file but not inside an HTML
/// document, so it must not survive into the assembled page.
pub fn strip_xml_declaration(svg: &str) -> &str {
    if let Some(rest) = svg.strip_prefix("<?xml")
        && let Some(end) = rest.find("?>")
    {
        return rest[end + 2..].trim();
    }
    svg
}

/// Replace the Okinawa group transform so the inset renders at the bottom
/// right of the map.
///
/// Both the group marker and the exact transform literal must be present;
/// otherwise the SVG is returned unchanged with a `Skipped` outcome.
pub fn move_okinawa(svg: String) -> (String, EditOutcome) {
    if !svg.contains(OKINAWA_MARKER) {
        return (
            svg,
            EditOutcome::Skipped("Okinawa group not found.".to_string()),
        );
    }

    if !svg.contains(OKINAWA_TRANSFORM_ORIGINAL) {
        return (
            svg,
            EditOutcome::Skipped("Okinawa transform string not found exactly.".to_string()),
        );
    }

    let moved = svg.replace(OKINAWA_TRANSFORM_ORIGINAL, OKINAWA_TRANSFORM_MOVED);
    (moved, EditOutcome::Applied)
}

/// Insert the divider line immediately before the final closing svg tag.
///
/// Insertion is unconditional: input that already contains the fragment gets
/// a second copy. `check` reports that case so it can be caught before a
/// rebuild over already-edited input.
pub fn insert_divider(svg: String) -> (String, EditOutcome) {
    let Some(pos) = svg.rfind(SVG_CLOSE_TAG) else {
        return (
            svg,
            EditOutcome::Skipped("closing </svg> tag not found.".to_string()),
        );
    };

    let mut out = String::with_capacity(svg.len() + DIVIDER_FRAGMENT.len() + 1);
    out.push_str(&svg[..pos]);
    out.push_str(DIVIDER_FRAGMENT);
    out.push('\n');
    out.push_str(&svg[pos..]);
    (out, EditOutcome::Applied)
}
