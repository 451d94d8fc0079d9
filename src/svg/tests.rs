//! Tests for the SVG geometry edits.

use super::edits::*;

/// A minimal map with the Okinawa group in source position.
fn sample_svg() -> String {
    format!(
        "<svg viewBox=\"0 0 1000 1000\">\n\
         <g {marker} {transform}>\n\
         <title>沖縄県 / Okinawa</title>\n\
         <path d=\"M0 0\"/>\n\
         </g>\n\
         </svg>",
        marker = OKINAWA_MARKER,
        transform = OKINAWA_TRANSFORM_ORIGINAL,
    )
}

#[test]
fn strips_xml_declaration() {
    let svg = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg></svg>";
    assert_eq!(strip_xml_declaration(svg), "<svg></svg>");
}

#[test]
fn leaves_declaration_free_input_alone() {
    let svg = "<svg></svg>";
    assert_eq!(strip_xml_declaration(svg), svg);
}

#[test]
fn ignores_declaration_not_at_start() {
    // Only a *leading* declaration is stripped.
    let svg = "<svg><?xml version=\"1.0\"?></svg>";
    assert_eq!(strip_xml_declaration(svg), svg);
}

#[test]
fn moves_okinawa_when_marker_and_transform_present() {
    let (moved, outcome) = move_okinawa(sample_svg());

    assert!(outcome.is_applied());
    assert!(moved.contains(OKINAWA_TRANSFORM_MOVED));
    assert!(!moved.contains(OKINAWA_TRANSFORM_ORIGINAL));
}

#[test]
fn skips_move_when_marker_missing() {
    let svg = format!("<svg><g {}><path/></g></svg>", OKINAWA_TRANSFORM_ORIGINAL);

    let (out, outcome) = move_okinawa(svg.clone());

    assert_eq!(
        outcome,
        EditOutcome::Skipped("Okinawa group not found.".to_string())
    );
    // SVG content unchanged
    assert_eq!(out, svg);
}

#[test]
fn skips_move_when_transform_not_exact() {
    let svg = format!(
        "<svg><g {} transform=\"translate(52, 193)\"><path/></g></svg>",
        OKINAWA_MARKER
    );

    let (out, outcome) = move_okinawa(svg.clone());

    assert_eq!(
        outcome,
        EditOutcome::Skipped("Okinawa transform string not found exactly.".to_string())
    );
    assert_eq!(out, svg);
}

#[test]
fn inserts_divider_before_closing_tag() {
    let (out, outcome) = insert_divider(sample_svg());

    assert!(outcome.is_applied());
    let divider_pos = out.find(DIVIDER_FRAGMENT).unwrap();
    let close_pos = out.rfind(SVG_CLOSE_TAG).unwrap();
    assert!(divider_pos < close_pos);
    // Exactly one copy on fresh input
    assert_eq!(out.matches(DIVIDER_FRAGMENT).count(), 1);
}

#[test]
fn divider_targets_the_final_closing_tag() {
    // Nested svg elements: only the outer close tag gets the divider.
    let svg = "<svg><svg></svg><g/></svg>".to_string();

    let (out, outcome) = insert_divider(svg);

    assert!(outcome.is_applied());
    assert!(out.ends_with(&format!("{}\n</svg>", DIVIDER_FRAGMENT)));
}

#[test]
fn skips_divider_without_closing_tag() {
    let svg = "<svg><g/>".to_string();

    let (out, outcome) = insert_divider(svg.clone());

    assert_eq!(
        outcome,
        EditOutcome::Skipped("closing </svg> tag not found.".to_string())
    );
    assert_eq!(out, svg);
}

#[test]
fn divider_duplicates_on_already_edited_input() {
    // Known non-idempotence: rebuilding over input that already carries the
    // divider adds a second copy.
    let (once, _) = insert_divider(sample_svg());
    let (twice, outcome) = insert_divider(once);

    assert!(outcome.is_applied());
    assert_eq!(twice.matches(DIVIDER_FRAGMENT).count(), 2);
}

#[test]
fn edits_compose() {
    let (svg, move_outcome) = move_okinawa(sample_svg());
    let (svg, divider_outcome) = insert_divider(svg);

    assert!(move_outcome.is_applied());
    assert!(divider_outcome.is_applied());
    assert!(svg.contains(OKINAWA_TRANSFORM_MOVED));
    assert!(svg.contains(DIVIDER_FRAGMENT));
}
