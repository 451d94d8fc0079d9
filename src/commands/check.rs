//! Implementation of the `tabimap check` command.
//!
//! Reads the input SVG and reports whether the marker substrings the
//! geometry edits rely on are present, without writing anything. This
//! catches a silently skipped edit before the page is published.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Result, TabimapError};
use crate::svg::{
    DIVIDER_FRAGMENT, OKINAWA_MARKER, OKINAWA_TRANSFORM_MOVED, OKINAWA_TRANSFORM_ORIGINAL,
    SVG_CLOSE_TAG,
};
use regex::Regex;
use std::path::PathBuf;

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Warning: the build would proceed, but an edit would be skipped
    /// or produce a duplicate.
    Warning,
    /// Error: the generated document would be malformed.
    Error,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "WARNING"),
            IssueSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// A detected issue with an optional recommended action.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub category: String,
    pub description: String,
    pub remediation: Option<String>,
}

impl Issue {
    pub fn new(severity: IssueSeverity, category: &str, description: &str) -> Self {
        Self {
            severity,
            category: category.to_string(),
            description: description.to_string(),
            remediation: None,
        }
    }

    pub fn with_remediation(mut self, remediation: &str) -> Self {
        self.remediation = Some(remediation.to_string());
        self
    }
}

/// Result of checking one input SVG.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }
}

/// Execute the `tabimap check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input));

    let svg = std::fs::read_to_string(&input).map_err(|e| TabimapError::Read {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;

    let report = run_checks(&svg);
    print_report(&input, &report);

    if report.error_count() > 0 {
        return Err(TabimapError::CheckFailed(format!(
            "{} error(s) in '{}'",
            report.error_count(),
            input.display()
        )));
    }

    if args.strict && report.warning_count() > 0 {
        return Err(TabimapError::CheckFailed(format!(
            "{} warning(s) in '{}' (--strict)",
            report.warning_count(),
            input.display()
        )));
    }

    Ok(())
}

/// Run all marker checks against the SVG text.
pub fn run_checks(svg: &str) -> CheckReport {
    let mut report = CheckReport::default();

    check_okinawa_group(svg, &mut report);
    check_svg_structure(svg, &mut report);
    check_divider(svg, &mut report);

    report
}

/// Check that the Okinawa group and its expected transform are present.
fn check_okinawa_group(svg: &str, report: &mut CheckReport) {
    if !svg.contains(OKINAWA_MARKER) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "okinawa_group",
                "Okinawa group not found; the move edit will be skipped",
            )
            .with_remediation(&format!("expected the marker {}", OKINAWA_MARKER)),
        );
        return;
    }

    if svg.contains(OKINAWA_TRANSFORM_ORIGINAL) {
        return;
    }

    if svg.contains(OKINAWA_TRANSFORM_MOVED) {
        report.issues.push(Issue::new(
            IssueSeverity::Warning,
            "okinawa_transform",
            "input already carries the moved transform; the move edit will be skipped",
        ));
        return;
    }

    let description = match found_okinawa_transform(svg) {
        Some(actual) => format!(
            "Okinawa transform string not found exactly (group carries '{}'); the move edit will be skipped",
            actual
        ),
        None => "Okinawa group carries no transform attribute; the move edit will be skipped"
            .to_string(),
    };
    report.issues.push(
        Issue::new(IssueSeverity::Warning, "okinawa_transform", &description).with_remediation(
            &format!("expected the literal {}", OKINAWA_TRANSFORM_ORIGINAL),
        ),
    );
}

/// Check that the document can take the divider insert.
fn check_svg_structure(svg: &str, report: &mut CheckReport) {
    if !svg.contains(SVG_CLOSE_TAG) {
        report.issues.push(Issue::new(
            IssueSeverity::Error,
            "svg_structure",
            "closing </svg> tag not found; the divider cannot be inserted and the document is malformed",
        ));
    }
}

/// Check for an already inserted divider.
fn check_divider(svg: &str, report: &mut CheckReport) {
    if svg.contains(DIVIDER_FRAGMENT) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "divider",
                "divider line already present; a rebuild will insert a duplicate",
            )
            .with_remediation("build from the unedited source map instead"),
        );
    }
}

/// Extract the transform the Okinawa group actually carries, for the
/// diagnostic message. The edit itself only ever does literal matching.
fn found_okinawa_transform(svg: &str) -> Option<String> {
    let marker_pos = svg.find(OKINAWA_MARKER)?;
    let tag_start = svg[..marker_pos].rfind('<')?;
    let tag_end = marker_pos + svg[marker_pos..].find('>')?;
    let tag = &svg[tag_start..tag_end];

    let re = Regex::new(r#"transform="(translate\([^)]*\))""#).ok()?;
    re.captures(tag).map(|c| c[1].to_string())
}

/// Print the report to stdout.
fn print_report(input: &std::path::Path, report: &CheckReport) {
    if report.issues.is_empty() {
        println!("All markers present. '{}' is ready to build.", input.display());
        return;
    }

    println!("Checked '{}':", input.display());
    println!();
    for issue in &report.issues {
        println!("[{}] {}: {}", issue.severity, issue.category, issue.description);
        if let Some(remediation) = &issue.remediation {
            println!("          -> {}", remediation);
        }
    }
    println!();
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}
