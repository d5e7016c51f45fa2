use std::fmt::Write;

use serde::Serialize;

use crate::core::candidate::Candidate;
use crate::core::session::RankingOutcome;

/// Renders the plain-text report: similar pictures first, then
/// identical/close resemblance, each tier ascending by distance. The same
/// rendering goes to the console and to an `-o` file.
pub fn render_text(reference: &str, outcome: &RankingOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n *** Pictures found to be similar to {reference} *** \n");
    write_tier(&mut out, &outcome.similar);
    let _ = writeln!(
        out,
        "\n\n *** Pictures found to be identical/close resemblance to {reference} *** \n"
    );
    write_tier(&mut out, &outcome.close_resemblance);
    out.push('\n');
    out
}

fn write_tier(out: &mut String, candidates: &[Candidate]) {
    for candidate in candidates {
        let _ = writeln!(out, "{} {}", format_distance(candidate.distance), candidate.name);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reference: &'a str,
    threshold: f64,
    similar: &'a [Candidate],
    close_resemblance: &'a [Candidate],
}

/// Machine-readable variant of the same outcome.
pub fn render_json(
    reference: &str,
    threshold: f64,
    outcome: &RankingOutcome,
) -> serde_json::Result<String> {
    let report = JsonReport {
        reference,
        threshold,
        similar: &outcome.similar,
        close_resemblance: &outcome.close_resemblance,
    };
    let mut rendered = serde_json::to_string_pretty(&report)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Distance with 3 significant digits, trailing zeros trimmed.
fn format_distance(distance: f64) -> String {
    if distance == 0.0 {
        return "0".to_string();
    }
    let magnitude = distance.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    let rendered = format!("{distance:.decimals$}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
