//! Rule-based "ask a question" suggestions.
//!
//! Each record gets a small integer score from fixed token rules; there is no
//! language understanding involved. The best-scoring record is summarized
//! together with a follow-up command that shows its full details.

use crate::catalog::{Layer, SwitchRecord};
use std::fmt;
use tracing::debug;

/// Returned when no record scores above zero.
pub const NO_MATCH_MESSAGE: &str = "I didn't find a specific match. Try mentioning a vendor or feature \
(e.g., 'Cisco PoE 48-port stackable L3 with troubleshooting commands').";

const PREVIEW_LEN: usize = 4;

/// A record paired with its score for one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored<'a> {
    pub score: u32,
    pub record: &'a SwitchRecord,
}

/// Score one record against an already-lowercased query.
pub fn score_switch(sw: &SwitchRecord, query: &str) -> u32 {
    let mut score = 0;
    if query.contains(&sw.vendor.to_lowercase()) {
        score += 3;
    }
    if query.contains(&sw.model.to_lowercase()) {
        score += 3;
    }
    if query.contains("poe") && sw.poe {
        score += 2;
    }
    if query.contains("stack") && sw.stackable {
        score += 2;
    }
    if query.contains("layer 3") || query.contains("l3") {
        score += u32::from(sw.layer == Layer::L3);
    }
    if query.contains("troubleshoot") || query.contains("diagnose") {
        score += u32::from(!sw.troubleshooting.is_empty());
    }
    // Flat bonus: applies to every record alike.
    if query.contains("uplink") {
        score += 1;
    }
    score
}

/// Every record with its score, highest first; ties keep catalog order.
pub fn score_and_rank<'a>(records: &'a [SwitchRecord], free_text: &str) -> Vec<Scored<'a>> {
    let query = free_text.to_lowercase();
    let mut ranked: Vec<Scored<'a>> = records
        .iter()
        .map(|record| Scored {
            score: score_switch(record, &query),
            record,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suggestion<'a> {
    Match(Scored<'a>),
    NoMatch,
}

impl<'a> Suggestion<'a> {
    pub fn record(&self) -> Option<&'a SwitchRecord> {
        match self {
            Suggestion::Match(best) => Some(best.record),
            Suggestion::NoMatch => None,
        }
    }
}

/// Pick the top-ranked record, or [`Suggestion::NoMatch`] when its score is zero.
pub fn suggest<'a>(records: &'a [SwitchRecord], free_text: &str) -> Suggestion<'a> {
    let ranked = score_and_rank(records, free_text);
    match ranked.first() {
        Some(best) if best.score > 0 => {
            debug!(
                vendor = %best.record.vendor,
                model = %best.record.model,
                score = best.score,
                "suggestion selected"
            );
            Suggestion::Match(*best)
        }
        _ => Suggestion::NoMatch,
    }
}

/// Human-readable answer for `free_text`.
pub fn answer_question(records: &[SwitchRecord], free_text: &str) -> String {
    suggest(records, free_text).to_string()
}

impl fmt::Display for Suggestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = match self {
            Suggestion::Match(best) => best.record,
            Suggestion::NoMatch => return f.write_str(NO_MATCH_MESSAGE),
        };

        writeln!(
            f,
            "Suggested match: {} {} ({}, {} ports, {}, {}).",
            best.vendor,
            best.model,
            best.layer,
            best.ports,
            if best.poe { "PoE" } else { "non-PoE" },
            if best.stackable { "stackable" } else { "non-stackable" },
        )?;
        let budget = best
            .poe_budget
            .map_or_else(|| "N/A".to_string(), |watts| watts.to_string());
        writeln!(
            f,
            "Uplinks: {} @ {}. PoE budget: {budget}.",
            best.uplink_count, best.uplink
        )?;
        writeln!(f, "Notes: {}", best.notes)?;

        if !best.cli_sections.is_empty() {
            writeln!(f, "Key configuration sections:")?;
            for section in &best.cli_sections {
                writeln!(f, "  - {}: {}", section.title, preview(&section.commands))?;
            }
        }
        if !best.troubleshooting.is_empty() {
            writeln!(f, "Troubleshooting tips: {}", preview(&best.troubleshooting))?;
        }

        writeln!(f, "You can see full details with:")?;
        write!(
            f,
            "  switchcat --vendor \"{}\" --model \"{}\" --include-cli --group-by-vendor",
            best.vendor, best.model
        )
    }
}

fn preview(lines: &[String]) -> String {
    let shown = lines.len().min(PREVIEW_LEN);
    let mut out = lines[..shown].join("; ");
    if lines.len() > PREVIEW_LEN {
        out.push_str(" ...");
    }
    out
}
