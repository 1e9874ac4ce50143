//! Text and JSON rendering of result sets.
//!
//! Tables size every column to its widest cell (header included), so two
//! tables only line up when they hold the same data. Grouped output renders
//! one independent table per vendor.

use crate::catalog::SwitchRecord;
use anyhow::{Context, Result, bail};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Rendered in table mode when the result set is empty.
pub const NO_MATCHES_MESSAGE: &str = "No switches matched your criteria.";

const HEADERS: [&str; 10] = [
    "Vendor",
    "Model",
    "Ports",
    "PoE",
    "Layer",
    "Managed",
    "Stackable",
    "Uplinks",
    "PoE Budget (W)",
    "Notes",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}', expected table or json"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Append per-record CLI and troubleshooting blocks (table mode only).
    pub include_cli: bool,
    /// One table per vendor, vendors in lexicographic order (table mode only).
    pub group_by_vendor: bool,
}

pub fn render<R: Borrow<SwitchRecord>>(records: &[R], options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => render_json(records),
        OutputFormat::Table => Ok(format_table(
            records,
            options.include_cli,
            options.group_by_vendor,
        )),
    }
}

/// Pretty-printed JSON array carrying every field of every record.
pub fn render_json<R: Borrow<SwitchRecord>>(records: &[R]) -> Result<String> {
    let items: Vec<&SwitchRecord> = records
        .iter()
        .map(<R as Borrow<SwitchRecord>>::borrow)
        .collect();
    serde_json::to_string_pretty(&items).context("serializing switch records")
}

pub fn format_table<R: Borrow<SwitchRecord>>(
    records: &[R],
    include_cli: bool,
    group_by_vendor: bool,
) -> String {
    if records.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }
    let records: Vec<&SwitchRecord> = records
        .iter()
        .map(<R as Borrow<SwitchRecord>>::borrow)
        .collect();

    let mut lines: Vec<String> = Vec::new();
    if group_by_vendor {
        let vendors: BTreeSet<&str> = records.iter().map(|sw| sw.vendor.as_str()).collect();
        for vendor in vendors {
            let subset: Vec<&SwitchRecord> = records
                .iter()
                .copied()
                .filter(|sw| sw.vendor == vendor)
                .collect();
            lines.push(format!("== {vendor} =="));
            render_section(&mut lines, &subset, include_cli);
        }
    } else {
        render_section(&mut lines, &records, include_cli);
    }

    lines.join("\n").trim_end().to_string()
}

fn render_section(lines: &mut Vec<String>, records: &[&SwitchRecord], include_cli: bool) {
    let rows: Vec<[String; 10]> = records.iter().map(|sw| table_row(sw)).collect();
    render_rows(lines, &rows);
    if include_cli {
        lines.push("Configuration snippets:".to_string());
        for sw in records {
            render_details(lines, sw);
        }
    }
}

fn table_row(sw: &SwitchRecord) -> [String; 10] {
    [
        sw.vendor.clone(),
        sw.model.clone(),
        sw.ports.to_string(),
        yes_no(sw.poe).to_string(),
        sw.layer.to_string(),
        yes_no(sw.managed).to_string(),
        yes_no(sw.stackable).to_string(),
        format!("{} @ {}", sw.uplink_count, sw.uplink),
        sw.poe_budget
            .map_or_else(|| "-".to_string(), |watts| watts.to_string()),
        sw.notes.clone(),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn render_rows(lines: &mut Vec<String>, rows: &[[String; 10]]) {
    let mut widths: [usize; 10] = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    lines.push(join_cells(HEADERS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(join_cells(row.iter().map(String::as_str), &widths));
    }
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 10]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_details(lines: &mut Vec<String>, sw: &SwitchRecord) {
    lines.push(format!("[{} {}]", sw.vendor, sw.model));
    for section in &sw.cli_sections {
        lines.push(format!("  {}:", section.title));
        lines.extend(section.commands.iter().map(|cmd| format!("    {cmd}")));
    }
    if !sw.troubleshooting.is_empty() {
        lines.push("  Troubleshooting:".to_string());
        lines.extend(sw.troubleshooting.iter().map(|cmd| format!("    {cmd}")));
    }
    lines.push(String::new());
}
