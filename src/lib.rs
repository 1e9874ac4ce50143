//! Searchable catalog of network switch models.
//!
//! The crate is a small query engine: a read-only [`catalog`] of
//! [`SwitchRecord`]s, a predicate [`filter`], a keyword scorer for free-text
//! questions ([`ask`]), and table/JSON [`render`]ers. Shells (the `switchcat`
//! binary, or any other front end) build a [`QueryRequest`] and hand it to
//! [`run_query`] together with the catalog they loaded.

pub mod ask;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod render;

pub use ask::{NO_MATCH_MESSAGE, Scored, Suggestion, answer_question, score_and_rank, suggest};
pub use catalog::{
    CliSection, ENV_CATALOG_PATH, Layer, SwitchRecord, default_catalog, load_catalog,
    load_catalog_from_path, load_or_default, parse_catalog, vendors,
};
pub use error::{CatalogError, MalformedCatalogError};
pub use filter::{Criteria, TriState, apply_limit, filter_catalog};
pub use render::{
    NO_MATCHES_MESSAGE, OutputFormat, RenderOptions, format_table, render, render_json,
};

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// One query as issued by a shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub criteria: Criteria,
    /// Truncates the filtered results; negative values clamp to zero.
    pub limit: Option<i64>,
    /// Free-text question; when set, criteria and limit are ignored.
    pub ask: Option<String>,
    pub render: RenderOptions,
}

/// Execute `request` against `records` and return the text to display.
pub fn run_query(records: &[SwitchRecord], request: &QueryRequest) -> Result<String> {
    if let Some(question) = request.ask.as_deref().filter(|q| !q.is_empty()) {
        debug!(question, "answering free-text question");
        return Ok(answer_question(records, question));
    }

    let matches = filter_catalog(records, &request.criteria);
    let matches = apply_limit(matches, request.limit);
    render(&matches, &request.render)
}

/// Resolve the external catalog path.
///
/// An explicit path wins; otherwise a non-empty `SWITCHCAT_CATALOG` is used.
/// `None` selects the built-in catalog.
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        env::var_os(ENV_CATALOG_PATH)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    })
}
