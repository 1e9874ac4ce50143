//! Switch catalog wiring.
//!
//! The catalog is an ordered, read-only sequence of [`SwitchRecord`]s. It is
//! either the bundled reference set (see [`default_catalog`]) or a JSON array
//! loaded from disk. Catalogs are replaced wholesale, never edited in place.

pub mod builtin;
pub mod loader;
pub mod model;

pub use builtin::default_catalog;
pub use loader::{load_catalog, load_catalog_from_path, load_or_default, parse_catalog};
pub use model::{CliSection, Layer, SwitchRecord};

/// Environment variable consulted when no `--catalog` path is supplied.
pub const ENV_CATALOG_PATH: &str = "SWITCHCAT_CATALOG";

/// Sorted, de-duplicated vendor names present in `records`.
pub fn vendors(records: &[SwitchRecord]) -> Vec<&str> {
    let mut names: Vec<&str> = records.iter().map(|sw| sw.vendor.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names
}
