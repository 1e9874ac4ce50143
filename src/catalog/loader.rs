//! External catalog loading.
//!
//! The on-disk format is a JSON array of objects. `vendor`, `model`, `ports`,
//! `poe`, `layer`, `managed` and `stackable` are required; the remaining
//! fields fall back to `"N/A"`, `0`, absent, `{}`, `[]` and `""`. Any field
//! that is missing or fails coercion rejects the whole document.

use super::builtin::default_catalog;
use super::model::{CliSection, Layer, SwitchRecord};
use crate::error::{CatalogError, MalformedCatalogError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_UPLINK: &str = "N/A";

/// Load the catalog at `source`, or the built-in catalog when `source` is `None`.
pub fn load_catalog(source: Option<&Path>) -> Result<Vec<SwitchRecord>, CatalogError> {
    match source {
        Some(path) => load_catalog_from_path(path),
        None => Ok(default_catalog().to_vec()),
    }
}

pub fn load_catalog_from_path(path: &Path) -> Result<Vec<SwitchRecord>, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&data).map_err(|source| CatalogError::Json {
        origin: path.display().to_string(),
        source,
    })?;
    let records = catalog_from_value(value)?;
    debug!(path = %path.display(), records = records.len(), "loaded external catalog");
    Ok(records)
}

/// Parse a catalog document held in memory.
pub fn parse_catalog(text: &str) -> Result<Vec<SwitchRecord>, CatalogError> {
    let value: Value = serde_json::from_str(text).map_err(|source| CatalogError::Json {
        origin: "<inline>".to_string(),
        source,
    })?;
    catalog_from_value(value)
}

/// Load `source`, falling back to the built-in catalog on any failure.
///
/// Returns the user-facing failure message alongside the fallback so an
/// interactive shell can display it and keep the session alive.
pub fn load_or_default(source: Option<&Path>) -> (Vec<SwitchRecord>, Option<String>) {
    match load_catalog(source) {
        Ok(records) => (records, None),
        Err(err) => {
            let message = format!("Failed to load uploaded catalog: {}", error_chain(&err));
            warn!("{message}");
            (default_catalog().to_vec(), Some(message))
        }
    }
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        parts.push(cause.to_string());
        current = cause.source();
    }
    parts.join(": ")
}

fn catalog_from_value(value: Value) -> Result<Vec<SwitchRecord>, CatalogError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(CatalogError::NotAnArray(json_kind(&other))),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item).map_err(CatalogError::from))
        .collect()
}

fn record_from_value(index: usize, item: &Value) -> Result<SwitchRecord, MalformedCatalogError> {
    let Some(obj) = item.as_object() else {
        return Err(MalformedCatalogError::new(
            index,
            "<record>",
            format!("expected an object, got {}", json_kind(item)),
        ));
    };
    let fields = Fields { index, obj };

    let layer_raw = fields.required_str("layer")?;
    let layer = layer_raw
        .parse::<Layer>()
        .map_err(|err| MalformedCatalogError::new(index, "layer", err.to_string()))?;

    Ok(SwitchRecord {
        vendor: fields.required_str("vendor")?.to_string(),
        model: fields.required_str("model")?.to_string(),
        ports: fields.required_int("ports")?,
        poe: fields.required_bool("poe")?,
        layer,
        managed: fields.required_bool("managed")?,
        stackable: fields.required_bool("stackable")?,
        uplink: fields
            .optional_str("uplink")?
            .unwrap_or(DEFAULT_UPLINK)
            .to_string(),
        uplink_count: fields.optional_int("uplink_count")?.unwrap_or(0),
        poe_budget: fields.optional_int("poe_budget")?,
        cli_sections: fields.cli_sections()?,
        troubleshooting: fields.string_list("troubleshooting")?,
        notes: fields.optional_str("notes")?.unwrap_or_default().to_string(),
    })
}

struct Fields<'a> {
    index: usize,
    obj: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn malformed(&self, field: &str, problem: impl Into<String>) -> MalformedCatalogError {
        MalformedCatalogError::new(self.index, field, problem)
    }

    fn required(&self, field: &str) -> Result<&'a Value, MalformedCatalogError> {
        match self.obj.get(field) {
            Some(Value::Null) | None => Err(self.malformed(field, "is required")),
            Some(value) => Ok(value),
        }
    }

    /// Null is treated the same as an absent key for optional fields.
    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.obj.get(field).filter(|value| !value.is_null())
    }

    fn required_str(&self, field: &str) -> Result<&'a str, MalformedCatalogError> {
        let value = self.required(field)?;
        value.as_str().ok_or_else(|| {
            self.malformed(field, format!("expected a string, got {}", json_kind(value)))
        })
    }

    fn optional_str(&self, field: &str) -> Result<Option<&'a str>, MalformedCatalogError> {
        self.optional(field)
            .map(|value| {
                value.as_str().ok_or_else(|| {
                    self.malformed(field, format!("expected a string, got {}", json_kind(value)))
                })
            })
            .transpose()
    }

    fn required_int(&self, field: &str) -> Result<u32, MalformedCatalogError> {
        let value = self.required(field)?;
        self.coerce_int(field, value)
    }

    fn optional_int(&self, field: &str) -> Result<Option<u32>, MalformedCatalogError> {
        self.optional(field)
            .map(|value| self.coerce_int(field, value))
            .transpose()
    }

    fn required_bool(&self, field: &str) -> Result<bool, MalformedCatalogError> {
        let value = self.required(field)?;
        self.coerce_bool(field, value)
    }

    /// Accepts JSON integers and strings holding a base-10 integer.
    fn coerce_int(&self, field: &str, value: &Value) -> Result<u32, MalformedCatalogError> {
        let parsed = match value {
            Value::Number(num) => {
                if let Some(n) = num.as_u64() {
                    Some(n)
                } else if num.as_i64().is_some() {
                    return Err(self.malformed(field, format!("must be non-negative, got {num}")));
                } else {
                    None
                }
            }
            Value::String(raw) => raw.trim().parse::<u64>().ok(),
            _ => None,
        };
        let n = parsed.ok_or_else(|| {
            self.malformed(field, format!("expected an integer, got {}", describe(value)))
        })?;
        u32::try_from(n).map_err(|_| self.malformed(field, format!("{n} is out of range")))
    }

    /// Accepts JSON booleans, `0`/`1`, and `yes`/`no`/`true`/`false` strings.
    fn coerce_bool(&self, field: &str, value: &Value) -> Result<bool, MalformedCatalogError> {
        let parsed = match value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(num) => match num.as_u64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        };
        parsed.ok_or_else(|| {
            self.malformed(field, format!("expected a boolean, got {}", describe(value)))
        })
    }

    fn string_list(&self, field: &str) -> Result<Vec<String>, MalformedCatalogError> {
        let Some(value) = self.optional(field) else {
            return Ok(Vec::new());
        };
        self.strings_in(field, value)
    }

    fn strings_in(&self, field: &str, value: &Value) -> Result<Vec<String>, MalformedCatalogError> {
        let items = value.as_array().ok_or_else(|| {
            self.malformed(field, format!("expected an array, got {}", json_kind(value)))
        })?;
        items
            .iter()
            .enumerate()
            .map(|(pos, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    self.malformed(
                        &format!("{field}[{pos}]"),
                        format!("expected a string, got {}", json_kind(item)),
                    )
                })
            })
            .collect()
    }

    fn cli_sections(&self) -> Result<Vec<CliSection>, MalformedCatalogError> {
        let Some(value) = self.optional("cli_sections") else {
            return Ok(Vec::new());
        };
        let sections = value.as_object().ok_or_else(|| {
            self.malformed(
                "cli_sections",
                format!("expected an object, got {}", json_kind(value)),
            )
        })?;
        sections
            .iter()
            .map(|(title, commands)| {
                let commands = self.strings_in(&format!("cli_sections.{title}"), commands)?;
                Ok(CliSection {
                    title: title.clone(),
                    commands,
                })
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(_) | Value::Bool(_) | Value::String(_) => value.to_string(),
        other => json_kind(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "vendor": "Acme",
            "model": "A1",
            "ports": 8,
            "poe": false,
            "layer": "L2",
            "managed": false,
            "stackable": false
        })
    }

    fn malformed_from(doc: Value) -> MalformedCatalogError {
        let err = catalog_from_value(doc).unwrap_err();
        err.as_malformed().cloned().expect("field-level error")
    }

    #[test]
    fn optional_fields_take_defaults() {
        let records = catalog_from_value(json!([minimal()])).unwrap();
        let sw = &records[0];
        assert_eq!(sw.uplink, "N/A");
        assert_eq!(sw.uplink_count, 0);
        assert_eq!(sw.poe_budget, None);
        assert!(sw.cli_sections.is_empty());
        assert!(sw.troubleshooting.is_empty());
        assert_eq!(sw.notes, "");
    }

    #[test]
    fn coerces_integer_strings_and_yes_no() {
        let mut doc = minimal();
        doc["ports"] = json!("24");
        doc["poe"] = json!("yes");
        doc["managed"] = json!(1);
        let sw = &catalog_from_value(json!([doc])).unwrap()[0];
        assert_eq!(sw.ports, 24);
        assert!(sw.poe);
        assert!(sw.managed);
    }

    #[test]
    fn reports_index_and_field() {
        let mut bad = minimal();
        bad.as_object_mut().unwrap().remove("stackable");
        let err = malformed_from(json!([minimal(), bad]));
        assert_eq!(err.index, 1);
        assert_eq!(err.field, "stackable");
    }

    #[test]
    fn rejects_fractional_and_negative_ports() {
        let mut bad = minimal();
        bad["ports"] = json!(24.5);
        assert_eq!(malformed_from(json!([bad])).field, "ports");

        let mut negative = minimal();
        negative["uplink_count"] = json!(-2);
        assert_eq!(malformed_from(json!([negative])).field, "uplink_count");
    }

    #[test]
    fn rejects_non_boolean_flags() {
        let mut bad = minimal();
        bad["poe"] = json!("maybe");
        let err = malformed_from(json!([bad]));
        assert_eq!(err.field, "poe");
        assert!(err.problem.contains("boolean"));
    }

    #[test]
    fn keeps_cli_section_order() {
        let mut doc = minimal();
        doc["cli_sections"] = json!({"Zulu": ["z"], "Alpha": ["a1", "a2"]});
        let sw = &catalog_from_value(json!([doc])).unwrap()[0];
        let titles: Vec<&str> = sw.cli_sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Zulu", "Alpha"]);
    }

    #[test]
    fn names_nested_command_field() {
        let mut doc = minimal();
        doc["cli_sections"] = json!({"VLAN": ["vlan 10", 7]});
        assert_eq!(malformed_from(json!([doc])).field, "cli_sections.VLAN[1]");
    }

    #[test]
    fn top_level_must_be_array() {
        let err = catalog_from_value(minimal()).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnArray("an object")));
    }

    #[test]
    fn fallback_reports_failure() {
        let (records, message) = load_or_default(Some(Path::new("/nonexistent/switches.json")));
        assert_eq!(records.len(), default_catalog().len());
        let message = message.expect("failure message");
        assert!(message.starts_with("Failed to load uploaded catalog: reading catalog"));
    }
}
