//! Predicate filtering over a catalog.
//!
//! Every supplied criterion must hold for a record to be kept. The output is
//! a stable subsequence of the input; nothing is re-sorted.

use crate::catalog::{Layer, SwitchRecord};
use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Three-way selector for boolean attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriState {
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    pub fn accepts(self, value: bool) -> bool {
        match self {
            TriState::Any => true,
            TriState::Yes => value,
            TriState::No => !value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::Any => "any",
            TriState::Yes => "yes",
            TriState::No => "no",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriState {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(TriState::Any),
            "yes" | "true" => Ok(TriState::Yes),
            "no" | "false" => Ok(TriState::No),
            other => bail!("expected yes, no or any, got '{other}'"),
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Any,
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
        }
    }
}

/// Optional filter constraints, combined with logical AND.
///
/// Empty strings are treated the same as unset text criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Exact vendor name, case-insensitive.
    pub vendor: Option<String>,
    /// Substring of the model name, case-insensitive.
    pub model: Option<String>,
    /// Substring of [`SwitchRecord::haystack`].
    pub keyword: Option<String>,
    pub min_ports: Option<u32>,
    pub max_ports: Option<u32>,
    pub layer: Option<Layer>,
    pub poe: TriState,
    pub managed: TriState,
    pub stackable: TriState,
}

impl Criteria {
    pub fn is_unconstrained(&self) -> bool {
        text(&self.vendor).is_none()
            && text(&self.model).is_none()
            && text(&self.keyword).is_none()
            && self.min_ports.is_none()
            && self.max_ports.is_none()
            && self.layer.is_none()
            && self.poe == TriState::Any
            && self.managed == TriState::Any
            && self.stackable == TriState::Any
    }

    pub fn matches(&self, sw: &SwitchRecord) -> bool {
        if let Some(vendor) = text(&self.vendor) {
            if sw.vendor.to_lowercase() != vendor.to_lowercase() {
                return false;
            }
        }
        if let Some(model) = text(&self.model) {
            if !sw.model.to_lowercase().contains(&model.to_lowercase()) {
                return false;
            }
        }
        if let Some(keyword) = text(&self.keyword) {
            if !sw.matches_keyword(keyword) {
                return false;
            }
        }
        if self.min_ports.is_some_and(|min| sw.ports < min) {
            return false;
        }
        if self.max_ports.is_some_and(|max| sw.ports > max) {
            return false;
        }
        if self.layer.is_some_and(|layer| sw.layer != layer) {
            return false;
        }
        self.poe.accepts(sw.poe)
            && self.managed.accepts(sw.managed)
            && self.stackable.accepts(sw.stackable)
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Records satisfying every criterion, in catalog order.
pub fn filter_catalog<'a>(
    records: &'a [SwitchRecord],
    criteria: &Criteria,
) -> Vec<&'a SwitchRecord> {
    let matches: Vec<&SwitchRecord> = records.iter().filter(|sw| criteria.matches(sw)).collect();
    debug!(
        total = records.len(),
        matched = matches.len(),
        "filtered catalog"
    );
    matches
}

/// Truncate to `limit` entries; negative limits clamp to zero.
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit {
        let keep = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        items.truncate(keep);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn models(found: &[&SwitchRecord]) -> Vec<String> {
        found.iter().map(|sw| sw.model.clone()).collect()
    }

    #[test]
    fn unconstrained_criteria_is_identity() {
        let catalog = default_catalog();
        let criteria = Criteria::default();
        assert!(criteria.is_unconstrained());
        let found = filter_catalog(catalog, &criteria);
        assert_eq!(found.len(), catalog.len());
        assert!(found.iter().zip(catalog).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn empty_strings_do_not_constrain() {
        let criteria = Criteria {
            vendor: Some(String::new()),
            keyword: Some(String::new()),
            ..Criteria::default()
        };
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_catalog(default_catalog(), &criteria).len(), 16);
    }

    #[test]
    fn vendor_is_exact_not_substring() {
        let criteria = Criteria {
            vendor: Some("cisc".to_string()),
            ..Criteria::default()
        };
        assert!(filter_catalog(default_catalog(), &criteria).is_empty());

        let criteria = Criteria {
            vendor: Some("JUNIPER".to_string()),
            ..Criteria::default()
        };
        assert_eq!(
            models(&filter_catalog(default_catalog(), &criteria)),
            vec!["EX2300-24P", "EX3400-48P", "EX4300-48P"]
        );
    }

    #[test]
    fn port_bounds_are_inclusive() {
        let criteria = Criteria {
            min_ports: Some(24),
            max_ports: Some(24),
            ..Criteria::default()
        };
        let found = filter_catalog(default_catalog(), &criteria);
        assert!(!found.is_empty());
        assert!(found.iter().all(|sw| sw.ports == 24));
    }

    #[test]
    fn tri_state_parses_aliases() {
        assert_eq!("YES".parse::<TriState>().unwrap(), TriState::Yes);
        assert_eq!("false".parse::<TriState>().unwrap(), TriState::No);
        assert_eq!("any".parse::<TriState>().unwrap(), TriState::Any);
        assert!("sometimes".parse::<TriState>().is_err());
    }

    #[test]
    fn limit_clamps_negative_to_zero() {
        assert_eq!(apply_limit(vec![1, 2, 3], Some(-4)), Vec::<i32>::new());
        assert_eq!(apply_limit(vec![1, 2, 3], Some(2)), vec![1, 2]);
        assert_eq!(apply_limit(vec![1, 2, 3], Some(10)), vec![1, 2, 3]);
        assert_eq!(apply_limit(vec![1, 2, 3], None), vec![1, 2, 3]);
    }
}
