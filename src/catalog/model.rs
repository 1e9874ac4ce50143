//! Record types for the switch catalog.
//!
//! Field order on [`SwitchRecord`] is the order emitted by the JSON renderer
//! and matches the external catalog document, so hand-authored inventories
//! and exported results round-trip through [`crate::catalog::parse_catalog`].

use anyhow::{Result, bail};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Layer {
    L2,
    L3,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::L2 => "L2",
            Layer::L3 => "L3",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "l2" => Ok(Layer::L2),
            "l3" => Ok(Layer::L3),
            other => bail!("unknown layer '{other}', expected L2 or L3"),
        }
    }
}

/// One titled block of configuration commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliSection {
    pub title: String,
    pub commands: Vec<String>,
}

impl CliSection {
    pub fn new<I, S>(title: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwitchRecord {
    pub vendor: String,
    pub model: String,
    pub ports: u32,
    pub poe: bool,
    pub layer: Layer,
    pub managed: bool,
    pub stackable: bool,
    pub uplink: String,
    pub uplink_count: u32,
    /// Watts; `None` when PoE is unsupported or the budget is unknown.
    pub poe_budget: Option<u32>,
    /// Serialized as a JSON object whose key order is the section order.
    #[serde(serialize_with = "serialize_sections")]
    pub cli_sections: Vec<CliSection>,
    pub troubleshooting: Vec<String>,
    pub notes: String,
}

impl SwitchRecord {
    /// Lowercased text searched by the `keyword` criterion.
    ///
    /// Section titles are not part of the haystack, only their commands.
    pub fn haystack(&self) -> String {
        let troubleshooting = self.troubleshooting.join(" ");
        let commands = self
            .cli_sections
            .iter()
            .map(|section| section.commands.join(" "))
            .collect::<Vec<_>>()
            .join(" ");
        [
            self.vendor.as_str(),
            self.model.as_str(),
            self.layer.as_str(),
            self.uplink.as_str(),
            self.notes.as_str(),
            troubleshooting.as_str(),
            commands.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.haystack().contains(&keyword.to_lowercase())
    }
}

fn serialize_sections<S>(sections: &[CliSection], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for section in sections {
        map.serialize_entry(&section.title, &section.commands)?;
    }
    map.end()
}
