#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use switchcat::SwitchRecord;
use tempfile::NamedTempFile;

pub fn switchcat_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_switchcat"))
}

// Runs the command and fails with captured stderr when it exits non-zero.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .env_remove("SWITCHCAT_CATALOG")
        .env_remove("SWITCHCAT_LOG")
        .output()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed with {}: {}",
            cmd,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn write_catalog(doc: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to create catalog fixture")?;
    serde_json::to_writer_pretty(&mut file, doc)?;
    file.flush()?;
    Ok(file)
}

pub fn models<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a SwitchRecord>,
{
    records.into_iter().map(|sw| sw.model.clone()).collect()
}

/// Hand-authored inventory covering optional-field defaults and ordering.
pub fn sample_inventory() -> Value {
    json!([
        {
            "vendor": "MikroTik",
            "model": "CRS326-24G-2S+",
            "ports": 24,
            "poe": false,
            "layer": "L3",
            "managed": true,
            "stackable": false,
            "uplink": "2xSFP+",
            "uplink_count": 2,
            "cli_sections": {
                "Bridge VLAN": [
                    "/interface bridge add name=br1 vlan-filtering=yes",
                    "/interface bridge vlan add bridge=br1 vlan-ids=10"
                ],
                "Backup": ["/system backup save"]
            },
            "troubleshooting": ["/interface print stats", "/log print"],
            "notes": "RouterOS or SwOS dual boot."
        },
        {
            "vendor": "TP-Link",
            "model": "TL-SG105",
            "ports": 5,
            "poe": false,
            "layer": "L2",
            "managed": false,
            "stackable": false
        },
        {
            "vendor": "MikroTik",
            "model": "CRS328-24P-4S+",
            "ports": 24,
            "poe": true,
            "layer": "l3",
            "managed": true,
            "stackable": false,
            "uplink": "4xSFP+",
            "uplink_count": 4,
            "poe_budget": 500,
            "notes": "PoE-out on all copper ports."
        }
    ])
}
