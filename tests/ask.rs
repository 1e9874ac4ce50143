// Keyword scorer ranking and suggestion text.
mod support;

use anyhow::Result;
use switchcat::{
    NO_MATCH_MESSAGE, Suggestion, answer_question, default_catalog, parse_catalog,
    score_and_rank, suggest,
};

use support::sample_inventory;

#[test]
fn vendor_and_features_outrank_feature_only_matches() -> Result<()> {
    let ranked = score_and_rank(default_catalog(), "cisco 48 port poe stackable");
    let best = ranked[0];
    assert_eq!(best.record.vendor, "Cisco");
    assert!(best.record.poe && best.record.stackable);
    assert!(best.score >= 7);
    let best_other = ranked
        .iter()
        .filter(|s| s.record.vendor != "Cisco")
        .map(|s| s.score)
        .max()
        .unwrap_or(0);
    assert!(best_other <= 4);
    assert!(best.score > best_other);
    Ok(())
}

// Equal scores keep catalog order, run after run.
#[test]
fn ranking_is_stable() -> Result<()> {
    let query = "PoE stackable switch for layer 3 uplinks";
    let first: Vec<(u32, &str)> = score_and_rank(default_catalog(), query)
        .iter()
        .map(|s| (s.score, s.record.model.as_str()))
        .collect();
    let second: Vec<(u32, &str)> = score_and_rank(default_catalog(), query)
        .iter()
        .map(|s| (s.score, s.record.model.as_str()))
        .collect();
    assert_eq!(first, second);

    assert!(first.windows(2).all(|pair| pair[0].0 >= pair[1].0));
    let position = |model: &str| {
        default_catalog()
            .iter()
            .position(|sw| sw.model == model)
            .expect("model in catalog")
    };
    for pair in first.windows(2) {
        if pair[0].0 == pair[1].0 {
            assert!(position(pair[0].1) < position(pair[1].1));
        }
    }
    // poe + stack + L3 + uplink bonus
    assert_eq!(first[0], (6, "Catalyst 9300-48P"));
    Ok(())
}

#[test]
fn troubleshoot_rule_needs_entries() -> Result<()> {
    let inventory = parse_catalog(&sample_inventory().to_string())?;
    let ranked = score_and_rank(&inventory, "how do I troubleshoot this?");
    let scores: Vec<(u32, &str)> = ranked
        .iter()
        .map(|s| (s.score, s.record.model.as_str()))
        .collect();
    assert_eq!(
        scores,
        vec![(1, "CRS326-24G-2S+"), (0, "TL-SG105"), (0, "CRS328-24P-4S+")]
    );
    Ok(())
}

#[test]
fn unrelated_question_gets_guidance() -> Result<()> {
    assert_eq!(
        suggest(default_catalog(), "what is the weather like?"),
        Suggestion::NoMatch
    );
    assert_eq!(
        answer_question(default_catalog(), "what is the weather like?"),
        NO_MATCH_MESSAGE
    );
    Ok(())
}

#[test]
fn suggestion_summarizes_best_match() -> Result<()> {
    let answer = answer_question(default_catalog(), "Juniper EX4300-48P troubleshoot");
    let expected = [
        "Suggested match: Juniper EX4300-48P (L3, 48 ports, PoE, stackable).",
        "Uplinks: 4 @ 4x40G. PoE budget: 715.",
        "Notes: Virtual Chassis capable with PoE+.",
        "Key configuration sections:",
        "  - VLAN configuration: configure; set vlans USERS vlan-id 10; set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members USERS; commit and-quit",
        "  - Uplink trunk (example): configure; set interfaces xe-0/1/0 unit 0 family ethernet-switching port-mode trunk; set interfaces xe-0/1/0 unit 0 family ethernet-switching vlan members [ USERS VOICE ]; commit and-quit",
        "Troubleshooting tips: show interfaces terse; show poe interface all; show ethernet-switching table; show chassis hardware ...",
        "You can see full details with:",
        "  switchcat --vendor \"Juniper\" --model \"EX4300-48P\" --include-cli --group-by-vendor",
    ]
    .join("\n");
    assert_eq!(answer, expected);
    Ok(())
}

#[test]
fn missing_budget_reads_na() -> Result<()> {
    let answer = answer_question(default_catalog(), "Catalyst 9500-24Y4C");
    assert!(answer.starts_with("Suggested match: Cisco Catalyst 9500-24Y4C (L3, 24 ports, non-PoE, non-stackable)."));
    assert!(answer.contains("Uplinks: 4 @ 40/100G. PoE budget: N/A."));
    assert!(answer.contains("  - Routing (example): configure terminal; ip routing; interface vlan 10; ip address 10.10.10.1 255.255.255.0 ..."));
    Ok(())
}
