//! Bundled reference catalog.
//!
//! Built once on first access and shared read-only for the rest of the
//! process; queries borrow it and never mutate it.

use super::model::{CliSection, Layer, SwitchRecord};
use std::sync::LazyLock;

static DEFAULT_CATALOG: LazyLock<Vec<SwitchRecord>> = LazyLock::new(build_default_catalog);

/// The built-in catalog: six vendors, sixteen models.
pub fn default_catalog() -> &'static [SwitchRecord] {
    &DEFAULT_CATALOG
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn cisco_ios() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "VLAN configuration",
            [
                "configure terminal",
                "vlan 10",
                "name USERS",
                "interface gig1/0/1",
                "switchport mode access",
                "switchport access vlan 10",
                "spanning-tree portfast",
                "end",
                "write memory",
            ],
        ),
        CliSection::new(
            "Uplink trunk (example)",
            [
                "configure terminal",
                "interface tengig1/1/1",
                "description Uplink-to-core",
                "switchport mode trunk",
                "switchport trunk allowed vlan 10,20,30",
                "end",
                "write memory",
            ],
        ),
    ]
}

fn junos() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "VLAN configuration",
            [
                "configure",
                "set vlans USERS vlan-id 10",
                "set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members USERS",
                "commit and-quit",
            ],
        ),
        CliSection::new(
            "Uplink trunk (example)",
            [
                "configure",
                "set interfaces xe-0/1/0 unit 0 family ethernet-switching port-mode trunk",
                "set interfaces xe-0/1/0 unit 0 family ethernet-switching vlan members [ USERS VOICE ]",
                "commit and-quit",
            ],
        ),
    ]
}

fn aruba_aos_s() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "VLAN configuration (AOS-S/ProCurve style)",
            [
                "configure terminal",
                "vlan 10",
                "name USERS",
                "untagged 1-12",
                "exit",
                "write memory",
            ],
        ),
        CliSection::new(
            "Uplink (tagged VLANs)",
            [
                "configure terminal",
                "interface 25",
                "name Uplink-to-core",
                "tagged 10,20",
                "exit",
                "write memory",
            ],
        ),
    ]
}

fn aruba_aos_cx() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "VLAN configuration (AOS-CX style)",
            [
                "configure terminal",
                "vlan 10",
                "name USERS",
                "interface 1/1/1",
                "no shutdown",
                "vlan access 10",
                "end",
                "write memory",
            ],
        ),
        CliSection::new(
            "Uplink trunk (AOS-CX)",
            [
                "configure terminal",
                "interface 1/1/49",
                "description Uplink-to-core",
                "no shutdown",
                "vlan trunk native 1",
                "vlan trunk allowed 10,20,30",
                "end",
                "write memory",
            ],
        ),
    ]
}

fn unifi() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "Controller configuration",
            [
                "Managed via UniFi Network application (GUI/API).",
                "SSH is mostly for diagnostics; config is normally via controller profiles.",
            ],
        ),
    ]
}

fn netgear_smart() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "VLAN configuration (varies by model)",
            [
                "Many Netgear Smart/Managed switches are configured via web UI.",
                "Some models have a CLI, but commands vary by family.",
                "Best approach: use the UI/API and export config backups regularly.",
            ],
        ),
    ]
}

fn unmanaged() -> Vec<CliSection> {
    vec![
        CliSection::new(
            "Configuration",
            [
                "Unmanaged switch; no CLI configuration available.",
            ],
        ),
    ]
}

fn build_default_catalog() -> Vec<SwitchRecord> {
    vec![
        SwitchRecord {
            vendor: "Cisco".to_string(),
            model: "Catalyst 9200L-24P".to_string(),
            ports: 24,
            poe: true,
            layer: Layer::L2,
            managed: true,
            stackable: true,
            uplink: "4x10G".to_string(),
            uplink_count: 4,
            poe_budget: Some(370),
            cli_sections: cisco_ios(),
            troubleshooting: lines(&[
                "show interfaces status",
                "show power inline",
                "show spanning-tree summary",
                "show cdp neighbors detail",
            ]),
            notes: "Campus access (9200L). Good standard edge switch option.".to_string(),
        },
        SwitchRecord {
            vendor: "Cisco".to_string(),
            model: "Catalyst 9300-48P".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4x25G".to_string(),
            uplink_count: 4,
            poe_budget: Some(715),
            cli_sections: cisco_ios(),
            troubleshooting: lines(&[
                "show interfaces status",
                "show power inline",
                "show etherchannel summary",
                "show spanning-tree interface status",
                "show logging | last 50",
            ]),
            notes: "Enterprise access with L3 capabilities and stacking.".to_string(),
        },
        SwitchRecord {
            vendor: "Cisco".to_string(),
            model: "Catalyst 9500-24Y4C".to_string(),
            ports: 24,
            poe: false,
            layer: Layer::L3,
            managed: true,
            stackable: false,
            uplink: "40/100G".to_string(),
            uplink_count: 4,
            poe_budget: None,
            cli_sections: vec![CliSection::new(
                "Routing (example)",
                [
                    "configure terminal",
                    "ip routing",
                    "interface vlan 10",
                    "ip address 10.10.10.1 255.255.255.0",
                    "end",
                    "write memory",
                ],
            )],
            troubleshooting: lines(&[
                "show ip interface brief",
                "show ip route",
                "show platform hardware capacity",
                "show interfaces counters errors",
            ]),
            notes: "Core/distribution L3 switch (no PoE).".to_string(),
        },
        SwitchRecord {
            vendor: "Juniper".to_string(),
            model: "EX2300-24P".to_string(),
            ports: 24,
            poe: true,
            layer: Layer::L2,
            managed: true,
            stackable: true,
            uplink: "4x10G (SFP+)".to_string(),
            uplink_count: 4,
            poe_budget: Some(370),
            cli_sections: junos(),
            troubleshooting: lines(&[
                "show interfaces terse",
                "show poe interface all",
                "show ethernet-switching table",
                "show chassis alarms",
            ]),
            notes: "Access switch with Virtual Chassis (model dependent).".to_string(),
        },
        SwitchRecord {
            vendor: "Juniper".to_string(),
            model: "EX3400-48P".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4x10G (SFP+)".to_string(),
            uplink_count: 4,
            poe_budget: Some(740),
            cli_sections: junos(),
            troubleshooting: lines(&[
                "show interfaces terse",
                "show spanning-tree interface",
                "show ethernet-switching table",
                "show virtual-chassis",
            ]),
            notes: "Campus access with stronger performance; VC capable.".to_string(),
        },
        SwitchRecord {
            vendor: "Juniper".to_string(),
            model: "EX4300-48P".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4x40G".to_string(),
            uplink_count: 4,
            poe_budget: Some(715),
            cli_sections: junos(),
            troubleshooting: lines(&[
                "show interfaces terse",
                "show poe interface all",
                "show ethernet-switching table",
                "show chassis hardware",
                "show virtual-chassis",
            ]),
            notes: "Virtual Chassis capable with PoE+.".to_string(),
        },
        SwitchRecord {
            vendor: "Aruba".to_string(),
            model: "2530-24G-PoE+".to_string(),
            ports: 24,
            poe: true,
            layer: Layer::L2,
            managed: true,
            stackable: false,
            uplink: "4xSFP".to_string(),
            uplink_count: 4,
            poe_budget: Some(195),
            cli_sections: aruba_aos_s(),
            troubleshooting: lines(&[
                "show interfaces brief",
                "show power-over-ethernet brief",
                "show vlan",
                "show trunks",
                "show spanning-tree",
            ]),
            notes: "AOS-S access switch, simple and reliable edge.".to_string(),
        },
        SwitchRecord {
            vendor: "Aruba".to_string(),
            model: "2930F-48G-PoE+".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4xSFP+ (10G)".to_string(),
            uplink_count: 4,
            poe_budget: Some(740),
            cli_sections: aruba_aos_s(),
            troubleshooting: lines(&[
                "show interfaces brief",
                "show power-over-ethernet brief",
                "show lacp",
                "show spanning-tree",
                "show logging -r",
            ]),
            notes: "AOS-S (2930F) often used for campus access; stacking via VSF.".to_string(),
        },
        SwitchRecord {
            vendor: "Aruba".to_string(),
            model: "CX 6100 48G".to_string(),
            ports: 48,
            poe: false,
            layer: Layer::L2,
            managed: true,
            stackable: true,
            uplink: "4xSFP+ (10G)".to_string(),
            uplink_count: 4,
            poe_budget: None,
            cli_sections: aruba_aos_cx(),
            troubleshooting: lines(&[
                "show interface brief",
                "show vlan",
                "show lacp interfaces",
                "show logging -r",
            ]),
            notes: "Entry AOS-CX access; modern OS, good for standard edge.".to_string(),
        },
        SwitchRecord {
            vendor: "Aruba".to_string(),
            model: "CX 6200F 48G PoE+".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4xSFP+ (10G)".to_string(),
            uplink_count: 4,
            poe_budget: Some(740),
            cli_sections: aruba_aos_cx(),
            troubleshooting: lines(&[
                "show interface brief",
                "show power-over-ethernet brief",
                "show vsf",
                "show vlan",
                "show lacp interfaces",
            ]),
            notes: "AOS-CX access/distribution; common campus standard with VSF.".to_string(),
        },
        SwitchRecord {
            vendor: "Aruba".to_string(),
            model: "CX 6300M 48G PoE+".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "4xSFP+/4xSFP56".to_string(),
            uplink_count: 4,
            poe_budget: Some(1440),
            cli_sections: aruba_aos_cx(),
            troubleshooting: lines(&[
                "show interface brief",
                "show power-over-ethernet brief",
                "show vsx status",
                "show lacp interfaces",
                "show logging -r",
            ]),
            notes: "Higher-performance CX stack/VSX capable distribution layer.".to_string(),
        },
        SwitchRecord {
            vendor: "Ubiquiti".to_string(),
            model: "UniFi USW-24".to_string(),
            ports: 24,
            poe: false,
            layer: Layer::L2,
            managed: true,
            stackable: false,
            uplink: "2xSFP".to_string(),
            uplink_count: 2,
            poe_budget: None,
            cli_sections: unifi(),
            troubleshooting: lines(&[
                "show interfaces",
                "mca-cli-op info",
                "swctrl poe show",
            ]),
            notes: "Managed via controller; CLI limited to diagnostics.".to_string(),
        },
        SwitchRecord {
            vendor: "Ubiquiti".to_string(),
            model: "UniFi USW-Pro-48-PoE".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L2,
            managed: true,
            stackable: false,
            uplink: "4xSFP+".to_string(),
            uplink_count: 4,
            poe_budget: Some(600),
            cli_sections: unifi(),
            troubleshooting: lines(&[
                "show interfaces",
                "mca-cli-op info",
                "swctrl poe show",
                "swctrl port show <port>",
            ]),
            notes: "Controller-managed PoE access; diagnostics via SSH limited.".to_string(),
        },
        SwitchRecord {
            vendor: "Netgear".to_string(),
            model: "GS108".to_string(),
            ports: 8,
            poe: false,
            layer: Layer::L2,
            managed: false,
            stackable: false,
            uplink: "None".to_string(),
            uplink_count: 0,
            poe_budget: None,
            cli_sections: unmanaged(),
            troubleshooting: lines(&[
                "Use link LEDs and cable testing; no CLI available.",
            ]),
            notes: "Unmanaged desktop switch.".to_string(),
        },
        SwitchRecord {
            vendor: "Netgear".to_string(),
            model: "M4300-52G-PoE+".to_string(),
            ports: 48,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "2x40G".to_string(),
            uplink_count: 2,
            poe_budget: Some(740),
            cli_sections: netgear_smart(),
            troubleshooting: lines(&[
                "show interface status",
                "show poe status",
                "show spanning-tree",
            ]),
            notes: "Stackable campus PoE switch (commands vary by firmware).".to_string(),
        },
        SwitchRecord {
            vendor: "HPE".to_string(),
            model: "2920-24G-PoE+".to_string(),
            ports: 24,
            poe: true,
            layer: Layer::L3,
            managed: true,
            stackable: true,
            uplink: "2xSFP+".to_string(),
            uplink_count: 2,
            poe_budget: Some(370),
            cli_sections: aruba_aos_s(),
            troubleshooting: lines(&[
                "show interfaces brief",
                "show power-over-ethernet brief",
                "show spanning-tree",
                "show logging -r",
            ]),
            notes: "ProCurve/ArubaOS-Switch family with stacking support.".to_string(),
        },
    ]
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_shared() {
        let first = default_catalog();
        let second = default_catalog();
        assert_eq!(first.len(), 16);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn poe_budget_absent_only_without_poe() {
        for sw in default_catalog() {
            assert_eq!(
                sw.poe_budget.is_some(),
                sw.poe,
                "{} {} budget/poe mismatch",
                sw.vendor,
                sw.model
            );
        }
    }

    #[test]
    fn every_record_has_cli_and_troubleshooting() {
        for sw in default_catalog() {
            assert!(!sw.cli_sections.is_empty(), "{} has no CLI", sw.model);
            assert!(!sw.troubleshooting.is_empty(), "{} has no tips", sw.model);
        }
    }
}
