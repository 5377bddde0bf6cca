//! Legacy to replacement component correspondence, used for migration visualization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMappingEntry {
    /// `None` when the replacement component has no predecessor.
    #[serde(rename = "4g")]
    pub legacy_component_id: Option<String>,
    #[serde(rename = "5g")]
    pub replacement_component_ids: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMappings {
    pub mappings: Vec<ComponentMappingEntry>,
}

struct StaticMapping {
    legacy: Option<&'static str>,
    replacement: &'static [&'static str],
    description: &'static str,
}

static MAPPINGS: [StaticMapping; 9] = [
    StaticMapping {
        legacy: Some("hss"),
        replacement: &["udm", "udr", "ausf"],
        description: "HSS splits into UDM, UDR, and AUSF",
    },
    StaticMapping {
        legacy: Some("mme"),
        replacement: &["amf"],
        description: "MME becomes AMF in 5G",
    },
    StaticMapping {
        legacy: Some("sgwc"),
        replacement: &["smf"],
        description: "SGW-C merges into SMF",
    },
    StaticMapping {
        legacy: Some("sgwu"),
        replacement: &["upf"],
        description: "SGW-U becomes part of UPF",
    },
    StaticMapping {
        legacy: Some("pgwc"),
        replacement: &["smf"],
        description: "PGW-C merges into SMF",
    },
    StaticMapping {
        legacy: Some("pgwu"),
        replacement: &["upf"],
        description: "PGW-U becomes part of UPF",
    },
    StaticMapping {
        legacy: Some("pcrf"),
        replacement: &["pcf"],
        description: "PCRF becomes PCF",
    },
    StaticMapping {
        legacy: None,
        replacement: &["nrf"],
        description: "NRF is new in 5G (service discovery)",
    },
    StaticMapping {
        legacy: None,
        replacement: &["nssf"],
        description: "NSSF is new in 5G (network slicing)",
    },
];

pub fn list_mappings() -> Vec<ComponentMappingEntry> {
    MAPPINGS
        .iter()
        .map(|mapping| ComponentMappingEntry {
            legacy_component_id: mapping.legacy.map(str::to_string),
            replacement_component_ids: mapping
                .replacement
                .iter()
                .map(|id| id.to_string())
                .collect(),
            description: mapping.description.to_string(),
        })
        .collect()
}
