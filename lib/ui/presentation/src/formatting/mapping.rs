use serde::Serialize;

use cutover_domain::ComponentMappings;

/// One display row of the legacy to replacement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRow {
    pub legacy: String,
    pub replacement: String,
    pub description: String,
}

pub fn mapping_rows(mappings: &ComponentMappings) -> Vec<MappingRow> {
    mappings
        .mappings
        .iter()
        .map(|entry| MappingRow {
            legacy: entry
                .legacy_component_id
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| "N/A".to_string()),
            replacement: entry
                .replacement_component_ids
                .iter()
                .map(|id| id.to_uppercase())
                .collect::<Vec<_>>()
                .join(", "),
            description: entry.description.clone(),
        })
        .collect()
}
