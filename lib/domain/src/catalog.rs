//! Static component registries for both cores.

use serde::Serialize;

use crate::core_id::CoreId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    pub id: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub core_id: CoreId,
}

const fn legacy(
    id: &'static str,
    full_name: &'static str,
    description: &'static str,
) -> ComponentDescriptor {
    ComponentDescriptor {
        id,
        full_name,
        description,
        core_id: CoreId::Legacy,
    }
}

const fn replacement(
    id: &'static str,
    full_name: &'static str,
    description: &'static str,
) -> ComponentDescriptor {
    ComponentDescriptor {
        id,
        full_name,
        description,
        core_id: CoreId::Replacement,
    }
}

pub static LEGACY_COMPONENTS: [ComponentDescriptor; 8] = [
    legacy(
        "hss",
        "Home Subscriber Server",
        "Subscriber database and authentication",
    ),
    legacy(
        "mme",
        "Mobility Management Entity",
        "Handles UE mobility and session management",
    ),
    legacy(
        "sgwc",
        "Serving Gateway Control Plane",
        "Routes and forwards user data packets",
    ),
    legacy(
        "sgwu",
        "Serving Gateway User Plane",
        "User plane traffic handling",
    ),
    legacy(
        "pgwc",
        "PDN Gateway Control Plane",
        "Connects to external networks",
    ),
    legacy("pgwu", "PDN Gateway User Plane", "PDN user plane traffic"),
    legacy(
        "pcrf",
        "Policy and Charging Rules Function",
        "Policy decisions and charging",
    ),
    legacy("mongodb", "MongoDB Database", "Subscriber data storage"),
];

pub static REPLACEMENT_COMPONENTS: [ComponentDescriptor; 9] = [
    replacement(
        "amf",
        "Access and Mobility Management Function",
        "Replaces MME functionality",
    ),
    replacement(
        "smf",
        "Session Management Function",
        "Session management and IP allocation",
    ),
    replacement("upf", "User Plane Function", "Replaces SGW-U and PGW-U"),
    replacement(
        "nrf",
        "Network Repository Function",
        "Service discovery and registration",
    ),
    replacement(
        "udm",
        "Unified Data Management",
        "Replaces HSS subscriber management",
    ),
    replacement("udr", "Unified Data Repository", "Stores subscription data"),
    replacement(
        "ausf",
        "Authentication Server Function",
        "Authentication procedures",
    ),
    replacement(
        "nssf",
        "Network Slice Selection Function",
        "Network slicing selection",
    ),
    replacement("pcf", "Policy Control Function", "Replaces PCRF functionality"),
];

/// Components of `core` in catalog order.
pub fn list_components(core: CoreId) -> &'static [ComponentDescriptor] {
    match core {
        CoreId::Legacy => &LEGACY_COMPONENTS,
        CoreId::Replacement => &REPLACEMENT_COMPONENTS,
    }
}

pub fn find_component(core: CoreId, id: &str) -> Option<&'static ComponentDescriptor> {
    list_components(core).iter().find(|component| component.id == id)
}
