use crate::core_id::CoreId;

/// Used when no palette is registered for a `(core, component)` pair.
pub const GENERIC_MESSAGE: &str = "Generic log entry";

const GENERIC_PALETTE: &[&str] = &[GENERIC_MESSAGE];

/// Log messages a component of `core` may plausibly emit.
pub fn messages_for(core: CoreId, component: &str) -> &'static [&'static str] {
    match (core, component) {
        (CoreId::Legacy, "hss") => &[
            "Diameter connection established",
            "Processing authentication request for IMSI",
            "Subscriber profile updated successfully",
            "HSS binding to S6a interface",
            "Authentication vector generated",
        ],
        (CoreId::Legacy, "mme") => &[
            "S1AP connection from eNodeB accepted",
            "UE attach request received",
            "Initial context setup completed",
            "Handover procedure initiated",
            "Tracking area update processed",
        ],
        (CoreId::Legacy, "sgwc") => &[
            "GTP-C tunnel created",
            "Bearer context modification completed",
            "Session created for UE",
            "S11 interface message received",
            "Path management timer reset",
        ],
        (CoreId::Legacy, "sgwu") => &[
            "GTP-U tunnel established",
            "User plane packet forwarding active",
            "Downlink data notification sent",
            "Buffer size threshold reached",
            "PFCP session established",
        ],
        (CoreId::Legacy, "pgwc") => &[
            "PDN connection request processed",
            "IP address allocated from pool",
            "Default bearer created",
            "QoS policy applied",
            "S5/S8 session established",
        ],
        (CoreId::Legacy, "pgwu") => &[
            "User plane rules installed",
            "NAT translation configured",
            "Traffic shaping policy active",
            "Packet inspection completed",
            "Data volume report generated",
        ],
        (CoreId::Legacy, "pcrf") => &[
            "Policy decision for session",
            "Diameter Gx message processed",
            "Charging rules updated",
            "QoS modification request",
            "Session binding created",
        ],
        (CoreId::Legacy, "mongodb") => &[
            "Connection pool active",
            "Collection query executed",
            "Document indexed successfully",
            "Replica set heartbeat",
            "Write operation completed",
        ],
        (CoreId::Replacement, "amf") => &[
            "NAS registration request received",
            "NGAP connection from gNodeB",
            "5G-GUTI assigned to UE",
            "N2 handover procedure started",
            "PDU session establishment initiated",
        ],
        (CoreId::Replacement, "smf") => &[
            "PDU session created for UE",
            "N4 session established with UPF",
            "IP address allocated from DNN pool",
            "QoS flow created",
            "Session modification completed",
        ],
        (CoreId::Replacement, "upf") => &[
            "PFCP association established",
            "PDR/FAR rules installed",
            "N3/N9 tunnel created",
            "User plane packet processing active",
            "Usage reporting threshold reached",
        ],
        (CoreId::Replacement, "nrf") => &[
            "NF registration accepted",
            "Service discovery response sent",
            "NF profile updated",
            "Subscription notification triggered",
            "NF heartbeat received",
        ],
        (CoreId::Replacement, "udm") => &[
            "Subscription retrieval completed",
            "Authentication credential fetched",
            "Access management info updated",
            "SDM subscription created",
            "SUPI-SUCI mapping processed",
        ],
        (CoreId::Replacement, "udr") => &[
            "Data storage operation completed",
            "Subscription data retrieved",
            "Policy data updated",
            "Application context stored",
            "Exposure data accessed",
        ],
        (CoreId::Replacement, "ausf") => &[
            "5G-AKA authentication initiated",
            "Auth vector request to UDM",
            "SUCI de-concealment completed",
            "EAP-AKA' procedure started",
            "Authentication result confirmed",
        ],
        (CoreId::Replacement, "nssf") => &[
            "Slice selection completed",
            "NSI information retrieved",
            "S-NSSAI mapped to NRF",
            "Allowed NSSAI configured",
            "Network slice availability checked",
        ],
        (CoreId::Replacement, "pcf") => &[
            "AM policy association created",
            "SM policy decision sent",
            "UE policy container updated",
            "Access and mobility policy applied",
            "Session binding information updated",
        ],
        _ => GENERIC_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::list_components;

    #[test]
    fn every_catalog_component_has_a_palette() {
        for core in CoreId::ALL {
            for component in list_components(core) {
                let messages = messages_for(core, component.id);
                assert_eq!(messages.len(), 5, "{core}:{}", component.id);
                assert!(!messages.contains(&GENERIC_MESSAGE));
            }
        }
    }

    #[test]
    fn palettes_are_keyed_by_core() {
        assert_eq!(messages_for(CoreId::Replacement, "mme"), &[GENERIC_MESSAGE]);
        assert_eq!(messages_for(CoreId::Legacy, "nope"), &[GENERIC_MESSAGE]);
    }
}
