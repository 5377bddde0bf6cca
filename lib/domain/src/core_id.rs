use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TelemetryError;

/// One of the two parallel network-core deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoreId {
    /// The 4G EPC being phased out.
    Legacy,
    /// The 5G core taking over.
    Replacement,
}

impl CoreId {
    pub const ALL: [CoreId; 2] = [CoreId::Legacy, CoreId::Replacement];

    /// Label used in log records and UI badges.
    pub fn label(self) -> &'static str {
        match self {
            CoreId::Legacy => "4G",
            CoreId::Replacement => "5G",
        }
    }

    /// Lower-case segment used in API paths.
    pub fn path_segment(self) -> &'static str {
        match self {
            CoreId::Legacy => "4g",
            CoreId::Replacement => "5g",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CoreId::Legacy => "4G EPC Core",
            CoreId::Replacement => "5G Core (5GC)",
        }
    }
}

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CoreId {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4g" | "legacy" => Ok(CoreId::Legacy),
            "5g" | "replacement" => Ok(CoreId::Replacement),
            other => Err(TelemetryError::InvalidCore(other.to_string())),
        }
    }
}

impl Serialize for CoreId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CoreId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which cores a combined log query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoreFilter {
    #[default]
    Both,
    Only(CoreId),
}

impl CoreFilter {
    pub fn cores(self) -> Vec<CoreId> {
        match self {
            CoreFilter::Both => CoreId::ALL.to_vec(),
            CoreFilter::Only(core) => vec![core],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CoreFilter::Both => "All",
            CoreFilter::Only(core) => core.label(),
        }
    }

    /// All -> 4G -> 5G -> All.
    pub fn next(self) -> Self {
        match self {
            CoreFilter::Both => CoreFilter::Only(CoreId::Legacy),
            CoreFilter::Only(CoreId::Legacy) => CoreFilter::Only(CoreId::Replacement),
            CoreFilter::Only(CoreId::Replacement) => CoreFilter::Both,
        }
    }
}

impl FromStr for CoreFilter {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "both" => Ok(CoreFilter::Both),
            other => other.parse().map(CoreFilter::Only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_segments_and_labels() {
        assert_eq!("4g".parse::<CoreId>().unwrap(), CoreId::Legacy);
        assert_eq!("5G".parse::<CoreId>().unwrap(), CoreId::Replacement);
        assert!(matches!(
            "6g".parse::<CoreId>(),
            Err(TelemetryError::InvalidCore(raw)) if raw == "6g"
        ));
    }

    #[test]
    fn serializes_as_upper_case_label() {
        let json = serde_json::to_string(&CoreId::Legacy).unwrap();
        assert_eq!(json, "\"4G\"");
        let back: CoreId = serde_json::from_str("\"5G\"").unwrap();
        assert_eq!(back, CoreId::Replacement);
    }

    #[test]
    fn core_filter_cycles_through_all_options() {
        let start = CoreFilter::Both;
        assert_eq!(start.next(), CoreFilter::Only(CoreId::Legacy));
        assert_eq!(start.next().next().next(), start);
        assert_eq!("all".parse::<CoreFilter>().unwrap(), CoreFilter::Both);
        assert_eq!(CoreFilter::Both.cores().len(), 2);
    }
}
