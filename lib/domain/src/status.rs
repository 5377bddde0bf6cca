use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ComponentDescriptor;
use crate::core_id::CoreId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Running,
    Pending,
    Error,
    Migrating,
}

impl ComponentState {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentState::Running => "running",
            ComponentState::Pending => "pending",
            ComponentState::Error => "error",
            ComponentState::Migrating => "migrating",
        }
    }
}

/// Point-in-time health of one component. Regenerated on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentStatus {
    pub component_id: String,
    pub core_id: CoreId,
    pub status: ComponentState,
    pub pod_count: u32,
    pub cpu_usage_pct: f64,
    pub memory_usage_pct: f64,
    pub observed_at: DateTime<Utc>,
}

/// Descriptor text merged with a fresh status, as served by `/components`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    #[serde(skip)]
    pub id: String,
    pub full_name: String,
    pub description: String,
    pub status: ComponentState,
    pub pod_count: u32,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub last_updated: DateTime<Utc>,
}

impl ComponentView {
    pub fn new(descriptor: &ComponentDescriptor, status: &ComponentStatus) -> Self {
        Self {
            id: descriptor.id.to_string(),
            full_name: descriptor.full_name.to_string(),
            description: descriptor.description.to_string(),
            status: status.status,
            pod_count: status.pod_count,
            cpu_usage: status.cpu_usage_pct,
            memory_usage: status.memory_usage_pct,
            last_updated: status.observed_at,
        }
    }
}

/// Component views keyed by id, serialized as a JSON object in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentViews(pub Vec<ComponentView>);

impl ComponentViews {
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentView> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ComponentView> {
        self.0.iter().find(|view| view.id == id)
    }
}

impl Serialize for ComponentViews {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|view| (view.id.as_str(), view)))
    }
}

impl<'de> Deserialize<'de> for ComponentViews {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ViewsVisitor;

        impl<'de> serde::de::Visitor<'de> for ViewsVisitor {
            type Value = ComponentViews;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of component id to component view")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut views = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, mut view)) = map.next_entry::<String, ComponentView>()? {
                    view.id = id;
                    views.push(view);
                }
                Ok(ComponentViews(views))
            }
        }

        deserializer.deserialize_map(ViewsVisitor)
    }
}

impl<'a> IntoIterator for &'a ComponentViews {
    type Item = &'a ComponentView;
    type IntoIter = std::slice::Iter<'a, ComponentView>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
