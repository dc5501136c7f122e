use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row's state for one part: which services were ticked and at what price.
///
/// Field names are serialized in camelCase to stay byte-compatible with the
/// backup files the original quote manager produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelection {
    #[serde(default)]
    pub funil: bool,
    #[serde(default)]
    pub pintura: bool,
    #[serde(default)]
    pub retoq: bool,
    #[serde(default)]
    pub martel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_price: Option<f64>,
}

impl ServiceSelection {
    /// The blank row a new quote form seeds for every catalog part.
    pub fn empty() -> Self {
        Self {
            part_description: Some(String::new()),
            part_price: Some(0.0),
            ..Self::default()
        }
    }

    /// Price contribution of this row; absent or non-finite prices count as 0.
    pub fn price(&self) -> f64 {
        self.part_price.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}

/// Sums `partPrice` across every entry of the services mapping.
///
/// Total and pure: an empty mapping yields 0 and the result does not depend
/// on key order. Every writer must call this immediately before persisting a
/// quote so the cached `totalValue` stays in sync.
pub fn compute_total(services: &BTreeMap<String, ServiceSelection>) -> f64 {
    services.values().map(ServiceSelection::price).sum()
}
