use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{
    parts::seed_services,
    service::{compute_total, ServiceSelection},
};

/// Client and vehicle details captured on a quote, all free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cpf_cnpj: String,
    /// Calendar date as entered on the form, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub estimator: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub year: String,
}

/// One service quote: client data, per-part selections, and the cached total.
///
/// `id` is absent until the store persists the record for the first time and
/// immutable afterwards. `totalValue` is derived from `services` on every
/// save; it is never an independent source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub client_data: ClientData,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceSelection>,
    #[serde(default)]
    pub observations: String,
    /// Milliseconds since epoch, stamped on first save and preserved across edits.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub total_value: f64,
    /// User-uploaded logo, kept as an opaque base64 payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Budget {
    /// Builds a blank in-memory quote with every catalog part pre-seeded,
    /// the way the entry form starts. No `id` until the store assigns one.
    pub fn new() -> Self {
        Self {
            id: None,
            client_data: ClientData::default(),
            services: seed_services(),
            observations: String::new(),
            created_at: Utc::now().timestamp_millis(),
            total_value: 0.0,
            logo: None,
        }
    }

    /// Recomputes the cached total from the current services mapping.
    pub fn refresh_total(&mut self) {
        self.total_value = compute_total(&self.services);
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new()
    }
}
