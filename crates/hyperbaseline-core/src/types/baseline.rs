//! The persisted baseline record.

use serde::{Deserialize, Serialize};

use super::BaselineKey;

/// Robust statistics summarizing one (group, field) pair.
///
/// Serialized field order and names are part of the store contract:
/// `_key, config_name, value, field, min, pct25, mean, median, pct75, max,
/// stdev, mad, medcouple, owner, _time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineStat {
    #[serde(rename = "_key")]
    pub key: String,
    pub config_name: String,
    /// The group key the statistics were aggregated by.
    #[serde(rename = "value")]
    pub group_key: String,
    pub field: String,
    pub min: f64,
    pub pct25: f64,
    pub mean: f64,
    pub median: f64,
    pub pct75: f64,
    pub max: f64,
    /// Population standard deviation. `None` when fewer than two values.
    pub stdev: Option<f64>,
    pub mad: f64,
    pub medcouple: f64,
    pub owner: String,
    /// Epoch seconds at computation time.
    #[serde(rename = "_time")]
    pub time: i64,
}

impl BaselineStat {
    pub fn baseline_key(&self) -> BaselineKey {
        BaselineKey::new(&self.config_name, &self.group_key, &self.field)
    }

    /// Serialize to the JSON document stored for this baseline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
