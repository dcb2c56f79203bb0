//! A single numeric observation produced by the host pipeline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub group_key: String,
    pub field_name: String,
    pub value: f64,
}

impl Observation {
    pub fn new(group_key: impl Into<String>, field_name: impl Into<String>, value: f64) -> Self {
        Self {
            group_key: group_key.into(),
            field_name: field_name.into(),
            value,
        }
    }
}
