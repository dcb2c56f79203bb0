//! Outlier detection methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The four bound-computation strategies.
///
/// Names are matched exactly (`ESD`, `Hampel`, `SBR`, `ASBR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Extreme studentized deviate: mean ± t·stdev.
    #[serde(rename = "ESD")]
    Esd,
    /// Hampel identifier: median ± t·MAD.
    #[default]
    Hampel,
    /// Standard boxplot rule: quartiles ± c·IQD.
    #[serde(rename = "SBR")]
    Sbr,
    /// Asymmetric boxplot rule, skew-adjusted by the medcouple.
    #[serde(rename = "ASBR")]
    Asbr,
}

impl OutlierMethod {
    pub const ALL: [OutlierMethod; 4] = [Self::Esd, Self::Hampel, Self::Sbr, Self::Asbr];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Esd => "ESD",
            Self::Hampel => "Hampel",
            Self::Sbr => "SBR",
            Self::Asbr => "ASBR",
        }
    }

    /// Threshold used when none is supplied.
    pub fn default_threshold(&self) -> f64 {
        match self {
            Self::Esd | Self::Hampel => 3.0,
            Self::Sbr | Self::Asbr => 1.5,
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutlierMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ConfigError::UnknownMethod {
                value: s.to_string(),
            })
    }
}
