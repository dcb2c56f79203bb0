//! Aggregation configuration and owner resolution.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Where the owner stamped on each baseline comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerSource {
    /// The owner of the host session.
    #[default]
    Session,
    /// The user named in the parsed authentication payload.
    Auth,
    /// The configured `owner` value.
    Static,
}

/// Identity information the host hands to a run.
#[derive(Debug, Clone, Default)]
pub struct RunIdentity {
    pub session_owner: Option<String>,
    pub auth_owner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AggregationConfig {
    /// Default: `session`.
    pub owner_source: Option<OwnerSource>,
    /// Static owner, also the fallback when the chosen source is empty.
    pub owner: Option<String>,
}

impl AggregationConfig {
    pub fn effective_owner_source(&self) -> OwnerSource {
        self.owner_source.unwrap_or_default()
    }

    /// Pick the owner for a run according to `owner_source`.
    pub fn resolve_owner(&self, identity: &RunIdentity) -> Result<String, ConfigError> {
        let from_source = match self.effective_owner_source() {
            OwnerSource::Session => identity.session_owner.clone(),
            OwnerSource::Auth => identity.auth_owner.clone(),
            OwnerSource::Static => None,
        };
        from_source
            .filter(|o| !o.is_empty())
            .or_else(|| self.owner.clone().filter(|o| !o.is_empty()))
            .ok_or_else(|| ConfigError::MissingOption {
                name: "owner".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RunIdentity {
        RunIdentity {
            session_owner: Some("session-user".to_string()),
            auth_owner: Some("token-user".to_string()),
        }
    }

    #[test]
    fn session_is_default_source() {
        let config = AggregationConfig::default();
        assert_eq!(config.resolve_owner(&identity()).unwrap(), "session-user");
    }

    #[test]
    fn auth_source_reads_payload_owner() {
        let config = AggregationConfig {
            owner_source: Some(OwnerSource::Auth),
            owner: None,
        };
        assert_eq!(config.resolve_owner(&identity()).unwrap(), "token-user");
    }

    #[test]
    fn static_source_ignores_identity() {
        let config = AggregationConfig {
            owner_source: Some(OwnerSource::Static),
            owner: Some("nobody".to_string()),
        };
        assert_eq!(config.resolve_owner(&identity()).unwrap(), "nobody");
    }

    #[test]
    fn missing_owner_is_an_error() {
        let config = AggregationConfig::default();
        let err = config.resolve_owner(&RunIdentity::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingOption { .. }));
    }
}
