//! Baseline storage keys.

use std::fmt;

use crate::constants::KEY_DELIMITER;

/// Identity of one baseline: `{config_name}#{group_key}#{field}`.
///
/// The delimiter is not escaped. A `#` inside any part produces a key that
/// still round-trips through the store (the parts are stored separately) but
/// can collide with another triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaselineKey {
    pub config_name: String,
    pub group_key: String,
    pub field: String,
}

impl BaselineKey {
    pub fn new(
        config_name: impl Into<String>,
        group_key: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            config_name: config_name.into(),
            group_key: group_key.into(),
            field: field.into(),
        }
    }

    /// Render the storage key.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BaselineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}",
            self.config_name,
            self.group_key,
            self.field,
            d = KEY_DELIMITER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_hash_delimited_key() {
        let key = BaselineKey::new("ui_usage", "alice", "max_hour");
        assert_eq!(key.render(), "ui_usage#alice#max_hour");
    }

    #[test]
    fn delimiter_inside_parts_is_not_escaped() {
        let key = BaselineKey::new("cfg", "a#b", "f");
        assert_eq!(key.render(), "cfg#a#b#f");
    }
}
