//! In-memory grouping of observations by (group key, field).
//!
//! Scoped to a single aggregation call. Groups keep first-seen order; fields
//! within a group keep declared order when a field list is given, otherwise
//! first-seen order.

use hyperbaseline_core::types::{Observation, Record};
use rustc_hash::FxHashMap;

use crate::stats::parse_numeric;

/// Values collected for one field of one group.
#[derive(Debug, Clone)]
pub struct FieldSeries {
    pub field: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
struct GroupSeries {
    group_key: String,
    fields: Vec<FieldSeries>,
    field_index: FxHashMap<String, usize>,
}

impl GroupSeries {
    fn new(group_key: &str, declared: &[String]) -> Self {
        let mut group = Self {
            group_key: group_key.to_string(),
            fields: Vec::with_capacity(declared.len()),
            field_index: FxHashMap::default(),
        };
        for field in declared {
            group.series_mut(field);
        }
        group
    }

    fn series_mut(&mut self, field: &str) -> &mut FieldSeries {
        let idx = match self.field_index.get(field) {
            Some(&idx) => idx,
            None => {
                let idx = self.fields.len();
                self.fields.push(FieldSeries {
                    field: field.to_string(),
                    values: Vec::new(),
                });
                self.field_index.insert(field.to_string(), idx);
                idx
            }
        };
        &mut self.fields[idx]
    }
}

/// Observations grouped by group key, then field.
#[derive(Debug, Clone, Default)]
pub struct ObservationGroups {
    declared: Vec<String>,
    groups: Vec<GroupSeries>,
    group_index: FxHashMap<String, usize>,
}

impl ObservationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict record ingestion to `fields`, in that order.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut groups = Self::new();
        for obs in observations {
            groups.push(&obs.group_key, &obs.field_name, obs.value);
        }
        groups
    }

    /// Add one value. Non-finite values are dropped.
    pub fn push(&mut self, group_key: &str, field: &str, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.group_mut(group_key).series_mut(field).values.push(value);
    }

    /// Add a raw field value. Returns false when it is not numeric.
    pub fn push_raw(&mut self, group_key: &str, field: &str, raw: &str) -> bool {
        match parse_numeric(raw) {
            Some(value) => {
                self.push(group_key, field, value);
                true
            }
            None => false,
        }
    }

    /// Add every candidate field of `record`, grouped by its `group_by` value.
    ///
    /// Without a declared list, candidates are all fields except `group_by`
    /// and those starting with `_`. Returns false if the record has no
    /// `group_by` field.
    pub fn ingest_record(&mut self, record: &Record, group_by: &str) -> bool {
        let Some(group_key) = record.get(group_by) else {
            tracing::debug!(group_by, "record without group-by field skipped");
            return false;
        };

        // Make sure the group exists even if no field parses.
        self.group_mut(group_key);

        if self.declared.is_empty() {
            for (name, raw) in record.iter() {
                if name.starts_with('_') || name == group_by {
                    continue;
                }
                self.push_raw(group_key, name, raw);
            }
        } else {
            for idx in 0..self.declared.len() {
                let field = &self.declared[idx];
                if let Some(raw) = record.get(field) {
                    if let Some(value) = parse_numeric(raw) {
                        let field = field.clone();
                        self.push(group_key, &field, value);
                    }
                }
            }
        }
        true
    }

    /// Non-empty series in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSeries)> {
        self.groups.iter().flat_map(|group| {
            group
                .fields
                .iter()
                .filter(|series| !series.values.is_empty())
                .map(move |series| (group.group_key.as_str(), series))
        })
    }

    /// Number of groups seen, including those with no numeric values.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of non-empty series.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn group_mut(&mut self, group_key: &str) -> &mut GroupSeries {
        let idx = match self.group_index.get(group_key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.groups.push(GroupSeries::new(group_key, &self.declared));
                self.group_index.insert(group_key.to_string(), idx);
                idx
            }
        };
        &mut self.groups[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    fn entry(group: &str, field: &str, n: usize) -> (String, String, usize) {
        (group.to_string(), field.to_string(), n)
    }

    fn layout(groups: &ObservationGroups) -> Vec<(String, String, usize)> {
        groups
            .iter()
            .map(|(g, s)| (g.to_string(), s.field.clone(), s.values.len()))
            .collect()
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = ObservationGroups::from_observations(vec![
            Observation::new("b", "x", 1.0),
            Observation::new("a", "y", 2.0),
            Observation::new("b", "z", 3.0),
            Observation::new("a", "x", 4.0),
            Observation::new("b", "x", 5.0),
        ]);
        assert_eq!(
            layout(&groups),
            vec![
                entry("b", "x", 2),
                entry("b", "z", 1),
                entry("a", "y", 1),
                entry("a", "x", 1),
            ]
        );
    }

    #[test]
    fn record_skips_internal_and_group_fields() {
        let mut groups = ObservationGroups::new();
        groups.ingest_record(
            &record(&[("_time", "100"), ("user", "alice"), ("count", "3"), ("label", "n/a")]),
            "user",
        );
        assert_eq!(layout(&groups), vec![entry("alice", "count", 1)]);
    }

    #[test]
    fn missing_group_field_skips_record() {
        let mut groups = ObservationGroups::new();
        assert!(!groups.ingest_record(&record(&[("count", "3")]), "user"));
        assert_eq!(groups.group_count(), 0);
    }

    #[test]
    fn declared_fields_fix_order() {
        let mut groups = ObservationGroups::with_fields(["max", "min"]);
        groups.ingest_record(&record(&[("user", "u"), ("min", "1"), ("other", "9")]), "user");
        groups.ingest_record(&record(&[("user", "u"), ("max", "7"), ("min", "2")]), "user");
        assert_eq!(
            layout(&groups),
            vec![entry("u", "max", 1), entry("u", "min", 2)]
        );
    }

    #[test]
    fn non_numeric_and_non_finite_are_dropped() {
        let mut groups = ObservationGroups::new();
        groups.ingest_record(&record(&[("g", "a"), ("v", "nan")]), "g");
        groups.ingest_record(&record(&[("g", "a"), ("v", "x")]), "g");
        groups.push("a", "w", f64::INFINITY);
        assert!(groups.is_empty());
        assert_eq!(groups.group_count(), 1);
    }
}
