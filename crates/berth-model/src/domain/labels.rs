use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigTable;

/// Structured key–value metadata based on [`BTreeMap`].
///
/// Insertion order is irrelevant and keys are unique. The orchestrator keeps
/// two keys for itself ([`crate::LABEL_APP_ID`], [`crate::LABEL_ROLE`]); see
/// the reserved-label validation in the core crate.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Collect custom labels from prefixed configuration entries.
    ///
    /// Every `<prefix><key> = <value>` option contributes the label
    /// `<key> = <value>`.
    pub fn from_config(conf: &ConfigTable, prefix: &str) -> Self {
        Self(conf.with_prefix(prefix))
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge two label sets, where entries from `other` win on collision.
    pub fn merged(&self, other: &Labels) -> Labels {
        let mut out = self.0.clone();
        out.extend(other.0.clone());
        Labels(out)
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;
    use crate::ConfigTable;

    #[test]
    fn from_config_collects_prefixed_entries() {
        let mut conf = ConfigTable::new();
        conf.set("driver.label.team", "x").set("unrelated", "y");

        let labels = Labels::from_config(&conf, "driver.label.");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("team"), Some("x"));
    }

    #[test]
    fn merged_other_wins_on_collision() {
        let mut base = Labels::new();
        base.insert("role", "user-supplied");
        base.insert("team", "x");

        let mut bookkeeping = Labels::new();
        bookkeeping.insert("role", "driver");

        let merged = base.merged(&bookkeeping);
        assert_eq!(merged.get("role"), Some("driver"));
        assert_eq!(merged.get("team"), Some("x"));
    }

    #[test]
    fn contains_reports_presence() {
        let mut labels = Labels::new();
        labels.insert("app-id", "app-123");

        assert!(labels.contains("app-id"));
        assert!(!labels.contains("role"));
    }
}
