use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Arbitrary string-keyed submission options based on [`BTreeMap`].
///
/// The pipeline reads this table through key-prefix conventions (see
/// [`crate::CONF_LABEL_PREFIX`], [`crate::CONF_SECRET_PREFIX`]) and two
/// well-known list keys ([`crate::CONF_JARS`], [`crate::CONF_FILES`]).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTable(pub BTreeMap<String, String>);

impl ConfigTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or overwrite an option.
    ///
    /// Returns `self` for chaining.
    pub fn set<K, V>(&mut self, key: K, val: V) -> &mut Self
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

    /// Collect every entry whose key starts with `prefix`, with the prefix
    /// stripped from the returned keys.
    pub fn with_prefix(&self, prefix: &str) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), v.clone()))
            })
            .collect()
    }

    /// Read a comma-separated list option.
    ///
    /// Entries are trimmed and empty entries dropped; a missing key yields
    /// an empty list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigTable;

    #[test]
    fn with_prefix_strips_prefix_and_skips_bare_key() {
        let mut conf = ConfigTable::new();
        conf.set("driver.label.team", "infra")
            .set("driver.label.tier", "batch")
            .set("driver.label.", "dangling")
            .set("other.key", "x");

        let labels = conf.with_prefix("driver.label.");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("team").map(String::as_str), Some("infra"));
        assert_eq!(labels.get("tier").map(String::as_str), Some("batch"));
    }

    #[test]
    fn list_splits_trims_and_drops_empty_entries() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", " a.jar, b.jar ,,c.jar ");

        assert_eq!(conf.list("submit.jars"), vec!["a.jar", "b.jar", "c.jar"]);
    }

    #[test]
    fn list_of_missing_key_is_empty() {
        let conf = ConfigTable::new();
        assert!(conf.list("submit.jars").is_empty());
    }

    #[test]
    fn serde_transparent_roundtrip_json() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "a.jar");

        let json = serde_json::to_string(&conf).unwrap();
        assert!(json.starts_with('{'));

        let back: ConfigTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("submit.jars"), Some("a.jar"));
    }
}
