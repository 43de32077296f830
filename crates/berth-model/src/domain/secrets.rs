use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigTable;

/// Mapping from secret name to the path it is mounted at inside the driver
/// container.
///
/// Each entry is independent; multiple secrets may be mounted at once.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretMounts(pub BTreeMap<String, String>);

impl SecretMounts {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Collect secret mounts from prefixed configuration entries.
    ///
    /// Every `<prefix><secret-name> = <mount-path>` option contributes one
    /// mount.
    pub fn from_config(conf: &ConfigTable, prefix: &str) -> Self {
        Self(conf.with_prefix(prefix))
    }

    /// Returns `true` if no mounts are declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of declared mounts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a mount.
    pub fn insert<K, V>(&mut self, name: K, path: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(name.into(), path.into());
        self
    }

    /// Iterate through all mounts as `(secret name, mount path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
