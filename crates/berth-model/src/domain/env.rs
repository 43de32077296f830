use serde::{Deserialize, Serialize};

/// Environment variable attached to the driver container.
///
/// Both fields are plain UTF-8 strings with no validation applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    /// Name of the variable.
    name: String,
    /// Value associated with the name.
    value: String,
}

impl EnvVar {
    /// Create a new environment variable.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the variable value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<(&str, &str)> for EnvVar {
    fn from((name, value): (&str, &str)) -> Self {
        Self::new(name, value)
    }
}

/// Ordered list of environment variables.
///
/// Serialized as a transparent array wrapper.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env(pub Vec<EnvVar>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = &EnvVar> {
        self.0.iter()
    }

    /// Get the value for a name, returning the last matching entry.
    ///
    /// This allows simple override semantics when steps re-set a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|v| v.name() == name)
            .map(|v| v.value())
    }

    /// Append a variable to the environment.
    ///
    /// Later entries override earlier ones when queried via [`Env::get`].
    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.0.push(EnvVar::new(name, value));
    }

    /// Merge two environments, where entries from `other` override earlier ones.
    pub fn merged(&self, other: &Env) -> Env {
        let mut out = self.0.clone();
        out.extend(other.0.clone());
        Env(out)
    }
}
