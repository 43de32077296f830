use serde::{Deserialize, Serialize};

use crate::{Env, Labels};

/// Pod-level volume and the source backing it.
///
/// The pipeline only ever produces secret-backed volumes; the enum is closed
/// so steps can match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "source")]
pub enum Volume {
    /// Volume backed by a named cluster secret.
    Secret { name: String, secret_name: String },
}

impl Volume {
    /// Name the volume is referenced by from container mounts.
    pub fn name(&self) -> &str {
        match self {
            Volume::Secret { name, .. } => name,
        }
    }
}

/// Mount of a pod-level volume into a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    /// Name of the pod-level volume being mounted.
    pub volume_name: String,
    /// Path inside the container.
    pub mount_path: String,
}

/// The single driver container of the pod description.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Container image, if any step has set one.
    pub image: Option<String>,
    /// Environment variables, later entries overriding earlier ones.
    pub env: Env,
    /// Volume mounts into this container.
    pub volume_mounts: Vec<VolumeMount>,
}

/// Immutable pod-like resource description threaded through the pipeline.
///
/// Every mutation is a pure `with_*` builder returning a new description;
/// steps never share mutable state through it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodDescription {
    /// Pod name, empty until the bootstrap step assigns one.
    pub name: String,
    /// Labels attached to the pod.
    pub labels: Labels,
    /// Pod-level volumes.
    pub volumes: Vec<Volume>,
    /// The driver container.
    pub container: Container,
}

impl PodDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pod name.
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    /// Attach one label, overwriting any previous value for the key.
    pub fn with_label<K, V>(mut self, key: K, val: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.labels.insert(key, val);
        self
    }

    /// Attach a whole label set, its entries winning on collision.
    pub fn with_labels(mut self, labels: &Labels) -> Self {
        self.labels = self.labels.merged(labels);
        self
    }

    /// Add a pod-level volume.
    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volumes.push(volume);
        self
    }

    /// Add a volume mount to the driver container.
    pub fn with_volume_mount(mut self, mount: VolumeMount) -> Self {
        self.container.volume_mounts.push(mount);
        self
    }

    /// Add an environment variable to the driver container.
    pub fn with_env_var<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.container.env.push(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{PodDescription, Volume, VolumeMount};
    use crate::Labels;

    #[test]
    fn builders_return_new_values_without_touching_input() {
        let base = PodDescription::new();
        let named = base.clone().with_name("job1-driver");

        assert_eq!(base.name, "");
        assert_eq!(named.name, "job1-driver");
    }

    #[test]
    fn with_labels_merges_over_existing() {
        let mut extra = Labels::new();
        extra.insert("role", "driver");

        let pod = PodDescription::new()
            .with_label("role", "stale")
            .with_label("team", "x")
            .with_labels(&extra);

        assert_eq!(pod.labels.get("role"), Some("driver"));
        assert_eq!(pod.labels.get("team"), Some("x"));
    }

    #[test]
    fn volume_mount_and_env_land_on_container() {
        let pod = PodDescription::new()
            .with_volume(Volume::Secret {
                name: "secret-db".into(),
                secret_name: "db".into(),
            })
            .with_volume_mount(VolumeMount {
                volume_name: "secret-db".into(),
                mount_path: "/mnt/secrets/db".into(),
            })
            .with_env_var("SECRET_PATH_DB", "/mnt/secrets/db");

        assert_eq!(pod.volumes.len(), 1);
        assert_eq!(pod.volumes[0].name(), "secret-db");
        assert_eq!(pod.container.volume_mounts.len(), 1);
        assert_eq!(pod.container.env.get("SECRET_PATH_DB"), Some("/mnt/secrets/db"));
    }
}
