//! Conditional secret-to-container plumbing.
//!
//! Any "optional named secret becomes a (volume, mount, env) triple"
//! requirement goes through [`SecretVolumeMount`] instead of duplicating the
//! conditional logic per secret type.

use berth_model::{ENV_SECRET_PREFIX, PodDescription, Volume, VolumeMount};

/// Describes where one secret lands inside the driver pod.
///
/// [`SecretVolumeMount::apply`] is a pure function: given `None` it returns
/// the pod unchanged, given `Some(secret)` it adds one pod-level volume, one
/// matching container mount and one environment variable whose value is the
/// mount path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretVolumeMount {
    /// Name of the pod-level volume to create.
    pub volume_name: String,
    /// Path the volume is mounted at inside the container.
    pub mount_path: String,
    /// Environment variable pointing at the mount path.
    pub env_name: String,
}

impl SecretVolumeMount {
    /// Derive the conventional triple for a named secret.
    ///
    /// Volume `secret-<name>`, env `SECRET_PATH_<NAME>` with dashes and dots
    /// mapped to underscores.
    pub fn for_secret(secret_name: &str, mount_path: &str) -> Self {
        let env_suffix: String = secret_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        Self {
            volume_name: format!("secret-{secret_name}"),
            mount_path: mount_path.to_string(),
            env_name: format!("{ENV_SECRET_PREFIX}{env_suffix}"),
        }
    }

    /// Conditionally wire the secret into the pod.
    pub fn apply(&self, pod: PodDescription, secret_name: Option<&str>) -> PodDescription {
        match secret_name {
            None => pod,
            Some(secret) => pod
                .with_volume(Volume::Secret {
                    name: self.volume_name.clone(),
                    secret_name: secret.to_string(),
                })
                .with_volume_mount(VolumeMount {
                    volume_name: self.volume_name.clone(),
                    mount_path: self.mount_path.clone(),
                })
                .with_env_var(&self.env_name, &self.mount_path),
        }
    }
}
