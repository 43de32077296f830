use berth_model::{SecretMounts, SubmissionSpec};

use crate::mount::SecretVolumeMount;

/// Mounts every user-declared secret into the driver container.
///
/// Reuses the [`SecretVolumeMount`] triple per entry. An empty mapping makes
/// the step degenerate to identity; the orchestrator never constructs it
/// that way, so no defect is raised.
pub struct SecretMountStep {
    mounts: SecretMounts,
}

impl SecretMountStep {
    #[inline]
    pub fn new(mounts: SecretMounts) -> Self {
        Self { mounts }
    }

    /// Mapping captured at construction.
    pub fn mounts(&self) -> &SecretMounts {
        &self.mounts
    }

    pub fn apply(&self, spec: SubmissionSpec) -> SubmissionSpec {
        let pod = self.mounts.iter().fold(spec.pod.clone(), |pod, (name, path)| {
            SecretVolumeMount::for_secret(name, path).apply(pod, Some(name))
        });
        spec.with_pod(pod)
    }
}
