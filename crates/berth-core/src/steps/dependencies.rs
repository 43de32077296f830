use berth_model::{
    DependencyManifest, ENV_APP_CLASSPATH, ENV_APP_FILES, ENV_APP_JARS, SubmissionSpec,
};

use crate::error::{CoreError, CoreResult};

/// Container-local locator scheme, stripped when resolving run-time paths.
const LOCAL_SCHEME_PREFIX: &str = "local://";

/// Rewrites the launch environment so dependency locations are correctly
/// referenced at run time.
///
/// Purely metadata rewriting: container-local `local://` locators become
/// bare container paths, remote locators pass through verbatim, nothing is
/// fetched.
pub struct DependencyResolutionStep {
    manifest: DependencyManifest,
}

impl DependencyResolutionStep {
    #[inline]
    pub fn new(manifest: DependencyManifest) -> Self {
        Self { manifest }
    }

    /// Manifest captured at construction.
    pub fn manifest(&self) -> &DependencyManifest {
        &self.manifest
    }

    fn resolve(locator: &str) -> &str {
        locator.strip_prefix(LOCAL_SCHEME_PREFIX).unwrap_or(locator)
    }

    pub fn apply(&self, spec: SubmissionSpec) -> CoreResult<SubmissionSpec> {
        if self.manifest.is_empty() {
            return Err(CoreError::Defect(
                "dependency step constructed with an empty manifest".into(),
            ));
        }

        let jars: Vec<&str> = self.manifest.jars.iter().map(|j| Self::resolve(j)).collect();
        let files: Vec<&str> = self.manifest.files.iter().map(|f| Self::resolve(f)).collect();

        let mut pod = spec.pod.clone();
        if !jars.is_empty() {
            pod = pod
                .with_env_var(ENV_APP_JARS, jars.join(","))
                .with_env_var(ENV_APP_CLASSPATH, jars.join(":"));
        }
        if !files.is_empty() {
            pod = pod.with_env_var(ENV_APP_FILES, files.join(","));
        }

        Ok(spec.with_pod(pod))
    }
}
