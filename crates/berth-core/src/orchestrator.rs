//! Step orchestrator: the pure decision function mapping submission
//! parameters to the ordered configuration-step sequence.
//!
//! Steps are checked and constructed in a fixed order: service bootstrap
//! always comes first, dependency resolution follows when any dependency
//! exists, secret mounting comes last when any secret is declared. Later
//! steps may read pod and env state written by earlier ones, so the order
//! is part of the contract.

use std::sync::Arc;

use tracing::{debug, instrument, trace};
use url::Url;

use berth_model::{
    CONF_FILES, CONF_JARS, CONF_LABEL_PREFIX, CONF_SECRET_PREFIX, DependencyManifest,
    LABEL_APP_ID, LABEL_ROLE, Labels, MainAppResource, ROLE_DRIVER, SecretMounts,
    SubmissionParams,
};

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::steps::{
    ConfigurationStep, DependencyResolutionStep, SecretMountStep, ServiceBootstrapStep,
};

/// Label keys the orchestrator manages itself.
const RESERVED_LABELS: [&str; 2] = [LABEL_APP_ID, LABEL_ROLE];

/// Decides which configuration steps a submission needs.
///
/// Pure: no I/O, no mutation of external systems, no clock reads during
/// selection. Identical parameters always yield an identical sequence; the
/// injected [`Clock`] is only captured into the bootstrap step for later
/// use by that step.
pub struct StepOrchestrator {
    params: SubmissionParams,
    clock: Arc<dyn Clock>,
}

impl StepOrchestrator {
    #[inline]
    pub fn new(params: SubmissionParams, clock: Arc<dyn Clock>) -> Self {
        Self { params, clock }
    }

    /// Select and order the steps for this submission.
    ///
    /// Fails with a user-input error before any step is constructed when a
    /// reserved label key is supplied or a dependency resolves to the
    /// submitter's local filesystem.
    #[instrument(
        level = "debug",
        skip(self),
        fields(app = %self.params.app_name, app_id = %self.params.app_id),
    )]
    pub fn select_steps(&self) -> CoreResult<Vec<ConfigurationStep>> {
        self.params.validate()?;

        let custom_labels = Labels::from_config(&self.params.conf, CONF_LABEL_PREFIX);
        validate_reserved_labels(&custom_labels)?;

        let secrets = SecretMounts::from_config(&self.params.conf, CONF_SECRET_PREFIX);
        let manifest = self.dependency_manifest();
        validate_remotely_fetchable(&manifest)?;

        trace!(
            custom_labels = custom_labels.len(),
            secrets = secrets.len(),
            jars = manifest.jars.len(),
            files = manifest.files.len(),
            "parsed submission configuration",
        );

        // Bookkeeping labels win if the earlier validation is ever bypassed.
        let mut bookkeeping = Labels::new();
        bookkeeping.insert(LABEL_APP_ID, &self.params.app_id);
        bookkeeping.insert(LABEL_ROLE, ROLE_DRIVER);
        let labels = custom_labels.merged(&bookkeeping);

        let mut steps = vec![ConfigurationStep::ServiceBootstrap(
            ServiceBootstrapStep::new(
                self.params.resource_prefix(),
                labels,
                Arc::clone(&self.clock),
            ),
        )];
        if !manifest.is_empty() {
            steps.push(ConfigurationStep::DependencyResolution(
                DependencyResolutionStep::new(manifest),
            ));
        }
        if !secrets.is_empty() {
            steps.push(ConfigurationStep::SecretMount(SecretMountStep::new(
                secrets,
            )));
        }

        debug!(steps = steps.len(), "selected configuration steps");
        Ok(steps)
    }

    /// Build the jar and file lists from configuration plus the primary
    /// resource.
    ///
    /// The primary jar is appended after the configured jars, and only when
    /// not already listed there.
    fn dependency_manifest(&self) -> DependencyManifest {
        let mut jars = self.params.conf.list(CONF_JARS);
        if let Some(MainAppResource::Jar { locator }) = &self.params.main_resource {
            if !jars.iter().any(|j| j == locator) {
                jars.push(locator.clone());
            }
        }
        DependencyManifest {
            jars,
            files: self.params.conf.list(CONF_FILES),
        }
    }
}

fn validate_reserved_labels(custom: &Labels) -> CoreResult<()> {
    for key in RESERVED_LABELS {
        if custom.contains(key) {
            return Err(CoreError::ReservedLabel(key.to_string()));
        }
    }
    Ok(())
}

/// Reject any dependency the cluster cannot fetch.
///
/// The submission mechanism cannot push files from the submitting machine
/// into the cluster, so a submitter-local reference is a hard error, with
/// every offender named.
fn validate_remotely_fetchable(manifest: &DependencyManifest) -> CoreResult<()> {
    let offenders: Vec<&str> = manifest
        .locators()
        .filter(|l| is_submitter_local(l))
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(CoreError::LocalDependencies(offenders.join(", ")))
    }
}

/// A locator with no scheme, or the explicit `file` scheme, resolves to the
/// submitting machine's filesystem. Everything else (remote schemes and the
/// container-local `local` scheme) is acceptable.
fn is_submitter_local(locator: &str) -> bool {
    match Url::parse(locator) {
        Ok(url) => url.scheme() == "file",
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::{StepOrchestrator, is_submitter_local};
    use crate::clock::testing::ManualClock;
    use crate::error::CoreError;
    use crate::steps::ConfigurationStep;
    use berth_model::{ConfigTable, MainAppResource, SubmissionParams};
    use std::sync::Arc;

    fn mk_params(conf: ConfigTable, main_resource: Option<MainAppResource>) -> SubmissionParams {
        SubmissionParams::new("job1", "com.example.Main", Vec::new(), main_resource, conf)
    }

    fn mk_orchestrator(
        conf: ConfigTable,
        main_resource: Option<MainAppResource>,
    ) -> StepOrchestrator {
        StepOrchestrator::new(mk_params(conf, main_resource), Arc::new(ManualClock(1_000)))
    }

    fn step_names(steps: &[ConfigurationStep]) -> Vec<&'static str> {
        steps.iter().map(ConfigurationStep::name).collect()
    }

    #[test]
    fn bare_submission_yields_only_the_bootstrap_step() {
        let steps = mk_orchestrator(ConfigTable::new(), None)
            .select_steps()
            .unwrap();
        assert_eq!(step_names(&steps), vec!["service-bootstrap"]);
    }

    #[test]
    fn symbolic_app_name_is_rejected_at_selection_not_at_apply() {
        let params = SubmissionParams::new(
            "###",
            "com.example.Main",
            Vec::new(),
            None,
            ConfigTable::new(),
        );
        let orchestrator = StepOrchestrator::new(params, Arc::new(ManualClock(1_000)));

        match orchestrator.select_steps() {
            Err(CoreError::Model(_)) => {}
            Err(other) => panic!("expected a user-input error, got {other:?}"),
            Ok(_) => panic!("expected selection to fail for an unusable app name"),
        }
    }

    #[test]
    fn reserved_app_id_label_is_rejected_before_any_step() {
        let mut conf = ConfigTable::new();
        conf.set("driver.label.app-id", "spoofed");

        match mk_orchestrator(conf, None).select_steps() {
            Err(CoreError::ReservedLabel(key)) => assert_eq!(key, "app-id"),
            other => panic!("expected ReservedLabel, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn reserved_role_label_is_rejected_before_any_step() {
        let mut conf = ConfigTable::new();
        conf.set("driver.label.role", "executor");

        match mk_orchestrator(conf, None).select_steps() {
            Err(CoreError::ReservedLabel(key)) => assert_eq!(key, "role"),
            other => panic!("expected ReservedLabel, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn dependency_step_present_iff_jars_or_files_exist() {
        let mut conf = ConfigTable::new();
        conf.set("submit.files", "hdfs:///data/input.txt");

        let steps = mk_orchestrator(conf, None).select_steps().unwrap();
        assert_eq!(
            step_names(&steps),
            vec!["service-bootstrap", "dependency-resolution"]
        );
    }

    #[test]
    fn secret_mount_step_is_last_when_secrets_declared() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "hdfs:///lib/dep.jar")
            .set("driver.secret.db", "/mnt/db");

        let steps = mk_orchestrator(conf, None).select_steps().unwrap();
        assert_eq!(
            step_names(&steps),
            vec![
                "service-bootstrap",
                "dependency-resolution",
                "secret-mount"
            ]
        );
    }

    #[test]
    fn select_steps_is_idempotent_for_identical_parameters() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "hdfs:///lib/dep.jar")
            .set("driver.secret.db", "/mnt/db");
        let orchestrator = mk_orchestrator(conf, None);

        let first = orchestrator.select_steps().unwrap();
        let second = orchestrator.select_steps().unwrap();

        assert_eq!(step_names(&first), step_names(&second));
        match (&first[1], &second[1]) {
            (
                ConfigurationStep::DependencyResolution(a),
                ConfigurationStep::DependencyResolution(b),
            ) => assert_eq!(a.manifest(), b.manifest()),
            _ => panic!("expected dependency steps in both sequences"),
        }
    }

    #[test]
    fn file_scheme_jar_is_rejected() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "file:///tmp/a.jar");

        match mk_orchestrator(conf, None).select_steps() {
            Err(CoreError::LocalDependencies(list)) => {
                assert!(list.contains("file:///tmp/a.jar"));
            }
            other => panic!("expected LocalDependencies, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn hdfs_scheme_jar_is_accepted() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "hdfs:///a.jar");

        assert!(mk_orchestrator(conf, None).select_steps().is_ok());
    }

    #[test]
    fn every_local_offender_is_reported() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "file:///tmp/a.jar,hdfs:///ok.jar")
            .set("submit.files", "/tmp/b.txt");

        match mk_orchestrator(conf, None).select_steps() {
            Err(CoreError::LocalDependencies(list)) => {
                assert!(list.contains("file:///tmp/a.jar"));
                assert!(list.contains("/tmp/b.txt"));
                assert!(!list.contains("hdfs:///ok.jar"));
            }
            other => panic!("expected LocalDependencies, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn container_local_primary_jar_is_accepted_and_listed() {
        let orchestrator = mk_orchestrator(
            ConfigTable::new(),
            MainAppResource::from_locator("local:///app.jar"),
        );

        let steps = orchestrator.select_steps().unwrap();
        match &steps[1] {
            ConfigurationStep::DependencyResolution(step) => {
                assert_eq!(step.manifest().jars, vec!["local:///app.jar"]);
            }
            _ => panic!("expected dependency step second"),
        }
    }

    #[test]
    fn schemeless_primary_jar_defaults_to_submitter_local() {
        let orchestrator =
            mk_orchestrator(ConfigTable::new(), MainAppResource::from_locator("app.jar"));

        match orchestrator.select_steps() {
            Err(CoreError::LocalDependencies(list)) => assert!(list.contains("app.jar")),
            other => panic!("expected LocalDependencies, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn sentinel_primary_resource_adds_no_jar() {
        let orchestrator = mk_orchestrator(ConfigTable::new(), MainAppResource::from_locator("none"));
        let steps = orchestrator.select_steps().unwrap();
        assert_eq!(step_names(&steps), vec!["service-bootstrap"]);
    }

    #[test]
    fn primary_jar_already_configured_is_not_duplicated() {
        let mut conf = ConfigTable::new();
        conf.set("submit.jars", "hdfs:///app.jar");

        let orchestrator =
            mk_orchestrator(conf, MainAppResource::from_locator("hdfs:///app.jar"));
        let steps = orchestrator.select_steps().unwrap();
        match &steps[1] {
            ConfigurationStep::DependencyResolution(step) => {
                assert_eq!(step.manifest().jars, vec!["hdfs:///app.jar"]);
            }
            _ => panic!("expected dependency step second"),
        }
    }

    #[test]
    fn custom_labels_and_secrets_scenario() {
        let mut conf = ConfigTable::new();
        conf.set("driver.label.team", "x")
            .set("driver.secret.db", "/mnt/db");
        let orchestrator = mk_orchestrator(conf, None);
        let app_id = orchestrator.params.app_id.clone();

        let steps = orchestrator.select_steps().unwrap();
        assert_eq!(step_names(&steps), vec!["service-bootstrap", "secret-mount"]);

        match &steps[0] {
            ConfigurationStep::ServiceBootstrap(step) => {
                assert_eq!(step.labels().get("team"), Some("x"));
                assert_eq!(step.labels().get("app-id"), Some(app_id.as_str()));
                assert_eq!(step.labels().get("role"), Some("driver"));
            }
            _ => panic!("expected bootstrap step first"),
        }
    }

    #[test]
    fn locator_scheme_classification() {
        assert!(is_submitter_local("app.jar"));
        assert!(is_submitter_local("/tmp/a.jar"));
        assert!(is_submitter_local("file:///tmp/a.jar"));

        assert!(!is_submitter_local("hdfs:///a.jar"));
        assert!(!is_submitter_local("https://repo/a.jar"));
        assert!(!is_submitter_local("local:///opt/app.jar"));
    }
}
