//! Configuration steps the orchestrator composes into a pipeline.
//!
//! The set is closed on purpose: the orchestrator only ever selects from
//! these named variants, so an enum behind one shared `apply` contract beats
//! open subclassing here.

mod bootstrap;
pub use bootstrap::ServiceBootstrapStep;

mod dependencies;
pub use dependencies::DependencyResolutionStep;

mod secrets;
pub use secrets::SecretMountStep;

use berth_model::SubmissionSpec;

use crate::error::CoreResult;

/// One named configuration transformation applied during submission.
///
/// Steps are immutable values carrying whatever data they need, captured at
/// construction time. Business-rule validation happens upstream in the
/// orchestrator; a step only fails on defect-class conditions.
pub enum ConfigurationStep {
    /// Always present, always first.
    ServiceBootstrap(ServiceBootstrapStep),
    /// Present iff at least one jar or file dependency exists.
    DependencyResolution(DependencyResolutionStep),
    /// Present iff the secret mapping is non-empty.
    SecretMount(SecretMountStep),
}

impl ConfigurationStep {
    /// Step name used for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigurationStep::ServiceBootstrap(_) => "service-bootstrap",
            ConfigurationStep::DependencyResolution(_) => "dependency-resolution",
            ConfigurationStep::SecretMount(_) => "secret-mount",
        }
    }

    /// Apply the transformation, producing a new partial spec.
    pub fn apply(&self, spec: SubmissionSpec) -> CoreResult<SubmissionSpec> {
        match self {
            ConfigurationStep::ServiceBootstrap(step) => step.apply(spec),
            ConfigurationStep::DependencyResolution(step) => step.apply(spec),
            ConfigurationStep::SecretMount(step) => Ok(step.apply(spec)),
        }
    }
}
