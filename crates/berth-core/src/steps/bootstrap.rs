use std::sync::Arc;

use tracing::warn;

use berth_model::{
    DRIVER_SVC_SUFFIX, DriverService, ENV_DRIVER_SERVICE, Labels, MAX_SERVICE_NAME_LEN,
    SubmissionSpec,
};

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};

/// Names the driver pod, attaches the merged labels and emits the headless
/// service the driver is reachable under.
///
/// The service name is derived from the resource prefix; when that would
/// exceed the DNS label limit the step falls back to a clock-based prefix.
/// The clock is injected at construction so nothing here reads ambient state.
pub struct ServiceBootstrapStep {
    resource_prefix: String,
    labels: Labels,
    clock: Arc<dyn Clock>,
}

impl ServiceBootstrapStep {
    #[inline]
    pub fn new(resource_prefix: String, labels: Labels, clock: Arc<dyn Clock>) -> Self {
        Self {
            resource_prefix,
            labels,
            clock,
        }
    }

    /// Labels this step will attach, as captured at construction.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn service_name(&self) -> String {
        let preferred = format!("{}{DRIVER_SVC_SUFFIX}", self.resource_prefix);
        if preferred.len() <= MAX_SERVICE_NAME_LEN {
            return preferred;
        }
        let fallback = format!("app-{}{DRIVER_SVC_SUFFIX}", self.clock.now_millis());
        warn!(
            preferred = %preferred,
            fallback = %fallback,
            "preferred driver service name exceeds the DNS label limit",
        );
        fallback
    }

    pub fn apply(&self, spec: SubmissionSpec) -> CoreResult<SubmissionSpec> {
        if self.resource_prefix.is_empty() {
            return Err(CoreError::Defect(
                "service bootstrap constructed with an empty resource prefix".into(),
            ));
        }

        let service_name = self.service_name();
        let pod = spec
            .pod
            .clone()
            .with_name(format!("{}-driver", self.resource_prefix))
            .with_labels(&self.labels)
            .with_env_var(ENV_DRIVER_SERVICE, &service_name);

        Ok(spec.with_pod(pod).with_service(DriverService {
            name: service_name,
            selector: self.labels.clone(),
        }))
    }
}
