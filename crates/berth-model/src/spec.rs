use serde::{Deserialize, Serialize};

use crate::{Labels, PodDescription};

/// Headless service exposing the driver inside the cluster.
///
/// Emitted by the bootstrap step as a side-channel resource next to the pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverService {
    /// Service name, stable for a given submission.
    pub name: String,
    /// Label selector matching the driver pod.
    pub selector: Labels,
}

/// The accumulating submission spec threaded through the pipeline.
///
/// Combines the driver pod description with any side-channel resources the
/// step chain has produced so far. `Default` is the empty initial spec the
/// pipeline starts from.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSpec {
    /// Driver pod description.
    pub pod: PodDescription,
    /// Ancillary resources to materialize alongside the pod.
    pub services: Vec<DriverService>,
}

impl SubmissionSpec {
    /// Create the empty initial spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pod description, keeping ancillary resources.
    pub fn with_pod(mut self, pod: PodDescription) -> Self {
        self.pod = pod;
        self
    }

    /// Append an ancillary service.
    pub fn with_service(mut self, service: DriverService) -> Self {
        self.services.push(service);
        self
    }
}
