mod domain;
pub use domain::constants::*;
pub use domain::{ConfigTable, Env, EnvVar, Labels, SecretMounts};

mod error;
pub use error::{ModelError, ModelResult};

mod params;
pub use params::{DependencyManifest, MainAppResource, SubmissionParams};

mod pod;
pub use pod::{Container, PodDescription, Volume, VolumeMount};

mod spec;
pub use spec::{DriverService, SubmissionSpec};
