pub mod clock;
pub mod error;
pub mod mount;
pub mod orchestrator;
pub mod pipeline;
pub mod steps;

pub mod prelude {
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::error::CoreError;
    pub use crate::mount::SecretVolumeMount;
    pub use crate::orchestrator::StepOrchestrator;
    pub use crate::steps::ConfigurationStep;
}
