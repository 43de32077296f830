use tracing::{debug, instrument};

use berth_model::SubmissionSpec;

use crate::error::CoreResult;
use crate::steps::ConfigurationStep;

/// Fold the step sequence over the initial spec.
///
/// Applies each step in order, threading the evolving spec forward. Adds
/// and removes nothing itself; a defect raised by a step aborts the whole
/// submission.
#[instrument(level = "debug", skip_all, fields(steps = steps.len()))]
pub fn run(steps: &[ConfigurationStep], initial: SubmissionSpec) -> CoreResult<SubmissionSpec> {
    let mut spec = initial;
    for step in steps {
        spec = step.apply(spec)?;
        debug!(step = step.name(), "applied configuration step");
    }
    Ok(spec)
}
