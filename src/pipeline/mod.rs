// ABOUTME: Orchestration of a republish run.
// ABOUTME: Exports the batch planner, readiness poller, runner, and errors.

mod error;
mod plan;
mod readiness;
mod runner;

pub use error::{PipelineError, PipelineErrorKind};
pub use plan::{batch, login_step};
pub use readiness::{Readiness, wait_until_ready};
pub use runner::Pipeline;
