//! Timer-driven execution for the Fusion dashboard: the workflow runner, the
//! pulse ticker and the scheduler that owns their cancellation handles.

pub mod delay;
pub mod pulse_ticker;
pub mod scheduler;
pub mod tracing_layer;
pub mod workflow_runner;

pub use delay::{NoDelay, StepDelay, TokioDelay};
pub use pulse_ticker::PulseTicker;
pub use scheduler::Scheduler;
pub use workflow_runner::{RunOutcome, WorkflowRunner};
