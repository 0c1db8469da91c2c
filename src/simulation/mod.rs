//! Step-by-step simulation over a request sequence.
//!
//! # Components
//! - [`Simulator`] - Replays requests against one policy, with rewind
//! - [`History`] / [`Checkpoint`] - Deep snapshots taken before each step
//! - [`RequestGenerator`] - Random request sequences
//! - [`StepReport`] - What a step did, for the display layer

mod driver;
mod history;
mod workload;

pub use driver::{Simulator, StepReport};
pub use history::{Checkpoint, History};
pub use workload::RequestGenerator;
