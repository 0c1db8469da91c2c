//! PagingSim - a step-by-step teaching simulator for page replacement.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           PagingSim                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulation Driver (simulation/)                │   │
//! │  │   Simulator + History (rewind) + RequestGenerator        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ access(page)                     │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Eviction Policies (policy/)  [Runtime Swappable]  │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     FIFO | LIFO | LRU | LFU | CLOCK             │   │   │
//! │  │   │     each owns its own frame store                │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      AccessResult + CacheState + StatsSnapshot           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Common (common/)                               │   │
//! │  │     PageId + FrameId + Error + SimulationConfig          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`policy`] - The five eviction policies and their snapshots
//! - [`simulation`] - Stepping, rewind and workload generation
//!
//! # Quick Start
//! ```
//! use pagingsim::common::pages;
//! use pagingsim::policy::{AccessOutcome, PolicyKind};
//! use pagingsim::simulation::Simulator;
//! use pagingsim::PageId;
//!
//! let mut sim = Simulator::new(PolicyKind::Clock, 3, pages(&[1, 2, 3, 4])).unwrap();
//! sim.step().unwrap();
//! sim.step().unwrap();
//! sim.step().unwrap();
//!
//! // Every bit is set: the hand clears three of them before evicting page 1
//! let report = sim.step().unwrap();
//! assert_eq!(report.ticks, 4);
//! assert_eq!(report.result.outcome, AccessOutcome::Miss);
//! assert_eq!(report.result.evicted, Some(PageId::new(1)));
//! ```

pub mod common;
pub mod policy;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::config::SimulationConfig;
pub use common::{Error, FrameId, PageId, Result};

pub use policy::{
    AccessOutcome, AccessResult, CacheState, EvictionPolicy, Policy, PolicyKind, StatsSnapshot,
};
pub use simulation::{RequestGenerator, Simulator, StepReport};
