//! Simulator - replays a request sequence one step at a time.
//!
//! The [`Simulator`] provides:
//! - Driver-level steps that always end on a terminal outcome
//! - Raw ticks that expose each CLOCK second-chance pass
//! - Rewind through a history of deep policy snapshots

use std::fmt;

use log::debug;

use crate::common::config::SimulationConfig;
use crate::common::{Error, PageId, Result};
use crate::policy::{
    AccessOutcome, AccessResult, CacheState, EvictionPolicy, Policy, PolicyKind, StatsSnapshot,
};
use crate::simulation::{Checkpoint, History, RequestGenerator};

/// What one driver call did, plus the state the display layer should show.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Index of the request that was served (or is still pending, for Step).
    pub position: usize,

    /// The requested page.
    pub page: PageId,

    pub result: AccessResult,

    /// Number of `access` calls made by this driver call.
    pub ticks: usize,

    /// Cache contents after the call.
    pub state: CacheState,

    /// Counters after the call.
    pub stats: StatsSnapshot,
}

impl StepReport {
    /// Whether the request was resolved.
    pub fn is_terminal(&self) -> bool {
        self.result.outcome.is_terminal()
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.position + 1;
        match self.result.outcome {
            AccessOutcome::Step => write!(
                f,
                "CLOCK scanning: clearing the bit under the hand, CPU waits for page {}",
                self.page
            ),
            AccessOutcome::Hit => write!(f, "Step {}: HIT page {}", step, self.page),
            AccessOutcome::Miss => {
                write!(f, "Step {}: MISS page {}.", step, self.page)?;
                if let Some(victim) = self.result.evicted {
                    write!(f, " Evicted {}.", victim)?;
                }
                Ok(())
            }
        }
    }
}

/// Drives one policy through a fixed sequence of requests.
///
/// # Stepping
/// - [`step`](Self::step) serves the next request completely. For CLOCK this
///   may take several `access` calls; the report's `ticks` says how many.
/// - [`tick`](Self::tick) makes exactly one `access` call. A CLOCK `Step`
///   leaves the request pending, so the next tick retries the same page.
///
/// Both record a checkpoint first, so [`rewind`](Self::rewind) undoes
/// exactly one call.
///
/// # Example
/// ```
/// use pagingsim::simulation::Simulator;
/// use pagingsim::policy::PolicyKind;
/// use pagingsim::common::pages;
///
/// let mut sim = Simulator::new(PolicyKind::Fifo, 3, pages(&[1, 2, 3, 4])).unwrap();
/// let reports = sim.run_to_end().unwrap();
/// assert_eq!(reports[3].result.evicted, Some(pagingsim::PageId::new(1)));
///
/// sim.rewind().unwrap();
/// assert_eq!(sim.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    requests: Vec<PageId>,
    policy: Policy,

    /// Index of the next unserved request.
    position: usize,

    history: History,
    last_report: Option<StepReport>,
}

impl Simulator {
    /// Create a simulator with a fresh policy.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(kind: PolicyKind, capacity: usize, requests: Vec<PageId>) -> Result<Self> {
        let policy = Policy::new(kind, capacity)?;
        debug!(
            "simulator: {} with {} frames over {} requests",
            kind,
            capacity,
            requests.len()
        );
        Ok(Self {
            requests,
            policy,
            position: 0,
            history: History::new(),
            last_report: None,
        })
    }

    /// Create a simulator from a validated configuration.
    ///
    /// # Errors
    /// - Any error from [`SimulationConfig::validate`]
    pub fn from_config(config: &SimulationConfig, requests: Vec<PageId>) -> Result<Self> {
        config.validate()?;
        Self::new(config.policy, config.capacity, requests)
    }

    /// Create a simulator over a freshly generated workload of
    /// `config.request_count` pages drawn from `config.page_range`.
    ///
    /// With a seed the workload is reproducible; without one it is seeded
    /// from the operating system.
    ///
    /// # Errors
    /// - Any error from [`SimulationConfig::validate_workload`]
    pub fn random(config: &SimulationConfig, seed: Option<u64>) -> Result<Self> {
        config.validate_workload()?;
        let range = config.page_range.clone();
        let mut generator = match seed {
            Some(seed) => RequestGenerator::with_seed(seed, range)?,
            None => RequestGenerator::from_entropy(range)?,
        };
        let requests = generator.generate(config.request_count);
        Self::new(config.policy, config.capacity, requests)
    }

    /// Build a simulator and apply `steps` driver steps to it.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::SequenceExhausted` if `steps` exceeds the number of requests
    pub fn replay(
        kind: PolicyKind,
        capacity: usize,
        requests: Vec<PageId>,
        steps: usize,
    ) -> Result<Self> {
        let mut sim = Self::new(kind, capacity, requests)?;
        for _ in 0..steps {
            sim.step()?;
        }
        Ok(sim)
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Serve the next request to completion.
    ///
    /// # Errors
    /// - `Error::SequenceExhausted` if every request has been served
    pub fn step(&mut self) -> Result<StepReport> {
        let page = self.pending_page()?;
        self.checkpoint();

        let mut ticks = 0;
        let result = loop {
            ticks += 1;
            let result = self.policy.access(page);
            if result.outcome.is_terminal() {
                break result;
            }
        };
        debug_assert!(ticks <= 2 * self.policy.capacity());

        Ok(self.finish(page, result, ticks))
    }

    /// Make exactly one `access` call for the pending request.
    ///
    /// # Errors
    /// - `Error::SequenceExhausted` if every request has been served
    pub fn tick(&mut self) -> Result<StepReport> {
        let page = self.pending_page()?;
        self.checkpoint();

        let result = self.policy.access(page);
        Ok(self.finish(page, result, 1))
    }

    /// Serve every remaining request.
    pub fn run_to_end(&mut self) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.remaining());
        while !self.is_finished() {
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    /// Undo the most recent `step` or `tick`.
    ///
    /// # Errors
    /// - `Error::NothingToRewind` if no step has been taken
    pub fn rewind(&mut self) -> Result<()> {
        let checkpoint = self.history.pop().ok_or(Error::NothingToRewind)?;
        self.policy = checkpoint.policy;
        self.position = checkpoint.position;
        self.last_report = checkpoint.last_report;
        debug!("simulator: rewound to position {}", self.position);
        Ok(())
    }

    /// Start over with the same requests and an empty policy of the same
    /// kind and capacity.
    pub fn reset(&mut self) {
        let (kind, capacity) = (self.policy.kind(), self.policy.capacity());
        self.policy =
            Policy::new(kind, capacity).expect("capacity was validated when the policy was built");
        self.position = 0;
        self.history.clear();
        self.last_report = None;
    }

    /// Replace the policy after an algorithm or capacity change and start
    /// over on the same requests.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0; the simulator is left
    ///   untouched
    pub fn reconfigure(&mut self, kind: PolicyKind, capacity: usize) -> Result<()> {
        self.policy = Policy::new(kind, capacity)?;
        self.position = 0;
        self.history.clear();
        self.last_report = None;
        debug!("simulator: switched to {} with {} frames", kind, capacity);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn requests(&self) -> &[PageId] {
        &self.requests
    }

    /// Index of the next request to serve.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.requests.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.requests.len()
    }

    /// The request that the next call will serve, if any.
    pub fn current_page(&self) -> Option<PageId> {
        self.requests.get(self.position).copied()
    }

    pub fn last_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    pub fn can_rewind(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current cache contents for display.
    pub fn cache_state(&self) -> CacheState {
        self.policy.cache_state()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.policy.stats()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn pending_page(&self) -> Result<PageId> {
        self.current_page().ok_or(Error::SequenceExhausted {
            position: self.position,
            len: self.requests.len(),
        })
    }

    fn checkpoint(&mut self) {
        self.history.push(Checkpoint {
            policy: self.policy.clone(),
            position: self.position,
            last_report: self.last_report.clone(),
        });
    }

    fn finish(&mut self, page: PageId, result: AccessResult, ticks: usize) -> StepReport {
        let report = StepReport {
            position: self.position,
            page,
            result,
            ticks,
            state: self.policy.cache_state(),
            stats: self.policy.stats(),
        };
        debug!("simulator: {}", report);

        if result.outcome.is_terminal() {
            self.position += 1;
        }
        self.last_report = Some(report.clone());
        report
    }
}
