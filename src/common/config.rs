//! Configuration constants and the simulation configuration.

use std::ops::RangeInclusive;

use crate::common::{Error, Result};
use crate::policy::PolicyKind;

/// Cache size used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 3;

/// Smallest cache size offered to students in the interactive simulator.
///
/// Policies themselves accept any capacity >= 1; this bound only keeps the
/// visualisation readable.
pub const MIN_UI_CAPACITY: usize = 3;

/// Largest cache size offered to students in the interactive simulator.
pub const MAX_UI_CAPACITY: usize = 6;

/// Number of requests in a generated workload.
pub const DEFAULT_REQUEST_COUNT: usize = 15;

/// Page ids drawn by the workload generator.
pub const DEFAULT_PAGE_RANGE: RangeInclusive<u32> = 1..=10;

/// Everything needed to start a simulation, except the request sequence
/// itself.
///
/// # Example
/// ```
/// use pagingsim::common::config::SimulationConfig;
/// use pagingsim::policy::PolicyKind;
///
/// let config = SimulationConfig::new(PolicyKind::Clock).with_capacity(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Which eviction policy to simulate.
    pub policy: PolicyKind,

    /// Number of frames in the cache.
    pub capacity: usize,

    /// How many requests a generated workload contains.
    pub request_count: usize,

    /// Inclusive range of page ids a generated workload draws from.
    pub page_range: RangeInclusive<u32>,
}

impl SimulationConfig {
    /// Default settings for the given policy.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            capacity: DEFAULT_CAPACITY,
            request_count: DEFAULT_REQUEST_COUNT,
            page_range: DEFAULT_PAGE_RANGE,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_request_count(mut self, request_count: usize) -> Self {
        self.request_count = request_count;
        self
    }

    pub fn with_page_range(mut self, page_range: RangeInclusive<u32>) -> Self {
        self.page_range = page_range;
        self
    }

    /// Check the configuration before a simulation starts.
    ///
    /// Only the cache itself is checked here; an explicit request list
    /// ignores `request_count` and `page_range`.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Check the configuration before generating a random workload.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::InvalidConfig` if the request count is 0 or the page range
    ///   is empty
    pub fn validate_workload(&self) -> Result<()> {
        self.validate()?;
        if self.request_count == 0 {
            return Err(Error::InvalidConfig(
                "request_count must be > 0".to_string(),
            ));
        }
        if self.page_range.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "page range {}..={} is empty",
                self.page_range.start(),
                self.page_range.end()
            )));
        }
        Ok(())
    }

    /// Whether the capacity is inside the range the interactive UI offers.
    pub fn is_ui_capacity(&self) -> bool {
        (MIN_UI_CAPACITY..=MAX_UI_CAPACITY).contains(&self.capacity)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(PolicyKind::Fifo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.policy, PolicyKind::Fifo);
        assert_eq!(config.capacity, 3);
        assert_eq!(config.request_count, 15);
        assert_eq!(config.page_range, 1..=10);
        assert!(config.validate().is_ok());
        assert!(config.validate_workload().is_ok());
        assert!(config.is_ui_capacity());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = SimulationConfig::new(PolicyKind::Lru).with_capacity(0);
        assert_eq!(config.validate(), Err(Error::InvalidCapacity(0)));
        assert_eq!(config.validate_workload(), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_empty_workload_rejected() {
        let config = SimulationConfig::default().with_request_count(0);
        assert!(matches!(
            config.validate_workload(),
            Err(Error::InvalidConfig(_))
        ));
        // An explicit request list does not care about the workload settings
        assert!(config.validate().is_ok());

        #[allow(clippy::reversed_empty_ranges)]
        let config = SimulationConfig::default().with_page_range(5..=1);
        assert!(matches!(
            config.validate_workload(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ui_capacity_bounds() {
        assert!(!SimulationConfig::default().with_capacity(2).is_ui_capacity());
        assert!(SimulationConfig::default().with_capacity(6).is_ui_capacity());
        assert!(!SimulationConfig::default().with_capacity(7).is_ui_capacity());
        // Outside the UI range is still a valid simulation.
        assert!(SimulationConfig::default().with_capacity(1).validate().is_ok());
    }
}
