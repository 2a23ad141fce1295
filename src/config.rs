//! Configuration for quality scoring

use std::sync::Arc;

use crate::quality::trace::{CommunityTrace, NoTrace};

/// Community count at which per-community work moves onto the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Settings shared by the scoring functions
#[derive(Clone)]
pub struct Config {
    /// Covers with at least this many communities are scored in parallel
    pub parallel_threshold: usize,

    /// Receives one record per scored community in overlapping modularity
    pub trace: Arc<dyn CommunityTrace>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            trace: Arc::new(NoTrace),
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(parallel_threshold: usize, trace: Arc<dyn CommunityTrace>) -> Self {
        Self {
            parallel_threshold,
            trace,
        }
    }

    /// Replace the per-community trace hook
    pub fn with_trace(mut self, trace: Arc<dyn CommunityTrace>) -> Self {
        self.trace = trace;
        self
    }

    /// Always score sequentially
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = usize::MAX;
        self
    }

    /// Whether a cover of `communities` should be scored on the rayon pool
    pub(crate) fn runs_parallel(&self, communities: usize) -> bool {
        communities >= self.parallel_threshold
    }
}
