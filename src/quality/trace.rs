//! Per-community observability hooks for overlapping modularity

use std::fmt::Debug;

/// Terms computed for one scored community
#[derive(Debug, Clone, Copy)]
pub struct TraceRecord<'a> {
    pub community: &'a dyn Debug,
    pub size: usize,
    /// Mean membership-weighted strength, `S_c / n`
    pub strength: f64,
    /// Inward edge density, `E_c / (n (n - 1))`
    pub density: f64,
    pub score: f64,
}

/// Receives one record per scored community, in cover order
pub trait CommunityTrace: Send + Sync {
    fn community_scored(&self, record: &TraceRecord<'_>);
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl CommunityTrace for NoTrace {
    fn community_scored(&self, _record: &TraceRecord<'_>) {}
}

/// Writes each record through the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl CommunityTrace for LogTrace {
    fn community_scored(&self, record: &TraceRecord<'_>) {
        log::info!(
            "community {:?}: size={} strength={} density={} score={}",
            record.community,
            record.size,
            record.strength,
            record.density,
            record.score
        );
    }
}

impl<F> CommunityTrace for F
where
    F: Fn(&TraceRecord<'_>) + Send + Sync,
{
    fn community_scored(&self, record: &TraceRecord<'_>) {
        self(record)
    }
}
