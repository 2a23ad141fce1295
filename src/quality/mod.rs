//! Partition and cover quality scores

pub mod modularity;
pub mod overlap;
pub mod score;
pub mod trace;

pub use modularity::{modularity, modularity_with_config};
pub use overlap::{modularity_overlap, modularity_overlap_with_config};
pub use score::{CommunityScore, OverlapScore};
pub use trace::{CommunityTrace, LogTrace, NoTrace, TraceRecord};
