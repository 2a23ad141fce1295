//! Modularity and overlapping modularity of graph partitions and covers.
//!
//! Graphs are read through [`GraphAccessor`], implemented here for
//! petgraph's `Graph`. Communities are passed as a [`Cover`], built from
//! either a sequence of node sets or a keyed map.
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use community_quality::{modularity, Cover};
//!
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let n: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! graph.extend_with_edges([
//!     (n[0], n[1]), (n[1], n[2]), (n[2], n[0]),
//!     (n[3], n[4]), (n[4], n[5]), (n[5], n[3]),
//!     (n[2], n[3]),
//! ]);
//!
//! let partition = Cover::from(vec![vec![n[0], n[1], n[2]], vec![n[3], n[4], n[5]]]);
//! let q = modularity(&graph, &partition, None).unwrap();
//! assert!((q - 0.3571428571428571).abs() < 1e-12);
//! ```

pub mod community;
pub mod config;
pub mod error;
pub mod graph;
pub mod quality;

pub use community::{
    is_unique_partition, validate_community_ids, validate_partition, Affiliation, Community, Cover,
};
pub use config::Config;
pub use error::{QualityError, Result};
pub use graph::{EdgeAttributes, GraphAccessor, WeightKey};
pub use quality::{
    modularity, modularity_overlap, modularity_overlap_with_config, modularity_with_config,
    CommunityScore, CommunityTrace, LogTrace, NoTrace, OverlapScore, TraceRecord,
};
