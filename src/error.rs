//! Error types for quality scoring

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QualityError>;

/// Input-validity failures raised by the scoring functions.
///
/// None of these are transient: calling again with the same graph and
/// communities fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QualityError {
    /// The communities are not a unique, total partition of the graph's nodes
    #[error("communities are not a unique partition of the graph: {reason}")]
    InvalidPartition { reason: String },

    /// Two communities in one cover share an identifier
    #[error("community id {community} is used by more than one community")]
    DuplicateCommunity { community: String },

    /// Total edge weight is zero (or not a positive finite number)
    #[error("total edge weight is {total}; modularity is undefined")]
    DegenerateGraph { total: f64 },

    /// Overlapping modularity assumes at most one edge per node pair
    #[error("overlapping modularity is not defined for multigraphs")]
    UnsupportedGraph,

    /// A scored community contains a node with no incident edge weight
    #[error("node {node} in community {community} has zero degree")]
    DegenerateNode { node: String, community: String },

    /// No community in the cover has at least two members
    #[error("cover has no community with two or more members")]
    EmptyCover,

    /// A community references a node the graph does not contain
    #[error("node {node} in community {community} is not in the graph")]
    UnknownNode { node: String, community: String },

    /// A caller-supplied affiliation map has no entry for a scored node
    #[error("affiliation map has no entry for node {node}")]
    MissingAffiliation { node: String },
}
