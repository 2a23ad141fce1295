//! Read-only graph access consumed by the scoring functions

pub mod adapter;
pub mod attributes;

pub use attributes::{EdgeAttributes, DEFAULT_EDGE_WEIGHT};

use std::fmt::Debug;
use std::hash::Hash;

/// Name of the edge attribute to read weights from.
///
/// `None` treats every edge as weight 1. `Some(key)` reads `key` from the
/// edge's attributes and falls back to 1 when the edge does not carry it.
pub type WeightKey<'a> = Option<&'a str>;

/// Capabilities a graph store must expose to be scored.
///
/// Undirected implementations report the same value from `in_degree` and
/// `out_degree`, with self-loops counted twice. `total_edge_weight` counts
/// each edge once, not once per direction.
pub trait GraphAccessor {
    /// Opaque node identifier
    type NodeId: Clone + Eq + Hash + Debug;

    /// All nodes of the graph
    fn nodes(&self) -> Vec<Self::NodeId>;

    /// Whether `node` belongs to the graph
    fn contains_node(&self, node: &Self::NodeId) -> bool;

    /// Whether edges have a direction
    fn is_directed(&self) -> bool;

    /// Whether any node pair is joined by more than one edge
    fn is_multigraph(&self) -> bool;

    /// Weight of the edge `u -> v`, summed over parallel edges; 0 when absent
    fn edge_weight(&self, u: &Self::NodeId, v: &Self::NodeId, weight: WeightKey<'_>) -> f64;

    /// Weighted out-degree; an undirected self-loop counts twice
    fn out_degree(&self, node: &Self::NodeId, weight: WeightKey<'_>) -> f64;

    /// Weighted in-degree; equal to `out_degree` for undirected graphs
    fn in_degree(&self, node: &Self::NodeId, weight: WeightKey<'_>) -> f64;

    /// Sum of all edge weights, each edge counted once
    fn total_edge_weight(&self, weight: WeightKey<'_>) -> f64;

    /// Edges leaving `node` as `(node, neighbour, weight)`.
    ///
    /// For undirected graphs this is every incident edge, with a self-loop
    /// listed once.
    fn edges_of(&self, node: &Self::NodeId, weight: WeightKey<'_>) -> Vec<(Self::NodeId, Self::NodeId, f64)>;
}
