//! `GraphAccessor` for petgraph's adjacency-list graph

use std::collections::HashSet;

use petgraph::graph::{EdgeReference, Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Direction, EdgeType};

use crate::graph::{EdgeAttributes, GraphAccessor, WeightKey};

/// Endpoint of `edge` opposite `node` (the edge's target for out-edges)
fn other_end<E, Ix: IndexType>(edge: &EdgeReference<'_, E, Ix>, node: NodeIndex<Ix>) -> NodeIndex<Ix> {
    if edge.source() == node {
        edge.target()
    } else {
        edge.source()
    }
}

impl<N, E, Ty, Ix> GraphAccessor for Graph<N, E, Ty, Ix>
where
    E: EdgeAttributes,
    Ty: EdgeType,
    Ix: IndexType,
{
    type NodeId = NodeIndex<Ix>;

    fn nodes(&self) -> Vec<NodeIndex<Ix>> {
        self.node_indices().collect()
    }

    fn contains_node(&self, node: &NodeIndex<Ix>) -> bool {
        node.index() < self.node_count()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn is_multigraph(&self) -> bool {
        let directed = Ty::is_directed();
        let mut seen = HashSet::with_capacity(self.edge_count());

        self.edge_references().any(|edge| {
            let (src, dst) = (edge.source(), edge.target());
            let key = if directed || src <= dst { (src, dst) } else { (dst, src) };
            !seen.insert(key)
        })
    }

    fn edge_weight(&self, u: &NodeIndex<Ix>, v: &NodeIndex<Ix>, weight: WeightKey<'_>) -> f64 {
        if !self.contains_node(u) {
            return 0.0;
        }

        self.edges(*u)
            .filter(|edge| other_end(edge, *u) == *v)
            .map(|edge| edge.weight().weight_for(weight))
            .sum()
    }

    fn out_degree(&self, node: &NodeIndex<Ix>, weight: WeightKey<'_>) -> f64 {
        if !self.contains_node(node) {
            return 0.0;
        }

        if Ty::is_directed() {
            self.edges_directed(*node, Direction::Outgoing)
                .map(|edge| edge.weight().weight_for(weight))
                .sum()
        } else {
            // Undirected self-loops touch the node at both ends
            self.edges(*node)
                .map(|edge| {
                    let w = edge.weight().weight_for(weight);
                    if edge.source() == edge.target() {
                        2.0 * w
                    } else {
                        w
                    }
                })
                .sum()
        }
    }

    fn in_degree(&self, node: &NodeIndex<Ix>, weight: WeightKey<'_>) -> f64 {
        if !Ty::is_directed() {
            return self.out_degree(node, weight);
        }
        if !self.contains_node(node) {
            return 0.0;
        }

        self.edges_directed(*node, Direction::Incoming)
            .map(|edge| edge.weight().weight_for(weight))
            .sum()
    }

    fn total_edge_weight(&self, weight: WeightKey<'_>) -> f64 {
        self.edge_references()
            .map(|edge| edge.weight().weight_for(weight))
            .sum()
    }

    fn edges_of(
        &self,
        node: &NodeIndex<Ix>,
        weight: WeightKey<'_>,
    ) -> Vec<(NodeIndex<Ix>, NodeIndex<Ix>, f64)> {
        if !self.contains_node(node) {
            return Vec::new();
        }

        self.edges(*node)
            .map(|edge| (*node, other_end(&edge, *node), edge.weight().weight_for(weight)))
            .collect()
    }
}
