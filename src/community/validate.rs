//! Unique partition check run before standard modularity

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use crate::community::Cover;
use crate::error::{QualityError, Result};
use crate::graph::GraphAccessor;

/// Unassigned nodes listed in an error message
const MAX_REPORTED: usize = 5;

/// Check that `partition` assigns every node of `graph` to exactly one
/// community and names no node outside the graph.
pub fn validate_partition<G, C>(graph: &G, partition: &Cover<G::NodeId, C>) -> Result<()>
where
    G: GraphAccessor + ?Sized,
    C: Debug,
{
    let nodes = graph.nodes();
    let mut seen: HashSet<&G::NodeId> = HashSet::with_capacity(nodes.len());

    for community in partition {
        for node in &community.members {
            if !graph.contains_node(node) {
                return Err(invalid(format!(
                    "node {:?} in community {:?} is not in the graph",
                    node, community.id
                )));
            }
            if !seen.insert(node) {
                return Err(invalid(format!(
                    "node {:?} appears in more than one community (again in {:?})",
                    node, community.id
                )));
            }
        }
    }

    let missing: Vec<&G::NodeId> = nodes.iter().filter(|node| !seen.contains(node)).collect();
    if !missing.is_empty() {
        return Err(invalid(format!(
            "{} node(s) not in any community: {}",
            missing.len(),
            missing
                .iter()
                .take(MAX_REPORTED)
                .map(|node| format!("{:?}", node))
                .join(", ")
        )));
    }

    Ok(())
}

/// Whether `partition` is a unique partition of `graph`'s nodes
pub fn is_unique_partition<G, C>(graph: &G, partition: &Cover<G::NodeId, C>) -> bool
where
    G: GraphAccessor + ?Sized,
    C: Debug,
{
    validate_partition(graph, partition).is_ok()
}

/// Check that no two communities of `cover` share an id.
///
/// Results and membership tests are keyed by id, so a repeated id would
/// merge two communities.
pub fn validate_community_ids<N, C>(cover: &Cover<N, C>) -> Result<()>
where
    C: Eq + Hash + Debug,
{
    let mut ids: HashSet<&C> = HashSet::with_capacity(cover.len());
    for community in cover {
        if !ids.insert(&community.id) {
            log::debug!("Rejected cover: community id {:?} repeats", community.id);
            return Err(QualityError::DuplicateCommunity {
                community: format!("{:?}", community.id),
            });
        }
    }
    Ok(())
}

fn invalid(reason: String) -> QualityError {
    log::debug!("Rejected partition: {}", reason);
    QualityError::InvalidPartition { reason }
}
