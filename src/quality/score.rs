//! Overlapping modularity results

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Overlapping modularity of one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityScore<C> {
    /// Community identifier
    pub id: C,

    /// Number of member nodes
    pub size: usize,

    /// `S_c / n`: mean of (inward - outward) / (degree * affiliations)
    pub strength: f64,

    /// `E_c / (n (n - 1))`: inward edge weight over ordered member pairs
    pub density: f64,

    /// `strength * density`; 0 for skipped communities
    pub value: f64,

    /// False when the community has fewer than two members
    pub scored: bool,
}

impl<C> CommunityScore<C> {
    pub(crate) fn skipped(id: C, size: usize) -> Self {
        Self {
            id,
            size,
            strength: 0.0,
            density: 0.0,
            value: 0.0,
            scored: false,
        }
    }
}

/// Per-community breakdown and aggregate of overlapping modularity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapScore<C> {
    /// One entry per community, in cover order
    pub communities: Vec<CommunityScore<C>>,

    /// Mean value over scored communities
    pub aggregate: f64,
}

impl<C> OverlapScore<C> {
    /// Number of communities that contributed to the aggregate
    pub fn scored_count(&self) -> usize {
        self.communities.iter().filter(|c| c.scored).count()
    }

    /// Scored communities only
    pub fn scored(&self) -> impl Iterator<Item = &CommunityScore<C>> {
        self.communities.iter().filter(|c| c.scored)
    }

    /// Score of community `id`
    pub fn get(&self, id: &C) -> Option<f64>
    where
        C: PartialEq,
    {
        self.communities.iter().find(|c| &c.id == id).map(|c| c.value)
    }

    /// Community id to value, skipped communities included as 0
    pub fn to_map(&self) -> HashMap<C, f64>
    where
        C: Clone + Eq + Hash,
    {
        self.communities
            .iter()
            .map(|c| (c.id.clone(), c.value))
            .collect()
    }

    /// Summary object for reporting
    pub fn to_json(&self) -> Value
    where
        C: Serialize,
    {
        let scored = self.scored_count();

        json!({
            "aggregate": self.aggregate,
            "community_count": self.communities.len(),
            "scored_count": scored,
            "skipped_count": self.communities.len() - scored,
            "largest_community_size": self.communities.iter().map(|c| c.size).max().unwrap_or(0),
            "communities": self.communities.iter().map(|c| {
                json!({
                    "id": c.id,
                    "size": c.size,
                    "strength": c.strength,
                    "density": c.density,
                    "value": c.value,
                    "scored": c.scored,
                })
            }).collect::<Vec<_>>()
        })
    }
}
