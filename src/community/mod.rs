//! Community collections and their derived indexes

pub mod affiliation;
pub mod validate;

pub use affiliation::Affiliation;
pub use validate::{is_unique_partition, validate_community_ids, validate_partition};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// A single community: an identifier and its member nodes
#[derive(Debug, Clone)]
pub struct Community<N, C> {
    /// Identifier, either a position or a caller-supplied key
    pub id: C,

    /// Member nodes
    pub members: HashSet<N>,
}

impl<N, C> Community<N, C> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered communities over a graph's nodes, overlaps allowed.
///
/// A cover whose communities are disjoint and span the whole node set is a
/// partition; `validate_partition` checks this. Sequences of node sets get
/// positional ids `0..n`, keyed maps keep their keys.
#[derive(Debug, Clone)]
pub struct Cover<N, C = usize> {
    communities: Vec<Community<N, C>>,
}

impl<N, C> Cover<N, C> {
    /// Create a cover with no communities
    pub fn new() -> Self {
        Self {
            communities: Vec::new(),
        }
    }

    /// Append a community
    pub fn push<I>(&mut self, id: C, members: I)
    where
        N: Eq + Hash,
        I: IntoIterator<Item = N>,
    {
        self.communities.push(Community {
            id,
            members: members.into_iter().collect(),
        });
    }

    /// Communities in insertion order
    pub fn communities(&self) -> &[Community<N, C>] {
        &self.communities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Community<N, C>> {
        self.communities.iter()
    }

    /// Number of communities (empty ones included)
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Total number of memberships across all communities
    pub fn membership_count(&self) -> usize {
        self.communities.iter().map(Community::len).sum()
    }
}

impl<N, C> Default for Cover<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N, C> IntoIterator for &'a Cover<N, C> {
    type Item = &'a Community<N, C>;
    type IntoIter = std::slice::Iter<'a, Community<N, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.communities.iter()
    }
}

impl<N, C, S> FromIterator<(C, S)> for Cover<N, C>
where
    N: Eq + Hash,
    S: IntoIterator<Item = N>,
{
    fn from_iter<T: IntoIterator<Item = (C, S)>>(iter: T) -> Self {
        let mut cover = Cover::new();
        for (id, members) in iter {
            cover.push(id, members);
        }
        cover
    }
}

impl<N, S> From<Vec<S>> for Cover<N, usize>
where
    N: Eq + Hash,
    S: IntoIterator<Item = N>,
{
    fn from(sets: Vec<S>) -> Self {
        sets.into_iter().enumerate().collect()
    }
}

impl<N, C, S> From<HashMap<C, S>> for Cover<N, C>
where
    N: Eq + Hash,
    S: IntoIterator<Item = N>,
{
    fn from(map: HashMap<C, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<N, C, S> From<BTreeMap<C, S>> for Cover<N, C>
where
    N: Eq + Hash,
    S: IntoIterator<Item = N>,
{
    fn from(map: BTreeMap<C, S>) -> Self {
        map.into_iter().collect()
    }
}
