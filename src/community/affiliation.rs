//! Node to community index

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::community::Cover;

/// Maps each node to the set of communities it belongs to.
///
/// Nodes that appear in no community are absent; `count` reports 0 for them.
#[derive(Debug, Clone)]
pub struct Affiliation<N, C> {
    map: HashMap<N, HashSet<C>>,
}

impl<N, C> Affiliation<N, C>
where
    N: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    /// Index every membership of `cover`
    pub fn from_cover(cover: &Cover<N, C>) -> Self {
        let mut map: HashMap<N, HashSet<C>> = HashMap::with_capacity(cover.membership_count());

        for community in cover {
            for node in &community.members {
                map.entry(node.clone()).or_default().insert(community.id.clone());
            }
        }

        Self { map }
    }

    /// Record that `node` belongs to `community`
    pub fn insert(&mut self, node: N, community: C) {
        self.map.entry(node).or_default().insert(community);
    }

    /// Communities containing `node`, if any
    pub fn communities(&self, node: &N) -> Option<&HashSet<C>> {
        self.map.get(node)
    }

    /// Number of communities containing `node`
    pub fn count(&self, node: &N) -> usize {
        self.map.get(node).map_or(0, HashSet::len)
    }

    /// Whether `node` is a member of `community`
    pub fn is_member(&self, node: &N, community: &C) -> bool {
        self.map
            .get(node)
            .map_or(false, |communities| communities.contains(community))
    }

    /// Number of indexed nodes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &HashSet<C>)> {
        self.map.iter()
    }
}

impl<N, C> Default for Affiliation<N, C> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<N, C> FromIterator<(N, C)> for Affiliation<N, C>
where
    N: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (N, C)>>(iter: T) -> Self {
        let mut affiliation = Affiliation::default();
        for (node, community) in iter {
            affiliation.insert(node, community);
        }
        affiliation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_gives_single_affiliation() {
        let cover = Cover::from(vec![vec![0, 1], vec![2]]);
        let affiliation = Affiliation::from_cover(&cover);

        assert_eq!(affiliation.len(), 3);
        assert_eq!(affiliation.count(&0), 1);
        assert!(affiliation.is_member(&2, &1));
        assert!(!affiliation.is_member(&2, &0));
    }

    #[test]
    fn test_overlap_counts_every_community() {
        let cover = Cover::from(vec![vec!["a", "b"], vec!["b", "c"], vec!["b"]]);
        let affiliation = Affiliation::from_cover(&cover);

        assert_eq!(affiliation.count(&"b"), 3);
        assert_eq!(affiliation.count(&"a"), 1);
    }

    #[test]
    fn test_unaffiliated_node_has_zero_count() {
        let cover: Cover<u32> = Cover::from(vec![vec![1u32]]);
        let affiliation = Affiliation::from_cover(&cover);

        assert_eq!(affiliation.count(&9), 0);
        assert!(affiliation.communities(&9).is_none());
    }

    #[test]
    fn test_collect_from_pairs() {
        let affiliation: Affiliation<u8, &str> =
            vec![(1, "x"), (1, "y"), (2, "x")].into_iter().collect();

        assert_eq!(affiliation.count(&1), 2);
        assert_eq!(affiliation.count(&2), 1);
    }
}
