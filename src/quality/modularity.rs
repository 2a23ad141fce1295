//! Standard weighted modularity of a partition
//!
//! ```text
//! Q = norm * Σ_c Σ_{u,v ∈ c} (A_uv - k_in(u) * k_out(v) * norm)
//! ```
//!
//! with `norm = 1/(2m)` for undirected graphs and `1/m` for directed ones.
//! The inner double sum splits into the intra-community adjacency weight
//! minus `norm * K_in(c) * K_out(c)`, where `K` is the community's summed
//! degree, so each community is visited once per member edge instead of once
//! per member pair.

use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;

use crate::community::{validate_community_ids, validate_partition, Affiliation, Community, Cover};
use crate::config::Config;
use crate::error::{QualityError, Result};
use crate::graph::{GraphAccessor, WeightKey};

/// Modularity of `partition` on `graph` with the default configuration.
///
/// Fails with `InvalidPartition` unless every node is in exactly one
/// community, with `DuplicateCommunity` when two communities share an id,
/// and with `DegenerateGraph` when the graph has no edge weight.
pub fn modularity<G, C>(graph: &G, partition: &Cover<G::NodeId, C>, weight: WeightKey<'_>) -> Result<f64>
where
    G: GraphAccessor + Sync,
    G::NodeId: Send + Sync,
    C: Clone + Eq + Hash + Debug + Send + Sync,
{
    modularity_with_config(graph, partition, weight, &Config::default())
}

/// Modularity of `partition` on `graph`
pub fn modularity_with_config<G, C>(
    graph: &G,
    partition: &Cover<G::NodeId, C>,
    weight: WeightKey<'_>,
    config: &Config,
) -> Result<f64>
where
    G: GraphAccessor + Sync,
    G::NodeId: Send + Sync,
    C: Clone + Eq + Hash + Debug + Send + Sync,
{
    validate_community_ids(partition)?;
    validate_partition(graph, partition)?;

    let m = graph.total_edge_weight(weight);
    if !(m.is_finite() && m > 0.0) {
        return Err(QualityError::DegenerateGraph { total: m });
    }

    let directed = graph.is_directed();
    let norm = if directed { 1.0 / m } else { 1.0 / (2.0 * m) };

    log::info!(
        "Computing modularity of {} communities (directed: {}, total weight: {})",
        partition.len(),
        directed,
        m
    );

    let affiliation = Affiliation::from_cover(partition);

    let terms: Vec<f64> = if config.runs_parallel(partition.len()) {
        partition
            .communities()
            .par_iter()
            .map(|community| community_term(graph, &affiliation, community, weight, norm))
            .collect()
    } else {
        partition
            .iter()
            .map(|community| community_term(graph, &affiliation, community, weight, norm))
            .collect()
    };

    // Summed in cover order so repeated calls agree bit for bit
    let q = norm * terms.iter().sum::<f64>();

    log::info!("Modularity: {}", q);

    Ok(q)
}

/// `Σ_{u,v ∈ c} A_uv - norm * K_in(c) * K_out(c)` for one community
fn community_term<G, C>(
    graph: &G,
    affiliation: &Affiliation<G::NodeId, C>,
    community: &Community<G::NodeId, C>,
    weight: WeightKey<'_>,
    norm: f64,
) -> f64
where
    G: GraphAccessor,
    C: Clone + Eq + Hash + Debug,
{
    let directed = graph.is_directed();
    let mut intra = 0.0;
    let mut k_in = 0.0;
    let mut k_out = 0.0;

    for u in &community.members {
        k_in += graph.in_degree(u, weight);
        k_out += graph.out_degree(u, weight);

        for (_, v, w) in graph.edges_of(u, weight) {
            if !affiliation.is_member(&v, &community.id) {
                continue;
            }
            // An undirected self-loop fills A_uu from both ends
            intra += if !directed && v == *u { 2.0 * w } else { w };
        }
    }

    log::debug!(
        "Community {:?}: intra weight {}, degree sums {} / {}",
        community.id,
        intra,
        k_in,
        k_out
    );

    intra - k_in * k_out * norm
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, NodeIndex, UnGraph};

    const EPS: f64 = 1e-12;

    /// Two triangles joined by one bridge edge
    fn barbell() -> (UnGraph<(), ()>, Vec<NodeIndex>) {
        let mut graph = UnGraph::new_undirected();
        let n: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        graph.extend_with_edges([
            (n[0], n[1]),
            (n[1], n[2]),
            (n[2], n[0]),
            (n[3], n[4]),
            (n[4], n[5]),
            (n[5], n[3]),
            (n[2], n[3]),
        ]);
        (graph, n)
    }

    #[test]
    fn test_barbell_two_cliques() {
        let (graph, n) = barbell();
        let partition = Cover::from(vec![vec![n[0], n[1], n[2]], vec![n[3], n[4], n[5]]]);

        let q = modularity(&graph, &partition, None).unwrap();
        assert!((q - 5.0 / 14.0).abs() < EPS, "q = {q}");
    }

    #[test]
    fn test_singletons_on_single_edge() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());

        let partition = Cover::from(vec![vec![a], vec![b]]);
        let q = modularity(&graph, &partition, None).unwrap();
        assert!((q + 0.5).abs() < EPS, "q = {q}");
    }

    #[test]
    fn test_whole_graph_community_scores_zero() {
        let (graph, n) = barbell();
        let partition = Cover::from(vec![n.clone()]);

        let q = modularity(&graph, &partition, None).unwrap();
        assert!(q.abs() < EPS, "q = {q}");
    }

    #[test]
    fn test_empty_communities_are_ignored() {
        let (graph, n) = barbell();
        let with_empty = Cover::from(vec![
            vec![n[0], n[1], n[2]],
            vec![],
            vec![n[3], n[4], n[5]],
        ]);

        let q = modularity(&graph, &with_empty, None).unwrap();
        assert!((q - 5.0 / 14.0).abs() < EPS);
    }

    #[test]
    fn test_duplicate_node_is_rejected() {
        let (graph, n) = barbell();
        let partition = Cover::from(vec![
            vec![n[0], n[1], n[2], n[3]],
            vec![n[3], n[4], n[5]],
        ]);

        let err = modularity(&graph, &partition, None).unwrap_err();
        assert!(matches!(err, QualityError::InvalidPartition { .. }));
    }

    #[test]
    fn test_repeated_community_id_is_rejected() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let n: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.extend_with_edges([(n[0], n[1]), (n[1], n[2]), (n[2], n[3])]);

        let distinct: Cover<NodeIndex> = vec![(0, vec![n[0], n[1]]), (1, vec![n[2], n[3]])]
            .into_iter()
            .collect();
        let q = modularity(&graph, &distinct, None).unwrap();
        assert!((q - 1.0 / 6.0).abs() < EPS, "q = {q}");

        let repeated: Cover<NodeIndex> = vec![(0, vec![n[0], n[1]]), (0, vec![n[2], n[3]])]
            .into_iter()
            .collect();
        let err = modularity(&graph, &repeated, None).unwrap_err();
        assert_eq!(
            err,
            QualityError::DuplicateCommunity {
                community: "0".to_string()
            }
        );
    }

    #[test]
    fn test_edgeless_graph_is_degenerate() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let partition = Cover::from(vec![vec![a]]);

        let err = modularity(&graph, &partition, None).unwrap_err();
        assert_eq!(err, QualityError::DegenerateGraph { total: 0.0 });
    }

    #[test]
    fn test_weight_key_selects_attribute() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, 3.0);
        graph.add_edge(b, c, 1.0);
        let partition = Cover::from(vec![vec![a, b], vec![c]]);

        // m = 4, degrees 3, 4, 1
        // Q = (1/8) * [(6 - 49/8) + (0 - 1/8)] = -1/32
        let weighted = modularity(&graph, &partition, Some("weight")).unwrap();
        assert!((weighted + 1.0 / 32.0).abs() < EPS, "q = {weighted}");

        // Unweighted: m = 2, degrees 1, 2, 1
        // Q = (1/4) * [(2 - 9/4) + (0 - 1/4)] = -1/8
        let unweighted = modularity(&graph, &partition, None).unwrap();
        assert!((unweighted + 0.125).abs() < EPS, "q = {unweighted}");
    }

    #[test]
    fn test_undirected_self_loop_counts_twice() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, a, ());
        graph.add_edge(a, b, ());
        let partition = Cover::from(vec![vec![a], vec![b]]);

        // m = 2, k_a = 3, k_b = 1
        // Q = (1/4) * [(2 - 9/4) + (0 - 1/4)] = -1/8
        let q = modularity(&graph, &partition, None).unwrap();
        assert!((q + 0.125).abs() < EPS, "q = {q}");
    }

    #[test]
    fn test_directed_cycle_pair() {
        let mut graph = DiGraph::<(), ()>::new();
        let n: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.extend_with_edges([(n[0], n[1]), (n[1], n[0]), (n[2], n[3]), (n[3], n[2])]);
        let partition = Cover::from(vec![vec![n[0], n[1]], vec![n[2], n[3]]]);

        // m = 4, every in/out degree is 1
        // Q = (1/4) * 2 * (2 - 2 * 2 / 4) = 0.5
        let q = modularity(&graph, &partition, None).unwrap();
        assert!((q - 0.5).abs() < EPS, "q = {q}");
    }

    #[test]
    fn test_multigraph_sums_parallel_edges() {
        let mut single = UnGraph::<(), f64>::new_undirected();
        let a = single.add_node(());
        let b = single.add_node(());
        let c = single.add_node(());
        single.add_edge(a, b, 2.0);
        single.add_edge(b, c, 1.0);

        let mut multi = UnGraph::<(), f64>::new_undirected();
        let (ma, mb, mc) = (multi.add_node(()), multi.add_node(()), multi.add_node(()));
        multi.add_edge(ma, mb, 1.0);
        multi.add_edge(mb, ma, 1.0);
        multi.add_edge(mb, mc, 1.0);

        let q_single = modularity(&single, &Cover::from(vec![vec![a, b], vec![c]]), Some("weight")).unwrap();
        let q_multi = modularity(&multi, &Cover::from(vec![vec![ma, mb], vec![mc]]), Some("weight")).unwrap();
        assert!((q_single - q_multi).abs() < EPS);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (graph, n) = barbell();
        let partition = Cover::from(n.iter().map(|&node| vec![node]).collect::<Vec<_>>());

        let sequential = modularity_with_config(&graph, &partition, None, &Config::default().sequential()).unwrap();
        let parallel = modularity_with_config(&graph, &partition, None, &Config {
            parallel_threshold: 1,
            ..Config::default()
        })
        .unwrap();

        assert_eq!(sequential, parallel);
    }
}
