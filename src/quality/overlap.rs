//! Overlapping modularity (Lázár, Ábel & Vicsek, EPL 90 (2010) 18001)
//!
//! For a community `c` with `n ≥ 2` members:
//!
//! ```text
//! M_c = (1/n) Σ_{i ∈ c} (inward_i - outward_i) / (degree_i * s_i)
//!       * E_c / (n (n - 1))
//! ```
//!
//! where `s_i` is the number of communities node `i` belongs to and `E_c`
//! is the summed inward edge weight of the members. The aggregate is the
//! mean of `M_c` over communities with at least two members.

use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;

use crate::community::{validate_community_ids, Affiliation, Community, Cover};
use crate::config::Config;
use crate::error::{QualityError, Result};
use crate::graph::{GraphAccessor, WeightKey};
use crate::quality::score::{CommunityScore, OverlapScore};
use crate::quality::trace::TraceRecord;

/// Overlapping modularity of `cover` on `graph` with the default configuration.
///
/// When `affiliation` is `None` it is built from `cover`. Fails with
/// `UnsupportedGraph` on multigraphs, `DuplicateCommunity` when two
/// communities share an id, `DegenerateNode` when a scored member has zero
/// degree, and `EmptyCover` when no community has two members.
pub fn modularity_overlap<G, C>(
    graph: &G,
    cover: &Cover<G::NodeId, C>,
    affiliation: Option<&Affiliation<G::NodeId, C>>,
    weight: WeightKey<'_>,
) -> Result<OverlapScore<C>>
where
    G: GraphAccessor + Sync,
    G::NodeId: Send + Sync,
    C: Clone + Eq + Hash + Debug + Send + Sync,
{
    modularity_overlap_with_config(graph, cover, affiliation, weight, &Config::default())
}

/// Overlapping modularity of `cover` on `graph`
pub fn modularity_overlap_with_config<G, C>(
    graph: &G,
    cover: &Cover<G::NodeId, C>,
    affiliation: Option<&Affiliation<G::NodeId, C>>,
    weight: WeightKey<'_>,
    config: &Config,
) -> Result<OverlapScore<C>>
where
    G: GraphAccessor + Sync,
    G::NodeId: Send + Sync,
    C: Clone + Eq + Hash + Debug + Send + Sync,
{
    if graph.is_multigraph() {
        return Err(QualityError::UnsupportedGraph);
    }
    validate_community_ids(cover)?;

    let built;
    let affiliation = match affiliation {
        Some(affiliation) => affiliation,
        None => {
            built = Affiliation::from_cover(cover);
            &built
        }
    };

    log::info!(
        "Computing overlapping modularity of {} communities ({} memberships)",
        cover.len(),
        cover.membership_count()
    );

    let results: Vec<Result<CommunityScore<C>>> = if config.runs_parallel(cover.len()) {
        cover
            .communities()
            .par_iter()
            .map(|community| score_community(graph, affiliation, community, weight))
            .collect()
    } else {
        cover
            .iter()
            .map(|community| score_community(graph, affiliation, community, weight))
            .collect()
    };

    // First failure in cover order, independent of scheduling
    let communities = results.into_iter().collect::<Result<Vec<_>>>()?;

    for score in communities.iter().filter(|c| c.scored) {
        config.trace.community_scored(&TraceRecord {
            community: &score.id,
            size: score.size,
            strength: score.strength,
            density: score.density,
            score: score.value,
        });
    }

    let scored = communities.iter().filter(|c| c.scored).count();
    if scored == 0 {
        return Err(QualityError::EmptyCover);
    }

    let total: f64 = communities.iter().filter(|c| c.scored).map(|c| c.value).sum();
    let aggregate = total / scored as f64;

    log::info!(
        "Overlapping modularity: {} over {} scored communities ({} skipped)",
        aggregate,
        scored,
        communities.len() - scored
    );

    Ok(OverlapScore {
        communities,
        aggregate,
    })
}

fn score_community<G, C>(
    graph: &G,
    affiliation: &Affiliation<G::NodeId, C>,
    community: &Community<G::NodeId, C>,
    weight: WeightKey<'_>,
) -> Result<CommunityScore<C>>
where
    G: GraphAccessor,
    C: Clone + Eq + Hash + Debug,
{
    let n = community.len();
    if n <= 1 {
        return Ok(CommunityScore::skipped(community.id.clone(), n));
    }

    let mut inward_total = 0.0;
    let mut strength = 0.0;

    for node in &community.members {
        if !graph.contains_node(node) {
            return Err(QualityError::UnknownNode {
                node: format!("{:?}", node),
                community: format!("{:?}", community.id),
            });
        }

        let (mut degree, mut inward, mut outward) = (0.0, 0.0, 0.0);
        for (_, neighbour, w) in graph.edges_of(node, weight) {
            degree += w;
            if community.members.contains(&neighbour) {
                inward += w;
            } else {
                outward += w;
            }
        }

        if degree == 0.0 {
            return Err(QualityError::DegenerateNode {
                node: format!("{:?}", node),
                community: format!("{:?}", community.id),
            });
        }

        let affiliations = affiliation.count(node);
        if affiliations == 0 {
            return Err(QualityError::MissingAffiliation {
                node: format!("{:?}", node),
            });
        }

        inward_total += inward;
        strength += (inward - outward) / (degree * affiliations as f64);
    }

    let strength = strength / n as f64;
    let density = inward_total / (n * (n - 1)) as f64;

    Ok(CommunityScore {
        id: community.id.clone(),
        size: n,
        strength,
        density,
        value: strength * density,
        scored: true,
    })
}
