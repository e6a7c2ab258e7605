use num::{PrimInt, Signed};

use crate::error::{Error, Result};

use super::{Distance, Graph, ShortestPaths};

/// Bellman-Ford single-source shortest paths.
///
/// Relaxes every edge for at most `V - 1` rounds, stopping early once a round
/// changes nothing. If the rounds run out without converging, one more pass
/// decides: any edge that still relaxes lies on or behind a negative cycle
/// reachable from the source. O(V * E).
///
/// Candidates above `W::max_value()` are dropped. A distance that cannot be
/// represented is reported as `WeightOverflow` only once a reachable negative
/// cycle has been ruled out.
pub fn bellman_ford<W>(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>>
where
    W: PrimInt + Signed,
{
    graph.check_node(source)?;

    let adjacency = graph.adjacency();
    let mut paths = ShortestPaths::unreached(graph.node_count(), source, W::zero());
    let mut overflowed = vec![false; graph.node_count()];

    let mut converged = false;
    for _ in 1..graph.node_count() {
        match relax_all(adjacency, &mut paths, &mut overflowed) {
            Pass::Improved => {}
            Pass::Stable => {
                converged = true;
                break;
            }
            Pass::Underflow(node) => return Err(overflow_or_cycle(adjacency, source, node)),
        }
    }

    if !converged {
        match relax_all(adjacency, &mut paths, &mut overflowed) {
            Pass::Stable => {}
            Pass::Improved => return Err(Error::NegativeCycleReachable),
            Pass::Underflow(node) => return Err(overflow_or_cycle(adjacency, source, node)),
        }
    }

    if let Some(node) = paths.unrepresentable(&overflowed) {
        return Err(overflow_or_cycle(adjacency, source, node));
    }
    Ok(paths)
}

enum Pass {
    Stable,
    Improved,
    /// A candidate for this node fell below `W::min_value()`.
    Underflow(usize),
}

/// One pass over every edge.
fn relax_all<W>(
    adjacency: &[Vec<(usize, W)>],
    paths: &mut ShortestPaths<W>,
    overflowed: &mut [bool]) -> Pass
where
    W: PrimInt + Signed,
{
    let mut updated = false;

    for (node, edges) in adjacency.iter().enumerate() {
        let dist = match paths.distances[node] {
            Distance::Finite(d) => d,
            Distance::Unreachable => continue,
        };

        for &(next, weight) in edges {
            let candidate = match dist.checked_add(&weight) {
                Some(candidate) => candidate,
                None if weight.is_negative() => return Pass::Underflow(next),
                None => {
                    overflowed[next] = true;
                    continue;
                }
            };

            if Distance::Finite(candidate) < paths.distances[next] {
                paths.distances[next] = Distance::Finite(candidate);
                paths.predecessors[next] = Some(node);
                updated = true;
            }
        }
    }

    if updated { Pass::Improved } else { Pass::Stable }
}

fn overflow_or_cycle<W>(adjacency: &[Vec<(usize, W)>], source: usize, node: usize) -> Error
where
    W: PrimInt + Signed,
{
    if negative_cycle_reachable(adjacency, source) {
        Error::NegativeCycleReachable
    } else {
        Error::WeightOverflow { node }
    }
}

/// Cycle detection in `i128`, wide enough that no walk of at most `V` edges
/// with weights of up to 64 bits can wrap.
fn negative_cycle_reachable<W>(adjacency: &[Vec<(usize, W)>], source: usize) -> bool
where
    W: PrimInt + Signed,
{
    let mut dist: Vec<Option<i128>> = vec![None; adjacency.len()];
    dist[source] = Some(0);

    for _ in 0..adjacency.len() {
        let mut updated = false;

        for (node, edges) in adjacency.iter().enumerate() {
            let d = match dist[node] {
                Some(d) => d,
                None => continue,
            };
            for &(next, weight) in edges {
                let weight = match weight.to_i128() {
                    Some(w) => w,
                    None => continue,
                };
                let candidate = d.saturating_add(weight);
                if dist[next].map_or(true, |current| candidate < current) {
                    dist[next] = Some(candidate);
                    updated = true;
                }
            }
        }

        if !updated {
            return false;
        }
    }
    true
}
