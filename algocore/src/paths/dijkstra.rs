use num::{PrimInt, Signed};

use crate::{
    error::{Error, Result},
    heap::{Heap, HeapMode},
};

use super::{Distance, Graph, ShortestPaths};

/// Dijkstra's algorithm with a binary min-heap and lazy deletion.
///
/// Instead of decrease-key, an improved node is pushed again and any popped
/// entry whose distance is worse than the recorded one is skipped as stale.
/// O((V + E) log V).
///
/// Every edge weight must be non-negative; the whole graph is checked before
/// the search starts so the outcome does not depend on which part of it is
/// reachable.
///
/// A candidate that overflows `W` exceeds every representable distance and is
/// dropped. Only a node left unreached after such a drop fails with
/// `WeightOverflow`.
pub fn dijkstra<W>(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>>
where
    W: PrimInt + Signed,
{
    graph.check_node(source)?;

    if let Some(edge) = graph.edges().find(|e| e.weight.is_negative()) {
        return Err(Error::NegativeWeight { from: edge.from, to: edge.to });
    }

    let adjacency = graph.adjacency();
    let mut paths = ShortestPaths::unreached(graph.node_count(), source, W::zero());

    let mut overflowed = vec![false; graph.node_count()];

    let mut queue: Heap<(W, usize)> = Heap::with_capacity(HeapMode::Min, graph.node_count());
    queue.push((W::zero(), source));

    while let Ok((dist, node)) = queue.pop() {
        if Distance::Finite(dist) > paths.distances[node] {
            continue;
        }

        for &(next, weight) in &adjacency[node] {
            let candidate = match dist.checked_add(&weight) {
                Some(candidate) => candidate,
                None => {
                    overflowed[next] = true;
                    continue;
                }
            };

            if Distance::Finite(candidate) < paths.distances[next] {
                paths.distances[next] = Distance::Finite(candidate);
                paths.predecessors[next] = Some(node);
                queue.push((candidate, next));
            }
        }
    }

    if let Some(node) = paths.unrepresentable(&overflowed) {
        return Err(Error::WeightOverflow { node });
    }
    Ok(paths)
}
