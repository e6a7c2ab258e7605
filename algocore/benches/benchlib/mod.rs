use std::ops::Range;

use algocore::paths::Graph;
use rand::{distributions::Uniform, prelude::Distribution, seq::SliceRandom, thread_rng, Rng};

pub fn uniform_vec(range: Range<i64>, len: usize) -> Vec<i64> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(rng)).collect()
}

pub fn random_text(alphabet: &[u8], len: usize) -> Vec<u8> {
    let rng = &mut thread_rng();
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap())
        .collect()
}

/// `count` patterns cut from random positions of `text`, so every pattern
/// matches at least once.
pub fn patterns_from(text: &[u8], count: usize, len: usize) -> Vec<Vec<u8>> {
    let rng = &mut thread_rng();
    let len = len.min(text.len()).max(1);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..=text.len() - len);
            text[start..start + len].to_vec()
        })
        .collect()
}

/// Random directed graph with `nodes * edge_factor` edges and weights in
/// `0..=max_weight`.
pub fn random_graph(nodes: usize, edge_factor: usize, max_weight: i64) -> Graph<i64> {
    let rng = &mut thread_rng();
    let node_dist = Uniform::from(0..nodes);
    let weight_dist = Uniform::from(0..=max_weight);

    let edges = (0..nodes * edge_factor).map(|_| (
        node_dist.sample(rng),
        node_dist.sample(rng),
        weight_dist.sample(rng),
    ));
    Graph::from_edges(nodes, edges.collect::<Vec<_>>()).unwrap()
}
