use algocore::paths::Graph;
use colored::Colorize;
use rand::{distributions::Uniform, prelude::Distribution, seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{schema::{WorkloadKind, WorkloadProps, PERCENT}, util};

const MAX_VALUE: i64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOp {
    Update(usize, i64),
    Query(usize, usize),
}

/// One generated input, shaped by the workload kind.
#[derive(Debug, Clone)]
pub enum Input {
    Values(Vec<i64>),
    Segment {
        values: Vec<i64>,
        ops: Vec<SegmentOp>,
    },
    Text {
        text: Vec<u8>,
        patterns: Vec<Vec<u8>>,
    },
    Graph {
        graph: Graph<i64>,
        source: usize,
    },
}

impl Input {
    pub fn kind(&self) -> WorkloadKind {
        match self {
            Input::Values(_) => WorkloadKind::Heap,
            Input::Segment { .. } => WorkloadKind::SegmentTree,
            Input::Text { .. } => WorkloadKind::Text,
            Input::Graph { .. } => WorkloadKind::Graph,
        }
    }
}

pub fn generate(kind: WorkloadKind, props: &WorkloadProps, seed: u64) -> Input {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    let size = util::pow2(props.size);

    match kind {
        WorkloadKind::Heap => Input::Values(gen_values(rng, size)),
        WorkloadKind::SegmentTree => {
            let values = gen_values(rng, size);
            let ops = gen_segment_ops(rng, size, size, props.query_ratio);
            Input::Segment { values, ops }
        }
        WorkloadKind::Text => {
            let alphabet = props.alphabet.as_bytes();
            let text = gen_text(rng, alphabet, size);
            let patterns = gen_patterns(
                rng, &text, props.pattern_count as usize, props.pattern_len as usize);
            Input::Text { text, patterns }
        }
        WorkloadKind::Graph => {
            let graph = gen_graph(rng, size, props.edge_factor as usize,
                props.max_weight, props.negative_weights);
            Input::Graph { graph, source: 0 }
        }
    }
}

pub fn gen_values(rng: &mut impl Rng, len: usize) -> Vec<i64> {
    let dist = Uniform::from(-MAX_VALUE..MAX_VALUE);
    (0..len).map(|_| dist.sample(rng)).collect()
}

pub fn gen_segment_ops(rng: &mut impl Rng, len: usize, count: usize, query_ratio: u32) -> Vec<SegmentOp> {
    if len == 0 {
        return Vec::new();
    }
    let index = Uniform::from(0..len);
    let value = Uniform::from(-MAX_VALUE..MAX_VALUE);
    let ratio = query_ratio.min(PERCENT);

    (0..count)
        .map(|_| {
            if rng.gen_range(0..PERCENT) < ratio {
                let a = index.sample(rng);
                let b = index.sample(rng);
                SegmentOp::Query(a.min(b), a.max(b))
            } else {
                SegmentOp::Update(index.sample(rng), value.sample(rng))
            }
        })
        .collect()
}

pub fn gen_text(rng: &mut impl Rng, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect()
}

/// Half of the patterns are cut from the text so they are guaranteed to
/// occur; the rest are random strings over the text's alphabet.
pub fn gen_patterns(rng: &mut impl Rng, text: &[u8], count: usize, len: usize) -> Vec<Vec<u8>> {
    let len = len.max(1);
    if text.len() < len {
        warn_pattern_len(len, text.len());
        return Vec::new();
    }

    let mut alphabet: Vec<u8> = text.to_vec();
    alphabet.sort_unstable();
    alphabet.dedup();

    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                let start = rng.gen_range(0..=text.len() - len);
                text[start..start + len].to_vec()
            } else {
                gen_text(rng, &alphabet, len)
            }
        })
        .collect()
}

/// Random directed graph with `nodes * edge_factor` edges. A path through
/// every node keeps the whole graph reachable from node 0. With
/// `negative_weights` the path edges may be negative but every other edge
/// points forward along the path, so no negative cycle can form.
pub fn gen_graph(
    rng: &mut impl Rng,
    nodes: usize,
    edge_factor: usize,
    max_weight: i64,
    negative_weights: bool) -> Graph<i64>
{
    let mut graph = Graph::new(nodes);
    if nodes == 0 {
        return graph;
    }

    let weight = Uniform::from(0..=max_weight);
    let signed = Uniform::from(-max_weight..=max_weight);
    let node = Uniform::from(0..nodes);

    let mut order: Vec<usize> = (1..nodes).collect();
    order.shuffle(rng);
    order.insert(0, 0);

    let mut rank = vec![0; nodes];
    for (i, &v) in order.iter().enumerate() {
        rank[v] = i;
    }

    let mut add = |from: usize, to: usize, w: i64| {
        // Endpoints are always drawn below `nodes`.
        let _ = graph.add_edge(from, to, w);
    };

    for pair in order.windows(2) {
        let w = if negative_weights { signed.sample(rng) } else { weight.sample(rng) };
        add(pair[0], pair[1], w);
    }

    let extra = (nodes * edge_factor).saturating_sub(nodes - 1);
    for _ in 0..extra {
        let (a, b) = (node.sample(rng), node.sample(rng));
        if negative_weights {
            let (from, to) = if rank[a] <= rank[b] { (a, b) } else { (b, a) };
            if from != to {
                add(from, to, signed.sample(rng));
            }
        } else {
            add(a, b, weight.sample(rng));
        }
    }

    graph
}

fn warn_pattern_len(len: usize, text_len: usize) {
    let warning = format!(
        "warning: pattern length {} exceeds text length {}; no patterns generated",
        len, text_len);
    println!("{}", warning.yellow());
}
