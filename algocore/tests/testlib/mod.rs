#![allow(dead_code)]
pub mod properties;

use quickcheck::{Arbitrary, Gen};
use algocore::{
    heap::HeapMode,
    paths::{self, Graph, ShortestPathFn},
};
use std::fmt;

// Arbitrary Heap Mode //
#[derive(Debug, Clone, Copy)]
pub struct ArbHeapMode(pub HeapMode);

impl Arbitrary for ArbHeapMode {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            ArbHeapMode(HeapMode::Min)
        } else {
            ArbHeapMode(HeapMode::Max)
        }
    }
}

// Arbitrary Heap Operations //
#[derive(Debug, Clone, Copy)]
pub enum HeapOp {
    Push(i32),
    Pop,
}

impl Arbitrary for HeapOp {
    fn arbitrary(g: &mut Gen) -> Self {
        // Bias toward pushes so the heap grows.
        if u8::arbitrary(g) % 3 == 0 {
            HeapOp::Pop
        } else {
            HeapOp::Push(i32::arbitrary(g))
        }
    }
}

// Arbitrary Segment Tree Workload //
#[derive(Debug, Clone, Copy)]
pub enum SegmentOp {
    Update(usize, i64),
    Query(usize, usize),
}

#[derive(Debug, Clone)]
pub struct SegmentWorkload {
    pub values: Vec<i64>,
    pub ops: Vec<SegmentOp>,
}

impl Arbitrary for SegmentWorkload {
    fn arbitrary(g: &mut Gen) -> Self {
        // i32 inputs keep every partial sum well inside i64.
        let values: Vec<i64> = Vec::<i32>::arbitrary(g)
            .into_iter()
            .map(i64::from)
            .collect();

        // Indices range slightly past the end so bounds errors are exercised.
        let limit = values.len() + 2;
        let op_count = usize::arbitrary(g) % 32;
        let ops = (0..op_count)
            .map(|_| {
                let a = usize::arbitrary(g) % limit;
                let b = usize::arbitrary(g) % limit;
                if bool::arbitrary(g) {
                    SegmentOp::Update(a, i64::from(i32::arbitrary(g)))
                } else {
                    SegmentOp::Query(a.min(b), a.max(b))
                }
            })
            .collect();

        Self { values, ops }
    }
}

// Arbitrary Text //
const ALPHABET: &[u8] = b"abc";

fn small_alphabet_bytes(g: &mut Gen, len: usize) -> Vec<u8> {
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

/// Text over a three-letter alphabet so patterns actually occur.
#[derive(Debug, Clone)]
pub struct ByteText(pub Vec<u8>);

impl Arbitrary for ByteText {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        ByteText(small_alphabet_bytes(g, len))
    }
}

/// Non-empty list of non-empty patterns, duplicates allowed.
#[derive(Debug, Clone)]
pub struct PatternSet(pub Vec<Vec<u8>>);

impl Arbitrary for PatternSet {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 6 + 1;
        let patterns = (0..count)
            .map(|_| {
                let len = usize::arbitrary(g) % 4 + 1;
                small_alphabet_bytes(g, len)
            })
            .collect();
        PatternSet(patterns)
    }
}

// Arbitrary Graphs //
const MAX_NODES: usize = 8;

fn arbitrary_graph(g: &mut Gen, weight: impl Fn(&mut Gen, usize, usize) -> Option<i64>) -> (Graph<i64>, usize) {
    let node_count = usize::arbitrary(g) % MAX_NODES + 1;
    let edge_count = usize::arbitrary(g) % (node_count * 3 + 1);

    let mut graph = Graph::new(node_count);
    for _ in 0..edge_count {
        let from = usize::arbitrary(g) % node_count;
        let to = usize::arbitrary(g) % node_count;
        if let Some(w) = weight(g, from, to) {
            graph.add_edge(from, to, w).unwrap();
        }
    }

    let source = usize::arbitrary(g) % node_count;
    (graph, source)
}

/// Graph with weights in `0..20`.
#[derive(Debug, Clone)]
pub struct NonNegativeGraph {
    pub graph: Graph<i64>,
    pub source: usize,
}

impl Arbitrary for NonNegativeGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let (graph, source) = arbitrary_graph(g, |g, _, _| Some((u8::arbitrary(g) % 20) as i64));
        Self { graph, source }
    }
}

/// Graph with weights in `-5..15`; may contain negative cycles.
#[derive(Debug, Clone)]
pub struct SignedGraph {
    pub graph: Graph<i64>,
    pub source: usize,
}

impl Arbitrary for SignedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let (graph, source) = arbitrary_graph(g, |g, _, _| Some((u8::arbitrary(g) % 20) as i64 - 5));
        Self { graph, source }
    }
}

/// Signed weights, edges only from lower to higher node ids, so acyclic.
#[derive(Debug, Clone)]
pub struct SignedDag {
    pub graph: Graph<i64>,
    pub source: usize,
}

impl Arbitrary for SignedDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let (graph, source) = arbitrary_graph(g, |g, from, to| {
            (from < to).then(|| (u8::arbitrary(g) % 20) as i64 - 10)
        });
        Self { graph, source }
    }
}

// Arbitrary Shortest Path Function //
#[derive(Clone)]
pub struct ShortestPathAlgorithm(
    &'static str, pub ShortestPathFn<i64>
);

impl fmt::Debug for ShortestPathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Arbitrary for ShortestPathAlgorithm {
    fn arbitrary(g: &mut Gen) -> Self {
        g.choose([
            ShortestPathAlgorithm("dijkstra", paths::dijkstra),
            ShortestPathAlgorithm("bellman_ford", paths::bellman_ford),
        ].as_slice())
        .unwrap()
        .clone()
    }
}
