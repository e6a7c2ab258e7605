pub mod harness;

use algocore::{
    heap::{self, Heap, HeapMode, SortOrder},
    paths::{self, Graph, ShortestPathFn},
    segment_tree::SegmentTree,
    strings::{self, AhoCorasick},
    visitor::{Counter, Visitor},
};

use crate::{generators::{Input, SegmentOp}, schema::WorkloadKind};
use harness::{Harness, RunResult};

pub const ALGORITHMS: [(&str, WorkloadKind); 10] = [
    ("heap_push_pop",      WorkloadKind::Heap),
    ("heap_sort",          WorkloadKind::Heap),
    ("std_sort",           WorkloadKind::Heap),
    ("segment_tree",       WorkloadKind::SegmentTree),
    ("prefix_sum_naive",   WorkloadKind::SegmentTree),
    ("z_find_all",         WorkloadKind::Text),
    ("aho_corasick",       WorkloadKind::Text),
    ("naive_multi_search", WorkloadKind::Text),
    ("dijkstra",           WorkloadKind::Graph),
    ("bellman_ford",       WorkloadKind::Graph),
];

type ValuesTimer = Box<dyn Fn(&mut Harness, &[i64]) -> RunResult>;
type SegmentTimer = Box<dyn Fn(&mut Harness, &[i64], &[SegmentOp]) -> RunResult>;
type TextTimer = Box<dyn Fn(&mut Harness, &[u8], &[Vec<u8>]) -> RunResult>;
type GraphTimer = Box<dyn Fn(&mut Harness, &Graph<i64>, usize) -> RunResult>;

type SegmentFn = fn(Vec<i64>, &[SegmentOp]) -> i64;
type TextFn = fn(&[u8], &[Vec<u8>]) -> usize;

pub struct Timer {
    values: Option<ValuesTimer>,
    segment: Option<SegmentTimer>,
    text: Option<TextTimer>,
    graph: Option<GraphTimer>,
}

impl Timer {
    pub fn new(name: &str) -> Option<Self> {
        try_parse_values(name)
            .or_else(|| try_parse_segment(name))
            .or_else(|| try_parse_text(name))
            .or_else(|| try_parse_graph(name))
    }

    pub fn run(&self, harness: &mut Harness, input: &Input) -> RunResult {
        match input {
            Input::Values(values) => match &self.values {
                Some(timer) => timer(harness, values),
                None => Err(unsupported(input.kind())),
            },
            Input::Segment { values, ops } => match &self.segment {
                Some(timer) => timer(harness, values, ops),
                None => Err(unsupported(input.kind())),
            },
            Input::Text { text, patterns } => match &self.text {
                Some(timer) => timer(harness, text, patterns),
                None => Err(unsupported(input.kind())),
            },
            Input::Graph { graph, source } => match &self.graph {
                Some(timer) => timer(harness, graph, *source),
                None => Err(unsupported(input.kind())),
            },
        }
    }

    fn empty() -> Self {
        Self { values: None, segment: None, text: None, graph: None }
    }
}

fn unsupported(kind: WorkloadKind) -> String {
    format!("{:?} workloads not supported", kind)
}

fn try_parse_values(name: &str) -> Option<Timer> {
    let maybe_sort: Option<fn(Vec<i64>) -> Vec<i64>> = match name {
        "heap_push_pop" => Some(heap_push_pop),
        "heap_sort"     => Some(heap_sort),
        "std_sort"      => Some(std_sort),
        _ => None,
    };
    maybe_sort.map(|sort| Timer {
        values: Some(Box::new(move |harness, values| {
            let (elapsed, _sorted) = harness.time(|| values.to_vec(), sort);
            Ok(elapsed)
        })),
        ..Timer::empty()
    })
}

fn heap_push_pop(values: Vec<i64>) -> Vec<i64> {
    let mut heap = Heap::with_capacity(HeapMode::Min, values.len());
    for v in values {
        heap.push(v);
    }
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(v) = heap.pop() {
        out.push(v);
    }
    out
}

fn heap_sort(values: Vec<i64>) -> Vec<i64> {
    heap::heap_sort(values, SortOrder::Ascending)
}

fn std_sort(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

fn try_parse_segment(name: &str) -> Option<Timer> {
    let maybe_run: Option<SegmentFn> = match name {
        "segment_tree"     => Some(segment_tree_ops),
        "prefix_sum_naive" => Some(prefix_sum_ops),
        _ => None,
    };
    maybe_run.map(|run| Timer {
        segment: Some(Box::new(move |harness, values, ops| {
            let (elapsed, _checksum) = harness.time(|| values.to_vec(), |v| run(v, ops));
            Ok(elapsed)
        })),
        ..Timer::empty()
    })
}

fn segment_tree_ops(values: Vec<i64>, ops: &[SegmentOp]) -> i64 {
    let mut tree = SegmentTree::build(&values);
    let mut checksum = 0i64;
    for op in ops {
        match *op {
            SegmentOp::Update(i, v) => { let _ = tree.update(i, v); }
            SegmentOp::Query(l, r) => {
                checksum = checksum.wrapping_add(tree.query(l, r).unwrap_or(0));
            }
        }
    }
    checksum
}

fn prefix_sum_ops(mut values: Vec<i64>, ops: &[SegmentOp]) -> i64 {
    let mut checksum = 0i64;
    for op in ops {
        match *op {
            SegmentOp::Update(i, v) => if let Some(slot) = values.get_mut(i) { *slot = v },
            SegmentOp::Query(l, r) => if let Some(range) = values.get(l..=r) {
                checksum = checksum.wrapping_add(range.iter().sum::<i64>());
            },
        }
    }
    checksum
}

fn try_parse_text(name: &str) -> Option<Timer> {
    let maybe_search: Option<TextFn> = match name {
        "z_find_all"         => Some(z_find_all),
        "aho_corasick"       => Some(aho_corasick),
        "naive_multi_search" => Some(naive_multi_search),
        _ => None,
    };
    maybe_search.map(|search| Timer {
        text: Some(Box::new(move |harness, text, patterns| {
            let (elapsed, _count) = harness.time(|| (), |()| search(text, patterns));
            Ok(elapsed)
        })),
        ..Timer::empty()
    })
}

fn z_find_all(text: &[u8], patterns: &[Vec<u8>]) -> usize {
    let mut counter = Counter::new();
    for pattern in patterns {
        strings::find_all_visit(pattern, text, &mut counter);
    }
    counter.count()
}

fn aho_corasick(text: &[u8], patterns: &[Vec<u8>]) -> usize {
    match AhoCorasick::new(patterns) {
        Ok(ac) => ac.count(text),
        Err(_) => 0,
    }
}

fn naive_multi_search(text: &[u8], patterns: &[Vec<u8>]) -> usize {
    let mut counter = Counter::new();
    for pattern in patterns.iter().filter(|p| !p.is_empty()) {
        for (start, window) in text.windows(pattern.len()).enumerate() {
            if window == pattern.as_slice() {
                counter.visit(start);
            }
        }
    }
    counter.count()
}

fn try_parse_graph(name: &str) -> Option<Timer> {
    let maybe_algorithm: Option<ShortestPathFn<i64>> = match name {
        "dijkstra"     => Some(paths::dijkstra),
        "bellman_ford" => Some(paths::bellman_ford),
        _ => None,
    };
    maybe_algorithm.map(|algorithm| Timer {
        graph: Some(Box::new(move |harness, graph, source| {
            let (elapsed, result) = harness.time(|| (), |()| algorithm(graph, source));
            result
                .map(|_| elapsed)
                .map_err(|e| e.to_string())
        })),
        ..Timer::empty()
    })
}

/// Input kind an algorithm id runs on.
pub fn workload_kind(name: &str) -> Option<WorkloadKind> {
    ALGORITHMS.iter()
        .find(|(id, _)| *id == name)
        .map(|&(_, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators, schema::WorkloadProps};

    #[test]
    fn every_listed_algorithm_has_a_timer() {
        for (name, _) in ALGORITHMS {
            assert!(Timer::new(name).is_some(), "{}", name);
        }
        assert!(Timer::new("quantum_sort").is_none());
    }

    #[test]
    fn timers_run_on_their_own_kind_only() {
        let props = WorkloadProps { size: 6, ..WorkloadProps::default() };
        let harness = &mut Harness::new(1);

        for (name, kind) in ALGORITHMS {
            let timer = Timer::new(name).unwrap();
            for other in [WorkloadKind::Heap, WorkloadKind::SegmentTree, WorkloadKind::Text, WorkloadKind::Graph] {
                let input = generators::generate(other, &props, 1);
                assert_eq!(timer.run(harness, &input).is_ok(), other == kind, "{} on {:?}", name, other);
            }
        }
    }

    #[test]
    fn dijkstra_reports_negative_weights() {
        let props = WorkloadProps { size: 4, negative_weights: true, max_weight: 5, ..WorkloadProps::default() };
        let input = generators::generate(WorkloadKind::Graph, &props, 2);
        let has_negative = match &input {
            Input::Graph { graph, .. } => graph.edges().any(|e| e.weight < 0),
            _ => unreachable!(),
        };
        let result = Timer::new("dijkstra").unwrap().run(&mut Harness::new(0), &input);
        assert_eq!(result.is_err(), has_negative);
        assert!(Timer::new("bellman_ford").unwrap().run(&mut Harness::new(0), &input).is_ok());
    }

    #[test]
    fn checksums_agree() {
        let values = vec![3, -1, 4, 1, -5];
        let ops = [
            SegmentOp::Query(0, 4), SegmentOp::Update(2, 10),
            SegmentOp::Query(1, 3), SegmentOp::Query(4, 4),
        ];
        assert_eq!(segment_tree_ops(values.clone(), &ops), prefix_sum_ops(values, &ops));

        let text = b"abracadabra";
        let patterns = vec![b"abra".to_vec(), b"a".to_vec(), b"cad".to_vec()];
        assert_eq!(aho_corasick(text, &patterns), 8);
        assert_eq!(z_find_all(text, &patterns), 8);
        assert_eq!(naive_multi_search(text, &patterns), 8);
    }
}
