use algocore::{
    heap::{Heap, HeapMode},
    paths::{Distance, Graph, ShortestPaths},
    strings::Match,
};

pub fn prop_heap_ordered<T: Ord>(items: &[T], mode: HeapMode) -> bool {
    (1..items.len()).all(|i| {
        let parent = &items[(i - 1) / 2];
        match mode {
            HeapMode::Min => parent <= &items[i],
            HeapMode::Max => parent >= &items[i],
        }
    })
}

pub fn prop_heap_valid<T: Ord>(heap: &Heap<T>) -> bool {
    prop_heap_ordered(heap.as_slice(), heap.mode())
}

// Reference search: every window of every pattern.
pub fn naive_find_all(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

pub fn naive_multi_search(patterns: &[Vec<u8>], text: &[u8]) -> Vec<(usize, usize)> {
    let mut matches: Vec<(usize, usize)> = patterns
        .iter()
        .enumerate()
        .flat_map(|(id, pattern)| {
            naive_find_all(pattern, text)
                .into_iter()
                .map(move |start| (start + pattern.len() - 1, id))
        })
        .collect();
    matches.sort_unstable();
    matches
}

// Emitted spans spell the pattern they claim.
pub fn prop_matches_sound(matches: &[Match], patterns: &[Vec<u8>], text: &[u8]) -> bool {
    matches.iter().all(|m| {
        m.end < text.len()
            && m.len() == patterns[m.pattern].len()
            && text[m.span()] == patterns[m.pattern][..]
    })
}

pub fn prop_matches_ordered(matches: &[Match]) -> bool {
    matches.windows(2).all(|w| (w[0].end, w[0].pattern) < (w[1].end, w[1].pattern))
}

pub fn prop_z_law(s: &[u8], z: &[usize]) -> bool {
    if z.len() != s.len() || z.first().map_or(false, |&z0| z0 != 0) {
        return false;
    }
    (1..s.len()).all(|i| {
        let len = z[i];
        let matches = i + len <= s.len() && s[..len] == s[i..i + len];
        let maximal = i + len == s.len() || s[len] != s[i + len];
        matches && maximal
    })
}

/// Floyd-Warshall distances from `source`, or `None` if a negative cycle is
/// reachable from it.
pub fn reference_distances(graph: &Graph<i64>, source: usize) -> Option<Vec<Distance<i64>>> {
    let n = graph.node_count();
    let mut d: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];

    for (i, row) in d.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in graph.edges() {
        let cell = &mut d[edge.from][edge.to];
        *cell = Some(cell.map_or(edge.weight, |w| w.min(edge.weight)));
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |c| a + b < c) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    let cycle_reachable = (0..n).any(|k| d[source][k].is_some() && d[k][k].map_or(false, |w| w < 0));
    if cycle_reachable {
        return None;
    }

    Some(d[source].iter()
        .map(|cell| cell.map_or(Distance::Unreachable, Distance::Finite))
        .collect())
}

/// Predecessors form a tree of tight edges rooted at the source.
pub fn prop_predecessors_consistent(graph: &Graph<i64>, paths: &ShortestPaths<i64>) -> bool {
    (0..graph.node_count()).all(|v| {
        if v == paths.source {
            return paths.predecessors[v].is_none();
        }
        match (paths.predecessors[v], paths.distances[v]) {
            (None, Distance::Unreachable) => true,
            (Some(u), Distance::Finite(dv)) => match paths.distances[u] {
                Distance::Finite(du) => graph.edges_from(u).unwrap()
                    .iter()
                    .any(|&(to, w)| to == v && du + w == dv),
                Distance::Unreachable => false,
            },
            _ => false,
        }
    })
}
