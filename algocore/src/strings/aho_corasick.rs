//! Aho-Corasick automaton over byte patterns.
//!
//! Aho, A. V., & Corasick, M. J. (1975). Efficient string matching: an aid to
//! bibliographic search. Communications of the ACM, 18(6), 333-340.
//!
//! The automaton is a trie of the patterns plus, for every state, a failure
//! link to the state spelling the longest proper suffix that is also a
//! pattern prefix. Each state's output list already includes the outputs
//! reachable through its failure chain, so a search emits matches without
//! walking failure links a second time.

use std::{collections::VecDeque, ops::Range};

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    visitor::{Counter, VecWriter, Visitor},
};

/// Index of a pattern in the list given to [`AhoCorasick::new`].
pub type PatternId = usize;
pub type StateId = usize;

pub const ROOT: StateId = 0;

/// One occurrence of a pattern. `start..=end` is the matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end + 1
    }
}

/// A match together with a window of surrounding text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchContext {
    pub found: Match,
    pub window: Range<usize>,
}

impl MatchContext {
    /// The window cut from `text`, or `None` if `text` is not the searched
    /// text and is too short.
    pub fn slice<'t>(&self, text: &'t [u8]) -> Option<&'t [u8]> {
        text.get(self.window.clone())
    }
}

#[derive(Debug, Clone, Default)]
struct State {
    // Sorted by byte.
    transitions: SmallVec<[(u8, StateId); 4]>,
    failure: StateId,
    // Sorted ascending, includes outputs of the failure chain.
    outputs: SmallVec<[PatternId; 2]>,
    depth: usize,
}

impl State {
    fn next(&self, byte: u8) -> Option<StateId> {
        self.transitions
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.transitions[i].1)
    }
}

#[derive(Debug, Clone)]
pub struct AhoCorasick {
    states: Vec<State>,
    patterns: Vec<Vec<u8>>,
}

impl AhoCorasick {
    /// Builds the automaton. Fails if there are no patterns or any pattern is
    /// empty. Duplicate patterns are kept and reported under each id.
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let patterns: Vec<Vec<u8>> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_vec())
            .collect();

        if patterns.is_empty() {
            return Err(Error::EmptyPatternSet);
        }
        if let Some(id) = patterns.iter().position(|p| p.is_empty()) {
            return Err(Error::EmptyPattern { id });
        }

        let mut automaton = Self {
            states: vec![State::default()],
            patterns,
        };
        automaton.build_trie();
        automaton.build_failure_links();

        debug_assert!(automaton.check_invariant());
        Ok(automaton)
    }

    fn build_trie(&mut self) {
        for id in 0..self.patterns.len() {
            let mut state = ROOT;
            for depth in 0..self.patterns[id].len() {
                let byte = self.patterns[id][depth];
                state = match self.states[state].next(byte) {
                    Some(next) => next,
                    None => self.add_state(state, byte, depth + 1),
                };
            }
            self.states[state].outputs.push(id);
        }
    }

    fn add_state(&mut self, parent: StateId, byte: u8, depth: usize) -> StateId {
        let id = self.states.len();
        self.states.push(State { depth, ..State::default() });

        let transitions = &mut self.states[parent].transitions;
        let pos = transitions.partition_point(|&(b, _)| b < byte);
        transitions.insert(pos, (byte, id));
        id
    }

    /// Breadth-first, so a state's failure target is always finished before
    /// the state itself.
    fn build_failure_links(&mut self) {
        let mut queue: VecDeque<StateId> = VecDeque::new();

        let root_children: SmallVec<[(u8, StateId); 4]> = self.states[ROOT].transitions.clone();
        for (_, child) in root_children {
            self.states[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let children: SmallVec<[(u8, StateId); 4]> = self.states[parent].transitions.clone();

            for (byte, child) in children {
                let mut f = self.states[parent].failure;
                while f != ROOT && self.states[f].next(byte).is_none() {
                    f = self.states[f].failure;
                }
                let failure = match self.states[f].next(byte) {
                    Some(target) if target != child => target,
                    _ => ROOT,
                };
                self.states[child].failure = failure;

                let inherited = self.states[failure].outputs.clone();
                let outputs = &mut self.states[child].outputs;
                outputs.extend(inherited);
                outputs.sort_unstable();

                queue.push_back(child);
            }
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern(&self, id: PatternId) -> Option<&[u8]> {
        self.patterns.get(id).map(Vec::as_slice)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn failure(&self, state: StateId) -> Option<StateId> {
        self.states.get(state).map(|s| s.failure)
    }

    pub fn outputs(&self, state: StateId) -> Option<&[PatternId]> {
        self.states.get(state).map(|s| s.outputs.as_slice())
    }

    /// Trie transition only; does not follow failure links.
    pub fn next_state(&self, state: StateId, byte: u8) -> Option<StateId> {
        self.states.get(state).and_then(|s| s.next(byte))
    }

    /// One step of the search machine: follow failure links until `byte` can
    /// be consumed, or stay at the root.
    #[inline]
    fn step(&self, mut state: StateId, byte: u8) -> StateId {
        loop {
            if let Some(next) = self.states[state].next(byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].failure;
        }
    }

    #[inline]
    fn emit<V: Visitor<Match>>(&self, state: StateId, end: usize, visitor: &mut V) {
        for &pattern in &self.states[state].outputs {
            visitor.visit(Match {
                pattern,
                start: end + 1 - self.patterns[pattern].len(),
                end,
            });
        }
    }

    /// Visits every occurrence of every pattern, ordered by end position and
    /// then by pattern id.
    pub fn search_visit<V: Visitor<Match>>(&self, text: &[u8], visitor: &mut V) {
        let mut state = ROOT;
        for (i, &byte) in text.iter().enumerate() {
            state = self.step(state, byte);
            self.emit(state, i, visitor);
        }
    }

    pub fn search(&self, text: &[u8]) -> Vec<Match> {
        let mut writer = VecWriter::new();
        self.search_visit(text, &mut writer);
        writer.into()
    }

    pub fn count(&self, text: &[u8]) -> usize {
        let mut counter = Counter::new();
        self.search_visit(text, &mut counter);
        counter.count()
    }

    /// First match in search order, stopping as soon as it is found.
    pub fn find_first(&self, text: &[u8]) -> Option<Match> {
        let mut state = ROOT;
        for (i, &byte) in text.iter().enumerate() {
            state = self.step(state, byte);
            if let Some(&pattern) = self.states[state].outputs.first() {
                return Some(Match {
                    pattern,
                    start: i + 1 - self.patterns[pattern].len(),
                    end: i,
                });
            }
        }
        None
    }

    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find_first(text).is_some()
    }

    /// Every match with up to `k` bytes of context on each side, clamped to
    /// the text.
    pub fn search_with_context(&self, text: &[u8], k: usize) -> Vec<MatchContext> {
        self.search(text)
            .into_iter()
            .map(|found| MatchContext {
                found,
                window: found.start.saturating_sub(k)..text.len().min(found.end + 1 + k),
            })
            .collect()
    }

    /// Non-overlapping matches chosen leftmost first, longest among those
    /// sharing a start, then left to right. Ties in length go to the lower
    /// pattern id.
    pub fn leftmost_longest(&self, text: &[u8]) -> Vec<Match> {
        let mut matches = self.search(text);
        matches.sort_unstable_by(|a, b| {
            a.start.cmp(&b.start)
                .then(b.len().cmp(&a.len()))
                .then(a.pattern.cmp(&b.pattern))
        });

        let mut selected = Vec::new();
        let mut cursor = 0;
        for found in matches {
            if found.start >= cursor {
                cursor = found.end + 1;
                selected.push(found);
            }
        }
        selected
    }

    /// Copy of `text` with every [`leftmost_longest`](Self::leftmost_longest)
    /// match replaced by `replacement`.
    pub fn replace_all(&self, text: &[u8], replacement: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(text.len());
        let mut last = 0;
        for found in self.leftmost_longest(text) {
            result.extend_from_slice(&text[last..found.start]);
            result.extend_from_slice(replacement);
            last = found.end + 1;
        }
        result.extend_from_slice(&text[last..]);
        result
    }

    /// Spelling of every state, or `None` if the transitions do not form a
    /// tree rooted at [`ROOT`].
    fn labels(&self) -> Option<Vec<Vec<u8>>> {
        let mut labels: Vec<Option<Vec<u8>>> = vec![None; self.states.len()];
        labels[ROOT] = Some(Vec::new());

        let mut stack = vec![(ROOT, Vec::new())];
        while let Some((state, label)) = stack.pop() {
            for &(byte, child) in &self.states[state].transitions {
                match labels.get(child) {
                    Some(None) => {}
                    _ => return None,
                }
                let mut spelled = label.clone();
                spelled.push(byte);
                labels[child] = Some(spelled.clone());
                stack.push((child, spelled));
            }
        }
        labels.into_iter().collect()
    }

    /// Follows trie transitions from the root.
    fn walk(&self, bytes: &[u8]) -> Option<StateId> {
        bytes.iter().try_fold(ROOT, |state, &byte| self.states[state].next(byte))
    }

    /// Checks the trie, failure-link and output-closure invariants. The
    /// failure target of a state must spell its longest proper suffix that is
    /// also a path in the trie.
    pub fn check_invariant(&self) -> bool {
        let root = &self.states[ROOT];
        if root.failure != ROOT || root.depth != 0 {
            return false;
        }
        let labels = match self.labels() {
            Some(labels) => labels,
            None => return false,
        };

        let trie_ok = self.patterns.iter().enumerate().all(|(id, pattern)| {
            self.walk(pattern)
                .map_or(false, |state| self.states[state].outputs.binary_search(&id).is_ok())
        });

        let links_ok = self.states.iter().zip(&labels).skip(1).all(|(state, label)| {
            let (failure, failure_label) = match (self.states.get(state.failure), labels.get(state.failure)) {
                (Some(failure), Some(failure_label)) => (failure, failure_label),
                _ => return false,
            };
            let longest = (failure_label.len() + 1..label.len())
                .all(|len| self.walk(&label[label.len() - len..]).is_none());

            state.depth == label.len()
                && failure_label.len() < label.len()
                && label.ends_with(failure_label)
                && longest
                && state.outputs.windows(2).all(|w| w[0] < w[1])
                && state.outputs.iter().all(|&id| label.ends_with(&self.patterns[id]))
                && failure.outputs.iter().all(|id| state.outputs.binary_search(id).is_ok())
        });

        trie_ok && links_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(ac: &AhoCorasick, text: &[u8]) -> Vec<(PatternId, usize)> {
        ac.search(text).iter().map(|m| (m.pattern, m.end)).collect()
    }

    #[test]
    fn failure_links_classic() {
        let ac = AhoCorasick::new(["he", "she", "hers", "his"]).unwrap();
        // root, h, he, s, sh, she, her, hers, hi, his
        assert_eq!(ac.state_count(), 10);

        let sh = ac.next_state(ac.next_state(ROOT, b's').unwrap(), b'h').unwrap();
        let she = ac.next_state(sh, b'e').unwrap();
        let he = ac.next_state(ac.next_state(ROOT, b'h').unwrap(), b'e').unwrap();
        assert_eq!(ac.failure(she), Some(he));
        assert_eq!(ac.outputs(she), Some(&[0, 1][..]));
        assert!(ac.check_invariant());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(AhoCorasick::new(Vec::<&str>::new()).unwrap_err(), Error::EmptyPatternSet);
        assert_eq!(AhoCorasick::new(["a", ""]).unwrap_err(), Error::EmptyPattern { id: 1 });
    }

    #[test]
    fn duplicates_report_every_id() {
        let ac = AhoCorasick::new(["ab", "ab", "b"]).unwrap();
        assert_eq!(ends(&ac, b"xab"), vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn nested_patterns() {
        let ac = AhoCorasick::new(["a", "aa", "aaa"]).unwrap();
        assert_eq!(
            ends(&ac, b"aaa"),
            vec![(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(ac.count(b"aaa"), 6);
    }

    #[test]
    fn find_first_and_is_match() {
        let ac = AhoCorasick::new(["cd", "bcd", "zz"]).unwrap();
        assert_eq!(ac.find_first(b"abcde"), Some(Match { pattern: 0, start: 2, end: 3 }));
        assert!(!ac.is_match(b"abc"));
    }

    #[test]
    fn context_window_is_clamped() {
        let ac = AhoCorasick::new(["needle"]).unwrap();
        let text = b"a needle here";
        let found = ac.search_with_context(text, 3);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].window, 0..11);
        assert_eq!(found[0].slice(text), Some(&b"a needle he"[..]));
        assert_eq!(found[0].slice(b"a needle"), None);
    }

    #[test]
    fn invariant_rejects_short_failure_link() {
        let mut ac = AhoCorasick::new(["he", "she", "hers", "his"]).unwrap();
        let she = ac.walk(b"she").unwrap();
        let hi = ac.walk(b"hi").unwrap();

        // "he" is a longer suffix of "she" that the trie spells.
        ac.states[she].failure = ROOT;
        assert!(!ac.check_invariant());

        // Shallower than "she" but not a suffix of it.
        ac.states[she].failure = hi;
        assert!(!ac.check_invariant());
    }

    #[test]
    fn replace_prefers_leftmost_then_longest() {
        let ac = AhoCorasick::new(["abc", "ab", "bcd", "d"]).unwrap();
        let chosen: Vec<(PatternId, usize)> = ac.leftmost_longest(b"abcd")
            .iter().map(|m| (m.pattern, m.start)).collect();
        assert_eq!(chosen, vec![(0, 0), (3, 3)]);
        assert_eq!(ac.replace_all(b"abcd", b"_"), b"__".to_vec());
        assert_eq!(ac.replace_all(b"xyz", b"_"), b"xyz".to_vec());
    }
}
