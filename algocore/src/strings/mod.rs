//! String indexing: Z-array single-pattern search and Aho-Corasick
//! multi-pattern search over byte strings.

pub mod aho_corasick;
pub mod z;

pub use aho_corasick::{AhoCorasick, Match, MatchContext, PatternId, StateId};
pub use z::{find_all, find_all_visit, z_array};
