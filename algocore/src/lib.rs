//! Reusable algorithmic building blocks: a mode-aware binary heap, a sum
//! segment tree, Z-array and Aho-Corasick string matching, and single-source
//! shortest paths over weighted digraphs.
//!
//! Everything here is single-threaded and deterministic. Fallible operations
//! return [`Result`] with a typed [`Error`].

pub mod error;
pub mod heap;
pub mod paths;
pub mod segment_tree;
pub mod strings;
pub mod visitor;

pub use error::{Error, ErrorKind, Result};
