//! Result sinks for the search routines.
//!
//! Searches report each match to a [`Visitor`] instead of building a vector,
//! so callers that only need a tally pay nothing for storage.

pub trait Visitor<T> {
    fn visit(&mut self, value: T);
}

/// Tallies matches and drops them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter(usize);

impl Counter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn count(&self) -> usize {
        self.0
    }
}

impl<T> Visitor<T> for Counter {
    fn visit(&mut self, _value: T) {
        self.0 += 1;
    }
}

/// Collects matches in the order they are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecWriter<T>(Vec<T>);

impl<T> VecWriter<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for VecWriter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<VecWriter<T>> for Vec<T> {
    fn from(writer: VecWriter<T>) -> Self {
        writer.0
    }
}

impl<T> Visitor<T> for VecWriter<T> {
    fn visit(&mut self, value: T) {
        self.0.push(value);
    }
}
