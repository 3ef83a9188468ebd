//! Incrementing label generator.
//!
//! ```rust
//! use ittools_core::label::Stringcrementor;
//!
//! let mut labels = Stringcrementor::new("The Answer is: ", 0);
//! assert_eq!(labels.next().as_deref(), Some("The Answer is: 0"));
//! assert_eq!(labels.next().as_deref(), Some("The Answer is: 1"));
//! ```

use std::iter::FusedIterator;

/// Default label prefix.
pub const DEFAULT_PREFIX: &str = "Stringcrementor ";

/// Infinite iterator of `prefix + counter` strings.
///
/// Each call to `next` yields the prefix followed by the current counter and
/// then advances the counter by one. It never returns `None`. Instances share
/// no state; cloning forks the sequence at the current position.
///
/// The counter is an `i128` seeded from an `i64`, so counting past
/// `i64::MAX` keeps producing labels instead of overflowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stringcrementor {
    prefix: String,
    counter: i128,
}

impl Stringcrementor {
    /// Create a generator starting at `start`.
    pub fn new<S: Into<String>>(prefix: S, start: i64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: i128::from(start),
        }
    }

    /// Label prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Counter value the next label will carry.
    pub fn peek(&self) -> i128 {
        self.counter
    }
}

impl Default for Stringcrementor {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, 0)
    }
}

impl Iterator for Stringcrementor {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let label = format!("{}{}", self.prefix, self.counter);
        self.counter += 1;
        Some(label)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Stringcrementor {}
