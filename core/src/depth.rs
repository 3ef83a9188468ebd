//! Nesting depth measurement.
//!
//! The depth of a value is the number of container levels around its
//! innermost atomic members:
//!
//! ```rust
//! use ittools_common::{Value, ValueType};
//! use ittools_core::depth::{depth, depth_default, Exclude};
//!
//! let value = Value::list([
//!     Value::list([2, 2]),
//!     Value::list([Value::Int(2), Value::tuple([3, 3])]),
//!     Value::Int(1),
//! ]);
//! assert_eq!(depth_default(&value), 3);
//! assert_eq!(depth(&value, &Exclude::text().with(ValueType::Tuple)), 2);
//! ```

use std::iter::Peekable;
use std::ptr;

use ittools_common::ValueType;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::nested::{Capability, Children, Nested};

/// Set of value types treated as atomic (depth 0) during measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclude {
    types: Vec<ValueType>,
}

impl Exclude {
    /// Exclude nothing.
    pub fn none() -> Self {
        Self { types: Vec::new() }
    }

    /// Exclude text only. This is the default.
    pub fn text() -> Self {
        Self::none().with(ValueType::Str)
    }

    /// Exclude text and series columns, as used by nestify.
    pub fn text_and_series() -> Self {
        Self::text().with(ValueType::Series)
    }

    /// Add a type to the exclusion set.
    pub fn with(mut self, value_type: ValueType) -> Self {
        if !self.types.contains(&value_type) {
            self.types.push(value_type);
        }
        self
    }

    /// Check whether a type is excluded.
    pub fn contains(&self, value_type: ValueType) -> bool {
        self.types.contains(&value_type)
    }
}

impl Default for Exclude {
    fn default() -> Self {
        Self::text()
    }
}

impl FromIterator<ValueType> for Exclude {
    fn from_iter<I: IntoIterator<Item = ValueType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Compute the nesting depth of `value`, treating the types in `exclude` as
/// atomic.
///
/// Values that cannot be iterated have depth 0. A value whose first child is
/// the value itself has depth 1. A child that is already one of its own
/// ancestors contributes depth 0, so measurement terminates on cyclic
/// structures.
///
/// Traversal uses an explicit stack, so arbitrarily deep values are measured
/// without growing the call stack. Ancestors are recognized by address,
/// which assumes nodes are not zero-sized; zero-sized nodes share addresses
/// and would be taken for their own ancestors.
pub fn depth<T: Nested>(value: &T, exclude: &Exclude) -> usize {
    let measured = measure(value, exclude);
    trace!(depth = measured, value_type = %value.value_type(), "measured nesting depth");
    measured
}

/// Compute the nesting depth of `value` with text excluded.
pub fn depth_default<T: Nested>(value: &T) -> usize {
    depth(value, &Exclude::default())
}

enum Step<'a, T: 'a> {
    Leaf(usize),
    Branch(Peekable<Children<'a, T>>),
}

/// A container being measured and the deepest child seen so far.
struct Frame<'a, T: 'a> {
    node: *const T,
    children: Peekable<Children<'a, T>>,
    deepest: usize,
}

fn enter<'a, T: Nested>(
    value: &'a T,
    exclude: &Exclude,
    ancestors: &FxHashSet<*const T>,
) -> Step<'a, T> {
    if exclude.contains(value.value_type()) || ancestors.contains(&ptr::from_ref(value)) {
        return Step::Leaf(0);
    }

    let children = match value.capability() {
        Capability::Atomic => return Step::Leaf(0),
        // every character of a text iterates to itself
        Capability::Text { len } => return Step::Leaf(if len > 1 { 2 } else { 1 }),
        Capability::Iterable(children) | Capability::Mapping(children) => children,
    };
    let mut children = children.peekable();

    if children.peek().is_some_and(|first| ptr::eq(*first, value)) {
        return Step::Leaf(1);
    }
    Step::Branch(children)
}

fn measure<T: Nested>(value: &T, exclude: &Exclude) -> usize {
    let mut ancestors = FxHashSet::default();
    let children = match enter(value, exclude, &ancestors) {
        Step::Leaf(measured) => return measured,
        Step::Branch(children) => children,
    };

    let root = ptr::from_ref(value);
    ancestors.insert(root);
    let mut stack = vec![Frame {
        node: root,
        children,
        deepest: 0,
    }];
    let mut measured = 0;

    while let Some(frame) = stack.last_mut() {
        match frame.children.next() {
            Some(child) => match enter(child, exclude, &ancestors) {
                Step::Leaf(d) => frame.deepest = frame.deepest.max(d),
                Step::Branch(children) => {
                    let node = ptr::from_ref(child);
                    ancestors.insert(node);
                    stack.push(Frame {
                        node,
                        children,
                        deepest: 0,
                    });
                }
            },
            None => {
                let finished = 1 + frame.deepest;
                let node = frame.node;
                stack.pop();
                ancestors.remove(&node);
                match stack.last_mut() {
                    Some(parent) => parent.deepest = parent.deepest.max(finished),
                    None => measured = finished,
                }
            }
        }
    }

    measured
}
