//! Capability-based view over nested structures.
//!
//! Algorithms in this crate never branch on concrete container types. They
//! ask a value what it can do through [`Nested`]: expose key-value pairs,
//! expose elements, or nothing at all.

use ittools_common::{Value, ValueType};

/// Boxed iterator over the direct children of a nested value.
pub type Children<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// What a value offers for traversal.
pub enum Capability<'a, T: 'a> {
    /// Not iterable
    Atomic,
    /// Text of the given character count. Each character iterates to itself.
    Text { len: usize },
    /// Ordered or unordered elements
    Iterable(Children<'a, T>),
    /// Values of key-value pairs
    Mapping(Children<'a, T>),
}

/// Trait for values that can be measured and reshaped by ittools.
pub trait Nested: Sized {
    /// Type tag used for exclusion and error messages.
    fn value_type(&self) -> ValueType;

    /// Traversal capability of this value.
    fn capability(&self) -> Capability<'_, Self>;

    /// Whether this value is a plain ordered sequence (list, tuple or text).
    fn is_sequence(&self) -> bool;

    /// Whether this value is text.
    fn is_text(&self) -> bool {
        matches!(self.capability(), Capability::Text { .. })
    }
}

impl Nested for Value {
    fn value_type(&self) -> ValueType {
        Value::value_type(self)
    }

    fn capability(&self) -> Capability<'_, Self> {
        match self {
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => Capability::Atomic,
            Value::Str(s) => Capability::Text {
                len: s.chars().count(),
            },
            Value::List(items)
            | Value::Tuple(items)
            | Value::Set(items)
            | Value::FrozenSet(items)
            | Value::Series(items) => Capability::Iterable(Box::new(items.iter())),
            Value::Dict(entries) => {
                Capability::Mapping(Box::new(entries.iter().map(|(_, value)| value)))
            }
        }
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_) | Value::Tuple(_) | Value::Str(_))
    }
}
