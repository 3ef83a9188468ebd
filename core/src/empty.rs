//! Recursive emptiness of nested lists.

use ittools_common::ValueType;

use crate::nested::{Capability, Nested};

/// Check whether `value` is a list holding nothing but empty lists.
///
/// Only lists take part: an empty tuple, set or mapping is not empty by this
/// rule, and neither is any scalar.
pub fn is_empty<T: Nested>(value: &T) -> bool {
    if value.value_type() != ValueType::List {
        return false;
    }
    match value.capability() {
        Capability::Iterable(mut children) => children.all(is_empty),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ittools_common::Value;

    fn empty_list() -> Value {
        Value::list(Vec::<Value>::new())
    }

    #[test]
    fn test_empty_list() {
        assert!(is_empty(&empty_list()));
    }

    #[test]
    fn test_list_with_content() {
        let value = Value::list([empty_list(), Value::list([1, 2, 3])]);
        assert!(!is_empty(&value));
    }

    #[test]
    fn test_deeply_nested_empty_lists() {
        let value = Value::list([Value::list([Value::list([empty_list()])])]);
        assert!(is_empty(&value));
    }

    #[test]
    fn test_tuples_never_qualify() {
        assert!(!is_empty(&Value::tuple(Vec::<Value>::new())));
        assert!(!is_empty(&Value::tuple([empty_list(), empty_list()])));
        assert!(!is_empty(&Value::list([Value::tuple(Vec::<Value>::new())])));
    }

    #[test]
    fn test_scalars_and_text() {
        assert!(!is_empty(&Value::None));
        assert!(!is_empty(&Value::from("")));
        assert!(!is_empty(&Value::set(Vec::<Value>::new()).unwrap()));
    }
}
