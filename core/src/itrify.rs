//! Coerce values into iterable containers.

use ittools_common::{Result, Value};
use tracing::trace;

use crate::container::{ContainerFactory, ContainerKind};
use crate::nested::Nested;

/// Turn `value` into a container built by `factory` unless it already is a
/// plain ordered sequence.
///
/// Text is wrapped whole instead of being split into characters. Any other
/// value that is not a list or tuple has its elements spread into the new
/// container; scalars cannot be spread and fail with
/// [`ittools_common::CommonError::NotIterable`]. Lists and tuples are
/// returned unchanged, whatever the factory.
///
/// ```rust
/// use ittools_common::Value;
/// use ittools_core::container::ContainerKind;
/// use ittools_core::itrify::itrify;
///
/// assert_eq!(itrify(Value::from("String"), &ContainerKind::Tuple).unwrap(), Value::tuple(["String"]));
/// assert_eq!(itrify(Value::list([1, 2, 3]), &ContainerKind::Tuple).unwrap(), Value::list([1, 2, 3]));
/// ```
pub fn itrify<F>(value: Value, factory: &F) -> Result<Value>
where
    F: ContainerFactory + ?Sized,
{
    if value.is_text() {
        trace!("wrapping text whole");
        return factory.build(vec![value]);
    }
    if !value.is_sequence() {
        trace!(value_type = %value.value_type(), "spreading elements into container");
        return factory.build(value.into_elements()?);
    }
    Ok(value)
}

/// [`itrify`] with a list as the container.
pub fn itrify_list(value: Value) -> Result<Value> {
    itrify(value, &ContainerKind::List)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ittools_common::CommonError;

    #[test]
    fn test_itrify_text() {
        assert_eq!(
            itrify_list(Value::from("String")).unwrap(),
            Value::list(["String"])
        );
        assert_eq!(
            itrify(Value::from("String"), &ContainerKind::Set).unwrap(),
            Value::set(["String"]).unwrap()
        );
    }

    #[test]
    fn test_itrify_keeps_sequences() {
        let list = Value::list([1, 2, 3]);
        assert_eq!(itrify(list.clone(), &ContainerKind::Tuple).unwrap(), list);
        let tuple = Value::tuple([1, 2]);
        assert_eq!(itrify_list(tuple.clone()).unwrap(), tuple);
    }

    #[test]
    fn test_itrify_series_into_set() {
        let series = Value::series([1, 2, 3]);
        assert_eq!(
            itrify(series, &ContainerKind::Set).unwrap(),
            Value::set([1, 2, 3]).unwrap()
        );
    }

    #[test]
    fn test_itrify_spreads_sets_and_mappings() {
        let set = Value::set([1, 2]).unwrap();
        assert_eq!(itrify_list(set).unwrap(), Value::list([1, 2]));

        let dict = Value::dict([("a", 1), ("b", 2)]).unwrap();
        assert_eq!(itrify_list(dict).unwrap(), Value::list(["a", "b"]));
    }

    #[test]
    fn test_itrify_scalar_is_not_iterable() {
        let err = itrify_list(Value::Int(5)).unwrap_err();
        assert_eq!(err, CommonError::not_iterable("int"));
    }
}
