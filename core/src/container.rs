//! Container factories used to wrap and collect values.

use ittools_common::{Result, Value};
use serde::{Deserialize, Serialize};

/// Builds a container value from a sequence of items.
///
/// Implemented by [`ContainerKind`] for the built-in containers and by any
/// closure `Fn(Vec<Value>) -> Result<Value>` for custom ones. Errors raised
/// while building are handed to the caller unchanged.
pub trait ContainerFactory {
    /// Build a container holding `items`.
    fn build(&self, items: Vec<Value>) -> Result<Value>;
}

/// The built-in container kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerKind {
    #[default]
    List,
    Tuple,
    /// Rejects unhashable items
    Set,
    /// Rejects unhashable items
    FrozenSet,
    Series,
}

impl ContainerFactory for ContainerKind {
    fn build(&self, items: Vec<Value>) -> Result<Value> {
        match self {
            ContainerKind::List => Ok(Value::List(items)),
            ContainerKind::Tuple => Ok(Value::Tuple(items)),
            ContainerKind::Set => Value::set(items),
            ContainerKind::FrozenSet => Value::frozenset(items),
            ContainerKind::Series => Ok(Value::Series(items)),
        }
    }
}

impl<F> ContainerFactory for F
where
    F: Fn(Vec<Value>) -> Result<Value>,
{
    fn build(&self, items: Vec<Value>) -> Result<Value> {
        self(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ittools_common::CommonError;

    #[test]
    fn test_builtin_kinds() {
        let items = || vec![Value::Int(1), Value::Int(1)];
        assert_eq!(
            ContainerKind::List.build(items()).unwrap(),
            Value::list([1, 1])
        );
        assert_eq!(
            ContainerKind::Tuple.build(items()).unwrap(),
            Value::tuple([1, 1])
        );
        assert_eq!(
            ContainerKind::Set.build(items()).unwrap(),
            Value::set([1]).unwrap()
        );
        assert_eq!(ContainerKind::default(), ContainerKind::List);
    }

    #[test]
    fn test_set_kind_surfaces_unhashable() {
        let err = ContainerKind::Set
            .build(vec![Value::list([1, 2, 3])])
            .unwrap_err();
        assert_eq!(err, CommonError::unhashable("list"));
    }

    #[test]
    fn test_closure_factory() {
        let reversed = |mut items: Vec<Value>| -> Result<Value> {
            items.reverse();
            Ok(Value::List(items))
        };
        assert_eq!(
            reversed.build(vec![Value::Int(1), Value::Int(2)]).unwrap(),
            Value::list([2, 1])
        );
    }
}
