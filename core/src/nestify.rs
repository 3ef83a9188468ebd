//! Wrap values in containers until they reach a target nesting depth.

use ittools_common::{CommonError, Result, Value};
use tracing::debug;

use crate::container::{ContainerFactory, ContainerKind};
use crate::depth::{Exclude, depth};

/// Wrap `value` in single-element containers built by `factory` until its
/// depth reaches `target_depth`.
///
/// Depth is measured with text and series columns treated as atomic. A value
/// already at or above the target is returned unchanged. Errors from the
/// factory are returned as-is, and a factory whose output does not add a
/// level of nesting fails with [`CommonError::NestingStalled`].
///
/// ```rust
/// use ittools_common::Value;
/// use ittools_core::container::ContainerKind;
/// use ittools_core::nestify::nestify;
///
/// let nested = nestify(Value::list([1, 2, 3]), 3, &ContainerKind::Tuple).unwrap();
/// assert_eq!(nested.to_string(), "(([1, 2, 3],),)");
/// ```
pub fn nestify<F>(value: Value, target_depth: usize, factory: &F) -> Result<Value>
where
    F: ContainerFactory + ?Sized,
{
    let exclude = Exclude::text_and_series();
    let mut value = value;
    let mut current = depth(&value, &exclude);

    while current < target_depth {
        value = factory.build(vec![value])?;
        let wrapped = depth(&value, &exclude);
        if wrapped <= current {
            return Err(CommonError::nesting_stalled(wrapped, target_depth));
        }
        debug!(depth = wrapped, target = target_depth, "wrapped value");
        current = wrapped;
    }

    Ok(value)
}

/// [`nestify`] with lists as the container.
pub fn nestify_list(value: Value, target_depth: usize) -> Result<Value> {
    nestify(value, target_depth, &ContainerKind::List)
}
