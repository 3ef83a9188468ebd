//! Common test utilities and helpers for integration tests

use ittools_core::Value;

/// Create an empty list value
pub fn empty_list() -> Value {
    Value::list(Vec::<Value>::new())
}

/// Create the mixed nested structure used across tests: `[[2, 2], [2, [3, 3]], 1]`
pub fn create_nested_value() -> Value {
    Value::list([
        Value::list([2, 2]),
        Value::list([Value::Int(2), Value::list([3, 3])]),
        Value::Int(1),
    ])
}

/// Create a list of ten identical labels
#[allow(dead_code)] // Only used by some of the test binaries
pub fn create_hi_data() -> Vec<String> {
    vec!["hi".to_string(); 10]
}
