//! ittools Core - helpers for iterable and nested data
//!
//! This crate measures and normalizes nesting depth, coerces values into
//! containers, generates incrementing labels, maps linear indices onto 2D
//! grids and splits sequences into balanced groups. The nested value model
//! and error type live in `ittools-common`.

pub mod container;
pub mod depth;
pub mod empty;
pub mod index;
pub mod itrify;
pub mod label;
pub mod nested;
pub mod nestify;
pub mod split;

pub use container::{ContainerFactory, ContainerKind};
pub use depth::{Exclude, depth, depth_default};
pub use empty::is_empty;
pub use index::{Index2D, Shape2D, enum_to_2dix};
pub use itrify::{itrify, itrify_list};
pub use label::Stringcrementor;
pub use nested::{Capability, Children, Nested};
pub use nestify::{nestify, nestify_list};
pub use split::{Group, ZipSplit, group, group_with_fill, zip_split};

pub use ittools_common::{CommonError, Result, Value, ValueType};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
