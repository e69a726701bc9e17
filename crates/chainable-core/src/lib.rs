//! Chainable Core - immutable transformations over JSON mappings and sequences
//!
//! This crate provides pure, non-mutating helpers for keyed mappings and
//! ordered sequences, plus a fluent wrapper that threads a value through
//! successive transformations.
//!
//! # Main Components
//!
//! - **Path Accessor**: deep `get_in`/`set_in`/`remove_in` through nested mappings
//! - **Mapping Transforms**: merge, map/filter, pick/omit, conversion to a sequence
//! - **Sequence Transforms**: `to_object` and `group_by`
//! - **Capability Dispatch**: picks the mapping or sequence operation set by shape
//! - **Chain Wrapper**: re-wraps every result until `done()`
//!
//! # Example
//!
//! ```
//! use chainable_core::{chain, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let by_id = chain(json!({
//!         "a": {"id": 1, "name": "A"},
//!         "b": {"id": 2, "name": "B"}
//!     }))
//!     .to_array()?
//!     .to_object_with("id", "name")?
//!     .done();
//!
//!     assert_eq!(by_id, json!({"1": "A", "2": "B"}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod accessor;
pub mod chain;
pub mod config;
pub mod error;
pub mod path;
pub mod transform;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use accessor::{Accessor, Entry};
pub use chain::{bind, chain, Chain, Ops, Operation, Shape};
pub use config::{ChainOptions, ScalarPolicy};
pub use error::{Error, Result};
pub use path::{get_in, remove_in, set_in, Path};
pub use transform::Mapping;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
