//! Shape-dispatched operation sets and the chaining wrapper
//!
//! - [`dispatch`] - value classification and the per-shape operation lists
//! - [`bound`] - operation sets bound to a borrowed value
//! - [`wrapper`] - the [`Chain`] wrapper that re-dispatches on every step
//!
//! # Examples
//!
//! ```
//! use chainable_core::chain;
//! use serde_json::json;
//!
//! let admins = chain(json!({
//!     "1": {"admin": true},
//!     "2": {"admin": false}
//! }))
//! .filter(|entry| entry.value["admin"] == json!(true))?
//! .done();
//!
//! assert_eq!(admins, json!({"1": {"admin": true}}));
//! # Ok::<(), chainable_core::Error>(())
//! ```
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

pub mod bound;
pub mod dispatch;
pub mod wrapper;


pub use bound::{bind, MappingOps, Ops, SequenceOps};
pub use dispatch::{classify, Operation, Shape};
pub use wrapper::{chain, Chain};
