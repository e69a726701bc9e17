//! Pure transformation libraries
//!
//! - [`mapping`] - get/set/remove, merge, map/filter, pick/omit and
//!   conversion to a sequence over one keyed mapping
//! - [`sequence`] - `to_object` and `group_by` over an ordered sequence
//!
//! None of these functions fail or mutate their inputs.
//!
//! # Examples
//!
//! ```
//! use chainable_core::transform::{mapping, sequence};
//! use serde_json::json;
//!
//! let people = vec![
//!     json!({"id": 1, "name": "A"}),
//!     json!({"id": 2, "name": "B"}),
//! ];
//! let names = sequence::to_object_with(&people, &"id".into(), &"name".into());
//! assert_eq!(serde_json::Value::Object(names.clone()), json!({"1": "A", "2": "B"}));
//!
//! let picked = mapping::pick(&names, &["2", "9"]);
//! assert_eq!(serde_json::Value::Object(picked), json!({"2": "B"}));
//! ```
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

pub mod mapping;
pub mod sequence;


pub use mapping::Mapping;
