//! # structgen-output
//!
//! Schema descriptors, payload extraction, and validating JSON decoding.
//!
//! This crate owns the content side of structured generation:
//!
//! - **[`Schema`]**: a language-neutral descriptor of the expected JSON
//!   shape, built with [`SchemaBuilder`] or derived from a type via
//!   [`Structured`].
//! - **[`extract_payload`]**: strips markdown fences from a raw model reply
//!   to isolate the candidate JSON.
//! - **[`decode`]** / [`decode_with_schema`]: parse the candidate, validate
//!   it against the descriptor, and deserialize into the target type,
//!   producing a [`DecodeError`] that names the offending field otherwise.
//!
//! ## Example
//!
//! ```rust
//! use serde::Deserialize;
//! use structgen_output::{decode, extract_payload, Schema, Structured};
//!
//! #[derive(Deserialize)]
//! struct Task {
//!     name: String,
//!     priority: String,
//! }
//!
//! impl Structured for Task {
//!     fn schema() -> Schema {
//!         Schema::builder()
//!             .string("name", "Task name", true)
//!             .string("priority", "low, medium or high", true)
//!             .build()
//!     }
//! }
//!
//! let raw = "```json\n{\"name\": \"Write docs\", \"priority\": \"high\"}\n```";
//! let task: Task = decode(&extract_payload(raw)).unwrap();
//! assert_eq!(task.priority, "high");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod decode;
pub mod error;
pub mod extract;
pub mod schema;

pub use decode::{decode, decode_value, decode_with_schema, json_type_name};
pub use error::{DecodeError, DecodeResult};
pub use extract::extract_payload;
pub use schema::{FieldSpec, FieldType, Schema, SchemaBuilder, Structured};
