//! # structgen
//!
//! Schema-conformant structured data out of free-text LLM completions.
//!
//! structgen turns an unstructured chat-completion endpoint into a reliable
//! producer of typed values: it embeds a schema instruction into the
//! prompt, extracts a JSON candidate from the model's free-form reply,
//! validates it against a schema descriptor, and on failure feeds the
//! validation error back to the model for self-correction, bounded by a
//! retry budget.
//!
//! ## Quick start
//!
//! ```rust
//! use serde::Deserialize;
//! use structgen::prelude::*;
//! use structgen_models::MockModel;
//!
//! #[derive(Deserialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Structured for Person {
//!     fn schema() -> Schema {
//!         Schema::builder()
//!             .title("Person")
//!             .string("name", "Full name", true)
//!             .integer("age", "Age in years", true)
//!             .build()
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! // Any CompletionModel works here; MockModel stands in for a provider.
//! let model = MockModel::new("demo")
//!     .with_text_response(r#"{"name": "Marie Curie", "age": 66}"#);
//!
//! let config = ModelConfig::builder("demo/model")
//!     .temperature(0.3)
//!     .build()
//!     .unwrap();
//!
//! let generator = Generator::new(model, config);
//! let person: Person = generator.generate("Tell me about Marie Curie").await.unwrap();
//! assert_eq!(person.age, 66);
//! # });
//! ```
//!
//! ## Architecture
//!
//! structgen is a workspace of focused crates:
//!
//! - [`structgen_core`] — messages, conversations, `ModelConfig`
//! - [`structgen_output`] — schema descriptors, extraction, decoding
//! - [`structgen_models`] — the `CompletionModel` seam and test models
//! - `structgen` (this crate) — prompt composition, the retry
//!   orchestrator, and batch helpers
//!
//! Transport, authentication, and provider wire formats are deliberately
//! out of scope: implement [`CompletionModel`](structgen_models::CompletionModel)
//! for your provider and hand it to a [`Generator`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod batch;
pub mod error;
pub mod generator;
pub mod prompt;

pub use batch::{generate_all, BatchOutcome};
pub use error::{GenerateError, GenerateResult};
pub use generator::{Generator, DEFAULT_MAX_RETRIES};
pub use prompt::{compose, feedback_message, schema_instruction};

// Re-export the member crates' surface.
pub use structgen_core::{
    ConfigError, Conversation, Message, ModelConfig, ModelConfigBuilder, Role,
};
pub use structgen_models::{
    BoxedModel, CompletionModel, FunctionModel, MockModel, ModelError,
};
pub use structgen_output::{
    decode, decode_with_schema, extract_payload, DecodeError, FieldSpec, FieldType, Schema,
    SchemaBuilder, Structured,
};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        generate_all, BatchOutcome, CompletionModel, Conversation, GenerateError, Generator,
        Message, ModelConfig, ModelError, Role, Schema, Structured,
    };
}
