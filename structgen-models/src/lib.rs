//! # structgen-models
//!
//! The completion-model seam for structgen: the [`CompletionModel`] trait,
//! the transport error taxonomy, test models, and the model alias registry.
//!
//! Real network providers implement [`CompletionModel`] outside this
//! workspace; the generation loop only depends on the trait.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod mock;
pub mod model;
pub mod registry;

pub use error::{ModelError, ModelResult};
pub use mock::{FunctionModel, MockModel};
pub use model::{BoxedModel, CompletionModel};
pub use registry::{default_model, is_known, resolve, KNOWN_MODELS};
