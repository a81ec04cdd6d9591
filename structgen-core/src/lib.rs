//! # structgen-core
//!
//! Core types for structgen: chat messages, conversations, inference
//! configuration, and the configuration error type.
//!
//! Everything here is plain data. The retry loop, prompt composition, and
//! the completion-model seam live in the sibling crates.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod message;

pub use config::{ModelConfig, ModelConfigBuilder, DEFAULT_TEMPERATURE, DEFAULT_TOP_P};
pub use errors::ConfigError;
pub use message::{Conversation, Message, Role};
