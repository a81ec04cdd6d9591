//! The completion model seam.
//!
//! [`CompletionModel`] is the single collaborator the generation loop talks
//! to. It takes an ordered message list plus inference parameters and
//! returns the model's raw reply text. Transport, authentication, and the
//! provider wire format all live behind this trait.

use async_trait::async_trait;
use std::sync::Arc;

use structgen_core::{Message, ModelConfig};

use crate::error::ModelError;

/// A completion model: turns a conversation into raw reply text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// The model identifier, for diagnostics and batch reporting.
    fn name(&self) -> &str;

    /// Request a completion for the given messages.
    ///
    /// The config is the immutable snapshot the caller built; `extra`
    /// parameters are passed through unexamined by the core.
    async fn complete(
        &self,
        messages: &[Message],
        config: &ModelConfig,
    ) -> Result<String, ModelError>;
}

/// Boxed model for dynamic dispatch.
pub type BoxedModel = Arc<dyn CompletionModel>;

#[async_trait]
impl<M: CompletionModel + ?Sized> CompletionModel for Arc<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn complete(
        &self,
        messages: &[Message],
        config: &ModelConfig,
    ) -> Result<String, ModelError> {
        (**self).complete(messages, config).await
    }
}
