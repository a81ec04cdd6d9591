//! Mock and function-based models for testing.
//!
//! - [`MockModel`]: a scripted queue of replies, recording every
//!   conversation it receives.
//! - [`FunctionModel`]: a model driven by a closure, for dynamic behavior.
//!
//! # Examples
//!
//! ```rust
//! use structgen_models::MockModel;
//!
//! let model = MockModel::new("test")
//!     .with_text_response("not json")
//!     .with_text_response(r#"{"name": "A", "priority": "high"}"#);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use structgen_core::{Message, ModelConfig};

use crate::error::ModelError;
use crate::model::CompletionModel;

type ScriptedReply = Result<String, ModelError>;

/// A mock model with a pre-configured queue of replies.
///
/// Replies are returned in order; once the queue is exhausted, further
/// requests fail with an API error. Every received conversation is recorded
/// for assertions.
#[derive(Debug, Clone)]
pub struct MockModel {
    name: String,
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockModel {
    /// Create a new mock model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a raw text reply.
    #[must_use]
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a transport error.
    #[must_use]
    pub fn with_error(self, error: ModelError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// The conversations received so far, in request order.
    pub fn recorded_requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of completion calls made against this mock.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        messages: &[Message],
        _config: &ModelConfig,
    ) -> Result<String, ModelError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::api("mock reply queue exhausted")))
    }
}

/// A model controlled by a closure.
///
/// Useful when the reply should depend on the conversation, e.g. returning
/// valid JSON only after a feedback message has been appended.
pub struct FunctionModel<F> {
    name: String,
    func: F,
}

impl<F> FunctionModel<F>
where
    F: Fn(&[Message], &ModelConfig) -> Result<String, ModelError> + Send + Sync,
{
    /// Create a new function model.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> std::fmt::Debug for FunctionModel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionModel")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl<F> CompletionModel for FunctionModel<F>
where
    F: Fn(&[Message], &ModelConfig) -> Result<String, ModelError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        messages: &[Message],
        config: &ModelConfig,
    ) -> Result<String, ModelError> {
        (self.func)(messages, config)
    }
}
