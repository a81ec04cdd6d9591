//! The retry orchestrator.
//!
//! [`Generator`] drives the request/extract/validate loop against a
//! [`CompletionModel`]: compose the prompt, ask for a completion, extract
//! the candidate JSON, decode it against the schema, and on failure append
//! the model's literal reply plus an error feedback message before trying
//! again, up to the retry budget.
//!
//! Each attempt produces a new conversation snapshot by appending two
//! messages; history is never mutated or truncated. Attempts are strictly
//! sequential because each prompt depends on the previous failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use structgen_core::{Conversation, Message, ModelConfig};
use structgen_models::CompletionModel;
use structgen_output::{decode_with_schema, extract_payload, Schema, Structured};

use crate::error::GenerateError;
use crate::prompt;

/// Default retry budget: completion attempts per generation call.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Drives structured generation against a single completion model.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use structgen::{Generator, ModelConfig, Schema, Structured};
/// use structgen_models::MockModel;
///
/// #[derive(Deserialize)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Structured for Person {
///     fn schema() -> Schema {
///         Schema::builder()
///             .string("name", "Full name", true)
///             .integer("age", "Age in years", true)
///             .build()
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let model = MockModel::new("test")
///     .with_text_response(r#"{"name": "Marie Curie", "age": 66}"#);
/// let generator = Generator::new(model, ModelConfig::new("test/model"));
///
/// let person: Person = generator.generate("Tell me about Marie Curie").await.unwrap();
/// assert_eq!(person.name, "Marie Curie");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Generator<M> {
    model: M,
    config: ModelConfig,
    max_retries: u32,
}

impl<M: CompletionModel> Generator<M> {
    /// Create a generator with the default retry budget.
    pub fn new(model: M, config: ModelConfig) -> Self {
        Self {
            model,
            config,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the retry budget (completion attempts per call, at least 1).
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// The underlying model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The inference configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Generate a typed value using the type's own schema.
    pub async fn generate<T: Structured>(&self, user_prompt: &str) -> Result<T, GenerateError> {
        self.generate_with_schema(&T::schema(), user_prompt).await
    }

    /// Generate a list of typed values.
    ///
    /// Wraps the item schema in a synthetic `{"items": [...]}` object,
    /// delegates to the same retry loop, and unwraps the `items` field.
    pub async fn generate_list<T: Structured>(
        &self,
        user_prompt: &str,
    ) -> Result<Vec<T>, GenerateError> {
        let wrapper_schema = T::schema().into_list_wrapper();
        let wrapper: ItemList<T> = self
            .generate_with_schema(&wrapper_schema, user_prompt)
            .await?;
        Ok(wrapper.items)
    }

    /// Generate a typed value against an explicit schema.
    ///
    /// This is the state machine proper. Attempt `n`:
    ///
    /// 1. send the current conversation; a [`ModelError`] aborts the call
    ///    immediately (transport failures are not retried);
    /// 2. extract and decode the raw reply;
    /// 3. success returns the value, short-circuiting remaining attempts;
    /// 4. failure with budget left appends the assistant's literal raw
    ///    reply and a feedback message, then loops;
    /// 5. failure on the last attempt returns
    ///    [`GenerateError::Exhausted`] with the final error and raw output.
    ///
    /// [`ModelError`]: structgen_models::ModelError
    pub async fn generate_with_schema<T: DeserializeOwned>(
        &self,
        schema: &Schema,
        user_prompt: &str,
    ) -> Result<T, GenerateError> {
        // Rendered once per call; the schema does not change across retries.
        let mut conversation =
            prompt::compose(self.config.system_prompt.as_deref(), schema, user_prompt);
        let mut attempt: u32 = 0;

        loop {
            debug!(
                model = self.model.name(),
                attempt,
                max_retries = self.max_retries,
                "requesting completion"
            );

            let raw = self
                .model
                .complete(conversation.messages(), &self.config)
                .await?;

            let candidate = extract_payload(&raw);
            match decode_with_schema::<T>(&candidate, schema) {
                Ok(value) => {
                    debug!(model = self.model.name(), attempt, "structured output validated");
                    return Ok(value);
                }
                Err(error) => {
                    attempt += 1;
                    if attempt >= self.max_retries {
                        warn!(
                            model = self.model.name(),
                            attempts = attempt,
                            error = %error,
                            "retry budget exhausted"
                        );
                        return Err(GenerateError::Exhausted {
                            attempts: attempt,
                            last_error: error,
                            last_response: raw,
                        });
                    }

                    debug!(
                        model = self.model.name(),
                        attempt,
                        error = %error,
                        "invalid output, feeding error back"
                    );
                    // Feedback quotes the literal raw reply, not the
                    // extracted text, so the model sees its own output.
                    conversation = conversation
                        .with_message(Message::assistant(raw))
                        .with_message(Message::user(prompt::feedback_message(&error)));
                }
            }
        }
    }

    /// Plain text generation: no schema instruction, no retry loop.
    pub async fn generate_text(&self, user_prompt: &str) -> Result<String, GenerateError> {
        let mut conversation = Conversation::new();
        if let Some(system) = &self.config.system_prompt {
            conversation.push(Message::system(system));
        }
        conversation.push(Message::user(user_prompt));

        let reply = self
            .model
            .complete(conversation.messages(), &self.config)
            .await?;
        Ok(reply)
    }
}

/// Synthetic wrapper for list generation.
#[derive(Debug, Deserialize)]
struct ItemList<T> {
    items: Vec<T>,
}
