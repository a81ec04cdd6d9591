//! Batch generation across independent models.
//!
//! Runs the same structured prompt against several generators and collects
//! each outcome separately. Calls are isolated: one model's transport
//! failure or exhausted retry budget never aborts its siblings.

use futures::future::join_all;
use tracing::warn;

use structgen_models::CompletionModel;
use structgen_output::Structured;

use crate::error::GenerateError;
use crate::generator::Generator;

/// The result of one model's generation within a batch.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    /// The model identifier the outcome belongs to.
    pub model: String,
    /// That model's own success or failure.
    pub result: Result<T, GenerateError>,
}

impl<T> BatchOutcome<T> {
    /// Whether this model produced a value.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run the same structured prompt against every generator concurrently.
///
/// Outcomes are returned in generator order, one per model, failures
/// included.
pub async fn generate_all<T, M>(
    generators: &[Generator<M>],
    user_prompt: &str,
) -> Vec<BatchOutcome<T>>
where
    T: Structured,
    M: CompletionModel,
{
    let futures = generators.iter().map(|generator| async move {
        let result = generator.generate::<T>(user_prompt).await;
        if let Err(ref error) = result {
            warn!(
                model = generator.model().name(),
                error = %error,
                "batch generation failed for model"
            );
        }
        BatchOutcome {
            model: generator.model().name().to_string(),
            result,
        }
    });

    join_all(futures).await
}
