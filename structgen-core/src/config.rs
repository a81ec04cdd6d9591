//! Inference configuration.
//!
//! [`ModelConfig`] is an immutable snapshot of the parameters sent alongside
//! every completion request. It is validated once at construction via
//! [`ModelConfigBuilder::build`]; a config that exists is a config whose
//! parameters are in range.

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::errors::ConfigError;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default nucleus-sampling top-p.
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Immutable inference parameters for a completion model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Concrete model identifier. Alias resolution happens before
    /// construction; by the time a config exists the id is fixed.
    pub model: String,

    /// Sampling temperature, within `[0, 2]`.
    pub temperature: f64,

    /// Nucleus-sampling top-p, within `[0, 1]`.
    pub top_p: f64,

    /// Frequency penalty, within `[-2, 2]`.
    pub frequency_penalty: f64,

    /// Presence penalty, within `[-2, 2]`.
    pub presence_penalty: f64,

    /// Maximum tokens to generate, at least 1 when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,

    /// Caller system prompt, prepended to the schema instruction block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Opaque provider-specific parameters, passed through unexamined.
    #[serde(skip_serializing_if = "JsonMap::is_empty", default)]
    pub extra: JsonMap<String, JsonValue>,
}

impl ModelConfig {
    /// Start building a config for the given model id.
    #[must_use]
    pub fn builder(model: impl Into<String>) -> ModelConfigBuilder {
        ModelConfigBuilder::new(model)
    }

    /// Build a config with default parameters for the given model id.
    ///
    /// Defaults are always in range, so no validation is needed here.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            max_tokens: None,
            system_prompt: None,
            extra: JsonMap::new(),
        }
    }
}

/// Builder for [`ModelConfig`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ModelConfigBuilder {
    model: String,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
    max_tokens: Option<u64>,
    system_prompt: Option<String>,
    extra: JsonMap<String, JsonValue>,
}

impl ModelConfigBuilder {
    /// Create a builder with default parameters.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            max_tokens: None,
            system_prompt: None,
            extra: JsonMap::new(),
        }
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set top-p.
    #[must_use]
    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    /// Set the frequency penalty.
    #[must_use]
    pub fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = penalty;
        self
    }

    /// Set the presence penalty.
    #[must_use]
    pub fn presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = penalty;
        self
    }

    /// Set the maximum output tokens.
    #[must_use]
    pub fn max_tokens(mut self, tokens: u64) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set the caller system prompt.
    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Add an opaque provider-specific parameter.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Validate the parameters and produce the config.
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::out_of_range(
                "temperature",
                self.temperature,
                0.0,
                2.0,
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ConfigError::out_of_range("top_p", self.top_p, 0.0, 1.0));
        }
        if !(-2.0..=2.0).contains(&self.frequency_penalty) {
            return Err(ConfigError::out_of_range(
                "frequency_penalty",
                self.frequency_penalty,
                -2.0,
                2.0,
            ));
        }
        if !(-2.0..=2.0).contains(&self.presence_penalty) {
            return Err(ConfigError::out_of_range(
                "presence_penalty",
                self.presence_penalty,
                -2.0,
                2.0,
            ));
        }
        if self.max_tokens == Some(0) {
            return Err(ConfigError::invalid("max_tokens must be positive"));
        }
        if self.model.is_empty() {
            return Err(ConfigError::invalid("model identifier must not be empty"));
        }

        Ok(ModelConfig {
            model: self.model,
            temperature: self.temperature,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
            max_tokens: self.max_tokens,
            system_prompt: self.system_prompt,
            extra: self.extra,
        })
    }
}
