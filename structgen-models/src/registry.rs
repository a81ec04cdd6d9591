//! Model identifier registry.
//!
//! Maps short aliases to full provider model identifiers and tracks the set
//! of known free-tier models. Alias resolution is pure glue: it runs before
//! a [`ModelConfig`](structgen_core::ModelConfig) is built, so the
//! generation loop only ever sees a concrete id.

/// Known free-tier model identifiers.
pub const KNOWN_MODELS: &[&str] = &[
    "deepseek/deepseek-chat-v3.1:free",
    "mistralai/mistral-small-3.2-24b-instruct:free",
    "moonshotai/kimi-dev-72b:free",
    "meta-llama/llama-3.3-8b-instruct:free",
    "nvidia/nemotron-nano-9b-v2:free",
    "openai/gpt-oss-20b:free",
    "qwen/qwen3-14b:free",
    "qwen/qwen3-30b-a3b:free",
    "qwen/qwen3-235b-a22b:free",
    "tencent/hunyuan-a13b-instruct:free",
    "x-ai/grok-4-fast:free",
    "z-ai/glm-4.5-air:free",
];

/// Short aliases for the known models.
const ALIASES: &[(&str, &str)] = &[
    ("deepseek", "deepseek/deepseek-chat-v3.1:free"),
    ("mistral", "mistralai/mistral-small-3.2-24b-instruct:free"),
    ("kimi", "moonshotai/kimi-dev-72b:free"),
    ("llama", "meta-llama/llama-3.3-8b-instruct:free"),
    ("nemotron", "nvidia/nemotron-nano-9b-v2:free"),
    ("gpt", "openai/gpt-oss-20b:free"),
    ("qwen14", "qwen/qwen3-14b:free"),
    ("qwen30", "qwen/qwen3-30b-a3b:free"),
    ("qwen235", "qwen/qwen3-235b-a22b:free"),
    ("hunyuan", "tencent/hunyuan-a13b-instruct:free"),
    ("grok", "x-ai/grok-4-fast:free"),
    ("glm", "z-ai/glm-4.5-air:free"),
];

/// Resolve an alias or full model name to a full model identifier.
///
/// Unknown input is passed through unchanged, so callers can address models
/// outside the predefined list.
#[must_use]
pub fn resolve(model_input: &str) -> String {
    let lower = model_input.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or_else(|| model_input.to_string(), |(_, full)| (*full).to_string())
}

/// Whether the identifier is in the known-model list.
#[must_use]
pub fn is_known(model: &str) -> bool {
    KNOWN_MODELS.contains(&model)
}

/// Deterministic default model identifier.
#[must_use]
pub fn default_model() -> &'static str {
    KNOWN_MODELS[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve("deepseek"), "deepseek/deepseek-chat-v3.1:free");
        assert_eq!(resolve("GLM"), "z-ai/glm-4.5-air:free");
    }

    #[test]
    fn test_resolve_passes_through_full_names() {
        assert_eq!(resolve("x-ai/grok-4-fast:free"), "x-ai/grok-4-fast:free");
        assert_eq!(resolve("vendor/custom-model"), "vendor/custom-model");
    }

    #[test]
    fn test_every_alias_resolves_to_known_model() {
        for (alias, _) in ALIASES {
            assert!(is_known(&resolve(alias)), "alias {alias} resolves unknown");
        }
    }

    #[test]
    fn test_default_model_is_known() {
        assert!(is_known(default_model()));
    }
}
