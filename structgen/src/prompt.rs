//! Prompt composition.
//!
//! Builds the message sequence that asks a free-text model for JSON: the
//! caller's system prompt (if any) followed by the schema instruction
//! block, then the verbatim user prompt. Composition is pure; the schema
//! instruction is rendered once per generation call, not per retry.

use structgen_core::{Conversation, Message};
use structgen_output::{DecodeError, Schema};

/// Render the instruction block embedding the serialized schema.
#[must_use]
pub fn schema_instruction(schema: &Schema) -> String {
    let json = schema.to_json_schema();
    let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string());
    format!(
        "You must respond with valid JSON that matches this exact schema:\n\
         {rendered}\n\n\
         Respond ONLY with the JSON object, no additional text or markdown formatting."
    )
}

/// Compose the initial conversation for a structured-generation call.
#[must_use]
pub fn compose(system_prompt: Option<&str>, schema: &Schema, user_prompt: &str) -> Conversation {
    let instruction = schema_instruction(schema);
    let system = match system_prompt {
        Some(base) if !base.trim().is_empty() => format!("{base}\n\n{instruction}"),
        _ => instruction,
    };

    Conversation::from_messages(vec![Message::system(system), Message::user(user_prompt)])
}

/// The feedback sent after an invalid reply, asking the model to correct
/// itself.
#[must_use]
pub fn feedback_message(error: &DecodeError) -> String {
    format!(
        "Your previous response was invalid. Error: {error}\n\
         Please provide a valid JSON response matching the schema exactly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use structgen_core::Role;

    fn task_schema() -> Schema {
        Schema::builder()
            .string("name", "Task name", true)
            .string("priority", "low, medium or high", true)
            .build()
    }

    #[test]
    fn test_compose_without_system_prompt() {
        let conv = compose(None, &task_schema(), "Create a task");
        let messages = conv.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.starts_with("You must respond"));
        assert!(messages[0].content.contains("\"priority\""));
        assert!(messages[0].content.contains("Respond ONLY with the JSON object"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Create a task");
    }

    #[test]
    fn test_compose_prepends_caller_system_prompt() {
        let conv = compose(Some("You are a project manager."), &task_schema(), "go");
        let system = &conv.messages()[0].content;
        assert!(system.starts_with("You are a project manager.\n\n"));
        assert!(system.contains("exact schema"));
    }

    #[test]
    fn test_compose_ignores_blank_system_prompt() {
        let conv = compose(Some("   "), &task_schema(), "go");
        assert!(conv.messages()[0].content.starts_with("You must respond"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(Some("sys"), &task_schema(), "go");
        let b = compose(Some("sys"), &task_schema(), "go");
        assert_eq!(a, b);
    }

    #[test]
    fn test_feedback_message_carries_error_and_directive() {
        let error = DecodeError::missing_field("priority");
        let feedback = feedback_message(&error);
        assert!(feedback.contains("previous response was invalid"));
        assert!(feedback.contains("priority"));
        assert!(feedback.contains("matching the schema exactly"));
    }
}
