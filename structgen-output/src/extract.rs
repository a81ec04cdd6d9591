//! Payload extraction from raw model replies.
//!
//! Models frequently wrap JSON in markdown code fences despite being told
//! not to. [`extract_payload`] strips that incidental formatting and nothing
//! more; whether the remainder is valid JSON is the decoder's problem.

/// Strip surrounding whitespace and a markdown code fence, if present.
///
/// If the trimmed text starts with a triple-backtick fence, the first line
/// (fence plus optional language tag) is dropped, and the last line is
/// dropped too when it is a closing fence. Anything else passes through
/// unchanged.
///
/// Deliberately lenient: the fence is stripped without checking that it
/// wraps JSON, matching how models typically fence a whole reply. Always
/// returns a string; never fails.
///
/// # Example
///
/// ```rust
/// use structgen_output::extract_payload;
///
/// assert_eq!(extract_payload(" ```json\n{\"a\":1}\n``` "), "{\"a\":1}");
/// assert_eq!(extract_payload("{\"a\":1}"), "{\"a\":1}");
/// ```
#[must_use]
pub fn extract_payload(text: &str) -> String {
    let text = text.trim();

    if !text.starts_with("```") {
        return text.to_string();
    }

    let mut lines: Vec<&str> = text.lines().collect();
    // Drop the opening fence line ("```" or "```json").
    lines.remove(0);
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::bare_json(r#"{"a":1}"#, r#"{"a":1}"#)]
    #[case::padded(" \n {\"a\":1} \n ", r#"{"a":1}"#)]
    #[case::json_fence(" ```json\n{\"a\":1}\n``` ", r#"{"a":1}"#)]
    #[case::plain_fence("```\n{\"a\":1}\n```", r#"{"a":1}"#)]
    #[case::unclosed_fence("```json\n{\"a\":1}", r#"{"a":1}"#)]
    #[case::prose_untouched("no json here", "no json here")]
    fn test_extract(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_payload(input), expected);
    }

    #[test]
    fn test_multiline_body_preserved() {
        let input = "```json\n{\n  \"a\": 1,\n  \"b\": 2\n}\n```";
        assert_eq!(extract_payload(input), "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_idempotent_on_clean_json() {
        let clean = r#"{"name": "A", "priority": "high"}"#;
        let once = extract_payload(clean);
        assert_eq!(extract_payload(&once), once);
    }

    #[test]
    fn test_idempotent_after_fence_strip() {
        let fenced = "```json\n{\"a\": 1}\n```";
        let once = extract_payload(fenced);
        assert_eq!(extract_payload(&once), once);
    }

    #[test]
    fn test_lenient_strip_even_for_non_json_fence() {
        // The heuristic does not sniff fence contents.
        let input = "```python\nprint('hi')\n```";
        assert_eq!(extract_payload(input), "print('hi')");
    }
}
