use serde_json::Value;

pub const DEFAULT_PERSONA: &str = "You are a helpful AI assistant.";
pub const MAX_SYSTEM_PROMPT_CHARS: usize = 30_000;

const DATA_HEADING: &str = "\n\n## Portfolio Data (JSON):\n";
const DATA_FOOTER: &str = "\n\nUse the above portfolio data to answer user questions. \
Always extract information from the provided JSON structure and never fabricate information \
not present in the data.";
const TRUNCATION_MARKER: &str = "... (truncated)";

/// Persona, pretty-printed portfolio data and the grounding footer.
///
/// The result never exceeds [`MAX_SYSTEM_PROMPT_CHARS`] characters unless the
/// persona alone does. Oversized data is cut on a char boundary and marked.
pub fn build_system_prompt(persona: &str, portfolio: &Value) -> String {
    let data = serde_json::to_string_pretty(portfolio).unwrap_or_default();
    let fixed = persona.chars().count() + DATA_HEADING.chars().count() + DATA_FOOTER.chars().count();
    let available = MAX_SYSTEM_PROMPT_CHARS.saturating_sub(fixed);

    let data = if data.chars().count() <= available {
        data
    } else {
        let keep = available.saturating_sub(TRUNCATION_MARKER.len());
        let mut cut: String = data.chars().take(keep).collect();
        cut.push_str(TRUNCATION_MARKER);
        cut
    };

    format!("{persona}{DATA_HEADING}{data}{DATA_FOOTER}")
}

#[cfg(test)]
mod system_prompt_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_embed_persona_data_and_footer_in_order() {
        let prompt = build_system_prompt("Be brief.", &json!({"sections": []}));

        assert!(prompt.starts_with("Be brief.\n\n## Portfolio Data (JSON):\n{"));
        assert!(prompt.contains("\"sections\": []"));
        assert!(prompt.ends_with("never fabricate information not present in the data."));
        assert!(!prompt.contains(TRUNCATION_MARKER));
    }

    #[rstest]
    fn it_should_truncate_oversized_data_within_the_cap() {
        let huge = json!({ "blob": "é".repeat(MAX_SYSTEM_PROMPT_CHARS) });

        let prompt = build_system_prompt(DEFAULT_PERSONA, &huge);

        assert_eq!(prompt.chars().count(), MAX_SYSTEM_PROMPT_CHARS);
        assert!(prompt.contains(&format!("{TRUNCATION_MARKER}{DATA_FOOTER}")));
    }
}
