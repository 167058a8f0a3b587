/// Image-generation inference endpoint (multipart POST)
pub const INFERENCE_ENDPOINT: &str = "https://lightnote-ai--img-model-inference.modal.run";

/// Chat-completion endpoint used by the prompt-assist button
pub const ASSIST_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model requested from the completion service
pub const ASSIST_MODEL: &str = "gpt-4o-mini";

/// Credential for the completion service, baked in at build time.
/// Without it the assist button stays disabled.
pub fn assist_credential() -> Option<&'static str> {
    usable_credential(option_env!("SKETCHPAD_ASSIST_KEY"))
}

fn usable_credential(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credential_disables_assist() {
        assert_eq!(usable_credential(None), None);
        assert_eq!(usable_credential(Some("")), None);
        assert_eq!(usable_credential(Some("   ")), None);
    }

    #[test]
    fn test_credential_is_trimmed() {
        assert_eq!(usable_credential(Some(" sk-test ")), Some("sk-test"));
    }
}
