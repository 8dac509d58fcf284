pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const FORM_KEY_VAR: &str = "NEXUS_WEB3FORMS_ACCESS_KEY";
pub const LLM_KEY_VAR: &str = "NEXUS_GEMINI_API_KEY";

/// Value shipped in the repo instead of a real relay key.
pub const PLACEHOLDER_KEY: &str = "YOUR_ACCESS_KEY_HERE";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 20_000;

#[cfg(debug_assertions)]
pub fn is_debug_build() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn is_debug_build() -> bool {
    false
}

pub fn gemini_endpoint(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_BASE_URL, model)
}

/// Returns the key only if it looks like a real credential.
pub fn usable_key(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub form_access_key: Option<String>,
    pub llm_api_key: Option<String>,
    pub request_timeout_ms: u32,
}

impl Config {
    /// Secrets are baked in at build time, there is no process env in the browser.
    pub fn from_build_env() -> Self {
        Self {
            form_access_key: option_env!("NEXUS_WEB3FORMS_ACCESS_KEY").map(str::to_string),
            llm_api_key: option_env!("NEXUS_GEMINI_API_KEY").map(str::to_string),
            request_timeout_ms: option_env!("NEXUS_REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    pub fn form_key(&self) -> Option<&str> {
        usable_key(self.form_access_key.as_deref())
    }

    pub fn llm_key(&self) -> Option<&str> {
        usable_key(self.llm_api_key.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_keys_are_not_usable() {
        assert_eq!(usable_key(None), None);
        assert_eq!(usable_key(Some("")), None);
        assert_eq!(usable_key(Some("   ")), None);
        assert_eq!(usable_key(Some(PLACEHOLDER_KEY)), None);
        assert_eq!(usable_key(Some(" abc-123 ")), Some("abc-123"));
    }

    #[test]
    fn config_accessors_filter_keys() {
        let config = Config {
            form_access_key: Some(PLACEHOLDER_KEY.into()),
            llm_api_key: Some("live".into()),
            request_timeout_ms: 10,
        };
        assert_eq!(config.form_key(), None);
        assert_eq!(config.llm_key(), Some("live"));
    }

    #[test]
    fn endpoint_includes_model() {
        assert_eq!(
            gemini_endpoint("m"),
            "https://generativelanguage.googleapis.com/v1beta/models/m:generateContent"
        );
    }
}
