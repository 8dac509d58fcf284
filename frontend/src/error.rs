use thiserror::Error;

/// Everything that can go wrong between a click and a rendered result.
///
/// None of these ever escape a component: they are turned into the error
/// state of the lead form or the growth engine and shown inline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Provider(String),
    #[error("The AI engine returned an empty response. Please try again.")]
    EmptyResponse,
    #[error("Could not read the response: {0}")]
    MalformedResponse(String),
    #[error("The request timed out after {0} ms")]
    Timeout(u32),
}

impl SiteError {
    pub fn configuration(variable: &str, what: &str) -> Self {
        SiteError::Configuration(format!(
            "{} is not configured. Set {} when building the site.",
            what, variable
        ))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, SiteError::Configuration(_))
    }

    /// Text for the inline error panels.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Network(_) | SiteError::Timeout(_) => {
                "We couldn't reach the server. Check your connection and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for SiteError {
    fn from(e: gloo_net::Error) -> Self {
        SiteError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        SiteError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_get_a_generic_message() {
        let err = SiteError::Network("TypeError: Failed to fetch".into());
        assert!(!err.user_message().contains("TypeError"));
        assert_eq!(err.user_message(), SiteError::Timeout(100).user_message());
    }

    #[test]
    fn configuration_message_names_the_variable() {
        let err = SiteError::configuration("NEXUS_GEMINI_API_KEY", "The AI engine");
        assert!(err.is_configuration());
        assert!(err.user_message().contains("NEXUS_GEMINI_API_KEY"));
    }

    #[test]
    fn provider_message_is_shown_verbatim() {
        assert_eq!(SiteError::Provider("bad".into()).user_message(), "bad");
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let err: SiteError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, SiteError::MalformedResponse(_)));
    }
}
