use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use log::info;

use crate::api::http::with_timeout;
use crate::config;
use crate::error::SiteError;
use crate::lead_form::{FormRelay, LeadSubmission, RelayResponse};

/// Posts leads to the Web3Forms relay, which forwards them by email.
pub struct Web3FormsRelay {
    endpoint: String,
    timeout_ms: u32,
}

impl Web3FormsRelay {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            endpoint: config::RELAY_ENDPOINT.to_string(),
            timeout_ms,
        }
    }

    async fn post(&self, submission: &LeadSubmission) -> Result<RelayResponse, SiteError> {
        info!("Submitting lead for {}", submission.service.label());
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(submission.form_body())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        parse_relay_response(status, &body)
    }
}

impl FormRelay for Web3FormsRelay {
    fn submit<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LocalBoxFuture<'a, Result<RelayResponse, SiteError>> {
        with_timeout(self.timeout_ms, self.post(submission)).boxed_local()
    }
}

/// The relay answers with `{success, message}` even on 4xx, so the body wins over the status.
pub fn parse_relay_response(status: u16, body: &str) -> Result<RelayResponse, SiteError> {
    match serde_json::from_str::<RelayResponse>(body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..300).contains(&status) => Err(SiteError::Provider(format!(
            "The contact service responded with status {}",
            status
        ))),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_and_failure_bodies() {
        assert_eq!(
            parse_relay_response(200, r#"{"success":true,"message":"Email sent"}"#),
            Ok(RelayResponse {
                success: true,
                message: Some("Email sent".into())
            })
        );
        let rejected = parse_relay_response(400, r#"{"success":false,"message":"bad"}"#);
        assert_eq!(rejected.map(|r| r.message), Ok(Some("bad".into())));
    }

    #[test]
    fn message_is_optional() {
        let parsed = parse_relay_response(200, r#"{"success":true}"#);
        assert_eq!(parsed.map(|r| r.message), Ok(None));
    }

    #[test]
    fn non_json_error_pages_become_provider_errors() {
        let err = parse_relay_response(502, "<html>Bad gateway</html>");
        assert!(matches!(err, Err(SiteError::Provider(m)) if m.contains("502")));
        let err = parse_relay_response(200, "ok");
        assert!(matches!(err, Err(SiteError::MalformedResponse(_))));
    }
}
