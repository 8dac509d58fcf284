//! Contact form state and the payload sent to the form relay.

use futures::future::LocalBoxFuture;
use log::{info, warn};
use serde::Deserialize;

use crate::config::FORM_KEY_VAR;
use crate::error::SiteError;

pub const SENDER_LABEL: &str = "Nexus Growth Website";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceOption {
    WebsiteBuilding,
    GoogleRanking,
    GoogleAds,
    SocialAds,
    BrandMarketing,
    LeadGeneration,
    GeneralInquiry,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 7] = [
        ServiceOption::WebsiteBuilding,
        ServiceOption::GoogleRanking,
        ServiceOption::GoogleAds,
        ServiceOption::SocialAds,
        ServiceOption::BrandMarketing,
        ServiceOption::LeadGeneration,
        ServiceOption::GeneralInquiry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::WebsiteBuilding => "Custom Website Building",
            ServiceOption::GoogleRanking => "Google Ranking (SEO)",
            ServiceOption::GoogleAds => "Google Ads (PPC)",
            ServiceOption::SocialAds => "Facebook & Social Ads",
            ServiceOption::BrandMarketing => "Full Brand Marketing",
            ServiceOption::LeadGeneration => "Sales & Lead Generation",
            ServiceOption::GeneralInquiry => "Other / General Inquiry",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Raw values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
    /// Hidden honeypot. Forwarded untouched; the relay decides what is spam.
    pub botcheck: String,
}

impl LeadFields {
    fn validate(&self) -> Result<ServiceOption, SiteError> {
        let missing = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty());
        if let Some((field, _)) = missing {
            return Err(SiteError::Validation(format!("Please fill in your {}.", field)));
        }
        if !self.email.contains('@') {
            return Err(SiteError::Validation("Please enter a valid email address.".to_string()));
        }
        ServiceOption::from_label(&self.service)
            .ok_or_else(|| SiteError::Validation("Please select a service.".to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub service: ServiceOption,
    pub message: String,
    pub botcheck: String,
    pub access_key: String,
}

impl LeadSubmission {
    pub fn subject(&self) -> String {
        format!("New lead: {}", self.service.label())
    }

    /// `application/x-www-form-urlencoded` body for the relay.
    pub fn form_body(&self) -> String {
        let subject = self.subject();
        let pairs = [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("service", self.service.label()),
            ("message", self.message.as_str()),
            ("botcheck", self.botcheck.as_str()),
            ("access_key", self.access_key.as_str()),
            ("subject", subject.as_str()),
            ("from_name", SENDER_LABEL),
        ];
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

pub trait FormRelay {
    fn submit<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LocalBoxFuture<'a, Result<RelayResponse, SiteError>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LeadPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormState {
    pub phase: LeadPhase,
    pub configuration_error: bool,
}

impl LeadFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == LeadPhase::Submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LeadPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Moves to `Submitting` and returns the payload, or records why it can't.
    ///
    /// Does nothing while a submission is already in flight.
    pub fn prepare(&mut self, fields: &LeadFields, access_key: Option<&str>) -> Option<LeadSubmission> {
        if self.is_submitting() {
            return None;
        }
        let service = match fields.validate() {
            Ok(service) => service,
            Err(e) => {
                self.fail(e);
                return None;
            }
        };
        let Some(access_key) = access_key else {
            warn!("Lead form submitted without a relay access key");
            self.fail(SiteError::configuration(FORM_KEY_VAR, "The contact form"));
            return None;
        };

        self.phase = LeadPhase::Submitting;
        self.configuration_error = false;
        Some(LeadSubmission {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            service,
            message: fields.message.trim().to_string(),
            botcheck: fields.botcheck.clone(),
            access_key: access_key.to_string(),
        })
    }

    pub fn resolve(&mut self, outcome: Result<RelayResponse, SiteError>) {
        match outcome {
            Ok(RelayResponse { success: true, .. }) => {
                info!("Lead submitted");
                self.phase = LeadPhase::Submitted;
            }
            Ok(RelayResponse { success: false, message }) => {
                warn!("Relay rejected lead: {:?}", message);
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                self.phase = LeadPhase::Error(message);
            }
            Err(e) => self.fail(e),
        }
    }

    /// "Send another request" after a success.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fail(&mut self, e: SiteError) {
        warn!("Lead form error: {}", e);
        self.configuration_error = e.is_configuration();
        self.phase = LeadPhase::Error(e.user_message());
    }
}

/// Sends an already prepared submission and returns `state` with the outcome applied.
pub async fn submit_lead<R: FormRelay + ?Sized>(
    relay: &R,
    submission: &LeadSubmission,
    mut state: LeadFormState,
) -> LeadFormState {
    let outcome = relay.submit(submission).await;
    state.resolve(outcome);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    struct FakeRelay {
        response: Result<RelayResponse, SiteError>,
        calls: Cell<usize>,
        last_body: RefCell<Option<String>>,
    }

    impl FakeRelay {
        fn new(response: Result<RelayResponse, SiteError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }
    }

    impl FormRelay for FakeRelay {
        fn submit<'a>(
            &'a self,
            submission: &'a LeadSubmission,
        ) -> LocalBoxFuture<'a, Result<RelayResponse, SiteError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() = Some(submission.form_body());
            futures::future::ready(self.response.clone()).boxed_local()
        }
    }

    /// Same steps as the contact form: prepare, then send if there is anything to send.
    fn send(mut state: LeadFormState, relay: &FakeRelay, fields: &LeadFields, key: Option<&str>) -> LeadFormState {
        match state.prepare(fields, key) {
            Some(submission) => {
                assert!(state.is_submitting());
                block_on(submit_lead(relay, &submission, state))
            }
            None => state,
        }
    }

    fn fields() -> LeadFields {
        LeadFields {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            service: "Google Ads (PPC)".into(),
            message: "Scale our campaigns & more".into(),
            botcheck: String::new(),
        }
    }

    fn ok(success: bool, message: Option<&str>) -> Result<RelayResponse, SiteError> {
        Ok(RelayResponse {
            success,
            message: message.map(str::to_string),
        })
    }

    #[test]
    fn success_marks_submitted() {
        let relay = FakeRelay::new(ok(true, None));
        let mut state = LeadFormState::default();
        state = send(state, &relay, &fields(), Some("key"));
        assert_eq!(state.phase, LeadPhase::Submitted);
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn relay_rejection_shows_its_message() {
        let relay = FakeRelay::new(ok(false, Some("bad")));
        let mut state = LeadFormState::default();
        state = send(state, &relay, &fields(), Some("key"));
        assert_eq!(state.phase, LeadPhase::Error("bad".into()));
        assert!(!state.configuration_error);
    }

    #[test]
    fn relay_rejection_without_message_uses_fallback() {
        let relay = FakeRelay::new(ok(false, None));
        let mut state = LeadFormState::default();
        state = send(state, &relay, &fields(), Some("key"));
        assert_eq!(state.error_message(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn network_error_becomes_error_phase() {
        let relay = FakeRelay::new(Err(SiteError::Network("offline".into())));
        let mut state = LeadFormState::default();
        state = send(state, &relay, &fields(), Some("key"));
        assert!(state.error_message().is_some());
    }

    #[test]
    fn missing_key_fails_before_the_network() {
        let relay = FakeRelay::new(ok(true, None));
        let mut state = LeadFormState::default();
        state = send(state, &relay, &fields(), None);
        assert!(state.configuration_error);
        assert!(state.error_message().unwrap_or_default().contains(FORM_KEY_VAR));
        assert_eq!(relay.calls.get(), 0);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let relay = FakeRelay::new(ok(true, None));
        let mut state = LeadFormState::default();
        let mut incomplete = fields();
        incomplete.message = "   ".into();
        state = send(state, &relay, &incomplete, Some("key"));
        assert_eq!(state.error_message(), Some("Please fill in your message."));
        assert_eq!(relay.calls.get(), 0);
    }

    #[test]
    fn unknown_service_is_rejected() {
        let mut state = LeadFormState::default();
        let mut bad = fields();
        bad.service = "Crypto Pump".into();
        assert!(state.prepare(&bad, Some("key")).is_none());
        assert_eq!(state.error_message(), Some("Please select a service."));
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut state = LeadFormState::default();
        assert!(state.prepare(&fields(), Some("key")).is_some());
        assert!(state.is_submitting());
        assert!(state.prepare(&fields(), Some("key")).is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn retry_after_error_runs_again() {
        let failing = FakeRelay::new(ok(false, Some("bad")));
        let working = FakeRelay::new(ok(true, None));
        let mut state = LeadFormState::default();
        let input = fields();
        state = send(state, &failing, &input, Some("key"));
        state = send(state, &working, &input, Some("key"));
        assert_eq!(state.phase, LeadPhase::Submitted);
        state.reset();
        assert_eq!(state, LeadFormState::default());
    }

    #[test]
    fn form_body_carries_metadata_and_honeypot() {
        let relay = FakeRelay::new(ok(true, None));
        let mut state = LeadFormState::default();
        let mut input = fields();
        input.botcheck = "i am a bot".into();
        state = send(state, &relay, &input, Some("abc"));

        let body = relay.last_body.borrow().clone().unwrap_or_default();
        assert!(body.starts_with("name=Ada%20Lovelace&email=ada%40example.com"));
        assert!(body.contains("service=Google%20Ads%20%28PPC%29"));
        assert!(body.contains("message=Scale%20our%20campaigns%20%26%20more"));
        assert!(body.contains("botcheck=i%20am%20a%20bot"));
        assert!(body.contains("access_key=abc"));
        assert!(body.contains("subject=New%20lead%3A%20Google%20Ads%20%28PPC%29"));
        assert!(body.ends_with("from_name=Nexus%20Growth%20Website"));
    }

    #[test]
    fn seven_service_options_round_trip_labels() {
        assert_eq!(ServiceOption::ALL.len(), 7);
        for option in ServiceOption::ALL {
            assert_eq!(ServiceOption::from_label(option.label()), Some(option));
        }
    }
}
