//! AI growth engine: prompt, provider request body, result parsing and state.

use futures::future::LocalBoxFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::LLM_KEY_VAR;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// One strategic pillar as returned by the model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Strategy {
    pub title: String,
    pub points: Vec<String>,
    pub timeline: String,
    pub priority: String,
}

impl Strategy {
    pub fn priority_level(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

pub fn build_prompt(niche: &str) -> String {
    format!(
        "Generate an elite level digital growth strategy for a business in the niche: \"{}\". \
         Provide professional, deeply technical insights. Output 3 key strategic pillars.",
        niche
    )
}

pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "points": { "type": "ARRAY", "items": { "type": "STRING" } },
                "timeline": { "type": "STRING" },
                "priority": { "type": "STRING" }
            },
            "required": ["title", "points", "timeline", "priority"]
        }
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub niche: String,
    pub prompt: String,
    pub api_key: String,
}

impl GenerationRequest {
    pub fn new(niche: &str, api_key: &str) -> Self {
        Self {
            niche: niche.to_string(),
            prompt: build_prompt(niche),
            api_key: api_key.to_string(),
        }
    }

    /// Body for the `generateContent` REST call.
    pub fn to_provider_body(&self) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": self.prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }
}

/// Parses the text the model produced into strategies.
pub fn parse_strategies(text: &str) -> Result<Vec<Strategy>, SiteError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SiteError::EmptyResponse);
    }
    let strategies: Vec<Strategy> = serde_json::from_str(text)?;
    if strategies.is_empty() {
        return Err(SiteError::EmptyResponse);
    }
    if strategies.len() != 3 {
        warn!("Expected 3 strategies, got {}", strategies.len());
    }
    Ok(strategies)
}

/// Returns the raw text of the model's answer.
pub trait StrategyGenerator {
    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> LocalBoxFuture<'a, Result<String, SiteError>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GrowthPhase {
    #[default]
    Idle,
    Loading,
    Success(Vec<Strategy>),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrowthState {
    pub phase: GrowthPhase,
    pub last_niche: Option<String>,
}

impl GrowthState {
    pub fn is_loading(&self) -> bool {
        self.phase == GrowthPhase::Loading
    }

    pub fn result(&self) -> Option<&[Strategy]> {
        match &self.phase {
            GrowthPhase::Success(strategies) => Some(strategies),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            GrowthPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a generation, clearing any previous result or error.
    ///
    /// An empty niche or a request already in flight leaves the state untouched.
    pub fn prepare(&mut self, niche: &str, api_key: Option<&str>) -> Option<GenerationRequest> {
        if niche.is_empty() || self.is_loading() {
            return None;
        }
        self.last_niche = Some(niche.to_string());
        let Some(api_key) = api_key else {
            warn!("Growth engine used without an API key");
            self.phase = GrowthPhase::Error(SiteError::configuration(LLM_KEY_VAR, "The AI engine").user_message());
            return None;
        };
        info!("Generating strategy for niche {:?}", niche);
        self.phase = GrowthPhase::Loading;
        Some(GenerationRequest::new(niche, api_key))
    }

    /// Same input again, after an error.
    pub fn retry(&mut self, api_key: Option<&str>) -> Option<GenerationRequest> {
        let niche = self.last_niche.clone()?;
        self.prepare(&niche, api_key)
    }

    pub fn resolve(&mut self, outcome: Result<String, SiteError>) {
        match outcome.and_then(|text| parse_strategies(&text)) {
            Ok(strategies) => {
                info!("Received {} strategies", strategies.len());
                self.phase = GrowthPhase::Success(strategies);
            }
            Err(e) => {
                warn!("AI generation failed: {}", e);
                self.phase = GrowthPhase::Error(e.user_message());
            }
        }
    }
}

/// Runs a prepared request and returns `state` with the outcome applied.
pub async fn generate_strategy<G: StrategyGenerator + ?Sized>(
    generator: &G,
    request: &GenerationRequest,
    mut state: GrowthState,
) -> GrowthState {
    let outcome = generator.generate(request).await;
    state.resolve(outcome);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    struct FakeGenerator {
        reply: Result<String, SiteError>,
        calls: Cell<usize>,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(reply: Result<&str, SiteError>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl StrategyGenerator for FakeGenerator {
        fn generate<'a>(&'a self, request: &'a GenerationRequest) -> LocalBoxFuture<'a, Result<String, SiteError>> {
            self.calls.set(self.calls.get() + 1);
            self.prompts.borrow_mut().push(request.prompt.clone());
            futures::future::ready(self.reply.clone()).boxed_local()
        }
    }

    /// Same steps as the growth tool: prepare, then call the generator if a request came out.
    fn run(mut state: GrowthState, generator: &FakeGenerator, niche: &str, key: Option<&str>) -> GrowthState {
        match state.prepare(niche, key) {
            Some(request) => {
                assert!(state.is_loading());
                block_on(generate_strategy(generator, &request, state))
            }
            None => state,
        }
    }

    const THREE: &str = r#"[
        {"title": "Own the SERP", "points": ["Entity SEO", "Local pages"], "timeline": "0-3 months", "priority": "High"},
        {"title": "Paid acquisition", "points": ["CPA bidding"], "timeline": "1-2 months", "priority": "medium"},
        {"title": "Retention loops", "points": ["Email flows", "Referrals"], "timeline": "3-6 months", "priority": "Low"}
    ]"#;

    #[test]
    fn empty_niche_is_a_no_op() {
        let generator = FakeGenerator::replying(Ok(THREE));
        let mut state = GrowthState::default();
        state = run(state, &generator, "", Some("key"));
        assert_eq!(state, GrowthState::default());
        assert_eq!(generator.calls.get(), 0);
    }

    #[test]
    fn missing_key_never_reaches_the_network() {
        let generator = FakeGenerator::replying(Ok(THREE));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", None);
        assert!(state.error_message().unwrap_or_default().contains(LLM_KEY_VAR));
        assert_eq!(generator.calls.get(), 0);
    }

    #[test]
    fn empty_text_is_an_empty_response_error() {
        let generator = FakeGenerator::replying(Ok("  "));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", Some("key"));
        assert_eq!(state.error_message(), Some(SiteError::EmptyResponse.user_message().as_str()));
        assert!(state.error_message().unwrap_or_default().contains("empty response"));
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let generator = FakeGenerator::replying(Ok("{not json"));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", Some("key"));
        assert!(matches!(state.phase, GrowthPhase::Error(_)));
        assert!(state.result().is_none());
    }

    #[test]
    fn provider_error_is_surfaced() {
        let generator = FakeGenerator::replying(Err(SiteError::Provider("API key not valid".into())));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", Some("key"));
        assert_eq!(state.error_message(), Some("API key not valid"));
    }

    #[test]
    fn well_formed_reply_is_stored() {
        let generator = FakeGenerator::replying(Ok(THREE));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", Some("key"));
        let expected: Vec<Strategy> = serde_json::from_str(THREE).unwrap();
        assert_eq!(state.result(), Some(expected.as_slice()));
        assert!(!state.is_loading());
        assert!(generator.prompts.borrow()[0].contains("\"fintech\""));
    }

    #[test]
    fn new_niche_clears_previous_result_before_resolving() {
        let generator = FakeGenerator::replying(Ok(THREE));
        let mut state = GrowthState::default();
        state = run(state, &generator, "fintech", Some("key"));
        assert!(state.result().is_some());

        let request = state.prepare("luxury fashion", Some("key"));
        assert_eq!(request.map(|r| r.niche), Some("luxury fashion".to_string()));
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn no_second_request_while_loading() {
        let mut state = GrowthState::default();
        assert!(state.prepare("fintech", Some("key")).is_some());
        assert!(state.prepare("saas", Some("key")).is_none());
        assert_eq!(state.last_niche.as_deref(), Some("fintech"));
    }

    #[test]
    fn retry_reuses_the_last_niche() {
        let failing = FakeGenerator::replying(Err(SiteError::Network("offline".into())));
        let mut state = GrowthState::default();
        state = run(state, &failing, "fintech", Some("key"));
        assert!(state.error_message().is_some());

        let working = FakeGenerator::replying(Ok(THREE));
        let Some(request) = state.retry(Some("key")) else {
            panic!("retry after an error should produce a request");
        };
        assert_eq!(request.niche, "fintech");
        assert!(state.is_loading());
        state = block_on(generate_strategy(&working, &request, state));
        assert_eq!(state.result().map(<[Strategy]>::len), Some(3));
        assert!(working.prompts.borrow()[0].contains("\"fintech\""));
    }

    #[test]
    fn retry_without_history_does_nothing() {
        let mut state = GrowthState::default();
        assert!(state.retry(Some("key")).is_none());
        assert_eq!(state.phase, GrowthPhase::Idle);
    }

    #[test]
    fn empty_array_counts_as_empty() {
        assert_eq!(parse_strategies("[]"), Err(SiteError::EmptyResponse));
    }

    #[test]
    fn priority_is_case_insensitive() {
        let strategies = parse_strategies(THREE).unwrap();
        let levels: Vec<_> = strategies.iter().map(Strategy::priority_level).collect();
        assert_eq!(levels, vec![Some(Priority::High), Some(Priority::Medium), Some(Priority::Low)]);
        assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn provider_body_declares_strict_schema() {
        let body = GenerationRequest::new("fintech", "key").to_provider_body();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["required"],
            json!(["title", "points", "timeline", "priority"])
        );
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .contains("fintech"));
        assert!(body.get("api_key").is_none());
    }
}
