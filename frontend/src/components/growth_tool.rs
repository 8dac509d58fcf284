use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::gemini::GeminiGenerator;
use crate::config::Config;
use crate::dom;
use crate::growth::{generate_strategy, GenerationRequest, GrowthState, Priority, Strategy};

fn launch(state: UseStateHandle<GrowthState>, next: GrowthState, request: Option<GenerationRequest>, timeout_ms: u32) {
    let Some(request) = request else {
        state.set(next);
        return;
    };
    state.set(next.clone());
    spawn_local(async move {
        log!("Requesting growth strategy");
        let generator = GeminiGenerator::new(timeout_ms);
        state.set(generate_strategy(&generator, &request, next).await);
    });
}

fn strategy_card(strategy: &Strategy) -> Html {
    let highlighted = strategy.priority_level() == Some(Priority::High);
    let start_project = Callback::from(|_: MouseEvent| {
        dom::scroll_to_anchor("contact");
    });

    html! {
        <div class="strategy-card">
            <div class="strategy-meta">
                <span class={classes!("priority-badge", highlighted.then(|| "high"))}>
                    {format!("{} Priority", strategy.priority)}
                </span>
                <span class="strategy-timeline">{&strategy.timeline}</span>
            </div>
            <h4>{&strategy.title}</h4>
            <ul>
                { for strategy.points.iter().map(|point| html! { <li>{point}</li> }) }
            </ul>
            <button class="strategy-start" onclick={start_project}>{"Start Project →"}</button>
        </div>
    }
}

#[function_component(GrowthTool)]
pub fn growth_tool() -> Html {
    let niche = use_state(String::new);
    let state = use_state(GrowthState::default);

    let on_input = {
        let niche = niche.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            niche.set(input.value());
        })
    };

    let generate = {
        let niche = niche.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let config = Config::from_build_env();
            let mut next = (*state).clone();
            let request = next.prepare(&niche, config.llm_key());
            launch(state.clone(), next, request, config.request_timeout_ms);
        })
    };

    let retry = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let config = Config::from_build_env();
            let mut next = (*state).clone();
            let request = next.retry(config.llm_key());
            launch(state.clone(), next, request, config.request_timeout_ms);
        })
    };

    let loading = state.is_loading();

    html! {
        <div class="growth-tool">
            <div class="growth-panel">
                <div class="growth-header">
                    <div class="growth-icon">{"✦"}</div>
                    <h2>{"AI Growth Engine"}</h2>
                    <p>{"Market-specific roadmaps generated in seconds."}</p>
                </div>

                <div class="growth-input">
                    <input
                        type="text"
                        placeholder="What industry are you disrupting? (e.g. Fintech, Luxury Fashion)"
                        value={(*niche).clone()}
                        oninput={on_input}
                        disabled={loading}
                    />
                    <button onclick={generate} disabled={loading || niche.is_empty()}>
                        { if loading { "Synthesizing..." } else { "Generate Insights" } }
                    </button>
                </div>

                {
                    if let Some(message) = state.error_message() {
                        html! {
                            <div class="growth-error">
                                <p>{message}</p>
                                if let Some(last) = &state.last_niche {
                                    <button onclick={retry}>{format!("Retry \"{}\"", last)}</button>
                                }
                            </div>
                        }
                    } else if let Some(strategies) = state.result() {
                        html! {
                            <div class="strategy-grid">
                                { for strategies.iter().map(strategy_card) }
                            </div>
                        }
                    } else if loading {
                        html! {
                            <div class="growth-loading"><span class="loading-spinner"></span></div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .growth-tool {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                }
                .growth-panel {
                    padding: 5rem;
                    border-radius: 4rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(99, 102, 241, 0.1);
                    backdrop-filter: blur(12px);
                }
                .growth-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .growth-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 2rem;
                    border-radius: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    color: #fff;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                }
                .growth-header h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.05em;
                }
                .growth-header p {
                    color: #64748b;
                    font-size: 1.125rem;
                }
                .growth-input {
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                    display: flex;
                    gap: 1rem;
                }
                .growth-input input {
                    flex: 1;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1.25rem 2rem;
                    color: #fff;
                    font-weight: 500;
                }
                .growth-input button, .growth-error button {
                    padding: 1.25rem 2.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .growth-input input:disabled,
                .growth-input button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .growth-error {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 1.5rem 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(244, 63, 94, 0.3);
                    background: rgba(244, 63, 94, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .growth-error p {
                    color: #fda4af;
                }
                .growth-loading {
                    text-align: center;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 28px;
                    height: 28px;
                    border: 3px solid rgba(255, 255, 255, .3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .strategy-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .strategy-card {
                    padding: 2rem;
                    border-radius: 2.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                }
                .strategy-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .priority-badge {
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    font-size: 9px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    background: rgba(255, 255, 255, 0.1);
                    color: #94a3b8;
                }
                .priority-badge.high {
                    background: #6366f1;
                    color: #fff;
                }
                .strategy-timeline {
                    font-size: 10px;
                    font-weight: 700;
                    color: #64748b;
                    text-transform: uppercase;
                }
                .strategy-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .strategy-card ul {
                    flex-grow: 1;
                    color: #94a3b8;
                    font-size: 13px;
                    line-height: 1.6;
                }
                .strategy-start {
                    margin-top: 2rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: rgba(99, 102, 241, 0.1);
                    border: 1px solid rgba(99, 102, 241, 0.2);
                    color: #fff;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .growth-panel {
                        padding: 3rem 1.5rem;
                    }
                    .growth-input {
                        flex-direction: column;
                    }
                    .strategy-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
