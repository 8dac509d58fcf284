use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::web3forms::Web3FormsRelay;
use crate::config::{Config, FORM_KEY_VAR};
use crate::lead_form::{submit_lead, LeadFields, LeadFormState, LeadPhase, ServiceOption};

fn field_setter(fields: &UseStateHandle<LeadFields>, apply: fn(&mut LeadFields, String)) -> Callback<String> {
    let fields = fields.clone();
    Callback::from(move |value: String| {
        let mut next = (*fields).clone();
        apply(&mut next, value);
        fields.set(next);
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let fields = use_state(LeadFields::default);
    let form_state = use_state(LeadFormState::default);

    let on_name = field_setter(&fields, |f, v| f.name = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = field_setter(&fields, |f, v| f.email = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_service = field_setter(&fields, |f, v| f.service = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_message = field_setter(&fields, |f, v| f.message = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());
    let on_botcheck = field_setter(&fields, |f, v| f.botcheck = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    let onsubmit = {
        let fields = fields.clone();
        let form_state = form_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let config = Config::from_build_env();
            let mut next = (*form_state).clone();
            let submission = next.prepare(&fields, config.form_key());
            form_state.set(next.clone());

            if let Some(submission) = submission {
                let form_state = form_state.clone();
                spawn_local(async move {
                    log!("Sending lead to relay");
                    let relay = Web3FormsRelay::new(config.request_timeout_ms);
                    form_state.set(submit_lead(&relay, &submission, next).await);
                });
            }
        })
    };

    let send_another = {
        let fields = fields.clone();
        let form_state = form_state.clone();
        Callback::from(move |_: MouseEvent| {
            fields.set(LeadFields::default());
            let mut next = (*form_state).clone();
            next.reset();
            form_state.set(next);
        })
    };

    let submitting = form_state.is_submitting();

    let panel = if form_state.phase == LeadPhase::Submitted {
        html! {
            <div class="contact-success">
                <div class="contact-success-icon">{"✓"}</div>
                <h4>{"Success!"}</h4>
                <p>{"Your message has been sent to dmwithsufi@gmail.com. We'll get back to you within 24 hours."}</p>
                <button class="contact-again" onclick={send_another}>{"← Send another request"}</button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                if form_state.configuration_error {
                    <div class="contact-config-error">
                        <h5>{"Contact form not configured"}</h5>
                        <p>{format!(
                            "Get a free access key from web3forms.com and rebuild the site with {} set to it.",
                            FORM_KEY_VAR
                        )}</p>
                    </div>
                } else if let Some(message) = form_state.error_message() {
                    <div class="contact-error">{message}</div>
                }
                <div class="contact-row">
                    <label>
                        <span>{"Full Name"}</span>
                        <input required=true type="text" placeholder="John Doe"
                            value={fields.name.clone()} oninput={on_name} />
                    </label>
                    <label>
                        <span>{"Work Email"}</span>
                        <input required=true type="email" placeholder="john@company.com"
                            value={fields.email.clone()} oninput={on_email} />
                    </label>
                </div>
                <label>
                    <span>{"Service Interest"}</span>
                    <select required=true onchange={on_service}>
                        <option value="" disabled=true selected={fields.service.is_empty()}>{"Select a service..."}</option>
                        { for ServiceOption::ALL.iter().map(|option| html! {
                            <option value={option.label()} selected={fields.service == option.label()}>
                                {option.label()}
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    <span>{"Project Goals"}</span>
                    <textarea rows="4" required=true placeholder="Tell us about your project..."
                        value={fields.message.clone()} oninput={on_message} />
                </label>
                <input type="text" name="botcheck" class="botcheck" tabindex="-1" autocomplete="off"
                    value={fields.botcheck.clone()} oninput={on_botcheck} />
                <button type="submit" class="contact-submit" disabled={submitting}>
                    { if submitting { "Sending Request..." } else { "Initiate Contact" } }
                </button>
                <p class="contact-direct">{"Direct to: dmwithsufi@gmail.com"}</p>
            </form>
        }
    };

    html! {
        <div class="contact">
            <div class="contact-intro">
                <div class="contact-eyebrow">{"Contact Nexus"}</div>
                <h3>{"Ready to outpace"}<br/>{"your competition?"}</h3>
                <p>
                    {"Our specialists help brands scale through high-end web development and marketing systems. Send us your query and let's build something great."}
                </p>
                <div class="contact-channels">
                    <div><span>{"Email"}</span><strong>{"dmwithsufi@gmail.com"}</strong></div>
                    <div><span>{"Voice"}</span><strong>{"+1 (555) 890-2341"}</strong></div>
                    <div><span>{"HQ"}</span><strong>{"Available Globally"}</strong></div>
                </div>
            </div>
            <div class="contact-card">
                { panel }
            </div>
            <style>
                {r#"
                .contact {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .contact-eyebrow {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(99, 102, 241, 0.1);
                    color: #818cf8;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .contact-intro h3 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.05em;
                    margin-bottom: 2rem;
                }
                .contact-intro p {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 3rem;
                }
                .contact-channels {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .contact-channels span {
                    display: block;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    color: #64748b;
                }
                .contact-channels strong {
                    color: #fff;
                }
                .contact-card {
                    padding: 3.5rem;
                    border-radius: 3.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-form label span {
                    display: block;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #64748b;
                    margin-bottom: 0.5rem;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    width: 100%;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1rem 1.25rem;
                    color: #fff;
                    resize: none;
                }
                .contact-form select option {
                    background: #020617;
                }
                .contact-form .botcheck {
                    display: none;
                }
                .contact-submit {
                    padding: 1.25rem;
                    border: none;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .contact-direct {
                    text-align: center;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #475569;
                }
                .contact-error {
                    padding: 1rem 1.25rem;
                    border-radius: 1rem;
                    background: rgba(244, 63, 94, 0.08);
                    border: 1px solid rgba(244, 63, 94, 0.3);
                    color: #fda4af;
                }
                .contact-config-error {
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    background: rgba(245, 158, 11, 0.08);
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    color: #fcd34d;
                }
                .contact-config-error h5 {
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .contact-success {
                    text-align: center;
                    padding: 3rem 0;
                }
                .contact-success-icon {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    color: #10b981;
                    background: rgba(16, 185, 129, 0.2);
                }
                .contact-success h4 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .contact-success p {
                    color: #94a3b8;
                    margin-bottom: 2.5rem;
                }
                .contact-again {
                    background: none;
                    border: none;
                    color: #818cf8;
                    font-weight: 700;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .contact, .contact-row {
                        grid-template-columns: 1fr;
                    }
                    .contact-card {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
