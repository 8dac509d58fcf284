use chrono::Datelike;
use yew::prelude::*;

use crate::components::navbar::link_handler;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_navigate = &props.on_navigate;
    let year = chrono::Utc::now().year();

    let agency_links = [
        ("About Our Mission", "#about"),
        ("Our Services", "#services"),
        ("Growth Insights", "#blog"),
        ("Work With Us", "#contact"),
    ];
    let service_links = [
        ("SEO Mastery", "#services"),
        ("Web Engineering", "#services"),
        ("Google & FB Ads", "#services"),
        ("AI Roadmaps", "#ai-strategy"),
    ];

    let link_list = |links: &[(&'static str, &'static str)]| -> Html {
        html! {
            <ul>
                { for links.iter().map(|(name, href)| html! {
                    <li><a href={*href} onclick={link_handler(on_navigate, *href)}>{*name}</a></li>
                }) }
            </ul>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">{"Nexus"}<span class="footer-logo-accent">{"Growth"}</span></span>
                    <p>{"Empowering global brands through high-performance digital strategy and precision engineering."}</p>
                </div>
                <div>
                    <h4>{"Our Agency"}</h4>
                    { link_list(&agency_links) }
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    { link_list(&service_links) }
                </div>
                <div>
                    <h4>{"Direct Contact"}</h4>
                    <p class="footer-contact">{"Ready to scale?"}<br/>{"dmwithsufi@gmail.com"}</p>
                    <button class="footer-cta" onclick={link_handler(on_navigate, "#contact")}>
                        {"Book a Strategy Call"}
                    </button>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Nexus Growth Agency. All results are data-driven.", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 5rem 2rem 2.5rem;
                    background: rgba(0, 0, 0, 0.2);
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 4rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    color: #fff;
                }
                .footer-logo-accent {
                    color: #818cf8;
                }
                .footer-brand p, .footer-contact {
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .site-footer h4 {
                    color: #fff;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .site-footer ul a {
                    color: #6b7280;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .site-footer ul a:hover {
                    color: #818cf8;
                }
                .footer-cta {
                    background: #4f46e5;
                    color: #fff;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-top: 2.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    color: #4b5563;
                    font-size: 9px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .footer-brand {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
