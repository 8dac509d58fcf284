use yew::prelude::*;

/// Click handler for an in-page link: keeps the browser from jumping and lets the app scroll.
pub fn link_handler(on_navigate: &Callback<String>, href: &'static str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(href.to_string());
    })
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Services", "#services"),
    ("Insights", "#blog"),
    ("AI Strategy", "#ai-strategy"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub on_navigate: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, on_navigate } = props;
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    // Navigating from the mobile overlay also closes it.
    let navigate_and_close = {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |href: String| {
            menu_open.set(false);
            on_navigate.emit(href);
        })
    };

    html! {
        <>
            <div class="nav-shell">
                <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
                    <a href="#" class="nav-logo" onclick={link_handler(on_navigate, "#")}>
                        <span class="nav-logo-mark">{"⚡"}</span>
                        <span class="nav-logo-text">{"Nexus"}</span>
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} onclick={link_handler(on_navigate, *href)}>{*name}</a>
                        }) }
                    </div>
                    <div class="nav-actions">
                        <a href="#contact" class="nav-cta" onclick={link_handler(on_navigate, "#contact")}>
                            {"Start Project"}
                        </a>
                        <button class="burger-menu" onclick={open_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </nav>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-menu-backdrop" onclick={close_menu.clone()}></div>
                <div class="mobile-menu-panel">
                    <div class="mobile-menu-header">
                        <span class="nav-logo-text">{"NEXUS"}</span>
                        <button class="mobile-menu-close" onclick={close_menu}>{"✕"}</button>
                    </div>
                    { for NAV_LINKS.iter().map(|(name, href)| html! {
                        <a href={*href} class="mobile-menu-link" onclick={link_handler(&navigate_and_close, *href)}>{*name}</a>
                    }) }
                    <div class="mobile-menu-divider"></div>
                    <a href="#contact" class="mobile-menu-cta" onclick={link_handler(&navigate_and_close, "#contact")}>
                        {"START PROJECT"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .nav-shell {
                    position: fixed;
                    top: 1.5rem;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 0 1rem;
                    pointer-events: none;
                }
                .top-nav {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem 1.5rem;
                    pointer-events: auto;
                    border: 1px solid transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 1.5rem;
                    background: rgba(3, 7, 18, 0.6);
                    backdrop-filter: blur(24px);
                    border-color: rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    box-shadow: 0 20px 50px -15px rgba(0, 0, 0, 0.5);
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    color: #fff;
                }
                .nav-logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                }
                .nav-logo-text {
                    font-weight: 800;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    color: #fff;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .nav-links a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-links a:hover {
                    color: #fff;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-cta {
                    padding: 0.6rem 1.5rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #000;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    visibility: hidden;
                    opacity: 0;
                    transition: all 0.5s;
                }
                .mobile-menu.open {
                    visibility: visible;
                    opacity: 1;
                }
                .mobile-menu-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                }
                .mobile-menu-panel {
                    position: absolute;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: 85%;
                    max-width: 24rem;
                    background: #020617;
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    transform: translateX(100%);
                    transition: transform 0.5s ease-out;
                }
                .mobile-menu.open .mobile-menu-panel {
                    transform: translateX(0);
                }
                .mobile-menu-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 3rem;
                }
                .mobile-menu-close {
                    background: rgba(255, 255, 255, 0.05);
                    border: none;
                    color: #9ca3af;
                    border-radius: 9999px;
                    padding: 0.5rem 0.75rem;
                    cursor: pointer;
                }
                .mobile-menu-link {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #9ca3af;
                    text-decoration: none;
                }
                .mobile-menu-divider {
                    height: 1px;
                    background: rgba(255, 255, 255, 0.05);
                }
                .mobile-menu-cta {
                    padding: 1.5rem;
                    border-radius: 2rem;
                    text-align: center;
                    font-weight: 900;
                    color: #fff;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                }
                @media (max-width: 768px) {
                    .nav-links, .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}
