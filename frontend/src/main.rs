use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

mod catalog;
mod config;
mod dom;
mod error;
mod growth;
mod lead_form;
mod scroll;
mod view;
mod api {
    pub mod http;
    pub mod web3forms;
    pub mod gemini;
}
mod components {
    pub mod navbar;
    pub mod footer;
    pub mod growth_tool;
    pub mod contact;
}
mod pages {
    pub mod home;
    pub mod blog_post;
}

use components::{footer::Footer, navbar::Nav};
use pages::{blog_post::BlogPost, home::Home};
use scroll::{is_scrolled, RevealLatch};
use view::{ScrollIntent, ViewAction, ViewController, ViewState};

/// Gives the home sections a moment to mount before scrolling to one of them.
const ANCHOR_SCROLL_DELAY_MS: u32 = 50;
const REVEAL_DELAY_MS: u32 = 200;

#[function_component]
fn App() -> Html {
    let view = use_reducer(ViewController::default);
    let latch = use_mut_ref(RevealLatch::default);
    let handled_transition = use_mut_ref(|| 0u64);
    let (_, scroll_y) = use_window_scroll();

    {
        let view = view.clone();
        let latch = latch.clone();
        let transition_count = view.transition_count();
        use_effect_with_deps(
            move |_| {
                let pending = view.take_pending_scroll(&mut handled_transition.borrow_mut());
                let scroll_timer = match pending {
                    Some(ScrollIntent::Top) => {
                        dom::scroll_to_top();
                        None
                    }
                    Some(ScrollIntent::Anchor(id)) => Some(Timeout::new(ANCHOR_SCROLL_DELAY_MS, move || {
                        dom::scroll_to_anchor(&id);
                    })),
                    None => None,
                };
                let reveal_timer = Timeout::new(REVEAL_DELAY_MS, move || {
                    dom::reveal_pass(&mut latch.borrow_mut());
                });
                move || {
                    drop(scroll_timer);
                    drop(reveal_timer);
                }
            },
            transition_count,
        );
    }

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |_| {
                dom::reveal_pass(&mut latch.borrow_mut());
                || ()
            },
            scroll_y,
        );
    }

    let on_read = {
        let view = view.clone();
        Callback::from(move |id: &'static str| view.dispatch(ViewAction::OpenArticle(id)))
    };

    let on_back = {
        let view = view.clone();
        Callback::from(move |target: Option<String>| view.dispatch(ViewAction::CloseArticle(target)))
    };

    // Navigation from the article view goes home first.
    let on_navigate = {
        let view = view.clone();
        Callback::from(move |href: String| {
            if view.current_article().is_some() {
                view.dispatch(ViewAction::CloseArticle(Some(href)));
            } else {
                dom::follow_anchor(&href);
            }
        })
    };

    let progress = dom::scroll_metrics()
        .map(|metrics| metrics.progress())
        .unwrap_or_default();

    html! {
        <>
            <Nav
                scrolled={view.current_article().is_some() || is_scrolled(scroll_y)}
                on_navigate={on_navigate.clone()}
            />
            {
                match view.state() {
                    ViewState::Article(article) => html! { <BlogPost {article} {on_back} /> },
                    ViewState::Home => html! { <Home {progress} {on_read} on_navigate={on_navigate.clone()} /> },
                }
            }
            <Footer {on_navigate} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if config::is_debug_build() { Level::Debug } else { Level::Info };
    if console_log::init_with_level(level).is_err() {
        gloo_console::error!("Logger was already initialised");
    }

    info!("Starting Nexus Growth");
    yew::Renderer::<App>::new().render();
}
