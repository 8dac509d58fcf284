//! Home vs. article navigation.

use std::rc::Rc;

use log::{info, warn};
use yew::Reducible;

use crate::catalog::{find_article, Article};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Home,
    Article(&'static Article),
}

/// Scroll the page should perform once the new view has mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollIntent {
    Top,
    Anchor(String),
}

/// Where an in-page link should take the reader.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorTarget<'a> {
    Top,
    Section(&'a str),
}

/// Resolves `#id` links. Anything that is not an in-page link yields `None`.
pub fn anchor_target(href: &str) -> Option<AnchorTarget<'_>> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        Some(AnchorTarget::Top)
    } else {
        Some(AnchorTarget::Section(id))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewController {
    state: ViewState,
    pending_scroll: Option<ScrollIntent>,
    transitions: u64,
}

impl ViewController {
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn current_article(&self) -> Option<&'static Article> {
        match self.state {
            ViewState::Article(article) => Some(article),
            ViewState::Home => None,
        }
    }

    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    pub fn pending_scroll(&self) -> Option<&ScrollIntent> {
        self.pending_scroll.as_ref()
    }

    pub fn open_article(&mut self, article: &'static Article) {
        info!("Opening article {}", article.id);
        self.state = ViewState::Article(article);
        self.pending_scroll = Some(ScrollIntent::Top);
        self.transitions += 1;
    }

    /// Returns home, optionally remembering a section to scroll to once it mounts.
    pub fn close_article(&mut self, target: Option<&str>) {
        let anchor = target
            .map(|t| t.strip_prefix('#').unwrap_or(t))
            .filter(|t| !t.is_empty());
        info!("Returning home (anchor: {:?})", anchor);
        self.state = ViewState::Home;
        self.pending_scroll = anchor.map(|a| ScrollIntent::Anchor(a.to_string()));
        self.transitions += 1;
    }

    /// Hands out the scroll for the latest transition once per `handled` counter.
    ///
    /// `handled` is the transition count the caller last acted on.
    pub fn take_pending_scroll(&self, handled: &mut u64) -> Option<ScrollIntent> {
        if *handled == self.transitions {
            return None;
        }
        *handled = self.transitions;
        self.pending_scroll().cloned()
    }
}

pub enum ViewAction {
    /// Opens the catalog article with this id.
    OpenArticle(&'static str),
    CloseArticle(Option<String>),
}

impl Reducible for ViewController {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::OpenArticle(id) => match find_article(id) {
                Some(article) => next.open_article(article),
                None => {
                    warn!("No article with id {}", id);
                    return self;
                }
            },
            ViewAction::CloseArticle(target) => next.close_article(target.as_deref()),
        }
        Rc::new(next)
    }
}
