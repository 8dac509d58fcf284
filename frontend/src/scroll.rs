//! Scroll progress and reveal-on-scroll bookkeeping.
//!
//! Pure math only; `dom.rs` feeds it numbers read from the page.

use std::collections::HashSet;

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the page scrolled, in `[0, 100]`.
    ///
    /// A page that cannot scroll reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable.is_nan() || scrollable <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top * 100.0 / scrollable).clamp(0.0, 100.0)
    }
}

/// Element position relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Grows the viewport on both edges so elements trigger early.
    pub root_margin: f64,
    /// Fraction of the element that must be inside the grown viewport.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: 50.0,
            threshold: 0.05,
        }
    }
}

impl RevealOptions {
    pub fn intersects(&self, bounds: ElementBounds, viewport_height: f64) -> bool {
        let view_top = -self.root_margin;
        let view_bottom = viewport_height + self.root_margin;
        let bottom = bounds.top + bounds.height;

        if bounds.height <= 0.0 {
            return bounds.top >= view_top && bounds.top <= view_bottom;
        }

        let visible = bottom.min(view_bottom) - bounds.top.max(view_top);
        if visible <= 0.0 {
            return false;
        }
        visible / bounds.height >= self.threshold
    }
}

/// One-way visibility flags, keyed by element.
#[derive(Debug, Default)]
pub struct RevealLatch {
    options: RevealOptions,
    revealed: HashSet<String>,
}

impl RevealLatch {
    /// Returns `true` only the first time `key` is seen inside the viewport.
    pub fn observe(&mut self, key: &str, bounds: ElementBounds, viewport_height: f64) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        if self.options.intersects(bounds, viewport_height) {
            self.revealed.insert(key.to_string());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_at_fifty_of_five_hundred_is_ten() {
        let m = ScrollMetrics {
            scroll_top: 50.0,
            scroll_height: 1050.0,
            client_height: 550.0,
        };
        assert_eq!(m.progress(), 10.0);
    }

    #[test]
    fn progress_is_zero_when_page_cannot_scroll() {
        let m = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };
        assert_eq!(m.progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        let overscrolled = ScrollMetrics {
            scroll_top: 700.0,
            scroll_height: 1000.0,
            client_height: 500.0,
        };
        assert_eq!(overscrolled.progress(), 100.0);
        let bounced = ScrollMetrics {
            scroll_top: -20.0,
            ..overscrolled
        };
        assert_eq!(bounced.progress(), 0.0);
    }

    #[test]
    fn scrolled_flag_uses_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn margin_triggers_elements_just_below_the_fold() {
        let opts = RevealOptions::default();
        // 30px below an 800px viewport, inside the 50px margin.
        let below = ElementBounds { top: 830.0, height: 200.0 };
        assert!(opts.intersects(below, 800.0));
        let far = ElementBounds { top: 900.0, height: 200.0 };
        assert!(!opts.intersects(far, 800.0));
    }

    #[test]
    fn threshold_requires_a_sliver_of_the_element() {
        let opts = RevealOptions {
            root_margin: 0.0,
            threshold: 0.05,
        };
        // 4% of a 1000px element visible.
        assert!(!opts.intersects(ElementBounds { top: 760.0, height: 1000.0 }, 800.0));
        // 6% visible.
        assert!(opts.intersects(ElementBounds { top: 740.0, height: 1000.0 }, 800.0));
    }

    #[test]
    fn latch_is_monotonic() {
        let mut latch = RevealLatch::default();
        let inside = ElementBounds { top: 100.0, height: 100.0 };
        let outside = ElementBounds { top: 5000.0, height: 100.0 };

        assert!(!latch.observe("hero", outside, 800.0));
        assert!(!latch.is_revealed("hero"));

        assert!(latch.observe("hero", inside, 800.0));
        assert!(!latch.observe("hero", inside, 800.0));

        // Scrolling away never unmarks.
        assert!(!latch.observe("hero", outside, 800.0));
        assert!(latch.is_revealed("hero"));
        assert_eq!(latch.revealed_count(), 1);
    }
}
