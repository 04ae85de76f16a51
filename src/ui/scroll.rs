//! Scroll-triggered fade-in animations.

use crate::page::Page;

pub const SELECTOR: &str = ".animate-on-scroll";

/// Fraction of an element that must be visible to trigger its animation.
pub const THRESHOLD: f64 = 0.1;

/// Tracks which animated elements have been revealed.
///
/// Elements are identified by their position among the page's
/// `.animate-on-scroll` elements. Each animates once, then stops being
/// observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnimator {
    animated: Vec<bool>,
}

impl ScrollAnimator {
    /// Bind to the page, if it has any animated elements.
    pub fn bind(page: &Page) -> Option<Self> {
        let count = page.count(SELECTOR);
        (count > 0).then(|| Self {
            animated: vec![false; count],
        })
    }

    pub fn len(&self) -> usize {
        self.animated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animated.is_empty()
    }

    /// Number of elements still observed.
    pub fn observing(&self) -> usize {
        self.animated.iter().filter(|a| !**a).count()
    }

    pub fn is_animated(&self, element: usize) -> bool {
        self.animated.get(element).copied().unwrap_or(false)
    }

    /// Report an intersection ratio for an element.
    ///
    /// Returns `true` when this call triggered the element's animation.
    pub fn on_intersection(&mut self, element: usize, ratio: f64) -> bool {
        match self.animated.get_mut(element) {
            Some(animated) if !*animated && ratio >= THRESHOLD => {
                *animated = true;
                true
            }
            _ => false,
        }
    }
}
