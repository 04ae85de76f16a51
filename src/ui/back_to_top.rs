//! "Back to top" button.

use crate::page::Page;

pub const SELECTOR: &str = "#backToTop";

/// Scroll offset beyond which the button shows.
pub const VISIBILITY_THRESHOLD: f64 = 300.0;

/// Scroll request issued by a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub top: f64,
    pub smooth: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    pub fn bind(page: &Page) -> Option<Self> {
        page.has(SELECTOR).then(Self::default)
    }

    /// Update visibility for a new scroll offset and return it.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > VISIBILITY_THRESHOLD;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn click(&self) -> ScrollTo {
        ScrollTo {
            top: 0.0,
            smooth: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_threshold() {
        let page = Page::parse(r#"<html><body><button id="backToTop"></button></body></html>"#);
        let mut button = BackToTop::bind(&page).unwrap();
        assert!(!button.on_scroll(0.0));
        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(300.5));
        assert!(button.is_visible());
        assert!(!button.on_scroll(10.0));
    }

    #[test]
    fn test_click_scrolls_smoothly_to_top() {
        let button = BackToTop::default();
        assert_eq!(button.click(), ScrollTo { top: 0.0, smooth: true });
    }

    #[test]
    fn test_absent_button() {
        assert!(BackToTop::bind(&Page::parse("<html></html>")).is_none());
    }
}
