//! Page chrome state: sticky header, navigation menu, anchor scrolling

/// Header that switches to its compact style once the page scrolls past a
/// threshold
#[derive(Debug, Clone)]
pub struct StickyHeader {
    threshold: u32,
    scrolled: bool,
    last_offset: u32,
}

impl StickyHeader {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            scrolled: false,
            last_offset: 0,
        }
    }

    /// Record a scroll position. Returns true if the scrolled state changed.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.last_offset = offset;
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn last_offset(&self) -> u32 {
        self.last_offset
    }
}

/// Collapsible navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Escape closes the menu. Returns true if it consumed the key.
    pub fn on_escape(&mut self) -> bool {
        if self.open {
            self.close();
            true
        } else {
            false
        }
    }

    /// Following a link always closes the menu
    pub fn on_link_chosen(&mut self) {
        self.close();
    }
}

/// Scroll destination for an in-page anchor, leaving room for a fixed header.
///
/// `target_top` is the target's position relative to the viewport, or
/// `None` when the anchor points nowhere. Empty and bare `#` hrefs are
/// ignored.
pub fn anchor_scroll_target(
    href: &str,
    target_top: Option<f64>,
    current_scroll: f64,
    header_height: f64,
) -> Option<f64> {
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    let top = target_top?;
    Some(top + current_scroll - header_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sticky_header {
        use super::*;

        #[test]
        fn test_starts_unscrolled() {
            let header = StickyHeader::new(100);
            assert!(!header.is_scrolled());
        }

        #[test]
        fn test_threshold_is_exclusive() {
            let mut header = StickyHeader::new(100);
            assert!(!header.on_scroll(100));
            assert!(!header.is_scrolled());
            assert!(header.on_scroll(101));
            assert!(header.is_scrolled());
        }

        #[test]
        fn test_reports_only_changes() {
            let mut header = StickyHeader::new(10);
            assert!(header.on_scroll(50));
            assert!(!header.on_scroll(60));
            assert!(header.on_scroll(0));
            assert_eq!(header.last_offset(), 0);
        }
    }

    mod nav_menu {
        use super::*;

        #[test]
        fn test_toggle() {
            let mut menu = NavMenu::default();
            menu.toggle();
            assert!(menu.is_open());
            menu.toggle();
            assert!(!menu.is_open());
        }

        #[test]
        fn test_escape_only_consumed_when_open() {
            let mut menu = NavMenu::default();
            assert!(!menu.on_escape());
            menu.open();
            assert!(menu.on_escape());
            assert!(!menu.is_open());
        }

        #[test]
        fn test_link_closes() {
            let mut menu = NavMenu::default();
            menu.open();
            menu.on_link_chosen();
            assert!(!menu.is_open());
        }
    }

    mod anchor {
        use super::*;

        #[test]
        fn test_offsets_by_header() {
            assert_eq!(
                anchor_scroll_target("#contact", Some(400.0), 250.0, 80.0),
                Some(570.0)
            );
        }

        #[test]
        fn test_ignores_bare_and_external_links() {
            assert_eq!(anchor_scroll_target("#", Some(10.0), 0.0, 0.0), None);
            assert_eq!(anchor_scroll_target("", Some(10.0), 0.0, 0.0), None);
            assert_eq!(
                anchor_scroll_target("https://example.com", Some(10.0), 0.0, 0.0),
                None
            );
        }

        #[test]
        fn test_missing_target() {
            assert_eq!(anchor_scroll_target("#nowhere", None, 0.0, 0.0), None);
        }
    }
}
