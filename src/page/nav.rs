// src/page/nav.rs
// =============================================================================
// The mobile navigation menu.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The hamburger icon was clicked
    HamburgerClicked,
    /// One of the nav bar's links was clicked
    LinkClicked,
    /// An in-page anchor scroll actually happened
    AnchorFollowed,
}

/// Open/closed state of the mobile navigation menu.
///
/// While the menu is open the page body must not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::HamburgerClicked => self.open = !self.open,
            NavEvent::LinkClicked | NavEvent::AnchorFollowed => self.open = false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Class list for the `.nav-links` element (the hamburger mirrors it)
    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamburger_toggles() {
        let mut menu = NavMenu::default();
        menu.handle(NavEvent::HamburgerClicked);
        assert!(menu.is_open());
        assert!(menu.body_scroll_locked());
        assert_eq!(menu.menu_class(), "nav-links active");

        menu.handle(NavEvent::HamburgerClicked);
        assert!(!menu.is_open());
        assert_eq!(menu.menu_class(), "nav-links");
    }

    #[test]
    fn test_link_click_closes() {
        let mut menu = NavMenu::default();
        menu.handle(NavEvent::HamburgerClicked);
        menu.handle(NavEvent::LinkClicked);
        assert!(!menu.is_open());
        assert!(!menu.body_scroll_locked());

        // Closing an already closed menu keeps it closed
        menu.handle(NavEvent::LinkClicked);
        assert!(!menu.is_open());
    }
}
