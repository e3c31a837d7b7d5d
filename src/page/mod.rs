// src/page/mod.rs
// =============================================================================
// The rest of the portfolio page's behavior, modeled without a DOM.
//
// Submodules:
// - nav: the mobile navigation menu (hamburger toggle, close on navigate)
// - scroll: scroll spy, anchor scrolling, reveal-on-scroll thresholds
//
// A host (browser glue, a test, a renderer) feeds PageEvents in and applies
// whatever comes back. None of this knows about elements or styles.
// =============================================================================

mod nav;
mod scroll;

pub use nav::{NavEvent, NavMenu};
pub use scroll::{
    active_section, anchor_scroll_target, parallax_offset, should_reveal, skill_bar_width,
    stagger_delay, SectionBox, HEADER_OFFSET,
};

// Something the host observed on the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Nav(NavEvent),
    /// The window scrolled to `y`
    Scrolled { y: f64 },
    /// An in-page link like `#about` was clicked
    ///
    /// `target_top` is the target's viewport-relative top, `None` when the
    /// target does not exist.
    AnchorClicked { href: String, target_top: Option<f64> },
}

// What the host should do in response
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    ScrollTo { y: f64 },
}

#[derive(Debug, Default)]
pub struct PageState {
    pub nav: NavMenu,
    sections: Vec<SectionBox>,
    scroll_y: f64,
    active: Option<String>,
}

impl PageState {
    pub fn new(sections: Vec<SectionBox>) -> Self {
        PageState {
            sections,
            ..Self::default()
        }
    }

    /// Vertical background offset of the hero section
    pub fn hero_offset(&self) -> f64 {
        parallax_offset(self.scroll_y)
    }

    /// Id of the section the nav bar should highlight
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn handle(&mut self, event: PageEvent) -> Option<PageCommand> {
        match event {
            PageEvent::Nav(nav_event) => {
                self.nav.handle(nav_event);
                None
            }
            PageEvent::Scrolled { y } => {
                self.scroll_y = y;
                self.active = active_section(&self.sections, y).map(str::to_string);
                None
            }
            PageEvent::AnchorClicked { href, target_top } => {
                let y = anchor_scroll_target(&href, target_top, self.scroll_y)?;
                self.nav.handle(NavEvent::AnchorFollowed);
                Some(PageCommand::ScrollTo { y })
            }
        }
    }
}
