//! Page view-state.
//!
//! Everything the landing page toggles while a visitor scrolls and clicks
//! lives in one [`PageView`] value and changes only through its methods.

use std::time::Duration;

/// Scroll offset, in pixels, past which the header switches to its compact
/// style.
pub const SCROLL_THRESHOLD: f64 = 40.0;

/// Fraction of the expertise section that must be on screen for it to count
/// as active.
pub const EXPERTISE_VISIBILITY_THRESHOLD: f32 = 0.4;

/// How long the intro loader is shown before it starts to exit.
pub const INTRO_HOLD: Duration = Duration::from_millis(3000);

/// How long the intro loader's exit animation runs.
pub const INTRO_EXIT: Duration = Duration::from_millis(1000);

/// Progress of the intro loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    #[default]
    Showing,
    Exiting,
    Done,
}

impl IntroPhase {
    /// The phase reached `elapsed` after the page first loads.
    pub fn at(elapsed: Duration) -> Self {
        if elapsed < INTRO_HOLD {
            IntroPhase::Showing
        } else if elapsed < INTRO_HOLD + INTRO_EXIT {
            IntroPhase::Exiting
        } else {
            IntroPhase::Done
        }
    }
}

/// A navigable page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Expertise,
    Work,
    Contact,
}

impl Section {
    /// The in-page anchor for this section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#",
            Section::Expertise => "#expertise",
            Section::Work => "#work",
            Section::Contact => "#contact",
        }
    }
}

/// The page's transient display state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    intro: IntroPhase,
    scrolled: bool,
    expertise_active: bool,
    assistant_open: bool,
    menu_open: bool,
    section: Option<Section>,
}

impl PageView {
    /// A freshly loaded page: intro showing, everything else off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intro(&self) -> IntroPhase {
        self.intro
    }

    /// True until the intro loader has finished.
    pub fn is_loading(&self) -> bool {
        self.intro != IntroPhase::Done
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_expertise_active(&self) -> bool {
        self.expertise_active
    }

    pub fn is_assistant_open(&self) -> bool {
        self.assistant_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// The section last navigated to, if any.
    pub fn section(&self) -> Option<Section> {
        self.section
    }

    /// Move the intro loader one phase forward. `Done` is terminal.
    pub fn advance_intro(&mut self) -> IntroPhase {
        self.intro = match self.intro {
            IntroPhase::Showing => IntroPhase::Exiting,
            IntroPhase::Exiting | IntroPhase::Done => IntroPhase::Done,
        };
        self.intro
    }

    /// Sync the intro loader with the time since load. Never moves backward.
    pub fn intro_elapsed(&mut self, elapsed: Duration) -> IntroPhase {
        let phase = IntroPhase::at(elapsed);
        while self.intro != phase && self.intro != IntroPhase::Done {
            self.advance_intro();
        }
        self.intro
    }

    /// Record the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Record how much of the expertise section is visible, from 0.0 to 1.0.
    pub fn on_expertise_visibility(&mut self, ratio: f32) {
        self.expertise_active = ratio >= EXPERTISE_VISIBILITY_THRESHOLD;
    }

    pub fn open_assistant(&mut self) {
        self.assistant_open = true;
    }

    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Jump to a section. The mobile menu closes.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.menu_open = false;
        self.section = Some(section);
        section.anchor()
    }

    /// Jump back to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.navigate(Section::Home);
        self.on_scroll(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_page() {
        let view = PageView::new();
        assert_eq!(view.intro(), IntroPhase::Showing);
        assert!(view.is_loading());
        assert!(!view.is_scrolled());
        assert!(!view.is_expertise_active());
        assert!(!view.is_assistant_open());
        assert!(!view.is_menu_open());
        assert_eq!(view.section(), None);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut view = PageView::new();
        view.on_scroll(40.0);
        assert!(!view.is_scrolled());
        view.on_scroll(40.5);
        assert!(view.is_scrolled());
        view.on_scroll(12.0);
        assert!(!view.is_scrolled());
    }

    #[test]
    fn expertise_follows_visibility() {
        let mut view = PageView::new();
        view.on_expertise_visibility(0.39);
        assert!(!view.is_expertise_active());
        view.on_expertise_visibility(0.4);
        assert!(view.is_expertise_active());
        view.on_expertise_visibility(0.0);
        assert!(!view.is_expertise_active());
    }

    #[test]
    fn intro_advances_once() {
        let mut view = PageView::new();
        assert_eq!(view.advance_intro(), IntroPhase::Exiting);
        assert!(view.is_loading());
        assert_eq!(view.advance_intro(), IntroPhase::Done);
        assert!(!view.is_loading());
        assert_eq!(view.advance_intro(), IntroPhase::Done);
    }

    #[test]
    fn intro_tracks_elapsed_time() {
        assert_eq!(IntroPhase::at(Duration::from_millis(2999)), IntroPhase::Showing);
        assert_eq!(IntroPhase::at(Duration::from_millis(3000)), IntroPhase::Exiting);
        assert_eq!(IntroPhase::at(Duration::from_millis(4000)), IntroPhase::Done);

        let mut view = PageView::new();
        assert_eq!(view.intro_elapsed(Duration::from_millis(3500)), IntroPhase::Exiting);
        assert_eq!(view.intro_elapsed(Duration::from_secs(10)), IntroPhase::Done);
        assert_eq!(view.intro_elapsed(Duration::ZERO), IntroPhase::Done);
    }

    #[test]
    fn assistant_panel_transitions() {
        let mut view = PageView::new();
        view.open_assistant();
        assert!(view.is_assistant_open());
        view.open_assistant();
        assert!(view.is_assistant_open());
        view.toggle_assistant();
        assert!(!view.is_assistant_open());
        view.toggle_assistant();
        view.close_assistant();
        assert!(!view.is_assistant_open());
    }

    #[test]
    fn navigation_closes_menu() {
        let mut view = PageView::new();
        view.toggle_menu();
        assert!(view.is_menu_open());
        assert_eq!(view.navigate(Section::Work), "#work");
        assert!(!view.is_menu_open());
        assert_eq!(view.section(), Some(Section::Work));
    }

    #[test]
    fn scroll_to_top_resets() {
        let mut view = PageView::new();
        view.on_scroll(900.0);
        view.toggle_menu();
        view.scroll_to_top();
        assert!(!view.is_scrolled());
        assert!(!view.is_menu_open());
        assert_eq!(view.section(), Some(Section::Home));
    }
}
