use std::rc::Rc;
use yew::prelude::*;

use crate::config::{REFERENCE_LINE_PX, SCROLL_THRESHOLD_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Features,
    Locations,
    Scale,
    Contact,
}

impl Section {
    /// Declared order. Earlier sections win when several straddle the reference line.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Features,
        Section::Locations,
        Section::Scale,
        Section::Contact,
    ];

    /// Element id the section is rendered under.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Features => "features",
            Section::Locations => "locations",
            Section::Scale => "scale",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Features => "Features",
            Section::Locations => "Locations",
            Section::Scale => "Partnership",
            Section::Contact => "Contact",
        }
    }
}

/// A section's bounding box relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, bottom: f64) -> Self {
        Self { section, top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Picks the first section, in declared order, whose bounds cross `reference_line`.
///
/// The order of `bounds` does not matter. Sections that were not measured are skipped,
/// and `None` means nothing crosses the line so the caller keeps what it had.
pub fn resolve_active(bounds: &[SectionBounds], reference_line: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        bounds
            .iter()
            .any(|b| b.section == *section && b.straddles(reference_line))
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub scrolled: bool,
    pub active: Section,
    pub modal_open: bool,
    pub menu_open: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: Section::Hero,
            modal_open: false,
            menu_open: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// A scroll event with the offset and the section measurements taken for it.
    Scrolled { offset: f64, bounds: Vec<SectionBounds> },
    /// A navigation control was activated. Always collapses the mobile menu.
    Navigate(Section),
    ToggleMenu,
    OpenModal,
    CloseModal,
}

impl PageState {
    pub fn apply(&self, action: PageAction) -> PageState {
        let mut next = self.clone();
        match action {
            PageAction::Scrolled { offset, bounds } => {
                next.scrolled = is_scrolled(offset);
                if let Some(section) = resolve_active(&bounds, REFERENCE_LINE_PX) {
                    next.active = section;
                }
            }
            PageAction::Navigate(_) => {
                next.menu_open = false;
            }
            PageAction::ToggleMenu => {
                next.menu_open = !self.menu_open;
            }
            PageAction::OpenModal => {
                next.modal_open = true;
            }
            PageAction::CloseModal => {
                next.modal_open = false;
            }
        }
        next
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(offset: f64, bounds: Vec<SectionBounds>) -> PageAction {
        PageAction::Scrolled { offset, bounds }
    }

    /// Lays sections out back to back, 800px each, as seen from `offset`.
    fn stacked_layout(offset: f64) -> Vec<SectionBounds> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let top = i as f64 * 800.0 - offset;
                SectionBounds::new(*s, top, top + 800.0)
            })
            .collect()
    }

    #[test]
    fn initial_state() {
        let state = PageState::default();
        assert_eq!(state.active, Section::Hero);
        assert!(!state.scrolled);
        assert!(!state.modal_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(600.0));
    }

    #[test]
    fn reference_line_edges_are_inclusive() {
        assert!(SectionBounds::new(Section::About, 100.0, 900.0).straddles(100.0));
        assert!(SectionBounds::new(Section::About, -700.0, 100.0).straddles(100.0));
        assert!(!SectionBounds::new(Section::About, 100.5, 900.0).straddles(100.0));
        assert!(!SectionBounds::new(Section::About, -700.0, 99.0).straddles(100.0));
    }

    #[test]
    fn earlier_section_wins_when_both_match() {
        let bounds = vec![
            SectionBounds::new(Section::Features, 0.0, 500.0),
            SectionBounds::new(Section::About, -200.0, 300.0),
        ];
        assert_eq!(resolve_active(&bounds, 100.0), Some(Section::About));
    }

    #[test]
    fn resolver_skips_unmeasured_sections() {
        let bounds = vec![SectionBounds::new(Section::Scale, 50.0, 400.0)];
        assert_eq!(resolve_active(&bounds, 100.0), Some(Section::Scale));
        assert_eq!(resolve_active(&[], 100.0), None);
    }

    #[test]
    fn active_section_is_kept_when_nothing_matches() {
        let state = PageState::default().apply(scroll(900.0, stacked_layout(900.0)));
        assert_eq!(state.active, Section::About);

        // Between two sections that leave a gap around the line.
        let gap = vec![
            SectionBounds::new(Section::About, -700.0, 60.0),
            SectionBounds::new(Section::Features, 140.0, 900.0),
        ];
        let state = state.apply(scroll(1500.0, gap));
        assert_eq!(state.active, Section::About);
        assert!(state.scrolled);
    }

    #[test]
    fn scrolling_down_to_about() {
        let state = PageState::default();
        let bounds = vec![
            SectionBounds::new(Section::Hero, -600.0, 80.0),
            SectionBounds::new(Section::About, 80.0, 900.0),
        ];
        let state = state.apply(scroll(600.0, bounds));
        assert_eq!(state.active, Section::About);
        assert!(state.scrolled);
        assert!(!state.modal_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_leaves_highlighting_to_the_next_scroll() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let navigated = PageState::default().apply(PageAction::Navigate(section));
            assert_eq!(navigated.active, Section::Hero, "section {}", section.id());

            // scrollIntoView puts the section top at the viewport top.
            let offset = i as f64 * 800.0;
            let settled = navigated.apply(scroll(offset, stacked_layout(offset)));
            assert_eq!(settled.active, section, "section {}", section.id());
        }
    }

    #[test]
    fn navigate_only_touches_the_menu() {
        let state = PageState::default()
            .apply(PageAction::OpenModal)
            .apply(PageAction::ToggleMenu)
            .apply(PageAction::Navigate(Section::Contact));
        assert_eq!(state.active, Section::Hero);
        assert!(state.modal_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn navigation_collapses_menu() {
        let open = PageState::default().apply(PageAction::ToggleMenu);
        assert!(open.menu_open);

        for section in Section::ALL {
            let after = open.apply(PageAction::Navigate(section));
            assert!(!after.menu_open);
        }

        let closed = PageState::default().apply(PageAction::Navigate(Section::Contact));
        assert!(!closed.menu_open);
    }

    #[test]
    fn menu_toggles() {
        let state = PageState::default()
            .apply(PageAction::ToggleMenu)
            .apply(PageAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn modal_contact_flow() {
        let state = PageState::default().apply(PageAction::OpenModal);
        assert!(state.modal_open);

        let offset = 5.0 * 800.0;
        let state = state
            .apply(PageAction::CloseModal)
            .apply(PageAction::Navigate(Section::Contact))
            .apply(scroll(offset, stacked_layout(offset)));
        assert!(!state.modal_open);
        assert_eq!(state.active, Section::Contact);
    }

    #[test]
    fn closing_closed_modal_is_noop() {
        let state = Rc::new(PageState::default());
        let reduced = state.clone().reduce(PageAction::CloseModal);
        assert!(Rc::ptr_eq(&state, &reduced));
        assert_eq!(*reduced, PageState::default());
    }

    #[test]
    fn reduce_returns_new_state_on_change() {
        let state = Rc::new(PageState::default());
        let reduced = state.clone().reduce(PageAction::OpenModal);
        assert!(!Rc::ptr_eq(&state, &reduced));
        assert!(reduced.modal_open);
    }

    #[test]
    fn ids_and_labels() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "about", "features", "locations", "scale", "contact"]);
        assert_eq!(Section::Scale.label(), "Partnership");
        assert_eq!(Section::Hero.label(), "Home");
    }
}
