//! Interaction state shared across the page: which section is being
//! previewed, which modal is open, and where that modal sits in its
//! open/close lifecycle.
//!
//! Everything in this module is pure and target-independent. The frontend
//! feeds it DOM events and timer completions; nothing here touches the
//! browser, which keeps the lifecycle testable on the native target.

/// Wall-clock length of the portal entrance animation.
pub const ENTER_DURATION_MS: u32 = 1_000;
/// Wall-clock length of the portal exit animation.
pub const EXIT_DURATION_MS: u32 = 800;
/// Delay before the contact form reports (simulated) success.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// One of the five content categories the page navigates between.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    About,
    Skills,
    Portfolio,
    Work,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::About,
        Self::Skills,
        Self::Portfolio,
        Self::Work,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Portfolio => "portfolio",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }
}

/// Viewport coordinates of the click that opened a modal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Lifecycle position of the single modal the page may have open.
///
/// The only legal path is
/// `Closed -> Entering -> Active -> Exiting -> Closed`; no transition
/// skips a phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Closed,
    Entering,
    Active,
    Exiting,
}

/// The open modal, if any, together with its animation phase and the
/// click point anchoring its entrance.
///
/// Invariant: `section` is `Some` exactly while `phase != Closed`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ModalState {
    section: Option<SectionId>,
    phase: Phase,
    origin: Option<Point>,
}

impl ModalState {
    pub fn closed() -> Self {
        Self {
            section: None,
            phase: Phase::Closed,
            origin: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Begin opening a modal from a nav-card click.
    ///
    /// Honored only while fully closed; a second click while another
    /// modal is in flight is dropped without touching any field. Rapid
    /// hover/click sequences on the nav cards make such calls routine,
    /// so rejection is silent rather than an error.
    #[must_use]
    pub fn open(&mut self, section: SectionId, origin: Option<Point>) -> bool {
        if self.phase != Phase::Closed {
            return false;
        }
        self.section = Some(section);
        self.origin = origin;
        self.phase = Phase::Entering;
        true
    }

    /// Ask the open modal to start its exit animation.
    ///
    /// Honored only while `Active`: a close landing during `Entering` is
    /// dropped (the modal must finish opening first), and a repeated
    /// close during `Exiting` is a no-op so the three dismissal triggers
    /// (outside click, Escape, close button) cannot stack exit sequences.
    #[must_use]
    pub fn request_close(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Exiting;
        true
    }

    /// Advance past a finished animation phase. This is the only place a
    /// phase advances other than `open`/`request_close`; the frontend
    /// calls it from the entrance/exit timers. Idle phases ignore it.
    pub fn phase_complete(&mut self) {
        match self.phase {
            Phase::Entering => self.phase = Phase::Active,
            Phase::Exiting => *self = Self::closed(),
            Phase::Closed | Phase::Active => {}
        }
    }
}

/// The section whose preview card the user is hovering, if any.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreviewState {
    section: Option<SectionId>,
}

impl PreviewState {
    pub fn inactive() -> Self {
        Self { section: None }
    }

    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    pub fn set(&mut self, section: Option<SectionId>) {
        self.section = section;
    }
}

/// Combined visibility rule for the hover preview: a preview renders only
/// while a section is hovered and no modal is open or in flight. Opening
/// a modal therefore hides any visible preview immediately, even if the
/// hover-end event never fires.
pub fn show_preview(preview: &PreviewState, modal: &ModalState) -> Option<SectionId> {
    if modal.phase() != Phase::Closed {
        return None;
    }
    preview.section()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Option<Point> {
        Some(Point { x: 400.0, y: 300.0 })
    }

    fn assert_invariant(modal: &ModalState) {
        assert_eq!(modal.section().is_some(), modal.phase() != Phase::Closed);
    }

    #[test]
    fn full_lifecycle_follows_the_single_path() {
        let mut modal = ModalState::closed();
        assert_eq!(modal.phase(), Phase::Closed);
        assert_invariant(&modal);

        assert!(modal.open(SectionId::Skills, origin()));
        assert_eq!(modal.phase(), Phase::Entering);
        assert_eq!(modal.section(), Some(SectionId::Skills));
        assert_eq!(modal.origin(), origin());
        assert_invariant(&modal);

        modal.phase_complete();
        assert_eq!(modal.phase(), Phase::Active);
        assert_invariant(&modal);

        assert!(modal.request_close());
        assert_eq!(modal.phase(), Phase::Exiting);
        assert_eq!(modal.section(), Some(SectionId::Skills));
        assert_invariant(&modal);

        modal.phase_complete();
        assert_eq!(modal.phase(), Phase::Closed);
        assert_eq!(modal.section(), None);
        assert_eq!(modal.origin(), None);
        assert_invariant(&modal);
    }

    #[test]
    fn open_rejected_while_not_closed() {
        let mut modal = ModalState::closed();
        assert!(modal.open(SectionId::About, origin()));

        let reject = |modal: &mut ModalState| {
            let before = *modal;
            assert!(!modal.open(SectionId::Work, Some(Point { x: 1.0, y: 2.0 })));
            assert_eq!(*modal, before);
        };

        reject(&mut modal); // Entering
        modal.phase_complete();
        reject(&mut modal); // Active
        assert!(modal.request_close());
        reject(&mut modal); // Exiting
    }

    #[test]
    fn close_rejected_while_entering_and_exiting() {
        let mut modal = ModalState::closed();
        assert!(!modal.request_close());

        assert!(modal.open(SectionId::Portfolio, None));
        assert!(!modal.request_close());
        assert_eq!(modal.phase(), Phase::Entering);

        modal.phase_complete();
        assert!(modal.request_close());
        assert!(!modal.request_close());
        assert_eq!(modal.phase(), Phase::Exiting);
    }

    #[test]
    fn phase_complete_is_harmless_when_idle() {
        let mut modal = ModalState::closed();
        modal.phase_complete();
        assert_eq!(modal, ModalState::closed());

        assert!(modal.open(SectionId::Contact, origin()));
        modal.phase_complete();
        let active = modal;
        modal.phase_complete();
        assert_eq!(modal, active);
    }

    #[test]
    fn reopening_starts_from_a_clean_slate() {
        let mut modal = ModalState::closed();
        assert!(modal.open(SectionId::Contact, origin()));
        modal.phase_complete();
        assert!(modal.request_close());
        modal.phase_complete();

        assert!(modal.open(SectionId::About, None));
        assert_eq!(modal.section(), Some(SectionId::About));
        assert_eq!(modal.origin(), None);
    }

    #[test]
    fn preview_suppressed_whenever_a_modal_is_in_flight() {
        for section in SectionId::ALL {
            let mut preview = PreviewState::inactive();
            preview.set(Some(section));

            let mut modal = ModalState::closed();
            assert_eq!(show_preview(&preview, &modal), Some(section));

            // Click-before-hover-end: the preview must vanish the instant
            // the phase leaves Closed.
            assert!(modal.open(section, origin()));
            assert_eq!(show_preview(&preview, &modal), None);

            modal.phase_complete();
            assert_eq!(show_preview(&preview, &modal), None);

            assert!(modal.request_close());
            assert_eq!(show_preview(&preview, &modal), None);

            modal.phase_complete();
            assert_eq!(show_preview(&preview, &modal), Some(section));
        }
    }

    #[test]
    fn hover_end_clears_the_preview() {
        let mut preview = PreviewState::inactive();
        let modal = ModalState::closed();

        preview.set(Some(SectionId::Work));
        assert_eq!(show_preview(&preview, &modal), Some(SectionId::Work));

        preview.set(None);
        assert_eq!(show_preview(&preview, &modal), None);
    }

    #[test]
    fn section_ids_have_stable_names() {
        let names: Vec<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["about", "skills", "portfolio", "work", "contact"]
        );
    }
}
