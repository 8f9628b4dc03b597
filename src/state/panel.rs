//! Sliding panel state for the login/registration screen.
//!
//! The card has two sibling panels: the form panel (640 units wide) holding
//! the two stacked forms, and the registration panel (260 units) carrying
//! the title, subtitle and the toggle button. [`PanelToggle`] owns the mode
//! flag and drives every visual change through the [`PanelView`] seam, so
//! the toggle semantics stay independent of the renderer.

/// Logical width of the whole card. Offsets below use the same units and
/// are scaled to terminal cells at draw time.
pub const CARD_WIDTH_UNITS: u16 = 900;
/// Width of the panel holding the two forms.
pub const FORM_PANEL_WIDTH_UNITS: u16 = 640;
/// Width of the overlay panel with the title, subtitle and toggle button.
pub const REGISTRATION_PANEL_WIDTH_UNITS: u16 = 260;

// Horizontal travel of each panel between its two parked positions.
const FORM_PANEL_TRAVEL: u16 = 260;
const REGISTRATION_PANEL_TRAVEL: u16 = 640;

/// Which of the two stacked forms is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Registration,
}

impl AuthMode {
    pub fn toggled(self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Registration,
            AuthMode::Registration => AuthMode::Login,
        }
    }

    /// Panel arrangement that puts this mode's form in view.
    fn offsets(self) -> PanelOffsets {
        match self {
            AuthMode::Login => PanelOffsets {
                form: 0,
                registration: 640,
            },
            AuthMode::Registration => PanelOffsets {
                form: 260,
                registration: 0,
            },
        }
    }

    fn labels(self) -> PanelLabels {
        match self {
            AuthMode::Login => PanelLabels {
                button: "注册",
                title: "还未注册？",
                subtitle: "立即注册，开启新世界！",
            },
            AuthMode::Registration => PanelLabels {
                button: "登录",
                title: "已有账号？",
                subtitle: "已有账号请登录，欢迎回来！",
            },
        }
    }

    fn visibility(self) -> FormVisibility {
        match self {
            AuthMode::Login => FormVisibility {
                login: true,
                registration: false,
            },
            AuthMode::Registration => FormVisibility {
                login: false,
                registration: true,
            },
        }
    }
}

/// Horizontal offsets of the two panels, in card units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOffsets {
    pub form: u16,
    pub registration: u16,
}

/// The three mode-dependent strings on the registration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLabels {
    pub button: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Which form is on screen. Exactly one side is ever true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormVisibility {
    pub login: bool,
    pub registration: bool,
}

/// How the toggle logic talks to whatever renders the screen.
pub trait PanelView {
    fn set_panel_offsets(&mut self, offsets: PanelOffsets);
    fn set_labels(&mut self, labels: PanelLabels);
    fn set_form_visibility(&mut self, visibility: FormVisibility);
}

/// Rendered state of the card. The targets set through [`PanelView`] are
/// authoritative the moment they change; the drawn offsets trail them so
/// the slide animates across ticks.
#[derive(Debug, Clone)]
pub struct PanelVisuals {
    pub offsets: PanelOffsets,
    pub labels: PanelLabels,
    pub visibility: FormVisibility,
    drawn_form: f32,
    drawn_registration: f32,
}

impl PanelVisuals {
    /// Visuals fully settled on `mode`'s arrangement.
    pub fn aligned(mode: AuthMode) -> PanelVisuals {
        let offsets = mode.offsets();
        PanelVisuals {
            offsets,
            labels: mode.labels(),
            visibility: mode.visibility(),
            drawn_form: f32::from(offsets.form),
            drawn_registration: f32::from(offsets.registration),
        }
    }

    /// Moves the drawn offsets one tick closer to their targets, sized so a
    /// full slide completes in `slide_ticks` ticks.
    pub fn advance_slide(&mut self, slide_ticks: u64) {
        let ticks = slide_ticks.max(1) as f32;
        self.drawn_form = step_toward(
            self.drawn_form,
            f32::from(self.offsets.form),
            f32::from(FORM_PANEL_TRAVEL) / ticks,
        );
        self.drawn_registration = step_toward(
            self.drawn_registration,
            f32::from(self.offsets.registration),
            f32::from(REGISTRATION_PANEL_TRAVEL) / ticks,
        );
    }

    /// Jumps the drawn offsets straight to their targets.
    pub fn snap(&mut self) {
        self.drawn_form = f32::from(self.offsets.form);
        self.drawn_registration = f32::from(self.offsets.registration);
    }

    /// Current drawn positions as `(form, registration)`.
    pub fn drawn_offsets(&self) -> (f32, f32) {
        (self.drawn_form, self.drawn_registration)
    }
}

impl Default for PanelVisuals {
    fn default() -> Self {
        PanelVisuals::aligned(AuthMode::Login)
    }
}

impl PanelView for PanelVisuals {
    fn set_panel_offsets(&mut self, offsets: PanelOffsets) {
        self.offsets = offsets;
    }

    fn set_labels(&mut self, labels: PanelLabels) {
        self.labels = labels;
    }

    fn set_form_visibility(&mut self, visibility: FormVisibility) {
        self.visibility = visibility;
    }
}

fn step_toward(current: f32, target: f32, step: f32) -> f32 {
    if (target - current).abs() <= step {
        target
    } else if target > current {
        current + step
    } else {
        current - step
    }
}

/// Deferred form swap. There is only ever one: toggling again before it
/// fires replaces it, so an out-of-date swap can never land.
#[derive(Debug, Clone, Copy)]
struct PendingSwap {
    due_tick: u64,
    visibility: FormVisibility,
}

/// State management for the panel toggle.
///
/// Owns the mode flag; [`PanelToggle::toggle`] is the only writer, so the
/// flag and the visuals always change together.
pub struct PanelToggle {
    mode: AuthMode,
    swap_delay_ticks: u64,
    pending_swap: Option<PendingSwap>,
}

impl PanelToggle {
    pub fn new(mode: AuthMode, swap_delay_ticks: u64) -> PanelToggle {
        PanelToggle {
            mode,
            swap_delay_ticks,
            pending_swap: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn swap_pending(&self) -> bool {
        self.pending_swap.is_some()
    }

    /// Slides the panels to the opposite arrangement, rewrites the labels,
    /// and schedules the form swap for after the slide has finished.
    pub fn toggle(&mut self, now_tick: u64, view: &mut dyn PanelView) {
        let next = self.mode.toggled();
        view.set_panel_offsets(next.offsets());
        view.set_labels(next.labels());
        self.pending_swap = Some(PendingSwap {
            due_tick: now_tick + self.swap_delay_ticks,
            visibility: next.visibility(),
        });
        self.mode = next;
    }

    /// Applies the deferred swap once its deadline has passed. Call once
    /// per tick.
    pub fn on_tick(&mut self, now_tick: u64, view: &mut dyn PanelView) {
        if let Some(pending) = self.pending_swap {
            if now_tick >= pending.due_tick {
                view.set_form_visibility(pending.visibility);
                self.pending_swap = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: u64 = 6;

    fn settled(mode: AuthMode) -> (PanelToggle, PanelVisuals) {
        (PanelToggle::new(mode, DELAY), PanelVisuals::aligned(mode))
    }

    fn run_ticks(toggle: &mut PanelToggle, view: &mut PanelVisuals, from: u64, count: u64) -> u64 {
        let mut now = from;
        for _ in 0..count {
            now += 1;
            toggle.on_tick(now, view);
        }
        now
    }

    #[test]
    fn toggle_inverts_mode_from_either_side() {
        for start in [AuthMode::Login, AuthMode::Registration] {
            let (mut toggle, mut view) = settled(start);
            toggle.toggle(0, &mut view);
            assert_eq!(toggle.mode(), start.toggled());
        }
    }

    #[test]
    fn registration_to_login_slides_and_relabels_immediately() {
        let (mut toggle, mut view) = settled(AuthMode::Registration);
        toggle.toggle(0, &mut view);

        assert_eq!(view.offsets.registration, 640);
        assert_eq!(view.offsets.form, 0);
        assert_eq!(view.labels.button, "注册");
        assert_eq!(view.labels.title, "还未注册？");
        assert_eq!(view.labels.subtitle, "立即注册，开启新世界！");
        // The form swap has not happened yet.
        assert!(view.visibility.registration);
        assert!(!view.visibility.login);
    }

    #[test]
    fn login_to_registration_slides_and_relabels_immediately() {
        let (mut toggle, mut view) = settled(AuthMode::Login);
        toggle.toggle(0, &mut view);

        assert_eq!(view.offsets.registration, 0);
        assert_eq!(view.offsets.form, 260);
        assert_eq!(view.labels.button, "登录");
        assert_eq!(view.labels.title, "已有账号？");
        assert_eq!(view.labels.subtitle, "已有账号请登录，欢迎回来！");
        assert!(view.visibility.login);
        assert!(!view.visibility.registration);
    }

    #[test]
    fn form_swap_waits_for_the_full_delay() {
        let (mut toggle, mut view) = settled(AuthMode::Login);
        let before = view.visibility;
        toggle.toggle(0, &mut view);

        let now = run_ticks(&mut toggle, &mut view, 0, DELAY - 1);
        assert_eq!(view.visibility, before);
        assert!(toggle.swap_pending());

        run_ticks(&mut toggle, &mut view, now, 1);
        assert!(view.visibility.registration);
        assert!(!view.visibility.login);
        assert!(!toggle.swap_pending());
    }

    #[test]
    fn double_toggle_returns_everything_to_the_initial_state() {
        let (mut toggle, mut view) = settled(AuthMode::Login);
        let initial = view.clone();

        toggle.toggle(0, &mut view);
        let now = run_ticks(&mut toggle, &mut view, 0, DELAY);
        toggle.toggle(now, &mut view);
        run_ticks(&mut toggle, &mut view, now, DELAY);

        assert_eq!(toggle.mode(), AuthMode::Login);
        assert_eq!(view.offsets, initial.offsets);
        assert_eq!(view.labels, initial.labels);
        assert_eq!(view.visibility, initial.visibility);
    }

    #[test]
    fn retoggle_before_the_deadline_replaces_the_pending_swap() {
        let (mut toggle, mut view) = settled(AuthMode::Login);
        toggle.toggle(0, &mut view);
        let now = run_ticks(&mut toggle, &mut view, 0, 3);

        // Second toggle lands while the first swap is still pending.
        toggle.toggle(now, &mut view);
        let now = run_ticks(&mut toggle, &mut view, now, DELAY - 1);
        // The first swap's deadline has long passed and must not have fired.
        assert!(view.visibility.login);
        assert!(toggle.swap_pending());

        run_ticks(&mut toggle, &mut view, now, 1);
        assert!(view.visibility.login);
        assert!(!toggle.swap_pending());
        assert_eq!(toggle.mode(), AuthMode::Login);
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Offsets(PanelOffsets),
        Labels(PanelLabels),
        Visibility(FormVisibility),
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<Call>,
    }

    impl PanelView for RecordingView {
        fn set_panel_offsets(&mut self, offsets: PanelOffsets) {
            self.calls.push(Call::Offsets(offsets));
        }

        fn set_labels(&mut self, labels: PanelLabels) {
            self.calls.push(Call::Labels(labels));
        }

        fn set_form_visibility(&mut self, visibility: FormVisibility) {
            self.calls.push(Call::Visibility(visibility));
        }
    }

    #[test]
    fn visibility_is_only_ever_set_from_on_tick() {
        let mut toggle = PanelToggle::new(AuthMode::Login, DELAY);
        let mut view = RecordingView::default();

        toggle.toggle(0, &mut view);
        assert_eq!(view.calls.len(), 2);
        assert!(matches!(view.calls[0], Call::Offsets(_)));
        assert!(matches!(view.calls[1], Call::Labels(_)));

        for now in 1..DELAY {
            toggle.on_tick(now, &mut view);
        }
        assert_eq!(view.calls.len(), 2);

        toggle.on_tick(DELAY, &mut view);
        assert_eq!(view.calls.len(), 3);
        assert_eq!(
            view.calls[2],
            Call::Visibility(FormVisibility {
                login: false,
                registration: true,
            })
        );
    }

    #[test]
    fn rapid_double_toggle_fires_exactly_one_swap() {
        let mut toggle = PanelToggle::new(AuthMode::Login, DELAY);
        let mut view = RecordingView::default();

        toggle.toggle(0, &mut view);
        toggle.toggle(2, &mut view);
        for now in 3..=20 {
            toggle.on_tick(now, &mut view);
        }

        let swaps: Vec<&Call> = view
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Visibility(_)))
            .collect();
        assert_eq!(swaps.len(), 1);
        assert_eq!(
            *swaps[0],
            Call::Visibility(FormVisibility {
                login: true,
                registration: false,
            })
        );
    }
}
