//! The celebration overlay: a dimmed backdrop plus a centered logo and
//! caption that fade in, hold, fade out and then leave the page.
//!
//! The overlay is a small state machine. Timers are not owned by the
//! machine; a [`Scheduler`] feeds it events so the sequence can be driven by
//! the browser or by a manual clock in tests.

use std::time::Duration;

use leptos::prelude::*;

/// Opacity transition for both the backdrop and the container.
pub const OPACITY_TRANSITION: Duration = Duration::from_millis(300);
/// Scale transition for the container.
pub const TRANSFORM_TRANSITION: Duration = Duration::from_millis(400);
/// How long after the trigger the overlay starts fading out.
pub const HOLD: Duration = Duration::from_millis(1500);
/// How long after the fade-out starts the elements are removed.
pub const FADE_OUT: Duration = Duration::from_millis(500);

pub const LOGO_SRC: &str = "https://upload.wikimedia.org/wikipedia/en/5/56/Real_Madrid_CF.svg";
pub const LOGO_ALT: &str = "Real Madrid logo";
pub const CAPTION: &str = "¡Hala Madrid!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Nothing mounted. Also the state after removal.
    #[default]
    Idle,
    /// Mounted, still transparent, waiting for the next frame.
    Entering,
    Holding,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Trigger,
    Frame,
    HoldElapsed,
    FadeOutElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayLayer {
    Backdrop,
    Container,
}

impl OverlayPhase {
    /// Returns the phase reached by `event`, or `None` when the event does
    /// not apply in this phase.
    pub fn next(self, event: OverlayEvent) -> Option<Self> {
        use OverlayEvent::*;
        use OverlayPhase::*;
        match (self, event) {
            (Idle, Trigger) => Some(Entering),
            (Entering, Frame) => Some(Holding),
            // a throttled tab may deliver the hold timer before any frame
            (Entering, HoldElapsed) | (Holding, HoldElapsed) => Some(Exiting),
            (Exiting, FadeOutElapsed) => Some(Idle),
            _ => None,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, OverlayPhase::Idle)
    }

    /// Elements this phase puts in the display tree.
    pub fn layers(self) -> &'static [OverlayLayer] {
        if self.is_mounted() {
            &[OverlayLayer::Backdrop, OverlayLayer::Container]
        } else {
            &[]
        }
    }

    pub fn backdrop_opacity(self) -> f32 {
        match self {
            OverlayPhase::Holding => 1.0,
            _ => 0.0,
        }
    }

    pub fn container_opacity(self) -> f32 {
        self.backdrop_opacity()
    }

    pub fn container_scale(self) -> f32 {
        match self {
            OverlayPhase::Idle | OverlayPhase::Entering => 0.9,
            OverlayPhase::Holding => 1.0,
            OverlayPhase::Exiting => 0.8,
        }
    }
}

/// Non-blocking deferred execution.
pub trait Scheduler {
    /// Runs `f` on the next display refresh.
    fn next_frame(&self, f: impl FnOnce() + 'static);
    /// Runs `f` once `delay` has passed.
    fn after(&self, delay: Duration, f: impl FnOnce() + 'static);
}

/// `requestAnimationFrame` and `setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, f: impl FnOnce() + 'static) {
        request_animation_frame(f);
    }

    fn after(&self, delay: Duration, f: impl FnOnce() + 'static) {
        set_timeout(f, delay);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OverlayController {
    phase: RwSignal<OverlayPhase>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(OverlayPhase::Idle),
        }
    }

    #[cfg(test)]
    pub(crate) fn starting_at(phase: OverlayPhase) -> Self {
        Self {
            phase: RwSignal::new(phase),
        }
    }

    pub fn phase(&self) -> ReadSignal<OverlayPhase> {
        self.phase.read_only()
    }

    pub fn get_untracked(&self) -> OverlayPhase {
        self.phase.get_untracked()
    }

    fn dispatch(&self, event: OverlayEvent) -> bool {
        let current = self.phase.get_untracked();
        match current.next(event) {
            Some(next) => {
                self.phase.set(next);
                true
            }
            None => {
                log::debug!("overlay ignored {event:?} while {current:?}");
                false
            }
        }
    }

    /// Starts the overlay sequence. Returns `false` without doing anything
    /// if an overlay is already showing.
    pub fn trigger<S>(&self, scheduler: &S) -> bool
    where
        S: Scheduler + Clone + 'static,
    {
        if !self.dispatch(OverlayEvent::Trigger) {
            return false;
        }
        let this = *self;
        scheduler.next_frame(move || {
            this.dispatch(OverlayEvent::Frame);
        });
        let later = scheduler.clone();
        scheduler.after(HOLD, move || {
            this.dispatch(OverlayEvent::HoldElapsed);
            later.after(FADE_OUT, move || {
                this.dispatch(OverlayEvent::FadeOutElapsed);
            });
        });
        true
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    const FRAME: Duration = Duration::from_millis(16);

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        pending: Vec<(Duration, Task)>,
    }

    #[derive(Clone, Default)]
    struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl Scheduler for ManualScheduler {
        fn next_frame(&self, f: impl FnOnce() + 'static) {
            self.after(FRAME, f);
        }

        fn after(&self, delay: Duration, f: impl FnOnce() + 'static) {
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + delay;
            clock.pending.push((due, Box::new(f)));
        }
    }

    impl ManualScheduler {
        fn advance_to(&self, ms: u64) {
            let target = Duration::from_millis(ms);
            loop {
                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (due, _))| *due <= target)
                        .min_by_key(|(_, (due, _))| *due)
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let (due, task) = clock.pending.remove(i);
                            clock.now = due;
                            Some(task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match task {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    fn setup() -> (Owner, OverlayController, ManualScheduler) {
        let owner = Owner::new();
        owner.set();
        (owner, OverlayController::new(), ManualScheduler::default())
    }

    #[test]
    fn test_transitions() {
        use OverlayEvent::*;
        use OverlayPhase::*;
        assert_eq!(Idle.next(Trigger), Some(Entering));
        assert_eq!(Entering.next(Frame), Some(Holding));
        assert_eq!(Holding.next(HoldElapsed), Some(Exiting));
        assert_eq!(Entering.next(HoldElapsed), Some(Exiting));
        assert_eq!(Exiting.next(FadeOutElapsed), Some(Idle));

        assert_eq!(Entering.next(Trigger), None);
        assert_eq!(Holding.next(Trigger), None);
        assert_eq!(Exiting.next(Trigger), None);
        assert_eq!(Exiting.next(Frame), None);
        assert_eq!(Idle.next(FadeOutElapsed), None);
        assert_eq!(Holding.next(FadeOutElapsed), None);
    }

    #[test]
    fn test_initial_state_is_invisible() {
        let phase = OverlayPhase::Entering;
        assert!(phase.is_mounted());
        assert_eq!(phase.backdrop_opacity(), 0.0);
        assert_eq!(phase.container_opacity(), 0.0);
        assert!(phase.container_scale() < 1.0);
        assert!(OverlayPhase::Idle.layers().is_empty());
    }

    #[test]
    fn test_full_sequence_timing() {
        let (_owner, overlay, scheduler) = setup();
        assert!(overlay.trigger(&scheduler));
        assert_eq!(overlay.get_untracked(), OverlayPhase::Entering);

        // peak visibility after one frame
        scheduler.advance_to(20);
        let phase = overlay.get_untracked();
        assert_eq!(phase, OverlayPhase::Holding);
        assert_eq!(
            phase.layers(),
            &[OverlayLayer::Backdrop, OverlayLayer::Container]
        );
        assert_eq!(phase.backdrop_opacity(), 1.0);
        assert_eq!(phase.container_scale(), 1.0);

        scheduler.advance_to(1499);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Holding);

        scheduler.advance_to(1500);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Exiting);
        assert_eq!(overlay.get_untracked().layers().len(), 2);

        scheduler.advance_to(1999);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Exiting);

        scheduler.advance_to(2000);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Idle);
        assert!(overlay.get_untracked().layers().is_empty());

        scheduler.advance_to(2500);
        assert!(scheduler.clock.borrow().pending.is_empty());
    }

    #[test]
    fn test_opacity_passes_through_every_step() {
        let (_owner, overlay, scheduler) = setup();
        let mut seen = vec![];
        overlay.trigger(&scheduler);
        seen.push(overlay.get_untracked());
        for ms in (0..=2600).step_by(10) {
            scheduler.advance_to(ms);
            let phase = overlay.get_untracked();
            if seen.last() != Some(&phase) {
                seen.push(phase);
            }
        }
        assert_eq!(
            seen,
            vec![
                OverlayPhase::Entering,
                OverlayPhase::Holding,
                OverlayPhase::Exiting,
                OverlayPhase::Idle,
            ]
        );
        let opacities = seen
            .iter()
            .map(|p| p.backdrop_opacity())
            .collect::<Vec<_>>();
        assert_eq!(opacities, vec![0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_retrigger_while_live_is_ignored() {
        let (_owner, overlay, scheduler) = setup();
        assert!(overlay.trigger(&scheduler));
        scheduler.advance_to(500);
        assert!(!overlay.trigger(&scheduler));
        assert_eq!(overlay.get_untracked(), OverlayPhase::Holding);

        scheduler.advance_to(1700);
        assert!(!overlay.trigger(&scheduler));

        // the ignored triggers scheduled nothing extra
        scheduler.advance_to(2000);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Idle);
        assert!(scheduler.clock.borrow().pending.is_empty());

        scheduler.advance_to(2100);
        assert!(overlay.trigger(&scheduler));
        scheduler.advance_to(2120);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Holding);
        scheduler.advance_to(4100);
        assert_eq!(overlay.get_untracked(), OverlayPhase::Idle);
    }

    #[test]
    fn test_transition_fits_in_budget() {
        assert!(OPACITY_TRANSITION <= TRANSFORM_TRANSITION);
        assert!(TRANSFORM_TRANSITION <= FADE_OUT);
        assert_eq!(HOLD + FADE_OUT, Duration::from_millis(2000));
    }
}
