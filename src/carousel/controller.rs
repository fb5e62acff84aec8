use std::time::{Duration, Instant};

use crate::config::CarouselConfig;
use crate::ui::mvi::Reducer;

use super::clock::{Clock, SystemClock};
use super::intent::CarouselIntent;
use super::reducer::CarouselReducer;
use super::state::{CarouselState, Phase, SlideOffset};

/// Default dwell of the slide-out and slide-in phases.
pub const DEFAULT_DWELL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Hold time of both animated phases.
    pub dwell: Duration,
    /// Auto-advance interval; `None` disables it.
    pub auto_advance: Option<Duration>,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            dwell: DEFAULT_DWELL,
            auto_advance: None,
        }
    }
}

impl From<&CarouselConfig> for CarouselTiming {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            dwell: config.dwell(),
            auto_advance: config.auto_advance(),
        }
    }
}

/// What the renderer should draw for the current instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    /// Where the item is heading in this phase.
    pub target: SlideOffset,
    /// Whether it moves there with a transition or jumps.
    pub animated: bool,
    /// Fraction of the phase dwell that has passed, in `[0, 1]`.
    pub progress: f32,
    /// Current horizontal position in viewport widths, `-1.0..=1.0`.
    pub position: f32,
}

/// Drives a [`CarouselState`] through its phases with explicit deadlines.
///
/// The controller owns no real timers. A render loop calls [`poll`] when
/// [`next_deadline`] is reached and [`frame_committed`] after each drawn
/// frame; the injected [`Clock`] decides what "now" is.
///
/// [`poll`]: CarouselController::poll
/// [`next_deadline`]: CarouselController::next_deadline
/// [`frame_committed`]: CarouselController::frame_committed
#[derive(Debug)]
pub struct CarouselController<C: Clock = SystemClock> {
    clock: C,
    state: CarouselState,
    timing: CarouselTiming,
    phase_started: Option<Instant>,
    /// Dwell of the running phase, fixed when it started.
    phase_dwell: Option<Duration>,
    phase_deadline: Option<Instant>,
    auto_deadline: Option<Instant>,
    torn_down: bool,
}

impl<C: Clock> CarouselController<C> {
    pub fn new(item_count: usize, timing: CarouselTiming, clock: C) -> Self {
        let mut controller = Self {
            clock,
            state: CarouselState::new(item_count),
            timing: normalize(timing),
            phase_started: None,
            phase_dwell: None,
            phase_deadline: None,
            auto_deadline: None,
            torn_down: false,
        };
        controller.schedule_auto_advance();
        controller
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    /// Start a transition to the following item. Returns false if one is
    /// already running, the carousel is empty, or it was torn down.
    pub fn next(&mut self) -> bool {
        self.begin(CarouselIntent::Next)
    }

    /// Start a transition to the preceding item.
    pub fn previous(&mut self) -> bool {
        self.begin(CarouselIntent::Previous)
    }

    /// Report that a frame showing the current state has been drawn.
    ///
    /// This is what moves `Reposition` on to `SlideIn`: the jump to the
    /// entry side has to be on screen before the slide-in starts.
    pub fn frame_committed(&mut self) {
        if self.torn_down {
            return;
        }
        self.dispatch(CarouselIntent::FrameCommitted);
    }

    /// Fire every deadline that has been reached.
    pub fn poll(&mut self) {
        if self.torn_down {
            return;
        }
        let now = self.clock.now();

        if self.phase_deadline.is_some_and(|deadline| now >= deadline) {
            self.phase_deadline = None;
            self.dispatch(CarouselIntent::DwellElapsed);
        }

        if let (Some(deadline), Some(interval)) = (self.auto_deadline, self.timing.auto_advance) {
            if now >= deadline {
                let mut following = deadline + interval;
                if following <= now {
                    following = now + interval;
                }
                self.auto_deadline = Some(following);
                // Ignored while a transition is running.
                if !self.begin(CarouselIntent::Next) {
                    tracing::trace!("Auto-advance skipped, transition in progress");
                }
            }
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.phase_deadline, self.auto_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while the controller waits for a frame to leave `Reposition`.
    pub fn needs_frame(&self) -> bool {
        !self.torn_down && self.state.phase == Phase::Reposition
    }

    /// True while any phase or auto-advance deadline is scheduled.
    pub fn has_pending_timers(&self) -> bool {
        self.phase_deadline.is_some() || self.auto_deadline.is_some()
    }

    pub fn slide_frame(&self) -> SlideFrame {
        let (target, animated) = self.state.slide_target();
        let progress = self.phase_progress();
        let position = match self.state.phase {
            Phase::Idle => 0.0,
            Phase::SlideOut => target.as_unit() * progress,
            Phase::Reposition => target.as_unit(),
            Phase::SlideIn => self.state.direction.entry_side().as_unit() * (1.0 - progress),
        };
        SlideFrame {
            target,
            animated,
            progress,
            position,
        }
    }

    /// Resize the collection. Any running transition is cancelled and the
    /// index clamped into range.
    pub fn set_item_count(&mut self, count: usize) {
        if self.torn_down || count == self.state.item_count {
            return;
        }
        self.dispatch(CarouselIntent::SetItemCount { count });
        self.schedule_auto_advance();
    }

    /// Change the auto-advance interval. `None` or a zero interval cancels it.
    pub fn set_auto_advance(&mut self, interval: Option<Duration>) {
        self.timing.auto_advance = interval.filter(|d| !d.is_zero());
        self.schedule_auto_advance();
    }

    /// Change the dwell time. A phase already running keeps its own dwell;
    /// the new value applies from the next animated phase.
    pub fn set_dwell(&mut self, dwell: Duration) {
        self.timing.dwell = dwell;
    }

    /// Drop every pending deadline. The controller stays readable but
    /// ignores all further operations.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.phase_started = None;
        self.phase_dwell = None;
        self.phase_deadline = None;
        self.auto_deadline = None;
        tracing::debug!("Carousel torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn begin(&mut self, intent: CarouselIntent) -> bool {
        if self.torn_down {
            return false;
        }
        let before = self.state.phase;
        self.dispatch(intent);
        before != self.state.phase
    }

    fn dispatch(&mut self, intent: CarouselIntent) {
        let before = self.state.phase;
        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);
        if before != self.state.phase {
            self.enter_phase();
        }
    }

    fn enter_phase(&mut self) {
        let now = self.clock.now();
        match self.state.phase {
            Phase::SlideOut | Phase::SlideIn => {
                self.phase_started = Some(now);
                self.phase_dwell = Some(self.timing.dwell);
                self.phase_deadline = Some(now + self.timing.dwell);
            }
            Phase::Reposition => {
                self.phase_started = Some(now);
                self.phase_dwell = None;
                self.phase_deadline = None;
            }
            Phase::Idle => {
                self.phase_started = None;
                self.phase_dwell = None;
                self.phase_deadline = None;
            }
        }
        tracing::trace!(
            phase = ?self.state.phase,
            index = self.state.current_index,
            direction = ?self.state.direction,
            "Carousel phase"
        );
    }

    fn phase_progress(&self) -> f32 {
        match (self.state.phase, self.phase_started, self.phase_dwell) {
            (Phase::SlideOut | Phase::SlideIn, Some(started), Some(dwell)) => {
                let dwell = dwell.as_secs_f32();
                if dwell <= 0.0 {
                    return 1.0;
                }
                let elapsed = self.clock.now().saturating_duration_since(started);
                (elapsed.as_secs_f32() / dwell).clamp(0.0, 1.0)
            }
            (Phase::Reposition, _, _) => 0.0,
            _ => 1.0,
        }
    }

    fn schedule_auto_advance(&mut self) {
        self.auto_deadline = match self.timing.auto_advance {
            Some(interval) if !self.torn_down && self.state.item_count > 1 => {
                Some(self.clock.now() + interval)
            }
            _ => None,
        };
    }
}

impl CarouselController<SystemClock> {
    /// Controller on the wall clock.
    pub fn with_system_clock(item_count: usize, timing: CarouselTiming) -> Self {
        Self::new(item_count, timing, SystemClock)
    }
}

fn normalize(timing: CarouselTiming) -> CarouselTiming {
    CarouselTiming {
        auto_advance: timing.auto_advance.filter(|d| !d.is_zero()),
        ..timing
    }
}
