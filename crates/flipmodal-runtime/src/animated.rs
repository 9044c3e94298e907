#![forbid(unsafe_code)]

//! Animated scalar values and the transitions that drive them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::easing::Easing;

/// Duration used by [`Timing::to`].
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

static TRANSITION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// How a transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEnd {
    /// `true` if the value reached the target; `false` if the transition was
    /// replaced or stopped first.
    pub finished: bool,
}

pub(crate) type EndCallback = Box<dyn FnOnce(TransitionEnd)>;

/// Target, duration, and easing for a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    /// Transition toward `to` with the default duration and easing.
    pub fn to(to: f64) -> Self {
        Self {
            to,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

struct Transition {
    id: u64,
    from: f64,
    timing: Timing,
    elapsed: Duration,
    on_end: Option<EndCallback>,
}

impl Transition {
    fn progress(&self) -> f64 {
        if self.timing.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.timing.duration.as_secs_f64()).min(1.0)
    }

    fn value_at_progress(&self, progress: f64) -> f64 {
        let eased = self.timing.easing.apply(progress);
        self.from + (self.timing.to - self.from) * eased
    }
}

struct ValueState {
    value: f64,
    transition: Option<Transition>,
}

/// A shared, animatable scalar.
///
/// Cloning yields another handle to the same value.
#[derive(Clone)]
pub struct AnimatedValue {
    inner: Rc<RefCell<ValueState>>,
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("AnimatedValue")
            .field("value", &state.value)
            .field("target", &state.transition.as_ref().map(|t| t.timing.to))
            .finish()
    }
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ValueState {
                value,
                transition: None,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.inner.borrow().value
    }

    /// True while a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().transition.is_some()
    }

    /// Target of the in-flight transition, if any.
    pub fn target(&self) -> Option<f64> {
        self.inner.borrow().transition.as_ref().map(|t| t.timing.to)
    }

    /// Jump to `value`, stopping any in-flight transition.
    pub fn set_value(&self, value: f64) {
        let interrupted = {
            let mut state = self.inner.borrow_mut();
            state.value = value;
            state.transition.take()
        };
        end_interrupted(interrupted);
    }

    /// Stop the in-flight transition where it is.
    pub fn stop(&self) {
        let interrupted = self.inner.borrow_mut().transition.take();
        end_interrupted(interrupted);
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Begin a transition from the current value. Returns the id of the new
    /// transition.
    pub(crate) fn begin(&self, timing: Timing, on_end: Option<EndCallback>) -> u64 {
        let id = TRANSITION_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let replaced = {
            let mut state = self.inner.borrow_mut();
            let from = state.value;
            tracing::debug!(
                transition = id,
                from,
                to = timing.to,
                duration_ms = timing.duration.as_millis() as u64,
                retarget = state.transition.is_some(),
                "transition started"
            );
            state.transition.replace(Transition {
                id,
                from,
                timing,
                elapsed: Duration::ZERO,
                on_end,
            })
        };
        end_interrupted(replaced);
        id
    }

    /// Advance the in-flight transition by `delta`.
    ///
    /// Returns the end callback (with `finished: true`) when the transition
    /// completes on this step. The caller must invoke it after all borrows
    /// are released.
    pub(crate) fn advance(&self, delta: Duration) -> Option<Option<EndCallback>> {
        let mut state = self.inner.borrow_mut();
        let transition = state.transition.as_mut()?;
        transition.elapsed = transition.elapsed.saturating_add(delta);
        let progress = transition.progress();
        let value = transition.value_at_progress(progress);
        if progress >= 1.0 {
            let done = state.transition.take()?;
            state.value = done.timing.to;
            tracing::trace!(transition = done.id, to = done.timing.to, "transition finished");
            Some(done.on_end)
        } else {
            state.value = value;
            None
        }
    }
}

fn end_interrupted(transition: Option<Transition>) {
    if let Some(transition) = transition {
        tracing::debug!(transition = transition.id, "transition interrupted");
        if let Some(on_end) = transition.on_end {
            on_end(TransitionEnd { finished: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tracing_test::traced_test;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_value_is_idle() {
        let v = AnimatedValue::new(0.25);
        assert_eq!(v.get(), 0.25);
        assert!(!v.is_animating());
        assert_eq!(v.target(), None);
    }

    #[test]
    fn clones_share_state() {
        let a = AnimatedValue::new(0.0);
        let b = a.clone();
        b.set_value(0.75);
        assert_eq!(a.get(), 0.75);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn advance_reaches_target_exactly() {
        let v = AnimatedValue::new(0.0);
        v.begin(Timing::to(1.0).duration(ms(100)), None);
        assert!(v.advance(ms(40)).is_none());
        let mid = v.get();
        assert!(mid > 0.0 && mid < 1.0);
        assert!(v.advance(ms(60)).is_some());
        assert_eq!(v.get(), 1.0);
        assert!(!v.is_animating());
    }

    #[test]
    fn linear_midpoint() {
        let v = AnimatedValue::new(0.0);
        v.begin(
            Timing::to(1.0).duration(ms(100)).easing(Easing::Linear),
            None,
        );
        v.advance(ms(50));
        assert!((v.get() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let v = AnimatedValue::new(0.0);
        v.begin(
            Timing::to(1.0).duration(ms(100)).easing(Easing::Linear),
            None,
        );
        v.advance(ms(30));
        let at = v.get();
        v.begin(
            Timing::to(0.0).duration(ms(100)).easing(Easing::Linear),
            None,
        );
        assert_eq!(v.get(), at);
        v.advance(ms(50));
        assert!((v.get() - at * 0.5).abs() < 1e-9);
    }

    #[test]
    fn replaced_transition_ends_unfinished() {
        let ended = Rc::new(Cell::new(None));
        let sink = Rc::clone(&ended);
        let v = AnimatedValue::new(1.0);
        v.begin(
            Timing::to(0.0),
            Some(Box::new(move |end| sink.set(Some(end.finished)))),
        );
        v.begin(Timing::to(1.0), None);
        assert_eq!(ended.get(), Some(false));
    }

    #[test]
    fn set_value_stops_transition() {
        let ended = Rc::new(Cell::new(None));
        let sink = Rc::clone(&ended);
        let v = AnimatedValue::new(0.0);
        v.begin(
            Timing::to(1.0),
            Some(Box::new(move |end| sink.set(Some(end.finished)))),
        );
        v.set_value(0.5);
        assert_eq!(v.get(), 0.5);
        assert!(!v.is_animating());
        assert_eq!(ended.get(), Some(false));
    }

    #[test]
    fn stop_keeps_current_value() {
        let v = AnimatedValue::new(0.0);
        v.begin(Timing::to(1.0).duration(ms(100)), None);
        v.advance(ms(50));
        let at = v.get();
        v.stop();
        assert_eq!(v.get(), at);
        assert!(!v.is_animating());
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let v = AnimatedValue::new(0.0);
        v.begin(Timing::to(1.0).duration(Duration::ZERO), None);
        assert!(v.advance(Duration::ZERO).is_some());
        assert_eq!(v.get(), 1.0);
    }

    #[test]
    #[traced_test]
    fn logs_retarget_and_interrupt() {
        let v = AnimatedValue::new(0.0);
        v.begin(Timing::to(1.0), None);
        v.begin(Timing::to(0.0), None);
        assert!(logs_contain("transition started"));
        assert!(logs_contain("retarget=true"));
        assert!(logs_contain("transition interrupted"));
    }
}
