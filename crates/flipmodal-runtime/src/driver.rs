#![forbid(unsafe_code)]

//! Frame-driven animation driver.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::animated::{AnimatedValue, Timing, TransitionEnd};

/// Host-owned set of animated values with in-flight transitions.
///
/// The driver holds strong handles to the values it animates, so a
/// transition keeps running (and its end callback still fires) after the
/// component that started it is gone. Callbacks that touch component state
/// should capture it weakly.
///
/// Cloning yields another handle to the same driver.
#[derive(Clone, Default)]
pub struct AnimationDriver {
    active: Rc<RefCell<Vec<AnimatedValue>>>,
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("active", &self.active.borrow().len())
            .finish()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition on `value`, replacing any in-flight one, and call
    /// `on_end` exactly once when it ends.
    pub fn start(
        &self,
        value: &AnimatedValue,
        timing: Timing,
        on_end: impl FnOnce(TransitionEnd) + 'static,
    ) -> u64 {
        {
            let mut active = self.active.borrow_mut();
            if !active.iter().any(|v| v.ptr_eq(value)) {
                active.push(value.clone());
            }
        }
        value.begin(timing, Some(Box::new(on_end)))
    }

    /// Stop the transition on `value` where it is. Its end callback runs
    /// with `finished: false`.
    pub fn stop(&self, value: &AnimatedValue) {
        self.active.borrow_mut().retain(|v| !v.ptr_eq(value));
        value.stop();
    }

    /// Advance every in-flight transition by `delta`.
    ///
    /// Returns the number of transitions that finished on this tick.
    pub fn tick(&self, delta: Duration) -> usize {
        let values: Vec<AnimatedValue> = self.active.borrow().clone();
        let mut finished = Vec::new();
        for value in &values {
            if let Some(on_end) = value.advance(delta) {
                finished.push(on_end);
            }
        }
        self.active.borrow_mut().retain(|v| v.is_animating());

        let count = finished.len();
        for on_end in finished.into_iter().flatten() {
            on_end(TransitionEnd { finished: true });
        }
        count
    }

    /// Tick in `step` increments until nothing is animating or `limit`
    /// ticks have run. Returns the number of ticks run.
    pub fn settle(&self, step: Duration, limit: usize) -> usize {
        let mut ticks = 0;
        while self.is_animating() && ticks < limit {
            self.tick(step);
            ticks += 1;
        }
        ticks
    }

    /// True while any driven value has a transition in flight.
    pub fn is_animating(&self) -> bool {
        self.active.borrow().iter().any(|v| v.is_animating())
    }

    /// Number of values currently tracked.
    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stop_ends_unfinished_and_untracks() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        let seen = Rc::new(Cell::new(None));
        let s = Rc::clone(&seen);
        driver.start(&v, Timing::to(1.0).duration(ms(100)), move |end| {
            s.set(Some(end.finished));
        });
        driver.tick(ms(50));
        let mid = v.get();

        driver.stop(&v);
        assert_eq!(seen.get(), Some(false));
        assert_eq!(driver.active_count(), 0);
        assert!(!v.is_animating());
        assert_eq!(v.get(), mid);
    }

    #[test]
    fn tick_drives_to_completion() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        driver.start(&v, Timing::to(1.0).duration(ms(100)), |_| {});
        assert_eq!(driver.tick(ms(50)), 0);
        assert!(driver.is_animating());
        assert_eq!(driver.tick(ms(50)), 1);
        assert_eq!(v.get(), 1.0);
        assert!(!driver.is_animating());
        assert_eq!(driver.active_count(), 0);
    }

    #[test]
    fn end_callback_runs_once_with_finished() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(1.0);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(None));
        let (c, s) = (Rc::clone(&calls), Rc::clone(&seen));
        driver.start(&v, Timing::to(0.0).duration(ms(10)), move |end| {
            c.set(c.get() + 1);
            s.set(Some(end.finished));
        });
        driver.tick(ms(10));
        driver.tick(ms(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn same_value_is_tracked_once() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        driver.start(&v, Timing::to(1.0), |_| {});
        driver.start(&v, Timing::to(0.0), |_| {});
        assert_eq!(driver.active_count(), 1);
    }

    #[test]
    fn callback_may_start_new_transition() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        let (d, vv) = (driver.clone(), v.clone());
        driver.start(&v, Timing::to(1.0).duration(ms(10)), move |_| {
            d.start(&vv, Timing::to(0.0).duration(ms(10)), |_| {});
        });
        driver.tick(ms(10));
        assert_eq!(v.get(), 1.0);
        assert!(v.is_animating());
        driver.tick(ms(10));
        assert_eq!(v.get(), 0.0);
    }

    #[test]
    fn transition_outlives_caller_handle() {
        let driver = AnimationDriver::new();
        let done = Rc::new(Cell::new(false));
        {
            let v = AnimatedValue::new(0.0);
            let flag = Rc::clone(&done);
            driver.start(&v, Timing::to(1.0).duration(ms(10)), move |end| {
                flag.set(end.finished);
            });
        }
        driver.tick(ms(10));
        assert!(done.get());
    }

    #[test]
    fn settle_stops_at_rest() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        driver.start(
            &v,
            Timing::to(1.0).duration(ms(100)).easing(Easing::Linear),
            |_| {},
        );
        let ticks = driver.settle(ms(16), 100);
        assert_eq!(ticks, 7);
        assert_eq!(v.get(), 1.0);
    }

    #[test]
    fn values_stay_between_endpoints() {
        let driver = AnimationDriver::new();
        let v = AnimatedValue::new(0.0);
        driver.start(&v, Timing::to(1.0).duration(ms(300)), |_| {});
        for _ in 0..40 {
            driver.tick(ms(9));
            let x = v.get();
            assert!((0.0..=1.0).contains(&x), "out of range: {x}");
        }
    }
}
