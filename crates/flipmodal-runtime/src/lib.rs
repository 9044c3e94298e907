#![forbid(unsafe_code)]

//! Animation runtime for flipmodal.
//!
//! This crate is the animation primitive widgets build on:
//!
//! - [`Easing`]: cubic easing curves.
//! - [`Interpolation`]: linear mapping from an input range to an output range.
//! - [`AnimatedValue`]: a shared scalar that a transition can drive.
//! - [`Timing`]: target, duration, and easing for one transition.
//! - [`AnimationDriver`]: host-owned set of in-flight transitions, advanced
//!   once per frame with [`AnimationDriver::tick`].
//! - [`FrameClock`]: wall-clock frame deltas for real-time driving.
//!
//! # Architecture
//!
//! Values and the driver are single-threaded `Rc<RefCell<..>>` handles. A
//! value carries at most one transition; starting another one replaces it and
//! continues from the current value (retarget). The replaced transition ends
//! with [`TransitionEnd::finished`] set to `false`.
//!
//! End callbacks always run after every internal borrow has been released,
//! so a callback may read values or start new transitions.
//!
//! # Invariants
//!
//! 1. A value has at most one transition in flight.
//! 2. Each transition's end callback runs exactly once.
//! 3. A transition that runs to completion leaves the value exactly at its
//!    target.
//! 4. With the built-in easings the value never leaves the segment between
//!    the transition's start value and its target.

mod animated;
mod clock;
mod driver;
mod easing;
mod interpolate;

pub use animated::{AnimatedValue, DEFAULT_DURATION, Timing, TransitionEnd};
pub use clock::FrameClock;
pub use driver::AnimationDriver;
pub use easing::Easing;
pub use interpolate::Interpolation;
