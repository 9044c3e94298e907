#![forbid(unsafe_code)]

//! Animated modal overlay.
//!
//! A modal is a full-screen dismiss layer plus a positioned content card.
//! Its single piece of animated state is the visibility value in `[0, 1]`;
//! opacity and transform of the card are derived from it on every render
//! through the selected [`AnimationVariant`].
//!
//! # Mount gating
//!
//! Showing mounts the content immediately and animates the value toward 1.
//! Hiding animates toward 0 and keeps the content mounted until that
//! transition finishes, so the exit animation is visible.
//!
//! # Example
//!
//! ```ignore
//! use flipmodal_runtime::AnimationDriver;
//! use flipmodal_widgets::modal::{AnimatedModal, AnimatedModalProps, ModalOptions};
//! use flipmodal_widgets::{Panel, Widget};
//!
//! let driver = AnimationDriver::new();
//! let props = AnimatedModalProps::new(
//!     ModalOptions::new(false).animation_type("flipAndScale"),
//!     || println!("backdrop pressed"),
//! );
//! let mut modal = AnimatedModal::mount(props, &driver);
//! modal.set_visible(true);
//!
//! // Per frame:
//! driver.tick(frame_delta);
//! modal.view(&Panel::new("Hello")).render(frame.area(), &mut frame);
//! ```

mod animated;
mod derive;
mod options;
mod position;
mod variant;

pub use animated::{
    AnimatedModal, MODAL_EASING, MODAL_HIT_BACKDROP, MODAL_HIT_CONTENT, ModalAction, ModalView,
};
pub use derive::derive_style;
pub use options::{AnimatedModalProps, BackdropConfig, ModalOptions, ModalSizeConstraints};
pub use position::{BACKDROP_LAYER, BACKDROP_Z_INDEX, CARD_INSET, CARD_Z_INDEX};
pub use variant::{AnimationVariant, ModalCardPosition};
