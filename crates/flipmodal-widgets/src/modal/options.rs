#![forbid(unsafe_code)]

//! Modal options and props.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use flipmodal_core::geometry::Size;
use flipmodal_render::cell::PackedRgba;
use flipmodal_runtime::DEFAULT_DURATION;
use flipmodal_style::Style;

use super::variant::{AnimationVariant, ModalCardPosition};

/// Backdrop configuration (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BackdropConfig {
    /// Backdrop color (alpha will be scaled by `opacity`).
    pub color: PackedRgba,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl BackdropConfig {
    pub fn new(color: PackedRgba, opacity: f32) -> Self {
        Self { color, opacity }
    }

    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// The color actually painted over the area.
    pub fn effective_color(&self) -> PackedRgba {
        self.color.with_opacity(self.opacity)
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: PackedRgba::BLACK,
            opacity: 0.5,
        }
    }
}

/// Card size constraints (min/max width/height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct ModalSizeConstraints {
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
}

impl ModalSizeConstraints {
    /// Unconstrained: the card fills the available area.
    pub const fn new() -> Self {
        Self {
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    /// Fixed width and height.
    pub const fn fixed(width: u16, height: u16) -> Self {
        Self {
            min_width: Some(width),
            max_width: Some(width),
            min_height: Some(height),
            max_height: Some(height),
        }
    }

    pub fn min_width(mut self, value: u16) -> Self {
        self.min_width = Some(value);
        self
    }

    pub fn max_width(mut self, value: u16) -> Self {
        self.max_width = Some(value);
        self
    }

    pub fn min_height(mut self, value: u16) -> Self {
        self.min_height = Some(value);
        self
    }

    pub fn max_height(mut self, value: u16) -> Self {
        self.max_height = Some(value);
        self
    }

    /// Clamp the given size to these constraints (but never exceed available).
    pub fn clamp(self, available: Size) -> Size {
        let mut width = available.width;
        let mut height = available.height;

        if let Some(max_width) = self.max_width {
            width = width.min(max_width);
        }
        if let Some(max_height) = self.max_height {
            height = height.min(max_height);
        }
        if let Some(min_width) = self.min_width {
            width = width.max(min_width).min(available.width);
        }
        if let Some(min_height) = self.min_height {
            height = height.max(min_height).min(available.height);
        }

        Size::new(width, height)
    }
}

/// Everything about a modal except its callback and content.
///
/// With the `serde` feature this deserializes from camelCase keys
/// (`visible`, `animationType`, `modalCardPosition`, `duration`,
/// `noAnimation`, `style`, `size`, `backdrop`, `dismissOnEscape`); all keys
/// are optional.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct ModalOptions {
    pub visible: bool,
    pub animation_type: AnimationVariant,
    #[cfg_attr(feature = "serde", serde(rename = "modalCardPosition"))]
    pub card_position: ModalCardPosition,
    /// Transition length in milliseconds; `None` or `0` means 300 ms.
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_ms: Option<u32>,
    /// Skip the animated style on the card; placement still applies.
    pub no_animation: bool,
    /// Merged onto the card area before the content renders.
    pub style: Option<Style>,
    pub size: ModalSizeConstraints,
    pub backdrop: BackdropConfig,
    /// Also report Escape presses through the backdrop callback.
    pub dismiss_on_escape: bool,
}

impl ModalOptions {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn animation_type(mut self, variant: impl Into<AnimationVariant>) -> Self {
        self.animation_type = variant.into();
        self
    }

    pub fn card_position(mut self, position: impl Into<ModalCardPosition>) -> Self {
        self.card_position = position.into();
        self
    }

    pub fn duration_ms(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn no_animation(mut self, no_animation: bool) -> Self {
        self.no_animation = no_animation;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn size(mut self, size: ModalSizeConstraints) -> Self {
        self.size = size;
        self
    }

    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn dismiss_on_escape(mut self, dismiss: bool) -> Self {
        self.dismiss_on_escape = dismiss;
        self
    }

    /// Transition duration with the default applied.
    pub fn duration(&self) -> Duration {
        match self.duration_ms {
            None | Some(0) => DEFAULT_DURATION,
            Some(ms) => Duration::from_millis(u64::from(ms)),
        }
    }
}

/// Options plus the backdrop callback.
#[derive(Clone)]
pub struct AnimatedModalProps {
    pub options: ModalOptions,
    on_backdrop_press: Rc<dyn Fn()>,
}

impl fmt::Debug for AnimatedModalProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedModalProps")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl AnimatedModalProps {
    pub fn new(options: ModalOptions, on_backdrop_press: impl Fn() + 'static) -> Self {
        Self {
            options,
            on_backdrop_press: Rc::new(on_backdrop_press),
        }
    }

    /// Same callback, different options.
    pub fn with_options(&self, options: ModalOptions) -> Self {
        Self {
            options,
            on_backdrop_press: Rc::clone(&self.on_backdrop_press),
        }
    }

    pub(crate) fn press_backdrop(&self) {
        (self.on_backdrop_press)();
    }
}
