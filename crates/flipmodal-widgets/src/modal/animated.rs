#![forbid(unsafe_code)]

//! The animated modal component.
//!
//! `AnimatedModal` owns one [`AnimatedValue`] (the visibility, in `[0, 1]`)
//! and a mount latch. Every derived style is recomputed from the
//! visibility at render time; nothing else is stored per variant.
//!
//! # Invariants
//!
//! - The visibility is only ever animated toward 0 or 1.
//! - `is_mounted()` is true from the moment a show is requested; it turns
//!   false only when a hide transition runs to completion. An interrupted
//!   hide never unmounts.
//! - While unmounted nothing is drawn: no dismiss layer, no content, no hit
//!   regions.
//! - The visibility handle never leaves the modal. The only way to interrupt
//!   a transition is another change of `visible` or the duration.
//! - The modal never changes its own `visible` option. Backdrop presses are
//!   reported through the callback; the owner decides what to do.
//!
//! # Failure Modes
//!
//! - If the modal is dropped while a hide is running, the driver still
//!   finishes the transition but the end callback finds the latch gone and
//!   does nothing.
//! - A card that projects to zero size (edge-on flip, zero scale, or an empty
//!   area) draws no content and registers no content hit region.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

use flipmodal_core::event::{
    Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use flipmodal_core::geometry::{Rect, Size};
use flipmodal_render::frame::{Frame, HitData, HitId, HitRegion};
use flipmodal_runtime::{AnimatedValue, AnimationDriver, Easing, Timing, TransitionEnd};
use flipmodal_style::AnimatedStyle;

use super::derive::derive_style;
use super::options::{AnimatedModalProps, ModalOptions};
use super::position::BACKDROP_LAYER;
use crate::{Widget, blend_bg_area, fade_area, set_style_area};

/// Hit region tag for the modal backdrop.
pub const MODAL_HIT_BACKDROP: HitRegion = HitRegion::Custom(1);
/// Hit region tag for the modal content.
pub const MODAL_HIT_CONTENT: HitRegion = HitRegion::Custom(2);

/// Easing of every visibility transition.
pub const MODAL_EASING: Easing = Easing::EaseInOut;

/// Hit ids start high to stay clear of ids callers assign by hand.
static MODAL_HIT_ID_COUNTER: AtomicU32 = AtomicU32::new(0x4d00_0000);

/// Action reported by [`AnimatedModal::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// The dismiss layer was pressed.
    BackdropPressed,
    /// Escape was pressed (only with `dismiss_on_escape`).
    EscapePressed,
}

/// Visible intent plus the lagging mounted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MountLatch {
    intent: bool,
    mounted: bool,
}

impl MountLatch {
    const fn new(visible: bool) -> Self {
        Self {
            intent: visible,
            mounted: visible,
        }
    }

    const fn mounted(&self) -> bool {
        self.mounted
    }

    /// Show intent: mounts immediately.
    fn show(&mut self) {
        self.intent = true;
        self.mounted = true;
    }

    /// Hide intent: stays mounted until [`Self::settle`].
    fn hide(&mut self) {
        self.intent = false;
    }

    /// A transition toward `visible` finished. Applies only if the intent
    /// still agrees.
    fn settle(&mut self, visible: bool) {
        if self.intent == visible {
            self.mounted = visible;
        }
    }
}

/// Animated modal overlay.
///
/// Mount it once with [`AnimatedModal::mount`], feed new props with
/// [`AnimatedModal::update`], tick the shared [`AnimationDriver`] every frame,
/// and render through [`AnimatedModal::view`].
pub struct AnimatedModal {
    hit_id: HitId,
    props: AnimatedModalProps,
    visibility: AnimatedValue,
    latch: Rc<Cell<MountLatch>>,
    driver: AnimationDriver,
}

impl std::fmt::Debug for AnimatedModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedModal")
            .field("hit_id", &self.hit_id)
            .field("options", &self.props.options)
            .field("visibility", &self.visibility.get())
            .field("latch", &self.latch.get())
            .finish()
    }
}

impl AnimatedModal {
    /// Create the modal in the resting state for the initial intent: value
    /// 1 and mounted when visible, value 0 and unmounted otherwise.
    pub fn mount(props: AnimatedModalProps, driver: &AnimationDriver) -> Self {
        let visible = props.options.visible;
        Self {
            hit_id: HitId::new(MODAL_HIT_ID_COUNTER.fetch_add(1, Ordering::Relaxed)),
            visibility: AnimatedValue::new(if visible { 1.0 } else { 0.0 }),
            latch: Rc::new(Cell::new(MountLatch::new(visible))),
            props,
            driver: driver.clone(),
        }
    }

    /// Replace the props. Starts a transition when `visible` or the
    /// effective duration changed.
    pub fn update(&mut self, props: AnimatedModalProps) {
        let before = (self.props.options.visible, self.props.options.duration());
        self.props = props;
        let after = (self.props.options.visible, self.props.options.duration());
        if before != after {
            self.apply_visibility();
        }
    }

    /// Shorthand for [`Self::update`] with only `visible` changed.
    pub fn set_visible(&mut self, visible: bool) {
        let options = self.props.options.clone().visible(visible);
        let props = self.props.with_options(options);
        self.update(props);
    }

    fn apply_visibility(&mut self) {
        let visible = self.props.options.visible;
        let mut latch = self.latch.get();
        if visible {
            latch.show();
        } else {
            latch.hide();
        }
        self.latch.set(latch);

        let timing = Timing::to(if visible { 1.0 } else { 0.0 })
            .duration(self.props.options.duration())
            .easing(MODAL_EASING);
        let weak: Weak<Cell<MountLatch>> = Rc::downgrade(&self.latch);
        self.driver
            .start(&self.visibility, timing, move |end: TransitionEnd| {
                if !end.finished {
                    return;
                }
                let Some(latch) = weak.upgrade() else {
                    return;
                };
                let mut state = latch.get();
                state.settle(visible);
                latch.set(state);
                #[cfg(feature = "tracing")]
                tracing::debug!(visible, mounted = state.mounted(), "modal transition settled");
            });
    }

    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    pub fn props(&self) -> &AnimatedModalProps {
        &self.props
    }

    pub fn options(&self) -> &ModalOptions {
        &self.props.options
    }

    /// Whether content and dismiss layer are currently rendered.
    pub fn is_mounted(&self) -> bool {
        self.latch.get().mounted()
    }

    /// Current visibility in `[0, 1]`.
    pub fn visibility(&self) -> f64 {
        self.visibility.get()
    }

    /// Value the visibility is heading to, while a transition runs.
    pub fn target(&self) -> Option<f64> {
        self.visibility.target()
    }

    pub fn is_animating(&self) -> bool {
        self.visibility.is_animating()
    }

    /// Style derived from the current visibility and animation type.
    pub fn animated_style(&self) -> AnimatedStyle {
        derive_style(self.props.options.animation_type, self.visibility.get())
    }

    /// Style applied to the card: `None` with `no_animation`.
    pub fn content_style(&self) -> Option<AnimatedStyle> {
        (!self.props.options.no_animation).then(|| self.animated_style())
    }

    /// Untransformed card rectangle for `area`.
    pub fn card_rect(&self, area: Rect) -> Rect {
        let options = &self.props.options;
        let size = options.size.clamp(area.size());
        if size.is_empty() {
            return Rect::new(area.x, area.y, 0, 0);
        }
        options.card_position.layout().place(area, size)
    }

    /// Card rectangle after the animated style, clamped to `area`.
    pub fn content_rect(&self, area: Rect) -> Rect {
        let card = self.card_rect(area);
        match self.content_style() {
            Some(style) => footprint(area, card, style.project(card.size())),
            None => card,
        }
    }

    /// Handle an input event.
    ///
    /// `hit` is the hit-test result for mouse events, usually from the last
    /// rendered frame. Only the top modal should receive events.
    pub fn handle_event(
        &mut self,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> Option<ModalAction> {
        if !self.is_mounted() {
            return None;
        }

        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                if let Some((id, region, _)) = hit
                    && id == self.hit_id
                    && region == MODAL_HIT_BACKDROP
                {
                    self.props.press_backdrop();
                    return Some(ModalAction::BackdropPressed);
                }
            }
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
            }) if self.props.options.dismiss_on_escape => {
                self.props.press_backdrop();
                return Some(ModalAction::EscapePressed);
            }
            _ => {}
        }

        None
    }

    /// Widget view rendering `content` inside the modal.
    pub fn view<'a, C: Widget + ?Sized>(&'a self, content: &'a C) -> ModalView<'a, C> {
        ModalView {
            modal: self,
            content,
        }
    }
}

/// Center a `size` footprint on `card`, clamped inside `area`.
fn footprint(area: Rect, card: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    if width == 0 || height == 0 {
        return Rect::new(card.x, card.y, 0, 0);
    }
    // Doubled coordinates keep the center exact for odd sizes.
    let cx2 = card.x as i32 * 2 + card.width as i32;
    let cy2 = card.y as i32 * 2 + card.height as i32;
    let max_x = area.right().saturating_sub(width).max(area.x);
    let max_y = area.bottom().saturating_sub(height).max(area.y);
    let x = ((cx2 - width as i32) / 2).clamp(area.x as i32, max_x as i32);
    let y = ((cy2 - height as i32) / 2).clamp(area.y as i32, max_y as i32);
    Rect::new(x as u16, y as u16, width, height)
}

/// Borrowed render view of an [`AnimatedModal`] plus its content.
pub struct ModalView<'a, C: ?Sized> {
    modal: &'a AnimatedModal,
    content: &'a C,
}

impl<C: Widget + ?Sized> Widget for ModalView<'_, C> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "AnimatedModal",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height,
            visibility = self.modal.visibility(),
        )
        .entered();

        if area.is_empty() || !self.modal.is_mounted() {
            return;
        }
        let options = self.modal.options();
        let hit_id = self.modal.hit_id;

        // Dismiss layer, tinting whatever is underneath.
        let layer = BACKDROP_LAYER.container(area, Size::default());
        blend_bg_area(&mut frame.buffer, layer, options.backdrop.effective_color());
        frame.register_hit(layer, hit_id, MODAL_HIT_BACKDROP, 0);

        let content_area = self.modal.content_rect(area);
        if content_area.is_empty() {
            return;
        }
        if let Some(style) = options.style {
            set_style_area(&mut frame.buffer, content_area, style);
        }
        self.content.render(content_area, frame);
        if let Some(style) = self.modal.content_style() {
            fade_area(&mut frame.buffer, content_area, style.clamped_opacity());
        }
        frame.register_hit(content_area, hit_id, MODAL_HIT_CONTENT, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{AnimationVariant, ModalCardPosition, ModalSizeConstraints};
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn props(options: ModalOptions) -> AnimatedModalProps {
        AnimatedModalProps::new(options, || {})
    }

    #[test]
    fn latch_show_mounts_immediately() {
        let mut latch = MountLatch::new(false);
        latch.show();
        assert!(latch.mounted());
        assert!(latch.intent);
    }

    #[test]
    fn latch_hide_waits_for_settle() {
        let mut latch = MountLatch::new(true);
        latch.hide();
        assert!(latch.mounted());
        latch.settle(false);
        assert!(!latch.mounted());
    }

    #[test]
    fn latch_ignores_stale_settle() {
        let mut latch = MountLatch::new(true);
        latch.hide();
        latch.show();
        latch.settle(false);
        assert!(latch.mounted());
    }

    #[test]
    fn initial_state_follows_intent() {
        let driver = AnimationDriver::new();
        let shown = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        assert_eq!(shown.visibility(), 1.0);
        assert!(shown.is_mounted());
        assert!(!shown.is_animating());

        let hidden = AnimatedModal::mount(props(ModalOptions::new(false)), &driver);
        assert_eq!(hidden.visibility(), 0.0);
        assert!(!hidden.is_mounted());
    }

    #[test]
    fn unchanged_props_do_not_restart() {
        let driver = AnimationDriver::new();
        let mut modal = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        modal.update(props(ModalOptions::new(true).animation_type("vertical")));
        assert!(!modal.is_animating());
        assert_eq!(modal.options().animation_type, AnimationVariant::Vertical);
    }

    #[test]
    fn duration_change_retargets_same_intent() {
        let driver = AnimationDriver::new();
        let mut modal = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        modal.update(props(ModalOptions::new(true).duration_ms(500)));
        assert!(modal.is_animating());
        assert_eq!(modal.target(), Some(1.0));
        driver.settle(ms(16), 1000);
        assert!(modal.is_mounted());
        assert_eq!(modal.visibility(), 1.0);
    }

    #[test]
    fn hide_retargeted_by_duration_change_still_unmounts() {
        let driver = AnimationDriver::new();
        let mut modal = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        modal.set_visible(false);
        driver.tick(ms(100));
        assert_eq!(modal.target(), Some(0.0));

        // Replaces the running hide; the replaced one ends unfinished.
        modal.update(props(ModalOptions::new(false).duration_ms(600)));
        assert!(modal.is_mounted());
        assert_eq!(modal.target(), Some(0.0));

        driver.settle(ms(16), 1000);
        assert_eq!(modal.target(), None);
        assert_eq!(modal.visibility(), 0.0);
        assert!(!modal.is_mounted());
    }

    #[test]
    fn zero_duration_uses_default_and_is_not_a_change() {
        let driver = AnimationDriver::new();
        let mut modal = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        modal.update(props(ModalOptions::new(true).duration_ms(0)));
        assert!(!modal.is_animating());
        modal.update(props(ModalOptions::new(true).duration_ms(300)));
        assert!(!modal.is_animating());
    }

    #[test]
    fn no_animation_skips_style() {
        let driver = AnimationDriver::new();
        let modal = AnimatedModal::mount(
            props(ModalOptions::new(true).no_animation(true)),
            &driver,
        );
        assert!(modal.content_style().is_none());
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(modal.content_rect(area), modal.card_rect(area));
    }

    #[test]
    fn content_rect_grows_with_default_scale_but_stays_inside() {
        let driver = AnimationDriver::new();
        let mut modal = AnimatedModal::mount(
            props(ModalOptions::new(false).size(ModalSizeConstraints::fixed(20, 10))),
            &driver,
        );
        modal.set_visible(true);
        let area = Rect::new(0, 0, 40, 20);
        let rect = modal.content_rect(area);
        assert_eq!(rect, Rect::new(9, 4, 22, 11));
        assert!(area.contains_rect(&rect));
    }

    #[test]
    fn footprint_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 10);
        let card = Rect::new(0, 0, 4, 4);
        assert_eq!(footprint(area, card, Size::new(6, 6)), Rect::new(0, 0, 6, 6));
        assert_eq!(
            footprint(area, card, Size::new(40, 2)),
            Rect::new(0, 1, 10, 2)
        );
        assert!(footprint(area, card, Size::new(0, 3)).is_empty());
    }

    #[test]
    fn card_rect_for_top_and_bottom() {
        let driver = AnimationDriver::new();
        let size = ModalSizeConstraints::fixed(10, 4);
        let area = Rect::new(0, 0, 40, 20);
        let top = AnimatedModal::mount(
            props(ModalOptions::new(true).size(size).card_position(ModalCardPosition::Top)),
            &driver,
        );
        assert_eq!(top.card_rect(area), Rect::new(15, 2, 10, 4));
        let bottom = AnimatedModal::mount(
            props(ModalOptions::new(true).size(size).card_position("bottom")),
            &driver,
        );
        assert_eq!(bottom.card_rect(area), Rect::new(15, 14, 10, 4));
    }

    #[test]
    fn hit_ids_are_unique() {
        let driver = AnimationDriver::new();
        let a = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        let b = AnimatedModal::mount(props(ModalOptions::new(true)), &driver);
        assert_ne!(a.hit_id(), b.hit_id());
    }
}
