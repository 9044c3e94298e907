//! Scripted show / press / hide run that prints every frame as text.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use flipmodal_core::event::{Event, MouseEvent};
use flipmodal_render::frame::Frame;
use flipmodal_runtime::{AnimationDriver, FrameClock};
use flipmodal_widgets::modal::{AnimatedModal, AnimatedModalProps, ModalAction, ModalOptions};
use flipmodal_widgets::{Panel, Widget};

/// Settings for one scripted run.
#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    pub width: u16,
    pub height: u16,
    /// Simulated (or real, with `realtime`) time between frames.
    pub frame_interval: Duration,
    /// Sleep between frames and measure deltas with a wall clock.
    pub realtime: bool,
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub backdrop_presses: usize,
    pub mounted_frames: usize,
}

/// Upper bound on frames per phase so a zero interval cannot spin forever.
const MAX_PHASE_FRAMES: usize = 10_000;

/// Run the script: show the modal, click the backdrop, let the press
/// callback hide it, and print frames until it unmounts.
///
/// The modal always starts hidden so the show transition is part of the
/// output. A `visible = true` in `options` is ignored with a warning.
pub fn run(
    options: ModalOptions,
    title: &str,
    body: &str,
    settings: RunSettings,
    out: &mut impl Write,
) -> io::Result<RunSummary> {
    if options.visible {
        tracing::warn!("config sets visible = true; the script always starts hidden");
    }
    let driver = AnimationDriver::new();
    let presses = Rc::new(Cell::new(0usize));
    let seen = Rc::clone(&presses);
    let props = AnimatedModalProps::new(options.visible(false), move || seen.set(seen.get() + 1));
    let mut modal = AnimatedModal::mount(props, &driver);
    let panel = Panel::new(body).title(title);

    let mut runner = Runner {
        driver: &driver,
        settings,
        clock: FrameClock::new(),
        summary: RunSummary::default(),
        elapsed: Duration::ZERO,
    };

    tracing::info!(
        animation = %modal.options().animation_type,
        position = %modal.options().card_position,
        duration_ms = modal.options().duration().as_millis() as u64,
        "starting modal script"
    );

    let mut last = runner.draw(&modal, &panel, out)?;

    modal.set_visible(true);
    last = runner.play(&modal, &panel, out)?.unwrap_or(last);

    // Click the top-left cell, which is always dismiss layer.
    let click = Event::Mouse(MouseEvent::left_down(0, 0));
    let action = modal.handle_event(&click, last.hit_test(0, 0));
    writeln!(out, "-- click (0, 0): {action:?}")?;

    // The owner reacts to the press by hiding the modal.
    if action == Some(ModalAction::BackdropPressed) {
        modal.set_visible(false);
    }
    runner.play(&modal, &panel, out)?;

    runner.summary.backdrop_presses = presses.get();
    tracing::info!(
        frames = runner.summary.frames,
        presses = runner.summary.backdrop_presses,
        "modal script finished"
    );
    Ok(runner.summary)
}

struct Runner<'d> {
    driver: &'d AnimationDriver,
    settings: RunSettings,
    clock: FrameClock,
    summary: RunSummary,
    elapsed: Duration,
}

impl Runner<'_> {
    /// Draw frames until the driver goes idle. Returns the last frame drawn.
    fn play(
        &mut self,
        modal: &AnimatedModal,
        panel: &Panel<'_>,
        out: &mut impl Write,
    ) -> io::Result<Option<Frame>> {
        let mut last = None;
        if self.settings.realtime {
            self.clock.reset();
            self.clock.tick();
        }
        let mut frames = 0;
        while self.driver.is_animating() && frames < MAX_PHASE_FRAMES {
            let delta = self.advance();
            self.elapsed += delta;
            self.driver.tick(delta);
            last = Some(self.draw(modal, panel, out)?);
            frames += 1;
        }
        Ok(last)
    }

    fn advance(&mut self) -> Duration {
        if self.settings.realtime {
            thread::sleep(self.settings.frame_interval);
            self.clock.tick()
        } else {
            self.settings.frame_interval
        }
    }

    fn draw(
        &mut self,
        modal: &AnimatedModal,
        panel: &Panel<'_>,
        out: &mut impl Write,
    ) -> io::Result<Frame> {
        let mut frame = Frame::with_hit_grid(self.settings.width, self.settings.height);
        let area = frame.area();
        modal.view(panel).render(area, &mut frame);

        self.summary.frames += 1;
        if modal.is_mounted() {
            self.summary.mounted_frames += 1;
        }
        writeln!(
            out,
            "-- frame {} t={}ms visibility={:.3} mounted={}",
            self.summary.frames,
            self.elapsed.as_millis(),
            modal.visibility(),
            modal.is_mounted(),
        )?;
        write_frame(&frame, out)?;
        Ok(frame)
    }
}

/// Print a frame as text. Glyphs faded below half opacity are hidden and
/// tinted empty cells show as `·`.
pub fn write_frame(frame: &Frame, out: &mut impl Write) -> io::Result<()> {
    let buffer = &frame.buffer;
    for y in 0..buffer.height() {
        let mut line = String::with_capacity(buffer.width() as usize);
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            let visible_glyph = cell.content != ' ' && cell.fg.a() >= 128;
            line.push(if visible_glyph {
                cell.content
            } else if cell.bg.a() > 0 {
                '·'
            } else {
                ' '
            });
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
