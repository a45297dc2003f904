use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use fractals_app::{
    collect_signals, AppError, Clock, DriverConfig, DriverState, FrameDriver, Signal,
    SystemClock, TickOutcome,
};
use fractals_render::{RecordingSurface, RenderBuffer, RenderError};

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// eframe host for the frame driver.
///
/// A repaint runs a driver tick only once the previous tick's wait has
/// elapsed; earlier repaints just collect input. Every present lands in the
/// recording surface's queue and is shown on its own repaint.
struct FractalsApp<C = SystemClock> {
    driver: FrameDriver<StdRng>,
    surface: RecordingSurface,
    signals: VecDeque<Signal>,
    clock: C,
    /// Clock reading before which no tick may run.
    next_tick_at: Duration,
    /// A black frame is on screen ahead of the rendering tick.
    blanked: bool,
    texture: Option<egui::TextureHandle>,
    fatal: Rc<RefCell<Option<RenderError>>>,
}

impl<C: Clock> FractalsApp<C> {
    fn new(
        driver: FrameDriver<StdRng>,
        surface: RecordingSurface,
        fatal: Rc<RefCell<Option<RenderError>>>,
        clock: C,
    ) -> Self {
        Self {
            driver,
            surface,
            signals: VecDeque::new(),
            clock,
            next_tick_at: Duration::ZERO,
            blanked: false,
            texture: None,
            fatal,
        }
    }

    fn upload(&mut self, ctx: &egui::Context, frame: &RenderBuffer) {
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [frame.width as usize, frame.height as usize],
            &frame.pixels,
        );
        if let Some(tex) = self.texture.as_mut() {
            tex.set(image, egui::TextureOptions::NEAREST);
            return;
        }
        self.texture = Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
    }

    /// Show the next queued present, if any. Returns `true` if one was shown.
    fn show_next_frame(&mut self, ctx: &egui::Context) -> bool {
        match self.surface.pop_presented() {
            Some(frame) => {
                self.upload(ctx, &frame);
                true
            }
            None => false,
        }
    }

    /// Whether the next tick will draw a frame rather than quit or idle.
    fn tick_will_render(&self) -> bool {
        if self.driver.state() == DriverState::Terminated
            || self.signals.contains(&Signal::QuitRequested)
        {
            return false;
        }
        self.driver.redraw_pending() || self.signals.contains(&Signal::RedrawRequested)
    }

    /// Put a black frame on screen so the window stays dark during the scan.
    fn show_blank(&mut self, ctx: &egui::Context) {
        let canvas = self.surface.canvas();
        let blank = RenderBuffer::new(canvas.width, canvas.height);
        self.upload(ctx, &blank);
        self.blanked = true;
    }

    fn tick(&mut self, ctx: &egui::Context) {
        let frames_before = self.driver.frames_rendered();
        let outcome = self
            .driver
            .tick(&mut self.signals, &mut self.surface, &self.clock);

        // The driver's own blank present has already been on screen.
        if self.blanked && self.driver.frames_rendered() > frames_before {
            self.surface.pop_presented();
        }
        self.blanked = false;

        match outcome {
            Ok(TickOutcome::Continue { wait }) => {
                self.next_tick_at = self.clock.now() + wait;
                self.show_next_frame(ctx);
                if self.surface.pending() > 0 {
                    ctx.request_repaint();
                } else {
                    ctx.request_repaint_after(wait);
                }
            }
            Ok(TickOutcome::Terminated) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Err(err) => {
                error!("Frame failed: {err}");
                *self.fatal.borrow_mut() = Some(err);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// One repaint: collect input, then show a queued present, wait out the
    /// frame budget, blank the window, or tick, in that order of priority.
    fn frame(&mut self, ctx: &egui::Context) {
        collect_signals(ctx, &mut self.signals);

        let now = self.clock.now();
        if self.show_next_frame(ctx) {
            ctx.request_repaint();
        } else if now < self.next_tick_at {
            ctx.request_repaint_after(self.next_tick_at - now);
        } else if self.tick_will_render() && !self.blanked {
            self.show_blank(ctx);
            ctx.request_repaint();
        } else {
            self.tick(ctx);
        }

        self.paint(ctx);
    }

    fn paint(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                if let Some(ref tex) = self.texture {
                    let uv =
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }
            });
    }
}

impl<C: Clock> eframe::App for FractalsApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(frames = self.driver.frames_rendered(), "Window closed");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = DriverConfig::default();
    let surface = RecordingSurface::new(config.width, config.height)?;

    let seed = clock_seed();
    debug!(seed, "Seeding parameter RNG");
    let driver = FrameDriver::new(config, StdRng::seed_from_u64(seed));

    let viewport = egui::ViewportBuilder::default()
        .with_title("fractals")
        .with_inner_size([config.width as f32, config.height as f32])
        .with_decorations(false)
        .with_resizable(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let fatal = Rc::new(RefCell::new(None));
    let app_fatal = Rc::clone(&fatal);
    eframe::run_native(
        "fractals",
        options,
        Box::new(move |_cc| Ok(Box::new(FractalsApp::new(
            driver,
            surface,
            app_fatal,
            SystemClock::new(),
        )))),
    )?;

    let failure = fatal.borrow_mut().take();
    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
