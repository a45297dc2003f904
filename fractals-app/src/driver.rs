use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use fractals_core::{Complex, EscapeParams, Julia, SampleGrid};
use fractals_render::{scan, DisplaySurface, BLACK};

use crate::input::{InputSource, Signal};
use crate::pacing::{Clock, FramePacer};

/// Largest value of the C library's `rand()` on glibc.
const RAND_MAX: u32 = i32::MAX as u32;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How a new parameter is drawn after each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reseed {
    /// `-1 + rand() / (RAND_MAX / 2)` in integer arithmetic: every component
    /// is `-1.0` or `0.0` (each about half the time) and, for the top two
    /// draws only, `1.0`.
    #[default]
    Legacy,
    /// Independent uniform draws on `[-1, 1)`.
    Uniform,
}

/// Everything the frame loop needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub grid: SampleGrid,
    pub params: EscapeParams,
    pub reseed: Reseed,
    pub initial_c: Complex,
}

impl DriverConfig {
    pub const WINDOW_SIZE: u32 = 600;
    pub const TARGET_FPS: u32 = 30;
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            width: Self::WINDOW_SIZE,
            height: Self::WINDOW_SIZE,
            target_fps: Self::TARGET_FPS,
            grid: SampleGrid::default(),
            params: EscapeParams::default(),
            reseed: Reseed::default(),
            initial_c: Julia::initial_c(),
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No frame in progress.
    Idle,
    /// A frame is being scanned and presented within the current tick.
    Rendering,
    /// Quit was requested; every further tick is a no-op.
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep going; block for `wait` before the next tick.
    Continue { wait: Duration },
    Terminated,
}

/// Owns the fractal parameter and decides when to recompute and present.
///
/// Generic over the random source so tests can inject a seeded or mock RNG.
#[derive(Debug)]
pub struct FrameDriver<R> {
    config: DriverConfig,
    pacer: FramePacer,
    rng: R,
    c: Complex,
    redraw: bool,
    state: DriverState,
    last_tick: Duration,
    frames: u64,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(config: DriverConfig, rng: R) -> Self {
        Self {
            pacer: FramePacer::from_fps(config.target_fps),
            c: config.initial_c,
            config,
            rng,
            redraw: true,
            state: DriverState::Idle,
            last_tick: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The parameter the next frame will be drawn with.
    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Start time of the most recent tick, as read from the clock.
    pub fn last_tick(&self) -> Duration {
        self.last_tick
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Run one iteration of the frame loop.
    ///
    /// Drains `input`, stops if quit was requested, renders a frame if one
    /// is due, and reports how long to wait before the next tick. Signals
    /// that arrive while a frame is being drawn stay queued until the next
    /// call.
    pub fn tick<I, S, C>(
        &mut self,
        input: &mut I,
        surface: &mut S,
        clock: &C,
    ) -> fractals_render::Result<TickOutcome>
    where
        I: InputSource + ?Sized,
        S: DisplaySurface + ?Sized,
        C: Clock + ?Sized,
    {
        if self.state == DriverState::Terminated {
            return Ok(TickOutcome::Terminated);
        }
        self.last_tick = clock.now();

        let mut quit = false;
        while let Some(signal) = input.poll() {
            match signal {
                Signal::QuitRequested => quit = true,
                Signal::RedrawRequested => self.redraw = true,
            }
        }
        if quit {
            self.state = DriverState::Terminated;
            info!(frames = self.frames, "Quit requested");
            return Ok(TickOutcome::Terminated);
        }

        if self.redraw {
            self.render_frame(surface)?;
        }

        let elapsed = clock.now().saturating_sub(self.last_tick);
        Ok(TickOutcome::Continue {
            wait: self.pacer.wait_for(elapsed),
        })
    }

    /// Tick until quit, sleeping between ticks. Returns the number of frames drawn.
    pub fn run<I, S, C>(
        &mut self,
        input: &mut I,
        surface: &mut S,
        clock: &C,
    ) -> fractals_render::Result<u64>
    where
        I: InputSource + ?Sized,
        S: DisplaySurface + ?Sized,
        C: Clock + ?Sized,
    {
        loop {
            match self.tick(input, surface, clock)? {
                TickOutcome::Continue { wait } => clock.sleep(wait),
                TickOutcome::Terminated => return Ok(self.frames),
            }
        }
    }

    fn render_frame<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> fractals_render::Result<()> {
        self.state = DriverState::Rendering;

        // Blank frame first: the screen flashes black before each fractal.
        surface.clear(BLACK)?;
        surface.present()?;

        let julia = Julia::new(self.c, self.config.params);
        let stats = scan(&julia, &self.config.grid, surface)?;
        surface.present()?;

        let drawn = self.c;
        self.c = self.next_parameter();
        self.redraw = false;
        self.frames += 1;
        self.state = DriverState::Idle;

        debug!(
            frame = self.frames,
            c = %drawn,
            next_c = %self.c,
            scan_ms = stats.elapsed.as_millis() as u64,
            "Frame presented"
        );
        Ok(())
    }

    fn next_parameter(&mut self) -> Complex {
        match self.config.reseed {
            Reseed::Legacy => {
                let re = legacy_component(self.rng.gen_range(0..=RAND_MAX));
                let im = legacy_component(self.rng.gen_range(0..=RAND_MAX));
                Complex::new(re, im)
            }
            Reseed::Uniform => Complex::new(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
            ),
        }
    }
}

/// `-1.0 + draw / (RAND_MAX / 2)` with the division done on integers.
#[inline]
pub fn legacy_component(draw: u32) -> f64 {
    -1.0 + f64::from(draw / (RAND_MAX / 2))
}
