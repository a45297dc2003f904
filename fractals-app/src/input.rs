use std::collections::VecDeque;

use eframe::egui;

/// Abstract input understood by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    QuitRequested,
    RedrawRequested,
}

/// Non-blocking source of pending signals.
pub trait InputSource {
    /// Next pending signal, or `None` once the queue is empty.
    fn poll(&mut self) -> Option<Signal>;
}

impl InputSource for VecDeque<Signal> {
    fn poll(&mut self) -> Option<Signal> {
        self.pop_front()
    }
}

/// Translate this frame's egui input into signals.
///
/// Window close, `Q` and `Escape` quit; `Space` requests a redraw.
pub fn collect_signals(ctx: &egui::Context, out: &mut VecDeque<Signal>) {
    ctx.input(|i| {
        if i.viewport().close_requested()
            || i.key_pressed(egui::Key::Q)
            || i.key_pressed(egui::Key::Escape)
        {
            out.push_back(Signal::QuitRequested);
        }
        if i.key_pressed(egui::Key::Space) {
            out.push_back(Signal::RedrawRequested);
        }
    });
}
