use std::collections::VecDeque;

use crate::buffer::RenderBuffer;
use crate::error::RenderError;

/// Something the frame driver can paint on.
///
/// Pixels written with [`draw_pixel`](Self::draw_pixel) become visible only
/// after [`present`](Self::present). Any error is fatal for the run.
pub trait DisplaySurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole back buffer with `color`.
    fn clear(&mut self, color: [u8; 4]) -> crate::Result<()>;

    /// Write one pixel to the back buffer. Off-surface coordinates are clipped.
    fn draw_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) -> crate::Result<()>;

    /// Make the back buffer visible.
    fn present(&mut self) -> crate::Result<()>;
}

/// An offscreen surface that keeps a copy of every presented frame.
///
/// Presented frames queue up until the owner drains them, so a consumer
/// that can only show one image per repaint (a GUI texture, a test) still
/// sees each present in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    canvas: RenderBuffer,
    presented: VecDeque<RenderBuffer>,
    present_count: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            canvas: RenderBuffer::new(width, height),
            presented: VecDeque::new(),
            present_count: 0,
        })
    }

    /// The back buffer, including pixels not yet presented.
    pub fn canvas(&self) -> &RenderBuffer {
        &self.canvas
    }

    /// Number of presents since creation.
    pub fn present_count(&self) -> u64 {
        self.present_count
    }

    /// Frames presented but not yet drained.
    pub fn pending(&self) -> usize {
        self.presented.len()
    }

    /// Take the oldest presented frame.
    pub fn pop_presented(&mut self) -> Option<RenderBuffer> {
        self.presented.pop_front()
    }

    /// Take every presented frame, oldest first.
    pub fn drain_presented(&mut self) -> Vec<RenderBuffer> {
        self.presented.drain(..).collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn clear(&mut self, color: [u8; 4]) -> crate::Result<()> {
        self.canvas.fill(color);
        Ok(())
    }

    #[inline]
    fn draw_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) -> crate::Result<()> {
        self.canvas.put_pixel(x, y, color);
        Ok(())
    }

    fn present(&mut self) -> crate::Result<()> {
        self.presented.push_back(self.canvas.clone());
        self.present_count += 1;
        Ok(())
    }
}
