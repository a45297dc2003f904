use std::collections::HashMap;

use fractals_core::{evaluate, Complex, EscapeParams, EscapeResult, Julia, SampleGrid};
use fractals_render::{escape_color, scan, DisplaySurface, RecordingSurface, RenderError, WHITE};

#[test]
fn end_to_end_full_grid_scan() {
    let julia = Julia::new(Complex::new(-0.5, 0.0), EscapeParams::default());
    let grid = SampleGrid::default();
    let mut surface = RecordingSurface::new(600, 600).unwrap();
    // Every palette color is opaque, so a transparent pixel was never drawn.
    let untouched = [0, 0, 0, 0];
    surface.clear(untouched).unwrap();

    let stats = scan(&julia, &grid, &mut surface).unwrap();

    assert_eq!(stats.samples, 1_000_000);
    assert!(stats.elapsed.as_nanos() > 0);

    // 1000 samples per axis over 600 pixels touch every pixel at least once.
    surface.present().unwrap();
    let frame = surface.pop_presented().unwrap();
    assert_eq!(frame.pixels.len(), 600 * 600 * 4);
    let missed = frame
        .pixels
        .chunks_exact(4)
        .filter(|px| *px == untouched)
        .count();
    assert_eq!(missed, 0, "{missed} pixels were never drawn");
    assert_eq!(frame.pixel(0, 0), Some(WHITE));
}

#[test]
fn scan_matches_direct_evaluation() {
    let c = Complex::new(-0.8, 0.156);
    let julia = Julia::new(c, EscapeParams::default());
    let grid = SampleGrid::new(40).unwrap();
    let mut surface = RecordingSurface::new(40, 40).unwrap();

    scan(&julia, &grid, &mut surface).unwrap();

    // Later samples overwrite earlier ones that round to the same pixel.
    let mut expected = HashMap::new();
    for s in grid.samples() {
        let pixel = SampleGrid::to_pixel(s, 40, 40);
        expected.insert(pixel, escape_color(evaluate(s.x, s.y, c)));
    }
    for ((px, py), color) in expected {
        assert_eq!(surface.canvas().pixel(px, py), Some(color));
    }
}

#[test]
fn scan_is_deterministic() {
    let julia = Julia::default();
    let grid = SampleGrid::new(128).unwrap();

    let mut a = RecordingSurface::new(128, 128).unwrap();
    let mut b = RecordingSurface::new(128, 128).unwrap();
    scan(&julia, &grid, &mut a).unwrap();
    scan(&julia, &grid, &mut b).unwrap();

    assert_eq!(a.canvas(), b.canvas(), "scans must be deterministic");
}

/// A surface that fails after a fixed number of pixel writes.
struct FailingSurface {
    remaining: usize,
}

impl DisplaySurface for FailingSurface {
    fn width(&self) -> u32 {
        8
    }

    fn height(&self) -> u32 {
        8
    }

    fn clear(&mut self, _color: [u8; 4]) -> fractals_render::Result<()> {
        Ok(())
    }

    fn draw_pixel(&mut self, _x: i32, _y: i32, _color: [u8; 4]) -> fractals_render::Result<()> {
        if self.remaining == 0 {
            return Err(RenderError::Surface("device lost".to_string()));
        }
        self.remaining -= 1;
        Ok(())
    }

    fn present(&mut self) -> fractals_render::Result<()> {
        Ok(())
    }
}

#[test]
fn surface_failure_aborts_the_scan() {
    let julia = Julia::default();
    let grid = SampleGrid::new(8).unwrap();
    let mut surface = FailingSurface { remaining: 10 };

    let err = scan(&julia, &grid, &mut surface).unwrap_err();

    assert!(matches!(err, RenderError::Surface(_)));
    assert_eq!(err.to_string(), "display surface failure: device lost");
}

#[test]
fn initial_parameter_colors_origin() {
    let julia = Julia::default();
    let grid = SampleGrid::new(4).unwrap();
    let mut surface = RecordingSurface::new(4, 4).unwrap();

    scan(&julia, &grid, &mut surface).unwrap();

    assert_eq!(
        surface.canvas().pixel(0, 0),
        Some(escape_color(EscapeResult::Escaped(2)))
    );
}
