use std::time::{Duration, Instant};

use tracing::debug;

use fractals_core::{Complex, EscapeResult, EscapeTime, SampleGrid};

use crate::palette::escape_color;
use crate::surface::DisplaySurface;

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Counters for one full pass over the sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    pub samples: usize,
    pub escaped: usize,
    pub bounded: usize,
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Full-grid scan
// ---------------------------------------------------------------------------

/// Evaluate every grid sample and paint it onto `surface`.
///
/// Runs synchronously on the calling thread and never presents: the caller
/// decides when the frame becomes visible. Sample `(x, y)` lands on pixel
/// `(floor(x · width), floor(y · height))`; when several samples share a
/// pixel the one enumerated last wins.
pub fn scan<F, S>(fractal: &F, grid: &SampleGrid, surface: &mut S) -> crate::Result<ScanStats>
where
    F: EscapeTime,
    S: DisplaySurface + ?Sized,
{
    let start = Instant::now();
    let (width, height) = (surface.width(), surface.height());
    let mut stats = ScanStats::default();

    for sample in grid.samples() {
        let result = fractal.evaluate(Complex::new(sample.x, sample.y));
        match result {
            EscapeResult::Escaped(_) => stats.escaped += 1,
            EscapeResult::Bounded => stats.bounded += 1,
        }
        let (px, py) = SampleGrid::to_pixel(sample, width, height);
        surface.draw_pixel(px, py, escape_color(result))?;
    }

    stats.samples = stats.escaped + stats.bounded;
    stats.elapsed = start.elapsed();
    debug!(
        samples = stats.samples,
        escaped = stats.escaped,
        bounded = stats.bounded,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "Scan complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, WHITE};
    use crate::surface::RecordingSurface;
    use fractals_core::{EscapeParams, Julia};

    #[test]
    fn every_sample_is_counted() {
        let julia = Julia::new(Complex::new(-0.5, 0.0), EscapeParams::default());
        let grid = SampleGrid::new(50).unwrap();
        let mut surface = RecordingSurface::new(50, 50).unwrap();

        let stats = scan(&julia, &grid, &mut surface).unwrap();

        assert_eq!(stats.samples, 2500);
        assert_eq!(stats.escaped + stats.bounded, 2500);
        assert!(stats.escaped > 0);
        assert!(stats.bounded > 0);
    }

    #[test]
    fn scan_does_not_present() {
        let julia = Julia::default();
        let grid = SampleGrid::new(10).unwrap();
        let mut surface = RecordingSurface::new(10, 10).unwrap();

        scan(&julia, &grid, &mut surface).unwrap();

        assert_eq!(surface.present_count(), 0);
    }

    #[test]
    fn pixels_match_the_palette() {
        // c = 0: the unit disc is bounded, everything else escapes.
        let julia = Julia::new(Complex::ZERO, EscapeParams::default());
        let grid = SampleGrid::new(10).unwrap();
        let mut surface = RecordingSurface::new(10, 10).unwrap();

        scan(&julia, &grid, &mut surface).unwrap();

        let canvas = surface.canvas();
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(5, 5), Some(WHITE));
        // (0.9, 0.9) has |z| ≈ 1.27: 1.62 → 2.62, escaping at k = 2.
        assert_eq!(
            canvas.pixel(9, 9),
            Some(escape_color(EscapeResult::Escaped(2)))
        );
        assert_ne!(canvas.pixel(9, 9), Some(BLACK));
    }

    #[test]
    fn grid_coarser_than_surface_leaves_gaps() {
        let julia = Julia::default();
        let grid = SampleGrid::new(2).unwrap();
        let mut surface = RecordingSurface::new(4, 4).unwrap();
        surface.clear([1, 2, 3, 255]).unwrap();

        scan(&julia, &grid, &mut surface).unwrap();

        // Samples land on (0,0), (0,2), (2,0), (2,2) only.
        assert_eq!(surface.canvas().pixel(1, 1), Some([1, 2, 3, 255]));
        assert_ne!(surface.canvas().pixel(2, 2), Some([1, 2, 3, 255]));
    }
}
