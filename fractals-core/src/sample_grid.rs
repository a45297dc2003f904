use crate::error::CoreError;

/// One point of the unit sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// The implicit grid of seeds covering `[0, 1) × [0, 1)`.
///
/// Coordinates are derived from integer indices (`x = i · step`) rather than
/// accumulated, so every axis always has exactly `steps_per_axis` samples.
/// Enumeration is nested with `x` as the outer axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    steps_per_axis: u32,
}

impl SampleGrid {
    pub const DEFAULT_STEPS_PER_AXIS: u32 = 1000;

    pub fn new(steps_per_axis: u32) -> crate::Result<Self> {
        if steps_per_axis == 0 {
            return Err(CoreError::InvalidGrid {
                reason: "steps per axis must be > 0".to_string(),
            });
        }
        Ok(Self { steps_per_axis })
    }

    pub fn steps_per_axis(&self) -> u32 {
        self.steps_per_axis
    }

    /// Distance between neighbouring samples on one axis.
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.steps_per_axis as f64
    }

    /// Total number of samples in one pass.
    pub fn len(&self) -> usize {
        self.steps_per_axis as usize * self.steps_per_axis as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coordinate of sample `index` on either axis.
    #[inline]
    pub fn coordinate(&self, index: u32) -> f64 {
        index as f64 * self.step()
    }

    /// Enumerate every sample: outer axis `x`, inner axis `y`.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.steps_per_axis).flat_map(move |ix| {
            let x = self.coordinate(ix);
            (0..self.steps_per_axis).map(move |iy| Sample {
                x,
                y: self.coordinate(iy),
            })
        })
    }

    /// Device pixel covering `sample` on a `width × height` surface:
    /// `(floor(x · width), floor(y · height))`.
    #[inline]
    pub fn to_pixel(sample: Sample, width: u32, height: u32) -> (i32, i32) {
        (
            (sample.x * width as f64).floor() as i32,
            (sample.y * height as f64).floor() as i32,
        )
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            steps_per_axis: Self::DEFAULT_STEPS_PER_AXIS,
        }
    }
}
