pub mod complex;
pub mod error;
pub mod fractal;
pub mod julia;
pub mod sample_grid;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use fractal::{EscapeParams, EscapeResult, EscapeTime};
pub use julia::{evaluate, Julia};
pub use sample_grid::{Sample, SampleGrid};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
