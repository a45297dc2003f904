pub mod buffer;
pub mod error;
pub mod palette;
pub mod renderer;
pub mod surface;

pub use buffer::RenderBuffer;
pub use error::RenderError;
pub use palette::{escape_color, BLACK, WHITE};
pub use renderer::{scan, ScanStats};
pub use surface::{DisplaySurface, RecordingSurface};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
