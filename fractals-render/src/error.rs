use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("display surface failure: {0}")]
    Surface(String),

    #[error(transparent)]
    Core(#[from] fractals_core::CoreError),
}
