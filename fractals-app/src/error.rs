use thiserror::Error;

/// Fatal errors that end the process with a failure status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),

    #[error(transparent)]
    Render(#[from] fractals_render::RenderError),
}
