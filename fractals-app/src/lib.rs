pub mod driver;
pub mod error;
pub mod input;
pub mod pacing;

pub use driver::{legacy_component, DriverConfig, DriverState, FrameDriver, Reseed, TickOutcome};
pub use error::AppError;
pub use input::{collect_signals, InputSource, Signal};
pub use pacing::{Clock, FramePacer, SystemClock};
