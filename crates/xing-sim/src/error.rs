use thiserror::Error;
use xing_core::XingError;
use xing_motion::MotionError;
use xing_zone::ZoneError;

/// Errors surfaced while assembling or reconfiguring a simulation.
///
/// The tick loop itself is infallible; everything here is caught at build
/// time or when a caller retunes parameters mid-run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid simulation config: {0}")]
    Config(String),

    #[error("zone setup: {0}")]
    Zone(#[from] ZoneError),

    #[error("motion setup: {0}")]
    Motion(#[from] MotionError),

    #[error("core: {0}")]
    Core(#[from] XingError),
}

pub type SimResult<T> = Result<T, SimError>;
