use thiserror::Error;

/// Failures surfaced to whoever asked for a mesh rebuild.
///
/// Camera and widget problems have no variant here: those inputs are clamped
/// on the way in, and the eye can never reach the look-at target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReliefError {
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("height field {width}x{height} is too small to mesh (need at least 2x2)")]
    GridTooSmall { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ReliefError>;
