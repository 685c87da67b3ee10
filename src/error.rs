//! Domain errors for the rotation core.

use thiserror::Error;

/// Raised when a caller passes a value outside its documented integer domain.
///
/// These are programmer errors: the core never coerces or recovers from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("rotation must be in 1..=6, got {0}")]
    Rotation(u8),

    #[error("rotation offset must be in 0..=5, got {0}")]
    Offset(u8),

    #[error("court position must be in 1..=6, got {0}")]
    Position(u8),
}
