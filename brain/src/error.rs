use std::{error::Error, fmt};

/// Reasons a mechanic refuses to produce controls for a tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MechanicError {
    /// The deadline is now, already past, or not a number.
    InvalidTimeRemaining(f32),
    /// Some coordinate of the car or the target is NaN or infinite.
    NonFiniteInput,
}

impl Error for MechanicError {}

impl fmt::Display for MechanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanicError::InvalidTimeRemaining(t) => {
                write!(f, "time remaining must be positive, got {}", t)
            }
            MechanicError::NonFiniteInput => write!(f, "car physics or target are not finite"),
        }
    }
}
