use ev_core::{Direction, GridPoint, Orientation};
use thiserror::Error;

/// Rail and sensor invariant violations, all detected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RailError {
    #[error("rail {start}→{end} declares length {declared} but spans {actual}")]
    LengthMismatch {
        start:    GridPoint,
        end:      GridPoint,
        declared: u32,
        actual:   u32,
    },

    #[error("rail {start}→{end} is not axis-aligned")]
    Diagonal { start: GridPoint, end: GridPoint },

    #[error("sensor heading {direction} is not valid on a {orientation} rail")]
    DirectionMismatch {
        direction:   Direction,
        orientation: Orientation,
    },

    #[error("sensor at {position} is not on rail {start}→{end}")]
    OffRail {
        position: GridPoint,
        start:    GridPoint,
        end:      GridPoint,
    },
}

pub type RailResult<T> = Result<T, RailError>;
