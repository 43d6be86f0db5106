//! Error types for ev-complex.

use ev_core::Room;
use ev_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComplexError {
    #[error("no snapshots recorded; a coverage volume needs at least one tick")]
    Empty,

    #[error("snapshot room {got} does not match volume room {expected}")]
    RoomMismatch { expected: Room, got: Room },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type ComplexResult<T> = Result<T, ComplexError>;
