use ev_core::{EvError, RailId, SensorId};
use ev_rail::RailError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("rail {rail}: {source}")]
    InvalidRail {
        rail:   RailId,
        #[source]
        source: RailError,
    },

    #[error("sensor {sensor}: {source}")]
    InvalidSensor {
        sensor: SensorId,
        #[source]
        source: RailError,
    },

    #[error("{rails} rails supplied for {sensors} sensors")]
    CountMismatch { rails: usize, sensors: usize },

    #[error("sensor {sensor} is bound to missing rail {rail}")]
    UnknownRail { sensor: SensorId, rail: RailId },

    #[error("rail {rail} is bound to both sensor {first} and sensor {second}")]
    RailShared {
        rail:   RailId,
        first:  SensorId,
        second: SensorId,
    },

    #[error("{0}")]
    Core(#[from] EvError),

    #[error("no period found within {max_iter} ticks")]
    PeriodNotFound { max_iter: u64 },

    #[error("configuration load error: {0}")]
    Load(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// `true` for errors raised while validating construction input.  These
    /// are never recovered; the caller must fix the input and rebuild.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidRail { .. }
                | SimError::InvalidSensor { .. }
                | SimError::CountMismatch { .. }
                | SimError::UnknownRail { .. }
                | SimError::RailShared { .. }
                | SimError::Core(EvError::Config(_))
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
