//! The `Complex` builder: turns a sequence of configuration snapshots into a
//! [`CoverageVolume`].

use ev_core::{Room, Tick};
use ev_sim::{Configuration, PatrolObserver, PeriodSearch};
use tracing::{debug, info};

use crate::{ComplexError, ComplexResult, CoverageGrid, CoverageVolume};

/// Accumulates per-tick coverage grids.
///
/// Feed it snapshots with [`record`](Self::record), or pass it as the
/// observer to [`Configuration::run_ticks`]; then call
/// [`finish`](Self::finish).  As an observer it cannot return errors, so the
/// first one is stored and surfaced by `finish` (or
/// [`take_error`](Self::take_error)).
#[derive(Debug, Default)]
pub struct Complex {
    room:       Option<Room>,
    grids:      Vec<CoverageGrid>,
    last_error: Option<ComplexError>,
}

impl Complex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Append the coverage of `config` at its current tick.
    ///
    /// Every snapshot must come from the same room as the first.
    pub fn record(&mut self, config: &Configuration) -> ComplexResult<()> {
        let room = config.room();
        match self.room {
            None => self.room = Some(room),
            Some(expected) if expected != room => {
                return Err(ComplexError::RoomMismatch { expected, got: room });
            }
            Some(_) => {}
        }
        self.grids.push(CoverageGrid::from_observed(room, &config.observed_squares()));
        Ok(())
    }

    /// Take the stored observer error (if any).
    pub fn take_error(&mut self) -> Option<ComplexError> {
        self.last_error.take()
    }

    /// Consume the builder and return the assembled volume.
    pub fn finish(mut self) -> ComplexResult<CoverageVolume> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        match self.room {
            Some(room) if !self.grids.is_empty() => {
                let volume = CoverageVolume::new(room, self.grids);
                info!(period = volume.period(), room = %room, "coverage volume assembled");
                Ok(volume)
            }
            _ => Err(ComplexError::Empty),
        }
    }

    // ── One-shot constructors ─────────────────────────────────────────────

    /// Build a volume from consecutive snapshots, one grid per snapshot.
    pub fn from_snapshots(snapshots: &[Configuration]) -> ComplexResult<CoverageVolume> {
        let mut complex = Complex::new();
        for config in snapshots {
            complex.record(config)?;
        }
        complex.finish()
    }

    /// Replay a private copy of `config` for `period` ticks and stack the
    /// coverage of each tick.  `config` itself is not advanced.
    pub fn replay(config: &Configuration, period: u64) -> ComplexResult<CoverageVolume> {
        let mut probe = config.clone();
        let mut complex = Complex::new();
        probe.run_ticks(period, &mut complex);
        complex.finish()
    }

    /// Find the period of `config` and replay exactly one period.
    pub fn from_configuration(config: &Configuration, search: PeriodSearch) -> ComplexResult<CoverageVolume> {
        let period = config.find_period_with(search)?;
        debug!(period, "replaying one period for coverage");
        Self::replay(config, period)
    }
}

impl PatrolObserver for Complex {
    fn on_snapshot(&mut self, config: &Configuration) {
        if let Err(e) = self.record(config) {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        debug!(final_tick = %final_tick, recorded = self.grids.len(), "replay finished");
    }
}
