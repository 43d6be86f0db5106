//! `PatrolOutputObserver<W>` — bridges `PatrolObserver` to an `OutputWriter`.

use ev_core::Tick;
use ev_sim::{Configuration, PatrolObserver};

use crate::row::{CoverageRow, SensorSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`PatrolObserver`] that writes sensor snapshots (and, optionally, cell
/// coverage) for every tick to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `PatrolObserver`
/// methods have no return value.  After `run_ticks` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct PatrolOutputObserver<W: OutputWriter> {
    writer:         W,
    write_coverage: bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> PatrolOutputObserver<W> {
    /// Observer that writes sensor snapshots only.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_coverage: false,
            last_error:     None,
        }
    }

    /// Also write the full per-cell coverage of every tick.
    pub fn with_coverage(mut self) -> Self {
        self.write_coverage = true;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PatrolObserver for PatrolOutputObserver<W> {
    fn on_snapshot(&mut self, config: &Configuration) {
        let tick = config.tick().0;
        let rows: Vec<SensorSnapshotRow> = config
            .sensors()
            .iter()
            .enumerate()
            .map(|(i, s)| SensorSnapshotRow {
                tick,
                sensor_id: i as u32,
                x:         s.position.x,
                y:         s.position.y,
                direction: s.direction,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        if self.write_coverage {
            let rows: Vec<CoverageRow> = config
                .room()
                .cells()
                .map(|c| CoverageRow {
                    tick,
                    x:       c.x,
                    y:       c.y,
                    covered: config.sensor_on_square(c.x, c.y),
                })
                .collect();
            let result = self.writer.write_coverage(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
