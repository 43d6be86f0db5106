//! The `OutputWriter` trait and volume export.

use ev_complex::CoverageVolume;
use ev_core::Tick;
use tracing::debug;

use crate::{CoverageRow, OutputResult, SensorSnapshotRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write a batch of sensor snapshots.
    fn write_snapshots(&mut self, rows: &[SensorSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of cell coverage rows.
    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every cell of every tick of `volume`, in `[tick][x][y]` order, then
/// finish the writer.
pub fn write_volume<W: OutputWriter>(writer: &mut W, volume: &CoverageVolume) -> OutputResult<()> {
    for t in 0..volume.period() {
        let grid = volume.grid(Tick(t));
        let rows: Vec<CoverageRow> = volume
            .room()
            .cells()
            .map(|c| CoverageRow {
                tick:    t,
                x:       c.x,
                y:       c.y,
                covered: grid.is_covered(c.x, c.y),
            })
            .collect();
        writer.write_coverage(&rows)?;
    }
    debug!(period = volume.period(), "coverage volume written");
    writer.finish()
}
