//! Plain data row types written by output backends.

use ev_core::Direction;

/// One sensor's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshotRow {
    pub tick:      u64,
    pub sensor_id: u32,
    pub x:         i32,
    pub y:         i32,
    pub direction: Direction,
}

/// Coverage of one room cell at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRow {
    pub tick:    u64,
    pub x:       i32,
    pub y:       i32,
    pub covered: bool,
}
