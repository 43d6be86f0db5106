//! Per-tick coverage grids and the stacked volume.

use ev_core::{GridPoint, Room, Tick};
use ev_sim::ObservedSquares;

// ── CoverageGrid ──────────────────────────────────────────────────────────────

/// One tick's coverage: `width × height` booleans indexed `[x][y]`.
///
/// Stored flat, `x`-major (`index = x * height + y`), matching the order
/// `observed_squares` walks the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGrid {
    width:  u32,
    height: u32,
    cells:  Vec<bool>,
}

impl CoverageGrid {
    /// An all-uncovered grid the size of `room`.
    pub fn empty(room: Room) -> Self {
        Self {
            width:  room.width(),
            height: room.height(),
            cells:  vec![false; room.cell_count()],
        }
    }

    /// Mark every cell in `observed.covered`; the rest stay uncovered.
    pub fn from_observed(room: Room, observed: &ObservedSquares) -> Self {
        let mut grid = Self::empty(room);
        for &cell in &observed.covered {
            if let Some(i) = grid.index(cell) {
                grid.cells[i] = true;
            }
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `false` for cells outside the grid.
    #[inline]
    pub fn is_covered(&self, x: i32, y: i32) -> bool {
        self.index(GridPoint::new(x, y))
            .is_some_and(|i| self.cells[i])
    }

    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flat `x`-major cell slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, p: GridPoint) -> Option<usize> {
        let inside = p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height;
        inside.then(|| p.x as usize * self.height as usize + p.y as usize)
    }
}

// ── CoverageVolume ────────────────────────────────────────────────────────────

/// Coverage over one full period, indexed `[tick][x][y]`.
///
/// The tick axis is periodic: every tick accessor reduces its argument
/// modulo [`period`](Self::period).  Always holds at least one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageVolume {
    room:  Room,
    grids: Vec<CoverageGrid>,
}

impl CoverageVolume {
    /// Wrap already-assembled grids.  Callers guarantee `grids` is non-empty
    /// and every grid matches `room`.
    pub(crate) fn new(room: Room, grids: Vec<CoverageGrid>) -> Self {
        debug_assert!(!grids.is_empty());
        Self { room, grids }
    }

    /// Number of ticks along the time axis.
    #[inline]
    pub fn period(&self) -> u64 {
        self.grids.len() as u64
    }

    #[inline]
    pub fn room(&self) -> Room {
        self.room
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.room.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.room.height()
    }

    /// The tick axis wraps.  Spatial axes never do; wrapping them is a
    /// choice for the analysis library.
    #[inline]
    pub fn periodic_time(&self) -> bool {
        true
    }

    /// Grid at `tick`, taken modulo the period.
    #[inline]
    pub fn grid(&self, tick: Tick) -> &CoverageGrid {
        &self.grids[tick.phase(self.period()) as usize]
    }

    #[inline]
    pub fn grids(&self) -> &[CoverageGrid] {
        &self.grids
    }

    #[inline]
    pub fn is_covered(&self, tick: Tick, x: i32, y: i32) -> bool {
        self.grid(tick).is_covered(x, y)
    }

    /// Row-major `[tick][x][y]` 0/1 bytes, length `period · width · height`.
    pub fn to_dense(&self) -> Vec<u8> {
        self.grids
            .iter()
            .flat_map(|g| g.as_slice().iter().map(|&c| c as u8))
            .collect()
    }

    /// Cells no sensor observes at any tick of the period, in room order.
    pub fn never_covered(&self) -> Vec<GridPoint> {
        self.room
            .cells()
            .filter(|c| self.grids.iter().all(|g| !g.is_covered(c.x, c.y)))
            .collect()
    }

    /// `true` if every cell is observed at some tick.  A permanently
    /// unobserved cell is a trivial evasion path.
    pub fn is_eventually_observed(&self) -> bool {
        self.never_covered().is_empty()
    }
}
