//! Integer grid geometry: points and the patrolled room.

use std::fmt;

use crate::{EvError, EvResult};

/// An integer point on the patrol grid.
///
/// `x` grows to the right and `y` grows downwards, matching raster order used
/// by renderers.  Signed so that footprint arithmetic (`x - 1`) never wraps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (L∞) distance: `max(|dx|, |dy|)`.
    #[inline]
    pub fn chebyshev(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `true` when `other` lies within the closed square of half-width
    /// `radius` centred on `self`.
    #[inline]
    pub fn within(self, other: GridPoint, radius: u32) -> bool {
        self.chebyshev(other) <= radius
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Room ──────────────────────────────────────────────────────────────────────

/// The rectangular region being patrolled: unit cells `[0, width) × [0, height)`.
///
/// Immutable after construction; both dimensions are strictly positive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    width:  u32,
    height: u32,
}

impl Room {
    /// Create a room, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> EvResult<Self> {
        if width == 0 || height == 0 {
            return Err(EvError::Config(format!(
                "room dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of unit cells (`width · height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `p` names a cell inside the room.
    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Every cell in the room, `x` outer and `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| GridPoint { x, y }))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
