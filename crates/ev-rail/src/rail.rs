//! Axis-aligned rail a sensor is constrained to.

use ev_core::{Color, GridPoint, Orientation};

use crate::{RailError, RailResult};

/// A fixed, axis-aligned track between two grid points.
///
/// Endpoints are normalised on construction so that `start` is the low end
/// of the constrained axis and `end` the high end.  Immutable once built.
///
/// A rail with `length == 0` is *stationary*: `start == end` and the bound
/// sensor never moves.  Stationary rails report `Orientation::Horizontal`
/// and accept any sensor heading.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rail {
    start:       GridPoint,
    end:         GridPoint,
    length:      u32,
    orientation: Orientation,
    color:       Color,
}

impl Rail {
    /// Validate and build a rail.
    ///
    /// Fails if `length` differs from the Chebyshev distance between the
    /// endpoints, or if both coordinates change (a diagonal rail).
    pub fn new(start: GridPoint, end: GridPoint, length: u32, color: Color) -> RailResult<Self> {
        let actual = start.chebyshev(end);
        if actual != length {
            return Err(RailError::LengthMismatch { start, end, declared: length, actual });
        }
        if start.x != end.x && start.y != end.y {
            return Err(RailError::Diagonal { start, end });
        }

        let orientation = if start.y == end.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (start, end) = match orientation {
            Orientation::Horizontal if start.x > end.x => (end, start),
            Orientation::Vertical if start.y > end.y   => (end, start),
            _ => (start, end),
        };

        Ok(Self { start, end, length, orientation, color })
    }

    /// A zero-length rail pinned at `at`.
    pub fn stationary(at: GridPoint, color: Color) -> Self {
        Self {
            start:       at,
            end:         at,
            length:      0,
            orientation: Orientation::Horizontal,
            color,
        }
    }

    #[inline]
    pub fn start(&self) -> GridPoint {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GridPoint {
        self.end
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.length == 0
    }

    /// Low bound of the constrained coordinate.
    #[inline]
    pub fn lo(&self) -> i32 {
        self.axis(self.start)
    }

    /// High bound of the constrained coordinate.
    #[inline]
    pub fn hi(&self) -> i32 {
        self.axis(self.end)
    }

    /// The coordinate of `p` along this rail's axis.
    #[inline]
    pub fn axis(&self, p: GridPoint) -> i32 {
        match self.orientation {
            Orientation::Horizontal => p.x,
            Orientation::Vertical   => p.y,
        }
    }

    /// `p` with its constrained coordinate replaced by `c`.
    #[inline]
    pub fn with_axis(&self, p: GridPoint, c: i32) -> GridPoint {
        match self.orientation {
            Orientation::Horizontal => GridPoint { x: c, ..p },
            Orientation::Vertical   => GridPoint { y: c, ..p },
        }
    }

    /// `true` if `p` lies on the closed segment `[start, end]`.
    pub fn contains(&self, p: GridPoint) -> bool {
        let fixed_ok = match self.orientation {
            Orientation::Horizontal => p.y == self.start.y,
            Orientation::Vertical   => p.x == self.start.x,
        };
        let c = self.axis(p);
        fixed_ok && self.lo() <= c && c <= self.hi()
    }

    /// Ticks for a bound sensor to return to the same position *and*
    /// heading: `1` when stationary, otherwise `2 * length + 1`.
    #[inline]
    pub fn cycle_length(&self) -> u64 {
        if self.is_stationary() {
            1
        } else {
            2 * self.length as u64 + 1
        }
    }
}
