//! Rail orientation and sensor heading, shared by every crate that moves or
//! reports sensors.

use std::str::FromStr;

use crate::EvError;

/// The axis a rail runs along.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Constant `y`; sensors move along `x`.
    #[default]
    Horizontal,
    /// Constant `x`; sensors move along `y`.
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical   => "vertical",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The way a sensor is currently heading along its rail.
///
/// `Right` and `Down` head towards the rail's high endpoint (`end`); `Left`
/// and `Up` head towards the low endpoint (`start`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The rail orientation this heading is valid on.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down    => Orientation::Vertical,
        }
    }

    /// `true` for `Right`/`Down` (towards the rail's `end`).
    #[inline]
    pub fn toward_end(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// The opposite heading on the same axis.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    /// Lower-case label, used in CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Up    => "up",
            Direction::Down  => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left"  => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up"    => Ok(Direction::Up),
            "down"  => Ok(Direction::Down),
            other   => Err(EvError::Parse(format!(
                "invalid direction {other:?}: expected left, right, up or down"
            ))),
        }
    }
}
