//! Rail-bound sensor state and the per-tick motion rule.

use ev_core::{Color, Direction, GridPoint, RailId};

use crate::{Rail, RailError, RailResult};

/// A sensor's mutable state: where it is and which way it is heading.
///
/// The bound rail is referenced by [`RailId`]; the owning configuration keeps
/// the rail list, so cloning a sensor never aliases another configuration's
/// state.
///
/// The heading is stored explicitly.  It cannot be recovered from the
/// position alone because the sensor pauses at the low endpoint while it
/// turns around.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sensor {
    pub position:  GridPoint,
    pub rail:      RailId,
    pub direction: Direction,
    pub color:     Color,
}

impl Sensor {
    #[inline]
    pub fn new(position: GridPoint, rail: RailId, direction: Direction, color: Color) -> Self {
        Self { position, rail, direction, color }
    }

    /// Check that this sensor may ride on `rail`.
    ///
    /// On a moving rail the heading must match the rail's orientation and the
    /// position must lie on the segment.  Stationary rails accept anything.
    pub fn validate_on(&self, rail: &Rail) -> RailResult<()> {
        if rail.is_stationary() {
            return Ok(());
        }
        if self.direction.orientation() != rail.orientation() {
            return Err(RailError::DirectionMismatch {
                direction:   self.direction,
                orientation: rail.orientation(),
            });
        }
        if !rail.contains(self.position) {
            return Err(RailError::OffRail {
                position: self.position,
                start:    rail.start(),
                end:      rail.end(),
            });
        }
        Ok(())
    }

    /// Advance this sensor one tick along `rail`.
    pub fn step(&mut self, rail: &Rail) {
        if rail.is_stationary() {
            return;
        }

        let c = rail.axis(self.position);
        let next = if self.direction.toward_end() {
            if c == rail.hi() {
                self.direction = self.direction.reversed();
                rail.hi() - 1
            } else {
                c + 1
            }
        } else if c == rail.lo() {
            self.direction = self.direction.reversed();
            rail.lo()
        } else {
            c - 1
        };

        self.position = rail.with_axis(self.position, next);
    }

    /// The state one tick later, leaving `self` untouched.
    #[inline]
    pub fn stepped(&self, rail: &Rail) -> Sensor {
        let mut next = *self;
        next.step(rail);
        next
    }
}
