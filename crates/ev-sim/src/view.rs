//! Read-only snapshot handed to rendering collaborators.

use ev_core::{Color, GridPoint, Room, Tick};
use ev_rail::{Rail, Sensor};

use crate::FOOTPRINT_RADIUS;

/// Everything a renderer needs to draw one tick: the room grid, rail
/// segments and sensor footprints.  Borrowed from a
/// [`Configuration`][crate::Configuration]; the core never draws anything.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationView<'a> {
    pub tick:    Tick,
    pub room:    Room,
    pub rails:   &'a [Rail],
    pub sensors: &'a [Sensor],
}

impl ConfigurationView<'_> {
    /// `(start, end, color)` for each rail, in rail order.
    pub fn rail_segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint, Color)> + '_ {
        self.rails.iter().map(|r| (r.start(), r.end(), r.color()))
    }

    /// Inclusive footprint rectangle `(top_left, bottom_right, color)` for
    /// each sensor, in sensor order.  May extend past the room edge.
    pub fn footprints(&self) -> impl Iterator<Item = (GridPoint, GridPoint, Color)> + '_ {
        let r = FOOTPRINT_RADIUS as i32;
        self.sensors.iter().map(move |s| {
            let p = s.position;
            (
                GridPoint::new(p.x - r, p.y - r),
                GridPoint::new(p.x + r, p.y + r),
                s.color,
            )
        })
    }
}
