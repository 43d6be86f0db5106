//! Fluent builder that turns plain descriptors into a validated
//! [`Configuration`].

use ev_core::{Color, Direction, GridPoint, RailId, Room, SensorId};
use ev_rail::{Rail, Sensor};
use tracing::debug;

use crate::{Configuration, SimError, SimResult};

/// Construction-time description of one rail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RailDescriptor {
    pub start:  GridPoint,
    pub end:    GridPoint,
    /// Must equal the Chebyshev distance between `start` and `end`.
    pub length: u32,
    pub color:  Color,
}

impl RailDescriptor {
    pub fn new(start: GridPoint, end: GridPoint, length: u32, color: Color) -> Self {
        Self { start, end, length, color }
    }
}

/// Construction-time description of one sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub position:  GridPoint,
    /// Index into the builder's rail list.
    pub rail:      usize,
    pub direction: Direction,
    pub color:     Color,
}

impl SensorDescriptor {
    pub fn new(position: GridPoint, rail: usize, direction: Direction, color: Color) -> Self {
        Self { position, rail, direction, color }
    }
}

/// Fluent builder for [`Configuration`].
///
/// # Required inputs
///
/// - room dimensions (`width`, `height`)
/// - one [`RailDescriptor`] per sensor
/// - one [`SensorDescriptor`] per rail, naming its rail by index
///
/// Nothing is validated until [`build`](Self::build); the first problem found
/// is returned and no configuration is produced.
///
/// # Example
///
/// ```rust,ignore
/// let config = ConfigurationBuilder::new(10, 10)
///     .rail(RailDescriptor::new(GridPoint::new(0, 4), GridPoint::new(9, 4), 9, Color::RED))
///     .sensor(SensorDescriptor::new(GridPoint::new(0, 4), 0, Direction::Right, Color::RED))
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    width:   u32,
    height:  u32,
    rails:   Vec<RailDescriptor>,
    sensors: Vec<SensorDescriptor>,
}

impl ConfigurationBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rails:   Vec::new(),
            sensors: Vec::new(),
        }
    }

    pub fn rail(mut self, rail: RailDescriptor) -> Self {
        self.rails.push(rail);
        self
    }

    pub fn rails(mut self, rails: impl IntoIterator<Item = RailDescriptor>) -> Self {
        self.rails.extend(rails);
        self
    }

    pub fn sensor(mut self, sensor: SensorDescriptor) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn sensors(mut self, sensors: impl IntoIterator<Item = SensorDescriptor>) -> Self {
        self.sensors.extend(sensors);
        self
    }

    /// Validate every descriptor and return a configuration at tick zero.
    pub fn build(self) -> SimResult<Configuration> {
        let room = Room::new(self.width, self.height)?;

        // ── Count check first: it is the cheapest and the most likely typo ──
        if self.rails.len() != self.sensors.len() {
            return Err(SimError::CountMismatch {
                rails:   self.rails.len(),
                sensors: self.sensors.len(),
            });
        }

        let rails = self
            .rails
            .iter()
            .enumerate()
            .map(|(i, d)| {
                Rail::new(d.start, d.end, d.length, d.color)
                    .map_err(|source| SimError::InvalidRail { rail: RailId(i as u32), source })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let sensors = self
            .sensors
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let rail = RailId(d.rail as u32);
                if d.rail >= rails.len() {
                    return Err(SimError::UnknownRail { sensor: SensorId(i as u32), rail });
                }
                Ok(Sensor::new(d.position, rail, d.direction, d.color))
            })
            .collect::<SimResult<Vec<_>>>()?;

        let config = Configuration::new(room, rails, sensors)?;
        debug!(room = %room, sensors = config.len(), "configuration built");
        Ok(config)
    }
}
