//! The `Configuration` aggregate: room, rails and sensors at one tick.

use ev_core::{GridPoint, RailId, Room, SensorId, Tick};
use ev_rail::{Rail, Sensor};

use crate::{ConfigurationView, PatrolObserver, SimError, SimResult};

/// Half-width of the closed square a sensor observes.  A sensor at `(x, y)`
/// covers every cell `(i, j)` with `|i - x| ≤ 1` and `|j - y| ≤ 1`.
pub const FOOTPRINT_RADIUS: u32 = 1;

// ── ObservedSquares ───────────────────────────────────────────────────────────

/// Every room cell at one tick, split by whether any sensor observes it.
///
/// Both lists follow room order: `x` outer, `y` inner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservedSquares {
    pub covered:   Vec<GridPoint>,
    pub uncovered: Vec<GridPoint>,
}

impl ObservedSquares {
    /// Total number of cells classified (`width · height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.covered.len() + self.uncovered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when no cell is left unobserved.
    #[inline]
    pub fn fully_covered(&self) -> bool {
        self.uncovered.is_empty()
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// One time-slice of the patrol.
///
/// Owns its rails and sensors outright, so `clone()` is a deep copy: stepping
/// a clone never moves the original's sensors.  Sensor `i` is bound to the
/// rail at index `i`, which its `rail` id also names; the rail and sensor
/// counts are equal.
///
/// Fields are private so the validation done in [`Configuration::new`] holds
/// for the lifetime of the value.  Build via [`Configuration::new`],
/// [`ConfigurationBuilder`][crate::ConfigurationBuilder], or the CSV loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    room:    Room,
    rails:   Vec<Rail>,
    sensors: Vec<Sensor>,
    tick:    Tick,
}

impl Configuration {
    /// Validate and assemble a configuration at tick zero.
    ///
    /// Every rail must carry exactly one sensor.  Rails are then stored in
    /// sensor order, so `rails()[i]` is the rail of `sensors()[i]` and each
    /// sensor's `rail` id is rewritten to `RailId(i)`.
    pub fn new(room: Room, rails: Vec<Rail>, mut sensors: Vec<Sensor>) -> SimResult<Self> {
        if rails.len() != sensors.len() {
            return Err(SimError::CountMismatch {
                rails:   rails.len(),
                sensors: sensors.len(),
            });
        }

        let mut owner: Vec<Option<SensorId>> = vec![None; rails.len()];
        for (i, sensor) in sensors.iter().enumerate() {
            let id = SensorId(i as u32);
            let rail = rails
                .get(sensor.rail.index())
                .ok_or(SimError::UnknownRail { sensor: id, rail: sensor.rail })?;
            if let Some(first) = owner[sensor.rail.index()] {
                return Err(SimError::RailShared { rail: sensor.rail, first, second: id });
            }
            owner[sensor.rail.index()] = Some(id);
            sensor
                .validate_on(rail)
                .map_err(|source| SimError::InvalidSensor { sensor: id, source })?;
        }

        // Equal counts and no sharing make the binding a permutation.
        let rails: Vec<Rail> = sensors.iter().map(|s| rails[s.rail.index()]).collect();
        for (i, sensor) in sensors.iter_mut().enumerate() {
            sensor.rail = RailId(i as u32);
        }

        Ok(Self { room, rails, sensors, tick: Tick::ZERO })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn room(&self) -> Room {
        self.room
    }

    #[inline]
    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    #[inline]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Ticks this configuration has been advanced since construction.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of rail/sensor pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn rail(&self, id: RailId) -> Option<&Rail> {
        self.rails.get(id.index())
    }

    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.get(id.index())
    }

    /// Read-only view for renderers.
    pub fn view(&self) -> ConfigurationView<'_> {
        ConfigurationView {
            tick:    self.tick,
            room:    self.room,
            rails:   &self.rails,
            sensors: &self.sensors,
        }
    }

    // ── State transition ──────────────────────────────────────────────────

    /// Advance every sensor one tick along its rail, in lock-step.
    pub fn move_all(&mut self) {
        let rails = &self.rails;
        for sensor in &mut self.sensors {
            let rail = &rails[sensor.rail.index()];
            sensor.step(rail);
        }
        self.tick = self.tick.next();
    }

    /// Advance `n` ticks, reporting each tick's state to `observer` before
    /// moving.  A replay of `period` ticks therefore snapshots ticks
    /// `t .. t + period`.
    pub fn run_ticks<O: PatrolObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            observer.on_snapshot(self);
            self.move_all();
        }
        observer.on_run_end(self.tick);
    }

    // ── Positions ─────────────────────────────────────────────────────────

    /// Sensor positions in sensor order.
    pub fn positions(&self) -> Vec<GridPoint> {
        self.sensors.iter().map(|s| s.position).collect()
    }

    /// `true` if sensor `i` sits at `positions[i]` for every `i`.
    ///
    /// Headings are ignored.  Both sides must have the same length; a
    /// mismatch is a caller bug.
    pub fn positions_match(&self, positions: &[GridPoint]) -> bool {
        debug_assert_eq!(self.sensors.len(), positions.len(), "position vector length mismatch");
        self.sensors.len() == positions.len()
            && self.sensors.iter().zip(positions).all(|(s, p)| s.position == *p)
    }

    // ── Coverage ──────────────────────────────────────────────────────────

    /// `true` if cell `(x, y)` falls inside at least one sensor's footprint.
    pub fn sensor_on_square(&self, x: i32, y: i32) -> bool {
        let cell = GridPoint::new(x, y);
        self.sensors
            .iter()
            .any(|s| s.position.within(cell, FOOTPRINT_RADIUS))
    }

    /// Partition every room cell into covered and uncovered at this tick.
    pub fn observed_squares(&self) -> ObservedSquares {
        let mut out = ObservedSquares {
            covered:   Vec::new(),
            uncovered: Vec::new(),
        };
        for cell in self.room.cells() {
            if self.sensor_on_square(cell.x, cell.y) {
                out.covered.push(cell);
            } else {
                out.uncovered.push(cell);
            }
        }
        out
    }
}
