//! Unit tests for ev-complex.

use ev_core::{Color, Direction, GridPoint, Tick};
use ev_sim::{Configuration, ConfigurationBuilder, PeriodSearch, RailDescriptor, SensorDescriptor};

use crate::{Complex, ComplexError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

/// 5×5 room, vertical rail x=2, y ∈ [0, 2], sensor at (2, 1) heading Down.
/// Period 2: the sensor alternates (2, 1) → (2, 2) → (2, 1).
fn worked_example() -> Configuration {
    ConfigurationBuilder::new(5, 5)
        .rail(RailDescriptor::new(p(2, 0), p(2, 2), 2, Color::BLUE))
        .sensor(SensorDescriptor::new(p(2, 1), 0, Direction::Down, Color::RED))
        .build()
        .unwrap()
}

/// 3×3 room watched by one stationary sensor in the middle.
fn fully_watched() -> Configuration {
    ConfigurationBuilder::new(3, 3)
        .rail(RailDescriptor::new(p(1, 1), p(1, 1), 0, Color::BLUE))
        .sensor(SensorDescriptor::new(p(1, 1), 0, Direction::Up, Color::RED))
        .build()
        .unwrap()
}

fn snapshots(config: &Configuration, n: u64) -> Vec<Configuration> {
    let mut c = config.clone();
    (0..n)
        .map(|_| {
            let snap = c.clone();
            c.move_all();
            snap
        })
        .collect()
}

// ── Assembly ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembly {
    use super::*;

    #[test]
    fn replay_one_grid_per_tick() {
        let volume = Complex::replay(&worked_example(), 2).unwrap();
        assert_eq!(volume.period(), 2);
        assert_eq!((volume.width(), volume.height()), (5, 5));
        assert!(volume.periodic_time());

        // Tick 0: footprint x ∈ [1, 3], y ∈ [0, 2].
        assert!(volume.is_covered(Tick(0), 1, 0));
        assert!(!volume.is_covered(Tick(0), 2, 3));
        // Tick 1: footprint x ∈ [1, 3], y ∈ [1, 3].
        assert!(volume.is_covered(Tick(1), 2, 3));
        assert!(!volume.is_covered(Tick(1), 1, 0));
        assert_eq!(volume.grid(Tick(0)).covered_count(), 9);
    }

    #[test]
    fn replay_matches_snapshots() {
        let config = worked_example();
        let a = Complex::replay(&config, 2).unwrap();
        let b = Complex::from_snapshots(&snapshots(&config, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn replay_does_not_advance_original() {
        let config = worked_example();
        Complex::replay(&config, 7).unwrap();
        assert_eq!(config.tick(), Tick::ZERO);
        assert_eq!(config.positions(), vec![p(2, 1)]);
    }

    #[test]
    fn from_configuration_uses_detected_period() {
        let config = worked_example();
        let volume = Complex::from_configuration(&config, PeriodSearch::default()).unwrap();
        assert_eq!(volume.period(), config.find_period().unwrap());
    }

    #[test]
    fn period_failure_propagates() {
        let err = Complex::from_configuration(&worked_example(), PeriodSearch::new(1)).unwrap_err();
        assert!(matches!(err, ComplexError::Sim(ev_sim::SimError::PeriodNotFound { max_iter: 1 })));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(Complex::from_snapshots(&[]), Err(ComplexError::Empty)));
        assert!(matches!(Complex::replay(&worked_example(), 0), Err(ComplexError::Empty)));
    }

    #[test]
    fn mixed_rooms_rejected() {
        let mut complex = Complex::new();
        complex.record(&worked_example()).unwrap();
        let err = complex.record(&fully_watched()).unwrap_err();
        assert!(matches!(err, ComplexError::RoomMismatch { .. }));
        assert_eq!(complex.len(), 1);
    }

    #[test]
    fn observer_stores_first_error() {
        let mut complex = Complex::new();
        complex.record(&worked_example()).unwrap();
        let mut other = fully_watched();
        other.run_ticks(2, &mut complex);
        assert!(matches!(complex.take_error(), Some(ComplexError::RoomMismatch { .. })));
        assert!(complex.take_error().is_none());
    }
}

// ── Volume queries ────────────────────────────────────────────────────────────

#[cfg(test)]
mod volume {
    use super::*;

    #[test]
    fn tick_axis_wraps() {
        let volume = Complex::replay(&worked_example(), 2).unwrap();
        assert_eq!(volume.grid(Tick(2)), volume.grid(Tick(0)));
        assert_eq!(volume.grid(Tick(5)), volume.grid(Tick(1)));
    }

    #[test]
    fn dense_layout_is_tick_x_y() {
        let volume = Complex::replay(&worked_example(), 2).unwrap();
        let dense = volume.to_dense();
        assert_eq!(dense.len(), 2 * 5 * 5);
        // [tick 1][x 2][y 3] is covered, [tick 0][x 2][y 3] is not.
        assert_eq!(dense[25 + 2 * 5 + 3], 1);
        assert_eq!(dense[2 * 5 + 3], 0);
        assert!(dense.iter().all(|&b| b <= 1));
    }

    #[test]
    fn never_covered_cells() {
        let volume = Complex::replay(&worked_example(), 2).unwrap();
        let holes = volume.never_covered();
        // Columns 0 and 4 entirely, plus row 4 under the rail.
        assert_eq!(holes.len(), 13);
        assert!(holes.contains(&p(0, 0)));
        assert!(holes.contains(&p(2, 4)));
        assert!(!holes.contains(&p(2, 3)));
        assert!(!volume.is_eventually_observed());
    }

    #[test]
    fn fully_watched_room_is_observed() {
        let volume = Complex::from_configuration(&fully_watched(), PeriodSearch::default()).unwrap();
        assert_eq!(volume.period(), 1);
        assert!(volume.is_eventually_observed());
        assert_eq!(volume.grid(Tick(0)).covered_count(), 9);
    }

    #[test]
    fn out_of_room_cells_are_uncovered() {
        let volume = Complex::replay(&fully_watched(), 1).unwrap();
        assert!(!volume.is_covered(Tick(0), -1, 0));
        assert!(!volume.is_covered(Tick(0), 3, 1));
    }
}
