//! Unit tests for ev-rail.

use ev_core::{Color, Direction, GridPoint, Orientation, RailId};

use crate::{Rail, RailError, Sensor};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn vertical(x: i32, y0: i32, y1: i32) -> Rail {
    Rail::new(p(x, y0), p(x, y1), y0.abs_diff(y1), Color::BLUE).unwrap()
}

fn horizontal(y: i32, x0: i32, x1: i32) -> Rail {
    Rail::new(p(x0, y), p(x1, y), x0.abs_diff(x1), Color::RED).unwrap()
}

fn sensor(x: i32, y: i32, direction: Direction) -> Sensor {
    Sensor::new(p(x, y), RailId(0), direction, Color::BLACK)
}

/// Constrained-axis coordinate over `ticks + 1` states, starting with tick 0.
fn trace(rail: &Rail, mut s: Sensor, ticks: usize) -> Vec<i32> {
    let mut out = vec![rail.axis(s.position)];
    for _ in 0..ticks {
        s.step(rail);
        out.push(rail.axis(s.position));
    }
    out
}

// ── Rail construction ─────────────────────────────────────────────────────────

#[cfg(test)]
mod rail {
    use super::*;

    #[test]
    fn orientation_from_endpoints() {
        assert_eq!(vertical(3, 0, 4).orientation(), Orientation::Vertical);
        assert_eq!(horizontal(3, 0, 4).orientation(), Orientation::Horizontal);
    }

    #[test]
    fn length_must_match_span() {
        let err = Rail::new(p(0, 0), p(0, 3), 2, Color::BLACK).unwrap_err();
        assert_eq!(
            err,
            RailError::LengthMismatch { start: p(0, 0), end: p(0, 3), declared: 2, actual: 3 }
        );
    }

    #[test]
    fn diagonal_rejected() {
        let err = Rail::new(p(0, 0), p(2, 2), 2, Color::BLACK).unwrap_err();
        assert!(matches!(err, RailError::Diagonal { .. }));
    }

    #[test]
    fn reversed_endpoints_normalised() {
        let rail = Rail::new(p(5, 2), p(1, 2), 4, Color::BLACK).unwrap();
        assert_eq!(rail.start(), p(1, 2));
        assert_eq!(rail.end(), p(5, 2));
        assert_eq!((rail.lo(), rail.hi()), (1, 5));
    }

    #[test]
    fn zero_length_is_stationary() {
        let rail = Rail::new(p(2, 2), p(2, 2), 0, Color::BLACK).unwrap();
        assert!(rail.is_stationary());
        assert_eq!(rail, Rail::stationary(p(2, 2), Color::BLACK));
        assert_eq!(rail.cycle_length(), 1);
    }

    #[test]
    fn contains_segment_only() {
        let rail = horizontal(1, 2, 5);
        assert!(rail.contains(p(2, 1)));
        assert!(rail.contains(p(5, 1)));
        assert!(!rail.contains(p(6, 1)));
        assert!(!rail.contains(p(3, 2)));
    }
}

// ── Sensor validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn heading_must_match_orientation() {
        let rail = vertical(0, 0, 3);
        let err = sensor(0, 1, Direction::Left).validate_on(&rail).unwrap_err();
        assert_eq!(
            err,
            RailError::DirectionMismatch {
                direction:   Direction::Left,
                orientation: Orientation::Vertical,
            }
        );
        assert!(sensor(0, 1, Direction::Up).validate_on(&rail).is_ok());
    }

    #[test]
    fn position_must_be_on_rail() {
        let rail = horizontal(2, 0, 3);
        assert!(matches!(
            sensor(4, 2, Direction::Right).validate_on(&rail),
            Err(RailError::OffRail { .. })
        ));
        assert!(matches!(
            sensor(1, 3, Direction::Right).validate_on(&rail),
            Err(RailError::OffRail { .. })
        ));
    }

    #[test]
    fn stationary_rail_accepts_any_heading() {
        let rail = Rail::stationary(p(1, 1), Color::BLACK);
        assert!(sensor(1, 1, Direction::Up).validate_on(&rail).is_ok());
        assert!(sensor(1, 1, Direction::Left).validate_on(&rail).is_ok());
    }
}

// ── Motion rule ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn reflects_one_short_of_high_end() {
        let rail = vertical(4, 0, 2);
        let mut s = sensor(4, 2, Direction::Down);
        s.step(&rail);
        assert_eq!(s.position, p(4, 1));
        assert_eq!(s.direction, Direction::Up);
    }

    #[test]
    fn pauses_at_low_end() {
        let rail = horizontal(0, 3, 6);
        let mut s = sensor(3, 0, Direction::Left);
        s.step(&rail);
        assert_eq!(s.position, p(3, 0));
        assert_eq!(s.direction, Direction::Right);
    }

    #[test]
    fn mid_rail_start_heading_down() {
        // Rail y ∈ [0, 2], sensor starts at y = 1 heading Down.
        let rail = vertical(7, 0, 2);
        assert_eq!(trace(&rail, sensor(7, 1, Direction::Down), 6), vec![1, 2, 1, 0, 0, 1, 2]);
    }

    #[test]
    fn full_cycle_from_low_end() {
        let rail = horizontal(0, 0, 3);
        assert_eq!(
            trace(&rail, sensor(0, 0, Direction::Right), 7),
            vec![0, 1, 2, 3, 2, 1, 0, 0],
        );
    }

    #[test]
    fn stationary_never_moves() {
        let rail = Rail::stationary(p(2, 5), Color::BLACK);
        let s = sensor(2, 5, Direction::Down);
        assert_eq!(s.stepped(&rail), s);
    }

    #[test]
    fn fixed_coordinate_untouched() {
        let rail = horizontal(9, 0, 4);
        let mut s = sensor(0, 9, Direction::Right);
        for _ in 0..20 {
            s.step(&rail);
            assert_eq!(s.position.y, 9);
            assert!(rail.contains(s.position));
        }
    }

    #[test]
    fn cycle_length_returns_full_state() {
        for len in 1..8 {
            let rail = horizontal(0, 0, len);
            for start in 0..=len {
                for dir in [Direction::Left, Direction::Right] {
                    // (hi, heading low) is never revisited: the cycle passes
                    // hi only while heading high.
                    if start == len && dir == Direction::Left {
                        continue;
                    }
                    let s0 = sensor(start, 0, dir);
                    let mut s = s0;
                    for _ in 0..rail.cycle_length() {
                        s.step(&rail);
                    }
                    assert_eq!(s, s0, "len={len} start={start} dir={dir}");
                }
            }
        }
    }

    #[test]
    fn high_end_heading_low_merges_into_cycle() {
        let rail = horizontal(0, 0, 3);
        let a = sensor(3, 0, Direction::Left);
        let b = sensor(3, 0, Direction::Right);
        assert_eq!(a.stepped(&rail), b.stepped(&rail));
    }

    #[test]
    fn stepped_is_pure() {
        let rail = vertical(0, 0, 3);
        let s = sensor(0, 1, Direction::Down);
        let a = s.stepped(&rail);
        let b = s.stepped(&rail);
        assert_eq!(a, b);
        assert_eq!(s.position, p(0, 1));
    }
}
