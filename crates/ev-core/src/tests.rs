//! Unit tests for ev-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RailId, SensorId};

    #[test]
    fn index_roundtrip() {
        let id = RailId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RailId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(SensorId(7).to_string(), "SensorId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{GridPoint, Room};

    #[test]
    fn chebyshev_distance() {
        let a = GridPoint::new(1, 1);
        assert_eq!(a.chebyshev(GridPoint::new(4, 2)), 3);
        assert_eq!(a.chebyshev(GridPoint::new(1, -3)), 4);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn within_is_closed() {
        let c = GridPoint::new(5, 5);
        assert!(c.within(GridPoint::new(6, 4), 1));
        assert!(!c.within(GridPoint::new(7, 5), 1));
    }

    #[test]
    fn zero_sized_room_rejected() {
        assert!(Room::new(0, 3).is_err());
        assert!(Room::new(3, 0).is_err());
    }

    #[test]
    fn room_contains() {
        let room = Room::new(4, 3).unwrap();
        assert!(room.contains(GridPoint::new(0, 0)));
        assert!(room.contains(GridPoint::new(3, 2)));
        assert!(!room.contains(GridPoint::new(4, 0)));
        assert!(!room.contains(GridPoint::new(0, -1)));
    }

    #[test]
    fn cells_iterate_x_outer() {
        let room = Room::new(2, 3).unwrap();
        let cells: Vec<(i32, i32)> = room.cells().map(|p| (p.x, p.y)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(room.cell_count(), 6);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(4)), 11);
    }

    #[test]
    fn phase_wraps() {
        assert_eq!(Tick(7).phase(5), 2);
        assert_eq!(Tick(10).phase(5), 0);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Orientation};

    #[test]
    fn orientation_of_heading() {
        assert_eq!(Direction::Left.orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Down.orientation(), Orientation::Vertical);
    }

    #[test]
    fn reversed_is_involution() {
        for d in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert_eq!(d.reversed().reversed(), d);
            assert_ne!(d.reversed().toward_end(), d.toward_end());
        }
    }

    #[test]
    fn parse() {
        assert_eq!("Up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" right ".parse::<Direction>().unwrap(), Direction::Right);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
    }
}

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn hex_roundtrip() {
        let c: Color = "#1a2B3c".parse().unwrap();
        assert_eq!(c, Color::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(c.to_string(), "#1a2b3c");
    }

    #[test]
    fn hash_prefix_optional() {
        assert_eq!("ff0000".parse::<Color>().unwrap(), Color::RED);
    }

    #[test]
    fn malformed_rejected() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }
}

#[cfg(test)]
mod error {
    use crate::{Color, Direction, EvError, Room};

    #[test]
    fn construction_errors_are_values() {
        assert!(matches!(Room::new(0, 3), Err(EvError::Config(_))));
        let e = "sideways".parse::<Direction>().unwrap_err();
        assert!(matches!(e, EvError::Parse(_)));
        assert_eq!(e.clone(), e);
        assert_ne!(e, "#zz0000".parse::<Color>().unwrap_err());
    }
}
