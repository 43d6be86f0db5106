//! Hand-placed sample configurations.

use ev_core::{Color, Direction, GridPoint};
use ev_sim::{ConfigurationBuilder, RailDescriptor, SensorDescriptor};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn rail(start: GridPoint, end: GridPoint, color: Color) -> RailDescriptor {
    RailDescriptor::new(start, end, start.chebyshev(end), color)
}

/// Two crossing rails in a 6×6 room.  Leaves corners dark.
pub fn cross() -> ConfigurationBuilder {
    ConfigurationBuilder::new(6, 6)
        .rail(rail(p(0, 2), p(5, 2), Color::RED))
        .rail(rail(p(3, 0), p(3, 5), Color::BLUE))
        .sensor(SensorDescriptor::new(p(0, 2), 0, Direction::Right, Color::RED))
        .sensor(SensorDescriptor::new(p(3, 5), 1, Direction::Up, Color::BLUE))
}

/// Four vertical rails of coprime-cycle lengths sweeping a 12×8 room.
pub fn comb() -> ConfigurationBuilder {
    let columns = [(1, 1, Color::RED), (4, 2, Color::GREEN), (7, 3, Color::BLUE), (10, 5, Color::BLACK)];
    let mut builder = ConfigurationBuilder::new(12, 8);
    for (i, &(x, len, color)) in columns.iter().enumerate() {
        builder = builder
            .rail(rail(p(x, 1), p(x, 1 + len), color))
            .sensor(SensorDescriptor::new(p(x, 1 + len), i, Direction::Down, color));
    }
    builder
}

/// A ring of four rails hugging the walls of a 7×7 room, plus a fixed
/// sentry in the centre.  Every cell is observed at some tick.
pub fn perimeter() -> ConfigurationBuilder {
    ConfigurationBuilder::new(7, 7)
        .rail(rail(p(1, 1), p(5, 1), Color::RED))
        .rail(rail(p(5, 1), p(5, 5), Color::GREEN))
        .rail(rail(p(1, 5), p(5, 5), Color::BLUE))
        .rail(rail(p(1, 1), p(1, 5), Color::BLACK))
        .rail(rail(p(3, 3), p(3, 3), Color::rgb(128, 128, 128)))
        .sensor(SensorDescriptor::new(p(1, 1), 0, Direction::Right, Color::RED))
        .sensor(SensorDescriptor::new(p(5, 1), 1, Direction::Down, Color::GREEN))
        .sensor(SensorDescriptor::new(p(5, 5), 2, Direction::Left, Color::BLUE))
        .sensor(SensorDescriptor::new(p(1, 5), 3, Direction::Up, Color::BLACK))
        .sensor(SensorDescriptor::new(p(3, 3), 4, Direction::Up, Color::rgb(128, 128, 128)))
}

/// All fixtures, by name.
pub fn all() -> Vec<(&'static str, ConfigurationBuilder)> {
    vec![("cross", cross()), ("comb", comb()), ("perimeter", perimeter())]
}
