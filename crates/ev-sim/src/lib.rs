//! `ev-sim` — the configuration aggregate and everything that runs it.
//!
//! A [`Configuration`] is one time-slice of the patrol: the room, every rail
//! and every sensor.  [`Configuration::move_all`] advances it by one tick.
//!
//! ```text
//! build    ConfigurationBuilder / loader  ─►  Configuration (validated)
//! period   find_period(): step a private copy until the position vector
//!          repeats, at most PeriodSearch::max_iter ticks
//! replay   run_ticks(period, observer): on_snapshot at every tick, then move
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | [`sweep::find_periods`] runs on Rayon's thread pool.     |
//! | `serde`    | Serde derives on core, rail and search-config types.     |
//!
//! # Quick-start
//!
//! ```rust
//! use ev_core::{Color, Direction, GridPoint};
//! use ev_sim::{ConfigurationBuilder, RailDescriptor, SensorDescriptor};
//!
//! let config = ConfigurationBuilder::new(5, 5)
//!     .rail(RailDescriptor::new(GridPoint::new(2, 0), GridPoint::new(2, 2), 2, Color::BLUE))
//!     .sensor(SensorDescriptor::new(GridPoint::new(2, 1), 0, Direction::Down, Color::RED))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.find_period().unwrap(), 2);
//! ```

pub mod builder;
pub mod configuration;
pub mod error;
pub mod loader;
pub mod observer;
pub mod period;
pub mod sweep;
pub mod view;


pub use builder::{ConfigurationBuilder, RailDescriptor, SensorDescriptor};
pub use configuration::{Configuration, ObservedSquares, FOOTPRINT_RADIUS};
pub use error::{SimError, SimResult};
pub use loader::{load_configuration_csv, load_configuration_reader};
pub use observer::{NoopObserver, PatrolObserver};
pub use period::PeriodSearch;
pub use view::ConfigurationView;
