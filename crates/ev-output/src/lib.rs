//! `ev-output` — file hand-off for renderers and topology tooling.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `sensor_snapshots.csv`, `coverage.csv`         |
//!
//! Backends implement [`OutputWriter`].  Two ways to drive one:
//!
//! - [`PatrolOutputObserver`] implements `ev_sim::PatrolObserver` and writes
//!   every tick of a replay as it happens;
//! - [`write_volume`] writes an already-assembled
//!   [`CoverageVolume`](ev_complex::CoverageVolume).
//!
//! # Usage
//!
//! ```rust,ignore
//! use ev_output::{CsvWriter, PatrolOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PatrolOutputObserver::new(writer);
//! config.run_ticks(period, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PatrolOutputObserver;
pub use row::{CoverageRow, SensorSnapshotRow};
pub use writer::{write_volume, OutputWriter};
