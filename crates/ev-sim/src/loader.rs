//! CSV configuration loader.
//!
//! # CSV format
//!
//! Two files, one row per rail and one row per sensor.  Row order is the
//! rail/sensor order of the resulting configuration.
//!
//! ```csv
//! start_x,start_y,end_x,end_y,length,color
//! 2,0,2,6,6,#ff0000
//! 0,3,9,3,9,#0000ff
//! ```
//!
//! ```csv
//! x,y,rail,direction,color
//! 2,1,0,down,#ff0000
//! 0,3,1,right,#0000ff
//! ```
//!
//! `direction` is one of `left`, `right`, `up`, `down`; `color` is `#rrggbb`.
//! All geometric validation happens in
//! [`ConfigurationBuilder::build`][crate::ConfigurationBuilder::build].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use ev_core::{Color, Direction, GridPoint, Room};

use crate::{Configuration, ConfigurationBuilder, RailDescriptor, SensorDescriptor, SimError, SimResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RailRecord {
    start_x: i32,
    start_y: i32,
    end_x:   i32,
    end_y:   i32,
    length:  u32,
    color:   String,
}

#[derive(Deserialize)]
struct SensorRecord {
    x:         i32,
    y:         i32,
    rail:      usize,
    direction: String,
    color:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a configuration from a rail CSV and a sensor CSV.
pub fn load_configuration_csv(rails: &Path, sensors: &Path, room: Room) -> SimResult<Configuration> {
    let rail_file = std::fs::File::open(rails)?;
    let sensor_file = std::fs::File::open(sensors)?;
    let config = load_configuration_reader(rail_file, sensor_file, room)?;
    info!(rails = %rails.display(), sensors = %sensors.display(), count = config.len(), "configuration loaded");
    Ok(config)
}

/// Like [`load_configuration_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded fixtures.
pub fn load_configuration_reader<R: Read, S: Read>(
    rails:   R,
    sensors: S,
    room:    Room,
) -> SimResult<Configuration> {
    let rails = csv::Reader::from_reader(rails)
        .deserialize::<RailRecord>()
        .map(|row| -> SimResult<RailDescriptor> {
            let r = row.map_err(|e| SimError::Load(e.to_string()))?;
            Ok(RailDescriptor {
                start:  GridPoint::new(r.start_x, r.start_y),
                end:    GridPoint::new(r.end_x, r.end_y),
                length: r.length,
                color:  parse_color(&r.color)?,
            })
        })
        .collect::<SimResult<Vec<_>>>()?;

    let sensors = csv::Reader::from_reader(sensors)
        .deserialize::<SensorRecord>()
        .map(|row| -> SimResult<SensorDescriptor> {
            let r = row.map_err(|e| SimError::Load(e.to_string()))?;
            Ok(SensorDescriptor {
                position:  GridPoint::new(r.x, r.y),
                rail:      r.rail,
                direction: r
                    .direction
                    .parse::<Direction>()
                    .map_err(|e| SimError::Load(e.to_string()))?,
                color:     parse_color(&r.color)?,
            })
        })
        .collect::<SimResult<Vec<_>>>()?;

    ConfigurationBuilder::new(room.width(), room.height())
        .rails(rails)
        .sensors(sensors)
        .build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_color(s: &str) -> SimResult<Color> {
    s.parse::<Color>().map_err(|e| SimError::Load(e.to_string()))
}
