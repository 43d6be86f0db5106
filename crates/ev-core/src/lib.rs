//! `ev-core` — foundational types for the `evasion` rail-patrol simulator.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RailId`, `SensorId`                                  |
//! | [`grid`]        | `GridPoint`, `Room`                                   |
//! | [`time`]        | `Tick`                                                |
//! | [`direction`]   | `Direction`, `Orientation`                            |
//! | [`color`]       | `Color` (display colour carried for renderers)        |
//! | [`error`]       | `EvError`, `EvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use direction::{Direction, Orientation};
pub use error::{EvError, EvResult};
pub use grid::{GridPoint, Room};
pub use ids::{RailId, SensorId};
pub use time::Tick;
