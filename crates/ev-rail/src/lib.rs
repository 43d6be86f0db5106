//! `ev-rail` — rails, the sensors bound to them, and the motion rule.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`rail`]    | `Rail` — validated axis-aligned track                      |
//! | [`sensor`]  | `Sensor` — position + heading, `Sensor::step` motion rule  |
//! | [`error`]   | `RailError`, `RailResult<T>`                               |
//!
//! # Motion model
//!
//! Each tick a sensor moves one cell along its rail's constrained axis.  With
//! `lo = start.c` and `hi = end.c` on that axis:
//!
//! ```text
//! heading to hi:  c == hi  → c = hi - 1, turn around
//!                 else     → c + 1
//! heading to lo:  c == lo  → stay, turn around
//!                 else     → c - 1
//! ```
//!
//! The bounce is deliberately asymmetric: `hi` is occupied for one tick per
//! cycle, `lo` for two consecutive ticks.  A rail of length `L > 0` therefore
//! has a full-state cycle of `2L + 1` ticks ([`Rail::cycle_length`]).
//! Stationary rails (`L == 0`) never move their sensor.

pub mod error;
pub mod rail;
pub mod sensor;

#[cfg(test)]
mod tests;

pub use error::{RailError, RailResult};
pub use rail::Rail;
pub use sensor::Sensor;
