//! `ev-complex` — the space-time coverage volume.
//!
//! Replays a configuration for one full period and stacks each tick's
//! covered/uncovered partition into a `period × width × height` boolean
//! volume.  The tick axis wraps (tick `period` is tick `0` again); the
//! spatial axes do not.
//!
//! This crate only assembles the raw tensor.  Simplicial structure,
//! adjacency between slices and homology are the job of an external
//! topological-analysis library fed from [`CoverageVolume::to_dense`].
//!
//! ```text
//! Configuration ──find_period──► p
//!      │
//!      └─clone──run_ticks(p, &mut Complex)──► CoverageVolume
//!                   on_snapshot → observed_squares → CoverageGrid
//! ```

pub mod complex;
pub mod error;
pub mod volume;

#[cfg(test)]
mod tests;

pub use complex::Complex;
pub use error::{ComplexError, ComplexResult};
pub use volume::{CoverageGrid, CoverageVolume};
