//! Period detection.
//!
//! # Search
//!
//! The period is the smallest `p > 0` such that stepping the configuration
//! `p` ticks reproduces the starting sensor positions, compared pairwise in
//! sensor order.  Headings are not compared, so a sensor passing back
//! through its start cell in the opposite direction already counts as a
//! repeat.
//!
//! The scan runs on a private clone; the caller's configuration is never
//! stepped, whether the search succeeds or fails.  Because `t` increases by
//! one each iteration, the first match is minimal.
//!
//! # Closed form
//!
//! [`Configuration::full_state_period`] is the LCM of every bound rail's
//! [`cycle_length`](ev_rail::Rail::cycle_length).  After that many ticks
//! positions *and* headings repeat, so the scan always stops at or before
//! it.  The scanned period need not divide it: a sensor can revisit its
//! start cell heading the other way mid-cycle.

use tracing::{debug, warn};

use crate::{Configuration, SimError, SimResult};

/// Bound for the brute-force period scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodSearch {
    /// Most ticks to advance before giving up.  Default: 100 000.
    pub max_iter: u64,
}

impl PeriodSearch {
    pub const DEFAULT_MAX_ITER: u64 = 100_000;

    pub fn new(max_iter: u64) -> Self {
        Self { max_iter }
    }
}

impl Default for PeriodSearch {
    fn default() -> Self {
        Self { max_iter: Self::DEFAULT_MAX_ITER }
    }
}

impl Configuration {
    /// [`find_period_with`](Self::find_period_with) using
    /// [`PeriodSearch::default`].
    pub fn find_period(&self) -> SimResult<u64> {
        self.find_period_with(PeriodSearch::default())
    }

    /// Smallest positive tick count after which every sensor is back at its
    /// current position.
    ///
    /// Returns [`SimError::PeriodNotFound`] if no repeat occurs within
    /// `search.max_iter` ticks.  Never retries with a larger bound.
    pub fn find_period_with(&self, search: PeriodSearch) -> SimResult<u64> {
        let initial = self.positions();
        let mut probe = self.clone();

        for t in 1..=search.max_iter {
            probe.move_all();
            if probe.positions_match(&initial) {
                debug!(period = t, sensors = self.len(), "period found");
                return Ok(t);
            }
        }

        warn!(max_iter = search.max_iter, sensors = self.len(), "period search exhausted");
        Err(SimError::PeriodNotFound { max_iter: search.max_iter })
    }

    /// LCM of every bound rail's full-state cycle, or `None` on `u64`
    /// overflow.  An empty configuration has full-state period `1`.
    pub fn full_state_period(&self) -> Option<u64> {
        self.sensors().iter().try_fold(1u64, |acc, s| {
            let cycle = self.rails()[s.rail.index()].cycle_length();
            lcm(acc, cycle)
        })
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Checked least common multiple of two positive integers.
fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
