//! Period search over many independent configurations.
//!
//! Configurations share no state, so with the `parallel` Cargo feature each
//! one is searched on its own Rayon task.  Each individual search is still the
//! sequential scan from [`Configuration::find_period_with`].

use crate::{Configuration, PeriodSearch, SimResult};

/// Find the period of every configuration, preserving input order.
pub fn find_periods(configs: &[Configuration], search: PeriodSearch) -> Vec<SimResult<u64>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(|c| c.find_period_with(search)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(|c| c.find_period_with(search)).collect()
    }
}
