//! Observer trait for replay progress and data collection.

use ev_core::Tick;

use crate::Configuration;

/// Callbacks invoked by [`Configuration::run_ticks`].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — sensor-0 tracer
///
/// ```rust,ignore
/// struct Trace(Vec<GridPoint>);
///
/// impl PatrolObserver for Trace {
///     fn on_snapshot(&mut self, config: &Configuration) {
///         self.0.push(config.sensors()[0].position);
///     }
/// }
/// ```
pub trait PatrolObserver {
    /// Called at the very start of each tick, before the snapshot.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with the state *before* sensors move.
    fn on_snapshot(&mut self, _config: &Configuration) {}

    /// Called once after the last tick; `final_tick` is the tick the
    /// configuration now sits at.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`PatrolObserver`] that does nothing.
pub struct NoopObserver;

impl PatrolObserver for NoopObserver {}
