//! patrol — runs the sample rail configurations end to end.
//!
//! For each fixture: detect the period (all fixtures in parallel), replay one
//! period into a coverage volume, and report whether every cell is observed.
//!
//! ```text
//! patrol [OUTPUT_DIR]
//! ```
//!
//! With `OUTPUT_DIR`, each fixture's sensor snapshots and coverage volume are
//! written as CSV under `OUTPUT_DIR/<fixture>/`.  Set `RUST_LOG=debug` for
//! period-search and replay detail.

mod fixtures;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ev_complex::Complex;
use ev_output::{write_volume, CsvWriter, PatrolOutputObserver};
use ev_sim::sweep::find_periods;
use ev_sim::{Configuration, PeriodSearch};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("patrol=info".parse()?),
        )
        .init();

    let output_dir = std::env::args().nth(1).map(PathBuf::from);
    let search = PeriodSearch::default();

    // ── Build fixtures ────────────────────────────────────────────────────────
    let mut names = Vec::new();
    let mut configs: Vec<Configuration> = Vec::new();
    for (name, builder) in fixtures::all() {
        let config = builder.build().with_context(|| format!("fixture {name}"))?;
        info!(fixture = name, room = %config.room(), sensors = config.len(), "built");
        names.push(name);
        configs.push(config);
    }

    // ── Periods (parallel across fixtures) ────────────────────────────────────
    let t0 = Instant::now();
    let periods = find_periods(&configs, search);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "period sweep done");

    // ── Coverage volumes ──────────────────────────────────────────────────────
    for ((name, config), period) in names.iter().zip(&configs).zip(periods) {
        let period = match period {
            Ok(p) => p,
            Err(e) => {
                warn!(fixture = name, error = %e, "skipping");
                continue;
            }
        };

        let volume = Complex::replay(config, period)?;
        let holes = volume.never_covered();
        info!(
            fixture = name,
            period,
            full_state_period = ?config.full_state_period(),
            never_covered = holes.len(),
            observed = holes.is_empty(),
            "coverage"
        );

        if let Some(dir) = &output_dir {
            let dir = dir.join(name);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;

            let mut obs = PatrolOutputObserver::new(CsvWriter::new(&dir)?);
            config.clone().run_ticks(period, &mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing sensor snapshots");
            }

            let mut writer = CsvWriter::new(&dir)?;
            write_volume(&mut writer, &volume).context("writing coverage volume")?;
            info!(fixture = name, dir = %dir.display(), "written");
        }
    }

    Ok(())
}
