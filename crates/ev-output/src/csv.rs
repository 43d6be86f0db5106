//! CSV output backend.
//!
//! Writes up to two files in the configured output directory:
//! - `sensor_snapshots.csv`
//! - `coverage.csv`
//!
//! Each file is created, with its header row, on the first batch written to
//! it.  A stream that never receives rows leaves no file behind.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use ::csv::Writer;

use crate::writer::OutputWriter;
use crate::{CoverageRow, OutputResult, SensorSnapshotRow};

pub const SNAPSHOTS_FILE: &str = "sensor_snapshots.csv";
pub const COVERAGE_FILE:  &str = "coverage.csv";

const SNAPSHOT_HEADER: [&str; 5] = ["tick", "sensor_id", "x", "y", "direction"];
const COVERAGE_HEADER: [&str; 4] = ["tick", "x", "y", "covered"];

/// Writes simulation output to CSV files under one directory.
pub struct CsvWriter {
    dir:       PathBuf,
    snapshots: Option<Writer<File>>,
    coverage:  Option<Writer<File>>,
    finished:  bool,
}

impl CsvWriter {
    /// Target `dir`, which must already exist.  No file is opened yet.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )
            .into());
        }
        Ok(Self {
            dir:       dir.to_path_buf(),
            snapshots: None,
            coverage:  None,
            finished:  false,
        })
    }

    fn open(dir: &Path, name: &str, header: &[&str]) -> OutputResult<Writer<File>> {
        let mut w = Writer::from_path(dir.join(name))?;
        w.write_record(header)?;
        Ok(w)
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[SensorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        if self.snapshots.is_none() {
            self.snapshots = Some(Self::open(&self.dir, SNAPSHOTS_FILE, &SNAPSHOT_HEADER)?);
        }
        let Some(w) = &mut self.snapshots else {
            return Ok(());
        };
        for row in rows {
            w.write_record(&[
                row.tick.to_string(),
                row.sensor_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.direction.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        if self.coverage.is_none() {
            self.coverage = Some(Self::open(&self.dir, COVERAGE_FILE, &COVERAGE_HEADER)?);
        }
        let Some(w) = &mut self.coverage else {
            return Ok(());
        };
        for row in rows {
            w.write_record(&[
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.covered as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(w) = &mut self.snapshots {
            w.flush()?;
        }
        if let Some(w) = &mut self.coverage {
            w.flush()?;
        }
        Ok(())
    }
}
