//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const SUMMARY_FILE: &str = "step_summaries.csv";

const SNAPSHOT_HEADER: [&str; 7] = ["step", "agent_id", "kind", "x", "y", "z", "diameter"];
const SUMMARY_HEADER: [&str; 4] = ["step", "agents", "modules_run", "modules_skipped"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    dir:       PathBuf,
    snapshots: Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        log::debug!("writing CSV output to {}", dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            snapshots,
            summaries,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.kind.to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.diameter.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.agents.to_string(),
            row.modules_run.to_string(),
            row.modules_skipped.to_string(),
        ])?;
        Ok(())
    }

    /// Flushes both files but keeps them open, so a later `simulate` call
    /// can keep appending.
    fn finish(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
