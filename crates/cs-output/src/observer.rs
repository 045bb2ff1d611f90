//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use cs_behavior::Population;
use cs_core::Step;
use cs_sim::{SimObserver, StepSummary};

use crate::row::{AgentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and step summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `simulate` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       Vec<AgentSnapshotRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::error!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, step: Step, summary: &StepSummary) {
        let result = self.writer.write_step_summary(&StepSummaryRow::new(step, summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, population: &Population) {
        self.rows.clear();
        self.rows.extend(population.states().map(|s| AgentSnapshotRow::from_state(step, s)));

        if !self.rows.is_empty() {
            let result = self.writer.write_snapshots(&self.rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _total_steps: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
