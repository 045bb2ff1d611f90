//! `cs-output` — visualization export for the rust_cellsim framework.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                  | One row per                            |
//! |-----------------------|----------------------------------------|
//! | `agent_snapshots.csv` | agent, on every export-interval step   |
//! | `step_summaries.csv`  | step                                   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `cs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
