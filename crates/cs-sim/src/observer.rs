//! Simulation observer trait for progress reporting and data collection.

use cs_behavior::Population;
use cs_core::Step;

/// Per-step counters reported to [`SimObserver::on_step_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Agents processed this step (membership at step start).
    pub agents: usize,
    /// Module invocations that ran.
    pub modules_run: usize,
    /// Module invocations skipped for lack of capability.
    pub modules_skipped: usize,
}

/// Callbacks invoked by [`Sim::simulate`][crate::Sim::simulate] at step
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  None of them can mutate the
/// simulation: snapshots receive `&Population`, and the step loop does not
/// resume until the callback returns.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, summary: &StepSummary) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {} modules ran", summary.modules_run);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once the step's boundary phase has completed.
    fn on_step_end(&mut self, _step: Step, _summary: &StepSummary) {}

    /// Called after `on_step_end` on export-interval steps
    /// (`config.export_interval_steps`).
    ///
    /// Provides read-only access to every agent so that export writers can
    /// record kind, position and diameter without the sim knowing about any
    /// output format.
    fn on_snapshot(&mut self, _step: Step, _population: &Population) {}

    /// Called when a `simulate` call finishes.  `total_steps` is the total
    /// number of steps completed since the simulation was built.
    fn on_sim_end(&mut self, _total_steps: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `simulate` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
