//! The `Sim` struct and its step loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cs_behavior::{BehaviorError, Population, StepContext};
use cs_core::{BoundaryPolicy, SimClock, SimConfig, Step};

use crate::{SimError, SimObserver, SimResult, StepSummary};

// ── Scheduler state ───────────────────────────────────────────────────────────

/// Lifecycle of the scheduler.
///
/// `Idle` until the first `simulate` call, `Stepping` while one runs, `Done`
/// after it returns.  `simulate` may be called again from `Done`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Stepping,
    Done,
}

/// What to do when a module needs a capability its agent's kind lacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Skip the module for that agent.  Mixed populations rely on this.
    #[default]
    Skip,
    /// Abort the step with `BehaviorError::CapabilityMismatch`.
    Error,
}

/// Cloneable flag that stops a running `simulate` at the next step boundary.
///
/// Every `simulate` call re-arms the flag when it starts.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the population, the clock and the boundary policy, and hands each
/// module an explicit [`StepContext`] plus its agent's RNG; there is no
/// process-wide "active simulation".
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Every agent, in insertion order.  Agents may be appended between
    /// `simulate` calls.
    pub population: Population,

    pub(crate) config:   SimConfig,
    pub(crate) clock:    SimClock,
    pub(crate) boundary: BoundaryPolicy,
    pub(crate) mismatch: MismatchPolicy,
    pub(crate) state:    SchedulerState,
    pub(crate) cancel:   CancelHandle,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Total steps completed across all `simulate` calls.
    pub fn current_step(&self) -> Step {
        self.clock.current_step
    }

    pub fn boundary(&self) -> &BoundaryPolicy {
        &self.boundary
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Handle for stopping a run from elsewhere (another thread, a signal
    /// handler, an observer).
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the steps remaining until `config.total_steps`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.end_step().0.saturating_sub(self.clock.current_step.0);
        self.simulate(remaining, observer)
    }

    /// Run exactly `num_steps` steps from the current position.
    ///
    /// Calling this twice with `k` and `m` is equivalent to one call with
    /// `k + m`.  A cancelled run stops between steps and still returns `Ok`.
    /// On a behavior error the rest of that step's behaviors are skipped, but
    /// the step still counts: positions are clamped and the clock advances
    /// before the error is returned, so a later call never repeats it.
    /// `on_step_end` is not called for the failed step.
    pub fn simulate<O: SimObserver>(&mut self, num_steps: u64, observer: &mut O) -> SimResult<()> {
        self.state = SchedulerState::Stepping;
        self.cancel.reset();
        let start = self.clock.current_step;
        log::info!(
            "simulating {num_steps} steps from {start} ({} agents)",
            self.population.len()
        );

        let mut result = Ok(());
        for _ in 0..num_steps {
            if self.cancel.is_cancelled() {
                log::info!("cancelled at {}", self.clock.current_step);
                break;
            }
            if let Err(e) = self.step(observer) {
                result = Err(e);
                break;
            }
        }

        self.state = SchedulerState::Done;
        log::info!(
            "finished {} steps, clock at {}",
            self.clock.current_step - start,
            self.clock
        );
        observer.on_sim_end(self.clock.current_step);
        result
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_step;
        observer.on_step_start(now);

        // ── Phase 1: behaviors ────────────────────────────────────────────
        let summary = match self.behavior_phase(now) {
            Ok(summary) => summary,
            Err(e) => {
                // Agents run before the failure keep their moves; bound them
                // and consume the step.
                self.population.apply_bounds(&self.boundary);
                self.clock.advance();
                log::warn!("{now} aborted: {e}");
                return Err(e);
            }
        };

        // ── Phase 2: boundary enforcement ─────────────────────────────────
        //
        // Runs for every agent only after every module of the step has run.
        self.population.apply_bounds(&self.boundary);

        observer.on_step_end(now, &summary);
        if now.is_on_interval(self.config.export_interval_steps) {
            log::debug!("snapshot at {now}");
            observer.on_snapshot(now, &self.population);
        }

        self.clock.advance();
        Ok(())
    }

    /// Run every module of every agent present at step start.
    fn behavior_phase(&mut self, now: Step) -> SimResult<StepSummary> {
        // Membership is fixed for the step even if the container grows.
        let count = self.population.len();
        let ctx = StepContext::new(now, self.clock.time_step, count);
        let mut summary = StepSummary { agents: count, ..StepSummary::default() };

        for index in 0..count {
            let Some((agent, rng)) = self.population.agent_and_rng_mut(index) else {
                break;
            };
            let (state, modules) = agent.parts_mut();
            let id = state.id();
            let caps = state.capabilities();

            for module in modules.iter_mut() {
                if !caps.satisfies(module.required_capabilities()) {
                    match self.mismatch {
                        MismatchPolicy::Skip => {
                            log::trace!("{now}: skipping `{}` on {id} ({})", module.name(), state.kind());
                            summary.modules_skipped += 1;
                            continue;
                        }
                        MismatchPolicy::Error => {
                            return Err(SimError::Behavior {
                                agent:  id,
                                module: module.name(),
                                source: BehaviorError::CapabilityMismatch {
                                    module: module.name(),
                                    agent:  id,
                                    kind:   state.kind(),
                                },
                            });
                        }
                    }
                }

                module.run(state, &ctx, rng).map_err(|source| SimError::Behavior {
                    agent: id,
                    module: module.name(),
                    source,
                })?;
                summary.modules_run += 1;
            }
        }

        Ok(summary)
    }
}
