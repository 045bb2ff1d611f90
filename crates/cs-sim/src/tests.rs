//! Unit tests for cs-sim.

use cs_agent::{Agent, AgentContainer, AgentState, PopulationBuilder, PopulationConfig};
use cs_behavior::{BehaviorModule, MoveModule, NoopModule, Population};
use cs_core::{AgentId, AgentKind, SimConfig, Step, Vec3};

use crate::{NoopObserver, Sim, SimBuilder, SimObserver, StepSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn boxed(m: impl BehaviorModule) -> Box<dyn BehaviorModule> {
    Box::new(m)
}

fn small_config() -> SimConfig {
    SimConfig { total_steps: 10, ..SimConfig::default() }
}

fn walkers(config: &SimConfig, count: usize) -> Population {
    let pop = PopulationConfig { count, ..PopulationConfig::default() };
    PopulationBuilder::new(pop, config.seed)
        .build_with(|_| vec![boxed(MoveModule::new())])
        .unwrap()
}

fn build(config: SimConfig, population: Population) -> Sim {
    SimBuilder::new(config, population).build().unwrap()
}

fn positions(sim: &Sim) -> Vec<Vec3> {
    sim.population.states().map(|s| s.position()).collect()
}

fn single(kind: AgentKind, position: Vec3, module: impl BehaviorModule) -> Population {
    let mut pop = AgentContainer::new(SimConfig::default().seed);
    pop.append(
        Agent::new(AgentState::new(AgentId(0), kind, position, 7.5)).with_behavior(boxed(module)),
    )
    .unwrap();
    pop
}

/// Records every callback in order.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Step>,
    ends:      Vec<(Step, StepSummary)>,
    snapshots: Vec<(Step, usize)>,
    sim_ends:  Vec<Step>,
}

impl SimObserver for Recorder {
    fn on_step_start(&mut self, step: Step) {
        self.starts.push(step);
    }
    fn on_step_end(&mut self, step: Step, summary: &StepSummary) {
        self.ends.push((step, *summary));
    }
    fn on_snapshot(&mut self, step: Step, population: &Population) {
        self.snapshots.push((step, population.len()));
    }
    fn on_sim_end(&mut self, total: Step) {
        self.sim_ends.push(total);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SchedulerState, SimError};
    use cs_core::{BoundaryPolicy, CoreError};

    #[test]
    fn builds_idle_sim_with_closed_bounds() {
        let config = small_config();
        let sim = build(config.clone(), walkers(&config, 3));
        assert_eq!(sim.state(), SchedulerState::Idle);
        assert_eq!(sim.current_step(), Step::ZERO);
        assert_eq!(*sim.boundary(), BoundaryPolicy::closed(0.0, 1000.0).unwrap());
        assert_eq!(sim.population.len(), 3);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut config = small_config();
        config.boundary.min_bound = 10.0;
        config.boundary.max_bound = 5.0;
        let pop = walkers(&config, 1);
        let err = SimBuilder::new(config, pop).build().unwrap_err();
        assert!(matches!(err, SimError::Core(CoreError::Config(_))), "{err}");
    }

    #[test]
    fn bounds_ignored_when_unbounded() {
        let mut config = small_config();
        config.boundary.bound_space = false;
        config.boundary.min_bound = 10.0;
        config.boundary.max_bound = 5.0;
        let sim = build(config.clone(), walkers(&config, 1));
        assert_eq!(*sim.boundary(), BoundaryPolicy::Unbounded);
    }

    #[test]
    fn non_positive_time_step_rejected() {
        let config = SimConfig { time_step: 0.0, ..small_config() };
        let pop = walkers(&config, 1);
        assert!(SimBuilder::new(config, pop).build().is_err());
    }

    #[test]
    fn seed_mismatch_rejected() {
        let config = small_config();
        let other = SimConfig { seed: config.seed + 1, ..config.clone() };
        let pop = walkers(&other, 2);
        let err = SimBuilder::new(config, pop).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)), "{err}");
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepping_tests {
    use super::*;
    use crate::SchedulerState;

    #[test]
    fn zero_steps_changes_nothing() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 20));
        let before = positions(&sim);

        let mut rec = Recorder::default();
        sim.simulate(0, &mut rec).unwrap();

        assert_eq!(positions(&sim), before);
        assert_eq!(sim.current_step(), Step::ZERO);
        assert!(rec.starts.is_empty());
        assert_eq!(rec.sim_ends, vec![Step::ZERO]);
        assert_eq!(sim.state(), SchedulerState::Done);
    }

    #[test]
    fn empty_population_steps_cleanly() {
        let config = small_config();
        let mut sim = build(config.clone(), AgentContainer::new(config.seed));
        sim.simulate(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_step(), Step(5));
        assert!(sim.population.is_empty());
    }

    #[test]
    fn default_scenario_stays_in_bounds() {
        let config = SimConfig::default();
        let mut sim = build(config.clone(), walkers(&config, 200));
        let before = positions(&sim);

        sim.simulate(500, &mut NoopObserver).unwrap();

        let after = positions(&sim);
        assert_eq!(after.len(), 200);
        for (b, a) in before.iter().zip(&after) {
            assert!(a.all_within(0.0, 1000.0), "{a} escaped the bounds");
            assert_ne!(a, b, "agent never moved");
        }
        assert_eq!(sim.current_step(), Step(500));
    }

    #[test]
    fn same_seed_same_trajectory() {
        let config = small_config();
        let mut a = build(config.clone(), walkers(&config, 30));
        let mut b = build(config.clone(), walkers(&config, 30));
        a.simulate(25, &mut NoopObserver).unwrap();
        b.simulate(25, &mut NoopObserver).unwrap();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn different_seed_different_trajectory() {
        let config = small_config();
        let other = SimConfig { seed: 99, ..config.clone() };
        let mut a = build(config.clone(), walkers(&config, 10));
        let mut b = build(other.clone(), walkers(&other, 10));
        a.simulate(5, &mut NoopObserver).unwrap();
        b.simulate(5, &mut NoopObserver).unwrap();
        assert_ne!(positions(&a), positions(&b));
    }

    #[test]
    fn split_run_matches_single_run() {
        let config = small_config();
        let mut split = build(config.clone(), walkers(&config, 40));
        let mut whole = build(config.clone(), walkers(&config, 40));

        split.simulate(7, &mut NoopObserver).unwrap();
        split.simulate(13, &mut NoopObserver).unwrap();
        whole.simulate(20, &mut NoopObserver).unwrap();

        assert_eq!(positions(&split), positions(&whole));
        assert_eq!(split.current_step(), whole.current_step());
    }

    #[test]
    fn agent_at_min_bound_is_clamped_exactly() {
        let config = small_config();
        let pop = single(AgentKind::Cell, Vec3::ZERO, MoveModule::with_range(-2.0, -1.0));
        let mut sim = build(config, pop);

        sim.simulate(3, &mut NoopObserver).unwrap();

        assert_eq!(positions(&sim), vec![Vec3::ZERO]);
    }

    #[test]
    fn unbounded_lets_agents_leave() {
        let mut config = small_config();
        config.boundary.bound_space = false;
        let pop = single(AgentKind::Cell, Vec3::ZERO, MoveModule::with_range(-2.0, -1.0));
        let mut sim = build(config, pop);

        sim.simulate(3, &mut NoopObserver).unwrap();

        let p = positions(&sim)[0];
        for axis in 0..3 {
            assert!(p[axis] <= -3.0 && p[axis] >= -6.0, "axis {axis}: {}", p[axis]);
        }
    }

    #[test]
    fn run_stops_at_total_steps() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 5));
        sim.simulate(4, &mut NoopObserver).unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.current_step(), config.end_step());

        // Nothing left to do.
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.current_step(), config.end_step());
    }

    #[test]
    fn state_moves_to_done_and_allows_resume() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 2));
        assert_eq!(sim.state(), SchedulerState::Idle);

        sim.simulate(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.state(), SchedulerState::Done);

        sim.simulate(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.state(), SchedulerState::Done);
        assert_eq!(sim.current_step(), Step(4));
    }

    #[test]
    fn appended_agents_join_next_call() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 3));
        sim.simulate(2, &mut NoopObserver).unwrap();

        let id = sim.population.next_id().unwrap();
        let start = Vec3::new(500.0, 500.0, 500.0);
        sim.population
            .append(Agent::cell(id, start, 7.5).with_behavior(boxed(MoveModule::new())))
            .unwrap();

        let mut rec = Recorder::default();
        sim.simulate(1, &mut rec).unwrap();

        assert_eq!(rec.ends[0].1.agents, 4);
        assert_eq!(rec.ends[0].1.modules_run, 4);
        assert_ne!(sim.population.get(3).unwrap().position(), start);
    }
}

// ── Capabilities ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod capability_tests {
    use super::*;
    use crate::{MismatchPolicy, SimError};
    use cs_behavior::BehaviorError;

    fn mixed(seed: u64) -> Population {
        let mut pop = AgentContainer::new(seed);
        for i in 0..4u32 {
            let kind = if i % 2 == 0 { AgentKind::Cell } else { AgentKind::Anchor };
            let state = AgentState::new(AgentId(i), kind, Vec3::new(500.0, 500.0, 0.0), 7.5);
            pop.append(
                Agent::new(state)
                    .with_behavior(boxed(MoveModule::new()))
                    .with_behavior(boxed(NoopModule)),
            )
            .unwrap();
        }
        pop
    }

    /// Agent 0 walks normally; agent 1 carries an inverted range and fails
    /// every step.
    fn walker_then_failure(seed: u64, start: Vec3, walk: MoveModule) -> Population {
        let mut pop = AgentContainer::new(seed);
        pop.append(Agent::cell(AgentId(0), start, 7.5).with_behavior(boxed(walk))).unwrap();
        pop.append(
            Agent::cell(AgentId(1), start, 7.5).with_behavior(boxed(MoveModule::with_range(2.0, -2.0))),
        )
        .unwrap();
        pop
    }

    #[test]
    fn anchors_skip_move_by_default() {
        let config = small_config();
        let mut sim = build(config.clone(), mixed(config.seed));

        let mut rec = Recorder::default();
        sim.simulate(3, &mut rec).unwrap();

        for (_, summary) in &rec.ends {
            assert_eq!(summary.agents, 4);
            // Two cells run move + noop; two anchors run noop only.
            assert_eq!(summary.modules_run, 6);
            assert_eq!(summary.modules_skipped, 2);
        }
        for agent in sim.population.iter() {
            let moved = agent.position() != Vec3::new(500.0, 500.0, 0.0);
            assert_eq!(moved, agent.state().kind() == AgentKind::Cell, "{}", agent.id());
        }
    }

    #[test]
    fn error_policy_aborts_on_mismatch() {
        let config = small_config();
        let mut sim = SimBuilder::new(config.clone(), mixed(config.seed))
            .mismatch_policy(MismatchPolicy::Error)
            .build()
            .unwrap();

        let err = sim.simulate(3, &mut NoopObserver).unwrap_err();
        match err {
            SimError::Behavior { agent, module, source } => {
                assert_eq!(agent, AgentId(1));
                assert_eq!(module, "move");
                assert!(matches!(
                    source,
                    BehaviorError::CapabilityMismatch { kind: AgentKind::Anchor, .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        // The failed step is consumed rather than left half-applied.
        assert_eq!(sim.current_step(), Step(1));
    }

    #[test]
    fn failed_step_still_applies_bounds() {
        let config = small_config();
        let pop = walker_then_failure(config.seed, Vec3::ZERO, MoveModule::with_range(-2.0, -1.0));
        let mut sim = build(config, pop);

        assert!(sim.simulate(1, &mut NoopObserver).is_err());
        assert_eq!(sim.population.get(0).unwrap().position(), Vec3::ZERO);
        assert_eq!(sim.current_step(), Step(1));

        assert!(sim.simulate(1, &mut NoopObserver).is_err());
        assert_eq!(sim.population.get(0).unwrap().position(), Vec3::ZERO);
        assert_eq!(sim.current_step(), Step(2));
    }

    #[test]
    fn retry_after_failure_never_repeats_a_step() {
        let config = small_config();
        let start = Vec3::new(500.0, 500.0, 500.0);

        let mut failing = build(config.clone(), walker_then_failure(config.seed, start, MoveModule::new()));
        for _ in 0..3 {
            assert!(failing.simulate(1, &mut NoopObserver).is_err());
        }

        // Agent 0 alone, same seed and id: exactly three moves.
        let mut clean = AgentContainer::new(config.seed);
        clean.append(Agent::cell(AgentId(0), start, 7.5).with_behavior(boxed(MoveModule::new()))).unwrap();
        let mut clean = build(config, clean);
        clean.simulate(3, &mut NoopObserver).unwrap();

        assert_eq!(failing.population.get(0).unwrap().position(), positions(&clean)[0]);
        assert_eq!(failing.current_step(), clean.current_step());
    }

    #[test]
    fn inverted_move_range_surfaces_as_behavior_error() {
        let config = small_config();
        let pop = single(AgentKind::Cell, Vec3::ZERO, MoveModule::with_range(2.0, -2.0));
        let mut sim = build(config, pop);

        let err = sim.simulate(1, &mut NoopObserver).unwrap_err();
        assert!(
            matches!(err, SimError::Behavior { source: BehaviorError::Random(_), .. }),
            "{err}"
        );
    }
}

// ── Observers and cancellation ────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::CancelHandle;

    #[test]
    fn callbacks_fire_in_order() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 5));
        let mut rec = Recorder::default();
        sim.simulate(10, &mut rec).unwrap();

        let steps: Vec<Step> = (0..10).map(Step).collect();
        assert_eq!(rec.starts, steps);
        assert_eq!(rec.ends.iter().map(|(s, _)| *s).collect::<Vec<_>>(), steps);
        assert_eq!(rec.sim_ends, vec![Step(10)]);
    }

    #[test]
    fn snapshots_follow_export_interval() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 5));
        let mut rec = Recorder::default();
        sim.simulate(10, &mut rec).unwrap();

        let at: Vec<u64> = rec.snapshots.iter().map(|(s, _)| s.0).collect();
        assert_eq!(at, vec![0, 2, 4, 6, 8]);
        assert!(rec.snapshots.iter().all(|(_, n)| *n == 5));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { export_interval_steps: 0, ..small_config() };
        let mut sim = build(config.clone(), walkers(&config, 5));
        let mut rec = Recorder::default();
        sim.simulate(10, &mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn snapshots_see_clamped_positions() {
        struct BoundsCheck(bool);
        impl SimObserver for BoundsCheck {
            fn on_snapshot(&mut self, _step: Step, population: &Population) {
                population.for_each(|a| self.0 &= a.position().all_within(0.0, 1000.0));
            }
        }

        let config = small_config();
        let pop = single(AgentKind::Cell, Vec3::ZERO, MoveModule::with_range(-2.0, -1.0));
        let mut sim = build(config, pop);
        let mut check = BoundsCheck(true);
        sim.simulate(6, &mut check).unwrap();
        assert!(check.0);
    }

    struct CancelAt {
        handle: CancelHandle,
        at:     Step,
    }

    impl SimObserver for CancelAt {
        fn on_step_end(&mut self, step: Step, _summary: &StepSummary) {
            if step == self.at {
                self.handle.cancel();
            }
        }
    }

    #[test]
    fn cancel_stops_between_steps() {
        let config = small_config();
        let mut sim = build(config.clone(), walkers(&config, 5));
        let mut obs = CancelAt { handle: sim.cancel_handle(), at: Step(2) };

        sim.simulate(10, &mut obs).unwrap();
        assert_eq!(sim.current_step(), Step(3));

        // A later call runs normally.
        sim.simulate(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_step(), Step(5));
    }

    #[test]
    fn cancelled_run_resumes_deterministically() {
        let config = small_config();
        let mut cancelled = build(config.clone(), walkers(&config, 10));
        let mut straight = build(config.clone(), walkers(&config, 10));

        let mut obs = CancelAt { handle: cancelled.cancel_handle(), at: Step(3) };
        cancelled.simulate(10, &mut obs).unwrap();
        cancelled.simulate(6, &mut NoopObserver).unwrap();
        straight.simulate(10, &mut NoopObserver).unwrap();

        assert_eq!(positions(&cancelled), positions(&straight));
    }
}
