//! Unit and scenario tests for ev-sim.

use std::collections::VecDeque;

use ev_agent::AgentStoreBuilder;
use ev_core::{ArrivalPolicy, Cell, RandomSource, SimConfig, SimRng, Tick};
use ev_grid::{Grid, GridBuilder};
use ev_path::AStarPathFinder;

use crate::{SimulationState, StepEngine};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Random source that replays scripted draws.  Exhausted queues yield
/// "no panic" and index 0.
#[derive(Default)]
struct ScriptedRng {
    chances: VecDeque<bool>,
    picks:   VecDeque<usize>,
}

impl ScriptedRng {
    fn new(chances: &[bool], picks: &[usize]) -> Self {
        Self {
            chances: chances.iter().copied().collect(),
            picks:   picks.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

/// Build a grid from text: `#` blocked, `.` open, `E` exit (reading order).
fn parse(map: &[&str]) -> Grid {
    let mut b = GridBuilder::new(map.len() as u32, map[0].len() as u32);
    for (r, line) in map.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let cell = Cell::new(r as u32, c as u32);
            match ch {
                '#' => { b.add_obstacle(cell).unwrap(); }
                'E' => { b.add_exit(cell).unwrap(); }
                _ => {}
            }
        }
    }
    b.build().unwrap()
}

const ROOM: &[&str] = &[
    "#####",
    "#...#",
    "#...#",
    "#...#",
    "##E##",
];

/// Single-file corridor: (1,1) → (2,1) → (3,1) → exit (4,1).
const CORRIDOR: &[&str] = &[
    "###",
    "#.#",
    "#.#",
    "#.#",
    "#E#",
];

fn state(map: &[&str], agents: &[(Cell, u32)]) -> SimulationState {
    let mut grid = parse(map);
    let mut builder = AgentStoreBuilder::new();
    for &(cell, speed) in agents {
        builder = builder.with_agent(cell, speed);
    }
    let store = builder.build(&mut grid, &mut SimRng::new(0)).unwrap();
    SimulationState::new(grid, store)
}

fn engine(panic_probability: f64, arrival: ArrivalPolicy) -> StepEngine<AStarPathFinder> {
    StepEngine::new(AStarPathFinder::default(), panic_probability, arrival)
}

fn config(arrival: ArrivalPolicy, panic_probability: f64, max_ticks: u64) -> SimConfig {
    SimConfig {
        seed: 42,
        panic_probability,
        max_ticks,
        output_interval_ticks: 1,
        arrival,
        ..SimConfig::default()
    }
}

// ── Route following ───────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::*;
    use crate::{AgentOutcome, HoldReason};
    use ev_core::AgentId;
    use ev_grid::CellState;

    #[test]
    fn walks_monotonically_onto_exit() {
        let mut st = state(ROOM, &[(Cell::new(1, 2), 1)]);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let exit = Cell::new(4, 2);
        let mut rng = SimRng::new(1);

        let mut dist = st.agents.agents[0].position.manhattan(exit);
        let mut ticks = 0;
        while eng.step(&mut st, &mut rng) {
            let d = st.agents.agents[0].position.manhattan(exit);
            assert!(d <= dist, "distance grew from {dist} to {d}");
            dist = d;
            ticks += 1;
            assert!(ticks < 10, "agent never arrived");
        }
        assert_eq!(st.agents.agents[0].position, exit);
        assert!(st.agents.agents[0].evacuated);
        assert_eq!(ticks + 1, 3);
        assert_eq!(st.grid.state(exit).unwrap(), CellState::Exit);
        assert_eq!(st.grid.count(CellState::Occupied), 0);
    }

    #[test]
    fn hold_short_stops_next_to_exit() {
        let mut st = state(ROOM, &[(Cell::new(1, 2), 1)]);
        let eng = engine(0.0, ArrivalPolicy::HoldShort);
        let mut rng = SimRng::new(1);

        assert!(eng.step(&mut st, &mut rng));
        assert!(eng.step(&mut st, &mut rng));
        assert_eq!(st.agents.agents[0].position, Cell::new(3, 2));

        for _ in 0..5 {
            let report = eng.tick(&mut st, &mut rng);
            assert!(report.any_active);
            assert_eq!(
                report.outcomes,
                [(AgentId(0), AgentOutcome::Held(HoldReason::WithinReach))]
            );
        }
        assert_eq!(st.agents.agents[0].position, Cell::new(3, 2));
        assert!(!st.agents.agents[0].evacuated);
    }

    #[test]
    fn speed_two_jumps_two_cells() {
        let mut st = state(ROOM, &[(Cell::new(1, 2), 2)]);
        let eng = engine(0.0, ArrivalPolicy::HoldShort);
        let report = eng.tick(&mut st, &mut SimRng::new(1));
        assert_eq!(
            report.outcomes[0].1,
            AgentOutcome::Advanced { from: Cell::new(1, 2), to: Cell::new(3, 2), steps: 2 }
        );
        assert_eq!(st.grid.state(Cell::new(1, 2)).unwrap(), CellState::Open);
        assert_eq!(st.grid.state(Cell::new(3, 2)).unwrap(), CellState::Occupied);
        // The intermediate cell is never occupied.
        assert_eq!(st.grid.state(Cell::new(2, 2)).unwrap(), CellState::Open);
    }

    #[test]
    fn speed_equal_to_route_length_holds_under_hold_short() {
        let mut st = state(ROOM, &[(Cell::new(1, 2), 3)]);
        let eng = engine(0.0, ArrivalPolicy::HoldShort);
        let report = eng.tick(&mut st, &mut SimRng::new(1));
        assert_eq!(report.outcomes[0].1, AgentOutcome::Held(HoldReason::WithinReach));
    }

    #[test]
    fn walk_remaining_does_not_overshoot() {
        let mut st = state(ROOM, &[(Cell::new(1, 2), 5)]);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let report = eng.tick(&mut st, &mut SimRng::new(1));
        assert_eq!(
            report.outcomes[0].1,
            AgentOutcome::Advanced { from: Cell::new(1, 2), to: Cell::new(4, 2), steps: 3 }
        );
        assert_eq!(report.newly_evacuated, [AgentId(0)]);
        assert!(!report.any_active);
    }

    #[test]
    fn enclosed_agent_holds_with_no_route() {
        let mut st = state(
            &[
                "#######",
                "#.#...#",
                "###...#",
                "#.....#",
                "###E###",
            ],
            &[(Cell::new(1, 1), 1)],
        );
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let report = eng.tick(&mut st, &mut SimRng::new(1));
        assert_eq!(report.outcomes[0].1, AgentOutcome::Held(HoldReason::NoRoute));
        assert!(report.any_active);
    }

    #[test]
    fn later_agents_see_earlier_commits() {
        // Agent 0 ahead at (2,1), agent 1 behind at (1,1).
        let mut st = state(CORRIDOR, &[(Cell::new(2, 1), 1), (Cell::new(1, 1), 1)]);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let mut rng = SimRng::new(1);

        // Tick 1: agent 0 moves into (3,1), which now blocks agent 1's route.
        let r1 = eng.tick(&mut st, &mut rng);
        assert_eq!(r1.outcomes[0].1.moved_to(), Some(Cell::new(3, 1)));
        assert_eq!(r1.outcomes[1].1, AgentOutcome::Held(HoldReason::NoRoute));

        // Tick 2: agent 0 exits first, freeing the corridor for agent 1.
        let r2 = eng.tick(&mut st, &mut rng);
        assert_eq!(r2.newly_evacuated, [AgentId(0)]);
        assert_eq!(r2.outcomes[1].1.moved_to(), Some(Cell::new(2, 1)));

        // Ticks 3–4: agent 1 walks out.
        assert!(eng.step(&mut st, &mut rng));
        assert!(!eng.step(&mut st, &mut rng));
        assert!(st.agents.agents.iter().all(|a| a.evacuated));
    }

    #[test]
    fn processing_order_matters() {
        // Same corridor, agent order reversed: the rear agent goes first and
        // finds the front agent in the way.
        let mut st = state(CORRIDOR, &[(Cell::new(1, 1), 1), (Cell::new(2, 1), 1)]);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let r1 = eng.tick(&mut st, &mut SimRng::new(1));
        assert_eq!(r1.outcomes[0].1, AgentOutcome::Held(HoldReason::NoRoute));
        assert_eq!(r1.outcomes[1].1.moved_to(), Some(Cell::new(3, 1)));
    }

    #[test]
    fn evacuated_agents_are_skipped() {
        let mut st = state(CORRIDOR, &[(Cell::new(3, 1), 1)]);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let mut rng = SimRng::new(1);
        assert!(!eng.step(&mut st, &mut rng));
        let report = eng.tick(&mut st, &mut rng);
        assert_eq!(report.outcomes[0].1, AgentOutcome::OnExit);
        assert!(report.newly_evacuated.is_empty());
        assert!(!report.any_active);
    }
}

// ── Panic branch ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod panic {
    use super::*;
    use crate::{AgentOutcome, HoldReason};
    use ev_core::Direction;
    use ev_grid::CellState;

    /// Agent at (1,1) walled in on north, west and east; only south is open.
    const NOOK: &[&str] = &[
        "#####",
        "#.#.#",
        "#...#",
        "#...#",
        "##E##",
    ];

    #[test]
    fn only_open_direction_moves() {
        let mut st = state(NOOK, &[(Cell::new(1, 1), 1)]);
        let eng = engine(1.0, ArrivalPolicy::HoldShort);
        // Direction::ALL = [North, South, West, East]; index 1 is south.
        let mut rng = ScriptedRng::new(&[true], &[1]);
        let report = eng.tick(&mut st, &mut rng);
        assert_eq!(
            report.outcomes[0].1,
            AgentOutcome::Panicked {
                from:      Cell::new(1, 1),
                to:        Cell::new(2, 1),
                direction: Direction::South,
            }
        );
        assert_eq!(st.grid.state(Cell::new(1, 1)).unwrap(), CellState::Open);
        assert_eq!(st.grid.state(Cell::new(2, 1)).unwrap(), CellState::Occupied);
    }

    #[test]
    fn blocked_directions_fall_through_to_routing() {
        for pick in [0, 2, 3] {
            let mut st = state(NOOK, &[(Cell::new(1, 1), 1)]);
            let eng = engine(1.0, ArrivalPolicy::HoldShort);
            let mut rng = ScriptedRng::new(&[true], &[pick]);
            let report = eng.tick(&mut st, &mut rng);
            assert_eq!(
                report.outcomes[0].1,
                AgentOutcome::Advanced { from: Cell::new(1, 1), to: Cell::new(2, 1), steps: 1 },
                "pick {pick}"
            );
        }
    }

    #[test]
    fn panic_into_another_agent_is_rejected() {
        let mut st = state(ROOM, &[(Cell::new(2, 2), 1), (Cell::new(3, 2), 1)]);
        let eng = engine(1.0, ArrivalPolicy::HoldShort);
        // Agent 0 panics south into agent 1; agent 1 does not panic.
        let mut rng = ScriptedRng::new(&[true, false], &[1]);
        let report = eng.tick(&mut st, &mut rng);
        assert!(!matches!(report.outcomes[0].1, AgentOutcome::Panicked { .. }));
        assert_ne!(st.agents.agents[0].position, st.agents.agents[1].position);
        st.verify_occupancy().unwrap();
    }

    #[test]
    fn panic_onto_exit_evacuates() {
        let mut st = state(ROOM, &[(Cell::new(3, 2), 1)]);
        let eng = engine(1.0, ArrivalPolicy::HoldShort);
        let mut rng = ScriptedRng::new(&[true], &[1]);
        assert!(!eng.step(&mut st, &mut rng));
        assert!(st.agents.agents[0].evacuated);
        assert_eq!(st.grid.state(Cell::new(3, 2)).unwrap(), CellState::Open);
        assert_eq!(st.grid.state(Cell::new(4, 2)).unwrap(), CellState::Exit);
    }

    #[test]
    fn panic_skips_routing_for_that_tick() {
        let mut st = state(ROOM, &[(Cell::new(2, 2), 1)]);
        let eng = engine(1.0, ArrivalPolicy::HoldShort);
        // North: away from the exit, and no additional route step follows.
        let mut rng = ScriptedRng::new(&[true], &[0]);
        eng.tick(&mut st, &mut rng);
        assert_eq!(st.agents.agents[0].position, Cell::new(1, 2));
    }

    #[test]
    fn no_panic_draw_routes_normally() {
        let mut st = state(ROOM, &[(Cell::new(1, 1), 1)]);
        let eng = engine(0.5, ArrivalPolicy::HoldShort);
        let mut rng = ScriptedRng::new(&[false], &[]);
        let report = eng.tick(&mut st, &mut rng);
        assert!(matches!(report.outcomes[0].1, AgentOutcome::Advanced { .. }));
        assert_eq!(report.panic_count(), 0);
        assert_ne!(report.outcomes[0].1, AgentOutcome::Held(HoldReason::NoRoute));
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;
    use std::collections::HashSet;

    /// The demo layout: 20×20, two exits in the bottom wall, 10 obstacles,
    /// 15 agents with speed 1 or 2.
    fn crowded(seed: u64) -> SimulationState {
        crowded_with(seed, 10)
    }

    fn crowded_with(seed: u64, obstacles: usize) -> SimulationState {
        let mut rng = SimRng::new(seed);
        let mut b = GridBuilder::new(20, 20);
        b.add_exit(Cell::new(19, 9)).unwrap();
        b.add_exit(Cell::new(19, 10)).unwrap();
        b.scatter_obstacles(obstacles, 5..=15, 5..=15, &mut rng).unwrap();
        let mut grid = b.build().unwrap();
        let store = AgentStoreBuilder::new()
            .random(15, &[1, 2])
            .build(&mut grid, &mut rng)
            .unwrap();
        SimulationState::new(grid, store)
    }

    #[test]
    fn occupancy_holds_after_every_tick() {
        for arrival in [ArrivalPolicy::HoldShort, ArrivalPolicy::WalkRemaining] {
            for seed in 0..5 {
                let mut st = crowded(seed);
                let eng = engine(0.2, arrival);
                let mut rng = SimRng::new(seed + 100);
                st.verify_occupancy().unwrap();
                for _ in 0..150 {
                    let active = eng.step(&mut st, &mut rng);
                    st.verify_occupancy().unwrap();

                    let active_cells: Vec<Cell> = st
                        .agents
                        .agents
                        .iter()
                        .filter(|a| !st.grid.is_exit(a.position))
                        .map(|a| a.position)
                        .collect();
                    let distinct: HashSet<_> = active_cells.iter().collect();
                    assert_eq!(distinct.len(), active_cells.len());

                    // Termination: false exactly when everyone is on an exit.
                    assert_eq!(active, !active_cells.is_empty());
                    if !active {
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn evacuated_flag_matches_exit_position() {
        let mut st = crowded(3);
        let eng = engine(0.2, ArrivalPolicy::WalkRemaining);
        let mut rng = SimRng::new(9);
        for _ in 0..100 {
            eng.step(&mut st, &mut rng);
            for a in &st.agents.agents {
                assert_eq!(a.evacuated, st.grid.is_exit(a.position));
            }
        }
    }

    #[test]
    fn walk_remaining_without_panic_evacuates_everyone() {
        // No obstacles, so no agent can be sealed into a pocket.
        let mut st = crowded_with(11, 0);
        let eng = engine(0.0, ArrivalPolicy::WalkRemaining);
        let mut rng = SimRng::new(0);
        let mut ticks = 0;
        while eng.step(&mut st, &mut rng) {
            ticks += 1;
            assert!(ticks < 400, "evacuation stalled");
        }
        assert_eq!(st.agents.evacuated_count(), 15);
    }

    #[test]
    fn verify_detects_stale_occupancy() {
        let mut st = state(ROOM, &[(Cell::new(1, 1), 1)]);
        st.grid.set_occupied(Cell::new(2, 2)).unwrap();
        assert!(st.verify_occupancy().is_err());

        let mut st = state(ROOM, &[(Cell::new(1, 1), 1)]);
        st.agents.agents[0].advance_to(Cell::new(2, 2));
        assert!(st.verify_occupancy().is_err());
    }
}

// ── Sim runner ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use super::*;
    use crate::{EvacReport, NoopObserver, SimBuilder, SimObserver, TickReport};
    use ev_core::ExitTarget;

    fn sim_for(
        map:    &[&str],
        agents: &[(Cell, u32)],
        cfg:    SimConfig,
    ) -> crate::Sim<AStarPathFinder> {
        let st = state(map, agents);
        SimBuilder::new(cfg, st.grid, st.agents).build().unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Tick>,
        ends:      Vec<Tick>,
        snapshots: Vec<Tick>,
        final_report: Option<EvacReport>,
        stop_after: Option<usize>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_tick_end(&mut self, tick: Tick, _report: &TickReport) {
            self.ends.push(tick);
        }
        fn on_snapshot(&mut self, tick: Tick, _state: &SimulationState) {
            self.snapshots.push(tick);
        }
        fn should_stop(&mut self) -> bool {
            self.stop_after.is_some_and(|n| self.ends.len() >= n)
        }
        fn on_sim_end(&mut self, _final_tick: Tick, report: &EvacReport) {
            self.final_report = Some(*report);
        }
    }

    #[test]
    fn run_reports_evacuation_time() {
        let mut sim = sim_for(
            ROOM,
            &[(Cell::new(1, 2), 1)],
            config(ArrivalPolicy::WalkRemaining, 0.0, 100),
        );
        let mut obs = Recorder::default();
        let report = sim.run(&mut obs).unwrap();
        assert_eq!(report, EvacReport { ticks: 3, evacuated: 1, remaining: 0, completed: true });
        assert_eq!(obs.starts, [Tick(0), Tick(1), Tick(2)]);
        assert_eq!(obs.ends, obs.starts);
        assert_eq!(obs.final_report, Some(report));
        assert_eq!(sim.clock, Tick(3));
    }

    #[test]
    fn run_stops_at_max_ticks() {
        let mut sim = sim_for(
            ROOM,
            &[(Cell::new(1, 2), 1)],
            config(ArrivalPolicy::HoldShort, 0.0, 25),
        );
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.ticks, 25);
        assert!(!report.completed);
        assert_eq!(report.remaining, 1);
    }

    #[test]
    fn observer_can_stop_the_run() {
        let mut sim = sim_for(
            ROOM,
            &[(Cell::new(1, 1), 1)],
            config(ArrivalPolicy::HoldShort, 0.0, 1_000),
        );
        let mut obs = Recorder { stop_after: Some(4), ..Recorder::default() };
        let report = sim.run(&mut obs).unwrap();
        assert_eq!(report.ticks, 4);
        assert_eq!(obs.ends.len(), 4);
    }

    #[test]
    fn snapshot_interval_respected() {
        let mut cfg = config(ArrivalPolicy::HoldShort, 0.0, 10);
        cfg.output_interval_ticks = 3;
        let mut sim = sim_for(ROOM, &[(Cell::new(1, 1), 1)], cfg);
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.snapshots, [Tick(0), Tick(3), Tick(6), Tick(9)]);

        let mut cfg = config(ArrivalPolicy::HoldShort, 0.0, 10);
        cfg.output_interval_ticks = 0;
        let mut sim = sim_for(ROOM, &[(Cell::new(1, 1), 1)], cfg);
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn run_ticks_is_incremental() {
        let mut sim = sim_for(
            ROOM,
            &[(Cell::new(1, 2), 1)],
            config(ArrivalPolicy::WalkRemaining, 0.0, 100),
        );
        let r = sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(r.ticks, 2);
        assert!(!r.completed);
        let r = sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(r.ticks, 3);
        assert!(r.completed);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = sim_for(
                ROOM,
                &[(Cell::new(1, 1), 1), (Cell::new(1, 3), 2), (Cell::new(2, 2), 1)],
                config(ArrivalPolicy::WalkRemaining, 0.5, 200),
            );
            let report = sim.run(&mut NoopObserver).unwrap();
            (report, sim.state.agents.positions())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn invalid_config_rejected() {
        let st = state(ROOM, &[(Cell::new(1, 1), 1)]);
        let cfg = config(ArrivalPolicy::HoldShort, 2.0, 10);
        assert!(SimBuilder::new(cfg, st.grid, st.agents).build().is_err());
    }

    #[test]
    fn inconsistent_occupancy_rejected() {
        let st = state(ROOM, &[(Cell::new(1, 1), 1)]);
        let mut grid = st.grid;
        grid.clear_occupied(Cell::new(1, 1)).unwrap();
        let result = SimBuilder::new(config(ArrivalPolicy::HoldShort, 0.0, 10), grid, st.agents)
            .build();
        assert!(matches!(result, Err(crate::SimError::Occupancy { .. })));
    }

    #[test]
    fn first_listed_exit_target_flows_through_config() {
        // Two rooms split by column 3.  The first-listed exit (4,5) is in
        // the sealed right room; the left room's door is (2,0).
        let mut b = GridBuilder::new(5, 7);
        b.add_exit(Cell::new(4, 5)).unwrap();
        b.add_exit(Cell::new(2, 0)).unwrap();
        b.add_obstacle(Cell::new(1, 3)).unwrap();
        b.add_obstacle(Cell::new(2, 3)).unwrap();
        b.add_obstacle(Cell::new(3, 3)).unwrap();
        let mut grid = b.build().unwrap();
        let store = AgentStoreBuilder::new()
            .with_agent(Cell::new(1, 1), 1)
            .build(&mut grid, &mut SimRng::new(0))
            .unwrap();

        let mut cfg = config(ArrivalPolicy::WalkRemaining, 0.0, 20);
        cfg.exit_target = ExitTarget::FirstListed;
        let mut sim = SimBuilder::new(cfg, grid.clone(), store).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert!(!report.completed);
        assert_eq!(sim.state.agents.agents[0].position, Cell::new(1, 1));

        let store = AgentStoreBuilder::new()
            .with_agent(Cell::new(2, 1), 1)
            .build(&mut grid, &mut SimRng::new(0))
            .unwrap();
        // Default policy finds the open door instead.
        let mut fresh = grid;
        fresh.clear_occupied(Cell::new(1, 1)).unwrap();
        let cfg = config(ArrivalPolicy::WalkRemaining, 0.0, 20);
        let mut sim = SimBuilder::new(cfg, fresh, store).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert!(report.completed);
        assert_eq!(report.ticks, 1);
    }

    #[test]
    fn custom_path_finder_is_used() {
        use ev_path::{PathFinder, Route};

        struct Stay;
        impl PathFinder for Stay {
            fn find_route(&self, _start: Cell, _grid: &Grid, _exits: &[Cell]) -> Route {
                Route::empty()
            }
        }

        let st = state(ROOM, &[(Cell::new(1, 2), 1)]);
        let mut sim = SimBuilder::new(config(ArrivalPolicy::WalkRemaining, 0.0, 5), st.grid, st.agents)
            .path_finder(Stay)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.ticks, 5);
        assert_eq!(sim.state.agents.agents[0].position, Cell::new(1, 2));
    }
}
