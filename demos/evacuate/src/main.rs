//! evacuate — 20×20 room evacuation for the rust_evac simulator.
//!
//! Fifteen agents with speed 1 or 2 are dropped on random open cells of a
//! walled room with two exits in the bottom wall and a handful of random
//! obstacles in the middle.  Each tick an agent either panics (one random
//! step) or walks its shortest route.  The run ends when everyone stands on
//! an exit.
//!
//! ```text
//! cargo run -p evacuate                    # built-in scenario
//! cargo run -p evacuate -- scenario.json   # override any field
//! RUST_LOG=ev_sim=debug cargo run -p evacuate
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ev_agent::AgentStoreBuilder;
use ev_core::{Cell, SimConfig, SimRng};
use ev_grid::GridBuilder;
use ev_output::{CsvWriter, SimOutputObserver};
use ev_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/evacuate";

// RNG sub-stream offsets.
const OBSTACLE_STREAM:  u64 = 1;
const PLACEMENT_STREAM: u64 = 2;
const STEPPING_STREAM:  u64 = 3;

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Scenario file layout.  Every field is optional in JSON.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    rows:          u32,
    cols:          u32,
    exits:         Vec<Cell>,
    obstacles:     usize,
    /// Inclusive `[lo, hi]` row band for random obstacles.
    obstacle_rows: [u32; 2],
    obstacle_cols: [u32; 2],
    agents:        usize,
    speeds:        Vec<u32>,
    sim:           SimConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            rows:          20,
            cols:          20,
            exits:         vec![Cell::new(19, 9), Cell::new(19, 10)],
            obstacles:     10,
            obstacle_rows: [5, 15],
            obstacle_cols: [5, 15],
            agents:        15,
            speeds:        vec![1, 2],
            sim:           SimConfig { panic_probability: 0.2, ..SimConfig::default() },
        }
    }
}

fn load_scenario() -> Result<Scenario> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Scenario::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading scenario file {path}"))?;
    let scenario: Scenario = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario file {path}"))?;
    info!(%path, "loaded scenario");
    Ok(scenario)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let scenario = load_scenario()?;
    if scenario.exits.is_empty() {
        bail!("scenario has no exits");
    }

    println!("=== evacuate — rust_evac grid evacuation ===");
    println!(
        "Grid: {}×{}  |  Agents: {}  |  Panic: {}  |  Seed: {}",
        scenario.rows,
        scenario.cols,
        scenario.agents,
        scenario.sim.panic_probability,
        scenario.sim.seed,
    );
    println!();

    let mut root = SimRng::new(scenario.sim.seed);

    // 1. Grid: walls, exits, scattered obstacles.
    let mut gb = GridBuilder::new(scenario.rows, scenario.cols);
    for &exit in &scenario.exits {
        gb.add_exit(exit)?;
    }
    let [r0, r1] = scenario.obstacle_rows;
    let [c0, c1] = scenario.obstacle_cols;
    let placed = gb.scatter_obstacles(
        scenario.obstacles,
        r0..=r1,
        c0..=c1,
        &mut root.child(OBSTACLE_STREAM),
    )?;
    let mut grid = gb.build()?;
    info!(requested = scenario.obstacles, placed, "obstacles scattered");

    // 2. Agents on random open interior cells.
    let agents = AgentStoreBuilder::new()
        .random(scenario.agents, &scenario.speeds)
        .build(&mut grid, &mut root.child(PLACEMENT_STREAM))?;

    println!("Initial layout:");
    println!("{grid}");

    // 3. Sim.
    let mut sim = SimBuilder::new(scenario.sim.clone(), grid, agents)
        .rng(root.child(STEPPING_STREAM))
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Final layout:");
    println!("{}", sim.state.grid);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output written to {OUTPUT_DIR}/");
    println!();

    if report.completed {
        println!("Total Evacuation Time: {} steps", report.ticks);
    } else {
        println!(
            "Stopped after {} steps with {} of {} agents still inside",
            report.ticks,
            report.remaining,
            report.evacuated + report.remaining,
        );
    }

    Ok(())
}
