//! Headless bouncing-body run: spawns random bodies, ticks them at a fixed
//! frame delta and logs what the collision policy did.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quadtree::quadtree::RefreshStrategy;
use simulation::{check_time_step, CollisionPolicy, Frame, Presenter, Simulation, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Colliding bodies share a new random color
    Recolor,
    /// Colliding bodies of different colors are removed
    Despawn,
}

impl From<Policy> for CollisionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Recolor => CollisionPolicy::Recolor,
            Policy::Despawn => CollisionPolicy::Despawn,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Refresh {
    /// Clear the tree and insert every body each tick
    Full,
    /// Relocate bodies in place
    Incremental,
}

impl From<Refresh> for RefreshStrategy {
    fn from(refresh: Refresh) -> Self {
        match refresh {
            Refresh::Full => RefreshStrategy::FullRebuild,
            Refresh::Incremental => RefreshStrategy::Incremental,
        }
    }
}

/// Bouncing bodies with quadtree collision detection
#[derive(Parser, Debug)]
#[command(name = "bounce")]
struct Cli {
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Residents a node holds before it splits
    #[arg(long, default_value_t = 4)]
    max_objects: usize,

    #[arg(long, default_value_t = 4)]
    max_depth: u32,

    #[arg(long, value_enum, default_value = "recolor")]
    policy: Policy,

    #[arg(long, value_enum, default_value = "full")]
    refresh: Refresh,

    #[arg(short = 'n', long, default_value_t = 300)]
    bodies: usize,

    #[arg(long, default_value_t = 10.0)]
    radius_min: f32,

    #[arg(long, default_value_t = 20.0)]
    radius_max: f32,

    /// Largest velocity component, in units per second
    #[arg(long, default_value_t = 500.0)]
    speed_max: f32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Log a frame summary every N ticks (0 disables)
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width,
            height: self.height,
            max_objects: self.max_objects,
            max_depth: self.max_depth,
            policy: self.policy.into(),
            refresh: self.refresh.into(),
            body_count: self.bodies,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            speed_max: self.speed_max,
            seed: self.seed,
        }
    }
}

struct LogPresenter {
    every: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame<'_>) {
        if self.every == 0 || frame.tick % self.every != 0 {
            return;
        }
        info!(
            tick = frame.tick,
            bodies = frame.bodies.len(),
            nodes = frame.tree.node_count(),
            depth = frame.tree.max_depth_reached(),
            "frame"
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    check_time_step(cli.dt).context("invalid --dt")?;
    let mut sim = Simulation::new(cli.config()).context("failed to set up simulation")?;
    let mut presenter = LogPresenter { every: cli.log_every };

    let mut pairs = 0;
    let mut despawned = 0;
    for _ in 0..cli.ticks {
        let report = sim
            .tick(cli.dt, &mut presenter)
            .with_context(|| format!("tick {} failed", sim.tick_count()))?;
        pairs += report.pairs;
        despawned += report.despawned.len();
    }

    info!(
        ticks = sim.tick_count(),
        bodies = sim.store().len(),
        pairs,
        despawned,
        "done"
    );
    Ok(())
}
