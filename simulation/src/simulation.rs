use crate::config::SimulationConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::motion::{BounceIntegrator, Integrator};
use crate::outcome::{self, CollisionPolicy};
use crate::present::{Frame, Presenter};
use crate::store::BodyStore;
use common::shapes::Rectangle;
use quadtree::quadtree::{CollisionEngine, QuadTree, RefreshStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Steps of one tick, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    Integrating,
    Indexing,
    Querying,
    Resolving,
    Rendering,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// Bodies alive after the tick.
    pub bodies: usize,
    pub pairs: usize,
    pub recolored: usize,
    pub despawned: Vec<u32>,
}

/// Fails for a `dt` that would turn positions into NaN or run time backwards.
pub fn check_time_step(dt: f32) -> SimulationResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimulationError::InvalidTimeStep { dt });
    }
    Ok(())
}

/// Owns the bodies and their index and advances them one tick at a time.
///
/// The caller drives the loop: each `tick` integrates motion, reindexes,
/// finds colliding pairs, applies the collision policy and hands a `Frame`
/// to the presenter.
pub struct Simulation<I: Integrator = BounceIntegrator> {
    config: SimulationConfig,
    bounds: Rectangle,
    store: BodyStore,
    tree: QuadTree,
    engine: CollisionEngine,
    integrator: I,
    rng: StdRng,
    tick: u64,
    phase: TickPhase,
}

impl Simulation {
    /// Spawns `config.body_count` random bodies from `config.seed`.
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let bounds = config.bounds();
        let mut store = BodyStore::new();
        for _ in 0..config.body_count {
            store.spawn_random(
                &mut rng,
                &bounds,
                config.radius_min,
                config.radius_max,
                config.speed_max,
            );
        }
        Self::build(config, store, BounceIntegrator, rng)
    }
}

impl<I: Integrator> Simulation<I> {
    /// Runs `store` with a custom integrator instead of spawning bodies.
    pub fn with_parts(config: SimulationConfig, store: BodyStore, integrator: I) -> SimulationResult<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Self::build(config, store, integrator, rng)
    }

    fn build(config: SimulationConfig, store: BodyStore, integrator: I, rng: StdRng) -> SimulationResult<Self> {
        let bounds = config.bounds();
        let mut tree = QuadTree::new_with_config(bounds, config.quadtree_config())?;
        tree.refresh(RefreshStrategy::FullRebuild, store.circles())?;
        Ok(Simulation {
            config,
            bounds,
            store,
            tree,
            engine: CollisionEngine::new(),
            integrator,
            rng,
            tick: 0,
            phase: TickPhase::Integrating,
        })
    }

    /// Advances every body by `dt` seconds and applies the collision policy.
    ///
    /// A bad `dt` is rejected before anything is touched.
    pub fn tick<P: Presenter>(&mut self, dt: f32, presenter: &mut P) -> SimulationResult<TickReport> {
        check_time_step(dt)?;
        self.tick += 1;

        self.phase = TickPhase::Integrating;
        for body in self.store.iter_mut() {
            self.integrator.advance(body, &self.bounds, dt);
        }

        self.phase = TickPhase::Indexing;
        self.tree.refresh(self.config.refresh, self.store.circles())?;

        self.phase = TickPhase::Querying;
        let policy = self.config.policy;
        let store = &self.store;
        let pairs = self.engine.find_pairs_filtered(&self.tree, store.circles(), |a, b| {
            match (store.get(a), store.get(b)) {
                (Some(a), Some(b)) => policy.admits(a, b),
                _ => false,
            }
        });

        self.phase = TickPhase::Resolving;
        let pair_count = pairs.len();
        let outcome = outcome::resolve(policy, pairs, &mut self.store, &mut self.rng);
        for &id in &outcome.despawned {
            self.tree.remove(id);
        }

        self.phase = TickPhase::Rendering;
        presenter.present(&Frame {
            tick: self.tick,
            bodies: self.store.as_slice(),
            tree: &self.tree,
        });

        debug!(
            tick = self.tick,
            bodies = self.store.len(),
            pairs = pair_count,
            recolored = outcome.recolored,
            despawned = outcome.despawned.len(),
            nodes = self.tree.node_count(),
            "tick"
        );

        Ok(TickReport {
            tick: self.tick,
            bodies: self.store.len(),
            pairs: pair_count,
            recolored: outcome.recolored,
            despawned: outcome.despawned,
        })
    }

    /// Removes a body from both the store and the index.
    pub fn despawn(&mut self, id: u32) -> bool {
        let removed = self.store.remove(id).is_some();
        self.tree.remove(id);
        removed
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Last phase entered. `Integrating` before the first tick, `Rendering`
    /// between ticks.
    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.config.policy
    }
}
