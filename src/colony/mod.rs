//! Colony state: terrain, fog, overlay, ant rosters and shared resources

pub mod tick;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::agent::ant::{Ant, FoodStore};
use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{Allegiance, AntKind, IntVec2};
use crate::grid::fog::FogOfWar;
use crate::grid::overlay::{AgentMarker, AgentOverlay};
use crate::grid::terrain::TerrainGrid;
use crate::worldgen;

/// Per-caste tallies of living allied ants
#[derive(Debug, Clone, Copy, Default)]
pub struct KindCounts {
    pub workers: i32,
    pub fighters: i32,
    pub scouts: i32,
}

impl KindCounts {
    fn adjust(&mut self, kind: AntKind, delta: i32) {
        match kind {
            AntKind::Worker => self.workers += delta,
            AntKind::Fighter => self.fighters += delta,
            AntKind::Scout => self.scouts += delta,
        }
    }
}

/// The whole simulated world
///
/// Fields are public so the renderer and tests can inspect state directly;
/// mutation goes through the tick and spawn methods.
pub struct Colony {
    pub config: SimConfig,
    pub terrain: TerrainGrid,
    pub fog: FogOfWar,
    pub overlay: AgentOverlay,
    pub allies: Vec<Ant>,
    pub enemies: Vec<Ant>,
    pub store: FoodStore,
    /// Spawn gate in [0, 1]; the queen can only spawn at exactly 1
    pub queen_cooldown: f32,
    pub counts: KindCounts,
    pub rng: ChaCha8Rng,
}

impl Colony {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let terrain = worldgen::generate_terrain(&config, &mut rng);

        let mut fog = FogOfWar::new(config.width, config.height);
        fog.reveal_around(config.queen_position(), config.queen_vision_range);

        let mut overlay = AgentOverlay::new(config.width, config.height);
        overlay.set(config.queen_position(), AgentMarker::Queen);

        let store = FoodStore::new(config.initial_food, config.delivery_yield);

        info!(seed = config.seed, "colony created");
        Ok(Self {
            terrain,
            fog,
            overlay,
            allies: Vec::new(),
            enemies: Vec::new(),
            store,
            queen_cooldown: 1.0,
            counts: KindCounts::default(),
            rng,
            config,
        })
    }

    /// Throw the world away and regenerate it from the generator's current
    /// stream, keeping the run reproducible across resets
    pub fn reset(&mut self) {
        self.terrain = worldgen::generate_terrain(&self.config, &mut self.rng);
        self.allies.clear();
        self.enemies.clear();

        self.fog.reset();
        self.fog
            .reveal_around(self.config.queen_position(), self.config.queen_vision_range);

        self.overlay.reset();
        self.overlay
            .set(self.config.queen_position(), AgentMarker::Queen);

        self.store = FoodStore::new(self.config.initial_food, self.config.delivery_yield);
        self.queen_cooldown = 1.0;
        self.counts = KindCounts::default();
        info!("colony reset");
    }

    /// Recharge the spawn gate; a higher queen level recharges faster
    pub fn regen_cooldown(&mut self, dt: f32) {
        self.queen_cooldown += dt * (5 + self.store.queen_level() as i32) as f32;
        if self.queen_cooldown > 1.0 {
            self.queen_cooldown = 1.0;
        }
    }

    /// Spawn one allied ant at the queen if the gate is fully charged and
    /// the colony can pay for it
    pub fn try_spawn(&mut self, kind: AntKind) -> bool {
        if self.queen_cooldown != 1.0 || self.store.food() <= 0 {
            return false;
        }
        self.queen_cooldown = 0.0;
        self.store.spend(self.config.spawn_cost);
        self.counts.adjust(kind, 1);
        self.allies.push(Ant::new(
            self.config.queen_position(),
            kind,
            Allegiance::Ally,
            &mut self.rng,
        ));
        true
    }

    /// Add a fresh enemy wave at the map edges
    pub fn spawn_wave(&mut self) {
        let wave = worldgen::waves::generate_wave(&self.config, &mut self.rng);
        self.enemies.extend(wave);
    }

    pub fn queen_position(&self) -> IntVec2 {
        self.config.queen_position()
    }
}
