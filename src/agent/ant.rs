//! Ant state and its movement/feeding primitives
//!
//! Operations that touch shared colony resources (eating, delivering food)
//! take an explicit [`FoodStore`] handle instead of reaching for a global.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::types::{Allegiance, AntAction, AntKind, IntVec2};

/// Shared colony resources an ant touches when it eats or delivers
#[derive(Debug, Clone)]
pub struct FoodStore {
    food: i32,
    queen_level: u32,
    delivery_yield: i32,
}

impl FoodStore {
    pub fn new(initial_food: i32, delivery_yield: i32) -> Self {
        Self {
            food: initial_food,
            queen_level: 1,
            delivery_yield,
        }
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn queen_level(&self) -> u32 {
        self.queen_level
    }

    /// Take one unit for an eating ant; the stock never goes negative
    pub fn remove_food(&mut self) -> bool {
        let available = self.food > 0;
        if available {
            self.food -= 1;
        }
        available
    }

    /// Credit one delivered load and level the queen up
    pub fn deliver(&mut self) {
        self.food += self.delivery_yield;
        self.queen_level += 1;
        debug!(
            food = self.food,
            queen_level = self.queen_level,
            "food delivered"
        );
    }

    /// Deduct the cost of spawning an ant
    pub fn spend(&mut self, cost: i32) {
        self.food -= cost;
    }
}

/// One behavior state machine instance
#[derive(Debug, Clone)]
pub struct Ant {
    pub kind: AntKind,
    pub allegiance: Allegiance,
    /// Behavioral bias in [-1, 1); skews aggression and digging eagerness
    pub efficiency: f32,
    pub vision_range: i32,
    /// Gray display value in [0, 0.05)
    pub tint: f32,

    /// Per-tick move probability while walking or carrying
    pub walk_speed: f32,
    /// Per-tick move probability while running
    pub run_speed: f32,
    /// Per-tick move probability while digging
    pub dig_speed: f32,

    pub pos: IntVec2,
    pub dir: IntVec2,
    pub action: AntAction,
    /// Accumulates with activity; the ant eats when it exceeds 3
    pub hunger: f32,
    pub health: f32,
    pub energy: f32,
    pub carrying_food: bool,
}

impl Ant {
    pub fn new(pos: IntVec2, kind: AntKind, allegiance: Allegiance, rng: &mut ChaCha8Rng) -> Self {
        let vision_range = match kind {
            AntKind::Fighter => 10,
            AntKind::Scout => 20,
            AntKind::Worker => 6,
        };
        let health = if kind == AntKind::Fighter {
            rng.gen_range(10..15) as f32
        } else {
            rng.gen_range(5..10) as f32
        };

        Self {
            kind,
            allegiance,
            efficiency: rng.gen_range(-1.0..1.0),
            vision_range,
            tint: rng.gen_range(0.0..0.05),
            walk_speed: rng.gen_range(0.05..0.1),
            run_speed: rng.gen_range(0.12..0.25),
            dig_speed: rng.gen_range(0.01..0.04),
            pos,
            dir: IntVec2::ZERO,
            action: AntAction::Rest,
            hunger: 0.0,
            health,
            energy: 1.0,
            carrying_food: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn set_direction(&mut self, dir: IntVec2) {
        self.dir = dir;
    }

    pub fn damage(&mut self) {
        self.health -= 1.0;
    }

    /// Consume one food unit if the store has any; going hungry hurts
    pub fn eat(&mut self, store: &mut FoodStore) {
        if store.remove_food() {
            self.hunger = 0.0;
            self.health += 2.0;
        } else {
            self.hunger -= 0.5;
            self.damage();
        }
    }

    /// Recover energy while stationary
    pub fn rest(&mut self, rng: &mut ChaCha8Rng) {
        self.dir = IntVec2::ZERO;
        self.energy += rng.gen_range(0.01..0.02);
    }

    pub fn walk(&mut self, rng: &mut ChaCha8Rng) {
        if rng.gen::<f32>() < self.walk_speed {
            self.pos += self.dir;
            self.energy -= rng.gen_range(0.0..0.01);
            self.hunger += 0.01;
        }
        self.action = AntAction::Walk;
    }

    pub fn run(&mut self, rng: &mut ChaCha8Rng) {
        if rng.gen::<f32>() < self.run_speed {
            self.pos += self.dir;
            self.energy -= rng.gen_range(0.01..0.02);
            self.hunger += 0.02;
        }
        self.action = AntAction::Run;
    }

    pub fn dig(&mut self, rng: &mut ChaCha8Rng) {
        if rng.gen::<f32>() < self.dig_speed {
            self.pos += self.dir;
            self.energy -= rng.gen_range(0.02..0.05);
            self.hunger += 0.03;
        }
        self.action = AntAction::Dig;
    }

    /// Haul the carried load one step; a successful step resets hunger
    pub fn carry(&mut self, rng: &mut ChaCha8Rng) {
        if rng.gen::<f32>() < self.walk_speed {
            self.pos += self.dir;
            self.energy -= rng.gen_range(0.01..0.03);
            self.hunger = 0.0;
        }
        self.action = AntAction::Carry;
        self.carrying_food = true;
    }

    /// Hand the carried load to the queen
    pub fn drop_food(&mut self, store: &mut FoodStore) {
        self.carrying_food = false;
        self.action = AntAction::Walk;
        store.deliver();
    }

    /// Claim an adjacent food cell
    pub fn grab_food(&mut self) {
        self.action = AntAction::Carry;
        self.carrying_food = true;
    }

    /// Drop one cell; overrides the state machine for this tick
    pub fn fall(&mut self) {
        self.dir = IntVec2::ZERO;
        self.pos.y -= 1;
    }
}
