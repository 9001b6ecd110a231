//! Simulation configuration with documented constants
//!
//! The structural knobs of the simulation are collected here; behavioral
//! probabilities that are drawn per-ant stay inline where they are rolled.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{ColonyError, Result};
use crate::core::types::IntVec2;

/// Configuration for one simulated world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width in cells
    pub width: usize,

    /// World height in cells
    ///
    /// The upper quarter (y above 0.75 * height) is sky; everything below
    /// starts as dirt before generation overlays are applied.
    pub height: usize,

    /// RNG seed; the whole run is reproducible from this value
    pub seed: u64,

    /// Vertical position of the queen's chamber
    ///
    /// Must sit below the surface row. A shaft of background dirt is carved
    /// from here up to the sky so the colony starts with surface access.
    pub queen_y: i32,

    /// Food stock at world start and on reset
    pub initial_food: i32,

    /// Radius of the fog clearing around the queen, applied once per
    /// world generation
    pub queen_vision_range: i32,

    /// Stock gained when a carrier reaches the queen with one food load
    pub delivery_yield: i32,

    /// Food deducted for each spawned ant
    pub spawn_cost: i32,

    /// Fixed timestep of the allied tick, in seconds
    pub tick_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: 0,
            queen_y: 150,
            initial_food: 1000,
            queen_vision_range: 15,
            delivery_yield: 100,
            spawn_cost: 1,
            tick_dt: 0.02,
        }
    }
}

impl SimConfig {
    /// Load a config from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// The queen sits on the vertical midline of the map
    pub fn queen_position(&self) -> IntVec2 {
        IntVec2::new(self.width as i32 / 2, self.queen_y)
    }

    /// First row at or above the dirt/sky boundary: ceil(0.75 * height)
    pub fn surface_y(&self) -> i32 {
        (self.height as f32 * 0.75).ceil() as i32
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.width < 32 || self.height < 32 {
            return Err(ColonyError::InvalidConfig(format!(
                "world must be at least 32x32 cells (got {}x{})",
                self.width, self.height
            )));
        }

        if self.queen_y < 0 || self.queen_y >= self.surface_y() {
            return Err(ColonyError::InvalidConfig(format!(
                "queen_y ({}) must be below the surface row ({})",
                self.queen_y,
                self.surface_y()
            )));
        }

        if self.initial_food < 0 {
            return Err(ColonyError::InvalidConfig(
                "initial_food must not be negative".into(),
            ));
        }

        if self.tick_dt <= 0.0 {
            return Err(ColonyError::InvalidConfig(
                "tick_dt must be positive".into(),
            ));
        }

        Ok(())
    }
}
