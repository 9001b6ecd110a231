//! Procedural terrain generation
//!
//! The world is built in fixed passes over a sky/dirt base: trees, grass,
//! bushes, rocks, then the queen's access shaft. Later passes overwrite
//! earlier ones, so rocks can cut through tree roots and the shaft always
//! reaches the surface. All draws come from the injected generator.

pub mod waves;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::types::IntVec2;
use crate::grid::terrain::{CellKind, TerrainGrid};

/// Sky above the surface line, dirt below
pub fn base_layers(config: &SimConfig) -> TerrainGrid {
    let mut terrain = TerrainGrid::new(config.width, config.height, CellKind::Dirt);
    let surface = config.height as f32 * 0.75;
    for y in 0..config.height as i32 {
        if y as f32 > surface {
            for x in 0..config.width as i32 {
                terrain.set(IntVec2::new(x, y), CellKind::Sky);
            }
        }
    }
    terrain
}

/// Trunks rise from just above the surface, topped with leaf blobs that
/// each hide a 3x3 food pocket at their center
pub fn plant_trees(terrain: &mut TerrainGrid, config: &SimConfig, rng: &mut ChaCha8Rng) {
    let tree_count = rng.gen_range(6..15);
    for _ in 0..tree_count {
        let base = IntVec2::new(rng.gen_range(0..config.width as i32), config.surface_y() + 1);
        let trunk_width = rng.gen_range(2..10);
        let trunk_height = rng.gen_range(30..50);

        for y in base.y..=base.y + trunk_height {
            for x in base.x - trunk_width / 2..=base.x + trunk_width / 2 {
                terrain.set(IntVec2::new(x, y), CellKind::Trunk);
            }
        }

        let leaf_count = rng.gen_range(20..40);
        for _ in 0..leaf_count {
            let leaf = IntVec2::new(
                base.x + rng.gen_range(-trunk_width..trunk_width),
                base.y + trunk_height + rng.gen_range(-10..40),
            );
            let leaf_size = rng.gen_range(3..8);
            for y in leaf.y - leaf_size..=leaf.y + leaf_size {
                for x in leaf.x - leaf_size..=leaf.x + leaf_size {
                    terrain.set(IntVec2::new(x, y), CellKind::Leaves);
                }
            }
            for y in leaf.y - 1..=leaf.y + 1 {
                for x in leaf.x - 1..=leaf.x + 1 {
                    terrain.set(IntVec2::new(x, y), CellKind::Food);
                }
            }
        }
    }
}

/// Single-column grass tufts on the surface
pub fn plant_grass(terrain: &mut TerrainGrid, config: &SimConfig, rng: &mut ChaCha8Rng) {
    let grass_count = rng.gen_range(80..160);
    for _ in 0..grass_count {
        let x = rng.gen_range(0..config.width as i32);
        let base_y = config.surface_y() + 1;
        let size = rng.gen_range(3..5);
        for y in base_y..=base_y + size {
            terrain.set(IntVec2::new(x, y), CellKind::Grass);
        }
    }
}

/// Square bushes straddling the surface line, sprinkled with food cells
pub fn plant_bushes(terrain: &mut TerrainGrid, config: &SimConfig, rng: &mut ChaCha8Rng) {
    let bush_count = rng.gen_range(4..10);
    for _ in 0..bush_count {
        let base = IntVec2::new(rng.gen_range(0..config.width as i32), config.surface_y());
        let size = rng.gen_range(5..12);
        for y in base.y..=base.y + size {
            for x in base.x - size..=base.x + size {
                let pos = IntVec2::new(x, y);
                if !terrain.in_bounds(pos) {
                    continue;
                }
                if rng.gen_range(0..60) == 0 {
                    terrain.set(pos, CellKind::Food);
                } else {
                    terrain.set(pos, CellKind::Bush);
                }
            }
        }
    }
}

/// Underground rock clusters with roughly diamond-shaped falloff
///
/// A cell joins its cluster when the sum of four uniform draws against its
/// Manhattan distance from the center stays under twice the radius, which
/// makes density fall off from solid center to sparse fringe.
pub fn scatter_rocks(terrain: &mut TerrainGrid, config: &SimConfig, rng: &mut ChaCha8Rng) {
    let rock_limit_y = config.height as f32 * 0.75 + 1.0;
    let rock_count = rng.gen_range(40..80);
    for _ in 0..rock_count {
        let center = IntVec2::new(
            rng.gen_range(0..config.width as i32),
            rng.gen_range(config.height as f32 * 0.1..config.height as f32 * 0.75)
                .ceil() as i32,
        );
        let radius = rng.gen_range(2..5);
        for y in center.y - radius..=center.y + radius {
            for x in center.x - radius..=center.x + radius {
                if x < 0 || x >= config.width as i32 || (y as f32) >= rock_limit_y {
                    continue;
                }
                let dist = (center.y - y).abs() + (center.x - x).abs();
                let spread: i32 = if dist == 0 {
                    0
                } else {
                    (0..4).map(|_| rng.gen_range(0..dist)).sum()
                };
                if spread < 2 * radius {
                    terrain.set(IntVec2::new(x, y), CellKind::Rock);
                }
            }
        }
    }
}

/// Open a vertical shaft from the queen's chamber up to the surface
pub fn carve_queen_shaft(terrain: &mut TerrainGrid, config: &SimConfig) {
    let queen = config.queen_position();
    for y in queen.y..=config.surface_y() {
        terrain.set(IntVec2::new(queen.x, y), CellKind::BackgroundDirt);
    }
}

/// Run every generation pass in order
pub fn generate_terrain(config: &SimConfig, rng: &mut ChaCha8Rng) -> TerrainGrid {
    let mut terrain = base_layers(config);
    plant_trees(&mut terrain, config, rng);
    plant_grass(&mut terrain, config, rng);
    plant_bushes(&mut terrain, config, rng);
    scatter_rocks(&mut terrain, config, rng);
    carve_queen_shaft(&mut terrain, config);
    debug!(
        width = config.width,
        height = config.height,
        "terrain generated"
    );
    terrain
}
