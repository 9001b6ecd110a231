//! Per-tick world resolution
//!
//! Allied ants resolve in roster order within one pass: fog reveal,
//! neighborhood sampling, foraging, the state machine transition, then
//! overlay redraw and tunnel conversion. Enemies resolve in their own pass
//! on a separate cadence and only fight, fall and move. The passes are
//! sequential on purpose; an ant sees the terrain edits of every ant that
//! resolved before it this tick.

use tracing::debug;

use crate::agent::behavior::{compute_action, BehaviorCtx, Neighborhood};
use crate::core::types::{AntKind, IntVec2};
use crate::grid::overlay::AgentMarker;
use crate::grid::terrain::CellKind;

use super::Colony;

impl Colony {
    /// Resolve one tick for every allied ant
    pub fn tick_allies(&mut self) {
        let ctx = BehaviorCtx {
            queen: self.config.queen_position(),
            frontier_y: self.config.surface_y(),
        };
        let Colony {
            terrain,
            fog,
            overlay,
            allies,
            store,
            rng,
            ..
        } = self;

        for ant in allies.iter_mut() {
            fog.reveal_around(ant.pos, ant.vision_range);

            // All four neighbors are sampled before any of them is edited,
            // so foraging sees the cell values from the start of this
            // ant's resolution
            let left = terrain.get(ant.pos + IntVec2::LEFT);
            let right = terrain.get(ant.pos + IntVec2::RIGHT);
            let above = terrain.get(ant.pos + IntVec2::UP);
            let below = terrain.get(ant.pos + IntVec2::DOWN);

            let mut hood = Neighborhood::default();
            let mut grabbed_food = false;

            // Horizontal dig options are entered twice, biasing tunnels
            // sideways. A claimed food cell is replaced with the value the
            // opposite neighbor held when this ant started resolving.
            if left.is_walkable() {
                hood.walkable.push(IntVec2::LEFT);
            } else if left.is_diggable() {
                hood.digable.push(IntVec2::LEFT);
                hood.digable.push(IntVec2::LEFT);
            } else if left.is_forageable() && ant.kind == AntKind::Worker && !ant.carrying_food {
                terrain.set(ant.pos + IntVec2::LEFT, right);
                grabbed_food = true;
                ant.grab_food();
            }

            if right.is_walkable() {
                hood.walkable.push(IntVec2::RIGHT);
            } else if right.is_diggable() {
                hood.digable.push(IntVec2::RIGHT);
                hood.digable.push(IntVec2::RIGHT);
            } else if right.is_forageable() && ant.kind == AntKind::Worker && !ant.carrying_food {
                terrain.set(ant.pos + IntVec2::RIGHT, left);
                grabbed_food = true;
                ant.grab_food();
            }

            if above.is_walkable() {
                hood.walkable.push(IntVec2::UP);
            } else if above.is_diggable() {
                hood.digable.push(IntVec2::UP);
            } else if above.is_forageable() && ant.kind == AntKind::Worker && !ant.carrying_food {
                terrain.set(ant.pos + IntVec2::UP, below);
                grabbed_food = true;
                ant.grab_food();
            }

            if below.is_walkable() {
                hood.walkable.push(IntVec2::DOWN);
            } else if below.is_diggable() {
                hood.digable.push(IntVec2::DOWN);
            } else if below.is_forageable() && ant.kind == AntKind::Worker && !ant.carrying_food {
                terrain.set(ant.pos + IntVec2::DOWN, above);
                grabbed_food = true;
                ant.grab_food();
            }

            // Undraw the ant and its food load before it moves
            overlay.clear(ant.pos);
            overlay.clear(ant.pos + ant.dir);

            if below == CellKind::Sky {
                ant.fall();
            } else if grabbed_food {
                ant.grab_food();
            } else {
                compute_action(ant, &hood, &ctx, store, rng);
            }

            if terrain.in_bounds(ant.pos) {
                if ant.carrying_food && terrain.in_bounds(ant.pos + ant.dir) {
                    overlay.set(ant.pos + ant.dir, AgentMarker::FoodCarry);
                }
                overlay.set(ant.pos, AgentMarker::Ally { tint: ant.tint });

                // Standing in dirt means the ant dug its way in
                if terrain.get(ant.pos) == CellKind::Dirt {
                    terrain.set(ant.pos, CellKind::BackgroundDirt);
                }
            }
        }
    }

    /// Resolve one tick for every enemy ant
    ///
    /// Enemies do not forage or dig. An enemy sharing a cell with an allied
    /// fighter trades its life for it; any other ally on the cell just dies.
    /// Only the first ally found on the cell is engaged.
    pub fn tick_enemies(&mut self) {
        let ctx = BehaviorCtx {
            queen: self.config.queen_position(),
            frontier_y: self.config.surface_y(),
        };
        let Colony {
            terrain,
            overlay,
            allies,
            enemies,
            store,
            rng,
            ..
        } = self;

        for enemy in enemies.iter_mut() {
            let below = terrain.get(enemy.pos + IntVec2::DOWN);
            let mut hood = Neighborhood::default();
            for dir in [IntVec2::LEFT, IntVec2::RIGHT, IntVec2::UP, IntVec2::DOWN] {
                if terrain.get(enemy.pos + dir).is_walkable() {
                    hood.walkable.push(dir);
                }
            }

            overlay.clear(enemy.pos);

            for ally in allies.iter_mut() {
                if ally.pos == enemy.pos {
                    if ally.kind == AntKind::Fighter {
                        ally.health = 0.0;
                        enemy.health = 0.0;
                    } else {
                        ally.health = 0.0;
                    }
                    break;
                }
            }

            if below == CellKind::Sky {
                enemy.fall();
            } else {
                compute_action(enemy, &hood, &ctx, store, rng);
            }

            overlay.set(enemy.pos, AgentMarker::Enemy);
        }
    }

    /// Drop dead ants from both rosters and keep the caste tallies current
    pub fn cleanup_dead(&mut self) {
        self.enemies.retain(|ant| !ant.is_dead());

        let counts = &mut self.counts;
        self.allies.retain(|ant| {
            if ant.is_dead() {
                counts.adjust(ant.kind, -1);
                debug!(kind = ?ant.kind, pos = ?ant.pos, "allied ant died");
                false
            } else {
                true
            }
        });
    }

    /// One fixed timestep of the allied side
    ///
    /// Enemy resolution runs on its own cadence via [`Colony::tick_enemies`].
    pub fn step(&mut self) {
        self.tick_allies();
        self.cleanup_dead();
        // The queen marker is repainted last so nothing walks over it
        self.overlay
            .set(self.config.queen_position(), AgentMarker::Queen);
    }
}
