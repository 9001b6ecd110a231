//! Agent overlay grid
//!
//! A persistent marker layer the renderer composites over the terrain. The
//! tick loop clears and redraws each ant's marker as it resolves; markers of
//! dead ants linger until something overwrites their cell.

use crate::core::types::IntVec2;

/// What occupies one overlay cell
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AgentMarker {
    #[default]
    Empty,
    /// Allied ant with its personal gray tint in [0, 0.05)
    Ally { tint: f32 },
    Enemy,
    /// Food load drawn one cell ahead of a carrying ant
    FoodCarry,
    Queen,
}

#[derive(Debug, Clone)]
pub struct AgentOverlay {
    width: usize,
    height: usize,
    markers: Vec<AgentMarker>,
}

impl AgentOverlay {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            markers: vec![AgentMarker::Empty; width * height],
        }
    }

    pub fn reset(&mut self) {
        self.markers.fill(AgentMarker::Empty);
    }

    pub fn get(&self, pos: IntVec2) -> AgentMarker {
        if self.in_bounds(pos) {
            self.markers[pos.x as usize + pos.y as usize * self.width]
        } else {
            AgentMarker::Empty
        }
    }

    pub fn set(&mut self, pos: IntVec2, marker: AgentMarker) {
        if self.in_bounds(pos) {
            self.markers[pos.x as usize + pos.y as usize * self.width] = marker;
        }
    }

    pub fn clear(&mut self, pos: IntVec2) {
        self.set(pos, AgentMarker::Empty);
    }

    #[inline]
    fn in_bounds(&self, pos: IntVec2) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }
}
