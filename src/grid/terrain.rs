//! Terrain grid and cell classification

use serde::{Deserialize, Serialize};

use crate::core::types::IntVec2;

/// Classification of one terrain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Sky,
    Dirt,
    /// Dirt that has been dug out; ants can move through it
    BackgroundDirt,
    Rock,
    Trunk,
    Leaves,
    Bush,
    Grass,
    Food,
    /// Returned for any out-of-bounds query; never a generation output
    None,
}

impl CellKind {
    /// Can an ant occupy this cell?
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            CellKind::BackgroundDirt
                | CellKind::Sky
                | CellKind::Trunk
                | CellKind::Grass
                | CellKind::Bush
                | CellKind::Leaves
        )
    }

    /// Can a worker tunnel into this cell?
    pub fn is_diggable(self) -> bool {
        self == CellKind::Dirt
    }

    /// Can a worker claim this cell as a food load?
    pub fn is_forageable(self) -> bool {
        self == CellKind::Food
    }
}

/// Row-major 2D grid of cell classifications
///
/// All accessors are bounds-safe: reads outside the grid return
/// [`CellKind::None`] and writes outside the grid are no-ops.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl TerrainGrid {
    pub fn new(width: usize, height: usize, fill: CellKind) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: IntVec2) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }

    #[inline]
    pub fn get(&self, pos: IntVec2) -> CellKind {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize + pos.y as usize * self.width]
        } else {
            CellKind::None
        }
    }

    #[inline]
    pub fn set(&mut self, pos: IntVec2, kind: CellKind) {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize + pos.y as usize * self.width] = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_reads_are_none() {
        let grid = TerrainGrid::new(16, 16, CellKind::Dirt);
        assert_eq!(grid.get(IntVec2::new(-1, 5)), CellKind::None);
        assert_eq!(grid.get(IntVec2::new(16, 5)), CellKind::None);
        assert_eq!(grid.get(IntVec2::new(5, -1)), CellKind::None);
        assert_eq!(grid.get(IntVec2::new(5, 16)), CellKind::None);
        assert_eq!(grid.get(IntVec2::new(5, 5)), CellKind::Dirt);
    }

    #[test]
    fn test_out_of_bounds_writes_are_noops() {
        let mut grid = TerrainGrid::new(16, 16, CellKind::Dirt);
        grid.set(IntVec2::new(-1, 0), CellKind::Rock);
        grid.set(IntVec2::new(0, 99), CellKind::Rock);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(grid.get(IntVec2::new(x, y)), CellKind::Dirt);
            }
        }
    }

    #[test]
    fn test_classification_predicates() {
        assert!(CellKind::Sky.is_walkable());
        assert!(CellKind::BackgroundDirt.is_walkable());
        assert!(CellKind::Grass.is_walkable());
        assert!(!CellKind::Dirt.is_walkable());
        assert!(!CellKind::Rock.is_walkable());
        assert!(!CellKind::Food.is_walkable());
        assert!(!CellKind::None.is_walkable());

        assert!(CellKind::Dirt.is_diggable());
        assert!(!CellKind::Rock.is_diggable());

        assert!(CellKind::Food.is_forageable());
        assert!(!CellKind::Bush.is_forageable());
    }
}
