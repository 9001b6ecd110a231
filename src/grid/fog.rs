//! Fog of war intensity grid
//!
//! Each cell holds a visibility intensity in [0, 1]: 1.0 is fully shrouded,
//! 0.0 fully revealed. Observers lower the intensity around themselves every
//! tick with a squared-distance falloff, so fog fades fastest at the center
//! of a vision radius and is untouched at its rim.

use crate::core::types::IntVec2;

#[derive(Debug, Clone)]
pub struct FogOfWar {
    width: usize,
    height: usize,
    intensity: Vec<f32>,
}

impl FogOfWar {
    /// A fresh fog layer is fully shrouded
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            intensity: vec![1.0; width * height],
        }
    }

    /// Re-shroud the whole map
    pub fn reset(&mut self) {
        self.intensity.fill(1.0);
    }

    /// Intensity at a cell; out-of-bounds cells are fully shrouded
    pub fn get(&self, pos: IntVec2) -> f32 {
        if self.in_bounds(pos) {
            self.intensity[pos.x as usize + pos.y as usize * self.width]
        } else {
            1.0
        }
    }

    /// Decay fog in a square around `center`, scaling each cell by
    /// clamp((dx² + dy²) / range², 0, 1)
    pub fn reveal_around(&mut self, center: IntVec2, range: i32) {
        if range <= 0 {
            return;
        }
        let range_sq = (range * range) as f32;
        for dy in -range..=range {
            for dx in -range..=range {
                let pos = IntVec2::new(center.x + dx, center.y + dy);
                if self.in_bounds(pos) {
                    let t = ((dx * dx + dy * dy) as f32 / range_sq).min(1.0);
                    self.intensity[pos.x as usize + pos.y as usize * self.width] *= t;
                }
            }
        }
    }

    #[inline]
    fn in_bounds(&self, pos: IntVec2) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_clears_center_completely() {
        let mut fog = FogOfWar::new(32, 32);
        fog.reveal_around(IntVec2::new(16, 16), 5);
        assert_eq!(fog.get(IntVec2::new(16, 16)), 0.0);
    }

    #[test]
    fn test_reveal_falloff_increases_with_distance() {
        let mut fog = FogOfWar::new(32, 32);
        fog.reveal_around(IntVec2::new(16, 16), 10);
        let near = fog.get(IntVec2::new(17, 16));
        let far = fog.get(IntVec2::new(24, 16));
        assert!(near < far);
        // Cells at the rim of the radius keep full intensity
        assert_eq!(fog.get(IntVec2::new(26, 16)), 1.0);
    }

    #[test]
    fn test_reveal_is_cumulative() {
        let mut fog = FogOfWar::new(32, 32);
        fog.reveal_around(IntVec2::new(16, 16), 10);
        let once = fog.get(IntVec2::new(20, 16));
        fog.reveal_around(IntVec2::new(16, 16), 10);
        let twice = fog.get(IntVec2::new(20, 16));
        assert!(twice < once);
    }

    #[test]
    fn test_out_of_bounds_is_shrouded() {
        let fog = FogOfWar::new(8, 8);
        assert_eq!(fog.get(IntVec2::new(-1, 0)), 1.0);
        assert_eq!(fog.get(IntVec2::new(8, 0)), 1.0);
    }

    #[test]
    fn test_reveal_near_edge_does_not_panic() {
        let mut fog = FogOfWar::new(8, 8);
        fog.reveal_around(IntVec2::new(0, 0), 15);
        assert_eq!(fog.get(IntVec2::new(0, 0)), 0.0);
    }
}
