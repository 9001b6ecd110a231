//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Integer grid vector, used for both cell positions and unit directions.
///
/// +y points up: the sky occupies the upper quarter of the map and a falling
/// ant moves toward y = 0. (0, 0) as a direction means "not moving".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntVec2 {
    pub x: i32,
    pub y: i32,
}

impl IntVec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const UP: Self = Self { x: 0, y: 1 };
    pub const DOWN: Self = Self { x: 0, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for IntVec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for IntVec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Caste of an ant, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntKind {
    /// Long vision range, explores and lifts fog quickly
    Scout,
    /// Digs tunnels and carries food back to the queen
    Worker,
    /// Higher health, escalates to Run and engages enemies
    Fighter,
}

/// Current activity of an ant's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntAction {
    Rest,
    Walk,
    Run,
    Dig,
    Carry,
}

/// Which side an ant fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    Ally,
    Enemy,
}
