//! Myrmica - Ant Colony Simulation

pub mod agent;
pub mod colony;
pub mod command;
pub mod core;
pub mod grid;
pub mod render;
pub mod scheduler;
pub mod ui;
pub mod worldgen;
