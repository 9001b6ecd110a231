pub mod ant;
pub mod behavior;
