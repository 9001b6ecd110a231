pub mod fog;
pub mod overlay;
pub mod terrain;
