// src/math/mod.rs

pub mod error;
pub mod interpolate;

pub use error::SimulationError;
pub use interpolate::ground_crossing_fraction;
pub use interpolate::lerp;
