// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::EnvironmentParameters;
pub use parameters::ProjectileParameters;
pub use scenario::LaunchParameters;
pub use scenario::Scenario;
pub use scenario::TargetConfig;
