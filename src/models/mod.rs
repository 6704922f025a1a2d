// src/models/mod.rs

pub mod atmosphere;
pub mod projectile;
pub mod scoring;
