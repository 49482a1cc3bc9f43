//! Core data structures for the Lampyris simulation.

pub mod domain;
pub mod firefly;
pub mod params;
