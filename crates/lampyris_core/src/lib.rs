//! # Lampyris Core
//!
//! Simulation engine for a firefly swarm optimizer with a bioluminescent timing
//! layer.
//!
//! This crate contains:
//! - The built-in 2-D objective functions and their grid sampling
//! - Firefly construction, attraction-based movement and random walks
//! - The per-firefly flash state machine and female response flashes
//! - The swarm aggregate driving both clocks and tracking the best-ever solution
//! - Configuration, metrics and structured logging
//!
//! ## Architecture
//!
//! Plain data lives in `lampyris_data`; behavior is attached here through the
//! [`MovementLogic`] and [`FlashLogic`] extension traits. All randomness comes from
//! an injected [`rand::Rng`], so a seeded run is reproducible bit for bit.
//!
//! ## Example
//!
//! ```
//! use lampyris_core::SwarmOptimizer;
//! use lampyris_data::{FunctionKey, SwarmParams};
//!
//! let params = SwarmParams {
//!     function: FunctionKey::Sphere,
//!     ..SwarmParams::default()
//! };
//! let mut swarm = SwarmOptimizer::with_seed(params, 42).unwrap();
//! swarm.initialize();
//! for _ in 0..50 {
//!     swarm.step();
//!     swarm.advance_time(16.0);
//! }
//! let stats = swarm.stats().unwrap();
//! assert_eq!(stats.generation, 50);
//! assert!(stats.best_value < 2.0);
//! ```

/// Configuration management for simulation runs
pub mod config;
/// Error types
pub mod error;
/// Flash timing state machine and response flashes
pub mod flash;
/// Firefly creation
pub mod lifecycle;
/// Run metrics and structured logging
pub mod metrics;
/// Attraction and random-walk movement
pub mod movement;
/// Built-in objective functions
pub mod objective;
/// Serializable read models for renderers
pub mod snapshot;
/// The swarm aggregate
pub mod swarm;

pub use error::{Result, SwarmError};
pub use flash::FlashLogic;
pub use metrics::{init_logging, Metrics};
pub use movement::MovementLogic;
pub use objective::{lookup, lookup_str, value_range, ObjectiveFunction, ValueRange};
pub use snapshot::{FireflySnapshot, SwarmSnapshot};
pub use swarm::{StepView, SwarmOptimizer};
