//! Configuration management for simulation runs.
//!
//! Strongly-typed structures mapping to a `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags of the `lampyris` binary
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [swarm]
//! population = 40
//! gamma = 1.0
//! beta0 = 1.0
//! alpha = 0.2
//! function = "rastrigin"
//! seed = 42
//!
//! [clock]
//! generations = 200
//! step_interval_ms = 100.0
//! frame_ms = 16.0
//! time_scale = 1.0
//! ```

use lampyris_data::{FunctionKey, SwarmParams};
use serde::{Deserialize, Serialize};

/// Optimizer parameters and RNG seed.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SwarmConfig {
    pub population: usize,
    pub gamma: f64,
    pub beta0: f64,
    pub alpha: f64,
    pub function: FunctionKey,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        let params = SwarmParams::default();
        Self {
            population: params.n,
            gamma: params.gamma,
            beta0: params.beta0,
            alpha: params.alpha,
            function: params.function,
            seed: None,
        }
    }
}

impl SwarmConfig {
    #[must_use]
    pub fn params(&self) -> SwarmParams {
        SwarmParams {
            n: self.population,
            gamma: self.gamma,
            beta0: self.beta0,
            alpha: self.alpha,
            function: self.function,
        }
    }
}

/// Pacing of the two clocks in a headless run.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClockConfig {
    /// Number of generations before the run stops.
    pub generations: u64,
    /// Simulated milliseconds between two generations.
    pub step_interval_ms: f64,
    /// Simulated milliseconds per animation frame.
    pub frame_ms: f64,
    /// Multiplier applied to `frame_ms` before it reaches the flash clock.
    pub time_scale: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            generations: 200,
            step_interval_ms: 100.0,
            frame_ms: 16.0,
            time_scale: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub swarm: SwarmConfig,
    pub clock: ClockConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Population must be positive and reasonable (<= 10000)
    /// - `gamma`, `beta0` and `alpha` must be finite and non-negative
    /// - Frame and step intervals must be positive, time scale non-negative
    pub fn validate(&self) -> anyhow::Result<()> {
        let s = &self.swarm;
        anyhow::ensure!(s.population > 0, "Population must be positive");
        anyhow::ensure!(s.population <= 10000, "Population too large (max 10000)");
        anyhow::ensure!(
            s.gamma.is_finite() && s.gamma >= 0.0,
            "Gamma must be finite and non-negative"
        );
        anyhow::ensure!(
            s.beta0.is_finite() && s.beta0 >= 0.0,
            "Beta0 must be finite and non-negative"
        );
        anyhow::ensure!(
            s.alpha.is_finite() && s.alpha >= 0.0,
            "Alpha must be finite and non-negative"
        );

        let c = &self.clock;
        anyhow::ensure!(
            c.frame_ms > 0.0 && c.frame_ms.is_finite(),
            "Frame duration must be positive and finite"
        );
        anyhow::ensure!(
            c.step_interval_ms > 0.0 && c.step_interval_ms.is_finite(),
            "Step interval must be positive and finite"
        );
        anyhow::ensure!(
            c.time_scale.is_finite() && c.time_scale >= 0.0,
            "Time scale must be finite and non-negative"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of everything that influences a run's trajectory.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.swarm).as_bytes());
        hasher.update(format!("{:?}", self.clock).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_population() {
        let config = AppConfig {
            swarm: SwarmConfig {
                population: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_alpha() {
        let config = AppConfig {
            swarm: SwarmConfig {
                alpha: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_frame() {
        let config = AppConfig {
            clock: ClockConfig {
                frame_ms: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_infinite_interval_rejected() {
        let parsed = AppConfig::from_toml("[clock]\ngenerations = 3\nstep_interval_ms = inf");
        assert!(parsed.is_err());

        let config = AppConfig {
            clock: ClockConfig {
                frame_ms: f64::INFINITY,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AppConfig::from_toml(
            r#"
            [swarm]
            population = 12
            function = "himmelblau"
            seed = 7
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.swarm.population, 12);
        assert_eq!(config.swarm.function, FunctionKey::Himmelblau);
        assert_eq!(config.swarm.seed, Some(7));
        assert_eq!(config.swarm.gamma, 1.0);
        assert_eq!(config.clock.generations, 200);
    }

    #[test]
    fn test_from_toml_unknown_function() {
        assert!(AppConfig::from_toml("[swarm]\nfunction = \"ackley\"\n").is_err());
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let mut config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());
        config2.swarm.seed = Some(1);
        assert_ne!(config1.fingerprint(), config2.fingerprint());
    }
}
