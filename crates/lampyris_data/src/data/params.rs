use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a built-in objective function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKey {
    Michalewicz,
    Rastrigin,
    Rosenbrock,
    Himmelblau,
    Sphere,
}

impl FunctionKey {
    pub const ALL: [FunctionKey; 5] = [
        FunctionKey::Michalewicz,
        FunctionKey::Rastrigin,
        FunctionKey::Rosenbrock,
        FunctionKey::Himmelblau,
        FunctionKey::Sphere,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKey::Michalewicz => "michalewicz",
            FunctionKey::Rastrigin => "rastrigin",
            FunctionKey::Rosenbrock => "rosenbrock",
            FunctionKey::Himmelblau => "himmelblau",
            FunctionKey::Sphere => "sphere",
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown function key: {0}")]
pub struct ParseFunctionKeyError(pub String);

impl FromStr for FunctionKey {
    type Err = ParseFunctionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseFunctionKeyError(s.to_string()))
    }
}

/// Tunable parameters of the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmParams {
    /// Population size.
    pub n: usize,
    /// Light absorption coefficient.
    pub gamma: f64,
    /// Attractiveness at zero distance.
    pub beta0: f64,
    /// Randomization strength.
    pub alpha: f64,
    pub function: FunctionKey,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            n: 40,
            gamma: 1.0,
            beta0: 1.0,
            alpha: 0.2,
            function: FunctionKey::Michalewicz,
        }
    }
}

/// Partial parameter update. `None` fields are left untouched.
///
/// `function` is kept as a raw string so that unknown identifiers coming from a
/// UI are rejected by the optimizer instead of at the call site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamUpdate {
    pub n: Option<usize>,
    pub gamma: Option<f64>,
    pub beta0: Option<f64>,
    pub alpha: Option<f64>,
    pub function: Option<String>,
}

impl ParamUpdate {
    #[must_use]
    pub fn population(n: usize) -> Self {
        Self {
            n: Some(n),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn function(key: impl Into<String>) -> Self {
        Self {
            function: Some(key.into()),
            ..Default::default()
        }
    }
}

/// Summary exposed to status displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmStats {
    pub generation: u64,
    pub best_value: f64,
    pub best_x: f64,
    pub best_y: f64,
    pub population_size: usize,
}
