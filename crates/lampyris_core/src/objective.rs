//! Built-in 2-D objective functions.
//!
//! The registry is a closed set indexed by [`FunctionKey`]. Every function is a
//! pure `(x, y) -> value` mapping to be minimized over its [`Domain`].

use crate::error::Result;
use lampyris_data::{Domain, FunctionKey, Optimum, Position};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A named objective with its search bounds and known optima.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveFunction {
    pub key: FunctionKey,
    pub name: &'static str,
    pub eval: fn(f64, f64) -> f64,
    pub domain: Domain,
    pub optima: &'static [Optimum],
    pub minimize: bool,
}

impl ObjectiveFunction {
    #[inline]
    #[must_use]
    pub fn evaluate(&self, p: Position) -> f64 {
        (self.eval)(p.x, p.y)
    }

    /// Lowest listed optimum.
    #[must_use]
    pub fn best_known(&self) -> Optimum {
        self.optima
            .iter()
            .copied()
            .min_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap_or(Optimum {
                x: f64::NAN,
                y: f64::NAN,
                value: f64::NAN,
            })
    }
}

const MICHALEWICZ_M: i32 = 10;

fn michalewicz(x: f64, y: f64) -> f64 {
    let m2 = 2 * MICHALEWICZ_M;
    let tx = x.sin() * (x * x / PI).sin().powi(m2);
    let ty = y.sin() * (2.0 * y * y / PI).sin().powi(m2);
    -(tx + ty)
}

fn rastrigin(x: f64, y: f64) -> f64 {
    20.0 + (x * x - 10.0 * (2.0 * PI * x).cos()) + (y * y - 10.0 * (2.0 * PI * y).cos())
}

fn rosenbrock(x: f64, y: f64) -> f64 {
    let a = 1.0 - x;
    let b = y - x * x;
    a * a + 100.0 * b * b
}

fn himmelblau(x: f64, y: f64) -> f64 {
    let a = x * x + y - 11.0;
    let b = x + y * y - 7.0;
    a * a + b * b
}

fn sphere(x: f64, y: f64) -> f64 {
    x * x + y * y
}

const fn opt(x: f64, y: f64, value: f64) -> Optimum {
    Optimum { x, y, value }
}

static MICHALEWICZ_OPTIMA: [Optimum; 1] = [opt(2.20, 1.57, -1.8013)];
static RASTRIGIN_OPTIMA: [Optimum; 1] = [opt(0.0, 0.0, 0.0)];
static ROSENBROCK_OPTIMA: [Optimum; 1] = [opt(1.0, 1.0, 0.0)];
static HIMMELBLAU_OPTIMA: [Optimum; 4] = [
    opt(3.0, 2.0, 0.0),
    opt(-2.805118, 3.131312, 0.0),
    opt(-3.779310, -3.283186, 0.0),
    opt(3.584428, -1.848126, 0.0),
];
static SPHERE_OPTIMA: [Optimum; 1] = [opt(0.0, 0.0, 0.0)];

static FUNCTIONS: [ObjectiveFunction; 5] = [
    ObjectiveFunction {
        key: FunctionKey::Michalewicz,
        name: "Michalewicz",
        eval: michalewicz,
        domain: Domain::new(0.0, PI, 0.0, PI),
        optima: &MICHALEWICZ_OPTIMA,
        minimize: true,
    },
    ObjectiveFunction {
        key: FunctionKey::Rastrigin,
        name: "Rastrigin",
        eval: rastrigin,
        domain: Domain::new(-5.12, 5.12, -5.12, 5.12),
        optima: &RASTRIGIN_OPTIMA,
        minimize: true,
    },
    ObjectiveFunction {
        key: FunctionKey::Rosenbrock,
        name: "Rosenbrock",
        eval: rosenbrock,
        domain: Domain::new(-2.0, 2.0, -1.0, 3.0),
        optima: &ROSENBROCK_OPTIMA,
        minimize: true,
    },
    ObjectiveFunction {
        key: FunctionKey::Himmelblau,
        name: "Himmelblau",
        eval: himmelblau,
        domain: Domain::new(-5.0, 5.0, -5.0, 5.0),
        optima: &HIMMELBLAU_OPTIMA,
        minimize: true,
    },
    ObjectiveFunction {
        key: FunctionKey::Sphere,
        name: "Sphere",
        eval: sphere,
        domain: Domain::new(-5.0, 5.0, -5.0, 5.0),
        optima: &SPHERE_OPTIMA,
        minimize: true,
    },
];

/// Returns the registered function for `key`.
#[must_use]
pub fn lookup(key: FunctionKey) -> &'static ObjectiveFunction {
    let idx = match key {
        FunctionKey::Michalewicz => 0,
        FunctionKey::Rastrigin => 1,
        FunctionKey::Rosenbrock => 2,
        FunctionKey::Himmelblau => 3,
        FunctionKey::Sphere => 4,
    };
    &FUNCTIONS[idx]
}

/// Resolves a string identifier, failing with `UnknownFunctionKey`.
pub fn lookup_str(key: &str) -> Result<&'static ObjectiveFunction> {
    let key: FunctionKey = key.parse()?;
    Ok(lookup(key))
}

/// Extreme values found on a sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    const EMPTY: ValueRange = ValueRange {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn include(self, v: f64) -> Self {
        Self {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Samples `key` on a `(resolution + 1) x (resolution + 1)` grid spanning the
/// domain boundaries inclusively and returns the extremes.
///
/// Sample `(i, j)` sits at `x_min + width * i / resolution`,
/// `y_min + height * j / resolution`. A resolution of zero samples only the
/// `(x_min, y_min)` corner. NaN samples are ignored.
#[must_use]
pub fn value_range(key: FunctionKey, resolution: usize) -> ValueRange {
    let f = lookup(key);
    let d = f.domain;
    let coord = |min: f64, extent: f64, i: usize| {
        if resolution == 0 {
            min
        } else {
            min + extent * i as f64 / resolution as f64
        }
    };

    (0..=resolution)
        .into_par_iter()
        .map(|i| {
            let x = coord(d.x_min, d.width(), i);
            (0..=resolution).fold(ValueRange::EMPTY, |acc, j| {
                acc.include((f.eval)(x, coord(d.y_min, d.height(), j)))
            })
        })
        .reduce(|| ValueRange::EMPTY, ValueRange::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwarmError;

    #[test]
    fn test_known_optima_values() {
        assert_eq!(lookup(FunctionKey::Sphere).evaluate(Position::new(0.0, 0.0)), 0.0);
        assert_eq!(lookup(FunctionKey::Rastrigin).evaluate(Position::new(0.0, 0.0)), 0.0);
        assert_eq!(lookup(FunctionKey::Rosenbrock).evaluate(Position::new(1.0, 1.0)), 0.0);
        assert_eq!(lookup(FunctionKey::Himmelblau).evaluate(Position::new(3.0, 2.0)), 0.0);

        let m = lookup(FunctionKey::Michalewicz).evaluate(Position::new(2.20, 1.57));
        assert!((m + 1.801).abs() < 1e-2, "michalewicz optimum was {m}");
    }

    #[test]
    fn test_himmelblau_all_minima_near_zero() {
        let f = lookup(FunctionKey::Himmelblau);
        assert_eq!(f.optima.len(), 4);
        for o in f.optima {
            assert!(f.evaluate(Position::new(o.x, o.y)) < 1e-9);
        }
    }

    #[test]
    fn test_lookup_matches_key() {
        for key in FunctionKey::ALL {
            let f = lookup(key);
            assert_eq!(f.key, key);
            assert!(f.minimize);
            assert!(!f.domain.is_degenerate());
        }
    }

    #[test]
    fn test_lookup_str_unknown() {
        assert_eq!(
            lookup_str("ackley").unwrap_err(),
            SwarmError::UnknownFunctionKey("ackley".into())
        );
        assert_eq!(lookup_str("rosenbrock").unwrap().name, "Rosenbrock");
    }

    #[test]
    fn test_value_range_sphere_grid() {
        // 2x2 grid over [-5,5]^2 hits only the corners.
        let r = value_range(FunctionKey::Sphere, 1);
        assert_eq!(r.min, 50.0);
        assert_eq!(r.max, 50.0);

        // 3x3 grid includes the origin.
        let r = value_range(FunctionKey::Sphere, 2);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 50.0);
    }

    #[test]
    fn test_value_range_zero_resolution_samples_corner() {
        let r = value_range(FunctionKey::Rosenbrock, 0);
        let corner = rosenbrock(-2.0, -1.0);
        assert_eq!(r.min, corner);
        assert_eq!(r.max, corner);
    }

    #[test]
    fn test_value_range_is_deterministic() {
        let a = value_range(FunctionKey::Michalewicz, 64);
        let b = value_range(FunctionKey::Michalewicz, 64);
        assert_eq!(a, b);
        assert!(a.min < a.max);
    }
}
