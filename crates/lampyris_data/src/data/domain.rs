use serde::{Deserialize, Serialize};

/// Point in the 2-D search space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_sq(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

/// Rectangular search bounds of an objective function.
///
/// Callers are expected to keep `x_min < x_max` and `y_min < y_max`. Degenerate
/// bounds are tolerated (nothing panics) but sampling over them is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.x_min < self.x_max && self.y_min < self.y_max)
    }

    /// Per-axis clamp into `[min, max]`.
    ///
    /// Uses `max`/`min` rather than `f64::clamp` so that degenerate or inverted
    /// bounds never panic.
    #[must_use]
    pub fn clamp(&self, p: Position) -> Position {
        Position {
            x: p.x.max(self.x_min).min(self.x_max),
            y: p.y.max(self.y_min).min(self.y_max),
        }
    }

    #[must_use]
    pub fn contains(&self, p: &Position) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// A known optimum `(x, y) -> value` of an objective function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Optimum {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}
