use super::domain::Position;
use super::params::FunctionKey;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Maximum number of past positions kept per firefly.
pub const TRAIL_CAPACITY: usize = 20;

/// Sex of a firefly. Fixed at creation; drives flash cadence and response behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Bounded history of recent positions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<Position>,
}

impl Trail {
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    /// Appends a position, evicting the oldest once the trail is full.
    pub fn push(&mut self, p: Position) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.points.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Position> {
        self.points.back()
    }
}

/// Observable state of the flash timing machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashState {
    Idle,
    ResponseWaiting,
    Flashing,
}

/// Bioluminescent timing fields. All times are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    /// Time elapsed in the current cycle.
    pub phase: f64,
    /// Time until the next natural flash.
    pub interval: f64,
    pub duration: f64,
    /// Current brightness in `[0, 1]`.
    pub intensity: f64,
    pub is_flashing: bool,
    /// Countdown until a pending response flash fires.
    pub response_delay: f64,
    pub is_responding: bool,
}

impl Flash {
    #[must_use]
    pub fn state(&self) -> FlashState {
        if self.is_flashing {
            FlashState::Flashing
        } else if self.is_responding && self.response_delay > 0.0 {
            FlashState::ResponseWaiting
        } else {
            FlashState::Idle
        }
    }
}

/// A single agent of the swarm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firefly {
    pub id: Uuid,
    pub position: Position,
    /// Objective value at `position`. Lower is brighter.
    pub value: f64,
    /// Always `-value`.
    pub brightness: f64,
    pub function: FunctionKey,
    pub gender: Gender,
    pub trail: Trail,
    pub flash: Flash,
}

impl Firefly {
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_evicts_oldest() {
        let mut trail = Trail::new();
        for i in 0..(TRAIL_CAPACITY + 5) {
            trail.push(Position::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        assert_eq!(trail.iter().next().map(|p| p.x), Some(5.0));
        assert_eq!(trail.last().map(|p| p.x), Some((TRAIL_CAPACITY + 4) as f64));
    }

    #[test]
    fn test_flash_state_derivation() {
        let mut flash = Flash {
            phase: 0.0,
            interval: 2000.0,
            duration: 200.0,
            intensity: 0.0,
            is_flashing: false,
            response_delay: 0.0,
            is_responding: false,
        };
        assert_eq!(flash.state(), FlashState::Idle);
        flash.is_responding = true;
        flash.response_delay = 450.0;
        assert_eq!(flash.state(), FlashState::ResponseWaiting);
        flash.is_flashing = true;
        assert_eq!(flash.state(), FlashState::Flashing);
    }
}
