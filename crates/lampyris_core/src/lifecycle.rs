use crate::objective::lookup;
use lampyris_data::{Domain, Firefly, Flash, FunctionKey, Gender, Position, Trail};
use rand::Rng;
use std::ops::Range;
use uuid::Uuid;

pub const MALE_INTERVAL_MS: Range<f64> = 1500.0..3000.0;
pub const FEMALE_INTERVAL_MS: Range<f64> = 3000.0..6000.0;
pub const FLASH_DURATION_MS: Range<f64> = 150.0..250.0;

/// Builds a firefly at `position`, evaluated once under `function`, with a
/// random gender and randomized flash timing.
pub fn create_firefly_with_rng<R: Rng>(
    position: Position,
    function: FunctionKey,
    rng: &mut R,
) -> Firefly {
    let id = Uuid::from_u128(rng.gen::<u128>());
    let gender = if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let interval = match gender {
        Gender::Male => rng.gen_range(MALE_INTERVAL_MS),
        Gender::Female => rng.gen_range(FEMALE_INTERVAL_MS),
    };
    let duration = rng.gen_range(FLASH_DURATION_MS);
    // Start somewhere inside the cycle so a fresh swarm does not flash in unison.
    let phase = rng.gen_range(0.0..interval);

    let value = lookup(function).evaluate(position);
    Firefly {
        id,
        position,
        value,
        brightness: -value,
        function,
        gender,
        trail: Trail::new(),
        flash: Flash {
            phase,
            interval,
            duration,
            intensity: 0.0,
            is_flashing: false,
            response_delay: 0.0,
            is_responding: false,
        },
    }
}

/// Uniformly random position inside `domain`.
pub fn random_position<R: Rng>(domain: &Domain, rng: &mut R) -> Position {
    Position {
        x: domain.x_min + rng.gen::<f64>() * domain.width(),
        y: domain.y_min + rng.gen::<f64>() * domain.height(),
    }
}

/// Creates a firefly at a uniformly random position of the function's domain.
pub fn spawn_uniform<R: Rng>(function: FunctionKey, rng: &mut R) -> Firefly {
    let domain = lookup(function).domain;
    let position = random_position(&domain, rng);
    create_firefly_with_rng(position, function, rng)
}
