//! Bioluminescent timing: per-firefly flash cycle and female response flashes.
//!
//! Each firefly runs a small state machine (see [`FlashState`]) driven by
//! [`FlashLogic::update_flash`]. Times are milliseconds of caller-supplied
//! simulation time.
//!
//! [`FlashState`]: lampyris_data::FlashState

use lampyris_data::{Domain, Firefly};
use rand::Rng;
use std::ops::Range;

/// Fraction of the flash spent ramping up.
pub const ATTACK_FRACTION: f64 = 0.2;
/// Exponential decay rate after the attack.
pub const DECAY_RATE: f64 = 3.0;
/// A female ignores males when her own flash is due within this window.
pub const IMMINENT_FLASH_MS: f64 = 500.0;
/// Response radius as a fraction of the larger domain side.
pub const RESPONSE_RADIUS_FRACTION: f64 = 0.2;
/// A male counts as visibly flashing above this intensity.
pub const VISIBLE_INTENSITY: f64 = 0.5;
pub const RESPONSE_DELAY_MS: Range<f64> = 400.0..600.0;

/// Intensity of a flash at normalized time `t = phase / duration`, or `None`
/// once the flash is over.
#[must_use]
pub fn envelope(t: f64) -> Option<f64> {
    if t < ATTACK_FRACTION {
        Some(t / ATTACK_FRACTION)
    } else if t < 1.0 {
        Some((-DECAY_RATE * (t - ATTACK_FRACTION)).exp())
    } else {
        None
    }
}

pub trait FlashLogic {
    /// Advances the timing machine by `delta_ms`.
    fn update_flash(&mut self, delta_ms: f64);

    /// Whether this firefly would start a response given the current population.
    /// Pure query; see [`FlashLogic::check_for_nearby_flash`].
    fn responds_to(&self, population: &[Firefly], domain: &Domain) -> bool;

    /// Arms a response flash with a random delay.
    fn begin_response<R: Rng>(&mut self, rng: &mut R);

    /// Females only: start a delayed response flash when a visibly flashing male
    /// is within range. At most one trigger per call. Returns whether it fired.
    fn check_for_nearby_flash<R: Rng>(
        &mut self,
        population: &[Firefly],
        domain: &Domain,
        rng: &mut R,
    ) -> bool {
        if self.responds_to(population, domain) {
            self.begin_response(rng);
            true
        } else {
            false
        }
    }
}

impl FlashLogic for Firefly {
    fn update_flash(&mut self, delta_ms: f64) {
        let flash = &mut self.flash;

        if flash.is_responding && flash.response_delay > 0.0 {
            // Natural cycle is suspended while a response is pending.
            flash.response_delay -= delta_ms;
            if flash.response_delay <= 0.0 {
                flash.is_flashing = true;
                flash.phase = 0.0;
                flash.response_delay = 0.0;
            }
        } else {
            flash.phase += delta_ms;
            if !flash.is_flashing && flash.phase >= flash.interval {
                flash.is_flashing = true;
                flash.phase = 0.0;
            }
        }

        if flash.is_flashing {
            match envelope(flash.phase / flash.duration) {
                Some(intensity) => flash.intensity = intensity,
                None => {
                    flash.is_flashing = false;
                    flash.intensity = 0.0;
                    flash.is_responding = false;
                }
            }
        }
    }

    fn responds_to(&self, population: &[Firefly], domain: &Domain) -> bool {
        let flash = &self.flash;
        if !self.is_female() || flash.is_flashing || flash.is_responding {
            return false;
        }
        if flash.interval - flash.phase < IMMINENT_FLASH_MS {
            return false;
        }

        let radius = RESPONSE_RADIUS_FRACTION * domain.width().max(domain.height());
        population.iter().any(|other| {
            other.id != self.id
                && other.is_male()
                && other.flash.intensity > VISIBLE_INTENSITY
                && self.position.distance(&other.position) <= radius
        })
    }

    fn begin_response<R: Rng>(&mut self, rng: &mut R) {
        self.flash.response_delay = rng.gen_range(RESPONSE_DELAY_MS);
        self.flash.is_responding = true;
    }
}
