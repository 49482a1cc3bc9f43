//! Firefly movement: attraction toward brighter neighbors and random walks.

use crate::objective::lookup;
use lampyris_data::{Domain, Firefly, FunctionKey, Position};
use rand::Rng;

pub trait MovementLogic {
    /// Moves toward `other` with attractiveness `beta0 * exp(-gamma * r^2)` plus
    /// uniform noise scaled by `alpha` and each axis' extent.
    fn move_towards<R: Rng>(
        &mut self,
        other: Position,
        beta0: f64,
        gamma: f64,
        alpha: f64,
        domain: &Domain,
        rng: &mut R,
    );

    /// Noise-only move, used by the brightest firefly of a generation.
    fn random_walk<R: Rng>(&mut self, alpha: f64, domain: &Domain, rng: &mut R);

    fn clamp_to_domain(&mut self, domain: &Domain);

    /// Recomputes `value` and `brightness` at the current position.
    fn evaluate(&mut self);

    /// Switches objective function: clamp into its domain and re-evaluate.
    fn rebind(&mut self, function: FunctionKey);
}

#[inline]
fn noise<R: Rng>(alpha: f64, extent: f64, rng: &mut R) -> f64 {
    alpha * extent * (rng.gen::<f64>() - 0.5)
}

impl MovementLogic for Firefly {
    fn move_towards<R: Rng>(
        &mut self,
        other: Position,
        beta0: f64,
        gamma: f64,
        alpha: f64,
        domain: &Domain,
        rng: &mut R,
    ) {
        self.trail.push(self.position);

        let r_sq = self.position.distance_sq(&other);
        let beta = beta0 * (-gamma * r_sq).exp();

        let nx = noise(alpha, domain.width(), rng);
        let ny = noise(alpha, domain.height(), rng);
        self.position.x += beta * (other.x - self.position.x) + nx;
        self.position.y += beta * (other.y - self.position.y) + ny;

        self.clamp_to_domain(domain);
        self.evaluate();
    }

    fn random_walk<R: Rng>(&mut self, alpha: f64, domain: &Domain, rng: &mut R) {
        self.trail.push(self.position);

        self.position.x += noise(alpha, domain.width(), rng);
        self.position.y += noise(alpha, domain.height(), rng);

        self.clamp_to_domain(domain);
        self.evaluate();
    }

    fn clamp_to_domain(&mut self, domain: &Domain) {
        self.position = domain.clamp(self.position);
    }

    fn evaluate(&mut self) {
        self.value = lookup(self.function).evaluate(self.position);
        self.brightness = -self.value;
    }

    fn rebind(&mut self, function: FunctionKey) {
        self.function = function;
        self.clamp_to_domain(&lookup(function).domain);
        self.evaluate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::create_firefly_with_rng;
    use lampyris_data::TRAIL_CAPACITY;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sphere_domain() -> Domain {
        lookup(FunctionKey::Sphere).domain
    }

    #[test]
    fn test_full_attraction_without_noise_lands_on_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut f = create_firefly_with_rng(Position::new(2.0, 2.0), FunctionKey::Sphere, &mut rng);
        // gamma = 0 => beta = beta0 = 1 regardless of distance.
        f.move_towards(Position::new(-1.0, 0.5), 1.0, 0.0, 0.0, &sphere_domain(), &mut rng);
        assert_eq!(f.position, Position::new(-1.0, 0.5));
        assert_eq!(f.value, 1.25);
        assert_eq!(f.brightness, -1.25);
        assert_eq!(f.trail.last(), Some(&Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_attraction_decays_with_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut f = create_firefly_with_rng(Position::new(0.0, 0.0), FunctionKey::Sphere, &mut rng);
        // r^2 = 4, gamma = 0.25 => beta = e^-1
        f.move_towards(Position::new(2.0, 0.0), 1.0, 0.25, 0.0, &sphere_domain(), &mut rng);
        let expected = 2.0 * (-1.0f64).exp();
        assert!((f.position.x - expected).abs() < 1e-12);
        assert_eq!(f.position.y, 0.0);
    }

    #[test]
    fn test_move_clamps_to_domain() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut f =
            create_firefly_with_rng(Position::new(4.9, -4.9), FunctionKey::Sphere, &mut rng);
        // beta0 = 3 overshoots the target far outside the box.
        f.move_towards(Position::new(-4.9, 4.9), 3.0, 0.0, 0.0, &sphere_domain(), &mut rng);
        assert_eq!(f.position, Position::new(-5.0, 5.0));
        assert_eq!(f.value, 50.0);
    }

    #[test]
    fn test_random_walk_noise_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let domain = sphere_domain();
        let mut f = create_firefly_with_rng(Position::new(0.0, 0.0), FunctionKey::Sphere, &mut rng);
        for _ in 0..200 {
            let before = f.position;
            f.random_walk(0.1, &domain, &mut rng);
            // alpha * extent * 0.5 = 0.5
            assert!((f.position.x - before.x).abs() <= 0.5);
            assert!((f.position.y - before.y).abs() <= 0.5);
            assert!(domain.contains(&f.position));
        }
        assert_eq!(f.trail.len(), TRAIL_CAPACITY);
    }

    #[test]
    fn test_rebind_clamps_and_reevaluates() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut f =
            create_firefly_with_rng(Position::new(-5.0, 4.0), FunctionKey::Sphere, &mut rng);
        f.rebind(FunctionKey::Michalewicz);
        assert_eq!(f.function, FunctionKey::Michalewicz);
        assert_eq!(f.position.x, 0.0);
        assert!((f.position.y - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(f.value, lookup(FunctionKey::Michalewicz).evaluate(f.position));
    }
}
