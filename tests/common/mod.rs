pub mod macros;

use lampyris_lib::model::lifecycle;
use lampyris_lib::model::state::{Firefly, FunctionKey, Gender, Position, SwarmParams};
use lampyris_lib::model::swarm::SwarmOptimizer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct SwarmBuilder {
    params: SwarmParams,
    seed: u64,
    fireflies: Vec<(Position, Option<Gender>)>,
    staging: Option<Box<dyn FnMut(&mut Firefly)>>,
}

#[allow(dead_code)]
impl SwarmBuilder {
    pub fn new() -> Self {
        Self {
            params: SwarmParams::default(),
            seed: 42,
            fireflies: Vec::new(),
            staging: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_function(mut self, function: FunctionKey) -> Self {
        self.params.function = function;
        self
    }

    pub fn with_params<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SwarmParams),
    {
        modifier(&mut self.params);
        self
    }

    pub fn with_firefly(mut self, x: f64, y: f64) -> Self {
        self.fireflies.push((Position::new(x, y), None));
        self
    }

    pub fn with_gendered_firefly(mut self, x: f64, y: f64, gender: Gender) -> Self {
        self.fireflies.push((Position::new(x, y), Some(gender)));
        self
    }

    /// Applied to every staged firefly before the swarm takes ownership.
    pub fn with_staging<F>(mut self, stage: F) -> Self
    where
        F: FnMut(&mut Firefly) + 'static,
    {
        self.staging = Some(Box::new(stage));
        self
    }

    /// Staged fireflies are used verbatim; otherwise the swarm is initialized
    /// with `params.n` random fireflies.
    pub fn build(mut self) -> SwarmOptimizer {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        if self.fireflies.is_empty() {
            let mut swarm =
                SwarmOptimizer::with_rng(self.params, rng).expect("Failed to create swarm");
            swarm.initialize();
            return swarm;
        }

        let function = self.params.function;
        let population: Vec<Firefly> = self
            .fireflies
            .into_iter()
            .map(|(p, gender)| {
                let mut f = lifecycle::create_firefly_with_rng(p, function, &mut rng);
                if let Some(g) = gender {
                    f.gender = g;
                }
                if let Some(stage) = self.staging.as_mut() {
                    stage(&mut f);
                }
                f
            })
            .collect();
        SwarmOptimizer::with_population(self.params, population, rng)
            .expect("Failed to create swarm")
    }
}
