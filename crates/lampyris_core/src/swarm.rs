//! The swarm aggregate: population lifecycle and the two simulation clocks.
//!
//! [`SwarmOptimizer::step`] advances the discrete optimization clock by one
//! generation. [`SwarmOptimizer::advance_time`] advances the continuous flash
//! clock. Both mutate the same fireflies but are otherwise independent and may be
//! called in any interleaving.

use crate::error::{Result, SwarmError};
use crate::flash::FlashLogic;
use crate::lifecycle::spawn_uniform;
use crate::movement::MovementLogic;
use crate::objective::{lookup, ObjectiveFunction};
use crate::snapshot::{FireflySnapshot, SwarmSnapshot};
use lampyris_data::{Domain, Firefly, FunctionKey, ParamUpdate, SwarmParams, SwarmStats};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Scale applied to `alpha` for the random walk of a generation's brightest firefly.
pub const LEADER_WALK_SCALE: f64 = 0.1;

/// Read-only view returned by [`SwarmOptimizer::step`].
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    pub generation: u64,
    pub best: Option<&'a Firefly>,
    pub population: &'a [Firefly],
}

#[derive(Debug)]
pub struct SwarmOptimizer<R: Rng = ChaCha8Rng> {
    params: SwarmParams,
    population: Vec<Firefly>,
    generation: u64,
    best: Option<Firefly>,
    rng: R,
}

impl SwarmOptimizer<ChaCha8Rng> {
    /// Optimizer seeded from OS entropy.
    pub fn new(params: SwarmParams) -> Result<Self> {
        Self::with_rng(params, ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(params: SwarmParams, seed: u64) -> Result<Self> {
        Self::with_rng(params, ChaCha8Rng::seed_from_u64(seed))
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    // Written so that NaN is rejected too.
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SwarmError::invalid(name, value))
    }
}

fn check_population(n: usize) -> Result<()> {
    if n == 0 {
        Err(SwarmError::invalid("n", 0.0))
    } else {
        Ok(())
    }
}

fn validate_params(params: &SwarmParams) -> Result<()> {
    check_population(params.n)?;
    check_non_negative("gamma", params.gamma)?;
    check_non_negative("beta0", params.beta0)?;
    check_non_negative("alpha", params.alpha)
}

/// Ascending by value, NaN last, `-0.0 == 0.0`.
fn cmp_value(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// First firefly with the lowest value.
fn population_min(population: &[Firefly]) -> Option<&Firefly> {
    population
        .iter()
        .reduce(|best, f| if f.value < best.value { f } else { best })
}

impl<R: Rng> SwarmOptimizer<R> {
    /// Optimizer drawing all randomness from `rng`. The population starts empty;
    /// call [`initialize`](Self::initialize) before stepping.
    pub fn with_rng(params: SwarmParams, rng: R) -> Result<Self> {
        validate_params(&params)?;
        Ok(Self {
            params,
            population: Vec::new(),
            generation: 0,
            best: None,
            rng,
        })
    }

    /// Optimizer over a caller-supplied population. Every firefly is rebound to
    /// `params.function`; `params.n` is ignored in favor of the population size,
    /// which must be non-empty.
    pub fn with_population(params: SwarmParams, population: Vec<Firefly>, rng: R) -> Result<Self> {
        check_population(population.len())?;
        let mut swarm = Self::with_rng(params, rng)?;
        swarm.population = population;
        for f in &mut swarm.population {
            f.rebind(params.function);
        }
        swarm.params.n = swarm.population.len();
        swarm.recompute_best();
        Ok(swarm)
    }

    /// Replaces the population with `n` fresh fireflies and forgets all history.
    pub fn initialize(&mut self) {
        let function = self.params.function;
        self.population = (0..self.params.n)
            .map(|_| spawn_uniform(function, &mut self.rng))
            .collect();
        self.generation = 0;
        self.recompute_best();
        info!(
            n = self.params.n,
            function = %function,
            best = self.best.as_ref().map(|b| b.value),
            "Swarm initialized"
        );
    }

    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Runs one generation.
    ///
    /// Each firefly `i` visits every other `j` in population order and moves
    /// toward it whenever `j` is brighter. Moves apply immediately, so later
    /// comparisons for the same `i` see its new value, and fireflies earlier in
    /// the population have already moved this generation. A firefly that found
    /// no brighter neighbor takes a damped random walk instead.
    pub fn step(&mut self) -> StepView<'_> {
        let domain = self.domain();
        let SwarmParams {
            gamma, beta0, alpha, ..
        } = self.params;
        let len = self.population.len();

        for i in 0..len {
            let mut attracted = false;
            for j in 0..len {
                if i == j {
                    continue;
                }
                if self.population[j].value < self.population[i].value {
                    let target = self.population[j].position;
                    self.population[i].move_towards(
                        target,
                        beta0,
                        gamma,
                        alpha,
                        &domain,
                        &mut self.rng,
                    );
                    attracted = true;
                }
            }
            if !attracted {
                self.population[i].random_walk(alpha * LEADER_WALK_SCALE, &domain, &mut self.rng);
            }
        }

        self.generation += 1;
        self.update_best();
        debug!(
            generation = self.generation,
            best = self.best.as_ref().map(|b| b.value),
            "Generation complete"
        );

        StepView {
            generation: self.generation,
            best: self.best.as_ref(),
            population: &self.population,
        }
    }

    /// Applies a partial parameter update.
    ///
    /// Everything is validated before anything is changed. A function change
    /// rebinds and re-evaluates every firefly and restarts best tracking; a size
    /// change then grows with fresh fireflies or keeps the `n` lowest values.
    /// Resizing leaves `generation` and the best snapshot alone.
    pub fn set_params(&mut self, update: ParamUpdate) -> Result<()> {
        let function = match update.function.as_deref() {
            Some(raw) => Some(raw.parse::<FunctionKey>().map_err(|e| {
                warn!(key = raw, "Rejected unknown function key");
                SwarmError::from(e)
            })?),
            None => None,
        };
        let checks = [
            update.n.map_or(Ok(()), check_population),
            update.gamma.map_or(Ok(()), |v| check_non_negative("gamma", v)),
            update.beta0.map_or(Ok(()), |v| check_non_negative("beta0", v)),
            update.alpha.map_or(Ok(()), |v| check_non_negative("alpha", v)),
        ];
        if let Some(err) = checks.into_iter().find_map(|c| c.err()) {
            warn!(error = %err, "Rejected parameter update");
            return Err(err);
        }

        if let Some(gamma) = update.gamma {
            self.params.gamma = gamma;
        }
        if let Some(beta0) = update.beta0 {
            self.params.beta0 = beta0;
        }
        if let Some(alpha) = update.alpha {
            self.params.alpha = alpha;
        }

        if let Some(function) = function.filter(|f| *f != self.params.function) {
            self.params.function = function;
            for f in &mut self.population {
                f.rebind(function);
            }
            // Values from different functions are not comparable.
            self.recompute_best();
            info!(function = %function, "Objective function changed");
        }

        if let Some(n) = update.n.filter(|n| *n != self.params.n) {
            self.params.n = n;
            self.resize(n);
            info!(n, "Population resized");
        }

        Ok(())
    }

    fn resize(&mut self, n: usize) {
        let len = self.population.len();
        match n.cmp(&len) {
            Ordering::Greater => {
                let function = self.params.function;
                for _ in len..n {
                    let f = spawn_uniform(function, &mut self.rng);
                    self.population.push(f);
                }
            }
            Ordering::Less => {
                // Stable sort: equal values keep their relative order.
                self.population.sort_by(|a, b| cmp_value(a.value, b.value));
                self.population.truncate(n);
            }
            Ordering::Equal => {}
        }
    }

    /// Advances the flash clock by `delta_ms` milliseconds.
    ///
    /// All females check for nearby male flashes first, against intensities left
    /// by the previous tick; only then does every firefly update its flash.
    ///
    /// `delta_ms` must be non-negative.
    pub fn advance_time(&mut self, delta_ms: f64) {
        debug_assert!(delta_ms >= 0.0, "advance_time called with {delta_ms}");
        let domain = self.domain();

        for i in 0..self.population.len() {
            if self.population[i].responds_to(&self.population, &domain) {
                self.population[i].begin_response(&mut self.rng);
            }
        }
        for f in &mut self.population {
            f.update_flash(delta_ms);
        }
    }

    #[must_use]
    pub fn stats(&self) -> Option<SwarmStats> {
        self.best.as_ref().map(|best| SwarmStats {
            generation: self.generation,
            best_value: best.value,
            best_x: best.position.x,
            best_y: best.position.y,
            population_size: self.population.len(),
        })
    }

    pub fn clear_trails(&mut self) {
        for f in &mut self.population {
            f.trail.clear();
        }
    }

    fn update_best(&mut self) {
        let Some(candidate) = population_min(&self.population) else {
            return;
        };
        let improves = self
            .best
            .as_ref()
            .map_or(true, |best| candidate.value < best.value);
        if improves {
            self.best = Some(candidate.clone());
        }
    }

    fn recompute_best(&mut self) {
        self.best = None;
        self.update_best();
    }

    #[must_use]
    pub fn params(&self) -> &SwarmParams {
        &self.params
    }

    #[must_use]
    pub fn population(&self) -> &[Firefly] {
        &self.population
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Best-ever snapshot. Never aliases a live firefly.
    #[must_use]
    pub fn best(&self) -> Option<&Firefly> {
        self.best.as_ref()
    }

    /// The live firefly that produced the best snapshot, matched by id. It may have
    /// moved since.
    #[must_use]
    pub fn live_best(&self) -> Option<&Firefly> {
        let best = self.best.as_ref()?;
        self.population.iter().find(|f| f.id == best.id)
    }

    #[must_use]
    pub fn objective(&self) -> &'static ObjectiveFunction {
        lookup(self.params.function)
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.objective().domain
    }

    #[must_use]
    pub fn snapshot(&self) -> SwarmSnapshot {
        SwarmSnapshot {
            generation: self.generation,
            function: self.params.function,
            domain: self.domain(),
            best: self.best.as_ref().map(FireflySnapshot::from),
            fireflies: self.population.iter().map(FireflySnapshot::from).collect(),
        }
    }
}
