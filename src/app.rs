//! Headless driver: paces the generation clock and the flash clock from a
//! simulated frame loop.

use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::snapshot::SwarmSnapshot;
use crate::model::state::SwarmStats;
use crate::model::swarm::SwarmOptimizer;
use anyhow::{Context, Result};
use std::time::Instant;

pub struct App {
    pub config: AppConfig,
    pub swarm: SwarmOptimizer,
    pub metrics: Metrics,
    /// Simulated time accumulated toward the next generation.
    step_accumulator: f64,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        let params = config.swarm.params();
        let mut swarm = match config.swarm.seed {
            Some(seed) => SwarmOptimizer::with_seed(params, seed),
            None => SwarmOptimizer::new(params),
        }
        .context("creating swarm")?;
        swarm.initialize();

        tracing::info!(
            fingerprint = %config.fingerprint(),
            function = %params.function,
            n = params.n,
            "Run configured"
        );

        Ok(Self {
            config,
            swarm,
            metrics: Metrics::new(),
            step_accumulator: 0.0,
        })
    }

    /// One animation frame: the flash clock advances by the scaled frame time and
    /// the swarm steps once for every full step interval that has elapsed.
    pub fn frame(&mut self) {
        let clock = &self.config.clock;
        let elapsed = clock.frame_ms * clock.time_scale;
        self.swarm.advance_time(elapsed);
        self.metrics.record_frame();

        self.step_accumulator += elapsed;
        while self.step_accumulator >= clock.step_interval_ms && !self.finished() {
            self.step_accumulator -= clock.step_interval_ms;
            let started = Instant::now();
            self.swarm.step();
            self.metrics
                .record_generation(started.elapsed(), self.swarm.stats().as_ref());
        }
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.swarm.generation() >= self.config.clock.generations
    }

    /// Runs frames until the configured number of generations is reached.
    pub fn run(&mut self) -> Result<SwarmStats> {
        anyhow::ensure!(
            self.config.clock.time_scale > 0.0 || self.config.clock.generations == 0,
            "time scale of zero never reaches a generation"
        );
        while !self.finished() {
            self.frame();
        }
        tracing::info!(
            generations = self.metrics.generations(),
            frames = self.metrics.frames(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Run finished"
        );
        self.swarm.stats().context("swarm has no best solution")
    }

    #[must_use]
    pub fn snapshot(&self) -> SwarmSnapshot {
        self.swarm.snapshot()
    }
}
