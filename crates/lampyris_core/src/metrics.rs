//! Run metrics and logging setup.

use lampyris_data::SwarmStats;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Generations between two progress log lines.
pub const LOG_EVERY: u64 = 100;

/// Counters for a simulation run.
pub struct Metrics {
    generations: AtomicU64,
    frames: AtomicU64,
    step_nanos: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            frames: AtomicU64::new(0),
            step_nanos: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation with its duration.
    pub fn record_generation(&self, duration: Duration, stats: Option<&SwarmStats>) {
        let n = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.step_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if n.is_multiple_of(LOG_EVERY) {
            if let Some(stats) = stats {
                tracing::info!(
                    generation = stats.generation,
                    best_value = stats.best_value,
                    best_x = stats.best_x,
                    best_y = stats.best_y,
                    population = stats.population_size,
                    mean_step_us = self.mean_step().as_micros() as u64,
                    "Swarm progress"
                );
            }
        }
    }

    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Average wall time of one generation.
    #[must_use]
    pub fn mean_step(&self) -> Duration {
        let n = self.generations();
        if n == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.step_nanos.load(Ordering::Relaxed) / n)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
