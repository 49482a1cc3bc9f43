/// Asserts that the swarm holds exactly the expected number of fireflies.
#[macro_export]
macro_rules! assert_population {
    ($swarm:expr, $count:expr) => {
        assert_eq!(
            $swarm.population().len(),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts that every firefly lies inside the swarm's active domain.
#[macro_export]
macro_rules! assert_inside_domain {
    ($swarm:expr) => {
        let domain = $swarm.domain();
        for f in $swarm.population() {
            assert!(
                domain.contains(&f.position),
                "Firefly {} at {:?} is outside {:?}",
                f.id,
                f.position,
                domain
            );
        }
    };
}
