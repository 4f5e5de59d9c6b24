//! Snowflake batch generation.

use log::{debug, info, warn};
use rand::Rng;

use crate::constants::*;
use crate::error::{Result, StageError};
use crate::probe::ImageProbe;
use crate::snowflake::{FlakeAppearance, SnowflakeDescriptor};

/// Somewhere generated flakes are appended to, in generation order.
pub trait SnowContainer {
    fn append(&mut self, flake: &SnowflakeDescriptor, appearance: &FlakeAppearance) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnowfallConfig {
    pub total: usize,
    pub max_size: f64,
    pub image_url: String,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            total: TOTAL_SNOWFLAKES,
            max_size: MAX_SNOWFLAKE_SIZE,
            image_url: SNOWFLAKE_IMAGE_URL.to_string(),
        }
    }
}

pub struct Snowfall {
    config: SnowfallConfig,
    generated: usize,
    appearance: Option<FlakeAppearance>,
}

impl Snowfall {
    pub fn new(config: SnowfallConfig) -> Result<Self> {
        if !config.max_size.is_finite() || config.max_size <= MIN_SNOWFLAKE_SIZE {
            return Err(StageError::InvalidMaxSize(config.max_size));
        }
        Ok(Self {
            config,
            generated: 0,
            appearance: None,
        })
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    /// Number of flakes appended so far.
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Appearance chosen for the batch, once the probe has answered.
    pub fn appearance(&self) -> Option<&FlakeAppearance> {
        self.appearance.as_ref()
    }

    /// Probes the flake image, then appends `total` randomized flakes to `container`.
    ///
    /// The appearance is decided once for the whole batch. A finished batch is
    /// never generated again, and a batch cut short by a failed append stays
    /// failed: later calls leave the container untouched.
    pub async fn generate<P, C, R>(&mut self, probe: &P, container: &mut C, rng: &mut R) -> Result<usize>
    where
        P: ImageProbe + ?Sized,
        C: SnowContainer + ?Sized,
        R: Rng + ?Sized,
    {
        if self.appearance.is_some() {
            warn!("snowfall already generated {} flakes, ignoring", self.generated);
            return Ok(self.generated);
        }
        if self.generated > 0 {
            return Err(StageError::IncompleteSnowfall {
                generated: self.generated,
                total: self.config.total,
            });
        }

        let available = probe.is_available(&self.config.image_url).await;
        let appearance = FlakeAppearance::from_probe(available, &self.config.image_url);
        debug!("flake image '{}' available: {}", self.config.image_url, available);

        for _ in 0..self.config.total {
            let flake = SnowflakeDescriptor::random(rng, self.config.max_size);
            container.append(&flake, &appearance)?;
            self.generated += 1;
        }

        // Only a complete batch counts as generated
        self.appearance = Some(appearance.clone());
        info!("generated {} snowflakes ({:?})", self.generated, appearance);
        Ok(self.generated)
    }
}

/// A flake as stored by [`MemoryContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFlake {
    pub descriptor: SnowflakeDescriptor,
    pub appearance: FlakeAppearance,
}

/// Container that keeps flakes in memory, for hosts that draw them itself.
#[derive(Debug, Default, Clone)]
pub struct MemoryContainer {
    pub flakes: Vec<PlacedFlake>,
}

impl SnowContainer for MemoryContainer {
    fn append(&mut self, flake: &SnowflakeDescriptor, appearance: &FlakeAppearance) -> Result<()> {
        self.flakes.push(PlacedFlake {
            descriptor: *flake,
            appearance: appearance.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::KnownImages;
    use futures::executor::block_on;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FailingContainer {
        accepted: usize,
        capacity: usize,
    }

    impl SnowContainer for FailingContainer {
        fn append(&mut self, _: &SnowflakeDescriptor, _: &FlakeAppearance) -> Result<()> {
            if self.accepted == self.capacity {
                return Err(StageError::Dom("container detached".into()));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[test]
    fn default_config_matches_page_constants() {
        let config = SnowfallConfig::default();
        assert_eq!(config.total, 50);
        assert_eq!(config.max_size, 2.0);
        assert_eq!(config.image_url, "snowcorn.png");
    }

    #[test]
    fn rejects_max_size_not_above_one() {
        for max_size in [1.0, 0.5, f64::NAN, f64::INFINITY] {
            let config = SnowfallConfig { max_size, ..SnowfallConfig::default() };
            assert!(matches!(Snowfall::new(config), Err(StageError::InvalidMaxSize(_))));
        }
    }

    #[test]
    fn generates_configured_total() {
        let mut snowfall = Snowfall::new(SnowfallConfig::default()).unwrap();
        let mut container = MemoryContainer::default();
        let mut rng = StdRng::seed_from_u64(1);

        let count = block_on(snowfall.generate(&KnownImages::default(), &mut container, &mut rng)).unwrap();

        assert_eq!(count, 50);
        assert_eq!(container.flakes.len(), 50);
        assert_eq!(snowfall.generated(), 50);
        assert_eq!(snowfall.appearance(), Some(&FlakeAppearance::Circle));
    }

    #[test]
    fn second_generate_is_ignored() {
        let mut snowfall = Snowfall::new(SnowfallConfig { total: 3, ..SnowfallConfig::default() }).unwrap();
        let mut container = MemoryContainer::default();
        let mut rng = StdRng::seed_from_u64(2);
        let probe = KnownImages::default();

        block_on(snowfall.generate(&probe, &mut container, &mut rng)).unwrap();
        let again = block_on(snowfall.generate(&probe, &mut container, &mut rng)).unwrap();

        assert_eq!(again, 3);
        assert_eq!(container.flakes.len(), 3);
    }

    #[test]
    fn append_failure_stops_generation() {
        let mut snowfall = Snowfall::new(SnowfallConfig::default()).unwrap();
        let mut container = FailingContainer { accepted: 0, capacity: 4 };
        let mut rng = StdRng::seed_from_u64(3);

        let result = block_on(snowfall.generate(&KnownImages::default(), &mut container, &mut rng));

        assert!(matches!(result, Err(StageError::Dom(_))));
        assert_eq!(snowfall.generated(), 4);
        assert_eq!(snowfall.appearance(), None);
    }

    #[test]
    fn retry_after_partial_batch_stays_an_error() {
        let mut snowfall = Snowfall::new(SnowfallConfig::default()).unwrap();
        let mut container = FailingContainer { accepted: 0, capacity: 4 };
        let mut rng = StdRng::seed_from_u64(5);
        let probe = KnownImages::default();

        assert!(block_on(snowfall.generate(&probe, &mut container, &mut rng)).is_err());
        container.capacity = 100;
        let retry = block_on(snowfall.generate(&probe, &mut container, &mut rng));

        assert!(matches!(
            retry,
            Err(StageError::IncompleteSnowfall { generated: 4, total: 50 })
        ));
        assert_eq!(container.accepted, 4);
    }

    #[test]
    fn failure_on_first_append_can_be_retried() {
        let mut snowfall = Snowfall::new(SnowfallConfig { total: 5, ..SnowfallConfig::default() }).unwrap();
        let mut container = FailingContainer { accepted: 0, capacity: 0 };
        let mut rng = StdRng::seed_from_u64(6);
        let probe = KnownImages::default();

        assert!(block_on(snowfall.generate(&probe, &mut container, &mut rng)).is_err());
        container.capacity = 5;
        let retry = block_on(snowfall.generate(&probe, &mut container, &mut rng)).unwrap();

        assert_eq!(retry, 5);
        assert_eq!(container.accepted, 5);
    }

    #[test]
    fn zero_total_appends_nothing() {
        let mut snowfall = Snowfall::new(SnowfallConfig { total: 0, ..SnowfallConfig::default() }).unwrap();
        let mut container = MemoryContainer::default();
        let mut rng = StdRng::seed_from_u64(4);

        let count = block_on(snowfall.generate(&KnownImages::new(["snowcorn.png"]), &mut container, &mut rng)).unwrap();

        assert_eq!(count, 0);
        assert!(container.flakes.is_empty());
        assert!(matches!(snowfall.appearance(), Some(FlakeAppearance::Image { .. })));
    }
}
