//! Demo configuration.
use std::env;

/// Settings for one demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Number of ticks to run.
    pub ticks: u32,
    /// Simulated seconds per tick.
    pub delta: f32,
    /// Seed for the guard's random selector. Entropy when unset.
    pub seed: Option<u64>,
}

impl DemoConfig {
    pub const DEFAULT_TICKS: u32 = 40;
    pub const DEFAULT_DELTA: f32 = 0.25;

    /// Construct demo configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUARD_DEMO_TICKS` - Number of ticks to run (default: 40, minimum 1)
    /// - `GUARD_DEMO_DELTA` - Seconds per tick (default: 0.25, must be positive)
    /// - `GUARD_DEMO_SEED` - Random selector seed (default: unset)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u32>("GUARD_DEMO_TICKS") {
            config.ticks = ticks.max(1);
        }
        if let Some(delta) = read_env::<f32>("GUARD_DEMO_DELTA").filter(|d| valid_delta(*d)) {
            config.delta = delta;
        }
        config.seed = read_env::<u64>("GUARD_DEMO_SEED");

        config
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        ticks: Option<u32>,
        delta: Option<f32>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(ticks) = ticks {
            self.ticks = ticks.max(1);
        }
        if let Some(delta) = delta.filter(|d| valid_delta(*d)) {
            self.delta = delta;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: Self::DEFAULT_TICKS,
            delta: Self::DEFAULT_DELTA,
            seed: None,
        }
    }
}

fn valid_delta(delta: f32) -> bool {
    delta.is_finite() && delta > 0.0
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_set_values_only() {
        let config = DemoConfig::default().with_overrides(Some(0), None, Some(9));

        assert_eq!(config.ticks, 1);
        assert_eq!(config.delta, DemoConfig::DEFAULT_DELTA);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn non_positive_delta_is_ignored() {
        let config = DemoConfig::default()
            .with_overrides(None, Some(-1.0), None)
            .with_overrides(None, Some(f32::NAN), None);

        assert_eq!(config.delta, DemoConfig::DEFAULT_DELTA);
    }
}
