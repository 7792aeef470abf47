//! Demo configuration structures and loaders.
use std::env;

/// Settings for one patrol run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Upper bound on host ticks before giving up.
    pub max_ticks: u32,
    /// Starting charge, 0..=100.
    pub battery: u8,
    /// Number of waypoints on the route.
    pub waypoints: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_ticks: 50,
            battery: 100,
            waypoints: 3,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_DEMO_MAX_TICKS` - Host tick limit (default: 50)
    /// - `BT_DEMO_BATTERY` - Initial battery charge, clamped to 100 (default: 100)
    /// - `BT_DEMO_WAYPOINTS` - Patrol route length (default: 3)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`DemoConfig::from_env`] but reads values through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ticks) = parse::<u32, _>(&lookup, "BT_DEMO_MAX_TICKS") {
            config.max_ticks = ticks.max(1);
        }

        if let Some(charge) = parse::<u8, _>(&lookup, "BT_DEMO_BATTERY") {
            config.battery = charge.min(100);
        }

        if let Some(count) = parse::<u32, _>(&lookup, "BT_DEMO_WAYPOINTS") {
            config.waypoints = count.max(1);
        }

        config
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(DemoConfig::from_vars(|_| None), DemoConfig::default());
    }

    #[test]
    fn reads_and_clamps_values() {
        let config = DemoConfig::from_vars(lookup(&[
            ("BT_DEMO_MAX_TICKS", "0"),
            ("BT_DEMO_BATTERY", "300"),
            ("BT_DEMO_WAYPOINTS", " 5 "),
        ]));

        // 300 does not fit in a u8, so the default is kept
        assert_eq!(config.battery, 100);
        assert_eq!(config.max_ticks, 1);
        assert_eq!(config.waypoints, 5);
    }

    #[test]
    fn ignores_garbage() {
        let config = DemoConfig::from_vars(lookup(&[
            ("BT_DEMO_BATTERY", "full"),
            ("BT_DEMO_MAX_TICKS", "-3"),
        ]));
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn battery_above_full_is_clamped() {
        let config = DemoConfig::from_vars(lookup(&[("BT_DEMO_BATTERY", "180")]));
        assert_eq!(config.battery, 100);
    }
}
