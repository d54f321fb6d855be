//! Build metadata embedded by `build.rs`

use serde::Serialize;

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifies the running binary in status responses and the startup banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    /// Cargo profile, `debug` or `release`
    pub profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_env(
            option_env!("FITCALC_BUILD_NUMBER"),
            option_env!("FITCALC_BUILD_TIMESTAMP"),
            option_env!("FITCALC_BUILD_PROFILE"),
        )
    }

    /// Missing or malformed values fall back to build 0 and "unknown"
    fn from_env(
        number: Option<&'static str>,
        timestamp: Option<&'static str>,
        profile: Option<&'static str>,
    ) -> Self {
        Self {
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
            profile: profile.unwrap_or("unknown"),
        }
    }

    pub fn banner(&self, config: &Config) -> String {
        format!(
            "fitcalc {} (build {}, {}, compiled {})\ncarb policy: {} | meal rounding: {}",
            self.version,
            self.build_number,
            self.profile,
            self.build_timestamp,
            config.carb_policy.as_str(),
            config.meal_rounding.as_str(),
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(config: &Config) {
    eprintln!("{}", BuildInfo::current().banner(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CarbPolicy, MealRounding};

    #[test]
    fn test_from_env_fallbacks() {
        let info = BuildInfo::from_env(Some("42"), Some("2026-03-07T09:30:00Z"), Some("release"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.profile, "release");

        let info = BuildInfo::from_env(Some("12a"), None, None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");
    }

    #[test]
    fn test_banner_shows_active_policies() {
        let info = BuildInfo::from_env(Some("7"), Some("2026-03-07T09:30:00Z"), Some("debug"));
        let config = Config {
            carb_policy: CarbPolicy::ClampAtZero,
            meal_rounding: MealRounding::Reconcile,
        };
        assert_eq!(
            info.banner(&config),
            format!(
                "fitcalc {} (build 7, debug, compiled 2026-03-07T09:30:00Z)\n\
                 carb policy: clamp | meal rounding: reconcile",
                VERSION
            )
        );
    }
}
