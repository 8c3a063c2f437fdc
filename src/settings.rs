use crate::logging::LogLevel;

pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_200;
pub const DEFAULT_CONTACT_DELAY_MS: u32 = 900;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const CAROUSEL_INTERVAL_MS_BOUNDS: (u32, u32) = (1_000, 60_000);
const CONTACT_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);

pub const CAROUSEL_INTERVAL_ATTR: &str = "data-carousel-interval-ms";
pub const CONTACT_DELAY_ATTR: &str = "data-contact-delay-ms";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Runtime tunables, read from `data-*` attributes on the mount element.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteSettings {
    pub carousel_interval_ms: u32,
    pub contact_delay_ms: u32,
    pub log_level: LogLevel,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            contact_delay_ms: DEFAULT_CONTACT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteSettings {
    /// `attribute` returns the raw value of a mount attribute, if present.
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        let carousel_interval_ms = parse_u32_with_bounds(
            attribute(CAROUSEL_INTERVAL_ATTR).as_deref(),
            DEFAULT_CAROUSEL_INTERVAL_MS,
            CAROUSEL_INTERVAL_MS_BOUNDS,
        );
        let contact_delay_ms = parse_u32_with_bounds(
            attribute(CONTACT_DELAY_ATTR).as_deref(),
            DEFAULT_CONTACT_DELAY_MS,
            CONTACT_DELAY_MS_BOUNDS,
        );
        let log_level = attribute(LOG_LEVEL_ATTR)
            .as_deref()
            .and_then(LogLevel::from_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            carousel_interval_ms,
            contact_delay_ms,
            log_level,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_mount(mount: &web_sys::Element) -> Self {
        Self::from_attributes(|name| mount.get_attribute(name))
    }
}

pub fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .map(|value| value.clamp(bounds.0, bounds.1))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> SiteSettings {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteSettings::from_attributes(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(settings_from(&[]), SiteSettings::default());
    }

    #[test]
    fn out_of_bounds_values_are_clamped() {
        let settings = settings_from(&[
            (CAROUSEL_INTERVAL_ATTR, "10"),
            (CONTACT_DELAY_ATTR, "999999"),
        ]);

        assert_eq!(settings.carousel_interval_ms, 1_000);
        assert_eq!(settings.contact_delay_ms, 10_000);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let settings = settings_from(&[
            (CAROUSEL_INTERVAL_ATTR, "fast"),
            (CONTACT_DELAY_ATTR, "-5"),
            (LOG_LEVEL_ATTR, "verbose"),
        ]);

        assert_eq!(settings.carousel_interval_ms, DEFAULT_CAROUSEL_INTERVAL_MS);
        assert_eq!(settings.contact_delay_ms, DEFAULT_CONTACT_DELAY_MS);
        assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn valid_values_are_kept() {
        let settings = settings_from(&[
            (CAROUSEL_INTERVAL_ATTR, " 3000 "),
            (LOG_LEVEL_ATTR, "debug"),
        ]);

        assert_eq!(settings.carousel_interval_ms, 3_000);
        assert_eq!(settings.log_level, LogLevel::Debug);
    }
}
