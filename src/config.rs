//! Search configuration.
//!
//! A [`Config`] value is handed to the pipeline at construction time; nothing
//! in the crate reads process-wide settings.

use crate::compute::validation::MAX_SURFACE_DISTANCE_KM;
use serde::de::Error;

/// Search engine configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Radius applied when a center point arrives without one.
    #[serde(default = "Config::default_radius_km")]
    pub default_radius_km: f64,

    /// Largest radius a request may ask for.
    #[serde(default = "Config::default_max_radius_km")]
    pub max_radius_km: f64,

    /// Longest accepted free-text search term, in characters.
    #[serde(default = "Config::default_max_search_term_len")]
    pub max_search_term_len: usize,
}

impl Config {
    const fn default_radius_km() -> f64 {
        20.0
    }

    const fn default_max_radius_km() -> f64 {
        MAX_SURFACE_DISTANCE_KM
    }

    const fn default_max_search_term_len() -> usize {
        256
    }

    pub fn with_default_radius_km(mut self, radius_km: f64) -> Self {
        assert!(
            radius_km.is_finite() && radius_km > 0.0,
            "Default radius must be positive"
        );
        self.default_radius_km = radius_km;
        self
    }

    pub fn with_max_radius_km(mut self, radius_km: f64) -> Self {
        assert!(
            radius_km.is_finite() && radius_km > 0.0,
            "Maximum radius must be positive"
        );
        if radius_km > MAX_SURFACE_DISTANCE_KM {
            log::warn!(
                "Maximum radius of {} km exceeds half of Earth's circumference; \
                requests will be capped at {} km",
                radius_km,
                MAX_SURFACE_DISTANCE_KM
            );
        }
        self.max_radius_km = radius_km;
        self
    }

    pub fn with_max_search_term_len(mut self, len: usize) -> Self {
        assert!(len > 0, "Search term length limit must be greater than zero");
        self.max_search_term_len = len;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.default_radius_km.is_finite() || self.default_radius_km <= 0.0 {
            return Err(format!(
                "Default radius must be positive, got {}",
                self.default_radius_km
            ));
        }

        if !self.max_radius_km.is_finite() || self.max_radius_km <= 0.0 {
            return Err(format!(
                "Maximum radius must be positive, got {}",
                self.max_radius_km
            ));
        }

        if self.default_radius_km > self.max_radius_km {
            return Err(format!(
                "Default radius {} exceeds maximum radius {}",
                self.default_radius_km, self.max_radius_km
            ));
        }

        if self.max_search_term_len == 0 {
            return Err("Search term length limit must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_radius_km: Self::default_radius_km(),
            max_radius_km: Self::default_max_radius_km(),
            max_search_term_len: Self::default_max_search_term_len(),
        }
    }
}
