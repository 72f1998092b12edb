//! Tunables for the particle field.
//!
//! Every field has a default taken from `constants.rs`, so a page can pass a
//! partial object to `mount_particles()` and only override what it cares
//! about:
//!
//! ```js
//! mount_particles("particles", { linkDistance: 120, spawnCap: 300 });
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::*;
use crate::error::MountError;

/// One step of the width -> particle count table.  Applies when the window
/// width is strictly below `below`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Tier {
    pub below: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Sorted by `below`, ascending.
    pub tiers: Vec<Tier>,
    /// Count used when the width is past every tier.
    pub fallback_count: usize,
    pub link_distance: f64,
    pub pointer_radius: f64,
    pub repulsion: f64,
    pub damping: f64,
    pub min_speed: f64,
    pub jitter: f64,
    pub initial_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub spawn_batch: usize,
    pub spawn_cap: usize,
    pub spawn_speed: f64,
    pub color: [u8; 3],
    pub particle_alpha: f64,
    pub link_alpha: f64,
    pub line_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_COLOR;
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(below, count)| Tier { below, count })
                .collect(),
            fallback_count: DEFAULT_FALLBACK_COUNT,
            link_distance: DEFAULT_LINK_DISTANCE,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            repulsion: DEFAULT_REPULSION,
            damping: DEFAULT_DAMPING,
            min_speed: DEFAULT_MIN_SPEED,
            jitter: DEFAULT_JITTER,
            initial_speed: DEFAULT_INITIAL_SPEED,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            spawn_batch: DEFAULT_SPAWN_BATCH,
            spawn_cap: DEFAULT_SPAWN_CAP,
            spawn_speed: DEFAULT_SPAWN_SPEED,
            color: [r, g, b],
            particle_alpha: DEFAULT_PARTICLE_ALPHA,
            link_alpha: DEFAULT_LINK_ALPHA,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) config object handed over from JS.
    /// `undefined` and `null` mean "all defaults".
    pub fn from_js(value: JsValue) -> Result<Self, MountError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| MountError::BadConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MountError> {
        let bad = |msg: &str| Err(MountError::BadConfig(msg.to_string()));

        if !(self.link_distance > 0.0) {
            return bad("linkDistance must be positive");
        }
        if !(self.pointer_radius > 0.0) {
            return bad("pointerRadius must be positive");
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return bad("damping must be in (0, 1]");
        }
        for (name, value) in [
            ("initialSpeed", self.initial_speed),
            ("spawnSpeed", self.spawn_speed),
            ("jitter", self.jitter),
            ("repulsion", self.repulsion),
            ("minSpeed", self.min_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MountError::BadConfig(format!(
                    "{} must be a finite, non-negative number",
                    name
                )));
            }
        }
        if !self.max_size.is_finite() {
            return bad("maxSize must be finite");
        }
        if !(self.min_size > 0.0) || self.min_size > self.max_size {
            return bad("minSize must be positive and not larger than maxSize");
        }
        if self.tiers.windows(2).any(|w| w[0].below >= w[1].below) {
            return bad("tiers must be sorted by ascending `below`");
        }
        Ok(())
    }

    /// Particle count for a given window width.
    pub fn particle_count_for_width(&self, width: f64) -> usize {
        self.tiers
            .iter()
            .find(|tier| width < tier.below)
            .map(|tier| tier.count)
            .unwrap_or(self.fallback_count)
    }

    /// CSS colour string for the configured RGB at `alpha`.
    pub fn rgba(&self, alpha: f64) -> String {
        let [r, g, b] = self.color;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_matches_breakpoints() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count_for_width(500.0), 60);
        assert_eq!(config.particle_count_for_width(767.0), 60);
        assert_eq!(config.particle_count_for_width(768.0), 120);
        assert_eq!(config.particle_count_for_width(1000.0), 120);
        assert_eq!(config.particle_count_for_width(1280.0), 180);
        assert_eq!(config.particle_count_for_width(1500.0), 180);
        assert_eq!(config.particle_count_for_width(1920.0), 240);
        assert_eq!(config.particle_count_for_width(2500.0), 240);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: FieldConfig =
            serde_json::from_str(r#"{ "linkDistance": 90, "spawnCap": 300 }"#).unwrap();
        assert_eq!(config.link_distance, 90.0);
        assert_eq!(config.spawn_cap, 300);
        assert_eq!(config.damping, DEFAULT_DAMPING);
        assert_eq!(config.tiers.len(), DEFAULT_TIERS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_tiers_are_used() {
        let config: FieldConfig = serde_json::from_str(
            r#"{ "tiers": [{ "below": 400, "count": 10 }], "fallbackCount": 20 }"#,
        )
        .unwrap();
        assert_eq!(config.particle_count_for_width(399.0), 10);
        assert_eq!(config.particle_count_for_width(400.0), 20);
    }

    #[test]
    fn validate_rejects_nonsense() {
        let mut config = FieldConfig::default();
        config.damping = 1.5;
        assert!(config.validate().is_err());

        let mut config = FieldConfig::default();
        config.min_size = 5.0;
        assert!(config.validate().is_err());

        let mut config = FieldConfig::default();
        config.link_distance = 0.0;
        assert!(config.validate().is_err());

        let mut config = FieldConfig::default();
        config.tiers.reverse();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unbounded_speeds_and_sizes() {
        let broken = [
            FieldConfig { initial_speed: f64::INFINITY, ..FieldConfig::default() },
            FieldConfig { spawn_speed: f64::NAN, ..FieldConfig::default() },
            FieldConfig { jitter: -0.1, ..FieldConfig::default() },
            FieldConfig { initial_speed: -1.0, ..FieldConfig::default() },
            FieldConfig { max_size: f64::INFINITY, ..FieldConfig::default() },
        ];
        for config in &broken {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn huge_but_valid_speeds_build_a_field() {
        use crate::particles::{Bounds, ParticleField};

        let config = FieldConfig {
            initial_speed: 1.0e308,
            spawn_speed: 1.0e308,
            max_size: 1.0e308,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_ok());

        let mut field = ParticleField::with_window_width(config, Bounds::new(800.0, 600.0), 500.0, 1);
        assert_eq!(field.len(), 60);
        assert_eq!(field.spawn_burst(), 4);
        field.update();
        assert_eq!(field.len(), 64);
    }

    #[test]
    fn rgba_formats_colour() {
        let config = FieldConfig::default();
        assert_eq!(config.rgba(0.5), "rgba(100, 108, 255, 0.5)");
    }
}
