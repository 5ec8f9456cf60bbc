//! Grid configuration: element ids, geometry, timing, and palette.
//!
//! Every field is optional on the wire and falls back to the value in
//! [`crate::consts`], so a page can override just what it needs:
//!
//! ```json
//! { "spacing": 28, "influenceRadius": 240 }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CANVAS_ID, CONTENT_ID, FADE_STEP, GLOW_ID, INFLUENCE_RADIUS, LINE_MAX_DIST, MIN_SPACING, PARALLAX_STRENGTH,
    POINTER_SMOOTHING, SPACING,
};
use crate::error::ConfigError;
use crate::palette::{ColorBand, DEFAULT_BANDS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GridConfig {
    /// Id of the canvas element to draw on.
    pub canvas_id: String,
    /// Id of the optional element that follows the pointer.
    pub glow_id: String,
    /// Id of the optional element that receives the parallax transform.
    pub content_id: String,
    pub spacing: f64,
    pub influence_radius: f64,
    pub line_max_dist: f64,
    pub pointer_smoothing: f64,
    pub fade_step: f64,
    pub parallax_strength: f64,
    pub bands: Vec<ColorBand>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_owned(),
            glow_id: GLOW_ID.to_owned(),
            content_id: CONTENT_ID.to_owned(),
            spacing: SPACING,
            influence_radius: INFLUENCE_RADIUS,
            line_max_dist: LINE_MAX_DIST,
            pointer_smoothing: POINTER_SMOOTHING,
            fade_step: FADE_STEP,
            parallax_strength: PARALLAX_STRENGTH,
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, or
    /// any error from [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the frame loop.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spacing", self.spacing)?;
        if self.spacing < MIN_SPACING {
            return Err(ConfigError::BelowMinimum { field: "spacing", value: self.spacing, min: MIN_SPACING });
        }
        positive("influenceRadius", self.influence_radius)?;
        positive("lineMaxDist", self.line_max_dist)?;
        positive("fadeStep", self.fade_step)?;
        blend("pointerSmoothing", self.pointer_smoothing)?;
        if !self.parallax_strength.is_finite() || self.parallax_strength < 0.0 {
            return Err(ConfigError::Negative { field: "parallaxStrength", value: self.parallax_strength });
        }
        validate_bands(&self.bands)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 { Ok(()) } else { Err(ConfigError::NonPositive { field, value }) }
}

fn blend(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 { Ok(()) } else { Err(ConfigError::BlendOutOfRange { field, value }) }
}

fn validate_bands(bands: &[ColorBand]) -> Result<(), ConfigError> {
    if bands.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    let mut floor = f64::NEG_INFINITY;
    for (index, band) in bands.iter().enumerate() {
        if !(band.start.is_finite() && band.end.is_finite()) || band.start >= band.end || band.start < floor {
            return Err(ConfigError::BandOrder { index });
        }
        floor = band.end;
    }
    Ok(())
}
