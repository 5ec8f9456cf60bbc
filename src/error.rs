//! Error types for configuration and mounting.

use wasm_bindgen::JsValue;

/// Error returned by [`crate::config::GridConfig::from_json`] and [`crate::config::GridConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    #[error("failed to parse grid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A length or step that must be strictly positive and finite.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// A length below its accepted floor.
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum { field: &'static str, value: f64, min: f64 },
    /// A strength that may be zero but not negative or non-finite.
    #[error("{field} must be zero or positive and finite, got {value}")]
    Negative { field: &'static str, value: f64 },
    /// A per-frame blend factor outside `(0, 1]`.
    #[error("{field} must be in (0, 1], got {value}")]
    BlendOutOfRange { field: &'static str, value: f64 },
    /// The color band table has no entries.
    #[error("color band table is empty")]
    EmptyPalette,
    /// A band is inverted or overlaps the band before it.
    #[error("color band {index} is out of order")]
    BandOrder { index: usize },
}

/// Reasons the grid could not start. All of them leave the page untouched.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    /// No canvas element with the configured id.
    #[error("no canvas element with id `{0}`")]
    MissingSurface(String),
    /// The canvas has no 2D context.
    #[error("canvas has no 2d context")]
    MissingContext,
    /// A browser call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
