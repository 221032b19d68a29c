//! Preset swatches: the built-in list and the host configuration surface.
//!
//! Hosts may configure an ordered list where each entry is either a bare
//! hex string or a `{hex, hex2?, angle?}` object; an object without a
//! second stop is just a solid. An absent or empty configuration falls
//! back to the built-in list.

use std::fmt;

use serde::Deserialize;

use tinct_model::gradient_css;

// ── Preset ────────────────────────────────────────────────────────────────

/// One selectable swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preset {
    /// A solid color.
    Solid(String),
    /// A two-stop gradient; `angle` falls back to the current draft angle
    /// when absent.
    Gradient {
        hex: String,
        hex2: String,
        angle: Option<u16>,
    },
}

impl Preset {
    /// The primary hex, what the selected-swatch highlight compares
    /// against.
    pub fn hex(&self) -> &str {
        match self {
            Preset::Solid(hex) | Preset::Gradient { hex, .. } => hex,
        }
    }

    /// CSS background expression for the swatch itself.
    pub fn background(&self) -> String {
        match self {
            Preset::Solid(hex) => hex.clone(),
            Preset::Gradient { hex, hex2, angle } => {
                gradient_css(hex, hex2, angle.unwrap_or(180))
            }
        }
    }
}

// ── Configuration surface ─────────────────────────────────────────────────

/// Raw configuration entry as the host writes it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPreset {
    Hex(String),
    Object {
        hex: String,
        #[serde(default)]
        hex2: Option<String>,
        #[serde(default)]
        angle: Option<u16>,
    },
}

impl From<RawPreset> for Preset {
    fn from(raw: RawPreset) -> Self {
        match raw {
            RawPreset::Hex(hex) | RawPreset::Object { hex, hex2: None, .. } => Preset::Solid(hex),
            RawPreset::Object { hex, hex2: Some(hex2), angle } => {
                Preset::Gradient { hex, hex2, angle }
            }
        }
    }
}

/// Error parsing a preset configuration list.
#[derive(Debug)]
pub struct PresetError {
    pub message: String,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preset config error: {}", self.message)
    }
}

impl std::error::Error for PresetError {}

/// Parses a preset list from its JSON configuration form.
pub fn parse_presets(json: &str) -> Result<Vec<Preset>, PresetError> {
    let raw: Vec<RawPreset> =
        serde_json::from_str(json).map_err(|e| PresetError { message: e.to_string() })?;
    Ok(raw.into_iter().map(Preset::from).collect())
}

/// The configured list when it is non-empty, otherwise the built-in one.
pub fn resolve_presets(configured: Option<Vec<Preset>>) -> Vec<Preset> {
    match configured {
        Some(list) if !list.is_empty() => list,
        _ => default_presets(),
    }
}

/// Built-in swatches shown when the host configures none.
pub fn default_presets() -> Vec<Preset> {
    const SOLIDS: &[&str] = &[
        "#f44336", "#ff9800", "#ffeb3b", "#4caf50", "#00bcd4", "#2196f3", "#9c27b0", "#795548",
        "#ffffff", "#000000",
    ];
    let mut presets: Vec<Preset> =
        SOLIDS.iter().map(|hex| Preset::Solid((*hex).to_string())).collect();
    presets.push(Preset::Gradient {
        hex: "#ff512f".to_string(),
        hex2: "#dd2476".to_string(),
        angle: Some(135),
    });
    presets.push(Preset::Gradient {
        hex: "#2193b0".to_string(),
        hex2: "#6dd5ed".to_string(),
        angle: Some(90),
    });
    presets
}
