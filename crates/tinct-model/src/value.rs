//! The persisted color object, as the host document store shapes it.

use serde::{Deserialize, Serialize};

/// A stored color value: a solid color or a two-stop linear gradient.
///
/// Wire shape of the external schema contract: every field is optional, a
/// present object is expected to carry at least `hex`. The derived fields
/// (`rgba`, `hsl`, `css`) are recomputed on every commit and never authored
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gradient: Option<bool>,
    /// Second gradient stop; meaningful only when `is_gradient` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex2: Option<String>,
    /// Gradient direction in degrees, `0..=360`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<u16>,
    /// CSS `linear-gradient(..)` expression; gradient mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl ColorValue {
    /// True when no color is set. An absent `hex` and an empty `hex` mean
    /// the same thing.
    pub fn is_unset(&self) -> bool {
        self.hex.as_deref().is_none_or(str::is_empty)
    }
}
