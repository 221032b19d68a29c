//! The output boundary: one consolidated write against the host store.

use serde::{Deserialize, Serialize};

use crate::value::ColorValue;

/// Gradient portion of an upsert, present only when the commit was made in
/// gradient mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientFields {
    pub hex2: String,
    pub angle: u16,
    pub css: String,
}

/// A consolidated field write produced by a valid commit.
///
/// `rgba` and `hsl` are always derived from the primary `hex`, gradient mode
/// included, since downstream consumers rely on them being populated. Serializes
/// to the flat schema-contract object (`hex`, `rgba`, `hsl`, `isGradient`,
/// and the gradient trio when present).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorUpsert {
    pub hex: String,
    pub rgba: String,
    pub hsl: String,
    pub is_gradient: bool,
    #[serde(flatten)]
    pub gradient: Option<GradientFields>,
}

impl ColorUpsert {
    /// Writes this patch into a stored value.
    ///
    /// Mirrors the host-store patch semantics: only the carried fields are
    /// written. A solid commit leaves any stale `hex2`/`angle`/`css` in
    /// place rather than clearing them.
    pub fn apply_to(&self, value: &mut ColorValue) {
        value.hex = Some(self.hex.clone());
        value.rgba = Some(self.rgba.clone());
        value.hsl = Some(self.hsl.clone());
        value.is_gradient = Some(self.is_gradient);
        if let Some(g) = &self.gradient {
            value.hex2 = Some(g.hex2.clone());
            value.angle = Some(g.angle);
            value.css = Some(g.css.clone());
        }
    }
}

/// A patch operation against the host store.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    /// Remove the entire color value.
    Unset,
    /// Ensure the object exists, then write the carried fields.
    Upsert(ColorUpsert),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_upsert() -> ColorUpsert {
        ColorUpsert {
            hex: "#ff0000".into(),
            rgba: "rgba(255, 0, 0, 1)".into(),
            hsl: "hsl(0, 100%, 50%)".into(),
            is_gradient: false,
            gradient: None,
        }
    }

    #[test]
    fn solid_upsert_serializes_flat_without_gradient_keys() {
        let json = serde_json::to_value(solid_upsert()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hex": "#ff0000",
                "rgba": "rgba(255, 0, 0, 1)",
                "hsl": "hsl(0, 100%, 50%)",
                "isGradient": false,
            })
        );
    }

    #[test]
    fn gradient_upsert_flattens_the_trio() {
        let upsert = ColorUpsert {
            is_gradient: true,
            gradient: Some(GradientFields {
                hex2: "#0000ff".into(),
                angle: 90,
                css: "linear-gradient(90deg, #ff0000, #0000ff)".into(),
            }),
            ..solid_upsert()
        };
        let json = serde_json::to_value(&upsert).unwrap();
        assert_eq!(json["isGradient"], serde_json::json!(true));
        assert_eq!(json["hex2"], serde_json::json!("#0000ff"));
        assert_eq!(json["angle"], serde_json::json!(90));
        assert_eq!(
            json["css"],
            serde_json::json!("linear-gradient(90deg, #ff0000, #0000ff)")
        );
    }

    #[test]
    fn solid_apply_leaves_gradient_fields_untouched() {
        let mut value = ColorValue {
            hex2: Some("#0000ff".into()),
            angle: Some(45),
            css: Some("linear-gradient(45deg, #112233, #0000ff)".into()),
            ..ColorValue::default()
        };
        solid_upsert().apply_to(&mut value);
        assert_eq!(value.hex.as_deref(), Some("#ff0000"));
        assert_eq!(value.is_gradient, Some(false));
        assert_eq!(value.hex2.as_deref(), Some("#0000ff"));
        assert_eq!(value.angle, Some(45));
    }

    #[test]
    fn gradient_apply_writes_the_trio() {
        let mut value = ColorValue::default();
        let upsert = ColorUpsert {
            is_gradient: true,
            gradient: Some(GradientFields {
                hex2: "#0000ff".into(),
                angle: 90,
                css: "linear-gradient(90deg, #ff0000, #0000ff)".into(),
            }),
            ..solid_upsert()
        };
        upsert.apply_to(&mut value);
        assert_eq!(value.hex2.as_deref(), Some("#0000ff"));
        assert_eq!(value.angle, Some(90));
        assert_eq!(
            value.css.as_deref(),
            Some("linear-gradient(90deg, #ff0000, #0000ff)")
        );
    }
}
