//! Read-only derivations the editor surface renders: the copyable value
//! rows, the live preview background, and the swatch fill.

use tinct_model::{gradient_css, hex_to_hsl, hex_to_rgba};

use crate::sync::Draft;

/// One labeled, copyable output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub label: &'static str,
    pub value: String,
}

/// The output rows for the current draft, filtered by mode.
///
/// Solid mode shows HEX / RGBA / HSL; gradient mode shows HEX / HEX 2 /
/// CSS Gradient. Hex values display uppercase; conversion rows may be
/// empty while the hex is mid-edit.
pub fn output_rows(draft: &Draft) -> Vec<OutputRow> {
    let mut rows = vec![OutputRow { label: "HEX", value: draft.hex.to_uppercase() }];
    if draft.is_gradient {
        rows.push(OutputRow { label: "HEX 2", value: draft.hex2.to_uppercase() });
        rows.push(OutputRow {
            label: "CSS Gradient",
            value: gradient_css(&draft.hex, &draft.hex2, draft.angle),
        });
    } else {
        rows.push(OutputRow { label: "RGBA", value: hex_to_rgba(&draft.hex) });
        rows.push(OutputRow { label: "HSL", value: hex_to_hsl(&draft.hex) });
    }
    rows
}

/// Background expression for the live preview area.
pub fn preview_background(draft: &Draft) -> String {
    if draft.is_gradient {
        gradient_css(&draft.hex, &draft.hex2, draft.angle)
    } else {
        draft.hex.clone()
    }
}

/// Fill for a small color swatch; an empty hex shows as white.
pub fn swatch_background(hex: &str) -> &str {
    if hex.is_empty() { "#ffffff" } else { hex }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Instant;

    use crate::sync::FieldSync;

    fn draft_with(f: impl Fn(&mut FieldSync, Instant)) -> Draft {
        let mut sync = FieldSync::new(None);
        f(&mut sync, Instant::now());
        sync.draft().clone()
    }

    #[test]
    fn solid_rows_show_hex_rgba_hsl() {
        let draft = draft_with(|s, t| s.set_hex("#ff0000", t));
        let rows = output_rows(&draft);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], OutputRow { label: "HEX", value: "#FF0000".into() });
        assert_eq!(rows[1], OutputRow { label: "RGBA", value: "rgba(255, 0, 0, 1)".into() });
        assert_eq!(rows[2], OutputRow { label: "HSL", value: "hsl(0, 100%, 50%)".into() });
    }

    #[test]
    fn gradient_rows_show_both_stops_and_the_expression() {
        let draft = draft_with(|s, t| {
            s.set_hex("#ff0000", t);
            s.set_hex2("#0000ff", t);
            s.set_angle(90, t);
            s.set_gradient(true, t);
        });
        let rows = output_rows(&draft);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], OutputRow { label: "HEX 2", value: "#0000FF".into() });
        assert_eq!(
            rows[2].value,
            "linear-gradient(90deg, #ff0000, #0000ff)"
        );
    }

    #[test]
    fn mid_edit_hex_yields_empty_conversion_rows() {
        let draft = draft_with(|s, t| s.set_hex("#ff", t));
        let rows = output_rows(&draft);
        assert_eq!(rows[0].value, "#FF");
        assert_eq!(rows[1].value, "");
        assert_eq!(rows[2].value, "");
    }

    #[test]
    fn preview_follows_the_mode() {
        let solid = draft_with(|s, t| s.set_hex("#ff0000", t));
        assert_eq!(preview_background(&solid), "#ff0000");

        let gradient = draft_with(|s, t| {
            s.set_hex("#ff0000", t);
            s.set_hex2("#0000ff", t);
            s.set_gradient(true, t);
        });
        assert_eq!(
            preview_background(&gradient),
            "linear-gradient(180deg, #ff0000, #0000ff)"
        );
    }

    #[test]
    fn empty_swatch_renders_white() {
        assert_eq!(swatch_background(""), "#ffffff");
        assert_eq!(swatch_background("#123456"), "#123456");
    }
}
