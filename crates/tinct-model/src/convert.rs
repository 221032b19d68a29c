//! Pure conversions from the canonical hex form to its derived encodings.
//!
//! Every function here is total: unparsable input degrades to an empty
//! string (or the dark overlay default) instead of failing. The commit
//! pipeline recomputes these on every write, so nothing here holds state.

use crate::hex::parse_hex;

/// Dark translucent overlay, readable on bright or unknown backgrounds.
const DARK_OVERLAY: &str = "rgba(0,0,0,0.6)";

/// `"rgba(R, G, B, 1)"` with decimal components, or `""` for invalid hex.
///
/// Alpha is fixed at 1; the canonical form has no alpha channel.
pub fn hex_to_rgba(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, 1)"),
        None => String::new(),
    }
}

/// `"hsl(H, S%, L%)"` with integer components, or `""` for invalid hex.
///
/// Standard RGB→HSL: lightness is the mid-range, saturation is the chroma
/// normalized against it, hue comes from whichever channel is the max.
pub fn hex_to_hsl(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return String::new();
    };
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;
    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    // Hue is modular: the rounding edge just below a full turn wraps to 0.
    let h = (h * 360.0).round() as u16 % 360;
    format!("hsl({h}, {}%, {}%)", (s * 100.0).round(), (l * 100.0).round())
}

/// Overlay color readable against a `hex` background swatch.
///
/// Bright backgrounds (perceptual brightness above 128) and anything absent
/// or unparsable get the dark translucent overlay; dark backgrounds get
/// plain white.
pub fn contrast_color(hex: Option<&str>) -> &'static str {
    let Some((r, g, b)) = hex.and_then(parse_hex) else {
        return DARK_OVERLAY;
    };
    let brightness =
        (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0;
    if brightness > 128.0 { DARK_OVERLAY } else { "white" }
}

/// `"linear-gradient(<angle>deg, <hex>, <hex2>)"` for a two-stop gradient.
///
/// Total like the rest of this module: the stops are interpolated into the
/// expression as given, validity is the caller's concern.
#[inline]
pub fn gradient_css(hex: &str, hex2: &str, angle: u16) -> String {
    format!("linear-gradient({angle}deg, {hex}, {hex2})")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex_to_rgba ───────────────────────────────────────────────────────

    #[test]
    fn rgba_primaries() {
        assert_eq!(hex_to_rgba("#ff0000"), "rgba(255, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#00ff00"), "rgba(0, 255, 0, 1)");
        assert_eq!(hex_to_rgba("#0000ff"), "rgba(0, 0, 255, 1)");
    }

    #[test]
    fn rgba_extremes() {
        assert_eq!(hex_to_rgba("#000000"), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#ffffff"), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn rgba_invalid_is_empty() {
        assert_eq!(hex_to_rgba("#123"), "");
        assert_eq!(hex_to_rgba("invalid"), "");
    }

    // ── hex_to_hsl ────────────────────────────────────────────────────────

    #[test]
    fn hsl_primaries() {
        assert_eq!(hex_to_hsl("#ff0000"), "hsl(0, 100%, 50%)");
        assert_eq!(hex_to_hsl("#00ff00"), "hsl(120, 100%, 50%)");
        assert_eq!(hex_to_hsl("#0000ff"), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn hsl_achromatic() {
        assert_eq!(hex_to_hsl("#000000"), "hsl(0, 0%, 0%)");
        assert_eq!(hex_to_hsl("#ffffff"), "hsl(0, 0%, 100%)");
        assert_eq!(hex_to_hsl("#808080"), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn hsl_mixed_channels() {
        // teal-ish: G and B dominate.
        assert_eq!(hex_to_hsl("#00ffff"), "hsl(180, 100%, 50%)");
        assert_eq!(hex_to_hsl("#ffff00"), "hsl(60, 100%, 50%)");
    }

    #[test]
    fn hsl_hue_stays_below_360() {
        // G one step below B pushes the raw hue just under a full turn.
        let out = hex_to_hsl("#ff0001");
        assert_eq!(out, "hsl(0, 100%, 50%)");
    }

    #[test]
    fn hsl_invalid_is_empty() {
        assert_eq!(hex_to_hsl("#123"), "");
        assert_eq!(hex_to_hsl("invalid"), "");
    }

    #[test]
    fn conversions_are_deterministic() {
        for hex in ["#1a2b3c", "#fedcba", "#7f7f7f"] {
            assert_eq!(hex_to_rgba(hex), hex_to_rgba(hex));
            assert_eq!(hex_to_hsl(hex), hex_to_hsl(hex));
            assert!(!hex_to_rgba(hex).is_empty());
            assert!(!hex_to_hsl(hex).is_empty());
        }
    }

    // ── contrast_color ────────────────────────────────────────────────────

    #[test]
    fn contrast_light_backgrounds_get_dark_overlay() {
        assert_eq!(contrast_color(Some("#ffffff")), "rgba(0,0,0,0.6)");
        assert_eq!(contrast_color(Some("#f8f9fa")), "rgba(0,0,0,0.6)");
    }

    #[test]
    fn contrast_dark_backgrounds_get_white() {
        assert_eq!(contrast_color(Some("#000000")), "white");
        assert_eq!(contrast_color(Some("#212529")), "white");
    }

    #[test]
    fn contrast_absent_or_invalid_gets_dark_overlay() {
        assert_eq!(contrast_color(None), "rgba(0,0,0,0.6)");
        assert_eq!(contrast_color(Some("")), "rgba(0,0,0,0.6)");
        assert_eq!(contrast_color(Some("nope")), "rgba(0,0,0,0.6)");
    }

    // ── gradient_css ──────────────────────────────────────────────────────

    #[test]
    fn gradient_expression() {
        assert_eq!(
            gradient_css("#ff0000", "#0000ff", 90),
            "linear-gradient(90deg, #ff0000, #0000ff)"
        );
        assert_eq!(
            gradient_css("#ffffff", "#000000", 0),
            "linear-gradient(0deg, #ffffff, #000000)"
        );
    }
}
