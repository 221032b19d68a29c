//! Value model and pure conversions for the **tinct** color field.
//!
//! This crate is intentionally lightweight (serde only) so it can be
//! consumed by hosts, migration tooling, and tests without pulling in any
//! editor or clipboard machinery.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`hex`] | strict `#rrggbb` validation and parsing |
//! | [`convert`] | `rgba` / `hsl` / contrast / gradient-css derivations |
//! | [`value`] | [`ColorValue`], the persisted object |
//! | [`patch`] | [`FieldPatch`] / [`ColorUpsert`], the write boundary |
//! | [`schema`] | static declaration of the stored object type |
//!
//! # Quick start
//!
//! ```rust
//! use tinct_model::{hex_to_rgba, is_valid_hex};
//!
//! assert!(is_valid_hex("#ff8800"));
//! assert_eq!(hex_to_rgba("#ff0000"), "rgba(255, 0, 0, 1)");
//! ```

pub mod convert;
pub mod hex;
pub mod patch;
pub mod schema;
pub mod value;

pub use convert::{contrast_color, gradient_css, hex_to_hsl, hex_to_rgba};
pub use hex::{is_valid_hex, parse_hex};
pub use patch::{ColorUpsert, FieldPatch, GradientFields};
pub use value::ColorValue;
