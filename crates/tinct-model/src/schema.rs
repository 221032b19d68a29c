//! Static declaration of the `color` object type the host store accepts.
//!
//! This is the contract both sides of the patch boundary agree on; the
//! studio demo checks emitted upserts against it.

// ── Field kinds ───────────────────────────────────────────────────────────

/// Wire type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Number,
}

// ── Field info ────────────────────────────────────────────────────────────

/// One declared field of the color object type.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Name of the object type itself.
pub const TYPE_NAME: &str = "color";

/// Declared fields, in schema order. All optional on the wire; a present
/// object should carry at least `hex`.
pub const FIELDS: &[FieldInfo] = &[
    FieldInfo { name: "hex",        kind: FieldKind::String },
    FieldInfo { name: "rgba",       kind: FieldKind::String },
    FieldInfo { name: "hsl",        kind: FieldKind::String },
    FieldInfo { name: "isGradient", kind: FieldKind::Boolean },
    FieldInfo { name: "hex2",       kind: FieldKind::String },
    FieldInfo { name: "angle",      kind: FieldKind::Number },
    FieldInfo { name: "css",        kind: FieldKind::String },
];

/// Looks up a declared field by wire name.
pub fn field(name: &str) -> Option<&'static FieldInfo> {
    FIELDS.iter().find(|f| f.name == name)
}
