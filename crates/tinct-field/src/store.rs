//! The document-store boundary, and an in-memory stand-in for it.

use tinct_model::{ColorValue, FieldPatch};

/// Where commits go.
///
/// The host applies the patch to its document store and, eventually, pushes
/// the new canonical value back through
/// [`FieldSync::sync_external`](crate::FieldSync::sync_external).
pub trait PatchSink {
    fn apply(&mut self, patch: FieldPatch);
}

/// In-memory store that applies patches immediately.
///
/// The host-store stand-in used by the studio demo and the convergence
/// tests; real hosts bring their own [`PatchSink`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<ColorValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current canonical value, i.e. what the store would echo back.
    pub fn value(&self) -> Option<&ColorValue> {
        self.value.as_ref()
    }
}

impl PatchSink for MemoryStore {
    fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::Unset => self.value = None,
            FieldPatch::Upsert(upsert) => {
                let value = self.value.get_or_insert_with(ColorValue::default);
                upsert.apply_to(value);
            }
        }
    }
}
