//! Debounced reconciliation between a local draft and the stored value.
//!
//! The host owns the event loop; this module owns the edit state. Mutators
//! are called from input handlers, [`FieldSync::sync_external`] from store
//! notifications, and [`FieldSync::poll`] from the host's tick. The only
//! suspension mechanism is the commit deadline, a cancellable point in
//! time, re-armed on every divergent edit, never a blocking wait.

use std::time::{Duration, Instant};

use tinct_model::{
    ColorUpsert, ColorValue, FieldPatch, GradientFields, gradient_css, hex_to_hsl, hex_to_rgba,
    is_valid_hex,
};

use crate::presets::Preset;

/// Quiet window between the last edit and the commit attempt.
pub const QUIET_WINDOW: Duration = Duration::from_millis(300);

// ── Draft ─────────────────────────────────────────────────────────────────

/// Transient edit state for one mounted color field.
///
/// `hex` and `hex2` hold whatever the user has typed so far, valid or not;
/// validity is only enforced at commit time. A draft is never persisted;
/// it is rebuilt from the stored value on mount and on every external
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub hex: String,
    pub hex2: String,
    pub is_gradient: bool,
    /// Gradient direction in degrees, kept in `0..=360`.
    pub angle: u16,
}

impl Draft {
    /// Field defaults for an unset value.
    fn empty() -> Self {
        Self {
            hex: String::new(),
            hex2: "#000000".to_string(),
            is_gradient: false,
            angle: 180,
        }
    }

    /// The fields derivable from a canonical value, defaults filled in.
    fn from_value(value: Option<&ColorValue>) -> Self {
        let Some(v) = value else {
            return Self::empty();
        };
        Self {
            hex: v.hex.clone().unwrap_or_default(),
            hex2: v.hex2.clone().unwrap_or_else(|| "#000000".to_string()),
            is_gradient: v.is_gradient.unwrap_or(false),
            angle: v.angle.unwrap_or(180),
        }
    }
}

// ── FieldSync ─────────────────────────────────────────────────────────────

/// Debounced reconciler for one mounted color field.
///
/// # Lifecycle
///
/// ```rust,ignore
/// let mut sync = FieldSync::new(store.value());
///
/// // input handlers:
/// sync.set_hex("#ff8800", now);
///
/// // host tick:
/// if let Some(patch) = sync.poll(now) {
///     store.apply(patch);
///     sync.sync_external(store.value());   // the store echo
/// }
/// ```
///
/// Guarantees: at most one commit per quiet window; a syntactically invalid
/// non-empty hex is never committed; an empty hex always unsets the whole
/// value, never a partial write.
pub struct FieldSync {
    draft: Draft,
    /// Fields derived from the last value observed via `sync_external`.
    snapshot: Draft,
    deadline: Option<Instant>,
    quiet: Duration,
}

impl FieldSync {
    /// Mounts the field over the current canonical value (or absence).
    pub fn new(value: Option<&ColorValue>) -> Self {
        let snapshot = Draft::from_value(value);
        Self {
            draft: snapshot.clone(),
            snapshot,
            deadline: None,
            quiet: QUIET_WINDOW,
        }
    }

    /// Overrides the quiet window. Hosts with coarse tick rates may want a
    /// longer one; tests a shorter one.
    pub fn with_quiet_window(mut self, quiet: Duration) -> Self {
        self.quiet = quiet;
        self
    }

    /// Read access to the draft, for rendering.
    #[inline]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// True while an edit is waiting out its quiet window.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    // ── external boundary ─────────────────────────────────────────────────

    /// The store pushed a new canonical value, or the host reset the field.
    ///
    /// Unconditionally overwrites the draft and cancels any pending commit;
    /// an in-flight edit never survives an external change.
    pub fn sync_external(&mut self, value: Option<&ColorValue>) {
        self.snapshot = Draft::from_value(value);
        self.draft = self.snapshot.clone();
        if self.deadline.take().is_some() {
            log::debug!("external change cancelled pending commit");
        }
    }

    // ── draft mutators ────────────────────────────────────────────────────

    /// Primary hex edit (text input or native picker).
    pub fn set_hex(&mut self, hex: impl Into<String>, now: Instant) {
        self.draft.hex = hex.into();
        self.touch(now);
    }

    /// Second gradient stop edit.
    pub fn set_hex2(&mut self, hex2: impl Into<String>, now: Instant) {
        self.draft.hex2 = hex2.into();
        self.touch(now);
    }

    /// Gradient angle edit, clamped to `0..=360`.
    pub fn set_angle(&mut self, angle: u16, now: Instant) {
        self.draft.angle = angle.min(360);
        self.touch(now);
    }

    /// Switches solid/gradient interpretation. The stop and angle values
    /// themselves are left as they are.
    pub fn set_gradient(&mut self, on: bool, now: Instant) {
        self.draft.is_gradient = on;
        self.touch(now);
    }

    /// Flips gradient mode (the mode switch in the editor).
    pub fn toggle_gradient(&mut self, now: Instant) {
        self.draft.is_gradient = !self.draft.is_gradient;
        self.touch(now);
    }

    /// Adopts a preset swatch into the draft.
    pub fn apply_preset(&mut self, preset: &Preset, now: Instant) {
        match preset {
            Preset::Solid(hex) => {
                self.draft.hex = hex.clone();
                self.draft.is_gradient = false;
            }
            Preset::Gradient { hex, hex2, angle } => {
                self.draft.hex = hex.clone();
                self.draft.hex2 = hex2.clone();
                self.draft.is_gradient = true;
                if let Some(angle) = angle {
                    self.draft.angle = (*angle).min(360);
                }
            }
        }
        self.touch(now);
    }

    /// Re-arms the deadline after a mutation, or clears it when the edit
    /// brought the draft back to the snapshot.
    fn touch(&mut self, now: Instant) {
        if self.draft == self.snapshot {
            self.deadline = None;
        } else {
            self.deadline = Some(now + self.quiet);
        }
    }

    // ── commit ────────────────────────────────────────────────────────────

    /// Cooperative tick; emits at most one patch per quiet window.
    ///
    /// At the deadline: an empty hex unsets the whole value, an invalid one
    /// withholds the commit (the draft stays dirty until the next edit),
    /// and a valid one produces a consolidated upsert with every derived
    /// field recomputed from the draft as it is *now*, not as it was when
    /// the deadline was armed.
    pub fn poll(&mut self, now: Instant) -> Option<FieldPatch> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        if self.draft.hex.is_empty() {
            log::debug!("draft cleared, unsetting stored value");
            return Some(FieldPatch::Unset);
        }
        if !is_valid_hex(&self.draft.hex) {
            log::debug!("withholding commit, draft hex {:?} is not #rrggbb", self.draft.hex);
            return None;
        }

        // rgba/hsl always come from the primary hex, gradient mode included;
        // downstream consumers rely on them being populated.
        let gradient = self.draft.is_gradient.then(|| GradientFields {
            hex2: self.draft.hex2.clone(),
            angle: self.draft.angle,
            css: gradient_css(&self.draft.hex, &self.draft.hex2, self.draft.angle),
        });
        let upsert = ColorUpsert {
            hex: self.draft.hex.clone(),
            rgba: hex_to_rgba(&self.draft.hex),
            hsl: hex_to_hsl(&self.draft.hex),
            is_gradient: self.draft.is_gradient,
            gradient,
        };
        log::debug!("committing {} value {}", if upsert.is_gradient { "gradient" } else { "solid" }, upsert.hex);
        Some(FieldPatch::Upsert(upsert))
    }
}
