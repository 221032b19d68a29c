//! tinct-field — the editing core of the **tinct** color field.
//!
//! A color field holds either a solid color or a two-stop linear gradient.
//! The host renders whatever surface it likes; this crate owns the part
//! with real semantics: the transient draft, the debounced commit that
//! reconciles it against the external document store, the preset list, and
//! the small collaborators around them (output rows, clipboard copy,
//! notifications).
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`sync`] | [`Draft`] and [`FieldSync`], the debounced reconciler |
//! | [`presets`] | [`Preset`], the configuration surface, built-in list |
//! | [`display`] | output rows, preview and swatch backgrounds |
//! | [`clipboard`] | copy collaborator and the [`Notifier`] toast seam |
//! | [`store`] | [`PatchSink`] boundary and the in-memory echo store |
//! | [`logging`] | one-shot `env_logger` setup |
//!
//! # Quick start
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tinct_field::{FieldSync, MemoryStore, PatchSink};
//!
//! let mut store = MemoryStore::new();
//! let mut sync = FieldSync::new(store.value());
//!
//! let t0 = Instant::now();
//! sync.set_hex("#ff8800", t0);
//!
//! // Host tick, after the quiet window:
//! if let Some(patch) = sync.poll(t0 + Duration::from_millis(300)) {
//!     store.apply(patch);
//!     sync.sync_external(store.value());
//! }
//! assert_eq!(store.value().unwrap().hex.as_deref(), Some("#ff8800"));
//! ```

pub mod clipboard;
pub mod display;
pub mod logging;
pub mod presets;
pub mod store;
pub mod sync;

pub use clipboard::{Clipboard, Notifier, SystemClipboard, ToastStatus, copy_value};
pub use display::{OutputRow, output_rows, preview_background, swatch_background};
pub use logging::init_logging;
pub use presets::{Preset, PresetError, default_presets, parse_presets, resolve_presets};
pub use store::{MemoryStore, PatchSink};
pub use sync::{Draft, FieldSync, QUIET_WINDOW};
