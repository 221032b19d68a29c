//! Scripted demo session for the tinct color field.
//!
//! Drives a [`FieldSync`] against the in-memory echo store on a synthetic
//! timeline: no window, no sleeping. Every patch the synchronizer emits is
//! printed as the JSON the host store would receive, after a check against
//! the declared schema.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use tinct_field::{
    FieldSync, MemoryStore, Notifier, PatchSink, SystemClipboard, ToastStatus, copy_value,
    default_presets, init_logging, output_rows,
};
use tinct_model::{FieldPatch, schema};

// ── Session ───────────────────────────────────────────────────────────────

struct Session {
    sync: FieldSync,
    store: MemoryStore,
    base: Instant,
}

impl Session {
    fn new() -> Self {
        let store = MemoryStore::new();
        let sync = FieldSync::new(store.value());
        Self { sync, store, base: Instant::now() }
    }

    /// A point on the synthetic timeline, `ms` after session start.
    fn at(&self, ms: u64) -> Instant {
        self.base + Duration::from_millis(ms)
    }

    /// Ticks the synchronizer at `ms`; applies and prints any emitted patch,
    /// then feeds the store echo back in.
    fn tick(&mut self, ms: u64) -> Result<()> {
        if let Some(patch) = self.sync.poll(self.at(ms)) {
            print_patch(ms, &patch)?;
            self.store.apply(patch);
            self.sync.sync_external(self.store.value());
        }
        Ok(())
    }

    fn print_rows(&self) {
        for row in output_rows(self.sync.draft()) {
            println!("    {:<12} {}", row.label, row.value);
        }
    }
}

fn print_patch(ms: u64, patch: &FieldPatch) -> Result<()> {
    match patch {
        FieldPatch::Unset => println!("  [{ms:>4}ms] patch > unset"),
        FieldPatch::Upsert(upsert) => {
            let json = serde_json::to_value(upsert)?;
            for key in json.as_object().context("upsert serializes to an object")?.keys() {
                anyhow::ensure!(
                    schema::field(key).is_some(),
                    "emitted an undeclared field: {key}"
                );
            }
            println!("  [{ms:>4}ms] patch > set {}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

// ── Toasts ────────────────────────────────────────────────────────────────

struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn push(&mut self, status: ToastStatus, title: &str) {
        let tag = match status {
            ToastStatus::Success => "ok",
            ToastStatus::Error => "err",
        };
        println!("    toast [{tag}] {title}");
    }
}

// ── Demo script ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(None);

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │  TINCT STUDIO — color field session  │");
    println!("  └──────────────────────────────────────┘");
    println!();

    let mut s = Session::new();

    println!("  typing '#f44336' one keystroke at a time…");
    for (ms, partial) in
        [(0, "#f"), (60, "#f4"), (120, "#f44"), (180, "#f443"), (240, "#f4433"), (300, "#f44336")]
    {
        s.sync.set_hex(partial, s.at(ms));
        s.tick(ms)?;
    }
    // Nothing above fired: each keystroke restarted the quiet window.
    s.tick(450)?;
    s.tick(600)?;
    s.print_rows();
    println!();

    println!("  half-typed edit '#f4' settles without committing…");
    s.sync.set_hex("#f4", s.at(800));
    s.tick(1100)?;
    println!("    (no patch; invalid hex is withheld)");
    println!();

    println!("  picking the first gradient preset…");
    let preset = default_presets()
        .into_iter()
        .find(|p| matches!(p, tinct_field::Preset::Gradient { .. }))
        .context("built-in list has a gradient")?;
    s.sync.apply_preset(&preset, s.at(1200));
    s.tick(1500)?;
    s.print_rows();
    println!();

    println!("  steering the angle to 90°…");
    s.sync.set_angle(90, s.at(1700));
    s.tick(2000)?;
    s.print_rows();
    println!();

    println!("  copying the HEX row…");
    let hex_row = output_rows(s.sync.draft()).remove(0);
    copy_value(&mut SystemClipboard, &mut PrintNotifier, &hex_row.value, hex_row.label);
    println!();

    println!("  clearing the field…");
    s.sync.set_hex("", s.at(2200));
    s.tick(2500)?;
    println!("    stored value: {}", if s.store.value().is_none() { "none" } else { "present" });
    println!();

    Ok(())
}
