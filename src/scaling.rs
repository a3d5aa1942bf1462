//! Stack-limit rewriting and the pre-edit baseline snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemDef, Traversability};

/// Snapshot of original stack limits, keyed by definition name.
///
/// Populated exactly once per item, on the first sweep. Every later sweep
/// rescales from these values rather than the item's live (already edited)
/// limit, so re-applying settings never compounds prior edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineStore {
    limits: HashMap<String, u32>,
}

impl BaselineStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an item's pre-edit stack limit. Returns false (and leaves the
    /// stored value untouched) if the item was already recorded.
    pub fn record(&mut self, def_name: &str, stack_limit: u32) -> bool {
        if self.limits.contains_key(def_name) {
            return false;
        }
        self.limits.insert(def_name.to_string(), stack_limit);
        true
    }

    /// Look up an item's original stack limit.
    #[must_use]
    pub fn get(&self, def_name: &str) -> Option<u32> {
        self.limits.get(def_name).copied()
    }

    /// Number of recorded baselines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// True when no baselines have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

/// Rewrite an item's stack limit from its baseline and a bucket multiplier.
///
/// The new limit is `round(baseline * multiplier)` floored at 1. When the
/// result stacks (limit > 1) the quantity overlay is enabled and the item
/// made standable so stacks can actually form (chunks default to
/// pass-through-only). Neither flag is ever reset when a later rewrite
/// lands back at 1; this matches the host-facing behavior users rely on.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply_stack_limit(item: &mut ItemDef, baseline: u32, multiplier: f32) {
    let scaled = (f64::from(baseline) * f64::from(multiplier)).round();
    item.stack_limit = if scaled < 1.0 { 1 } else { scaled as u32 };

    if item.stack_limit > 1 {
        item.draw_gui_overlay = true;
        item.passability = Traversability::Standable;
    }
}
