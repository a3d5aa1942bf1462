//! The full catalog pass and the derived-limit propagation that follows it.
//!
//! A sweep is synchronous and single-threaded: the host runs one after the
//! catalog loads and one after every settings change, never concurrently.
//! Failures are local. A duplicate or missing baseline is logged and the
//! sweep moves on; nothing here may take the host down.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CompProps, ItemDef};
use crate::classify::{can_edit_stack, classify, maybe_stack};
use crate::constants::{DEF_TRANSPORT_POD, SMALL_VOLUME_DIVISOR, STAT_CARRYING_CAPACITY};
use crate::scaling::{BaselineStore, apply_stack_limit};
use crate::settings::Settings;

/// Outcome of one full sweep over the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Largest post-edit stack limit, with small-volume goods counted at
    /// one-tenth weight. Feeds the carry-capacity stat.
    pub max_normalized_stack: u32,
    /// Items classified and rewritten.
    pub edited: usize,
    /// Eligible items skipped because no baseline was on record.
    pub skipped: usize,
}

fn log_item(item: &ItemDef, text: &str) {
    log::debug!(
        "{} ({}, {}): {}",
        item.def_name,
        item.primary_category().unwrap_or("-"),
        item.stack_limit,
        text
    );
}

/// Run one full pass over every item in the catalog.
///
/// On the first pass each eligible item's current limit is captured into
/// `baselines` before anything is rewritten. Later passes rescale from the
/// captured values only, so the sweep converges to the same result no
/// matter how many times it runs with the same settings.
pub fn run_sweep(
    catalog: &mut Catalog,
    settings: &Settings,
    baselines: &mut BaselineStore,
    first_pass: bool,
) -> SweepSummary {
    log::debug!("editing stack limits, first_pass: {first_pass}");
    let mut summary = SweepSummary::default();
    let categories = &catalog.categories;

    for item in &mut catalog.items {
        if !can_edit_stack(item, categories) {
            if settings.debug_mode && maybe_stack(item, categories) {
                log_item(item, "EXCLUDED <<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<");
            }
            continue;
        }

        if first_pass && !baselines.record(&item.def_name, item.stack_limit) {
            // Duplicate def names should not exist; keep the first capture.
            log::warn!("baseline already recorded for {}", item.def_name);
        }

        let Some(baseline) = baselines.get(&item.def_name) else {
            // The item became eligible after the first pass, so there is no
            // original limit to rescale from. Leave it untouched.
            log::warn!("no baseline for eligible item {}, skipping", item.def_name);
            summary.skipped += 1;
            continue;
        };

        let bucket = classify(item, categories);
        if settings.debug_mode {
            log_item(item, bucket.key());
        }
        apply_stack_limit(item, baseline, settings.multipliers.for_bucket(bucket));
        summary.edited += 1;

        let normalized = if item.small_volume {
            item.stack_limit / SMALL_VOLUME_DIVISOR
        } else {
            item.stack_limit
        };
        summary.max_normalized_stack = summary.max_normalized_stack.max(normalized);
    }

    log::debug!("max stack: {}", summary.max_normalized_stack);
    summary
}

/// Write the configured pod mass capacity into the transport pod's
/// transporter component. Idempotent overwrite of a single value.
pub fn apply_pod_mass_capacity(catalog: &mut Catalog, new_capacity: f32) {
    let Some(pod) = catalog.find_item_mut(DEF_TRANSPORT_POD) else {
        log::warn!("no {DEF_TRANSPORT_POD} definition in catalog");
        return;
    };
    for comp in &mut pod.comps {
        if let CompProps::Transporter { mass_capacity } = comp {
            *mass_capacity = new_capacity;
        }
    }
}

/// Write the sweep's stack maximum into the carry-capacity stat, so pawns
/// can always pick up a full stack of anything.
#[allow(clippy::cast_precision_loss)]
pub fn apply_carry_capacity(catalog: &mut Catalog, max_stack: u32) {
    let Some(stat) = catalog.find_stat_mut(STAT_CARRYING_CAPACITY) else {
        log::warn!("no {STAT_CARRYING_CAPACITY} stat in catalog");
        return;
    };
    stat.default_base_value = max_stack as f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryDef, ItemKind, StatDef, Traversability};
    use smallvec::smallvec;

    fn item(def_name: &str, primary: &str, stack_limit: u32) -> ItemDef {
        ItemDef {
            def_name: def_name.to_string(),
            kind: ItemKind::Item,
            thing_categories: smallvec![primary.to_string()],
            stack_limit,
            small_volume: false,
            draw_gui_overlay: false,
            passability: Traversability::Standable,
            ingestible: None,
            comps: Vec::new(),
        }
    }

    fn fixture_catalog() -> Catalog {
        Catalog {
            categories: vec![
                CategoryDef {
                    def_name: "ResourcesRaw".to_string(),
                    parents: smallvec![],
                },
                CategoryDef {
                    def_name: "Chunks".to_string(),
                    parents: smallvec![],
                },
            ],
            items: vec![
                item("WoodLog", "ResourcesRaw", 75),
                {
                    let mut silver = item("Silver", "ResourcesRaw", 75);
                    silver.small_volume = true;
                    silver
                },
                {
                    let mut chunk = item("ChunkGranite", "Chunks", 1);
                    chunk.passability = Traversability::PassThroughOnly;
                    chunk
                },
                {
                    let mut sculpture = item("SculptureSmall", "Unsorted", 1);
                    sculpture.kind = ItemKind::Building;
                    sculpture
                },
            ],
            stats: vec![StatDef {
                def_name: "CarryingCapacity".to_string(),
                default_base_value: 75.0,
            }],
        }
    }

    #[test]
    fn first_pass_captures_baselines_and_scales() {
        let mut catalog = fixture_catalog();
        let mut settings = Settings::default();
        settings.multipliers.resources = 2.0;
        settings.multipliers.silver = 1.5;
        let mut baselines = BaselineStore::new();

        let summary = run_sweep(&mut catalog, &settings, &mut baselines, true);

        assert_eq!(catalog.find_item("WoodLog").unwrap().stack_limit, 150);
        assert_eq!(catalog.find_item("Silver").unwrap().stack_limit, 113);
        // Ineligible building untouched, no baseline captured for it.
        assert_eq!(catalog.find_item("SculptureSmall").unwrap().stack_limit, 1);
        assert_eq!(baselines.len(), 3);
        assert_eq!(baselines.get("WoodLog"), Some(75));
        assert_eq!(baselines.get("SculptureSmall"), None);

        // Silver normalizes to 113 / 10 = 11; wood wins at 150.
        assert_eq!(summary.max_normalized_stack, 150);
        assert_eq!(summary.edited, 3);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn later_passes_rescale_from_the_baseline() {
        let mut catalog = fixture_catalog();
        let mut settings = Settings::default();
        settings.multipliers.resources = 2.0;
        let mut baselines = BaselineStore::new();
        run_sweep(&mut catalog, &settings, &mut baselines, true);

        settings.multipliers.resources = 3.0;
        run_sweep(&mut catalog, &settings, &mut baselines, false);
        // 75 * 3, not (75 * 2) * 3.
        assert_eq!(catalog.find_item("WoodLog").unwrap().stack_limit, 225);

        settings.multipliers.resources = 1.0;
        run_sweep(&mut catalog, &settings, &mut baselines, false);
        assert_eq!(catalog.find_item("WoodLog").unwrap().stack_limit, 75);
    }

    #[test]
    fn repeated_sweeps_are_idempotent() {
        let mut catalog = fixture_catalog();
        let mut settings = Settings::default();
        settings.multipliers.resources = 1.7;
        settings.multipliers.chunks = 4.0;
        let mut baselines = BaselineStore::new();
        run_sweep(&mut catalog, &settings, &mut baselines, true);

        let first = run_sweep(&mut catalog, &settings, &mut baselines, false);
        let after_first = catalog.clone();
        let second = run_sweep(&mut catalog, &settings, &mut baselines, false);

        assert_eq!(first, second);
        assert_eq!(catalog, after_first);
    }

    #[test]
    fn chunk_becomes_standable_once_stacked() {
        let mut catalog = fixture_catalog();
        let mut settings = Settings::default();
        settings.multipliers.chunks = 5.0;
        let mut baselines = BaselineStore::new();
        run_sweep(&mut catalog, &settings, &mut baselines, true);

        let chunk = catalog.find_item("ChunkGranite").unwrap();
        assert_eq!(chunk.stack_limit, 5);
        assert!(chunk.draw_gui_overlay);
        assert_eq!(chunk.passability, Traversability::Standable);
    }

    #[test]
    fn missing_baseline_skips_the_item_only() {
        let mut catalog = fixture_catalog();
        let settings = Settings::default();
        let mut baselines = BaselineStore::new();
        run_sweep(&mut catalog, &settings, &mut baselines, true);

        // A def that appears after the first pass has no baseline on record.
        catalog.items.push(item("Jade", "ResourcesRaw", 50));
        let summary = run_sweep(&mut catalog, &settings, &mut baselines, false);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.edited, 3);
        assert_eq!(catalog.find_item("Jade").unwrap().stack_limit, 50);
        assert_eq!(baselines.get("Jade"), None);
    }

    #[test]
    fn propagators_overwrite_single_host_values() {
        let mut catalog = fixture_catalog();
        catalog.items.push(ItemDef {
            def_name: "TransportPod".to_string(),
            kind: ItemKind::Building,
            thing_categories: smallvec![],
            stack_limit: 1,
            small_volume: false,
            draw_gui_overlay: false,
            passability: Traversability::Impassable,
            ingestible: None,
            comps: vec![
                CompProps::Refuelable {
                    fuel_capacity: 150.0,
                },
                CompProps::Transporter {
                    mass_capacity: 150.0,
                },
            ],
        });

        apply_pod_mass_capacity(&mut catalog, 400.0);
        apply_carry_capacity(&mut catalog, 225);

        let pod = catalog.find_item("TransportPod").unwrap();
        let mass = pod.comps.iter().find_map(|comp| match comp {
            CompProps::Transporter { mass_capacity } => Some(*mass_capacity),
            CompProps::Refuelable { .. } => None,
        });
        assert_eq!(mass, Some(400.0));
        // Refuelable comp untouched.
        assert!(matches!(
            pod.comps[0],
            CompProps::Refuelable { fuel_capacity } if (fuel_capacity - 150.0).abs() <= f32::EPSILON
        ));

        let stat = catalog
            .stats
            .iter()
            .find(|stat| stat.def_name == "CarryingCapacity")
            .unwrap();
        assert!((stat.default_base_value - 225.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn missing_pod_or_stat_is_not_fatal() {
        let mut catalog = Catalog::empty();
        apply_pod_mass_capacity(&mut catalog, 400.0);
        apply_carry_capacity(&mut catalog, 100);
    }
}
