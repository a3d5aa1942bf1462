//! Category matching and bucket classification.
//!
//! Every eligible item maps to exactly one [`Bucket`] through a fixed
//! priority chain: earlier rules win ties, and [`Bucket::Misc`] is the
//! unconditional fallback. Classification is a pure query; nothing here
//! mutates the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryDef, FoodPreferability, ItemDef, ItemKind};
use crate::constants::{
    CAT_APPAREL, CAT_ARTIFACTS, CAT_BODY_PARTS, CAT_BUILDINGS, CAT_CHUNKS, CAT_CORPSES, CAT_DRUGS,
    CAT_FOOD_MEALS, CAT_FOODS, CAT_MANUFACTURED, CAT_MEDICINE, CAT_RESOURCES_RAW, CAT_TEXTILES,
    CAT_UNFINISHED, CAT_WEAPONS, DEF_SILVER,
};

/// Classification outcome selecting which configured multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Silver,
    Meals,
    AnimalFeed,
    OtherFoods,
    Textiles,
    Medicine,
    Drugs,
    OtherManufactured,
    Resources,
    Chunks,
    Artifacts,
    BodyParts,
    Misc,
}

impl Bucket {
    /// Every bucket, in classification priority order.
    pub const ALL: [Self; 13] = [
        Self::Silver,
        Self::Meals,
        Self::AnimalFeed,
        Self::OtherFoods,
        Self::Textiles,
        Self::Medicine,
        Self::Drugs,
        Self::OtherManufactured,
        Self::Resources,
        Self::Chunks,
        Self::Artifacts,
        Self::BodyParts,
        Self::Misc,
    ];

    /// Stable identifier used in settings names and log lines.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Silver => "silver",
            Self::Meals => "meals",
            Self::AnimalFeed => "animal_feed",
            Self::OtherFoods => "foods",
            Self::Textiles => "textiles",
            Self::Medicine => "medicine",
            Self::Drugs => "drugs",
            Self::OtherManufactured => "manufactured",
            Self::Resources => "resources",
            Self::Chunks => "chunks",
            Self::Artifacts => "artifacts",
            Self::BodyParts => "body_parts",
            Self::Misc => "misc",
        }
    }
}

fn category<'a>(categories: &'a [CategoryDef], def_name: &str) -> Option<&'a CategoryDef> {
    categories.iter().find(|cat| cat.def_name == def_name)
}

/// True iff the item's primary category is `target` or descends from it.
///
/// Items with no categories never match.
#[must_use]
pub fn is_in_category(item: &ItemDef, target: &str, categories: &[CategoryDef]) -> bool {
    let Some(primary) = item.primary_category() else {
        return false;
    };
    if primary == target {
        return true;
    }
    category(categories, primary)
        .is_some_and(|cat| cat.parents.iter().any(|parent| parent == target))
}

fn is_animal_feed(item: &ItemDef) -> bool {
    item.ingestible.is_some_and(|ingestible| {
        ingestible.preferability == FoodPreferability::DesperateOnlyForHumanlikes
            || ingestible.optimality_offset_humanlikes
                < ingestible.optimality_offset_feeding_animals
    })
}

/// Classify an item into its multiplier bucket. First matching rule wins.
#[must_use]
pub fn classify(item: &ItemDef, categories: &[CategoryDef]) -> Bucket {
    if item.def_name == DEF_SILVER {
        Bucket::Silver
    } else if is_in_category(item, CAT_FOOD_MEALS, categories) {
        Bucket::Meals
    } else if is_in_category(item, CAT_FOODS, categories) && is_animal_feed(item) {
        Bucket::AnimalFeed
    } else if is_in_category(item, CAT_FOODS, categories) {
        Bucket::OtherFoods
    } else if is_in_category(item, CAT_TEXTILES, categories) {
        Bucket::Textiles
    } else if is_in_category(item, CAT_MEDICINE, categories) {
        Bucket::Medicine
    } else if is_in_category(item, CAT_DRUGS, categories) {
        Bucket::Drugs
    } else if is_in_category(item, CAT_MANUFACTURED, categories) {
        Bucket::OtherManufactured
    } else if is_in_category(item, CAT_RESOURCES_RAW, categories) {
        Bucket::Resources
    } else if is_in_category(item, CAT_CHUNKS, categories) {
        Bucket::Chunks
    } else if is_in_category(item, CAT_ARTIFACTS, categories) {
        Bucket::Artifacts
    } else if is_in_category(item, CAT_BODY_PARTS, categories) {
        Bucket::BodyParts
    } else {
        Bucket::Misc
    }
}

/// Whether an item's stack limit can be safely edited.
///
/// Only categorized `Item` records qualify: everything under the six
/// stackable category roots, plus anything else the host already stacks.
#[must_use]
pub fn can_edit_stack(item: &ItemDef, categories: &[CategoryDef]) -> bool {
    if item.thing_categories.is_empty() || item.kind != ItemKind::Item {
        return false;
    }

    is_in_category(item, CAT_FOODS, categories)
        || is_in_category(item, CAT_MANUFACTURED, categories)
        || is_in_category(item, CAT_RESOURCES_RAW, categories)
        || is_in_category(item, CAT_CHUNKS, categories)
        || is_in_category(item, CAT_BODY_PARTS, categories)
        || is_in_category(item, CAT_ARTIFACTS, categories)
        || item.stack_limit > 1
}

/// Debug audit: flags items that are plausibly stackable but excluded by
/// [`can_edit_stack`]. Drives logging only, never mutation.
#[must_use]
pub fn maybe_stack(item: &ItemDef, categories: &[CategoryDef]) -> bool {
    if item.thing_categories.is_empty() || item.kind != ItemKind::Item {
        return false;
    }

    !(is_in_category(item, CAT_UNFINISHED, categories)
        || is_in_category(item, CAT_WEAPONS, categories)
        || is_in_category(item, CAT_APPAREL, categories)
        || is_in_category(item, CAT_BUILDINGS, categories)
        || is_in_category(item, CAT_CORPSES, categories))
}
