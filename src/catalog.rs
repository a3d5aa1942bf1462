//! Serde data model for the host's item catalog.
//!
//! The host owns and persists these definitions; this crate only borrows
//! mutable access to them for the duration of a sweep. The shapes here are
//! the subset of the host's definition data the engine actually reads or
//! writes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Category ids attached to an item. Only the first entry is the primary
/// category used for classification.
pub type CategoryList = SmallVec<[String; 2]>;

/// Transitive ancestor chain of a category.
pub type AncestorChain = SmallVec<[String; 4]>;

/// Broad kind of a definition. Only `Item` records are eligible for
/// stack-limit editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Item,
    Pawn,
    Plant,
    Building,
    Ethereal,
}

/// Whether pawns can walk onto a cell occupied by this item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversability {
    Standable,
    PassThroughOnly,
    Impassable,
}

/// How desirable a food is to eat, from the host's fixed ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPreferability {
    NeverForNutrition,
    DesperateOnly,
    DesperateOnlyForHumanlikes,
    RawBad,
    RawTasty,
    MealAwful,
    MealSimple,
    MealFine,
    MealLavish,
}

/// Ingestibility sub-data, present only on foods and drugs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ingestible {
    pub preferability: FoodPreferability,
    /// How strongly humanlikes want to eat this.
    #[serde(default)]
    pub optimality_offset_humanlikes: f32,
    /// How strongly this is preferred when feeding animals.
    #[serde(default)]
    pub optimality_offset_feeding_animals: f32,
}

/// Component properties attached to a definition. The transport pod carries
/// several; the propagator must find the transporter among them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompProps {
    Transporter { mass_capacity: f32 },
    Refuelable { fuel_capacity: f32 },
}

/// A single item definition, mutated in place by the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    /// Unique definition name, the record's identity.
    pub def_name: String,
    pub kind: ItemKind,
    /// Category ids; first entry is the primary category.
    #[serde(default)]
    pub thing_categories: CategoryList,
    /// Maximum stack size. Always >= 1 after processing.
    pub stack_limit: u32,
    /// Small-volume goods (silver, gold) stack ten to a unit of bulk.
    #[serde(default)]
    pub small_volume: bool,
    /// Whether the host renders a quantity overlay on stacks.
    #[serde(default)]
    pub draw_gui_overlay: bool,
    #[serde(default = "ItemDef::default_passability")]
    pub passability: Traversability,
    #[serde(default)]
    pub ingestible: Option<Ingestible>,
    #[serde(default)]
    pub comps: Vec<CompProps>,
}

impl ItemDef {
    const fn default_passability() -> Traversability {
        Traversability::Standable
    }

    /// The primary category id, if the item has any categories at all.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.thing_categories.first().map(String::as_str)
    }
}

/// A category definition with its transitive ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub def_name: String,
    /// All ancestors, nearest first. Roots have an empty chain.
    #[serde(default)]
    pub parents: AncestorChain,
}

/// A stat definition whose base value the engine may overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDef {
    pub def_name: String,
    pub default_base_value: f32,
}

/// The host catalog: every definition the engine can see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub stats: Vec<StatDef>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find a category definition by id.
    #[must_use]
    pub fn category(&self, def_name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|cat| cat.def_name == def_name)
    }

    /// Find an item definition by name.
    #[must_use]
    pub fn find_item(&self, def_name: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.def_name == def_name)
    }

    /// Find a mutable item definition by name.
    pub fn find_item_mut(&mut self, def_name: &str) -> Option<&mut ItemDef> {
        self.items.iter_mut().find(|item| item.def_name == def_name)
    }

    /// Find a mutable stat definition by name.
    pub fn find_stat_mut(&mut self, def_name: &str) -> Option<&mut StatDef> {
        self.stats.iter_mut().find(|stat| stat.def_name == def_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_from_json() {
        let json = r#"{
            "categories": [
                { "def_name": "Foods", "parents": [] },
                { "def_name": "FoodMeals", "parents": ["Foods"] }
            ],
            "items": [
                {
                    "def_name": "MealSimple",
                    "kind": "item",
                    "thing_categories": ["FoodMeals"],
                    "stack_limit": 10,
                    "ingestible": {
                        "preferability": "meal_simple",
                        "optimality_offset_humanlikes": 16.0
                    }
                }
            ],
            "stats": [
                { "def_name": "CarryingCapacity", "default_base_value": 75.0 }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.items.len(), 1);
        let meal = catalog.find_item("MealSimple").unwrap();
        assert_eq!(meal.primary_category(), Some("FoodMeals"));
        assert_eq!(meal.stack_limit, 10);
        assert_eq!(meal.passability, Traversability::Standable);
        assert!(!meal.draw_gui_overlay);
        let ingestible = meal.ingestible.unwrap();
        assert_eq!(ingestible.preferability, FoodPreferability::MealSimple);
        assert!(ingestible.optimality_offset_feeding_animals.abs() <= f32::EPSILON);
        assert_eq!(
            catalog.category("FoodMeals").unwrap().parents.as_slice(),
            ["Foods".to_string()]
        );
    }

    #[test]
    fn pod_comps_parse_with_tagged_kind() {
        let json = r#"{
            "items": [
                {
                    "def_name": "TransportPod",
                    "kind": "building",
                    "stack_limit": 1,
                    "comps": [
                        { "kind": "refuelable", "fuel_capacity": 150.0 },
                        { "kind": "transporter", "mass_capacity": 150.0 }
                    ]
                }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let pod = catalog.find_item("TransportPod").unwrap();
        assert_eq!(pod.comps.len(), 2);
        assert!(
            pod.comps
                .iter()
                .any(|comp| matches!(comp, CompProps::Transporter { .. }))
        );
    }

    #[test]
    fn missing_lookups_return_none() {
        let mut catalog = Catalog::empty();
        assert!(catalog.find_item("Wood").is_none());
        assert!(catalog.category("Foods").is_none());
        assert!(catalog.find_stat_mut("CarryingCapacity").is_none());
    }
}
