//! Centralized identifiers and baseline constants for the capacity engine.
//!
//! These values mirror the host's fixed data: the well-known category ids,
//! the distinguished definition names, and the hard-coded reference values
//! the host uses in its own capacity arithmetic. Keeping them together
//! ensures edits go through version control rather than scattered literals.

// Well-known definition names ----------------------------------------------
pub(crate) const DEF_SILVER: &str = "Silver";
pub(crate) const DEF_TRANSPORT_POD: &str = "TransportPod";
pub(crate) const STAT_CARRYING_CAPACITY: &str = "CarryingCapacity";

// Well-known category ids --------------------------------------------------
pub(crate) const CAT_FOODS: &str = "Foods";
pub(crate) const CAT_FOOD_MEALS: &str = "FoodMeals";
pub(crate) const CAT_MANUFACTURED: &str = "Manufactured";
pub(crate) const CAT_TEXTILES: &str = "Textiles";
pub(crate) const CAT_MEDICINE: &str = "Medicine";
pub(crate) const CAT_DRUGS: &str = "Drugs";
pub(crate) const CAT_RESOURCES_RAW: &str = "ResourcesRaw";
pub(crate) const CAT_CHUNKS: &str = "Chunks";
pub(crate) const CAT_ARTIFACTS: &str = "Artifacts";
pub(crate) const CAT_BODY_PARTS: &str = "BodyParts";
pub(crate) const CAT_UNFINISHED: &str = "Unfinished";
pub(crate) const CAT_WEAPONS: &str = "Weapons";
pub(crate) const CAT_APPAREL: &str = "Apparel";
pub(crate) const CAT_BUILDINGS: &str = "Buildings";
pub(crate) const CAT_CORPSES: &str = "Corpses";

// Host reference values ----------------------------------------------------
/// The host computes pawn mass capacity as `body_size * 35`.
pub(crate) const PAWN_MASS_CAPACITY_BASE: f32 = 35.0;
/// The host computes launch distance as `floor(fuel_level / 2.25)`.
pub(crate) const POD_FUEL_PER_TILE_BASE: f32 = 2.25;
/// Small-volume goods count at one-tenth weight toward the stack maximum.
pub(crate) const SMALL_VOLUME_DIVISOR: u32 = 10;

// Settings defaults --------------------------------------------------------
pub(crate) const DEFAULT_PAWN_MASS_CAPACITY: f32 = 35.0;
pub(crate) const DEFAULT_POD_MASS_CAPACITY: f32 = 150.0;
pub(crate) const DEFAULT_POD_FUEL_PER_TILE: f32 = 2.25;
pub(crate) const DEFAULT_STACK_MULTIPLIER: f32 = 1.0;
