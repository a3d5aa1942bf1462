//! Configuration snapshot for the capacity engine.
//!
//! The host's settings subsystem owns persistence and the user-facing form;
//! this crate receives a validated, immutable snapshot per sweep. Defaults
//! reproduce the host's stock values, so an untouched snapshot is a no-op
//! rewrite.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::Bucket;
use crate::constants::{
    DEFAULT_PAWN_MASS_CAPACITY, DEFAULT_POD_FUEL_PER_TILE, DEFAULT_POD_MASS_CAPACITY,
    DEFAULT_STACK_MULTIPLIER,
};

/// A settings value rejected by range validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SettingsError {
    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum {
        name: &'static str,
        value: f32,
        min: f32,
    },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Per-bucket stack multipliers. All default to 1.0 and must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackMultipliers {
    #[serde(default = "default_multiplier")]
    pub silver: f32,
    #[serde(default = "default_multiplier")]
    pub meals: f32,
    #[serde(default = "default_multiplier")]
    pub animal_feed: f32,
    #[serde(default = "default_multiplier")]
    pub foods: f32,
    #[serde(default = "default_multiplier")]
    pub textiles: f32,
    #[serde(default = "default_multiplier")]
    pub medicine: f32,
    #[serde(default = "default_multiplier")]
    pub drugs: f32,
    #[serde(default = "default_multiplier")]
    pub manufactured: f32,
    #[serde(default = "default_multiplier")]
    pub resources: f32,
    #[serde(default = "default_multiplier")]
    pub chunks: f32,
    #[serde(default = "default_multiplier")]
    pub artifacts: f32,
    #[serde(default = "default_multiplier")]
    pub body_parts: f32,
    #[serde(default = "default_multiplier")]
    pub misc: f32,
}

const fn default_multiplier() -> f32 {
    DEFAULT_STACK_MULTIPLIER
}

impl Default for StackMultipliers {
    fn default() -> Self {
        Self {
            silver: default_multiplier(),
            meals: default_multiplier(),
            animal_feed: default_multiplier(),
            foods: default_multiplier(),
            textiles: default_multiplier(),
            medicine: default_multiplier(),
            drugs: default_multiplier(),
            manufactured: default_multiplier(),
            resources: default_multiplier(),
            chunks: default_multiplier(),
            artifacts: default_multiplier(),
            body_parts: default_multiplier(),
            misc: default_multiplier(),
        }
    }
}

impl StackMultipliers {
    /// The configured multiplier for a bucket.
    #[must_use]
    pub const fn for_bucket(&self, bucket: Bucket) -> f32 {
        match bucket {
            Bucket::Silver => self.silver,
            Bucket::Meals => self.meals,
            Bucket::AnimalFeed => self.animal_feed,
            Bucket::OtherFoods => self.foods,
            Bucket::Textiles => self.textiles,
            Bucket::Medicine => self.medicine,
            Bucket::Drugs => self.drugs,
            Bucket::OtherManufactured => self.manufactured,
            Bucket::Resources => self.resources,
            Bucket::Chunks => self.chunks,
            Bucket::Artifacts => self.artifacts,
            Bucket::BodyParts => self.body_parts,
            Bucket::Misc => self.misc,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Mass a pawn can haul per point of body size. Host stock value is 35.
    #[serde(default = "Settings::default_pawn_mass_capacity")]
    pub pawn_mass_capacity: f32,
    /// Mass capacity of a transport pod. Host stock value is 150.
    #[serde(default = "Settings::default_pod_mass_capacity")]
    pub pod_mass_capacity: f32,
    /// Fuel a pod burns per tile of launch distance. Host stock value is 2.25.
    #[serde(default = "Settings::default_pod_fuel_per_tile")]
    pub pod_fuel_per_tile: f32,
    #[serde(default)]
    pub multipliers: StackMultipliers,
    /// Verbose per-item classification logging.
    #[serde(default)]
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pawn_mass_capacity: Self::default_pawn_mass_capacity(),
            pod_mass_capacity: Self::default_pod_mass_capacity(),
            pod_fuel_per_tile: Self::default_pod_fuel_per_tile(),
            multipliers: StackMultipliers::default(),
            debug_mode: false,
        }
    }
}

impl Settings {
    const fn default_pawn_mass_capacity() -> f32 {
        DEFAULT_PAWN_MASS_CAPACITY
    }

    const fn default_pod_mass_capacity() -> f32 {
        DEFAULT_POD_MASS_CAPACITY
    }

    const fn default_pod_fuel_per_tile() -> f32 {
        DEFAULT_POD_FUEL_PER_TILE
    }

    /// Load settings from a JSON string, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Range-check every scalar. The engine assumes snapshots it receives
    /// have already passed this.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        require_min("pawn_mass_capacity", self.pawn_mass_capacity, 1.0)?;
        require_min("pod_mass_capacity", self.pod_mass_capacity, 1.0)?;
        require_positive("pod_fuel_per_tile", self.pod_fuel_per_tile)?;

        let m = &self.multipliers;
        require_positive("silver_stack", m.silver)?;
        require_positive("meals_stack", m.meals)?;
        require_positive("animal_feed_stack", m.animal_feed)?;
        require_positive("food_stack", m.foods)?;
        require_positive("textiles_stack", m.textiles)?;
        require_positive("medicine_stack", m.medicine)?;
        require_positive("drugs_stack", m.drugs)?;
        require_positive("manufactured_stack", m.manufactured)?;
        require_positive("resources_stack", m.resources)?;
        require_positive("chunks_stack", m.chunks)?;
        require_positive("artifacts_stack", m.artifacts)?;
        require_positive("body_parts_stack", m.body_parts)?;
        require_positive("misc_stack", m.misc)?;
        Ok(())
    }
}

fn require_min(name: &'static str, value: f32, min: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(SettingsError::BelowMinimum { name, value, min })
    }
}

fn require_positive(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { name, value })
    }
}
