//! Capacity Limits Engine
//!
//! Platform-agnostic logic for rescaling the stack limits of a game item
//! catalog from category-based rules and user-configured multipliers, then
//! deriving the pod mass capacity and pawn carry capacity from the results.
//! The host owns the catalog and the settings UI; this crate borrows mutable
//! access for the duration of a sweep and never persists anything itself.

pub mod catalog;
pub mod classify;
pub mod constants;
pub mod intercept;
pub mod scaling;
pub mod settings;
pub mod sweep;

// Re-export commonly used types
pub use catalog::{
    Catalog, CategoryDef, CompProps, FoodPreferability, Ingestible, ItemDef, ItemKind, StatDef,
    Traversability,
};
pub use classify::{Bucket, can_edit_stack, classify, is_in_category, maybe_stack};
pub use intercept::{scale_dist_for_fuel, scale_fuel_for_distance, scale_mass_capacity};
pub use scaling::{BaselineStore, apply_stack_limit};
pub use settings::{Settings, SettingsError, StackMultipliers};
pub use sweep::{SweepSummary, apply_carry_capacity, apply_pod_mass_capacity, run_sweep};

/// Trait for abstracting catalog and settings loading.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full definition catalog from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the current settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded or parsed.
    fn load_settings(&self) -> Result<Settings, Self::Error>;
}

/// The engine's two lifecycle entry points, plus the baseline snapshot that
/// makes settings re-application idempotent.
#[derive(Debug, Clone, Default)]
pub struct CapacityEngine {
    settings: Settings,
    baselines: BaselineStore,
}

impl CapacityEngine {
    /// Create an engine around a validated settings snapshot.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            baselines: BaselineStore::new(),
        }
    }

    /// Load catalog and settings through a [`CatalogSource`], validate the
    /// settings, and run the first-pass sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the settings are out of range.
    pub fn bootstrap<S>(source: &S) -> Result<(Self, Catalog, SweepSummary), anyhow::Error>
    where
        S: CatalogSource,
        S::Error: Into<anyhow::Error>,
    {
        let mut catalog = source.load_catalog().map_err(Into::into)?;
        let settings = source.load_settings().map_err(Into::into)?;
        settings.validate()?;

        let mut engine = Self::new(settings);
        let summary = engine.on_defs_loaded(&mut catalog);
        Ok((engine, catalog, summary))
    }

    /// The current settings snapshot, for the host's interceptor call sites.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Recorded pre-edit stack limits.
    #[must_use]
    pub const fn baselines(&self) -> &BaselineStore {
        &self.baselines
    }

    /// Host hook: the catalog finished loading. Captures baselines, applies
    /// the configured scaling, and pushes the derived limits.
    pub fn on_defs_loaded(&mut self, catalog: &mut Catalog) -> SweepSummary {
        let summary = self.apply(catalog, true);
        log::info!("capacity limits loaded");
        summary
    }

    /// Host hook: the user changed settings. Re-applies everything against
    /// the original baselines; safe to invoke any number of times.
    pub fn on_settings_changed(&mut self, settings: Settings, catalog: &mut Catalog) -> SweepSummary {
        self.settings = settings;
        self.apply(catalog, false)
    }

    fn apply(&mut self, catalog: &mut Catalog, first_pass: bool) -> SweepSummary {
        apply_pod_mass_capacity(catalog, self.settings.pod_mass_capacity);
        let summary = run_sweep(catalog, &self.settings, &mut self.baselines, first_pass);
        apply_carry_capacity(catalog, summary.max_normalized_stack);
        summary
    }
}
