//! Value interceptors: ratio corrections applied around host arithmetic.
//!
//! The host's capacity and fuel formulas are fixed, so these rules rescale
//! a value flowing into or out of them instead of recomputing. Each
//! correction is a pure linear rescale against the host's hard-coded
//! reference constant, taken from an explicit settings snapshot at call
//! time. No baseline capture is involved.

use crate::constants::{PAWN_MASS_CAPACITY_BASE, POD_FUEL_PER_TILE_BASE};
use crate::settings::Settings;

/// Correct the host's pawn mass capacity result.
///
/// The host computes `body_size * 35`; scaling the result by
/// `pawn_mass_capacity / 35` leaves `body_size * pawn_mass_capacity`.
#[must_use]
pub fn scale_mass_capacity(host_capacity: f32, settings: &Settings) -> f32 {
    host_capacity * (settings.pawn_mass_capacity / PAWN_MASS_CAPACITY_BASE)
}

/// Correct the fuel level fed into the host's launch-distance formula.
///
/// The host computes `floor(fuel_level / 2.25)`; pre-scaling the fuel by
/// `2.25 / pod_fuel_per_tile` leaves `floor(fuel_level / pod_fuel_per_tile)`.
#[must_use]
pub fn scale_fuel_for_distance(fuel_level: f32, settings: &Settings) -> f32 {
    fuel_level * (POD_FUEL_PER_TILE_BASE / settings.pod_fuel_per_tile)
}

/// Correct the distance fed into the host's fuel-needed formula.
///
/// The host computes `2.25 * dist`; pre-scaling the distance by
/// `pod_fuel_per_tile / 2.25` leaves `pod_fuel_per_tile * dist`.
#[must_use]
pub fn scale_dist_for_fuel(dist: f32, settings: &Settings) -> f32 {
    dist * (settings.pod_fuel_per_tile / POD_FUEL_PER_TILE_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The host-side formulas the interceptors wrap.
    #[allow(clippy::cast_possible_truncation)]
    fn host_launch_distance(fuel_level: f32) -> i32 {
        (fuel_level / POD_FUEL_PER_TILE_BASE).floor() as i32
    }

    fn host_fuel_needed(dist: f32) -> f32 {
        POD_FUEL_PER_TILE_BASE * dist
    }

    #[test]
    fn mass_capacity_tracks_the_configured_value() {
        let mut settings = Settings::default();
        settings.pawn_mass_capacity = 70.0;
        // Host side: body_size 1.0 * 35.
        let host_result = PAWN_MASS_CAPACITY_BASE;
        let corrected = scale_mass_capacity(host_result, &settings);
        assert!((corrected - 70.0).abs() <= 1e-4);
    }

    #[test]
    fn default_settings_leave_host_values_unchanged() {
        let settings = Settings::default();
        assert!((scale_mass_capacity(87.5, &settings) - 87.5).abs() <= 1e-4);
        assert!((scale_fuel_for_distance(9.0, &settings) - 9.0).abs() <= 1e-4);
        assert!((scale_dist_for_fuel(4.0, &settings) - 4.0).abs() <= 1e-4);
    }

    #[test]
    fn launch_distance_uses_configured_fuel_per_tile() {
        let mut settings = Settings::default();
        settings.pod_fuel_per_tile = 4.5;
        let distance = host_launch_distance(scale_fuel_for_distance(9.0, &settings));
        assert_eq!(distance, 2);
    }

    #[test]
    fn fuel_needed_uses_configured_fuel_per_tile() {
        let mut settings = Settings::default();
        settings.pod_fuel_per_tile = 1.5;
        let fuel = host_fuel_needed(scale_dist_for_fuel(10.0, &settings));
        assert!((fuel - 15.0).abs() <= 1e-4);
    }

    #[test]
    fn fuel_corrections_are_inverse_directions() {
        let mut settings = Settings::default();
        settings.pod_fuel_per_tile = 3.0;
        let round_trip = scale_fuel_for_distance(scale_dist_for_fuel(7.0, &settings), &settings);
        assert!((round_trip - 7.0).abs() <= 1e-4);
    }
}
