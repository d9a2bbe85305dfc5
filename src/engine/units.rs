//! Unit conversion constants
//!
//! Conversion factors for normalizing daily intake volumes before the
//! calorie arithmetic.

use crate::models::VolumeUnit;

/// Milliliters per fluid ounce
pub const OZ_TO_ML: f64 = 29.5735;

/// Milliliters per gram of enteral formula
///
/// Specific gravity ~1.0 approximation for enteral formula density, not a
/// general mass/volume conversion.
pub const G_TO_ML: f64 = 1.0;

/// Normalize a daily volume to milliliters
pub fn to_ml(amount: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Oz => amount * OZ_TO_ML,
        VolumeUnit::Ml => amount,
        VolumeUnit::G => amount * G_TO_ML,
    }
}

/// Convert a daily volume to grams, for kcal/g densities
pub fn to_grams(amount: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::G => amount,
        VolumeUnit::Ml => amount / G_TO_ML,
        VolumeUnit::Oz => amount * OZ_TO_ML * G_TO_ML,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ml() {
        assert!((to_ml(8.0, VolumeUnit::Oz) - 236.588).abs() < 0.001);
        assert_eq!(to_ml(250.0, VolumeUnit::Ml), 250.0);
        assert_eq!(to_ml(20.0, VolumeUnit::G), 20.0);
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(20.0, VolumeUnit::G), 20.0);
        assert_eq!(to_grams(100.0, VolumeUnit::Ml), 100.0);
        assert!((to_grams(1.0, VolumeUnit::Oz) - OZ_TO_ML).abs() < 1e-9);
    }

    #[test]
    fn test_oz_round_trip() {
        let oz = 8.0;
        let back = to_ml(oz, VolumeUnit::Oz) / OZ_TO_ML;
        assert!((back - oz).abs() < 1e-9);
    }
}
