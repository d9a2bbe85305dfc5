//! Enteral product model
//!
//! A commercial formula from the product classification list, keyed by
//! (name, hcpcs_code). The same product name may recur under a different
//! code as a distinct record.

use serde::Serialize;

use super::{DensityType, VolumeUnit};

/// A catalogued enteral formula product
#[derive(Debug, Clone, Serialize)]
pub struct EnteralProduct {
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub hcpcs_code: &'static str,
    /// Caloric density per mL of liquid (None = user must enter manually)
    pub kcal_per_ml: Option<f64>,
    /// Caloric density per gram of powder
    pub kcal_per_gram: Option<f64>,
    /// True for powder formulas where kcal/g is the primary density
    pub is_powder: bool,
}

/// Density field defaults derived from a product selection
///
/// The value is a suggestion only; the caller may override it without
/// changing the density type.
#[derive(Debug, Clone, Serialize)]
pub struct DensityPrefill {
    pub density_type: DensityType,
    pub density_value: Option<f64>,
    pub volume_unit: VolumeUnit,
}

impl EnteralProduct {
    /// Whether either density value is on record
    pub fn has_density(&self) -> bool {
        self.kcal_per_ml.is_some() || self.kcal_per_gram.is_some()
    }

    /// Density defaults for this product
    ///
    /// Powders with a gram density prefer kcal/g and gram dosing; anything
    /// with a mL density prefers kcal/mL. Modular products with neither
    /// leave the value blank for manual entry.
    pub fn prefill(&self) -> DensityPrefill {
        if self.is_powder {
            if let Some(kcal) = self.kcal_per_gram {
                return DensityPrefill {
                    density_type: DensityType::KcalPerG,
                    density_value: Some(kcal),
                    volume_unit: VolumeUnit::G,
                };
            }
        }

        if let Some(kcal) = self.kcal_per_ml {
            return DensityPrefill {
                density_type: DensityType::KcalPerMl,
                density_value: Some(kcal),
                volume_unit: VolumeUnit::Oz,
            };
        }

        DensityPrefill {
            density_type: DensityType::KcalPerMl,
            density_value: None,
            volume_unit: VolumeUnit::Oz,
        }
    }
}

impl DensityPrefill {
    /// Advisory text when the catalog has no density for the selection
    ///
    /// This degrades to manual entry; it is not a validation failure.
    pub fn advisory(&self) -> Option<&'static str> {
        if self.density_value.is_none() {
            Some("Caloric density is not available for this formula. Please enter it manually.")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liquid() -> EnteralProduct {
        EnteralProduct {
            name: "Test Liquid",
            manufacturer: "Test",
            hcpcs_code: "B4150",
            kcal_per_ml: Some(1.06),
            kcal_per_gram: None,
            is_powder: false,
        }
    }

    fn powder() -> EnteralProduct {
        EnteralProduct {
            name: "Test Powder",
            manufacturer: "Test",
            hcpcs_code: "B4157",
            kcal_per_ml: Some(0.82),
            kcal_per_gram: Some(4.1),
            is_powder: true,
        }
    }

    fn modular() -> EnteralProduct {
        EnteralProduct {
            name: "Test Modular",
            manufacturer: "Test",
            hcpcs_code: "B4155",
            kcal_per_ml: None,
            kcal_per_gram: None,
            is_powder: false,
        }
    }

    #[test]
    fn test_prefill_liquid_prefers_kcal_per_ml() {
        let pf = liquid().prefill();
        assert_eq!(pf.density_type, DensityType::KcalPerMl);
        assert_eq!(pf.density_value, Some(1.06));
        assert_eq!(pf.volume_unit, VolumeUnit::Oz);
        assert!(pf.advisory().is_none());
    }

    #[test]
    fn test_prefill_powder_prefers_kcal_per_gram() {
        let pf = powder().prefill();
        assert_eq!(pf.density_type, DensityType::KcalPerG);
        assert_eq!(pf.density_value, Some(4.1));
        assert_eq!(pf.volume_unit, VolumeUnit::G);
    }

    #[test]
    fn test_prefill_modular_leaves_density_blank() {
        let product = modular();
        assert!(!product.has_density());

        let pf = product.prefill();
        assert_eq!(pf.density_type, DensityType::KcalPerMl);
        assert_eq!(pf.density_value, None);
        assert!(pf.advisory().is_some());
    }
}
