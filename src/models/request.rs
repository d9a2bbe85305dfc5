//! Calculation request model
//!
//! One request per invocation, constructed by the caller (form or CLI)
//! and treated by the engine as an opaque input to validate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the caloric density value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DensityType {
    #[default]
    #[serde(rename = "kcal/mL")]
    KcalPerMl,
    #[serde(rename = "kcal/g")]
    KcalPerG,
}

impl DensityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityType::KcalPerMl => "kcal/mL",
            DensityType::KcalPerG => "kcal/g",
        }
    }

    /// The unit the density is expressed per ("mL" or "g")
    pub fn per_unit(&self) -> &'static str {
        match self {
            DensityType::KcalPerMl => "mL",
            DensityType::KcalPerG => "g",
        }
    }
}

impl std::fmt::Display for DensityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of the daily intake volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VolumeUnit {
    #[default]
    #[serde(rename = "oz")]
    Oz,
    #[serde(rename = "mL")]
    Ml,
    #[serde(rename = "g")]
    G,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Oz => "oz",
            VolumeUnit::Ml => "mL",
            VolumeUnit::G => "g",
        }
    }
}

impl std::fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one billing-unit calculation
///
/// Numeric and date fields are optional so an incomplete form submission
/// still deserializes; validation reports every missing or invalid field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub hcpcs_code: String,
    #[serde(default)]
    pub formula_name: String,
    #[serde(default)]
    pub density_type: DensityType,
    /// Resolved density value: explicit override, else the catalog value
    #[serde(default)]
    pub density_value: Option<f64>,
    #[serde(default)]
    pub daily_volume_amount: Option<f64>,
    #[serde(default)]
    pub daily_volume_unit: VolumeUnit,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_type_strings() {
        assert_eq!(DensityType::KcalPerMl.as_str(), "kcal/mL");
        assert_eq!(DensityType::KcalPerG.as_str(), "kcal/g");
        assert_eq!(DensityType::KcalPerMl.per_unit(), "mL");
        assert_eq!(DensityType::KcalPerG.per_unit(), "g");
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let req: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.hcpcs_code.is_empty());
        assert_eq!(req.density_type, DensityType::KcalPerMl);
        assert_eq!(req.daily_volume_unit, VolumeUnit::Oz);
        assert!(req.start_date.is_none());
    }

    #[test]
    fn test_request_deserializes_full() {
        let req: CalculationRequest = serde_json::from_str(
            r#"{
                "hcpcs_code": "B4150",
                "formula_name": "Ensure",
                "density_type": "kcal/g",
                "density_value": 4.1,
                "daily_volume_amount": 20,
                "daily_volume_unit": "g",
                "start_date": "2025-01-09",
                "end_date": "2025-01-09"
            }"#,
        )
        .unwrap();
        assert_eq!(req.density_type, DensityType::KcalPerG);
        assert_eq!(req.daily_volume_unit, VolumeUnit::G);
        assert_eq!(req.density_value, Some(4.1));
        assert_eq!(req.start_date, req.end_date);
    }
}
