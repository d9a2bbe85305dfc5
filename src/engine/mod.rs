//! Calculation engine
//!
//! Validates a calculation request and computes billable units
//! (1 unit = 100 kcal). Pure and synchronous; the same input always yields
//! the same output, and invalid input always yields the full list of
//! violated rules rather than a partial result.

pub mod format;
pub mod units;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{CalculationRequest, CalculationResult, DensityType};

/// A violated validation rule
///
/// The Display form of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select an HCPCS code.")]
    MissingHcpcsCode,

    #[error("Please select a formula.")]
    MissingFormula,

    #[error("Please enter a valid caloric density ({0}).")]
    InvalidDensity(DensityType),

    #[error("Please enter a valid daily volume.")]
    InvalidVolume,

    #[error("Please select a start date.")]
    MissingStartDate,

    #[error("Please select an end date.")]
    MissingEndDate,

    #[error("End date must be on or after start date.")]
    EndDateBeforeStartDate,
}

/// How a fractional raw unit count is reported
///
/// Partial units are never billed fractionally under the default; the
/// exact policy preserves the raw kcal/100 quotient for payers that bill
/// that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Round up to the next whole unit; exact integers pass through
    #[default]
    CeilToWholeUnit,
    /// Report totalCalories / 100 unrounded
    Exact,
}

/// Fields guaranteed present and in range after validation
struct Validated {
    density_value: f64,
    daily_volume_amount: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

fn validate_request(request: &CalculationRequest) -> Result<Validated, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if request.hcpcs_code.trim().is_empty() {
        errors.push(ValidationError::MissingHcpcsCode);
    }

    if request.formula_name.trim().is_empty() {
        errors.push(ValidationError::MissingFormula);
    }

    let density_value = match request.density_value {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            errors.push(ValidationError::InvalidDensity(request.density_type));
            None
        }
    };

    let daily_volume_amount = match request.daily_volume_amount {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            errors.push(ValidationError::InvalidVolume);
            None
        }
    };

    if request.start_date.is_none() {
        errors.push(ValidationError::MissingStartDate);
    }

    if request.end_date.is_none() {
        errors.push(ValidationError::MissingEndDate);
    }

    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if end < start {
            errors.push(ValidationError::EndDateBeforeStartDate);
        }
    }

    match (
        density_value,
        daily_volume_amount,
        request.start_date,
        request.end_date,
    ) {
        (Some(density_value), Some(daily_volume_amount), Some(start_date), Some(end_date))
            if errors.is_empty() =>
        {
            Ok(Validated {
                density_value,
                daily_volume_amount,
                start_date,
                end_date,
            })
        }
        _ => Err(errors),
    }
}

/// Check a request against all validation rules
///
/// Returns every violated rule in rule order; empty means valid.
pub fn validate(request: &CalculationRequest) -> Vec<ValidationError> {
    match validate_request(request) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

/// Validate and calculate with the default ceiling rounding policy
pub fn calculate(
    request: &CalculationRequest,
) -> Result<CalculationResult, Vec<ValidationError>> {
    calculate_with_policy(request, RoundingPolicy::default())
}

/// Validate and calculate under an explicit rounding policy
pub fn calculate_with_policy(
    request: &CalculationRequest,
    policy: RoundingPolicy,
) -> Result<CalculationResult, Vec<ValidationError>> {
    let valid = validate_request(request)?;

    let daily_ml = units::to_ml(valid.daily_volume_amount, request.daily_volume_unit);

    let calories_per_day = match request.density_type {
        DensityType::KcalPerMl => daily_ml * valid.density_value,
        DensityType::KcalPerG => {
            units::to_grams(valid.daily_volume_amount, request.daily_volume_unit)
                * valid.density_value
        }
    };

    // Inclusive day count: both bounds billed, one calendar day = 1
    let num_days = valid
        .end_date
        .signed_duration_since(valid.start_date)
        .num_days()
        + 1;

    let total_calories = calories_per_day * num_days as f64;

    let raw_units = total_calories / 100.0;
    let total_units = match policy {
        RoundingPolicy::CeilToWholeUnit => raw_units.ceil(),
        RoundingPolicy::Exact => raw_units,
    };

    Ok(CalculationResult {
        daily_volume_amount: valid.daily_volume_amount,
        daily_volume_unit: request.daily_volume_unit,
        daily_ml,
        density_type: request.density_type,
        density_value: valid.density_value,
        calories_per_day,
        num_days,
        total_calories,
        total_units,
        formula_name: request.formula_name.clone(),
        hcpcs_code: request.hcpcs_code.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VolumeUnit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Scenario: Ensure (1.06 kcal/mL), 8 oz/day, single day
    fn ensure_request() -> CalculationRequest {
        CalculationRequest {
            hcpcs_code: "B4150".to_string(),
            formula_name: "Ensure".to_string(),
            density_type: DensityType::KcalPerMl,
            density_value: Some(1.06),
            daily_volume_amount: Some(8.0),
            daily_volume_unit: VolumeUnit::Oz,
            start_date: Some(date(2025, 1, 9)),
            end_date: Some(date(2025, 1, 9)),
        }
    }

    #[test]
    fn test_liquid_single_day() {
        let result = calculate(&ensure_request()).unwrap();
        assert!((result.daily_ml - 236.588).abs() < 0.001);
        assert!((result.calories_per_day - 250.78328).abs() < 0.001);
        assert_eq!(result.num_days, 1);
        assert!((result.total_calories - 250.78328).abs() < 0.001);
        // ceil(2.5078) = 3
        assert_eq!(result.total_units, 3.0);
    }

    #[test]
    fn test_powder_grams_single_day() {
        let request = CalculationRequest {
            hcpcs_code: "B4162".to_string(),
            formula_name: "Phenex-1 (PKU)".to_string(),
            density_type: DensityType::KcalPerG,
            density_value: Some(4.1),
            daily_volume_amount: Some(20.0),
            daily_volume_unit: VolumeUnit::G,
            start_date: Some(date(2025, 3, 1)),
            end_date: Some(date(2025, 3, 1)),
        };
        let result = calculate(&request).unwrap();
        assert!((result.calories_per_day - 82.0).abs() < 1e-9);
        assert!((result.total_calories - 82.0).abs() < 1e-9);
        // ceil(0.82) = 1
        assert_eq!(result.total_units, 1.0);
    }

    #[test]
    fn test_gram_density_with_oz_volume() {
        // 2 oz of powder mix at 4.1 kcal/g: grams = 2 * 29.5735 * 1.0
        let request = CalculationRequest {
            density_type: DensityType::KcalPerG,
            density_value: Some(4.1),
            daily_volume_amount: Some(2.0),
            daily_volume_unit: VolumeUnit::Oz,
            ..ensure_request()
        };
        let result = calculate(&request).unwrap();
        let expected = 2.0 * units::OZ_TO_ML * units::G_TO_ML * 4.1;
        assert!((result.calories_per_day - expected).abs() < 1e-9);
    }

    #[test]
    fn test_exact_multiple_of_100_not_rounded() {
        // 500 mL at 1.0 kcal/mL for one day = 500 kcal = 5 units exactly
        let request = CalculationRequest {
            density_value: Some(1.0),
            daily_volume_amount: Some(500.0),
            daily_volume_unit: VolumeUnit::Ml,
            ..ensure_request()
        };
        let result = calculate(&request).unwrap();
        assert_eq!(result.total_calories, 500.0);
        assert_eq!(result.total_units, 5.0);
    }

    #[test]
    fn test_exact_policy_keeps_fraction() {
        let result =
            calculate_with_policy(&ensure_request(), RoundingPolicy::Exact).unwrap();
        assert!((result.total_units - 2.5078328).abs() < 0.001);
    }

    #[test]
    fn test_inclusive_day_count() {
        let request = CalculationRequest {
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 1, 31)),
            ..ensure_request()
        };
        let result = calculate(&request).unwrap();
        assert_eq!(result.num_days, 31);
        assert!((result.total_calories - result.calories_per_day * 31.0).abs() < 1e-6);
    }

    #[test]
    fn test_day_count_spans_months() {
        let request = CalculationRequest {
            start_date: Some(date(2025, 1, 30)),
            end_date: Some(date(2025, 2, 2)),
            ..ensure_request()
        };
        let result = calculate(&request).unwrap();
        assert_eq!(result.num_days, 4);
    }

    #[test]
    fn test_total_units_is_whole_and_covers_calories() {
        let request = CalculationRequest {
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 1, 7)),
            ..ensure_request()
        };
        let result = calculate(&request).unwrap();
        assert_eq!(result.total_units.fract(), 0.0);
        assert!(result.total_units >= result.total_calories / 100.0);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let request = CalculationRequest {
            start_date: Some(date(2025, 1, 10)),
            end_date: Some(date(2025, 1, 9)),
            ..ensure_request()
        };
        let errors = calculate(&request).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EndDateBeforeStartDate]);
    }

    #[test]
    fn test_empty_request_reports_every_rule() {
        let request = CalculationRequest::default();
        let errors = validate(&request);
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingHcpcsCode,
                ValidationError::MissingFormula,
                ValidationError::InvalidDensity(DensityType::KcalPerMl),
                ValidationError::InvalidVolume,
                ValidationError::MissingStartDate,
                ValidationError::MissingEndDate,
            ]
        );
    }

    #[test]
    fn test_non_positive_numbers_rejected() {
        let request = CalculationRequest {
            density_value: Some(0.0),
            daily_volume_amount: Some(-8.0),
            ..ensure_request()
        };
        let errors = validate(&request);
        assert!(errors.contains(&ValidationError::InvalidDensity(DensityType::KcalPerMl)));
        assert!(errors.contains(&ValidationError::InvalidVolume));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let request = CalculationRequest {
            density_value: Some(f64::NAN),
            daily_volume_amount: Some(f64::INFINITY),
            ..ensure_request()
        };
        let errors = validate(&request);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_density_error_names_active_type() {
        let request = CalculationRequest {
            density_type: DensityType::KcalPerG,
            density_value: None,
            ..ensure_request()
        };
        let errors = validate(&request);
        assert_eq!(
            errors[0].to_string(),
            "Please enter a valid caloric density (kcal/g)."
        );
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(validate(&ensure_request()).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let request = ensure_request();
        let a = calculate(&request).unwrap();
        let b = calculate(&request).unwrap();
        assert_eq!(a.total_units, b.total_units);
        assert_eq!(a.total_calories, b.total_calories);
    }
}
