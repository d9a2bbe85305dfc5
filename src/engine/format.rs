//! Result formatting
//!
//! Display-number rendering and the human-readable summary sentence.

use crate::models::CalculationResult;

/// Render a number for display
///
/// Mathematical integers get no decimal places; everything else gets up to
/// two, with trailing zeros trimmed ("1.50" -> "1.5", "2" stays "2").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Human-readable summary of a calculation
pub fn narrative(result: &CalculationResult) -> String {
    let day_word = if result.num_days == 1 { "day" } else { "days" };
    let unit_word = if result.total_units == 1.0 {
        "unit is"
    } else {
        "units are"
    };
    format!(
        "The patient receives {} {} per day, the requested {} provides {} calories per {}, the request is for {} {}, therefore {} {} required.",
        format_number(result.daily_volume_amount),
        result.daily_volume_unit,
        result.formula_name,
        format_number(result.density_value),
        result.density_type.per_unit(),
        result.num_days,
        day_word,
        format_number(result.total_units),
        unit_word,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DensityType, VolumeUnit};

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(500.0), "500");
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(1.06), "1.06");
        assert_eq!(format_number(2.5078), "2.51");
    }

    #[test]
    fn test_narrative_single_day() {
        let result = CalculationResult {
            daily_volume_amount: 20.0,
            daily_volume_unit: VolumeUnit::G,
            daily_ml: 20.0,
            density_type: DensityType::KcalPerG,
            density_value: 4.1,
            calories_per_day: 82.0,
            num_days: 1,
            total_calories: 82.0,
            total_units: 1.0,
            formula_name: "Phenex-1 (PKU)".to_string(),
            hcpcs_code: "B4162".to_string(),
        };
        let text = narrative(&result);
        assert_eq!(
            text,
            "The patient receives 20 g per day, the requested Phenex-1 (PKU) provides 4.1 calories per g, the request is for 1 day, therefore 1 unit is required."
        );
    }

    #[test]
    fn test_narrative_multi_day() {
        let result = CalculationResult {
            daily_volume_amount: 8.0,
            daily_volume_unit: VolumeUnit::Oz,
            daily_ml: 236.588,
            density_type: DensityType::KcalPerMl,
            density_value: 1.06,
            calories_per_day: 250.78328,
            num_days: 30,
            total_calories: 7523.4984,
            total_units: 76.0,
            formula_name: "Ensure".to_string(),
            hcpcs_code: "B4150".to_string(),
        };
        let text = narrative(&result);
        assert!(text.contains("8 oz per day"));
        assert!(text.contains("1.06 calories per mL"));
        assert!(text.contains("30 days"));
        assert!(text.contains("76 units are required"));
    }
}
