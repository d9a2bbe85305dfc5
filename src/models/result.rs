//! Calculation result model
//!
//! Pure output value for one successful calculation; discarded after
//! display.

use serde::{Deserialize, Serialize};

use super::{DensityType, VolumeUnit};

/// Output of one billing-unit calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Daily intake as entered
    pub daily_volume_amount: f64,
    pub daily_volume_unit: VolumeUnit,
    /// Daily intake normalized to mL (display/debugging)
    pub daily_ml: f64,
    pub density_type: DensityType,
    pub density_value: f64,
    pub calories_per_day: f64,
    /// Inclusive calendar-day count, always >= 1
    pub num_days: i64,
    pub total_calories: f64,
    /// Billable units (1 unit = 100 kcal), whole under the default policy
    pub total_units: f64,
    pub formula_name: String,
    pub hcpcs_code: String,
}
