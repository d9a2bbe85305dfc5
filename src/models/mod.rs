//! Data models
//!
//! Rust structs representing catalog records and calculation inputs/outputs.

mod hcpcs;
mod product;
mod request;
mod result;

pub use hcpcs::HcpcsCode;
pub use product::{DensityPrefill, EnteralProduct};
pub use request::{CalculationRequest, DensityType, VolumeUnit};
pub use result::CalculationResult;
