//! HCPCS code model
//!
//! A billing classification code for a category of enteral formula.

use serde::Serialize;

/// An enteral nutrition HCPCS code (B-series), 100 calories = 1 unit
#[derive(Debug, Clone, Serialize)]
pub struct HcpcsCode {
    /// Code identifier, e.g. "B4150"
    pub code: &'static str,
    /// Short label for pick lists
    pub short_description: &'static str,
    /// Full CMS long descriptor
    pub long_description: &'static str,
}
