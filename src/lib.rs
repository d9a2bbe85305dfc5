//! Enteral Nutrition Unit Calculator Library
//!
//! Converts prescribed enteral feeding regimens into HCPCS billing units
//! (1 unit = 100 kcal).

pub mod build_info;
pub mod catalog;
pub mod engine;
pub mod models;
