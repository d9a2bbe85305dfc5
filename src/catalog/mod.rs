//! Catalog module
//!
//! Compiled-in HCPCS code table and enteral product classification list,
//! with the lookups needed to narrow products by code. Read-only for the
//! process lifetime.

pub mod data;

pub use data::{ENTERAL_PRODUCTS, HCPCS_CODES};

use crate::models::{DensityPrefill, EnteralProduct, HcpcsCode};

/// Look up an HCPCS code definition
///
/// Returns None for unknown codes; that is "no such code", not an error.
pub fn lookup_code(code: &str) -> Option<&'static HcpcsCode> {
    HCPCS_CODES.iter().find(|c| c.code == code)
}

/// All products catalogued under a code, sorted by name
///
/// Case-insensitive, stable order for deterministic listings. Empty for a
/// code with no catalogued products; the caller must then supply density
/// manually.
pub fn products_for_code(code: &str) -> Vec<&'static EnteralProduct> {
    let mut products: Vec<&'static EnteralProduct> = ENTERAL_PRODUCTS
        .iter()
        .filter(|p| p.hcpcs_code == code)
        .collect();
    products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    products
}

/// Find a product by its identity key (name, hcpcs_code)
pub fn find_product(code: &str, name: &str) -> Option<&'static EnteralProduct> {
    ENTERAL_PRODUCTS
        .iter()
        .find(|p| p.hcpcs_code == code && p.name == name)
}

/// Density field defaults for a product selection, if catalogued
pub fn prefill_for(code: &str, name: &str) -> Option<DensityPrefill> {
    find_product(code, name).map(|p| p.prefill())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DensityType, VolumeUnit};

    #[test]
    fn test_lookup_code_known() {
        let code = lookup_code("B4150").unwrap();
        assert_eq!(code.code, "B4150");
        assert_eq!(code.short_description, "Complete formula, intact nutrients");
        assert!(code.long_description.contains("100 calories = 1 unit"));
    }

    #[test]
    fn test_lookup_code_unknown() {
        assert!(lookup_code("B9999").is_none());
        assert!(lookup_code("").is_none());
    }

    #[test]
    fn test_products_for_code_filters_and_sorts() {
        let products = products_for_code("B4150");
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.hcpcs_code == "B4150"));

        // Case-insensitive ascending name order
        for pair in products.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn test_products_for_code_unknown_is_empty() {
        assert!(products_for_code("B9999").is_empty());
    }

    #[test]
    fn test_find_product_identity_spans_codes() {
        // The same product name can be classified under two codes; each is
        // a distinct record.
        let under_b4150 = find_product("B4150", "Isosource 1.5 Cal").unwrap();
        let under_b4152 = find_product("B4152", "Isosource 1.5 Cal").unwrap();
        assert_eq!(under_b4150.hcpcs_code, "B4150");
        assert_eq!(under_b4152.hcpcs_code, "B4152");
    }

    #[test]
    fn test_find_product_wrong_code() {
        assert!(find_product("B4149", "Ensure").is_none());
    }

    #[test]
    fn test_prefill_for_liquid() {
        let pf = prefill_for("B4150", "Ensure").unwrap();
        assert_eq!(pf.density_type, DensityType::KcalPerMl);
        assert_eq!(pf.density_value, Some(1.06));
    }

    #[test]
    fn test_prefill_for_powder() {
        let pf = prefill_for("B4162", "Phenex-1 (PKU)").unwrap();
        assert_eq!(pf.density_type, DensityType::KcalPerG);
        assert_eq!(pf.density_value, Some(4.8));
        assert_eq!(pf.volume_unit, VolumeUnit::G);
    }

    #[test]
    fn test_every_product_references_a_known_code() {
        for product in ENTERAL_PRODUCTS {
            assert!(
                lookup_code(product.hcpcs_code).is_some(),
                "product {} references unknown code {}",
                product.name,
                product.hcpcs_code
            );
        }
    }

    #[test]
    fn test_product_identity_keys_are_unique() {
        for (i, a) in ENTERAL_PRODUCTS.iter().enumerate() {
            for b in &ENTERAL_PRODUCTS[i + 1..] {
                assert!(
                    !(a.name == b.name && a.hcpcs_code == b.hcpcs_code),
                    "duplicate product record: {} / {}",
                    a.name,
                    a.hcpcs_code
                );
            }
        }
    }
}
