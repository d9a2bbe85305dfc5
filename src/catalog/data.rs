//! Static catalog data
//!
//! HCPCS enteral nutrition code definitions and product classification data.
//! Sources: CMS HCPCS code set, eMedNY/PDAC product classification list,
//! manufacturer nutrition data.

use crate::models::{EnteralProduct, HcpcsCode};

/// HCPCS B-series enteral formula codes
pub static HCPCS_CODES: &[HcpcsCode] = &[
    HcpcsCode {
        code: "B4149",
        short_description: "Blenderized food via tube",
        long_description: "Enteral formula, manufactured blenderized natural foods with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4150",
        short_description: "Complete formula, intact nutrients",
        long_description: "Enteral formula, nutritionally complete with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4152",
        short_description: "Calorically dense (>=1.5 kcal/mL)",
        long_description: "Enteral formula, nutritionally complete, calorically dense (equal to or greater than 1.5 kcal/mL) with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4153",
        short_description: "Hydrolyzed proteins (semi-elemental)",
        long_description: "Enteral formula, nutritionally complete, hydrolyzed proteins (amino acids and peptide chain), includes fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4154",
        short_description: "Special metabolic needs",
        long_description: "Enteral formula, nutritionally complete, for special metabolic needs, excludes inherited disease of metabolism, includes altered composition of proteins, fats, carbohydrates, vitamins and/or minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4155",
        short_description: "Modular nutrients (incomplete)",
        long_description: "Enteral formula, nutritionally incomplete/modular nutrients, includes specific nutrients, carbohydrates (e.g., glucose polymers), proteins/amino acids (e.g., glutamine, arginine), fat (e.g., medium chain triglycerides) or combination, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4157",
        short_description: "Inherited disease of metabolism",
        long_description: "Enteral formula, nutritionally complete, for special metabolic needs for inherited disease of metabolism, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4158",
        short_description: "Pediatric, intact nutrients",
        long_description: "Enteral formula, for pediatrics, nutritionally complete with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber and/or iron, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4159",
        short_description: "Pediatric, soy-based",
        long_description: "Enteral formula, for pediatrics, nutritionally complete soy based with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber and/or iron, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4160",
        short_description: "Pediatric, calorically dense (>=0.7 kcal/mL)",
        long_description: "Enteral formula, for pediatrics, nutritionally complete calorically dense (equal to or greater than 0.7 kcal/mL) with intact nutrients, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4161",
        short_description: "Pediatric, hydrolyzed proteins",
        long_description: "Enteral formula, for pediatrics, hydrolyzed/amino acids and peptide chain proteins, includes fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
    HcpcsCode {
        code: "B4162",
        short_description: "Pediatric, inherited disease of metabolism",
        long_description: "Enteral formula, for pediatrics, special metabolic needs for inherited disease of metabolism, includes proteins, fats, carbohydrates, vitamins and minerals, may include fiber, administered through an enteral feeding tube, 100 calories = 1 unit",
    },
];

/// Product classification list
///
/// kcal_per_ml from manufacturer data and the Texas HHS comparison chart;
/// kcal_per_gram from manufacturer nutrition labels for powder products.
pub static ENTERAL_PRODUCTS: &[EnteralProduct] = &[
    // B4149: Blenderized food via tube
    EnteralProduct { name: "Compleat Organic Blends (Chicken Garden)", manufacturer: "Nestle", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Organic Blends (Plant-Based)", manufacturer: "Nestle", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Organic Standard 1.0 (Vanilla)", manufacturer: "Kate Farms", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Liquid Hope", manufacturer: "Functional Formularies", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Liquid Hope Peptide", manufacturer: "Functional Formularies", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nourish", manufacturer: "Functional Formularies", hcpcs_code: "B4149", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Salmon/Oats/Squash)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Beef/Potatoes/Spinach)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Eggs/Apples/Oats)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Turkey/Sweet Potatoes/Peaches)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Orange Chicken/Brown Rice/Carrots)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Real Food Blends (Quinoa/Kale/Hemp)", manufacturer: "Real Food Blends", hcpcs_code: "B4149", kcal_per_ml: Some(0.67), kcal_per_gram: None, is_powder: false },

    // B4150: Nutritionally complete, intact nutrients
    EnteralProduct { name: "Osmolite 1 Cal", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.06), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Osmolite 1.2 Cal", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Jevity 1 Cal", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.06), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Jevity 1.2 Cal", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Promote", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Promote with Fiber", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.06), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure with Fiber", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.1), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure High Protein", manufacturer: "Abbott", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Fibersource HN", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Isosource HN", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Isosource 1.5 Cal", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren 1.0", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren 1.0 Fiber", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Standard 1.0", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Standard 1.4", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.4), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Impact (with Fiber)", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.01), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost High Protein", manufacturer: "Nestle", hcpcs_code: "B4150", kcal_per_ml: Some(1.01), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Standard 1.0", manufacturer: "Kate Farms", hcpcs_code: "B4150", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Standard 1.4", manufacturer: "Kate Farms", hcpcs_code: "B4150", kcal_per_ml: Some(1.4), kcal_per_gram: None, is_powder: false },

    // B4152: Calorically dense (>=1.5 kcal/mL)
    EnteralProduct { name: "Osmolite 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Jevity 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure Plus", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure Enlive", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(1.53), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Ensure Compact", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(2.18), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "TwoCal HN", manufacturer: "Abbott", hcpcs_code: "B4152", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren 1.5", manufacturer: "Nestle", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren 2.0", manufacturer: "Nestle", hcpcs_code: "B4152", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost Plus", manufacturer: "Nestle", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost VHC (Very High Calorie)", manufacturer: "Nestle", hcpcs_code: "B4152", kcal_per_ml: Some(2.25), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Isosource 1.5 Cal", manufacturer: "Nestle", hcpcs_code: "B4152", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Standard 1.4", manufacturer: "Kate Farms", hcpcs_code: "B4152", kcal_per_ml: Some(1.4), kcal_per_gram: None, is_powder: false },

    // B4153: Hydrolyzed proteins / semi-elemental
    EnteralProduct { name: "Vital 1.0 Cal", manufacturer: "Abbott", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vital AF 1.2 Cal", manufacturer: "Abbott", hcpcs_code: "B4153", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vital 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4153", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vital High Protein", manufacturer: "Abbott", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen AF", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen 1.5", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen Intense VHP", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen with Prebio1", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Peptide 1.5", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Impact Peptide 1.5", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Tolerex", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vivonex T.E.N.", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vivonex Plus", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Vivonex RTF", manufacturer: "Nestle", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Peptide 1.0", manufacturer: "Kate Farms", hcpcs_code: "B4153", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Peptide 1.5", manufacturer: "Kate Farms", hcpcs_code: "B4153", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },

    // B4154: Special metabolic needs (not inherited)
    EnteralProduct { name: "Glucerna 1.0 Cal", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Glucerna 1.2 Cal", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Glucerna 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nepro with Carb Steady", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.8), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Suplena with Carb Steady", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.8), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Pulmocare", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Oxepa", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Perative", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.3), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Pivot 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4154", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Novasource Renal", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren Pulmonary", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren Renal", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Diabetisource AC", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Renalcal", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Impact Advanced Recovery", manufacturer: "Nestle", hcpcs_code: "B4154", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Glucose Support 1.2", manufacturer: "Kate Farms", hcpcs_code: "B4154", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Renal Support 1.8", manufacturer: "Kate Farms", hcpcs_code: "B4154", kcal_per_ml: Some(1.8), kcal_per_gram: None, is_powder: false },

    // B4155: Modular/incomplete nutrients
    EnteralProduct { name: "Beneprotein (Protein Powder)", manufacturer: "Nestle", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Juven (Arginine/Glutamine)", manufacturer: "Abbott", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "MCT Oil", manufacturer: "Various", hcpcs_code: "B4155", kcal_per_ml: Some(7.7), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Microlipid", manufacturer: "Nestle", hcpcs_code: "B4155", kcal_per_ml: Some(4.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Polycose (Liquid)", manufacturer: "Abbott", hcpcs_code: "B4155", kcal_per_ml: Some(2.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Polycose (Powder)", manufacturer: "Abbott", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: Some(3.8), is_powder: true },
    EnteralProduct { name: "Arginaid", manufacturer: "Nestle", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Glutasolve", manufacturer: "Nestle", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "ProMod Liquid Protein", manufacturer: "Abbott", hcpcs_code: "B4155", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Resource Benefiber", manufacturer: "Nestle", hcpcs_code: "B4155", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },

    // B4157: Inherited disease of metabolism (adult)
    // Abbott "-2" powders: 410 kcal per 100g = 4.1 kcal/g; kcal/mL at
    // standard dilution (~20g/100mL water) = ~0.82 kcal/mL
    EnteralProduct { name: "Phenex-2 (PKU)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "Glutarex-2 (Glutaric Aciduria)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "Hominex-2 (Homocystinuria)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "Ketonex-2 (MSUD)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "Propimex-2 (Propionic/Methylmalonic)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "Tyrex-2 (Tyrosinemia)", manufacturer: "Abbott", hcpcs_code: "B4157", kcal_per_ml: Some(0.82), kcal_per_gram: Some(4.1), is_powder: true },
    EnteralProduct { name: "PKU Anamix Early Years", manufacturer: "Nutricia", hcpcs_code: "B4157", kcal_per_ml: Some(0.68), kcal_per_gram: Some(3.75), is_powder: true },
    EnteralProduct { name: "PKU Anamix Junior (Powder)", manufacturer: "Nutricia", hcpcs_code: "B4157", kcal_per_ml: Some(0.94), kcal_per_gram: Some(3.75), is_powder: true },
    EnteralProduct { name: "PKU Anamix Junior LQ (Liquid)", manufacturer: "Nutricia", hcpcs_code: "B4157", kcal_per_ml: Some(0.94), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "UCD Anamix Junior", manufacturer: "Nutricia", hcpcs_code: "B4157", kcal_per_ml: Some(0.9), kcal_per_gram: Some(3.85), is_powder: true },

    // B4158: Pediatric, intact nutrients
    EnteralProduct { name: "PediaSure 1.0 Cal", manufacturer: "Abbott", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "PediaSure with Fiber", manufacturer: "Abbott", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren Junior", manufacturer: "Nestle", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren Junior with Fiber", manufacturer: "Nestle", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost Kid Essentials 1.0", manufacturer: "Nestle", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Pediatric Standard 1.0", manufacturer: "Kate Farms", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Pediatric Standard", manufacturer: "Nestle", hcpcs_code: "B4158", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Pediatric Reduced Calorie", manufacturer: "Nestle", hcpcs_code: "B4158", kcal_per_ml: Some(0.6), kcal_per_gram: None, is_powder: false },

    // B4159: Pediatric, soy-based
    EnteralProduct { name: "PediaSure (Soy-Based)", manufacturer: "Abbott", hcpcs_code: "B4159", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Bright Beginnings Pediatric Soy", manufacturer: "PBM Products", hcpcs_code: "B4159", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },

    // B4160: Pediatric, calorically dense (>=0.7 kcal/mL)
    EnteralProduct { name: "PediaSure 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4160", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "PediaSure Grow & Gain", manufacturer: "Abbott", hcpcs_code: "B4160", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "PediaSure Harvest", manufacturer: "Abbott", hcpcs_code: "B4160", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Boost Kid Essentials 1.5", manufacturer: "Nestle", hcpcs_code: "B4160", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Nutren Junior 1.5", manufacturer: "Nestle", hcpcs_code: "B4160", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Pediatric Standard 1.2", manufacturer: "Kate Farms", hcpcs_code: "B4160", kcal_per_ml: Some(1.2), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Pediatric 1.4", manufacturer: "Nestle", hcpcs_code: "B4160", kcal_per_ml: Some(1.4), kcal_per_gram: None, is_powder: false },

    // B4161: Pediatric, hydrolyzed proteins
    EnteralProduct { name: "PediaSure Peptide 1.0 Cal", manufacturer: "Abbott", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "PediaSure Peptide 1.5 Cal", manufacturer: "Abbott", hcpcs_code: "B4161", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen Junior", manufacturer: "Nestle", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Peptamen Junior 1.5", manufacturer: "Nestle", hcpcs_code: "B4161", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "EleCare Jr", manufacturer: "Abbott", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Neocate Junior", manufacturer: "Nutricia", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Pediatric Peptide 1.0", manufacturer: "Kate Farms", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Kate Farms Pediatric Peptide 1.5", manufacturer: "Kate Farms", hcpcs_code: "B4161", kcal_per_ml: Some(1.5), kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Compleat Pediatric Peptide", manufacturer: "Nestle", hcpcs_code: "B4161", kcal_per_ml: Some(1.0), kcal_per_gram: None, is_powder: false },

    // B4162: Pediatric, inherited disease of metabolism
    // Abbott "-1" powders: 480 kcal per 100g = 4.8 kcal/g
    EnteralProduct { name: "Phenex-1 (PKU)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "Glutarex-1 (Glutaric Aciduria)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "Hominex-1 (Homocystinuria)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "Ketonex-1 (MSUD)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "Propimex-1 (Propionic/Methylmalonic)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "Tyrex-1 (Tyrosinemia)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: Some(4.8), is_powder: true },
    EnteralProduct { name: "PKU Anamix Infant", manufacturer: "Nutricia", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "Neocate Infant DHA/ARA", manufacturer: "Nutricia", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
    EnteralProduct { name: "EleCare (Infant)", manufacturer: "Abbott", hcpcs_code: "B4162", kcal_per_ml: None, kcal_per_gram: None, is_powder: false },
];
