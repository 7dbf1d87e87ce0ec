//! Post-processing of the generated inventory.
//!
//! The service returns temporary SKUs; the catalog convention is a
//! sequential `TEC` code assigned after sorting by description under
//! Spanish collation with base sensitivity (case and accents ignored,
//! eñe kept as a distinct letter after ene).

use crate::model::Material;

/// Collation key approximating `es` locale comparison at base sensitivity.
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars() {
        for lc in c.to_lowercase() {
            match lc {
                'á' | 'à' | 'ä' | 'â' => key.push('a'),
                'é' | 'è' | 'ë' | 'ê' => key.push('e'),
                'í' | 'ì' | 'ï' | 'î' => key.push('i'),
                'ó' | 'ò' | 'ö' | 'ô' => key.push('o'),
                'ú' | 'ù' | 'ü' | 'û' => key.push('u'),
                // Distinct letter in Spanish, ordered after every "n…" word.
                'ñ' => key.push_str("n~"),
                other => key.push(other),
            }
        }
    }
    key
}

/// Sort by description and overwrite SKUs with `TEC` + 6-digit sequential
/// codes starting at 1. Deterministic: same input set, same output.
pub fn renumber_skus(mut materials: Vec<Material>) -> Vec<Material> {
    materials.sort_by_cached_key(|m| collation_key(&m.description));
    for (index, material) in materials.iter_mut().enumerate() {
        material.sku = format!("TEC{:06}", index + 1);
    }
    materials
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplianceStatus, RiskLevel};

    fn material(description: &str) -> Material {
        Material {
            sku: "TEMP-01".to_string(),
            description: description.to_string(),
            stock: 10,
            location: "Almacén Central".to_string(),
            compliance_status: ComplianceStatus::Validado,
            risk_level: RiskLevel::Bajo,
        }
    }

    #[test]
    fn renumber_assigns_sequential_codes_by_description() {
        let out = renumber_skus(vec![material("Z-valve"), material("A-pump")]);
        assert_eq!(out[0].description, "A-pump");
        assert_eq!(out[0].sku, "TEC000001");
        assert_eq!(out[1].description, "Z-valve");
        assert_eq!(out[1].sku, "TEC000002");
    }

    #[test]
    fn sort_ignores_case_and_accents() {
        let out = renumber_skus(vec![
            material("bomba centrífuga"),
            material("Árbol de navidad"),
            material("ácido clorhídrico"),
        ]);
        assert_eq!(out[0].description, "ácido clorhídrico");
        assert_eq!(out[1].description, "Árbol de navidad");
        assert_eq!(out[2].description, "bomba centrífuga");
    }

    #[test]
    fn enie_sorts_after_ene() {
        assert!(collation_key("ñandubay") > collation_key("nylon"));
        assert!(collation_key("ñandubay") < collation_key("obturador"));
    }

    #[test]
    fn codes_are_zero_padded_to_six_digits() {
        let out = renumber_skus((0..12).map(|i| material(&format!("item {:02}", i))).collect());
        assert_eq!(out[9].sku, "TEC000010");
        assert_eq!(out[11].sku, "TEC000012");
    }
}
