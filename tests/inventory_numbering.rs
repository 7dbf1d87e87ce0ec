use matsub::model::{ComplianceStatus, Material, RiskLevel};
use matsub::provider::{collation_key, renumber_skus};

fn material(sku: &str, description: &str, location: &str) -> Material {
    Material {
        sku: sku.to_string(),
        description: description.to_string(),
        stock: 25,
        location: location.to_string(),
        compliance_status: ComplianceStatus::Validado,
        risk_level: RiskLevel::Bajo,
    }
}

#[test]
fn skus_follow_locale_sorted_description_order() {
    let out = renumber_skus(vec![
        material("TEMP-01", "Z-valve", "A"),
        material("TEMP-02", "A-pump", "A"),
    ]);
    assert_eq!(out[0].description, "A-pump");
    assert_eq!(out[0].sku, "TEC000001");
    assert_eq!(out[1].description, "Z-valve");
    assert_eq!(out[1].sku, "TEC000002");
}

#[test]
fn accents_and_case_do_not_split_the_order() {
    let out = renumber_skus(vec![
        material("TEMP-01", "Émbolo hidráulico", "A"),
        material("TEMP-02", "empaquetadura de grafito", "A"),
        material("TEMP-03", "Codo de 90 grados", "A"),
    ]);
    // é folds to e: Codo < Émbolo < empaquetadura.
    assert_eq!(out[0].description, "Codo de 90 grados");
    assert_eq!(out[1].description, "Émbolo hidráulico");
    assert_eq!(out[2].description, "empaquetadura de grafito");
}

#[test]
fn only_skus_are_rewritten() {
    let out = renumber_skus(vec![material("TEMP-09", "Tubería API 5L", "Base Sur")]);
    assert_eq!(out[0].sku, "TEC000001");
    assert_eq!(out[0].description, "Tubería API 5L");
    assert_eq!(out[0].location, "Base Sur");
    assert_eq!(out[0].stock, 25);
}

#[test]
fn equal_descriptions_keep_their_relative_order() {
    let out = renumber_skus(vec![
        material("TEMP-01", "Brida ciega", "Primera"),
        material("TEMP-02", "brida ciega", "Segunda"),
    ]);
    assert_eq!(out[0].location, "Primera");
    assert_eq!(out[1].location, "Segunda");
}

#[test]
fn numbering_is_dense_and_zero_padded() {
    let inputs: Vec<Material> = (0..15)
        .map(|i| material("TEMP", &format!("material {:02}", i), "A"))
        .collect();
    let out = renumber_skus(inputs);
    for (index, item) in out.iter().enumerate() {
        assert_eq!(item.sku, format!("TEC{:06}", index + 1));
    }
}

#[test]
fn collation_treats_enie_as_its_own_letter() {
    // Spanish order: n-words < ñ-words < o-words.
    assert!(collation_key("niple") < collation_key("ñandubay"));
    assert!(collation_key("nylon") < collation_key("ñandubay"));
    assert!(collation_key("ñandubay") < collation_key("oring"));
}
