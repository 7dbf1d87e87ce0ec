use matsub::model::{ComplianceStatus, Material, RiskLevel, SuggestionStatus};
use matsub::store::{Reducer, StoreIntent, StoreReducer, StoreState, View, CURRENT_USER};

fn material(sku: &str, stock: u32, compliance: ComplianceStatus) -> Material {
    Material {
        sku: sku.to_string(),
        description: format!("material {}", sku),
        stock,
        location: "Almacén Central".to_string(),
        compliance_status: compliance,
        risk_level: RiskLevel::Medio,
    }
}

fn loaded_state() -> StoreState {
    StoreReducer::reduce(
        StoreState::default(),
        StoreIntent::InventoryLoaded {
            materials: vec![
                material("TEC000001", 3, ComplianceStatus::Validado),
                material("TEC000004", 12, ComplianceStatus::EnRevision),
                material("TEC000009", 0, ComplianceStatus::EnRevision),
            ],
        },
    )
}

// -- stock ------------------------------------------------------------------

#[test]
fn decrement_updates_only_the_matching_entry() {
    let state = StoreReducer::reduce(
        loaded_state(),
        StoreIntent::DecrementStock {
            sku: "TEC000004".to_string(),
            quantity: 2,
        },
    );
    assert_eq!(state.stock_of("TEC000004"), Some(10));
    assert_eq!(state.stock_of("TEC000001"), Some(3));
}

#[test]
fn decrement_never_goes_negative() {
    let state = StoreReducer::reduce(
        loaded_state(),
        StoreIntent::DecrementStock {
            sku: "TEC000001".to_string(),
            quantity: 5,
        },
    );
    assert_eq!(state.stock_of("TEC000001"), Some(0));
}

#[test]
fn decrement_unknown_sku_changes_nothing() {
    let before = loaded_state();
    let after = StoreReducer::reduce(
        before.clone(),
        StoreIntent::DecrementStock {
            sku: "TEC424242".to_string(),
            quantity: 1,
        },
    );
    assert_eq!(before, after);
}

// -- approval ---------------------------------------------------------------

#[test]
fn approve_validates_material_and_pending_suggestions() {
    // Seed state carries a pending suggestion with substitute TEC000009.
    let state = StoreReducer::reduce(
        loaded_state(),
        StoreIntent::ApproveMaterial {
            sku: "TEC000009".to_string(),
        },
    );

    assert_eq!(
        state.material("TEC000009").unwrap().compliance_status,
        ComplianceStatus::Validado
    );
    let touched = state
        .suggestions
        .iter()
        .find(|s| s.substitute_sku == "TEC000009")
        .unwrap();
    assert_eq!(touched.status, SuggestionStatus::Aprobado);
}

#[test]
fn approve_matches_original_sku_as_well() {
    let mut base = loaded_state();
    base = StoreReducer::reduce(
        base,
        StoreIntent::AddSuggestion {
            original_sku: "TEC000004".to_string(),
            substitute_sku: "TEC777777".to_string(),
            justification: "equivalente".to_string(),
        },
    );

    let state = StoreReducer::reduce(
        base,
        StoreIntent::ApproveMaterial {
            sku: "TEC000004".to_string(),
        },
    );
    assert_eq!(state.suggestions[0].status, SuggestionStatus::Aprobado);
}

#[test]
fn approve_is_idempotent() {
    let once = StoreReducer::reduce(
        loaded_state(),
        StoreIntent::ApproveMaterial {
            sku: "TEC000009".to_string(),
        },
    );
    let twice = StoreReducer::reduce(
        once.clone(),
        StoreIntent::ApproveMaterial {
            sku: "TEC000009".to_string(),
        },
    );
    assert_eq!(once, twice);
}

#[test]
fn terminal_statuses_are_immutable() {
    // The seed data has a rejected suggestion for TEC000011/TEC000018.
    let state = loaded_state();
    let rejected_id = state
        .suggestions
        .iter()
        .find(|s| s.status == SuggestionStatus::Rechazado)
        .map(|s| (s.id, s.original_sku.clone(), s.substitute_sku.clone()))
        .unwrap();

    let mut state = StoreReducer::reduce(
        state,
        StoreIntent::ApproveMaterial {
            sku: rejected_id.1.clone(),
        },
    );
    state = StoreReducer::reduce(
        state,
        StoreIntent::ApproveMaterial {
            sku: rejected_id.2.clone(),
        },
    );

    let suggestion = state
        .suggestions
        .iter()
        .find(|s| s.id == rejected_id.0)
        .unwrap();
    assert_eq!(suggestion.status, SuggestionStatus::Rechazado);
}

// -- suggestions ------------------------------------------------------------

#[test]
fn submissions_are_prepended_with_fixed_status_and_submitter() {
    let state = StoreReducer::reduce(
        StoreState::default(),
        StoreIntent::AddSuggestion {
            original_sku: "TEC000001".to_string(),
            substitute_sku: "TEC000002".to_string(),
            justification: "mismo diámetro nominal".to_string(),
        },
    );

    let newest = &state.suggestions[0];
    assert_eq!(newest.status, SuggestionStatus::Pendiente);
    assert_eq!(newest.submitted_by, CURRENT_USER);
    assert_eq!(newest.justification, "mismo diámetro nominal");
}

#[test]
fn suggestion_ids_are_strictly_increasing() {
    let mut state = StoreState::default();
    let mut last_id = state.suggestions.iter().map(|s| s.id).max().unwrap();

    for i in 0..4 {
        state = StoreReducer::reduce(
            state,
            StoreIntent::AddSuggestion {
                original_sku: format!("TEC00000{}", i),
                substitute_sku: format!("TEC00001{}", i),
                justification: "x".to_string(),
            },
        );
        let id = state.suggestions[0].id;
        assert!(id > last_id, "id {} should exceed {}", id, last_id);
        last_id = id;
    }
}

// -- routing and purchase draft ---------------------------------------------

#[test]
fn view_switch_is_the_only_effect_of_set_active_view() {
    let before = loaded_state();
    let after = StoreReducer::reduce(
        before.clone(),
        StoreIntent::SetActiveView {
            view: View::Catalog,
        },
    );
    assert_eq!(after.active_view, View::Catalog);
    assert_eq!(after.inventory, before.inventory);
    assert_eq!(after.suggestions, before.suggestions);
}

#[test]
fn purchase_draft_is_overwritten_each_flow() {
    let mut state = StoreReducer::reduce(
        StoreState::default(),
        StoreIntent::StartPurchase {
            sku: "TEC000001".to_string(),
            description: "bomba".to_string(),
        },
    );
    state = StoreReducer::reduce(
        state,
        StoreIntent::StartPurchase {
            sku: "TEC000002".to_string(),
            description: "válvula".to_string(),
        },
    );

    let draft = state.purchase_request.unwrap();
    assert_eq!(draft.sku, "TEC000002");
    assert_eq!(draft.description, "válvula");
}
