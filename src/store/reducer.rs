use crate::model::{ComplianceStatus, PurchaseRequest, Suggestion, SuggestionStatus};
use crate::store::intent::StoreIntent;
use crate::store::state::{StoreState, CURRENT_USER};
use crate::store::Reducer;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::InventoryLoaded { materials } => {
                state.inventory = materials;
                state
            }
            StoreIntent::SetActiveView { view } => {
                state.active_view = view;
                state
            }
            StoreIntent::DecrementStock { sku, quantity } => {
                if let Some(item) = state.inventory.iter_mut().find(|m| m.sku == sku) {
                    item.stock = item.stock.saturating_sub(quantity);
                }
                state
            }
            StoreIntent::StartPurchase { sku, description } => {
                state.purchase_request = Some(PurchaseRequest { sku, description });
                state
            }
            StoreIntent::AddSuggestion {
                original_sku,
                substitute_sku,
                justification,
            } => {
                let id = state.next_suggestion_id;
                state.next_suggestion_id += 1;
                state.suggestions.insert(
                    0,
                    Suggestion {
                        id,
                        original_sku,
                        substitute_sku,
                        justification,
                        status: SuggestionStatus::Pendiente,
                        submitted_by: CURRENT_USER.to_string(),
                    },
                );
                state
            }
            StoreIntent::ApproveMaterial { sku } => {
                if let Some(item) = state.inventory.iter_mut().find(|m| m.sku == sku) {
                    item.compliance_status = ComplianceStatus::Validado;
                }
                for suggestion in &mut state.suggestions {
                    let references_sku =
                        suggestion.original_sku == sku || suggestion.substitute_sku == sku;
                    if references_sku && suggestion.status == SuggestionStatus::Pendiente {
                        suggestion.status = SuggestionStatus::Aprobado;
                    }
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Material, RiskLevel};

    fn material(sku: &str, stock: u32) -> Material {
        Material {
            sku: sku.to_string(),
            description: format!("material {}", sku),
            stock,
            location: "Almacén Central".to_string(),
            compliance_status: ComplianceStatus::EnRevision,
            risk_level: RiskLevel::Medio,
        }
    }

    // -- suggestion id assignment ------------------------------------------

    #[test]
    fn suggestion_ids_come_from_the_counter_not_the_list_length() {
        // A state whose list length diverges from the counter: the old
        // `len + 1` scheme would hand out id 2 here and collide with 7.
        let state = StoreState {
            suggestions: vec![Suggestion {
                id: 7,
                original_sku: "TEC000001".to_string(),
                substitute_sku: "TEC000002".to_string(),
                justification: "x".to_string(),
                status: SuggestionStatus::Pendiente,
                submitted_by: "A".to_string(),
            }],
            next_suggestion_id: 8,
            ..StoreState::default()
        };

        let state = StoreReducer::reduce(
            state,
            StoreIntent::AddSuggestion {
                original_sku: "TEC000003".to_string(),
                substitute_sku: "TEC000004".to_string(),
                justification: "y".to_string(),
            },
        );

        assert_eq!(state.suggestions[0].id, 8);
        assert_eq!(state.next_suggestion_id, 9);
    }

    #[test]
    fn new_suggestions_are_prepended_as_pending() {
        let state = StoreReducer::reduce(
            StoreState::default(),
            StoreIntent::AddSuggestion {
                original_sku: "TEC000002".to_string(),
                substitute_sku: "TEC000005".to_string(),
                justification: "equivalente".to_string(),
            },
        );
        let newest = &state.suggestions[0];
        assert_eq!(newest.status, SuggestionStatus::Pendiente);
        assert_eq!(newest.submitted_by, CURRENT_USER);
    }

    // -- stock --------------------------------------------------------------

    #[test]
    fn decrement_clamps_at_zero() {
        let mut state = StoreState::default();
        state.inventory = vec![material("TEC000001", 3)];
        let state = StoreReducer::reduce(
            state,
            StoreIntent::DecrementStock {
                sku: "TEC000001".to_string(),
                quantity: 5,
            },
        );
        assert_eq!(state.inventory[0].stock, 0);
    }

    #[test]
    fn decrement_unknown_sku_is_noop() {
        let mut state = StoreState::default();
        state.inventory = vec![material("TEC000001", 3)];
        let before = state.clone();
        let state = StoreReducer::reduce(
            state,
            StoreIntent::DecrementStock {
                sku: "TEC999999".to_string(),
                quantity: 1,
            },
        );
        assert_eq!(state, before);
    }
}
