use crate::model::{Material, PurchaseRequest, Suggestion, SuggestionStatus};

/// Submitter recorded on user-created suggestions.
pub const CURRENT_USER: &str = "Usuario Actual";

/// The single screen currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Inventory,
    Matrix,
    Purchasing,
    Suggestions,
    Catalog,
    Alerts,
    Reports,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Dashboard,
        View::Inventory,
        View::Matrix,
        View::Purchasing,
        View::Suggestions,
        View::Catalog,
        View::Alerts,
        View::Reports,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Panel",
            View::Inventory => "Inventario",
            View::Matrix => "Matriz de Sustitutos",
            View::Purchasing => "Compras",
            View::Suggestions => "Sugerencias",
            View::Catalog => "Catálogo",
            View::Alerts => "Alertas",
            View::Reports => "Reportes",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|v| v == self)
            .unwrap_or_default()
    }

    /// Next screen in tab order, wrapping around.
    pub fn next(&self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order, wrapping around.
    pub fn previous(&self) -> View {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Everything shared across screens. Owned by the UI loop; mutated only by
/// the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub inventory: Vec<Material>,
    pub suggestions: Vec<Suggestion>,
    pub active_view: View,
    pub purchase_request: Option<PurchaseRequest>,
    /// Monotonic id source for suggestions. Never reused, even if entries
    /// were ever removed.
    pub(crate) next_suggestion_id: u64,
}

impl StoreState {
    pub fn material(&self, sku: &str) -> Option<&Material> {
        self.inventory.iter().find(|m| m.sku == sku)
    }

    /// Read-through stock lookup for SKUs obtained outside the inventory
    /// list (e.g. substitution results). The store is the single source of
    /// truth; callers fall back to their own figure only for unknown SKUs.
    pub fn stock_of(&self, sku: &str) -> Option<u32> {
        self.material(sku).map(|m| m.stock)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        let seed = |id: u64,
                    original_sku: &str,
                    substitute_sku: &str,
                    justification: &str,
                    status: SuggestionStatus,
                    submitted_by: &str| Suggestion {
            id,
            original_sku: original_sku.to_string(),
            substitute_sku: substitute_sku.to_string(),
            justification: justification.to_string(),
            status,
            submitted_by: submitted_by.to_string(),
        };

        let suggestions = vec![
            seed(
                1,
                "TEC000015",
                "TEC000001",
                "Misma función, pero el TEC000001 está sobreestocado.",
                SuggestionStatus::Aprobado,
                "A. Rodriguez",
            ),
            seed(
                2,
                "TEC000011",
                "TEC000018",
                "Versión genérica no superó las pruebas de estrés.",
                SuggestionStatus::Rechazado,
                "J. Pesoa",
            ),
            seed(
                3,
                "TEC000004",
                "TEC000009",
                "Material con mejor rendimiento en pruebas de campo.",
                SuggestionStatus::Pendiente,
                "C. Jordan",
            ),
        ];

        Self {
            inventory: Vec::new(),
            next_suggestion_id: suggestions.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            suggestions,
            active_view: View::default(),
            purchase_request: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps_both_ways() {
        assert_eq!(View::Reports.next(), View::Dashboard);
        assert_eq!(View::Dashboard.previous(), View::Reports);
        assert_eq!(View::Dashboard.next(), View::Inventory);
    }

    #[test]
    fn default_state_seeds_one_suggestion_per_status() {
        let state = StoreState::default();
        assert_eq!(state.suggestions.len(), 3);
        assert_eq!(state.next_suggestion_id, 4);
        for status in [
            SuggestionStatus::Aprobado,
            SuggestionStatus::Rechazado,
            SuggestionStatus::Pendiente,
        ] {
            assert!(state.suggestions.iter().any(|s| s.status == status));
        }
    }

    #[test]
    fn stock_lookup_misses_unknown_sku() {
        let state = StoreState::default();
        assert_eq!(state.stock_of("TEC999999"), None);
    }
}
