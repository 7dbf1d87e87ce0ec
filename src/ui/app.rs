use tracing::{debug, warn};

use crate::model::{Alert, ConsolidationSuggestion, DashboardData, Material, SubstitutionResult};
use crate::store::{Reducer, StoreIntent, StoreReducer, StoreState, View};
use crate::ui::events::{AppEvent, FetchKind, FetchPayload};
use crate::ui::fetch::{FetchSlot, Fetcher};

/// Localized user-facing messages, mirroring the simulated systems'
/// terminology (WMS, COUPA, Sphera).
pub mod messages {
    pub const LOADING_INVENTORY: &str = "Cargando simulación de inventario...";
    pub const INVENTORY_ERROR: &str =
        "Error fatal al cargar el inventario inicial. La simulación no puede continuar.";
    pub const DASHBOARD_ERROR: &str =
        "Error al cargar los datos del panel. Por favor, intente de nuevo más tarde.";
    pub const ALERTS_ERROR: &str = "Error al cargar las alertas.";
    pub const REPORT_ERROR: &str = "Error al generar el reporte de consolidación.";
    pub const SUBSTITUTES_ERROR: &str =
        "Error al buscar sustitutos. El modelo de IA puede estar desconectado. Por favor, intente de nuevo.";
    pub const SHEET_ERROR: &str =
        "Error al obtener las especificaciones técnicas. Por favor, intente de nuevo.";
    pub const EMPTY_QUERY: &str = "Por favor, ingrese o seleccione un material.";
    pub const FORM_INCOMPLETE: &str = "Por favor, complete todos los campos.";
    pub const SUGGESTION_SENT: &str =
        "¡Sugerencia enviada! Ahora debe ser validada en el Catálogo (Sphera).";
    pub const ANALYZING: &str = "La IA está analizando los materiales...";
    pub const CONSULTING: &str = "Consultando a la IA...";
}

/// Generic store dispatch: takes current state, runs the reducer, stores
/// the result.
macro_rules! dispatch_store {
    ($self:expr, $intent:expr) => {
        $self.store = StoreReducer::reduce(std::mem::take(&mut $self.store), $intent);
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixMode {
    /// Pick a material from the shared inventory.
    #[default]
    ExploreList,
    /// Free-text description search.
    ManualSearch,
}

/// Simulated downstream registration shown after consuming a material.
#[derive(Debug)]
pub struct IntegrationNotice {
    pub sku: String,
    pub description: String,
    /// A substitute was used, not the original.
    pub substitute: bool,
    /// Set once the user picked a target system.
    pub registered: Option<String>,
}

#[derive(Debug, Default)]
pub struct MatrixState {
    pub mode: MatrixMode,
    pub query: String,
    pub list_selection: usize,
    /// SKU of the inventory entry the search was started from, if any.
    /// When set, the original card renders from the shared inventory
    /// instead of the fetched figure.
    pub pinned_original: Option<String>,
    pub last_query: String,
    pub results: FetchSlot<SubstitutionResult>,
    pub result_selection: usize,
    pub sheet_open: bool,
    pub sheet_scroll: u16,
    pub sheet: FetchSlot<String>,
    pub notice: Option<IntegrationNotice>,
}

#[derive(Debug, Default)]
pub struct InventoryViewState {
    pub selection: usize,
    pub decision_open: bool,
}

#[derive(Debug)]
pub struct PurchasingState {
    pub quantity: String,
    pub confirmation: Option<String>,
}

impl Default for PurchasingState {
    fn default() -> Self {
        Self {
            quantity: "100".to_string(),
            confirmation: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionField {
    #[default]
    Original,
    Substitute,
    Justification,
}

#[derive(Debug, Default)]
pub struct SuggestionsState {
    pub form_active: bool,
    pub field: SuggestionField,
    pub original_input: String,
    pub substitute_input: String,
    pub justification_input: String,
    pub feedback: Option<String>,
    pub table_selection: usize,
}

#[derive(Debug, Default)]
pub struct CatalogState {
    pub selection: usize,
}

pub struct App {
    should_quit: bool,
    tick: u64,
    store: StoreState,
    fetcher: Fetcher,
    next_generation: u64,
    pub inventory_load: FetchSlot<()>,
    pub dashboard: FetchSlot<DashboardData>,
    pub alerts: FetchSlot<Vec<Alert>>,
    pub report: FetchSlot<Vec<ConsolidationSuggestion>>,
    pub matrix: MatrixState,
    pub inventory_view: InventoryViewState,
    pub purchasing: PurchasingState,
    pub suggestions: SuggestionsState,
    pub catalog: CatalogState,
}

impl App {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            store: StoreState::default(),
            fetcher,
            next_generation: 0,
            inventory_load: FetchSlot::Idle,
            dashboard: FetchSlot::Idle,
            alerts: FetchSlot::Idle,
            report: FetchSlot::Idle,
            matrix: MatrixState::default(),
            inventory_view: InventoryViewState::default(),
            purchasing: PurchasingState::default(),
            suggestions: SuggestionsState::default(),
            catalog: CatalogState::default(),
        }
    }

    /// Kick off the startup inventory generation. Every screen waits on
    /// this before rendering content.
    pub fn bootstrap(&mut self) {
        let generation = self.allocate_generation();
        self.inventory_load = FetchSlot::Loading { generation };
        self.fetcher.spawn_inventory(generation);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Tick counter for loading animations.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    pub fn active_view(&self) -> View {
        self.store.active_view
    }

    pub fn dispatch(&mut self, intent: StoreIntent) {
        dispatch_store!(self, intent);
    }

    fn allocate_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    // ========================================================================
    // View routing
    // ========================================================================

    pub fn set_active_view(&mut self, view: View) {
        dispatch_store!(self, StoreIntent::SetActiveView { view });
        self.ensure_fetched(view);
    }

    pub fn next_view(&mut self) {
        self.set_active_view(self.store.active_view.next());
    }

    pub fn previous_view(&mut self) {
        self.set_active_view(self.store.active_view.previous());
    }

    pub fn jump_view(&mut self, index: usize) {
        if let Some(view) = View::ALL.get(index.wrapping_sub(1)) {
            self.set_active_view(*view);
        }
    }

    /// Screens fetch on first display only; revisiting keeps prior data.
    fn ensure_fetched(&mut self, view: View) {
        match view {
            View::Dashboard if self.dashboard.is_idle() => {
                let generation = self.allocate_generation();
                self.dashboard = FetchSlot::Loading { generation };
                self.fetcher.spawn_dashboard(generation);
            }
            View::Alerts if self.alerts.is_idle() => {
                let generation = self.allocate_generation();
                self.alerts = FetchSlot::Loading { generation };
                self.fetcher.spawn_alerts(generation);
            }
            View::Reports if self.report.is_idle() => {
                let generation = self.allocate_generation();
                self.report = FetchSlot::Loading { generation };
                self.fetcher.spawn_report(generation);
            }
            _ => {}
        }
    }

    /// Manual retry: reset the active screen's slot and fetch again. Any
    /// in-flight completion becomes stale and is discarded on arrival.
    pub fn refetch_active(&mut self) {
        match self.store.active_view {
            View::Dashboard => {
                self.dashboard = FetchSlot::Idle;
                self.ensure_fetched(View::Dashboard);
            }
            View::Alerts => {
                self.alerts = FetchSlot::Idle;
                self.ensure_fetched(View::Alerts);
            }
            View::Reports => {
                self.report = FetchSlot::Idle;
                self.ensure_fetched(View::Reports);
            }
            _ => {}
        }
        if matches!(self.inventory_load, FetchSlot::Failed(_)) {
            self.bootstrap();
        }
    }

    // ========================================================================
    // Fetch completions
    // ========================================================================

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Fetch {
                kind,
                generation,
                result,
            } => self.on_fetch(kind, generation, result),
            // The terminal is re-measured on the next draw.
            AppEvent::Resize(_, _) => {}
            // Handled by the runtime loop.
            AppEvent::Key(_) | AppEvent::Tick => {}
        }
    }

    fn on_fetch(
        &mut self,
        kind: FetchKind,
        generation: u64,
        result: Result<FetchPayload, crate::provider::ProviderError>,
    ) {
        match kind {
            FetchKind::Inventory => {
                if !self.inventory_load.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::Inventory(materials)) => {
                        dispatch_store!(self, StoreIntent::InventoryLoaded { materials });
                        self.inventory_load = FetchSlot::Ready(());
                    }
                    Err(err) => {
                        warn!(error = %err, "initial inventory load failed");
                        self.inventory_load =
                            FetchSlot::Failed(messages::INVENTORY_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
            FetchKind::Dashboard => {
                if !self.dashboard.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::Dashboard(data)) => self.dashboard = FetchSlot::Ready(data),
                    Err(err) => {
                        warn!(error = %err, "dashboard fetch failed");
                        self.dashboard = FetchSlot::Failed(messages::DASHBOARD_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
            FetchKind::Alerts => {
                if !self.alerts.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::Alerts(alerts)) => self.alerts = FetchSlot::Ready(alerts),
                    Err(err) => {
                        warn!(error = %err, "alerts fetch failed");
                        self.alerts = FetchSlot::Failed(messages::ALERTS_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
            FetchKind::Report => {
                if !self.report.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::Report(rows)) => self.report = FetchSlot::Ready(rows),
                    Err(err) => {
                        warn!(error = %err, "consolidation report fetch failed");
                        self.report = FetchSlot::Failed(messages::REPORT_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
            FetchKind::Substitutes => {
                if !self.matrix.results.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::Substitutes(results)) => {
                        self.matrix.result_selection = 0;
                        self.matrix.results = FetchSlot::Ready(results);
                    }
                    Err(err) => {
                        warn!(error = %err, "substitute search failed");
                        self.matrix.results =
                            FetchSlot::Failed(messages::SUBSTITUTES_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
            FetchKind::TechnicalSheet => {
                if !self.matrix.sheet.accepts(generation) {
                    return Self::discard_stale(kind, generation);
                }
                match result {
                    Ok(FetchPayload::TechnicalSheet(sheet)) => {
                        self.matrix.sheet = FetchSlot::Ready(sheet)
                    }
                    Err(err) => {
                        warn!(error = %err, "technical sheet fetch failed");
                        self.matrix.sheet = FetchSlot::Failed(messages::SHEET_ERROR.to_string());
                    }
                    Ok(_) => {}
                }
            }
        }
    }

    fn discard_stale(kind: FetchKind, generation: u64) {
        debug!(?kind, generation, "discarding stale fetch completion");
    }

    // ========================================================================
    // Matrix (substitution search)
    // ========================================================================

    pub fn search_substitutes(&mut self, query: String, pinned_sku: Option<String>) {
        let query = query.trim().to_string();
        if query.is_empty() {
            self.matrix.results = FetchSlot::Failed(messages::EMPTY_QUERY.to_string());
            return;
        }
        let generation = self.allocate_generation();
        self.matrix.pinned_original = pinned_sku;
        self.matrix.last_query = query.clone();
        self.matrix.result_selection = 0;
        self.matrix.results = FetchSlot::Loading { generation };
        self.fetcher.spawn_substitutes(generation, query);
    }

    /// Start a search for the currently selected inventory entry, pinning
    /// it as the original.
    pub fn search_selected_material(&mut self) {
        let Some(material) = self.store.inventory.get(self.matrix.list_selection) else {
            return;
        };
        let description = material.description.clone();
        let sku = material.sku.clone();
        self.search_substitutes(description, Some(sku));
    }

    pub fn open_technical_sheet(&mut self, description: String) {
        let generation = self.allocate_generation();
        self.matrix.sheet_open = true;
        self.matrix.sheet_scroll = 0;
        self.matrix.sheet = FetchSlot::Loading { generation };
        self.fetcher.spawn_technical_sheet(generation, description);
    }

    /// Closing mid-fetch resets the slot, so the eventual completion no
    /// longer matches and is discarded.
    pub fn close_technical_sheet(&mut self) {
        self.matrix.sheet_open = false;
        self.matrix.sheet = FetchSlot::Idle;
    }

    /// Consume one unit. Stock is read through the store when the SKU is
    /// known there; the fetched figure is only a fallback for foreign SKUs.
    pub fn use_material(
        &mut self,
        sku: String,
        description: String,
        fallback_stock: u32,
        substitute: bool,
    ) {
        let stock = self.store.stock_of(&sku).unwrap_or(fallback_stock);
        if stock == 0 {
            return;
        }
        dispatch_store!(
            self,
            StoreIntent::DecrementStock {
                sku: sku.clone(),
                quantity: 1,
            }
        );
        self.matrix.notice = Some(IntegrationNotice {
            sku,
            description,
            substitute,
            registered: None,
        });
    }

    pub fn register_integration(&mut self, system: &str) {
        if let Some(notice) = &mut self.matrix.notice {
            notice.registered = Some(format!(
                "Acción para SKU {} registrada en {}.",
                notice.sku, system
            ));
        }
    }

    pub fn close_notice(&mut self) {
        self.matrix.notice = None;
    }

    /// Drop the current results and go back to the material list.
    pub fn clear_results(&mut self) {
        self.matrix.results = FetchSlot::Idle;
        self.matrix.pinned_original = None;
        self.matrix.result_selection = 0;
    }

    // ========================================================================
    // Inventory / purchasing
    // ========================================================================

    pub fn selected_inventory_material(&self) -> Option<&Material> {
        self.store.inventory.get(self.inventory_view.selection)
    }

    pub fn open_decision(&mut self) {
        if self.selected_inventory_material().is_some() {
            self.inventory_view.decision_open = true;
        }
    }

    pub fn close_decision(&mut self) {
        self.inventory_view.decision_open = false;
    }

    pub fn decision_go_to_matrix(&mut self) {
        self.inventory_view.decision_open = false;
        self.matrix.mode = MatrixMode::ExploreList;
        self.matrix.list_selection = self.inventory_view.selection;
        self.set_active_view(View::Matrix);
    }

    pub fn decision_proceed_to_purchase(&mut self) {
        let Some(material) = self.selected_inventory_material().cloned() else {
            return;
        };
        self.inventory_view.decision_open = false;
        self.purchasing = PurchasingState::default();
        dispatch_store!(
            self,
            StoreIntent::StartPurchase {
                sku: material.sku,
                description: material.description,
            }
        );
        self.set_active_view(View::Purchasing);
    }

    pub fn submit_purchase(&mut self) {
        let Some(request) = self.store.purchase_request.clone() else {
            return;
        };
        let quantity: u32 = self.purchasing.quantity.parse().unwrap_or(0);
        if quantity == 0 {
            return;
        }
        self.purchasing.confirmation = Some(format!(
            "Solicitud de compra para {} unidades de {} enviada a COUPA exitosamente.",
            quantity, request.sku
        ));
    }

    // ========================================================================
    // Suggestions
    // ========================================================================

    pub fn start_suggestion_form(&mut self) {
        self.suggestions.form_active = true;
        self.suggestions.field = SuggestionField::Original;
        self.suggestions.feedback = None;
    }

    pub fn cancel_suggestion_form(&mut self) {
        self.suggestions.form_active = false;
    }

    pub fn advance_suggestion_field(&mut self) {
        self.suggestions.field = match self.suggestions.field {
            SuggestionField::Original => SuggestionField::Substitute,
            SuggestionField::Substitute => SuggestionField::Justification,
            SuggestionField::Justification => SuggestionField::Original,
        };
    }

    pub fn active_suggestion_input(&mut self) -> &mut String {
        match self.suggestions.field {
            SuggestionField::Original => &mut self.suggestions.original_input,
            SuggestionField::Substitute => &mut self.suggestions.substitute_input,
            SuggestionField::Justification => &mut self.suggestions.justification_input,
        }
    }

    pub fn submit_suggestion(&mut self) {
        let original = self.suggestions.original_input.trim().to_string();
        let substitute = self.suggestions.substitute_input.trim().to_string();
        let justification = self.suggestions.justification_input.trim().to_string();

        if original.is_empty() || substitute.is_empty() || justification.is_empty() {
            self.suggestions.feedback = Some(messages::FORM_INCOMPLETE.to_string());
            return;
        }

        dispatch_store!(
            self,
            StoreIntent::AddSuggestion {
                original_sku: original,
                substitute_sku: substitute,
                justification,
            }
        );

        self.suggestions.original_input.clear();
        self.suggestions.substitute_input.clear();
        self.suggestions.justification_input.clear();
        self.suggestions.form_active = false;
        self.suggestions.table_selection = 0;
        self.suggestions.feedback = Some(messages::SUGGESTION_SENT.to_string());
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn approve_selected(&mut self) {
        let Some(material) = self.store.inventory.get(self.catalog.selection) else {
            return;
        };
        let sku = material.sku.clone();
        dispatch_store!(self, StoreIntent::ApproveMaterial { sku });
    }

    // ========================================================================
    // Selection movement
    // ========================================================================

    pub fn move_inventory_selection(&mut self, delta: i32) {
        let len = self.store.inventory.len();
        self.inventory_view.selection = step(self.inventory_view.selection, len, delta);
    }

    pub fn move_catalog_selection(&mut self, delta: i32) {
        let len = self.store.inventory.len();
        self.catalog.selection = step(self.catalog.selection, len, delta);
    }

    pub fn move_matrix_list_selection(&mut self, delta: i32) {
        let len = self.store.inventory.len();
        self.matrix.list_selection = step(self.matrix.list_selection, len, delta);
    }

    pub fn move_matrix_result_selection(&mut self, delta: i32) {
        let len = self
            .matrix
            .results
            .ready()
            .map(|r| r.substitutes.len())
            .unwrap_or(0);
        self.matrix.result_selection = step(self.matrix.result_selection, len, delta);
    }

    pub fn move_suggestion_selection(&mut self, delta: i32) {
        let len = self.store.suggestions.len();
        self.suggestions.table_selection = step(self.suggestions.table_selection, len, delta);
    }
}

/// Wrap-around selection step over a list of `len` entries.
fn step(current: usize, len: usize, delta: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if delta.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AiConfig, Config};
    use crate::model::{ComplianceStatus, RiskLevel};
    use crate::provider::{GenerativeClient, ProviderError};
    use std::sync::mpsc;
    use std::sync::Arc;

    fn make_app(runtime: &tokio::runtime::Runtime) -> App {
        // Unroutable base URL: any fetch a test accidentally spawns dies
        // locally instead of reaching a real service.
        let config = Config {
            ai: AiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                api_key: Some("test-key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let client = GenerativeClient::from_config(&config).expect("client");
        let (tx, _rx) = mpsc::channel();
        App::new(Fetcher::new(Arc::new(client), runtime.handle().clone(), tx))
    }

    fn material(sku: &str, stock: u32) -> Material {
        Material {
            sku: sku.to_string(),
            description: format!("material {}", sku),
            stock,
            location: "Almacén Central".to_string(),
            compliance_status: ComplianceStatus::Validado,
            risk_level: RiskLevel::Bajo,
        }
    }

    // -- stale completions --------------------------------------------------

    #[test]
    fn stale_fetch_is_discarded() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.dashboard = FetchSlot::Loading { generation: 5 };

        app.on_event(AppEvent::Fetch {
            kind: FetchKind::Dashboard,
            generation: 4,
            result: Err(ProviderError::EmptyReply),
        });

        assert!(app.dashboard.is_loading());
    }

    #[test]
    fn closed_sheet_discards_late_completion() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.open_technical_sheet("bomba".to_string());
        let generation = match app.matrix.sheet {
            FetchSlot::Loading { generation } => generation,
            _ => panic!("sheet should be loading"),
        };

        app.close_technical_sheet();
        app.on_event(AppEvent::Fetch {
            kind: FetchKind::TechnicalSheet,
            generation,
            result: Ok(FetchPayload::TechnicalSheet("ficha".to_string())),
        });

        assert!(app.matrix.sheet.is_idle());
        assert!(!app.matrix.sheet_open);
    }

    // -- inventory load -----------------------------------------------------

    #[test]
    fn inventory_completion_lands_in_the_store() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.bootstrap();
        let generation = match app.inventory_load {
            FetchSlot::Loading { generation } => generation,
            _ => panic!("inventory should be loading"),
        };

        app.on_event(AppEvent::Fetch {
            kind: FetchKind::Inventory,
            generation,
            result: Ok(FetchPayload::Inventory(vec![material("TEC000001", 3)])),
        });

        assert!(app.inventory_load.ready().is_some());
        assert_eq!(app.store().inventory.len(), 1);
    }

    // -- use material -------------------------------------------------------

    #[test]
    fn use_material_reads_stock_through_the_store() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.dispatch(StoreIntent::InventoryLoaded {
            materials: vec![material("TEC000001", 1)],
        });

        // Fetched figure claims plenty of stock, but the store says 1.
        app.use_material("TEC000001".to_string(), "m".to_string(), 99, false);
        assert_eq!(app.store().stock_of("TEC000001"), Some(0));
        assert!(app.matrix.notice.is_some());

        // Now the store says zero; the fetched fallback must not revive it.
        app.close_notice();
        app.use_material("TEC000001".to_string(), "m".to_string(), 99, false);
        assert!(app.matrix.notice.is_none());
    }

    #[test]
    fn use_material_at_zero_stock_is_rejected() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.use_material("TEC000009".to_string(), "m".to_string(), 0, true);
        assert!(app.matrix.notice.is_none());
    }

    // -- suggestion form ----------------------------------------------------

    #[test]
    fn incomplete_suggestion_form_is_rejected() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.start_suggestion_form();
        app.suggestions.original_input = "TEC000001".to_string();
        app.submit_suggestion();

        assert_eq!(
            app.suggestions.feedback.as_deref(),
            Some(messages::FORM_INCOMPLETE)
        );
        assert_eq!(app.store().suggestions.len(), 3);
        assert!(app.suggestions.form_active);
    }

    #[test]
    fn complete_suggestion_form_submits_and_resets() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&runtime);
        app.start_suggestion_form();
        app.suggestions.original_input = "TEC000001".to_string();
        app.suggestions.substitute_input = "TEC000002".to_string();
        app.suggestions.justification_input = "equivalente técnico".to_string();
        app.submit_suggestion();

        assert_eq!(app.store().suggestions.len(), 4);
        assert_eq!(app.store().suggestions[0].id, 4);
        assert!(!app.suggestions.form_active);
        assert!(app.suggestions.original_input.is_empty());
    }

    // -- selection ----------------------------------------------------------

    #[test]
    fn selection_wraps_and_tolerates_empty_lists() {
        assert_eq!(step(0, 0, 1), 0);
        assert_eq!(step(0, 3, 1), 1);
        assert_eq!(step(2, 3, 1), 0);
        assert_eq!(step(0, 3, -1), 2);
    }
}
