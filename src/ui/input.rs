use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::store::View;
use crate::ui::app::{App, MatrixMode, SuggestionField};
use crate::ui::fetch::FetchSlot;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Until the startup inventory is in, only quit and retry work.
    if !matches!(app.inventory_load, FetchSlot::Ready(())) {
        if matches!(app.inventory_load, FetchSlot::Failed(_))
            && matches!(key.code, KeyCode::Char('r'))
        {
            app.refetch_active();
        }
        return;
    }

    // Overlays swallow everything else first.
    if app.matrix.sheet_open {
        match key.code {
            KeyCode::Esc => app.close_technical_sheet(),
            KeyCode::Up => app.matrix.sheet_scroll = app.matrix.sheet_scroll.saturating_sub(1),
            KeyCode::Down => app.matrix.sheet_scroll = app.matrix.sheet_scroll.saturating_add(1),
            _ => {}
        }
        return;
    }
    if app.matrix.notice.is_some() {
        match key.code {
            KeyCode::Char('s') => app.register_integration("SAP FIORI"),
            KeyCode::Char('c') => app.register_integration("COUPA"),
            KeyCode::Esc | KeyCode::Enter => app.close_notice(),
            _ => {}
        }
        return;
    }
    if app.inventory_view.decision_open {
        match key.code {
            KeyCode::Char('m') => app.decision_go_to_matrix(),
            KeyCode::Char('c') => app.decision_proceed_to_purchase(),
            KeyCode::Esc => app.close_decision(),
            _ => {}
        }
        return;
    }

    // Text-entry modes capture printable characters.
    if app.active_view() == View::Suggestions && app.suggestions.form_active {
        handle_suggestion_form_key(app, key);
        return;
    }
    if app.active_view() == View::Matrix
        && app.matrix.mode == MatrixMode::ManualSearch
        && app.matrix.results.ready().is_none()
    {
        handle_search_input_key(app, key);
        return;
    }
    if app.active_view() == View::Purchasing && handle_purchasing_key(app, key) {
        return;
    }

    // Global navigation.
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.next_view();
            return;
        }
        KeyCode::BackTab => {
            app.previous_view();
            return;
        }
        KeyCode::Char('r') => {
            app.refetch_active();
            return;
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            app.jump_view(index);
            return;
        }
        _ => {}
    }

    match app.active_view() {
        View::Inventory => match key.code {
            KeyCode::Up => app.move_inventory_selection(-1),
            KeyCode::Down => app.move_inventory_selection(1),
            KeyCode::Enter => app.open_decision(),
            _ => {}
        },
        View::Matrix => handle_matrix_key(app, key),
        View::Suggestions => match key.code {
            KeyCode::Up => app.move_suggestion_selection(-1),
            KeyCode::Down => app.move_suggestion_selection(1),
            KeyCode::Char('n') => app.start_suggestion_form(),
            KeyCode::Char('v') => {
                let pending = app
                    .store()
                    .suggestions
                    .get(app.suggestions.table_selection)
                    .map(|s| !s.status.is_terminal())
                    .unwrap_or(false);
                if pending {
                    app.set_active_view(View::Catalog);
                }
            }
            _ => {}
        },
        View::Catalog => match key.code {
            KeyCode::Up => app.move_catalog_selection(-1),
            KeyCode::Down => app.move_catalog_selection(1),
            KeyCode::Enter | KeyCode::Char('a') => app.approve_selected(),
            _ => {}
        },
        View::Dashboard | View::Alerts | View::Reports | View::Purchasing => {}
    }
}

fn handle_suggestion_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_suggestion_form(),
        KeyCode::Tab => app.advance_suggestion_field(),
        KeyCode::Enter => {
            if app.suggestions.field == SuggestionField::Justification {
                app.submit_suggestion();
            } else {
                app.advance_suggestion_field();
            }
        }
        KeyCode::Backspace => {
            app.active_suggestion_input().pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.active_suggestion_input().push(ch);
        }
        _ => {}
    }
}

fn handle_search_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.matrix.mode = MatrixMode::ExploreList;
            app.clear_results();
        }
        KeyCode::Enter => {
            let query = app.matrix.query.clone();
            app.search_substitutes(query, None);
        }
        KeyCode::Backspace => {
            app.matrix.query.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.matrix.query.push(ch);
        }
        _ => {}
    }
}

/// Returns true when the key was consumed by the purchasing form.
fn handle_purchasing_key(app: &mut App, key: KeyEvent) -> bool {
    if app.store().purchase_request.is_none() {
        return false;
    }
    if app.purchasing.confirmation.is_some() {
        if matches!(key.code, KeyCode::Esc) {
            app.purchasing.confirmation = None;
            return true;
        }
        return false;
    }
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if app.purchasing.quantity.len() < 6 {
                app.purchasing.quantity.push(ch);
            }
            true
        }
        KeyCode::Backspace => {
            app.purchasing.quantity.pop();
            true
        }
        KeyCode::Enter => {
            app.submit_purchase();
            true
        }
        _ => false,
    }
}

fn handle_matrix_key(app: &mut App, key: KeyEvent) {
    if app.matrix.results.ready().is_some() {
        match key.code {
            KeyCode::Up => app.move_matrix_result_selection(-1),
            KeyCode::Down => app.move_matrix_result_selection(1),
            KeyCode::Esc => app.clear_results(),
            KeyCode::Char('b') => {
                app.clear_results();
                app.matrix.mode = MatrixMode::ManualSearch;
            }
            KeyCode::Char('u') => use_selected_substitute(app),
            KeyCode::Char('o') => use_original(app),
            KeyCode::Char('t') => {
                let description = app
                    .matrix
                    .results
                    .ready()
                    .map(|results| results.original.description.clone());
                if let Some(description) = description {
                    app.open_technical_sheet(description);
                }
            }
            _ => {}
        }
        return;
    }

    if app.matrix.results.is_loading() {
        // Esc abandons the search; the completion will arrive stale.
        if matches!(key.code, KeyCode::Esc) {
            app.clear_results();
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.move_matrix_list_selection(-1),
        KeyCode::Down => app.move_matrix_list_selection(1),
        KeyCode::Enter => app.search_selected_material(),
        KeyCode::Char('t') => {
            let description = app
                .store()
                .inventory
                .get(app.matrix.list_selection)
                .map(|m| m.description.clone());
            if let Some(description) = description {
                app.open_technical_sheet(description);
            }
        }
        KeyCode::Char('b') => app.matrix.mode = MatrixMode::ManualSearch,
        _ => {}
    }
}

fn use_selected_substitute(app: &mut App) {
    let selection = app.matrix.result_selection;
    let Some((sku, description, stock)) = app.matrix.results.ready().and_then(|results| {
        results.substitutes.get(selection).map(|s| {
            (
                s.material.sku.clone(),
                s.material.description.clone(),
                s.material.stock,
            )
        })
    }) else {
        return;
    };
    app.use_material(sku, description, stock, true);
}

fn use_original(app: &mut App) {
    // The fetched figure is only a fallback; a pinned original lives in the
    // shared inventory and reads through the store.
    let Some((sku, description, stock)) = app.matrix.results.ready().map(|results| {
        (
            results.original.sku.clone(),
            results.original.description.clone(),
            results.original.stock,
        )
    }) else {
        return;
    };
    app.use_material(sku, description, stock, false);
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
