use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::model::ComplianceStatus;
use crate::store::StoreState;
use crate::ui::app::CatalogState;
use crate::ui::theme::{ALERT_RED, TEC_GRAY, TEC_GREEN, WARN_YELLOW};
use crate::ui::views::bordered;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &CatalogState, store: &StoreState) {
    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);

    let header = Row::new(["SKU", "Descripción", "Cumplimiento", "Riesgo"]).style(
        Style::default()
            .fg(TEC_GRAY)
            .add_modifier(Modifier::BOLD),
    );

    let rows = store.inventory.iter().map(|material| {
        Row::new([
            material.sku.clone(),
            material.description.clone(),
            material.compliance_status.label().to_string(),
            material.risk_level.label().to_string(),
        ])
        .style(Style::default().fg(compliance_color(material.compliance_status)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(28),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ")
    .block(bordered("Catálogo de Materiales (Simulación Sphera)"));

    let mut table_state = TableState::default();
    if !store.inventory.is_empty() {
        table_state.select(Some(state.selection.min(store.inventory.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let hint = Line::from(vec![
        Span::styled(" Enter/a", Style::default().fg(WARN_YELLOW)),
        Span::styled(
            ": Aprobar material — valida también sus sugerencias pendientes",
            Style::default().fg(TEC_GRAY),
        ),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[1]);
}

fn compliance_color(status: ComplianceStatus) -> ratatui::style::Color {
    match status {
        ComplianceStatus::Validado => TEC_GREEN,
        ComplianceStatus::EnRevision => WARN_YELLOW,
        ComplianceStatus::NoConforme => ALERT_RED,
    }
}
