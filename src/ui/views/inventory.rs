use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::model::Material;
use crate::store::StoreState;
use crate::ui::app::{App, InventoryViewState};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ALERT_RED, HEADER_TEXT, POPUP_BORDER, TEC_GRAY, WARN_YELLOW};
use crate::ui::views::bordered;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &InventoryViewState, store: &StoreState) {
    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);

    let header = Row::new(["SKU", "Descripción", "Stock", "Ubicación", "Acción"]).style(
        Style::default()
            .fg(TEC_GRAY)
            .add_modifier(Modifier::BOLD),
    );

    let rows = store.inventory.iter().map(|material| {
        Row::new([
            material.sku.clone(),
            material.description.clone(),
            material.stock.to_string(),
            material.location.clone(),
            action_label(material).to_string(),
        ])
        .style(stock_style(material.stock))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(26),
            Constraint::Length(7),
            Constraint::Length(20),
            Constraint::Length(28),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ")
    .block(bordered("Inventario de Almacén (Simulación WMS)"));

    let mut table_state = TableState::default();
    if !store.inventory.is_empty() {
        table_state.select(Some(state.selection.min(store.inventory.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let legend = Line::from(vec![
        Span::styled(" ■ Sin Stock", Style::default().fg(ALERT_RED)),
        Span::styled("   ■ Stock Bajo", Style::default().fg(WARN_YELLOW)),
        Span::styled("   ■ Stock Saludable", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(legend), chunks[1]);
}

fn stock_style(stock: u32) -> Style {
    match stock {
        0 => Style::default().fg(ALERT_RED),
        1..=10 => Style::default().fg(WARN_YELLOW),
        _ => Style::default().fg(HEADER_TEXT),
    }
}

fn action_label(material: &Material) -> &'static str {
    match material.stock {
        0 => "Crear Solicitud de Compra ⚠",
        1..=10 => "Crear Solicitud de Compra !",
        _ => "Crear Solicitud de Compra",
    }
}

pub fn draw_decision_modal(frame: &mut Frame<'_>, app: &App) {
    let Some(material) = app.selected_inventory_material() else {
        return;
    };
    let area = centered_rect(60, 45, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "¡Atención!",
            Style::default()
                .fg(WARN_YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Está a punto de crear una solicitud de compra para el material {}.",
            material.sku
        )),
        Line::from(""),
        Line::from(
            "Antes de continuar, le recomendamos verificar si existen materiales \
             sustitutos disponibles en el inventario. Esto puede optimizar costos \
             y agilizar el abastecimiento.",
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("m", Style::default().fg(WARN_YELLOW)),
            Span::raw(": Ir a Matriz de Sustitutos   "),
            Span::styled("c", Style::default().fg(WARN_YELLOW)),
            Span::raw(": Continuar a Solicitud de Compra   "),
            Span::styled("Esc", Style::default().fg(WARN_YELLOW)),
            Span::raw(": Cancelar"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(bordered("Solicitud de Compra").border_style(Style::default().fg(POPUP_BORDER)));
    frame.render_widget(paragraph, area);
}
