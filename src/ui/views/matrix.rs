use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Material;
use crate::store::StoreState;
use crate::ui::app::{messages, IntegrationNotice, MatrixMode, MatrixState};
use crate::ui::fetch::FetchSlot;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ALERT_RED, HEADER_TEXT, POPUP_BORDER, TEC_BLUE, TEC_GRAY, TEC_GREEN, WARN_YELLOW,
};
use crate::ui::views::{bordered, error_paragraph, loading_paragraph, spinner_frame};

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &MatrixState,
    store: &StoreState,
    tick: u64,
) {
    let chunks = Layout::vertical([Constraint::Length(10), Constraint::Min(6)]).split(area);
    draw_selector(frame, chunks[0], state, store);
    draw_results(frame, chunks[1], state, store, tick);
}

fn draw_selector(frame: &mut Frame<'_>, area: Rect, state: &MatrixState, store: &StoreState) {
    let block = bordered("Buscar Sustitutos de Materiales");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);

    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(TEC_BLUE)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(TEC_GRAY))
        }
    };
    let mode_line = Line::from(vec![
        tab(" Explorar Lista ", state.mode == MatrixMode::ExploreList),
        Span::raw("  "),
        tab(" Búsqueda Manual (b) ", state.mode == MatrixMode::ManualSearch),
    ]);
    frame.render_widget(Paragraph::new(mode_line), chunks[0]);

    match state.mode {
        MatrixMode::ExploreList => draw_material_list(frame, chunks[1], state, store),
        MatrixMode::ManualSearch => {
            let input = Line::from(vec![
                Span::styled("Material: ", Style::default().fg(TEC_GRAY)),
                Span::styled(state.query.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled("█", Style::default().fg(TEC_BLUE)),
            ]);
            let hint = Line::from(Span::styled(
                "Ingrese descripción o SKU del material (ej: 'tornillo de acero...') — Enter: Buscar, Esc: Volver",
                Style::default().fg(TEC_GRAY),
            ));
            frame.render_widget(Paragraph::new(vec![input, Line::from(""), hint]), chunks[1]);
        }
    }
}

fn draw_material_list(frame: &mut Frame<'_>, area: Rect, state: &MatrixState, store: &StoreState) {
    let items: Vec<ListItem> = store
        .inventory
        .iter()
        .map(|material| {
            ListItem::new(Line::from(vec![
                Span::styled(material.sku.clone(), Style::default().fg(TEC_GRAY)),
                Span::raw(" · "),
                Span::styled(material.description.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  (stock {})", material.stock),
                    stock_style(material.stock),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");

    let mut list_state = ListState::default();
    if !store.inventory.is_empty() {
        list_state.select(Some(state.list_selection.min(store.inventory.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_results(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &MatrixState,
    store: &StoreState,
    tick: u64,
) {
    match &state.results {
        FetchSlot::Idle => {
            let hint = Paragraph::new(
                "\nSeleccione un material del inventario para analizar, o use la búsqueda manual.",
            )
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEC_GRAY));
            frame.render_widget(hint, area);
        }
        FetchSlot::Loading { .. } => {
            let lines = vec![
                Line::from(""),
                Line::from(format!("{} {}", spinner_frame(tick), messages::ANALYZING)),
                Line::from(Span::styled(
                    format!("Buscando sustitutos para \"{}\"", state.last_query),
                    Style::default().fg(TEC_GRAY),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                area,
            );
        }
        FetchSlot::Failed(message) => frame.render_widget(error_paragraph(message), area),
        FetchSlot::Ready(results) => {
            let halves =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
            draw_original_card(frame, halves[0], state, store, &results.original);
            draw_substitutes(frame, halves[1], state, store);
        }
    }
}

fn draw_original_card(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &MatrixState,
    store: &StoreState,
    fetched: &Material,
) {
    // The shared inventory is the source of truth for stock; the fetched
    // figure only stands in for SKUs the inventory does not know.
    let pinned = state
        .pinned_original
        .as_deref()
        .and_then(|sku| store.material(sku));
    let material = pinned.unwrap_or(fetched);
    let stock = store.stock_of(&material.sku).unwrap_or(material.stock);

    let lines = vec![
        Line::from(vec![
            Span::styled("SKU: ", Style::default().fg(TEC_GRAY)),
            Span::styled(material.sku.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Descripción: ", Style::default().fg(TEC_GRAY)),
            Span::styled(material.description.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Stock: ", Style::default().fg(TEC_GRAY)),
            Span::styled(format!("{} unidades", stock), stock_style(stock)),
        ]),
        Line::from(vec![
            Span::styled("Ubicación: ", Style::default().fg(TEC_GRAY)),
            Span::styled(material.location.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Cumplimiento: ", Style::default().fg(TEC_GRAY)),
            Span::raw(material.compliance_status.label()),
        ]),
        Line::from(vec![
            Span::styled("Riesgo: ", Style::default().fg(TEC_GRAY)),
            Span::raw(material.risk_level.label()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("o", Style::default().fg(WARN_YELLOW)),
            Span::raw(": Usar Material Original   "),
            Span::styled("t", Style::default().fg(WARN_YELLOW)),
            Span::raw(": Ficha Técnica"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(bordered("Material Original")),
        area,
    );
}

fn draw_substitutes(frame: &mut Frame<'_>, area: Rect, state: &MatrixState, store: &StoreState) {
    let Some(results) = state.results.ready() else {
        return;
    };

    if results.substitutes.is_empty() {
        frame.render_widget(
            Paragraph::new("\nNo se encontraron sustitutos para este material.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEC_GRAY))
                .block(bordered("Sustitutos Compatibles (0)")),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = results
        .substitutes
        .iter()
        .map(|substitute| {
            let stock = store
                .stock_of(&substitute.material.sku)
                .unwrap_or(substitute.material.stock);
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        substitute.material.description.clone(),
                        Style::default()
                            .fg(HEADER_TEXT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("{}%", substitute.compatibility),
                        Style::default()
                            .fg(compatibility_color(substitute.compatibility))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "SKU: {} · Stock: {} · {}",
                        substitute.material.sku, stock, substitute.material.location
                    ),
                    Style::default().fg(TEC_GRAY),
                )),
                Line::from(Span::styled(
                    substitute.justification.clone(),
                    Style::default().fg(TEC_GRAY).add_modifier(Modifier::ITALIC),
                )),
            ];
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ")
        .block(bordered(format!(
            "Sustitutos Compatibles ({}) — u: Usar Sustituto",
            results.substitutes.len()
        )));

    let mut list_state = ListState::default();
    list_state.select(Some(
        state.result_selection.min(results.substitutes.len() - 1),
    ));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn compatibility_color(compatibility: u8) -> Color {
    if compatibility > 80 {
        TEC_GREEN
    } else if compatibility > 50 {
        WARN_YELLOW
    } else {
        ALERT_RED
    }
}

fn stock_style(stock: u32) -> Style {
    if stock == 0 {
        Style::default().fg(ALERT_RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    }
}

pub fn draw_notice(frame: &mut Frame<'_>, notice: &IntegrationNotice) {
    let area = centered_rect(55, 40, frame.area());
    frame.render_widget(Clear, area);

    let title = if notice.substitute {
        "Integrar Sustituto"
    } else {
        "Confirmar Uso de Material"
    };

    let lines = if let Some(message) = &notice.registered {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("✓ {}", message),
                Style::default().fg(TEC_GREEN),
            )),
            Line::from(""),
            Line::from(Span::styled("Esc: Cerrar", Style::default().fg(TEC_GRAY))),
        ]
    } else {
        vec![
            Line::from(format!("{} (SKU: {})", notice.description, notice.sku)),
            Line::from(""),
            Line::from("Se descontó 1 unidad del stock. Puede registrar esta acción en otros sistemas."),
            Line::from(""),
            Line::from(vec![
                Span::styled("s", Style::default().fg(WARN_YELLOW)),
                Span::raw(": Crear Reserva en SAP   "),
                Span::styled("c", Style::default().fg(WARN_YELLOW)),
                Span::raw(": Notificar a Compras (COUPA)   "),
                Span::styled("Esc", Style::default().fg(WARN_YELLOW)),
                Span::raw(": Cerrar"),
            ]),
        ]
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(bordered(title).border_style(Style::default().fg(POPUP_BORDER))),
        area,
    );
}

pub fn draw_sheet(frame: &mut Frame<'_>, state: &MatrixState, tick: u64) {
    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = bordered("FICHA TÉCNICA DE MATERIAL – TECPETROL")
        .border_style(Style::default().fg(POPUP_BORDER));

    match &state.sheet {
        FetchSlot::Ready(sheet) => {
            frame.render_widget(
                Paragraph::new(sheet.clone())
                    .wrap(Wrap { trim: false })
                    .scroll((state.sheet_scroll, 0))
                    .block(block),
                area,
            );
        }
        FetchSlot::Failed(message) => {
            frame.render_widget(error_paragraph(message).block(block), area);
        }
        _ => {
            frame.render_widget(
                loading_paragraph(messages::CONSULTING, tick).block(block),
                area,
            );
        }
    }
}
