use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::store::StoreState;
use crate::ui::app::PurchasingState;
use crate::ui::theme::{HEADER_TEXT, TEC_BLUE, TEC_GRAY, TEC_GREEN};
use crate::ui::views::bordered;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &PurchasingState, store: &StoreState) {
    let Some(request) = &store.purchase_request else {
        let empty = Paragraph::new(
            "\nNo hay ninguna solicitud de compra activa. Por favor, inicie una desde la \
             pantalla de Inventario (WMS) para un material sin stock.",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEC_GRAY))
        .wrap(Wrap { trim: true })
        .block(bordered("Módulo de Compras (Simulación COUPA)"));
        frame.render_widget(empty, area);
        return;
    };

    if let Some(confirmation) = &state.confirmation {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("✓ {}", confirmation),
                Style::default().fg(TEC_GREEN),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc: Nueva solicitud",
                Style::default().fg(TEC_GRAY),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(bordered("Nueva Solicitud de Compra — Simulación COUPA")),
            area,
        );
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("SKU del Material:     ", Style::default().fg(TEC_GRAY)),
            Span::styled(request.sku.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Descripción:          ", Style::default().fg(TEC_GRAY)),
            Span::styled(request.description.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Cantidad a Solicitar: ", Style::default().fg(TEC_GRAY)),
            Span::styled(
                state.quantity.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(TEC_BLUE)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "0-9/Backspace: Editar cantidad · Enter: Enviar a COUPA",
            Style::default().fg(TEC_GRAY),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(bordered("Nueva Solicitud de Compra — Simulación COUPA")),
        area,
    );
}
