use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::model::SuggestionStatus;
use crate::store::StoreState;
use crate::ui::app::{messages, SuggestionField, SuggestionsState};
use crate::ui::theme::{ALERT_RED, HEADER_TEXT, TEC_BLUE, TEC_GRAY, TEC_GREEN, WARN_YELLOW};
use crate::ui::views::bordered;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &SuggestionsState, store: &StoreState) {
    let halves =
        Layout::horizontal([Constraint::Ratio(2, 5), Constraint::Ratio(3, 5)]).split(area);
    draw_form(frame, halves[0], state);
    draw_table(frame, halves[1], state, store);
}

fn field_line(
    label: &'static str,
    value: &str,
    active: bool,
) -> Line<'static> {
    let marker = if active {
        Span::styled("▌ ", Style::default().fg(TEC_BLUE))
    } else {
        Span::raw("  ")
    };
    let cursor = if active {
        Span::styled("█", Style::default().fg(TEC_BLUE))
    } else {
        Span::raw("")
    };
    Line::from(vec![
        marker,
        Span::styled(label, Style::default().fg(TEC_GRAY)),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
        cursor,
    ])
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, state: &SuggestionsState) {
    let active = |field: SuggestionField| state.form_active && state.field == field;

    let mut lines = vec![
        field_line(
            "SKU del Material Original:  ",
            &state.original_input,
            active(SuggestionField::Original),
        ),
        field_line(
            "SKU del Sustituto Sugerido: ",
            &state.substitute_input,
            active(SuggestionField::Substitute),
        ),
        field_line(
            "Justificación / Notas:      ",
            &state.justification_input,
            active(SuggestionField::Justification),
        ),
        Line::from(""),
    ];

    if let Some(feedback) = &state.feedback {
        let color = if feedback == messages::FORM_INCOMPLETE {
            WARN_YELLOW
        } else {
            TEC_GREEN
        };
        lines.push(Line::from(Span::styled(
            feedback.clone(),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }

    let hint = if state.form_active {
        "Tab: Campo · Enter: Siguiente/Enviar a Revisión · Esc: Cancelar"
    } else {
        "n: Nueva sugerencia"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(TEC_GRAY),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(bordered("Sugerir un Nuevo Sustituto")),
        area,
    );
}

fn draw_table(frame: &mut Frame<'_>, area: Rect, state: &SuggestionsState, store: &StoreState) {
    let header = Row::new(["Original", "Sustituto", "Estado", "Enviado por"]).style(
        Style::default()
            .fg(TEC_GRAY)
            .add_modifier(Modifier::BOLD),
    );

    let rows = store.suggestions.iter().map(|suggestion| {
        Row::new([
            suggestion.original_sku.clone(),
            suggestion.substitute_sku.clone(),
            suggestion.status.label().to_string(),
            suggestion.submitted_by.clone(),
        ])
        .style(Style::default().fg(status_color(suggestion.status)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ")
    .block(bordered("Sugerencias Pendientes y Pasadas — v: Verificar Cumplimiento"));

    let mut table_state = TableState::default();
    if !store.suggestions.is_empty() {
        table_state.select(Some(state.table_selection.min(store.suggestions.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn status_color(status: SuggestionStatus) -> ratatui::style::Color {
    match status {
        SuggestionStatus::Pendiente => WARN_YELLOW,
        SuggestionStatus::Aprobado => TEC_GREEN,
        SuggestionStatus::Rechazado => ALERT_RED,
    }
}
