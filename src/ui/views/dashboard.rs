use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use crate::model::{CategoryDatum, ChangeType, DashboardData, Kpi};
use crate::ui::fetch::FetchSlot;
use crate::ui::theme::{ALERT_RED, HEADER_TEXT, TEC_BLUE, TEC_GRAY, TEC_GREEN};
use crate::ui::views::{bordered, error_paragraph, loading_paragraph};

pub fn draw(frame: &mut Frame<'_>, area: Rect, slot: &FetchSlot<DashboardData>, tick: u64) {
    match slot {
        FetchSlot::Ready(data) => draw_data(frame, area, data),
        FetchSlot::Failed(message) => frame.render_widget(error_paragraph(message), area),
        _ => frame.render_widget(
            loading_paragraph("Cargando datos del panel...", tick),
            area,
        ),
    }
}

fn draw_data(frame: &mut Frame<'_>, area: Rect, data: &DashboardData) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(3),
    ])
    .split(area);

    draw_kpis(frame, chunks[0], &data.kpis);
    draw_rotation(frame, chunks[1], &data.rotation);
    draw_integrations(frame, chunks[2]);
}

fn draw_kpis(frame: &mut Frame<'_>, area: Rect, kpis: &[Kpi]) {
    if kpis.is_empty() {
        return;
    }
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, kpis.len() as u32); kpis.len()]).split(area);

    for (kpi, column) in kpis.iter().zip(columns.iter()) {
        let (arrow, color) = match kpi.change_type {
            ChangeType::Increase => ("▲", TEC_GREEN),
            ChangeType::Decrease => ("▼", ALERT_RED),
        };
        let body = vec![
            Line::from(Span::styled(
                kpi.value.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} {}", arrow, kpi.change), Style::default().fg(color)),
                Span::styled(" vs mes anterior", Style::default().fg(TEC_GRAY)),
            ]),
        ];
        let block = bordered(kpi.label.clone());
        frame.render_widget(Paragraph::new(body).block(block), *column);
    }
}

fn draw_rotation(frame: &mut Frame<'_>, area: Rect, rotation: &[CategoryDatum]) {
    let bars: Vec<Bar> = rotation
        .iter()
        .map(|datum| {
            Bar::default()
                .value(datum.value)
                .label(Line::from(truncate(&datum.name, 12)))
                .style(Style::default().fg(TEC_BLUE))
                .value_style(
                    Style::default()
                        .fg(HEADER_TEXT)
                        .bg(TEC_BLUE)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(13)
        .bar_gap(2)
        .block(bordered("Rotación de Inventario (Unidades)"));
    frame.render_widget(chart, area);
}

fn draw_integrations(frame: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (index, system) in ["SAP FIORI", "WMS", "COUPA", "Sphera"].iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(TEC_GRAY)));
        }
        spans.push(Span::styled(
            (*system).to_string(),
            Style::default().fg(HEADER_TEXT),
        ));
        spans.push(Span::styled(" ● Conectado", Style::default().fg(TEC_GREEN)));
    }
    let paragraph =
        Paragraph::new(Line::from(spans)).block(bordered("Estado de Integración de Sistemas"));
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
