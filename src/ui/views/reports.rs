use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::ConsolidationSuggestion;
use crate::ui::fetch::FetchSlot;
use crate::ui::theme::{ALERT_RED, HEADER_TEXT, TEC_BLUE, TEC_GRAY, TEC_GREEN, WARN_YELLOW};
use crate::ui::views::{bordered, error_paragraph, loading_paragraph, thousands};

const COST_SAVINGS: [(&str, u64); 6] = [
    ("Ene", 4000),
    ("Feb", 3000),
    ("Mar", 5000),
    ("Abr", 4500),
    ("May", 6000),
    ("Jun", 8000),
];

const SUBSTITUTION_RATE: [(&str, u64); 5] = [
    ("Alm. A", 85),
    ("Alm. B", 92),
    ("Alm. C", 78),
    ("Alm. D", 88),
    ("Alm. E", 95),
];

const OBSOLESCENCE: [(&str, u64); 3] = [
    ("Obsoleto", 120_000),
    ("En Riesgo", 300_000),
    ("Saludable", 2_500_000),
];

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    slot: &FetchSlot<Vec<ConsolidationSuggestion>>,
    tick: u64,
) {
    let chunks = Layout::vertical([Constraint::Min(6), Constraint::Length(9)]).split(area);
    draw_consolidation(frame, chunks[0], slot, tick);

    let thirds = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(chunks[1]);
    draw_savings(frame, thirds[0]);
    draw_substitution_rate(frame, thirds[1]);
    draw_health(frame, thirds[2]);
}

fn draw_consolidation(
    frame: &mut Frame<'_>,
    area: Rect,
    slot: &FetchSlot<Vec<ConsolidationSuggestion>>,
    tick: u64,
) {
    let block = bordered("Sugerencias de Consolidación de Stock (IA)");
    match slot {
        FetchSlot::Ready(suggestions) => {
            let header = Row::new(["Ubicación", "Consolidar SKU", "En SKU Sustituto", "Justificación de IA"])
                .style(Style::default().fg(TEC_GRAY).add_modifier(Modifier::BOLD));
            let rows = suggestions.iter().map(|s| {
                Row::new([
                    s.location.clone(),
                    s.from_sku.clone(),
                    s.to_sku.clone(),
                    s.justification.clone(),
                ])
                .style(Style::default().fg(HEADER_TEXT))
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Length(20),
                    Constraint::Length(15),
                    Constraint::Length(16),
                    Constraint::Min(30),
                ],
            )
            .header(header)
            .block(block);
            frame.render_widget(table, area);
        }
        FetchSlot::Failed(message) => {
            frame.render_widget(error_paragraph(message).block(block), area);
        }
        _ => {
            frame.render_widget(
                loading_paragraph("Generando reporte de consolidación...", tick).block(block),
                area,
            );
        }
    }
}

fn draw_savings(frame: &mut Frame<'_>, area: Rect) {
    let bars: Vec<Bar> = COST_SAVINGS
        .iter()
        .map(|(month, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(*month))
                .style(Style::default().fg(TEC_BLUE))
        })
        .collect();
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .block(bordered("Ahorro de Costos (USD)"));
    frame.render_widget(chart, area);
}

fn draw_substitution_rate(frame: &mut Frame<'_>, area: Rect) {
    let lines: Vec<Line> = SUBSTITUTION_RATE
        .iter()
        .map(|(warehouse, rate)| {
            let filled = (*rate as usize) / 10;
            Line::from(vec![
                Span::styled(format!("{:<7}", warehouse), Style::default().fg(TEC_GRAY)),
                Span::styled("█".repeat(filled), Style::default().fg(TEC_GREEN)),
                Span::styled(format!(" {}%", rate), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered("Tasa de Éxito de Sustitución")),
        area,
    );
}

fn draw_health(frame: &mut Frame<'_>, area: Rect) {
    let colors = [ALERT_RED, WARN_YELLOW, TEC_GREEN];
    let lines: Vec<Line> = OBSOLESCENCE
        .iter()
        .zip(colors)
        .map(|((label, value), color)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(color)),
                Span::styled(format!("${}", thousands(*value)), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered("Salud del Inventario (por Valor)")),
        area,
    );
}
