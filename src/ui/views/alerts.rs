use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem};
use ratatui::Frame;

use crate::model::{Alert, Severity};
use crate::ui::fetch::FetchSlot;
use crate::ui::theme::{ALERT_RED, HEADER_TEXT, TEC_BLUE, TEC_GRAY, WARN_YELLOW};
use crate::ui::views::{bordered, error_paragraph, loading_paragraph};

pub fn draw(frame: &mut Frame<'_>, area: Rect, slot: &FetchSlot<Vec<Alert>>, tick: u64) {
    let block = bordered("Alertas de Inventario");
    match slot {
        FetchSlot::Ready(alerts) => {
            let items: Vec<ListItem> = alerts.iter().map(alert_item).collect();
            frame.render_widget(List::new(items).block(block), area);
        }
        FetchSlot::Failed(message) => {
            frame.render_widget(error_paragraph(message).block(block), area);
        }
        _ => {
            frame.render_widget(
                loading_paragraph("Cargando alertas...", tick).block(block),
                area,
            );
        }
    }
}

fn alert_item(alert: &Alert) -> ListItem<'static> {
    let (icon, color) = severity_badge(alert.severity);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(
                alert.message.clone(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} · SKU: {} · {}",
                alert.kind.label(),
                alert.material_sku,
                alert.timestamp
            ),
            Style::default().fg(TEC_GRAY),
        )),
        Line::from(""),
    ];
    ListItem::new(Text::from(lines))
}

fn severity_badge(severity: Severity) -> (&'static str, Color) {
    match severity {
        Severity::High => ("▲", ALERT_RED),
        Severity::Medium => ("●", WARN_YELLOW),
        Severity::Low => ("ℹ", TEC_BLUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_distinct_badges() {
        let badges = [
            severity_badge(Severity::High),
            severity_badge(Severity::Medium),
            severity_badge(Severity::Low),
        ];
        assert_eq!(badges[0].0, "▲");
        assert_ne!(badges[0].1, badges[2].1);
    }
}
