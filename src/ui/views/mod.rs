pub mod alerts;
pub mod catalog;
pub mod dashboard;
pub mod inventory;
pub mod matrix;
pub mod purchasing;
pub mod reports;
pub mod suggestions;

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::theme::{ALERT_RED, GLOBAL_BORDER, TEC_GRAY};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn loading_paragraph(message: &str, tick: u64) -> Paragraph<'static> {
    Paragraph::new(format!("\n{} {}", spinner_frame(tick), message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEC_GRAY))
}

pub fn error_paragraph(message: &str) -> Paragraph<'static> {
    Paragraph::new(format!("\n{}", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(ALERT_RED))
        .wrap(Wrap { trim: true })
}

pub(crate) fn bordered(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(format!(" {} ", title.into()))
}

/// Group digits in the Spanish style: 2500000 → "2.500.000".
pub(crate) fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1.000");
        assert_eq!(thousands(2_500_000), "2.500.000");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(4));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
