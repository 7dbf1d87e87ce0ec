use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::store::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, TEC_BLUE, TEC_GRAY};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: View) -> Tabs<'static> {
        let titles: Vec<Line<'static>> = View::ALL
            .iter()
            .enumerate()
            .map(|(index, view)| Line::from(format!("{} {}", index + 1, view.title())))
            .collect();

        Tabs::new(titles)
            .select(active.index())
            .style(Style::default().fg(TEC_GRAY))
            .highlight_style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(TEC_BLUE)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER))
                    .title(" Materiales Sustitutos · Tecpetrol "),
            )
    }
}
