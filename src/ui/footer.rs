use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::store::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: View, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(view);
        let version = format!("v{} ", VERSION);

        // Pad with char count, not byte count, so the accents line up.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(view: View) -> &'static str {
    match view {
        View::Dashboard => " Tab: Vista │ 1-8: Ir a │ r: Actualizar │ Ctrl+Q: Salir",
        View::Inventory => " ↑↓: Seleccionar │ Enter: Solicitud de Compra │ Tab: Vista │ Ctrl+Q: Salir",
        View::Matrix => {
            " ↑↓: Seleccionar │ Enter: Buscar │ t: Ficha Técnica │ b: Búsqueda Manual │ u/o: Usar │ Esc: Volver"
        }
        View::Purchasing => " 0-9: Cantidad │ Enter: Enviar a COUPA │ Tab: Vista │ Ctrl+Q: Salir",
        View::Suggestions => " n: Nueva Sugerencia │ ↑↓: Seleccionar │ v: Verificar │ Tab: Vista",
        View::Catalog => " ↑↓: Seleccionar │ Enter/a: Aprobar en Sphera │ Tab: Vista │ Ctrl+Q: Salir",
        View::Alerts => " r: Actualizar │ Tab: Vista │ 1-8: Ir a │ Ctrl+Q: Salir",
        View::Reports => " r: Actualizar │ Tab: Vista │ 1-8: Ir a │ Ctrl+Q: Salir",
    }
}
