use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::store::View;
use crate::ui::app::{messages, App};
use crate::ui::fetch::FetchSlot;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::views;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.active_view()), header);
    frame.render_widget(Clear, body);

    match &app.inventory_load {
        FetchSlot::Ready(()) => draw_active_view(frame, body, app),
        FetchSlot::Failed(message) => {
            frame.render_widget(views::error_paragraph(message), body);
        }
        _ => {
            frame.render_widget(
                views::loading_paragraph(messages::LOADING_INVENTORY, app.tick()),
                body,
            );
        }
    }

    frame.render_widget(Footer::new().widget(app.active_view(), footer), footer);

    // Overlays paint above everything else.
    if app.inventory_view.decision_open {
        views::inventory::draw_decision_modal(frame, app);
    }
    if let Some(notice) = &app.matrix.notice {
        views::matrix::draw_notice(frame, notice);
    }
    if app.matrix.sheet_open {
        views::matrix::draw_sheet(frame, &app.matrix, app.tick());
    }
}

fn draw_active_view(frame: &mut Frame<'_>, body: ratatui::layout::Rect, app: &App) {
    match app.active_view() {
        View::Dashboard => views::dashboard::draw(frame, body, &app.dashboard, app.tick()),
        View::Inventory => views::inventory::draw(frame, body, &app.inventory_view, app.store()),
        View::Matrix => views::matrix::draw(frame, body, &app.matrix, app.store(), app.tick()),
        View::Purchasing => views::purchasing::draw(frame, body, &app.purchasing, app.store()),
        View::Suggestions => {
            views::suggestions::draw(frame, body, &app.suggestions, app.store())
        }
        View::Catalog => views::catalog::draw(frame, body, &app.catalog, app.store()),
        View::Alerts => views::alerts::draw(frame, body, &app.alerts, app.tick()),
        View::Reports => views::reports::draw(frame, body, &app.report, app.tick()),
    }
}
