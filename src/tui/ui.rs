// Frame composition
//
// Title bar on top, cards in the middle, status bar at the bottom, toast over
// everything.

use super::app::App;
use super::components::{StatusBar, TitleBar};
use super::traits::{Component, Interactive, RenderContext};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use std::time::Instant;

/// Main render function - called for every frame
///
/// Card geometry is synced here because heights change while rows animate.
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let views = app.views(now);
    let [title_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(f.area());

    app.card_list.sync(list_area, &views);

    let ctx = RenderContext::new(&app.theme, app.focus, &views);
    let title = TitleBar {
        open: app.model.expanded_count(),
    };
    title.render(f, title_area, &ctx);
    app.card_list.render(f, list_area, &ctx);

    let status = StatusBar {
        hint: app.card_list.focus_hint(),
        latest_log: app.log_buffer.latest(),
    };
    status.render(f, status_area, &ctx);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
