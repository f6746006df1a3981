// Title bar component
//
// App name, how many people are listed and how many cards are open.

use crate::tui::theme::Theme;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TitleBar {
    /// Cards currently expanded in the model
    pub open: usize,
}

impl TitleBar {
    fn text(&self, ctx: &RenderContext) -> String {
        format!(" 👥 People ({}) ──── {} open", ctx.rows.len(), self.open)
    }

    fn block(theme: &Theme) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(format!(" {} ", theme.kind.name())).right_aligned())
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let title = Paragraph::new(self.text(ctx))
            .style(
                Style::default()
                    .fg(ctx.theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Self::block(ctx.theme));

        f.render_widget(title, area);
    }
}
