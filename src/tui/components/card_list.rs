//! Card list panel - one bordered card per person
//!
//! Scrolling is card-granular: the panel keeps the index of the first card
//! drawn and picks it so the selected card is always fully on screen.
//! Geometry is recomputed every frame in [`CardListPanel::sync`], since
//! card heights change while rows animate.

use crate::model::RecordId;
use crate::presentation::{render_rows, RowRenderer, RowView};
use crate::tui::layout::{self, CardSlot};
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Selectable,
};
use crate::util::truncate_to_width;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct CardListPanel {
    /// Selected card index
    pub selected: usize,

    /// First card drawn
    offset: usize,

    item_count: usize,

    /// Where each visible card was placed on the last sync
    slots: Vec<CardSlot>,

    /// Record behind each card on the last sync, in list order
    ids: Vec<RecordId>,
}

impl CardListPanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
            item_count: 0,
            slots: Vec::new(),
            ids: Vec::new(),
        }
    }

    /// Recompute card geometry for this frame (call before render)
    pub fn sync(&mut self, area: Rect, rows: &[RowView]) {
        self.item_count = rows.len();
        if self.selected >= self.item_count {
            self.selected = self.item_count.saturating_sub(1);
        }

        let column = layout::card_column(area);
        let heights: Vec<u16> = rows
            .iter()
            .map(|row| layout::card_height(row.visible_fields))
            .collect();

        self.offset = layout::scroll_offset(&heights, column.height, self.selected, self.offset);
        self.slots = layout::stack_cards(column, &heights, self.offset);
        self.ids = rows.iter().map(|row| row.id).collect();
    }

    /// Person whose card is under a mouse position, from the last sync
    ///
    /// Returns the record id rather than the card position so a click still
    /// lands on the right person if the list changed since the frame was drawn.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RecordId> {
        layout::hit_test(&self.slots, column, row).and_then(|index| self.ids.get(index).copied())
    }

    /// Cards fully or partly on screen
    fn page_size(&self) -> usize {
        self.slots.len().max(1)
    }

    fn page_down(&mut self) {
        let target = self.selected.saturating_add(self.page_size());
        self.select(target);
    }

    fn page_up(&mut self) {
        let target = self.selected.saturating_sub(self.page_size());
        self.select(target);
    }
}

impl Default for CardListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CardListPanel {
    fn id(&self) -> ComponentId {
        ComponentId::CardList
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        if ctx.rows.is_empty() {
            let empty = Paragraph::new("No people to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted));
            f.render_widget(empty, layout::card_column(area));
            return;
        }

        let selected = ctx
            .is_focused(self.id())
            .then_some(self.selected);
        let mut renderer = CardRenderer {
            frame: f,
            slots: &self.slots,
            theme,
        };
        render_rows(ctx.rows, selected, &mut renderer);
    }
}

impl Selectable for CardListPanel {
    fn selected_index(&self) -> Option<usize> {
        (self.item_count > 0).then_some(self.selected)
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.item_count.saturating_sub(1));
    }

    fn item_count(&self) -> usize {
        self.item_count
    }
}

impl Interactive for CardListPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓ select  ⏎ toggle")
    }
}

/// Draws row views as bordered cards into a ratatui frame
///
/// Rows without a slot this frame (scrolled off screen) are skipped.
pub struct CardRenderer<'r, 'f> {
    frame: &'r mut Frame<'f>,
    slots: &'r [CardSlot],
    theme: &'r Theme,
}

impl RowRenderer for CardRenderer<'_, '_> {
    fn render_row(&mut self, row: &RowView, selected: bool) {
        if let Some(slot) = self.slots.iter().find(|slot| slot.index == row.index) {
            draw_card(self.frame, slot.rect, row, selected, self.theme);
        }
    }
}

fn draw_card(f: &mut Frame, rect: Rect, row: &RowView, selected: bool, theme: &Theme) {
    let border = if selected { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.card_background));

    let inner = block.inner(rect);
    f.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let [text_area, chevron_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let width = usize::from(text_area.width);
    let lines: Vec<Line> = row
        .visible_text()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let text = truncate_to_width(text, width);
            let style = if i == 0 {
                Style::default().fg(theme.name).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), text_area);

    let chevron_color = if row.is_animating() {
        theme.highlight
    } else {
        theme.indicator
    };
    let chevron = Paragraph::new(row.indicator().to_string())
        .alignment(Alignment::Right)
        .style(Style::default().fg(chevron_color));
    f.render_widget(chevron, chevron_area);
}
