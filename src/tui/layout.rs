//! Responsive breakpoints and card geometry.
//!
//! Single source of truth for width thresholds and card spacing - no magic
//! numbers scattered in render code.

use ratatui::layout::Rect;

/// Blank cells between the list area edge and the cards
pub const OUTER_PADDING: u16 = 1;

/// Blank rows between consecutive cards
pub const CARD_SPACING: u16 = 1;

/// Rows taken by a card's top and bottom border
const CARD_CHROME: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }

    /// Maximum card width; wide terminals center a readable column
    pub fn max_card_width(&self) -> u16 {
        match self {
            Breakpoint::Compact | Breakpoint::Normal => u16::MAX,
            Breakpoint::Wide => 90,
            Breakpoint::UltraWide => 110,
        }
    }
}

/// Where a card landed on screen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub rect: Rect,
}

/// Card height for a number of visible text lines
pub fn card_height(visible_fields: usize) -> u16 {
    u16::try_from(visible_fields)
        .unwrap_or(u16::MAX)
        .saturating_add(CARD_CHROME)
}

/// Area available to cards inside the list region
///
/// Applies the outer padding, then narrows and centers on wide terminals.
pub fn card_column(area: Rect) -> Rect {
    let padded = Rect {
        x: area.x.saturating_add(OUTER_PADDING),
        y: area.y.saturating_add(OUTER_PADDING),
        width: area.width.saturating_sub(OUTER_PADDING * 2),
        height: area.height.saturating_sub(OUTER_PADDING * 2),
    };

    let max = Breakpoint::from_width(area.width).max_card_width();
    if padded.width <= max {
        return padded;
    }
    Rect {
        x: padded.x + (padded.width - max) / 2,
        width: max,
        ..padded
    }
}

/// Rows covered by cards `heights`, including the spacing between them
fn span(heights: &[u16]) -> u32 {
    let cards: u32 = heights.iter().map(|&h| u32::from(h)).sum();
    let gaps = heights.len().saturating_sub(1) as u32 * u32::from(CARD_SPACING);
    cards + gaps
}

/// First card to draw so that `selected` is fully visible
///
/// Keeps `current` when possible to avoid jumping, and pulls the list back
/// down when cards collapse and leave empty space at the bottom.
pub fn scroll_offset(heights: &[u16], viewport: u16, selected: usize, current: usize) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let viewport = u32::from(viewport);

    let mut offset = current.min(selected);
    while offset < selected && span(&heights[offset..=selected]) > viewport {
        offset += 1;
    }
    while offset > 0 && span(&heights[offset - 1..]) <= viewport {
        offset -= 1;
    }
    offset
}

/// Stack cards top to bottom starting at `offset`
///
/// The last card may be clipped at the bottom edge; cards that start below
/// the area are not placed.
pub fn stack_cards(area: Rect, heights: &[u16], offset: usize) -> Vec<CardSlot> {
    let mut slots = Vec::new();
    let bottom = area.bottom();
    let mut y = area.y;

    for (index, &height) in heights.iter().enumerate().skip(offset) {
        if y >= bottom {
            break;
        }
        let visible = height.min(bottom - y);
        slots.push(CardSlot {
            index,
            rect: Rect::new(area.x, y, area.width, visible),
        });
        y = y.saturating_add(height).saturating_add(CARD_SPACING);
    }

    slots
}

/// Which card (if any) covers the cell at `(column, row)`
pub fn hit_test(slots: &[CardSlot], column: u16, row: u16) -> Option<usize> {
    slots
        .iter()
        .find(|slot| {
            let r = slot.rect;
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
        .map(|slot| slot.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Normal));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn card_height_adds_borders() {
        assert_eq!(card_height(1), 3);
        assert_eq!(card_height(4), 6);
    }

    #[test]
    fn card_column_pads_and_centers() {
        let narrow = card_column(Rect::new(0, 0, 50, 20));
        assert_eq!(narrow, Rect::new(1, 1, 48, 18));

        let wide = card_column(Rect::new(0, 0, 120, 20));
        assert_eq!(wide.width, 90);
        assert_eq!(wide.x, 1 + (118 - 90) / 2);
    }

    #[test]
    fn stack_places_cards_with_spacing() {
        let slots = stack_cards(Rect::new(0, 0, 30, 20), &[3, 6, 3], 0);
        let ys: Vec<u16> = slots.iter().map(|s| s.rect.y).collect();
        assert_eq!(ys, vec![0, 4, 11]);
        assert_eq!(slots[1].rect.height, 6);
    }

    #[test]
    fn stack_clips_last_card_and_skips_offscreen() {
        let slots = stack_cards(Rect::new(0, 0, 30, 8), &[3, 6, 3], 0);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].rect.height, 4);
    }

    #[test]
    fn stack_starts_at_offset() {
        let slots = stack_cards(Rect::new(0, 2, 30, 20), &[3, 6, 3], 1);
        assert_eq!(slots[0].index, 1);
        assert_eq!(slots[0].rect.y, 2);
    }

    #[test]
    fn hit_test_ignores_spacing_rows() {
        let slots = stack_cards(Rect::new(0, 0, 30, 20), &[3, 3, 3], 0);
        assert_eq!(hit_test(&slots, 5, 0), Some(0));
        assert_eq!(hit_test(&slots, 5, 3), None);
        assert_eq!(hit_test(&slots, 5, 4), Some(1));
        assert_eq!(hit_test(&slots, 30, 4), None);
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        let heights = [6, 6, 6, 6];
        // viewport fits two expanded cards (6 + 1 + 6)
        assert_eq!(scroll_offset(&heights, 13, 0, 0), 0);
        assert_eq!(scroll_offset(&heights, 13, 2, 0), 1);
        assert_eq!(scroll_offset(&heights, 13, 3, 0), 2);
        // moving back up scrolls to the selection
        assert_eq!(scroll_offset(&heights, 13, 0, 2), 0);
    }

    #[test]
    fn scroll_offset_pulls_back_after_collapse() {
        let heights = [3, 3, 3];
        assert_eq!(scroll_offset(&heights, 20, 2, 2), 0);
    }

    #[test]
    fn scroll_offset_empty_list() {
        assert_eq!(scroll_offset(&[], 10, 0, 3), 0);
    }
}
