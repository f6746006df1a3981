//! Row presentation - turns (record, expanded) into what a renderer draws
//!
//! Nothing here knows about terminals. The TUI card list and the plain-text
//! `list` output both consume [`RowView`] through the [`RowRenderer`] trait.

pub mod animation;
pub mod render;

pub use animation::{RowAnimation, Transition, DEFAULT_DURATION, EXPANDED_ANGLE};
pub use render::{build_views, render_rows, RowRenderer, TextRenderer};

use crate::model::{Record, RecordId};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

/// Number of text fields a row can show
pub const FIELD_COUNT: usize = 4;

/// Formatted text fields for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowContent {
    pub name: String,
    pub age: String,
    pub favorite_color: String,
    pub favorite_movie: String,
}

impl RowContent {
    /// Fields in display order: name first, details after
    pub fn lines(&self) -> [&str; FIELD_COUNT] {
        [
            &self.name,
            &self.age,
            &self.favorite_color,
            &self.favorite_movie,
        ]
    }
}

/// Which fields a row shows once it has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutState {
    /// Name only; details clipped
    Collapsed,
    /// All four fields
    Expanded,
}

impl LayoutState {
    pub fn visible_fields(self) -> usize {
        match self {
            LayoutState::Collapsed => 1,
            LayoutState::Expanded => FIELD_COUNT,
        }
    }
}

/// Everything a renderer needs for one row at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub id: RecordId,
    pub content: RowContent,
    /// Settled layout for the row's model state
    pub layout: LayoutState,
    /// Current chevron rotation, radians
    pub indicator_angle: f64,
    /// Fields visible right now (differs from `layout` mid-animation)
    pub visible_fields: usize,
}

impl RowView {
    /// Content lines visible right now
    pub fn visible_text(&self) -> Vec<String> {
        self.content
            .lines()
            .iter()
            .take(self.visible_fields)
            .map(|s| s.to_string())
            .collect()
    }

    /// Chevron glyph for the current angle
    pub fn indicator(&self) -> char {
        indicator_glyph(self.indicator_angle)
    }

    pub fn is_animating(&self) -> bool {
        self.visible_fields != self.layout.visible_fields()
            || (self.indicator_angle - settled_angle(self.layout)).abs() > 1e-6
    }
}

/// Maps records and expansion flags to display state
#[derive(Debug, Clone)]
pub struct RowPresentationController {
    duration: Duration,
}

impl RowPresentationController {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// The four display strings for a record
    pub fn content_for(&self, record: &Record) -> RowContent {
        RowContent {
            name: record.name().to_string(),
            age: format!("Age: {}", record.age()),
            favorite_color: format!("Favorite color: {}", record.favorite_color()),
            favorite_movie: format!("Favorite movie: {}", record.favorite_movie()),
        }
    }

    pub fn layout_state_for(&self, expanded: bool) -> LayoutState {
        if expanded {
            LayoutState::Expanded
        } else {
            LayoutState::Collapsed
        }
    }

    /// Animated transition into the given state
    pub fn transition_to(&self, expanded: bool) -> Transition {
        if expanded {
            Transition::expanding(self.duration)
        } else {
            Transition::collapsing(self.duration)
        }
    }

    /// Build the render input for one row
    ///
    /// Without an animation the row is drawn settled in its model state.
    pub fn view_for(
        &self,
        index: usize,
        record: &Record,
        expanded: bool,
        animation: Option<&RowAnimation>,
        now: Instant,
    ) -> RowView {
        let layout = self.layout_state_for(expanded);
        let (indicator_angle, visible_fields) = match animation {
            Some(anim) => (anim.angle_at(now), fields_for_openness(anim.openness_at(now))),
            None => (settled_angle(layout), layout.visible_fields()),
        };

        RowView {
            index,
            id: record.id(),
            content: self.content_for(record),
            layout,
            indicator_angle,
            visible_fields,
        }
    }
}

impl Default for RowPresentationController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

/// Resting chevron angle for a layout
pub fn settled_angle(layout: LayoutState) -> f64 {
    match layout {
        LayoutState::Collapsed => 0.0,
        LayoutState::Expanded => EXPANDED_ANGLE,
    }
}

/// Chevron glyph for a rotation, snapped to the nearest quarter turn
///
/// The collapsed glyph points down; rotating clockwise passes through left on
/// the way to up.
pub fn indicator_glyph(angle: f64) -> char {
    match (angle / FRAC_PI_2).round() as i64 {
        i64::MIN..=0 => '▾',
        1 => '◂',
        _ => '▴',
    }
}

fn fields_for_openness(openness: f64) -> usize {
    let extra = (FIELD_COUNT - 1) as f64 * openness.clamp(0.0, 1.0);
    1 + extra.round() as usize
}
