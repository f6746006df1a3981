//! Core component trait - the foundation of the UI system

use crate::presentation::RowView;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a focusable component
///
/// The title and status bars are plain widgets and have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// The list of person cards
    CardList,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need; rendering never mutates app state.
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Row views for this frame, in list order
    pub rows: &'a [RowView],
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, rows: &'a [RowView]) -> Self {
        Self { theme, focus, rows }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
