//! Rendering adapter seam
//!
//! Every host (terminal cards, plain text) implements [`RowRenderer`] and is
//! fed fresh [`RowView`]s built from the model. Renderers hold no expansion
//! state of their own.

use super::{RowAnimation, RowPresentationController, RowView};
use crate::model::{RecordId, RowListModel};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Instant;

/// A surface that can draw rows
pub trait RowRenderer {
    /// Draw one row. Called in list order.
    fn render_row(&mut self, row: &RowView, selected: bool);
}

/// Build views for every row in the model
///
/// Animations are looked up by record identity, never by position.
pub fn build_views(
    model: &RowListModel,
    controller: &RowPresentationController,
    animations: &HashMap<RecordId, RowAnimation>,
    now: Instant,
) -> Vec<RowView> {
    model
        .iter()
        .map(|(index, record, row)| {
            controller.view_for(
                index,
                record,
                row.expanded(),
                animations.get(&row.id()),
                now,
            )
        })
        .collect()
}

/// Feed views to a renderer
pub fn render_rows<R: RowRenderer + ?Sized>(
    views: &[RowView],
    selected: Option<usize>,
    renderer: &mut R,
) {
    for view in views {
        renderer.render_row(view, selected == Some(view.index));
    }
}

/// Plain-text renderer used by the `list` command and headless mode
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl RowRenderer for TextRenderer {
    fn render_row(&mut self, row: &RowView, selected: bool) {
        let marker = if selected { '>' } else { ' ' };
        let lines = row.visible_text();
        let mut lines = lines.iter();

        if let Some(name) = lines.next() {
            let _ = writeln!(self.out, "{} [{}] {}", marker, row.indicator(), name);
        }
        for detail in lines {
            let _ = writeln!(self.out, "        {}", detail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use crate::presentation::{LayoutState, Transition};
    use std::time::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_renderer_shows_only_expanded_details() {
        let mut model = RowListModel::new(seed::default_people()).unwrap();
        model.toggle(1).unwrap();

        let controller = RowPresentationController::default();
        let views = build_views(&model, &controller, &HashMap::new(), Instant::now());

        let mut renderer = TextRenderer::new();
        render_rows(&views, None, &mut renderer);

        assert_eq!(
            renderer.finish(),
            "  [▾] Shawn\n\
             \x20 [▴] Bob\n\
             \x20       Age: 54\n\
             \x20       Favorite color: Red\n\
             \x20       Favorite movie: Saving Private Ryan\n\
             \x20 [▾] Susan\n"
        );
    }

    #[test]
    fn test_selected_row_is_marked() {
        let model = RowListModel::new(seed::default_people()).unwrap();
        let controller = RowPresentationController::default();
        let views = build_views(&model, &controller, &HashMap::new(), Instant::now());

        let mut renderer = TextRenderer::new();
        render_rows(&views, Some(2), &mut renderer);
        let text = renderer.finish();

        assert!(text.contains("> [▾] Susan"));
        assert!(text.contains("  [▾] Shawn"));
    }

    #[test]
    fn test_views_follow_identity_after_reorder() {
        let people = seed::default_people();
        let bob = people[1].id();

        // Same records in a different order: Bob's animation travels with him
        let reordered = vec![people[2].clone(), people[0].clone(), people[1].clone()];
        let mut model = RowListModel::new(reordered).unwrap();
        let bob_index = model.position_of(bob).unwrap();
        assert_eq!(bob_index, 2);
        model.toggle(bob_index).unwrap();

        let controller = RowPresentationController::default();
        let now = Instant::now();
        let mut animations = HashMap::new();
        animations.insert(
            bob,
            RowAnimation::start(&Transition::expanding(Duration::ZERO), now),
        );

        let views = build_views(&model, &controller, &animations, now);
        let expanded: Vec<_> = views
            .iter()
            .filter(|v| v.layout == LayoutState::Expanded)
            .map(|v| v.id)
            .collect();
        assert_eq!(expanded, vec![bob]);
        assert_eq!(views[bob_index].indicator(), '▴');
        assert_eq!(views[0].indicator(), '▾');
    }
}
