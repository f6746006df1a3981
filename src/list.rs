//! One-shot output for `peoplecards list` and runs without a terminal UI
//!
//! Rows are drawn settled; there is nothing to animate in a single frame.

use crate::model::{Record, RowListModel};
use crate::presentation::{
    build_views, render_rows, LayoutState, RowPresentationController, TextRenderer,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// Expand the given rows, leaving already-open rows open
///
/// Indices past the end are logged and skipped.
pub fn apply_expansions(model: &mut RowListModel, indices: &[usize]) {
    for &index in indices {
        match model.is_expanded(index) {
            Ok(false) => {
                if let Err(e) = model.toggle(index) {
                    tracing::warn!("Skipping --expand {}: {}", index, e);
                }
            }
            Ok(true) => {}
            Err(e) => tracing::warn!("Skipping --expand {}: {}", index, e),
        }
    }
}

pub fn render_text(model: &RowListModel, presenter: &RowPresentationController) -> String {
    let views = build_views(model, presenter, &HashMap::new(), Instant::now());
    let mut renderer = TextRenderer::new();
    render_rows(&views, None, &mut renderer);
    renderer.finish()
}

#[derive(Serialize)]
struct ListedRow<'a> {
    index: usize,
    #[serde(flatten)]
    record: &'a Record,
    expanded: bool,
    layout: LayoutState,
    visible: Vec<String>,
}

pub fn render_json(model: &RowListModel, presenter: &RowPresentationController) -> Result<String> {
    let views = build_views(model, presenter, &HashMap::new(), Instant::now());
    let rows: Vec<ListedRow> = model
        .iter()
        .zip(&views)
        .map(|((index, record, row), view)| ListedRow {
            index,
            record,
            expanded: row.expanded(),
            layout: view.layout,
            visible: view.visible_text(),
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("Failed to serialize rows")
}
