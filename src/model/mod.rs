//! Row list model - ordered records plus per-row expansion state
//!
//! Expansion state lives here, keyed by record identity, and never on a
//! rendering surface. Renderers are rebuilt from this model every frame, so a
//! recycled card cannot carry another row's expanded flag.
//!
//! Expansion is independent per row: opening one card never closes another.

mod record;
pub mod seed;

pub use record::{Record, RecordId};

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by [`RowListModel`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Initialization input was rejected (duplicate identifiers)
    #[error("invalid input: record id {0} appears more than once")]
    InvalidInput(RecordId),

    /// A row index outside `[0, count)`
    #[error("row index {index} is out of range (row count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Per-row expansion state, co-indexed with the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    id: RecordId,
    expanded: bool,
}

impl RowState {
    fn collapsed(id: RecordId) -> Self {
        Self {
            id,
            expanded: false,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }
}

/// Ordered records and their expanded/collapsed flags
///
/// `rows[i]` always describes `records[i]`; neither vector changes length after
/// construction.
#[derive(Debug, Clone)]
pub struct RowListModel {
    records: Vec<Record>,
    rows: Vec<RowState>,
}

impl RowListModel {
    /// Build the model with every row collapsed
    ///
    /// Fails with [`ModelError::InvalidInput`] if two records share an id.
    pub fn new(records: Vec<Record>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ModelError::InvalidInput(record.id()));
            }
        }

        let rows = records
            .iter()
            .map(|r| RowState::collapsed(r.id()))
            .collect();

        Ok(Self { records, rows })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flip the expanded flag of one row and return the new value
    ///
    /// Only the targeted row changes. On error nothing changes.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ModelError> {
        self.check(index)?;
        let row = &mut self.rows[index];
        row.expanded = !row.expanded;

        tracing::debug!(
            index,
            id = %row.id,
            expanded = row.expanded,
            "Row toggled"
        );

        Ok(row.expanded)
    }

    pub fn is_expanded(&self, index: usize) -> Result<bool, ModelError> {
        self.check(index)?;
        Ok(self.rows[index].expanded)
    }

    pub fn record_at(&self, index: usize) -> Result<&Record, ModelError> {
        self.check(index)?;
        Ok(&self.records[index])
    }

    /// Index of the row holding `id`
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn expanded_count(&self) -> usize {
        self.rows.iter().filter(|r| r.expanded).count()
    }

    /// Iterate `(index, record, row state)` in list order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record, &RowState)> {
        self.records
            .iter()
            .zip(self.rows.iter())
            .enumerate()
            .map(|(i, (record, row))| (i, record, row))
    }

    /// Toggle every expanded row closed; returns the indices that changed
    pub fn collapse_all(&mut self) -> Vec<usize> {
        self.set_all(false)
    }

    /// Toggle every collapsed row open; returns the indices that changed
    pub fn expand_all(&mut self) -> Vec<usize> {
        self.set_all(true)
    }

    fn set_all(&mut self, expanded: bool) -> Vec<usize> {
        let targets: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.expanded != expanded)
            .map(|(i, _)| i)
            .collect();

        for &index in &targets {
            let row = &mut self.rows[index];
            row.expanded = expanded;
            tracing::debug!(index, id = %row.id, expanded, "Row toggled");
        }
        targets
    }

    fn check(&self, index: usize) -> Result<(), ModelError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfRange {
                index,
                count: self.rows.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model() -> RowListModel {
        RowListModel::new(seed::default_people()).unwrap()
    }

    fn flags(model: &RowListModel) -> Vec<bool> {
        model.iter().map(|(_, _, row)| row.expanded()).collect()
    }

    #[test]
    fn test_new_starts_collapsed() {
        let model = model();
        assert_eq!(model.len(), 3);
        assert_eq!(flags(&model), vec![false, false, false]);
        assert_eq!(model.expanded_count(), 0);
    }

    #[test]
    fn test_rows_follow_record_order() {
        let model = model();
        for (i, record, row) in model.iter() {
            assert_eq!(record.id(), row.id());
            assert_eq!(model.position_of(record.id()), Some(i));
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let first = Record::new("Shawn", 31, "Blue", "Dinner For Schmucks");
        let clone = Record::with_id(first.id(), "Other", 1, "Grey", "None");
        let err = RowListModel::new(vec![first.clone(), clone]).unwrap_err();
        assert_eq!(err, ModelError::InvalidInput(first.id()));
    }

    #[test]
    fn test_empty_model_is_valid() {
        let mut model = RowListModel::new(Vec::new()).unwrap();
        assert!(model.is_empty());
        assert_eq!(
            model.toggle(0),
            Err(ModelError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_double_toggle_is_involution() {
        let mut model = model();
        for index in 0..model.len() {
            let before = model.is_expanded(index).unwrap();
            model.toggle(index).unwrap();
            model.toggle(index).unwrap();
            assert_eq!(model.is_expanded(index).unwrap(), before);
        }
    }

    #[test]
    fn test_single_toggle_is_not_idempotent() {
        let mut model = model();
        assert_eq!(model.toggle(0), Ok(true));
        assert_eq!(model.toggle(0), Ok(false));
    }

    #[test]
    fn test_toggle_leaves_other_rows_alone() {
        let mut model = model();
        model.toggle(0).unwrap();

        for a in 0..model.len() {
            let before = flags(&model);
            model.toggle(a).unwrap();
            let after = flags(&model);
            for b in (0..model.len()).filter(|&b| b != a) {
                assert_eq!(before[b], after[b], "toggling {} changed {}", a, b);
            }
        }
    }

    #[test]
    fn test_open_row_stays_open_when_another_opens() {
        let mut model = model();
        model.toggle(0).unwrap();
        model.toggle(2).unwrap();
        assert_eq!(flags(&model), vec![true, false, true]);
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut model = model();
        model.toggle(1).unwrap();
        let before = flags(&model);

        let count = model.len();
        assert_eq!(
            model.toggle(count),
            Err(ModelError::IndexOutOfRange { index: count, count })
        );
        assert_eq!(
            model.toggle(usize::MAX),
            Err(ModelError::IndexOutOfRange {
                index: usize::MAX,
                count
            })
        );
        assert_eq!(flags(&model), before);

        assert!(model.is_expanded(count).is_err());
        assert!(model.record_at(count).is_err());
    }

    #[test]
    fn test_lookup_by_identity() {
        let mut model = model();
        let bob = model.record_at(1).unwrap().id();
        assert_eq!(model.position_of(bob), Some(1));
        model.toggle(1).unwrap();
        assert_eq!(model.position_of(bob), Some(1));
        assert_eq!(model.position_of(RecordId::new()), None);
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let mut model = model();
        model.toggle(1).unwrap();

        assert_eq!(model.expand_all(), vec![0, 2]);
        assert_eq!(flags(&model), vec![true, true, true]);

        model.toggle(0).unwrap();
        assert_eq!(model.collapse_all(), vec![1, 2]);
        assert_eq!(flags(&model), vec![false, false, false]);
    }

    #[test]
    fn test_bulk_helpers_are_idempotent() {
        let mut model = model();

        assert_eq!(model.collapse_all(), Vec::<usize>::new());
        assert_eq!(flags(&model), vec![false, false, false]);

        assert_eq!(model.expand_all(), vec![0, 1, 2]);
        assert_eq!(model.expand_all(), Vec::<usize>::new());
        assert_eq!(model.expanded_count(), 3);

        // a single toggle after a bulk change still flips only its row
        assert_eq!(model.toggle(1), Ok(false));
        assert_eq!(flags(&model), vec![true, false, true]);
    }

    #[test]
    fn test_bob_scenario() {
        let mut model = model();
        assert_eq!(flags(&model), vec![false, false, false]);

        model.toggle(1).unwrap();
        assert_eq!(model.record_at(1).unwrap().name(), "Bob");
        assert_eq!(model.is_expanded(1), Ok(true));
        assert_eq!(model.is_expanded(0), Ok(false));
        assert_eq!(model.is_expanded(2), Ok(false));

        model.toggle(1).unwrap();
        assert_eq!(model.is_expanded(1), Ok(false));
    }
}
