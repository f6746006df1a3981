// TUI application state
//
// Owns the row model and the per-row chevron animations. Animations are keyed
// by record id, so they follow a person rather than a screen position.

use super::clipboard::copy_to_clipboard;
use super::components::{CardListPanel, Toast};
use super::input::InputHandler;
use super::theme::Theme;
use super::traits::{ComponentId, Handled, Interactive};
use crate::logging::LogBuffer;
use crate::model::{RecordId, RowListModel};
use crate::presentation::{build_views, RowAnimation, RowPresentationController, RowView};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// Records and their expansion flags
    pub model: RowListModel,

    presenter: RowPresentationController,

    /// Running (or just finished) chevron animations
    animations: HashMap<RecordId, RowAnimation>,

    pub card_list: CardListPanel,

    /// Which component receives navigation keys
    pub focus: ComponentId,

    pub theme: Theme,

    /// Log buffer feeding the status bar
    pub log_buffer: LogBuffer,

    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// Set when something changed that the next frame must show
    pub needs_redraw: bool,

    input_handler: InputHandler,
}

impl App {
    pub fn new(
        model: RowListModel,
        presenter: RowPresentationController,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            model,
            presenter,
            animations: HashMap::new(),
            card_list: CardListPanel::new(),
            focus: ComponentId::CardList,
            theme,
            log_buffer,
            toast: None,
            should_quit: false,
            needs_redraw: true,
            input_handler: InputHandler::default(),
        }
    }

    /// Flip a row and animate its chevron toward the new state
    ///
    /// An out-of-range index is logged and otherwise ignored.
    pub fn toggle_row(&mut self, index: usize, now: Instant) -> Option<bool> {
        match self.model.toggle(index) {
            Ok(expanded) => {
                self.start_transition(index, expanded, now);
                self.needs_redraw = true;
                Some(expanded)
            }
            Err(e) => {
                tracing::warn!("Ignoring toggle: {}", e);
                None
            }
        }
    }

    /// Select and flip the row holding `id`, wherever it sits in the list
    pub fn toggle_person(&mut self, id: RecordId, now: Instant) -> Option<bool> {
        let Some(index) = self.model.position_of(id) else {
            tracing::warn!("Ignoring toggle: no row for {}", id);
            return None;
        };
        self.card_list.selected = index;
        self.toggle_row(index, now)
    }

    pub fn toggle_selected(&mut self, now: Instant) -> Option<bool> {
        if self.model.is_empty() {
            return None;
        }
        self.toggle_row(self.card_list.selected, now)
    }

    pub fn expand_all(&mut self, now: Instant) {
        let changed = self.model.expand_all();
        tracing::info!("Expanded {} cards", changed.len());
        for index in changed {
            self.start_transition(index, true, now);
        }
        self.needs_redraw = true;
    }

    pub fn collapse_all(&mut self, now: Instant) {
        let changed = self.model.collapse_all();
        tracing::info!("Collapsed {} cards", changed.len());
        for index in changed {
            self.start_transition(index, false, now);
        }
        self.needs_redraw = true;
    }

    /// A toggle that interrupts a running animation continues from the
    /// chevron's current angle instead of jumping.
    fn start_transition(&mut self, index: usize, expanded: bool, now: Instant) {
        let Ok(record) = self.model.record_at(index) else {
            return;
        };
        let transition = self.presenter.transition_to(expanded);
        self.animations
            .entry(record.id())
            .and_modify(|anim| anim.retarget(&transition, now))
            .or_insert_with(|| RowAnimation::start(&transition, now));
    }

    /// Row views for a frame at `now`
    pub fn views(&self, now: Instant) -> Vec<RowView> {
        build_views(&self.model, &self.presenter, &self.animations, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animations.values().any(|anim| anim.is_running(now))
    }

    /// Drop finished animations and expired toasts
    pub fn tick(&mut self, now: Instant) {
        let before = self.animations.len();
        self.animations.retain(|_, anim| anim.is_running(now));
        if self.animations.len() != before {
            self.needs_redraw = true;
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            self.needs_redraw = true;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.kind.next().theme();
        tracing::info!("Theme: {}", self.theme.kind.name());
        self.needs_redraw = true;
    }

    /// All four lines of the selected card, whether or not it is open
    pub fn selected_text(&self) -> Option<String> {
        let record = self.model.record_at(self.card_list.selected).ok()?;
        Some(self.presenter.content_for(record).lines().join("\n"))
    }

    pub fn copy_selected(&mut self, now: Instant) {
        let Some(text) = self.selected_text() else {
            return;
        };
        let message = match copy_to_clipboard(&text) {
            Ok(()) => "📋 Copied card".to_string(),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                "Clipboard unavailable".to_string()
            }
        };
        self.toast = Some(Toast::new(message, now));
        self.needs_redraw = true;
    }

    /// Route a key to the focused component
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focus {
            ComponentId::CardList => {
                let handled = self.card_list.handle_key(key);
                if handled.was_handled() {
                    self.needs_redraw = true;
                }
                handled
            }
        }
    }

    /// Handle a key press; true if the action should fire
    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) -> bool {
        self.input_handler.handle_key_press(key, now)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use crate::presentation::{LayoutState, EXPANDED_ANGLE};
    use std::time::Duration;

    fn app() -> App {
        let model = RowListModel::new(seed::default_people()).unwrap();
        App::new(
            model,
            RowPresentationController::default(),
            Theme::dark(),
            LogBuffer::new(),
        )
    }

    #[test]
    fn test_toggle_row_flips_only_that_row() {
        let mut app = app();
        let t0 = Instant::now();

        assert_eq!(app.toggle_row(1, t0), Some(true));

        let views = app.views(t0 + Duration::from_secs(1));
        let layouts: Vec<LayoutState> = views.iter().map(|v| v.layout).collect();
        assert_eq!(
            layouts,
            vec![
                LayoutState::Collapsed,
                LayoutState::Expanded,
                LayoutState::Collapsed
            ]
        );
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut app = app();
        let t0 = Instant::now();

        assert_eq!(app.toggle_row(3, t0), None);
        assert_eq!(app.toggle_row(usize::MAX, t0), None);
        assert_eq!(app.model.expanded_count(), 0);
        assert!(!app.is_animating(t0));
    }

    #[test]
    fn test_toggle_person_finds_row_by_identity() {
        let mut app = app();
        let t0 = Instant::now();
        let susan = app.model.record_at(2).unwrap().id();

        assert_eq!(app.toggle_person(susan, t0), Some(true));
        assert_eq!(app.card_list.selected, 2);
        assert_eq!(app.model.is_expanded(2), Ok(true));

        assert_eq!(app.toggle_person(RecordId::new(), t0), None);
        assert_eq!(app.card_list.selected, 2);
        assert_eq!(app.model.expanded_count(), 1);
    }

    #[test]
    fn test_toggle_animates_then_settles() {
        let mut app = app();
        let t0 = Instant::now();
        app.toggle_row(0, t0);

        let mid = app.views(t0 + Duration::from_millis(150));
        assert!(mid[0].is_animating());
        assert!(app.is_animating(t0 + Duration::from_millis(150)));

        let end = t0 + Duration::from_millis(400);
        app.tick(end);
        assert!(!app.is_animating(end));
        let settled = app.views(end);
        assert!((settled[0].indicator_angle - EXPANDED_ANGLE).abs() < 1e-9);
        assert_eq!(settled[0].visible_fields, 4);
    }

    #[test]
    fn test_rapid_retoggle_reverses_from_current_angle() {
        let mut app = app();
        let t0 = Instant::now();
        app.toggle_row(0, t0);

        let t1 = t0 + Duration::from_millis(150);
        let angle_at_interrupt = app.views(t1)[0].indicator_angle;
        assert_eq!(app.toggle_row(0, t1), Some(false));

        let just_after = app.views(t1)[0].indicator_angle;
        assert!((just_after - angle_at_interrupt).abs() < 1e-9);
        assert_eq!(app.views(t1)[0].layout, LayoutState::Collapsed);

        let done = t1 + Duration::from_millis(300);
        assert_eq!(app.views(done)[0].indicator_angle, 0.0);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut app = app();
        let t0 = Instant::now();
        app.toggle_row(2, t0);

        app.expand_all(t0);
        assert_eq!(app.model.expanded_count(), 3);

        app.collapse_all(t0 + Duration::from_millis(50));
        assert_eq!(app.model.expanded_count(), 0);
        assert!(app.is_animating(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_selected_text_includes_all_fields() {
        let mut app = app();
        app.card_list.selected = 1;

        assert_eq!(
            app.selected_text().as_deref(),
            Some("Bob\nAge: 54\nFavorite color: Red\nFavorite movie: Saving Private Ryan")
        );
    }

    #[test]
    fn test_tick_expires_toast() {
        let mut app = app();
        let t0 = Instant::now();
        app.toast = Some(Toast::new("hi", t0));
        app.needs_redraw = false;

        app.tick(t0 + Duration::from_secs(3));
        assert!(app.toast.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme.kind, crate::tui::theme::ThemeKind::Light);
    }
}
