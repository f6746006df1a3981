// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui/crossterm:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, frame ticks)
// - Layered key dispatch: global keys, then the focused component

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::RowListModel;
use crate::presentation::RowPresentationController;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use theme::Theme;
use tokio::time::MissedTickBehavior;

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop and restores the terminal even
/// when the loop fails.
pub async fn run_tui(
    model: RowListModel,
    presenter: RowPresentationController,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(model, presenter, Theme::by_name(&config.theme), log_buffer);
    tracing::info!("Showing {} people", app.model.len());

    let result = run_event_loop(&mut terminal, &mut app, config.animation.frame_interval()).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Redraws only when something changed or an animation is running. The frame
/// ticker wakes the loop so animations advance without input.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()> {
    let mut frame_tick = tokio::time::interval(frame_interval);
    frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let now = Instant::now();
        app.tick(now);

        if app.needs_redraw || app.is_animating(now) {
            terminal
                .draw(|f| ui::draw(f, app, now))
                .context("Failed to draw terminal")?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            handle_key_event(app, key_event, Instant::now())
                        }
                        Ok(Event::Mouse(mouse_event)) => {
                            handle_mouse_event(app, mouse_event, Instant::now())
                        }
                        Ok(Event::Resize(_, _)) => app.needs_redraw = true,
                        _ => {}
                    }
                }
            } => {}

            _ = frame_tick.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Toggle → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {
            if handle_global_keys(app, key, now) {
                return;
            }

            if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
                if app.handle_key_press(key, now) {
                    app.toggle_selected(now);
                }
                return;
            }

            if app.handle_key_press(key, now) {
                app.dispatch_to_focused(key_event);
            }
        }
        KeyEventKind::Release => app.handle_key_release(key),
        _ => {}
    }
}

/// Global keys work regardless of focus; returns true if handled
fn handle_global_keys(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key, now) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('x') => {
            if app.handle_key_press(key, now) {
                app.expand_all(now);
            }
            true
        }
        KeyCode::Char('c') => {
            if app.handle_key_press(key, now) {
                app.collapse_all(now);
            }
            true
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key, now) {
                app.copy_selected(now);
            }
            true
        }
        KeyCode::Char('t') => {
            if app.handle_key_press(key, now) {
                app.cycle_theme();
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input
///
/// A left click on a card selects and toggles it; the wheel moves the
/// selection.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent, now: Instant) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = app.card_list.hit_test(mouse_event.column, mouse_event.row) {
                app.toggle_person(id, now);
            }
        }
        MouseEventKind::ScrollUp => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollDown => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(
            RowListModel::new(seed::default_people()).unwrap(),
            RowPresentationController::default(),
            Theme::dark(),
            LogBuffer::new(),
        );
        let views = app.views(Instant::now());
        app.card_list.sync(Rect::new(0, 0, 40, 20), &views);
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_toggles_selected_row() {
        let mut app = app();
        let t0 = Instant::now();

        handle_key_event(&mut app, press(KeyCode::Down), t0);
        handle_key_event(&mut app, press(KeyCode::Enter), t0);

        assert_eq!(app.model.is_expanded(1), Ok(true));
        assert_eq!(app.model.expanded_count(), 1);
    }

    #[test]
    fn test_held_enter_does_not_flap() {
        let mut app = app();
        let t0 = Instant::now();

        handle_key_event(&mut app, press(KeyCode::Enter), t0);
        handle_key_event(&mut app, press(KeyCode::Enter), t0 + Duration::from_millis(30));
        assert_eq!(app.model.is_expanded(0), Ok(true));

        handle_key_event(&mut app, release(KeyCode::Enter), t0 + Duration::from_millis(40));
        handle_key_event(&mut app, press(KeyCode::Enter), t0 + Duration::from_millis(50));
        assert_eq!(app.model.is_expanded(0), Ok(false));
    }

    #[test]
    fn test_click_toggles_card_under_cursor() {
        let mut app = app();
        let t0 = Instant::now();

        // Bob's card starts after Shawn's (rows 1-3) and a spacing row
        handle_mouse_event(&mut app, click(10, 6), t0);
        assert_eq!(app.card_list.selected, 1);
        assert_eq!(app.model.is_expanded(1), Ok(true));

        // spacing between cards is not a hit
        handle_mouse_event(&mut app, click(10, 4), t0);
        assert_eq!(app.model.expanded_count(), 1);
    }

    #[test]
    fn test_global_keys() {
        let mut app = app();
        let t0 = Instant::now();

        handle_key_event(&mut app, press(KeyCode::Char('x')), t0);
        assert_eq!(app.model.expanded_count(), 3);

        handle_key_event(&mut app, press(KeyCode::Char('c')), t0);
        assert_eq!(app.model.expanded_count(), 0);

        handle_key_event(&mut app, press(KeyCode::Char('q')), t0);
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_moves_selection() {
        let mut app = app();
        let t0 = Instant::now();
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown), t0);
        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown), t0);
        assert_eq!(app.card_list.selected, 2);

        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollUp), t0);
        assert_eq!(app.card_list.selected, 1);
        assert_eq!(app.model.expanded_count(), 0);
    }
}
