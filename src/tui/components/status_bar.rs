// Status bar component
//
// Key hints on the left, the most recent log line (local time, level,
// message) on the right.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusBar {
    /// Hint from the focused component
    pub hint: Option<&'static str>,
    pub latest_log: Option<LogEntry>,
}

impl StatusBar {
    fn hints(&self, bp: Breakpoint) -> String {
        let focus = self.hint.unwrap_or("");
        if bp.at_least(Breakpoint::Normal) {
            format!(
                " {}  x expand all  c collapse all  y copy  t theme  q quit",
                focus
            )
        } else {
            " ⏎ toggle  q quit".to_string()
        }
    }

    fn log_prefix(entry: &LogEntry) -> String {
        format!(
            "{} {} ",
            entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            entry.level.as_str()
        )
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let bp = Breakpoint::from_width(area.width);

        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let show_log = bp.at_least(Breakpoint::Wide) && self.latest_log.is_some();
        let [hint_area, log_area] = if show_log {
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(inner)
        } else {
            [inner, Rect::default()]
        };

        let hints = Paragraph::new(self.hints(bp)).style(Style::default().fg(theme.status_bar));
        f.render_widget(hints, hint_area);

        if let (true, Some(entry)) = (show_log, &self.latest_log) {
            let color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                _ => theme.muted,
            };
            let line = Line::from(vec![
                Span::styled(Self::log_prefix(entry), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(theme.muted)),
            ])
            .right_aligned();
            f.render_widget(Paragraph::new(line), log_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_hints_shrink_on_narrow_terminals() {
        let bar = StatusBar {
            hint: Some("↑↓ select  ⏎ toggle"),
            latest_log: None,
        };
        assert!(bar.hints(Breakpoint::Wide).contains("x expand all"));
        assert!(bar.hints(Breakpoint::Wide).contains("↑↓ select"));
        assert!(!bar.hints(Breakpoint::Compact).contains("expand all"));
    }

    #[test]
    fn test_log_prefix_shows_local_time_and_level() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let entry = LogEntry {
            timestamp,
            level: LogLevel::Warn,
            message: "Ignoring toggle".to_string(),
        };
        let local = timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();

        assert_eq!(StatusBar::log_prefix(&entry), format!("{} WARN ", local));
    }
}
