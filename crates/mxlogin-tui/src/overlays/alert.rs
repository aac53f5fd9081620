//! Terminal-outcome alert overlay.
//!
//! One blocking dialog per submission outcome: success (with the session
//! cookie, shown once), rejection, or transport failure. Enter or Esc
//! dismisses it and returns the form to idle.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{calculate_overlay_area, render_overlay_container};

/// Which outcome the alert reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    /// 2xx response. The cookie is displayed here and nowhere else; it is
    /// dropped with the alert, never stored.
    Success { session_cookie: Option<String> },
    /// Non-2xx response. Deliberately generic, no per-cause detail.
    Rejected,
    /// Network-level failure (DNS, refused connection, aborted).
    ConnectionFailed,
}

/// State of the open alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub kind: AlertKind,
}

impl AlertState {
    pub fn new(kind: AlertKind) -> Self {
        Self { kind }
    }

    /// Handles a key press while the alert is open. Returns true when the
    /// alert should close.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc)
    }

    fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Success { .. } => "Login successful",
            AlertKind::Rejected => "Login failed",
            AlertKind::ConnectionFailed => "Connection error",
        }
    }

    fn border_color(&self) -> Color {
        match self.kind {
            AlertKind::Success { .. } => Color::Green,
            AlertKind::Rejected | AlertKind::ConnectionFailed => Color::Red,
        }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        match &self.kind {
            AlertKind::Success { session_cookie } => {
                let mut lines = vec![Line::from("")];
                match session_cookie {
                    Some(cookie) => {
                        lines.push(Line::from(Span::styled(
                            "Session cookie:",
                            Style::default().fg(Color::White),
                        )));
                        lines.push(Line::from(Span::styled(
                            cookie.clone(),
                            Style::default().fg(Color::Green),
                        )));
                    }
                    None => {
                        lines.push(Line::from(Span::styled(
                            "No session cookie returned.",
                            Style::default().fg(Color::Yellow),
                        )));
                    }
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "The cookie is shown once and not retained.",
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            AlertKind::Rejected => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Incorrect credentials.",
                    Style::default().fg(Color::Red),
                )),
            ],
            AlertKind::ConnectionFailed => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Unable to connect to the server.",
                    Style::default().fg(Color::Red),
                )),
            ],
        }
    }

    /// Renders the alert centered over the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_width = 56;
        let popup_height = 9;
        let popup_area = calculate_overlay_area(area, popup_width, popup_height);

        render_overlay_container(frame, popup_area, self.title(), self.border_color());

        let inner = Rect::new(
            popup_area.x + 2,
            popup_area.y + 1,
            popup_area.width.saturating_sub(4),
            popup_area.height.saturating_sub(2),
        );

        let mut lines = self.body_lines();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn enter_and_esc_close_the_alert() {
        let alert = AlertState::new(AlertKind::Rejected);
        assert!(alert.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(alert.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!alert.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn success_body_contains_the_cookie() {
        let alert = AlertState::new(AlertKind::Success {
            session_cookie: Some("sid=abc123".to_string()),
        });
        let text: String = alert
            .body_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("sid=abc123"));
        assert!(text.contains("not retained"));
    }
}
