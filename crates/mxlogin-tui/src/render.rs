//! Pure view/render functions for the login screen.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, FieldState, Focus};

/// Width of the centered form column.
const FORM_WIDTH: u16 = 48;

/// Mask character for password echo.
const MASK: char = '•';

/// Spinner frames for the in-flight submit button.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire login screen to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let form_area = centered_form_area(area);
    render_form(state, frame, form_area);

    // Status line at the very bottom.
    let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
    render_status_line(state, frame, status);

    if let Some(alert) = &state.alert {
        alert.render(frame, area);
    }
}

/// Centers the fixed-width form column in the available area.
fn centered_form_area(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    // Title + 2 fields (3 rows each + error row) + button row
    let height = 14.min(area.height);
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_form(state: &AppState, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // username field
            Constraint::Length(1), // username error
            Constraint::Length(3), // password field
            Constraint::Length(1), // password error
            Constraint::Length(1), // spacer
            Constraint::Length(3), // submit button
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Maximo Login",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    render_field(
        frame,
        rows[1],
        "Username",
        &state.form.username,
        state.form.focus == Focus::Username,
        false,
    );
    render_field_error(frame, rows[2], &state.form.username);

    render_field(
        frame,
        rows[3],
        "Password",
        &state.form.password,
        state.form.focus == Focus::Password,
        true,
    );
    render_field_error(frame, rows[4], &state.form.password);

    render_submit_button(state, frame, rows[6]);
}

/// Renders one bordered input field, placing the terminal cursor at the end
/// of the value when the field has focus.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FieldState,
    focused: bool,
    masked: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {label} "));

    let echo = if masked {
        MASK.to_string().repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };

    // Keep the tail visible when the value outgrows the field.
    let inner_width = area.width.saturating_sub(2) as usize;
    let display: String = if echo.width() >= inner_width && inner_width > 0 {
        let mut tail = String::new();
        let mut width = 0;
        for c in echo.chars().rev() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if width + w >= inner_width {
                break;
            }
            width += w;
            tail.insert(0, c);
        }
        tail
    } else {
        echo
    };

    let para = Paragraph::new(display.clone()).block(block);
    frame.render_widget(para, area);

    if focused {
        frame.set_cursor_position((area.x + 1 + display.width() as u16, area.y + 1));
    }
}

fn render_field_error(frame: &mut Frame, area: Rect, field: &FieldState) {
    if let Some(error) = &field.error {
        let para = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(para, area);
    }
}

fn render_submit_button(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.form.focus == Focus::Submit;
    let submitting = state.submission.is_submitting();

    let label = if submitting {
        let spinner = SPINNER_FRAMES[state.spinner_frame as usize % SPINNER_FRAMES.len()];
        format!("{spinner} Connecting…")
    } else {
        "Log in".to_string()
    };

    let (fg, border) = if submitting {
        (Color::Yellow, Color::Yellow)
    } else if focused {
        (Color::Black, Color::Cyan)
    } else {
        (Color::White, Color::DarkGray)
    };

    let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    if focused && !submitting {
        style = style.bg(Color::Cyan);
    }

    let para = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(para, area);
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let hint = if state.submission.is_submitting() {
        "Submitting…  Ctrl+C quit"
    } else {
        "Tab switch field  Enter submit  Esc quit"
    };
    let para = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(para, area);
}
