//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::catalog::FOOTER_CAPTION;
use crate::state::BuilderField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the controls column
const CONTROLS_WIDTH: u16 = 42;

/// Screen regions for one frame
pub struct PageAreas {
    pub header: Rect,
    pub controls: Rect,
    pub preview: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into header, controls, preview, footer and status bar
pub fn create_layout(area: Rect) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Min(0),    // Controls | preview
            Constraint::Length(1), // Footer caption
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    PageAreas {
        header: rows[0],
        controls: columns[0],
        preview: columns[1],
        footer: rows[2],
        status: rows[3],
    }
}

/// Draw the page title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " SmartDoc Builder",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Generate medical forms with AI",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, area);
}

/// Draw the privacy caption
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Span::styled(
        format!(" {FOOTER_CAPTION}"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Generation mode
    let mode = if app.state.form.demo_mode {
        Span::styled(" DEMO ", Style::default().fg(Color::Black).bg(Color::Yellow))
    } else {
        Span::styled(" LIVE ", Style::default().fg(Color::Black).bg(Color::Green))
    };
    spans.push(mode);
    spans.push(Span::raw(" "));

    let hints = get_hints(app.state.form.active);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    } else if !app.state.form.demo_mode {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            app.client_description(),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn get_hints(active: BuilderField) -> &'static str {
    match active {
        BuilderField::FormType | BuilderField::Tone => "Tab:next  ←/→:change  PgUp/PgDn:scroll",
        BuilderField::Description => "Tab:next  Enter:newline  type to describe",
        BuilderField::DemoMode => "Tab:next  Space:toggle",
        BuilderField::Generate => "Tab:next  Enter:generate  Esc:clear",
    }
}
