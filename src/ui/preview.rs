//! Output pane: the rendered form, or the trigger's error

use crate::app::App;
use crate::catalog::DEMO_DISCLAIMER;
use crate::controller::{ControllerPhase, RenderOutcome};
use crate::platform::{COPY_HTML_SHORTCUT, COPY_LINK_SHORTCUT, EXPORT_SHORTCUT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the preview pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (title, content) = match &app.state.phase {
        ControllerPhase::Idle => (" Preview ".to_string(), idle_lines()),
        ControllerPhase::Generating(selection) => (
            format!(" Preview - {} ", selection.form_type),
            vec![Line::from(Span::styled(
                if selection.demo_mode {
                    "Loading sample..."
                } else {
                    "Generating form..."
                },
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))],
        ),
        ControllerPhase::Rendered(outcome) => {
            let title = match outcome.form_type() {
                Some(form_type) => format!(" Preview - {form_type} "),
                None => " Preview ".to_string(),
            };
            (title, outcome_lines(outcome))
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(app.state.outcome()))),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, area);
}

fn border_color(outcome: Option<&RenderOutcome>) -> Color {
    match outcome {
        Some(outcome) if outcome.is_error() => Color::Red,
        _ => Color::Cyan,
    }
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Choose a form type and tone, then press Generate.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Turn on demo mode to view a built-in sample without calling the API.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn outcome_lines(outcome: &RenderOutcome) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match outcome {
        RenderOutcome::Failed { .. } => {
            for line in outcome.render().lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Red),
                )));
            }
            return lines;
        }
        RenderOutcome::Demo { html, .. } => {
            lines.extend(html.lines().map(highlight_markup));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                DEMO_DISCLAIMER,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        RenderOutcome::Generated { html, .. } => {
            lines.extend(html.lines().map(highlight_markup));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(link) = outcome.download_link() {
        lines.push(Line::from(vec![
            Span::styled("Download: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                link,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  ({COPY_LINK_SHORTCUT} to copy)"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(EXPORT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": export printable HTML  "),
        Span::styled(COPY_HTML_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": copy HTML"),
    ]));

    lines
}

/// Style one line of markup: tags dimmed, text left as-is.
///
/// Only affects colour; the characters are the HTML exactly as given.
fn highlight_markup(line: &str) -> Line<'static> {
    let tag_style = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find('<') {
        if start > 0 {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        let tail = &rest[start..];
        match tail.find('>') {
            Some(end) => {
                spans.push(Span::styled(tail[..=end].to_string(), tag_style));
                rest = &tail[end + 1..];
            }
            None => {
                spans.push(Span::raw(tail.to_string()));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    Line::from(spans)
}
