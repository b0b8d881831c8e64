//! Field rendering utilities for the builder controls

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn titled_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw a free-text field
pub fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if field.value.is_empty() && !is_active {
        vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        field
            .value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    };

    if is_active {
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_block(&field.label, is_active));
    frame.render_widget(paragraph, area);
}

/// Draw a single-choice selector showing the current value between arrows
pub fn draw_choice_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(titled_block(label, is_active)),
        area,
    );
}

/// Draw a radio group with one selected option
pub fn draw_radio_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    is_active: bool,
) {
    let mut spans = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        let is_selected = idx == selected;
        let marker = if is_selected { "(•) " } else { "( ) " };
        let style = if is_selected && is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{marker}{option}"), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(titled_block(label, is_active)),
        area,
    );
}

/// Draw a checkbox field
pub fn draw_checkbox_field(frame: &mut Frame, area: Rect, label: &str, checked: bool, focused: bool) {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    let display = format!("{checkbox} {label}");

    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    frame.render_widget(Paragraph::new(display).style(style).block(block), area);
}
