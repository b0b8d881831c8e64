//! Builder controls panel (left column)

use super::components::{render_button, BUTTON_HEIGHT};
use super::fields::{draw_checkbox_field, draw_choice_field, draw_radio_field, draw_text_field};
use crate::app::App;
use crate::catalog::ToneOption;
use crate::platform::GENERATE_SHORTCUT;
use crate::state::BuilderField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the controls
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let show_description = form.is_description_visible();

    let mut constraints = vec![
        Constraint::Length(3), // Form type
        Constraint::Length(3), // Tone
    ];
    if show_description {
        constraints.push(Constraint::Min(5)); // Description
    }
    constraints.extend([
        Constraint::Length(3),             // Demo mode
        Constraint::Length(BUTTON_HEIGHT), // Generate
        Constraint::Min(0),                // Help text
    ]);

    let block = Block::default()
        .title(" Form Options ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let mut idx = 0;
    let mut next_chunk = || {
        let chunk = chunks[idx];
        idx += 1;
        chunk
    };

    draw_choice_field(
        frame,
        next_chunk(),
        "Select a form type",
        form.form_type.label(),
        form.active == BuilderField::FormType,
    );

    let tone_labels: Vec<&str> = ToneOption::ALL.iter().map(|t| t.label()).collect();
    let selected_tone = ToneOption::ALL
        .iter()
        .position(|t| *t == form.tone)
        .unwrap_or(0);
    draw_radio_field(
        frame,
        next_chunk(),
        "Select tone",
        &tone_labels,
        selected_tone,
        form.active == BuilderField::Tone,
    );

    if show_description {
        draw_text_field(
            frame,
            next_chunk(),
            &form.description,
            form.active == BuilderField::Description,
        );
    }

    draw_checkbox_field(
        frame,
        next_chunk(),
        "Demo mode (static sample, no API call)",
        form.demo_mode,
        form.active == BuilderField::DemoMode,
    );

    let generating = app.state.phase.is_generating();
    let label = if generating {
        "Generating form...".to_string()
    } else {
        format!("Generate Form ({GENERATE_SHORTCUT})")
    };
    render_button(
        frame,
        next_chunk(),
        &label,
        form.active == BuilderField::Generate,
        !generating,
    );

    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next control  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": clear output"),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, next_chunk());
}
