use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::StudyMode;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, mode: StudyMode, tick: usize) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let content = vec![
        Line::from(Span::styled(
            spinner,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Generating".fg(Color::White).bold()),
        Line::from(mode.label().fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("esc cancel  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}
