use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::StudyMode;

pub fn render(frame: &mut Frame, area: Rect, app: &App, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], &app.document_name);
    render_preview(frame, chunks[1], &app.preview);
    render_options(frame, chunks[2], cursor);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, document_name: &str) {
    let content = vec![
        Line::from(Span::styled(
            "ZAPIO",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(document_name.fg(Color::White)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_preview(frame: &mut Frame, area: Rect, preview: &str) {
    let widget = Paragraph::new(preview)
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" DOCUMENT PREVIEW ")
                .title_style(Style::default().fg(Color::DarkGray).bold())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, cursor: usize) {
    let mut lines: Vec<Line> = vec![Line::from("What would you like to generate?".fg(Color::White)), Line::from("")];

    for (index, mode) in StudyMode::ALL.iter().enumerate() {
        let is_selected = index == cursor;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(mode.label(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter generate  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
