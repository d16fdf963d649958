use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Flashcard;

pub fn render(frame: &mut Frame, area: Rect, cards: &[Flashcard], index: usize, flipped: bool) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], index, cards.len());
    if let Some(card) = cards.get(index) {
        render_card(frame, chunks[1], card, flipped);
    }
    render_controls(frame, chunks[2]);
}

fn render_progress(frame: &mut Frame, area: Rect, index: usize, total: usize) {
    let widget = Paragraph::new(format!("{}/{}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &Flashcard, flipped: bool) {
    let (side, text, color) = if flipped {
        ("BACK", card.answer.as_str(), Color::Cyan)
    } else {
        ("FRONT", card.question.as_str(), Color::White)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(side, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(color).bold())),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::uniform(2)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("h/l previous/next  ·  enter flip  ·  m home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
