use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Cheatsheet;

pub fn render(frame: &mut Frame, area: Rect, sheet: &Cheatsheet, scroll: usize) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let widget = Paragraph::new(sheet.text.as_str())
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" CHEATSHEET ")
                .title_style(Style::default().fg(Color::Cyan).bold())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, chunks[0]);

    let controls = Paragraph::new("j/k scroll  ·  m home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[1]);
}
