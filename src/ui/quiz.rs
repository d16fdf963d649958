use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::models::QuizQuestion;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    questions: &[QuizQuestion],
    index: usize,
    selected: usize,
) {
    let Some(question) = questions.get(index) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], index, questions.len());
    render_question_text(frame, chunks[1], &question.question);
    render_options(frame, chunks[2], &question.options, selected);
    render_controls(frame, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, index: usize, total: usize) {
    let widget = Paragraph::new(format!("{}/{}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String; 4], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter select  ·  b back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
