mod cheatsheet;
mod error;
mod flashcards;
mod loading;
mod quiz;
mod result;
mod selection;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Selection { cursor } => selection::render(frame, area, app, *cursor),
        Screen::Loading { mode, frame: tick } => loading::render(frame, area, *mode, *tick),
        Screen::Flashcards {
            cards,
            index,
            flipped,
        } => flashcards::render(frame, area, cards, *index, *flipped),
        Screen::Quiz {
            questions,
            index,
            selected,
            ..
        } => quiz::render(frame, area, questions, *index, *selected),
        Screen::Result { questions, score } => {
            result::render(frame, area, *score, questions.len())
        }
        Screen::Cheatsheet { sheet, scroll } => cheatsheet::render(frame, area, sheet, *scroll),
        Screen::Error { message } => error::render(frame, area, message),
    }
}
