mod home;
mod playing;
mod setup;
mod won;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

/// Colours of player 1 and player 2, used wherever a player is shown.
const PLAYER_COLORS: [Color; 2] = [Color::Magenta, Color::LightRed];

const TITLE: &str = "COUPLE QUEST";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Home => home::render(frame, area, app),
        Screen::Setup => setup::render(frame, area, app),
        Screen::Playing => playing::render(frame, area, app),
        Screen::Won => won::render(frame, area, app),
    }
}

fn title_line() -> Line<'static> {
    Line::from(Span::styled(TITLE, Style::default().fg(Color::Magenta).bold()))
}
