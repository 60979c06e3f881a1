use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;

use super::PLAYER_COLORS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let Some(winner_index) = state.winner_index() else {
        return;
    };
    let winner = &state.players[winner_index];

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .horizontal_margin(4)
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "WINNER!",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            winner.name.as_str(),
            Style::default().fg(PLAYER_COLORS[winner_index]).bold(),
        )),
        Line::from(""),
        Line::from(format!("wins {} after {} rounds", super::TITLE, state.round).fg(Color::Gray)),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );

    // winner first, like a podium
    let order = [winner_index, 1 - winner_index];
    render_score_bars(frame, chunks[2], app, order);

    let controls = Paragraph::new("r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_score_bars(frame: &mut Frame, area: Rect, app: &App, order: [usize; 2]) {
    let state = app.state();
    let win_score = app.game().win_score().max(1);
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);

    for (row, index) in rows.iter().zip(order) {
        let player = &state.players[index];
        let ratio = (player.score as f64 / win_score as f64).clamp(0.0, 1.0);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Color::DarkGray)
                    .title(player.name.as_str()),
            )
            .gauge_style(Style::default().fg(PLAYER_COLORS[index]))
            .ratio(ratio)
            .label(format!("{} pts", player.score));
        frame.render_widget(gauge, *row);
    }
}
