use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerResult, Category, GameState, Question};

use super::PLAYER_COLORS;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let Some(question) = &state.current_question else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_scoreboard(frame, chunks[0], state, app.game().win_score());
    render_turn_banner(frame, chunks[1], state);
    render_category(frame, chunks[2], question.category);
    render_question_text(frame, chunks[3], &question.prompt);
    render_options(frame, chunks[4], question, state, app.selected_option());
    render_feedback(frame, chunks[5], question, state);
    render_controls(frame, chunks[6], state, app.game().win_score());
}

fn render_scoreboard(frame: &mut Frame, area: Rect, state: &GameState, win_score: u32) {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    for (index, chunk) in [chunks[0], chunks[2]].into_iter().enumerate() {
        let player = &state.players[index];
        let active = state.current_player_index == index;
        let color = PLAYER_COLORS[index];

        let border = if active {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if active {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border)
            .title(Line::from(player.name.as_str()).centered());

        let score = Paragraph::new(format!("{} / {}", player.score, win_score))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bold())
            .block(block);
        frame.render_widget(score, chunk);
    }

    let round = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("Round {}", state.round).fg(Color::Gray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(round, chunks[1]);
}

fn render_turn_banner(frame: &mut Frame, area: Rect, state: &GameState) {
    let color = PLAYER_COLORS[state.current_player_index];
    let widget = Paragraph::new(format!("{}'s turn to answer", state.current_player().name))
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_category(frame: &mut Frame, area: Rect, category: Category) {
    let color = match category {
        Category::Couples => Color::LightMagenta,
        Category::Knowledge => Color::Cyan,
        Category::Quirky => Color::Yellow,
    };
    let widget = Paragraph::new(Span::styled(
        format!(" {} ", category.label()),
        Style::default().fg(Color::Black).bg(color),
    ));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    state: &GameState,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = option_style(index, question, state, cursor);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Marker and style of one option: the cursor before answering, the
/// correct and chosen options after.
fn option_style(
    index: usize,
    question: &Question,
    state: &GameState,
    cursor: usize,
) -> (&'static str, Style) {
    match state.selected_answer {
        None if index == cursor => (">", Style::default().fg(Color::Cyan).bold()),
        None => (" ", Style::default().fg(Color::Gray)),
        Some(_) if question.is_correct(index) => ("+", Style::default().fg(Color::Green).bold()),
        Some(selected) if selected == index => ("x", Style::default().fg(Color::Red).bold()),
        Some(_) => (" ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, question: &Question, state: &GameState) {
    let line = match state.answer_result {
        Some(AnswerResult::Correct) => Line::from(Span::styled(
            format!("Correct! +1 point for {}", state.current_player().name),
            Style::default().fg(Color::Green).bold(),
        )),
        Some(AnswerResult::Wrong) => Line::from(Span::styled(
            format!("Wrong! Correct: {}", question.correct_option()),
            Style::default().fg(Color::Red).bold(),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, state: &GameState, win_score: u32) {
    let hint = if state.is_answered() && state.current_player().score >= win_score {
        "enter finish the game  ·  q quit".to_string()
    } else if state.is_answered() {
        format!("enter {}'s turn  ·  q quit", state.other_player().name)
    } else {
        "j/k navigate  ·  enter or 1-4 answer  ·  q quit".to_string()
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
