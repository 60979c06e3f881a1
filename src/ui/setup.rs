//! Player name entry.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::models::DEFAULT_PLAYER_NAMES;

use super::PLAYER_COLORS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(13),
        Constraint::Percentage(30),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        super::title_line(),
        Line::from(""),
        Line::from("Who's playing?".fg(Color::White)),
        Line::from(""),
    ];

    for index in 0..2 {
        content.push(name_field(app, index));
        if index == 0 {
            content.push(Line::from(""));
            content.push(Line::from("VS".fg(Color::DarkGray).bold()));
            content.push(Line::from(""));
        }
    }

    content.push(Line::from(""));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Enter] let's play  ·  [Tab] switch  ·  [Esc] back",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

fn name_field(app: &App, index: usize) -> Line<'static> {
    let color = PLAYER_COLORS[index];
    let focused = app.focused_field() == index;
    let input = app.name_input(index);

    let label = Span::styled(
        format!("{}: ", DEFAULT_PLAYER_NAMES[index]),
        Style::default().fg(color).bold(),
    );

    let value = if input.is_empty() && !focused {
        Span::styled(
            DEFAULT_PLAYER_NAMES[index],
            Style::default().fg(Color::DarkGray).italic(),
        )
    } else {
        Span::styled(input.to_string(), Style::default().fg(Color::Yellow))
    };

    let cursor = if focused {
        Span::styled("_", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ")
    };

    Line::from(vec![label, value, cursor])
}
