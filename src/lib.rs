//! # couple-quest
//!
//! A two-player trivia duel for the terminal. Players take turns answering
//! multiple-choice questions; the first to reach the win score takes the game.
//!
//! The game itself is a pure state machine ([`game`]) over a [`QuestionBank`];
//! the terminal front-end only turns key presses into [`Event`]s and draws the
//! resulting [`GameState`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use couple_quest::{CoupleQuest, Config, GameError};
//!
//! fn main() -> Result<(), GameError> {
//!     let quest = CoupleQuest::from_config(&Config::default())?;
//!     quest.run()
//! }
//! ```
//!
//! Driving the game without a terminal:
//!
//! ```rust
//! use couple_quest::{load_builtin_questions, Game, QuestionBank, Screen, WIN_SCORE};
//!
//! let bank = QuestionBank::new(load_builtin_questions().unwrap());
//! let mut game = Game::seeded(bank, WIN_SCORE, 7);
//! game.enter_setup();
//! let state = game.start_game("Ann", "Bo");
//! assert_eq!(state.screen, Screen::Playing);
//! ```

mod app;
mod bank;
mod config;
mod data;
pub mod game;
mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use bank::QuestionBank;
pub use config::{Config, ConfigError};
pub use data::{load_builtin_questions, load_questions_from_json, parse_questions, LoadError};
pub use game::{Event, Game, WIN_SCORE};
pub use models::{
    normalize_name, AnswerResult, Category, GameState, Player, Question, QuestionId, Screen,
    DEFAULT_PLAYER_NAMES, NUM_OPTIONS, PLAYER_NAME_MAX_LENGTH,
};

/// Error type for everything outside the game rules themselves.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// A game session that can be run in the terminal.
pub struct CoupleQuest {
    app: App,
}

impl CoupleQuest {
    pub fn new(game: Game) -> Self {
        Self { app: App::new(game) }
    }

    /// Builds a session from command-line configuration, loading the question
    /// file if one is given and starting the file logger if requested.
    pub fn from_config(config: &Config) -> Result<Self, GameError> {
        config.validate()?;
        if let Some(path) = &config.log_file {
            logging::init(path)?;
        }

        let questions = match &config.questions {
            Some(path) => load_questions_from_json(path)?,
            None => load_builtin_questions()?,
        };
        let bank = QuestionBank::new(questions);

        let game = match config.seed {
            Some(seed) => Game::seeded(bank, config.win_score, seed),
            None => Game::new(bank, config.win_score),
        };
        Ok(Self::new(game))
    }

    /// Takes over the terminal until the players quit.
    pub fn run(mut self) -> Result<(), GameError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), GameError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                log::info!("quit from {:?}", app.screen());
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen() {
        Screen::Home => handle_home_input(app, key),
        Screen::Setup => handle_setup_input(app, key),
        Screen::Playing => handle_playing_input(app, key),
        Screen::Won => handle_won_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.enter_setup();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

// Letters are name input here, so only Esc leaves the screen.
fn handle_setup_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.name_input_push(c),
        KeyCode::Backspace => app.name_input_pop(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.toggle_focused_field()
        }
        KeyCode::Enter => app.start_game(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
    false
}

fn handle_playing_input(app: &mut App, key: KeyCode) -> bool {
    if app.state().is_answered() {
        return match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                app.advance_turn();
                false
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => true,
            _ => false,
        };
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_selected(),
        KeyCode::Char(c @ '1'..='4') => app.submit_option(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='d') => app.submit_option(c as usize - 'a' as usize),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_won_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            app.play_again();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
