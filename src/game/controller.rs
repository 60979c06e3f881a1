use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bank::QuestionBank;
use crate::models::GameState;

use super::transitions::{self, WIN_SCORE};

/// Everything the presentation layer can ask the game to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    EnterSetup,
    GoHome,
    StartGame { player1: String, player2: String },
    SubmitAnswer(usize),
    AdvanceTurn,
    PlayAgain,
}

/// Owns the current snapshot and replaces it on every event.
pub struct Game<R = SmallRng> {
    bank: QuestionBank,
    rng: R,
    win_score: u32,
    state: GameState,
}

impl Game<SmallRng> {
    /// A game drawing questions from an OS-seeded generator.
    pub fn new(bank: QuestionBank, win_score: u32) -> Self {
        Self::with_rng(bank, win_score, SmallRng::from_os_rng())
    }

    /// A game whose question order is reproducible from `seed`.
    pub fn seeded(bank: QuestionBank, win_score: u32, seed: u64) -> Self {
        Self::with_rng(bank, win_score, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(bank: QuestionBank, win_score: u32, rng: R) -> Self {
        Self {
            bank,
            rng,
            win_score,
            state: GameState::initial(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Applies `event` and returns the resulting snapshot.
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        let next = match &event {
            Event::EnterSetup => transitions::enter_setup(&self.state),
            Event::GoHome => transitions::go_home(&self.state),
            Event::StartGame { player1, player2 } => {
                transitions::start_game(&self.state, &self.bank, &mut self.rng, player1, player2)
            }
            Event::SubmitAnswer(index) => transitions::submit_answer(&self.state, *index),
            Event::AdvanceTurn => {
                transitions::advance_turn(&self.state, &self.bank, &mut self.rng, self.win_score)
            }
            Event::PlayAgain => transitions::play_again(&self.state),
        };

        if next == self.state {
            log::debug!("{:?} ignored on {:?}", event, self.state.screen);
        } else {
            log::debug!(
                "{:?}: {:?} -> {:?}, round {}, scores {}-{}",
                event,
                self.state.screen,
                next.screen,
                next.round,
                next.players[0].score,
                next.players[1].score
            );
        }

        self.state = next;
        &self.state
    }

    pub fn enter_setup(&mut self) -> &GameState {
        self.dispatch(Event::EnterSetup)
    }

    pub fn go_home(&mut self) -> &GameState {
        self.dispatch(Event::GoHome)
    }

    pub fn start_game(&mut self, player1: &str, player2: &str) -> &GameState {
        self.dispatch(Event::StartGame {
            player1: player1.to_string(),
            player2: player2.to_string(),
        })
    }

    pub fn submit_answer(&mut self, index: usize) -> &GameState {
        self.dispatch(Event::SubmitAnswer(index))
    }

    pub fn advance_turn(&mut self) -> &GameState {
        self.dispatch(Event::AdvanceTurn)
    }

    pub fn play_again(&mut self) -> &GameState {
        self.dispatch(Event::PlayAgain)
    }
}

impl Default for Game<SmallRng> {
    fn default() -> Self {
        Self::new(QuestionBank::default(), WIN_SCORE)
    }
}
