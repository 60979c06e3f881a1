//! The game controller: a two-player turn-based state machine.

mod controller;
mod transitions;

pub use controller::{Event, Game};
pub use transitions::{
    advance_turn, enter_setup, go_home, play_again, start_game, submit_answer, WIN_SCORE,
};
