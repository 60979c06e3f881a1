//! Pure state transitions.
//!
//! Each function takes the current snapshot and returns the next one. Calls
//! that make no sense for the current snapshot return an unchanged copy
//! instead of failing; the front-end is expected not to send them.

use std::collections::HashSet;

use rand::Rng;

use crate::bank::QuestionBank;
use crate::models::{normalize_name, AnswerResult, GameState, Player, Screen, NUM_OPTIONS};

/// Points needed to win unless configured otherwise.
pub const WIN_SCORE: u32 = 10;

/// Home -> Setup.
pub fn enter_setup(state: &GameState) -> GameState {
    if state.screen != Screen::Home {
        return state.clone();
    }

    GameState {
        screen: Screen::Setup,
        ..state.clone()
    }
}

/// Setup -> Home.
pub fn go_home(state: &GameState) -> GameState {
    if state.screen != Screen::Setup {
        return state.clone();
    }

    GameState {
        screen: Screen::Home,
        ..state.clone()
    }
}

/// Setup -> Playing with fresh scores and a first question.
///
/// Stays in Setup when the bank has nothing to draw.
pub fn start_game<R: Rng + ?Sized>(
    state: &GameState,
    bank: &QuestionBank,
    rng: &mut R,
    player1: &str,
    player2: &str,
) -> GameState {
    if state.screen != Screen::Setup {
        return state.clone();
    }

    let mut used_question_ids = HashSet::new();
    let Some(first) = bank.select_random(&used_question_ids, rng) else {
        log::warn!("cannot start a game: the question bank is empty");
        return state.clone();
    };
    used_question_ids.insert(first.id);

    GameState {
        screen: Screen::Playing,
        players: [
            Player::new(normalize_name(player1, 0)),
            Player::new(normalize_name(player2, 1)),
        ],
        current_player_index: 0,
        current_question: Some(first.clone()),
        round: 1,
        selected_answer: None,
        answer_result: None,
        used_question_ids,
    }
}

/// Records the current player's answer, scoring a point when it is correct.
pub fn submit_answer(state: &GameState, index: usize) -> GameState {
    if state.screen != Screen::Playing || state.is_answered() || index >= NUM_OPTIONS {
        return state.clone();
    }
    let Some(question) = &state.current_question else {
        return state.clone();
    };

    let correct = question.is_correct(index);
    let mut players = state.players.clone();
    if correct {
        players[state.current_player_index].score += 1;
    }

    GameState {
        players,
        selected_answer: Some(index),
        answer_result: Some(if correct {
            AnswerResult::Correct
        } else {
            AnswerResult::Wrong
        }),
        ..state.clone()
    }
}

/// Ends the current turn: either declares the current player the winner or
/// hands the next question to the other player.
pub fn advance_turn<R: Rng + ?Sized>(
    state: &GameState,
    bank: &QuestionBank,
    rng: &mut R,
    win_score: u32,
) -> GameState {
    if state.screen != Screen::Playing
        || !state.is_answered()
        || state.current_question.is_none()
    {
        return state.clone();
    }

    if state.current_player().score >= win_score {
        log::info!(
            "{} wins with {} points in round {}",
            state.current_player().name,
            state.current_player().score,
            state.round
        );
        return GameState {
            screen: Screen::Won,
            ..state.clone()
        };
    }

    let next_player_index = 1 - state.current_player_index;
    let round = if next_player_index == 0 {
        state.round + 1
    } else {
        state.round
    };

    let mut used_question_ids = state.used_question_ids.clone();
    let next = match bank.select_random(&used_question_ids, rng) {
        Some(question) => Some(question),
        None => {
            log::info!("all {} questions used, reshuffling the pool", bank.len());
            used_question_ids.clear();
            bank.select_random(&used_question_ids, rng)
        }
    };
    let Some(next) = next else {
        log::warn!("cannot advance the turn: the question bank is empty");
        return state.clone();
    };
    used_question_ids.insert(next.id);

    GameState {
        screen: Screen::Playing,
        players: state.players.clone(),
        current_player_index: next_player_index,
        current_question: Some(next.clone()),
        round,
        selected_answer: None,
        answer_result: None,
        used_question_ids,
    }
}

/// Won -> the canonical initial state.
pub fn play_again(state: &GameState) -> GameState {
    if state.screen != Screen::Won {
        return state.clone();
    }

    GameState::initial()
}
