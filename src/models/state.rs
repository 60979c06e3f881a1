//! Game state snapshots.
//!
//! A [`GameState`] is never edited in place by the controller: every
//! transition builds the next snapshot from the previous one.

use std::collections::HashSet;

use super::player::Player;
use super::question::{Question, QuestionId};

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Setup,
    Playing,
    Won,
}

/// Outcome of the current player's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerResult {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub screen: Screen,
    pub players: [Player; 2],
    /// 0 or 1.
    pub current_player_index: usize,
    pub current_question: Option<Question>,
    /// Starts at 1, bumped each time the turn comes back to player 0.
    pub round: u32,
    pub selected_answer: Option<usize>,
    pub answer_result: Option<AnswerResult>,
    /// Ids shown since the pool was last reset.
    pub used_question_ids: HashSet<QuestionId>,
}

impl GameState {
    /// The canonical state at process start and after "play again".
    pub fn initial() -> Self {
        Self {
            screen: Screen::Home,
            players: [Player::default_for(0), Player::default_for(1)],
            current_player_index: 0,
            current_question: None,
            round: 1,
            selected_answer: None,
            answer_result: None,
            used_question_ids: HashSet::new(),
        }
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current_player_index]
    }

    pub fn is_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    /// Index of the winning player, only on the win screen.
    ///
    /// Equal scores resolve to player 0. A game can only be won on one
    /// player's own turn, so this tie-break never decides a real game.
    pub fn winner_index(&self) -> Option<usize> {
        if self.screen != Screen::Won {
            return None;
        }

        if self.players[1].score > self.players[0].score {
            Some(1)
        } else {
            Some(0)
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_index().map(|i| &self.players[i])
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_with(scores: [u32; 2]) -> GameState {
        let mut state = GameState::initial();
        state.screen = Screen::Won;
        state.players[0].score = scores[0];
        state.players[1].score = scores[1];
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.players[0].name, "Player 1");
        assert_eq!(state.players[1].name, "Player 2");
        assert_eq!(state.round, 1);
        assert!(state.current_question.is_none());
        assert!(state.used_question_ids.is_empty());
        assert!(!state.is_answered());
        assert!(state.is_initial());
    }

    #[test]
    fn test_winner_only_on_win_screen() {
        let mut state = won_with([10, 3]);
        assert_eq!(state.winner_index(), Some(0));

        state.screen = Screen::Playing;
        assert_eq!(state.winner_index(), None);
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_winner_strictly_higher_score() {
        assert_eq!(won_with([4, 10]).winner_index(), Some(1));
        assert_eq!(won_with([10, 9]).winner_index(), Some(0));
    }

    #[test]
    fn test_tie_goes_to_first_player() {
        let state = won_with([10, 10]);
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("Player 1"));
    }

    #[test]
    fn test_current_and_other_player() {
        let mut state = GameState::initial();
        state.current_player_index = 1;
        assert_eq!(state.current_player().name, "Player 2");
        assert_eq!(state.other_player().name, "Player 1");
    }
}
