use std::collections::HashSet;

use couple_quest::{
    AnswerResult, Category, Event, Game, GameState, Question, QuestionBank, Screen, WIN_SCORE,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn question(id: u32) -> Question {
    Question {
        id,
        category: Category::Couples,
        prompt: format!("Question {}", id),
        options: ["w".into(), "x".into(), "y".into(), "z".into()],
        correct_index: (id as usize * 7) % 4,
    }
}

fn bank(n: u32) -> QuestionBank {
    QuestionBank::new((1..=n).map(question).collect())
}

fn started(n: u32, seed: u64) -> Game {
    let mut game = Game::seeded(bank(n), WIN_SCORE, seed);
    game.enter_setup();
    game.start_game("Ann", "Bo");
    game
}

fn correct_index(state: &GameState) -> usize {
    state.current_question.as_ref().unwrap().correct_index
}

#[test]
fn scenario_correct_then_wrong() {
    let mut game = started(12, 1);

    let first_id = game.state().current_question.as_ref().unwrap().id;
    let index = correct_index(game.state());
    let state = game.submit_answer(index);
    assert_eq!(state.players[0].score, 1);
    assert_eq!(state.answer_result, Some(AnswerResult::Correct));

    let state = game.advance_turn();
    assert_eq!(state.current_player_index, 1);
    assert_eq!(state.round, 1);
    assert!(state.answer_result.is_none());
    assert_ne!(state.current_question.as_ref().unwrap().id, first_id);

    let wrong = (correct_index(game.state()) + 1) % 4;
    let state = game.submit_answer(wrong);
    assert_eq!(state.players[1].score, 0);
    assert_eq!(state.answer_result, Some(AnswerResult::Wrong));

    let state = game.advance_turn();
    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.round, 2);
}

#[test]
fn random_play_keeps_invariants() {
    let mut game = started(7, 2024);
    let mut chooser = SmallRng::seed_from_u64(5);

    for _ in 0..500 {
        if game.state().screen == Screen::Won {
            break;
        }
        let before = game.state().clone();

        let index = chooser.random_range(0..4);
        let answered = game.submit_answer(index).clone();
        assert_eq!(answered.selected_answer.is_some(), answered.answer_result.is_some());
        assert_eq!(answered.current_player_index, before.current_player_index);
        for p in 0..2 {
            let gained = answered.players[p].score - before.players[p].score;
            assert!(gained <= 1);
            if p != before.current_player_index {
                assert_eq!(gained, 0);
            }
        }

        // answering twice changes nothing
        assert_eq!(game.submit_answer((index + 1) % 4), &answered);

        let next = game.advance_turn().clone();
        if next.screen == Screen::Won {
            assert!(answered.current_player().score >= WIN_SCORE);
            assert_eq!(next.current_question, answered.current_question);
            continue;
        }

        assert_eq!(next.current_player_index, 1 - answered.current_player_index);
        if next.current_player_index == 0 {
            assert_eq!(next.round, answered.round + 1);
        } else {
            assert_eq!(next.round, answered.round);
        }

        let id = next.current_question.as_ref().unwrap().id;
        assert!(next.used_question_ids.contains(&id));
        if next.used_question_ids.len() > 1 {
            assert!(!answered.used_question_ids.contains(&id));
            assert_eq!(next.used_question_ids.len(), answered.used_question_ids.len() + 1);
        }
    }

    assert_eq!(game.state().screen, Screen::Won);
}

#[test]
fn pool_cycles_through_every_question_before_reset() {
    let n = 9;
    let mut game = started(n, 77);
    let mut seen = HashSet::new();

    for _ in 0..n {
        let id = game.state().current_question.as_ref().unwrap().id;
        assert!(seen.insert(id), "question {} repeated within a cycle", id);
        game.submit_answer((correct_index(game.state()) + 1) % 4);
        game.advance_turn();
    }

    assert_eq!(seen.len() as u32, n);
    let state = game.state();
    assert_eq!(state.screen, Screen::Playing);
    assert_eq!(state.used_question_ids.len(), 1);
}

#[test]
fn reaching_win_score_ends_the_game() {
    let mut game = started(30, 3);

    loop {
        let index = if game.state().current_player_index == 0 {
            correct_index(game.state())
        } else {
            (correct_index(game.state()) + 2) % 4
        };
        game.submit_answer(index);
        let used_before = game.state().used_question_ids.clone();
        let state = game.advance_turn();
        if state.screen == Screen::Won {
            assert_eq!(state.players[0].score, WIN_SCORE);
            assert_eq!(state.used_question_ids, used_before);
            break;
        }
    }

    assert_eq!(game.state().winner().map(|p| p.name.as_str()), Some("Ann"));
    assert_eq!(game.state().round, WIN_SCORE);

    // nothing but play again does anything on the win screen
    let won = game.state().clone();
    assert_eq!(game.submit_answer(0), &won);
    assert_eq!(game.advance_turn(), &won);
    assert_eq!(game.dispatch(Event::EnterSetup), &won);

    assert_eq!(game.play_again(), &GameState::initial());
}

#[test]
fn empty_bank_never_leaves_setup() {
    let mut game = Game::seeded(QuestionBank::default(), WIN_SCORE, 0);
    game.enter_setup();
    let setup = game.state().clone();
    assert_eq!(game.start_game("Ann", "Bo"), &setup);
}

#[test]
fn custom_random_source() {
    let mut game = Game::with_rng(bank(4), 2, SmallRng::seed_from_u64(8));
    game.dispatch(Event::EnterSetup);
    game.dispatch(Event::StartGame {
        player1: " Ann ".into(),
        player2: "".into(),
    });
    assert_eq!(game.state().players[0].name, "Ann");
    assert_eq!(game.state().players[1].name, "Player 2");
}
