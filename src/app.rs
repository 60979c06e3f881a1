use crate::game::Game;
use crate::models::{GameState, Screen, NUM_OPTIONS, PLAYER_NAME_MAX_LENGTH};

/// Terminal front-end state wrapped around the game controller.
///
/// The controller only ever sees finished names and chosen option indexes;
/// the text being typed and the option under the cursor live here.
pub struct App {
    game: Game,
    name_inputs: [String; 2],
    focused_field: usize,
    selected_option: usize,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            name_inputs: [String::new(), String::new()],
            focused_field: 0,
            selected_option: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.state().screen
    }

    pub fn name_input(&self, index: usize) -> &str {
        &self.name_inputs[index]
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn toggle_focused_field(&mut self) {
        self.focused_field = 1 - self.focused_field;
    }

    pub fn name_input_push(&mut self, c: char) {
        let input = &mut self.name_inputs[self.focused_field];
        if input.chars().count() < PLAYER_NAME_MAX_LENGTH {
            input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        self.name_inputs[self.focused_field].pop();
    }

    pub fn enter_setup(&mut self) {
        self.name_inputs = [String::new(), String::new()];
        self.focused_field = 0;
        self.game.enter_setup();
    }

    pub fn go_home(&mut self) {
        self.game.go_home();
    }

    pub fn start_game(&mut self) {
        let [player1, player2] = &self.name_inputs;
        self.game.start_game(player1, player2);
        self.selected_option = 0;
    }

    /// Answers with the option under the cursor.
    pub fn submit_selected(&mut self) {
        self.game.submit_answer(self.selected_option);
    }

    /// Moves the cursor to `index` and answers with it.
    pub fn submit_option(&mut self, index: usize) {
        if index < NUM_OPTIONS && !self.state().is_answered() {
            self.selected_option = index;
            self.game.submit_answer(index);
        }
    }

    pub fn advance_turn(&mut self) {
        self.game.advance_turn();
        if !self.state().is_answered() {
            self.selected_option = 0;
        }
    }

    pub fn play_again(&mut self) {
        self.game.play_again();
        self.selected_option = 0;
    }
}
