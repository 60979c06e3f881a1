mod player;
mod question;
mod state;

pub use player::{normalize_name, Player, DEFAULT_PLAYER_NAMES, PLAYER_NAME_MAX_LENGTH};
pub use question::{Category, Question, QuestionId, NUM_OPTIONS};
pub use state::{AnswerResult, GameState, Screen};
