mod loader;

pub use loader::{load_builtin_questions, load_questions_from_json, parse_questions, LoadError};
