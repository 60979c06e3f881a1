use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{NUM_OPTIONS, Question, QuestionId};

/// Question bank compiled into the binary, used when no file is given.
const BUILTIN_QUESTIONS: &str = include_str!("../../questions.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
    #[error("question {id} has correct index {index}, expected 0 to 3")]
    CorrectIndexOutOfRange { id: QuestionId, index: usize },
    #[error("question {0} has an empty prompt")]
    BlankPrompt(QuestionId),
}

/// The built-in question bank.
pub fn load_builtin_questions() -> Result<Vec<Question>, LoadError> {
    parse_questions(BUILTIN_QUESTIONS)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content)?;
    log::info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parses a JSON array of questions and checks it forms a usable bank.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate(&questions)?;
    Ok(questions)
}

fn validate(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id) {
            return Err(LoadError::DuplicateId(question.id));
        }
        if question.correct_index >= NUM_OPTIONS {
            return Err(LoadError::CorrectIndexOutOfRange {
                id: question.id,
                index: question.correct_index,
            });
        }
        if question.prompt.trim().is_empty() {
            return Err(LoadError::BlankPrompt(question.id));
        }
    }

    Ok(())
}
