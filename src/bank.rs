//! The static set of questions and random selection over it.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::{Question, QuestionId};

/// Immutable collection of questions loaded at process start.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Picks one question uniformly at random among those whose id is not in
    /// `exclude`. Returns `None` once every question has been excluded.
    pub fn select_random<R: Rng + ?Sized>(
        &self,
        exclude: &HashSet<QuestionId>,
        rng: &mut R,
    ) -> Option<&Question> {
        let candidates: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| !exclude.contains(&q.id))
            .collect();

        candidates.choose(rng).copied()
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
