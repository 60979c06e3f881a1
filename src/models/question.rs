use serde::Deserialize;

/// Every question offers exactly this many options.
pub const NUM_OPTIONS: usize = 4;

/// Identifier of a question, unique within a bank.
pub type QuestionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Couples,
    Knowledge,
    Quirky,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Couples, Category::Knowledge, Category::Quirky];

    pub fn label(self) -> &'static str {
        match self {
            Category::Couples => "Couples",
            Category::Knowledge => "Knowledge",
            Category::Quirky => "Quirky",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}
