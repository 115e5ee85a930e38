use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;
pub const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: String, // full text of one of the options
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        QuizQuestion {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Position of `correct_answer` within `options`, or 0 when the model
    /// named an answer that is not one of the options.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option == &self.correct_answer)
            .unwrap_or(0)
    }

    pub fn correct_letter(&self) -> char {
        OPTION_LETTERS[self.correct_index()]
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index()]
    }
}
