pub mod learning_style;
pub mod quiz_question;
pub mod quiz_result;
pub use learning_style::LearningStyle;
pub use quiz_question::QuizQuestion;
pub use quiz_result::QuizResult;
