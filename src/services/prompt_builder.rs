//! Prompt templates for the tutor and quiz completions.
//!
//! User text is interpolated verbatim.

use crate::constants::prompts::{
    QUIZ_RESPONSE_FORMAT, QUIZ_RESPONSE_RULES, TUTOR_LEARNING_STYLE_GUIDE,
};

pub fn build_tutor_prompt(
    subject: &str,
    level: &str,
    question: &str,
    learning_style: &str,
    background: &str,
    language: &str,
) -> String {
    format!(
        "You are an expert tutor in {subject} at the {level} level.

STUDENT PROFILE:
- Background knowledge: {background}
- Learning style preferences: {learning_style}
- Language preference: {language}

QUESTION:
{question}

INSTRUCTIONS:
1. Provide a clear, educational explanation that directly addresses the question
2. Tailor your explanation to a {background} student at {level} level
3. Use {language} as the primary language
4. Format your response with appropriate markdown for readability

{TUTOR_LEARNING_STYLE_GUIDE}

Your explanations should be educational, accurate, and engaging."
    )
}

pub fn build_quiz_prompt(subject: &str, level: &str, num_questions: u32) -> String {
    format!(
        "Create a {level}-level quiz on {subject} with exactly {num_questions} multiple-choice questions.

INSTRUCTIONS:
1. Each question should be appropriate for {level} level students
2. Each question must have exactly 4 answer options (A, B, C, D)
3. Clearly indicate the correct answer
4. Cover diverse aspects of {subject}

{QUIZ_RESPONSE_FORMAT}

{QUIZ_RESPONSE_RULES}"
    )
}

pub fn build_quiz_system_prompt(subject: &str, level: &str) -> String {
    format!("You are an expert quiz creator for {subject} at the {level} level.")
}
