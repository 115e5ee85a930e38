//! Self-contained interactive HTML for a list of quiz questions.

use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    errors::AppResult,
    models::domain::{quiz_question::OPTION_LETTERS, QuizQuestion},
};

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Interactive Quiz</title>
  <style>
    body { font-family: Arial, sans-serif; color: white; background-color: #121212; }
    .quiz-container { max-width: 800px; margin: 0 auto; padding: 20px; }
    .quiz-title { color: #2196f3; text-align: center; margin-bottom: 30px; }
    .question { margin-bottom: 30px; padding: 20px; border: 1px solid #444; border-radius: 10px; background-color: #1e1e2f; }
    .question h3 { margin-top: 0; color: #90caf9; }
    .options { margin-left: 10px; }
    .option { margin: 10px 0; padding: 12px; border: 1px solid #555; border-radius: 6px; cursor: pointer; background-color: #2d2d44; transition: background-color 0.2s; }
    .option:hover { background-color: #3a3a5a; }
    .reveal-btn { background-color: #2196f3; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; font-weight: bold; margin-top: 15px; transition: background-color 0.2s; }
    .reveal-btn:hover { background-color: #0d8bf2; }
    .answer-section { margin-top: 20px; border: 2px solid #ffeb3b; border-radius: 8px; padding: 0; overflow: hidden; display: none; }
    .answer-header { background-color: #ffeb3b; color: #000; padding: 10px; font-weight: bold; font-size: 16px; text-align: center; }
    .answer-content { padding: 15px; background-color: #1a237e; }
    .correct-answer { font-size: 18px; font-weight: bold; color: white; margin-bottom: 15px; }
    .explanation { color: #e1f5fe; font-size: 16px; line-height: 1.5; }
    .selected-correct { background-color: #1b5e20 !important; border-color: #4caf50 !important; }
    .selected-incorrect { background-color: #b71c1c !important; border-color: #f44336 !important; }
  </style>
</head>
<body>
  <div class="quiz-container">
    <h2 class="quiz-title">Interactive Quiz</h2>
"#;

const DOCUMENT_TAIL: &str = r#"  </div>
  <script>
    function selectOption(questionNum, optionNum, isCorrect) {
      const options = document.querySelectorAll(`#question-${questionNum} .option`);
      options.forEach(option => { option.className = 'option'; });

      const selected = document.getElementById(`option-${questionNum}-${optionNum}`);
      if (isCorrect) {
        selected.className = 'option selected-correct';
      } else {
        selected.className = 'option selected-incorrect';
        revealAnswer(questionNum);
      }
    }

    function revealAnswer(questionNum) {
      const answer = document.getElementById(`answer-${questionNum}`);
      answer.style.display = 'block';

      setTimeout(() => {
        answer.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
      }, 100);

      answer.animate([
        { transform: 'scale(1)', boxShadow: '0 0 0 rgba(255, 235, 59, 0)' },
        { transform: 'scale(1.02)', boxShadow: '0 0 20px rgba(255, 235, 59, 0.7)' },
        { transform: 'scale(1)', boxShadow: '0 0 10px rgba(255, 235, 59, 0.3)' }
      ], { duration: 1000, iterations: 1 });
    }
  </script>
</body>
</html>
"#;

pub fn render_quiz_html(questions: &[QuizQuestion]) -> String {
    let capacity = DOCUMENT_HEAD.len() + DOCUMENT_TAIL.len() + questions.len() * 2048;
    let mut html = String::with_capacity(capacity);
    html.push_str(DOCUMENT_HEAD);

    for (i, question) in questions.iter().enumerate() {
        render_question(&mut html, i + 1, question);
    }

    html.push_str(DOCUMENT_TAIL);
    html
}

fn render_question(html: &mut String, number: usize, question: &QuizQuestion) {
    let correct_index = question.correct_index();

    html.push_str(&format!(
        r#"    <div class="question" id="question-{number}">
      <h3>Question {number}</h3>
      <p>{text}</p>
      <div class="options">
"#,
        text = encode_text(&question.question),
    ));

    let options = OPTION_LETTERS.iter().zip(question.options.iter());
    for (j, (letter, option)) in options.enumerate() {
        let is_correct = j == correct_index;
        html.push_str(&format!(
            r#"        <div class="option" id="option-{number}-{j}" data-correct="{is_correct}" onclick="selectOption({number}, {j}, {is_correct})">
          <strong>{letter}.</strong> {option}
        </div>
"#,
            option = encode_text(option),
        ));
    }

    html.push_str(&format!(
        r#"      </div>
      <button class="reveal-btn" onclick="revealAnswer({number})">SHOW ANSWER</button>
      <div class="answer-section" id="answer-{number}" aria-label="{label}">
        <div class="answer-header">CORRECT ANSWER</div>
        <div class="answer-content">
          <div class="correct-answer">{letter}. {answer}</div>
          <div class="explanation">{explanation}</div>
        </div>
      </div>
    </div>
"#,
        label = encode_double_quoted_attribute(&format!("Answer to question {}", number)),
        letter = question.correct_letter(),
        answer = encode_text(question.correct_option()),
        explanation = encode_text(&question.explanation),
    ));
}

/// Renders `questions` and writes the document to `path`.
pub async fn export_quiz_html(
    questions: &[QuizQuestion],
    path: impl AsRef<Path>,
) -> AppResult<()> {
    let path = path.as_ref();
    let html = render_quiz_html(questions);

    tokio::fs::write(path, html).await.map_err(|e| {
        log::error!("Error exporting quiz to HTML at {}: {}", path.display(), e);
        e
    })?;

    log::info!("Quiz exported successfully to {}", path.display());
    Ok(())
}
