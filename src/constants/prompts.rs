pub const TUTOR_LEARNING_STYLE_GUIDE: &str = "LEARNING STYLE ADAPTATIONS:
- For Visual learners: Include description of visual concepts, diagrams, or mental models
- For Text-based learners: Provide clear, structured explanations with defined concepts
- For Hands-on learners: Include practical examples, exercises, or applications";

pub const QUIZ_RESPONSE_FORMAT: &str = r#"FORMAT YOUR RESPONSE AS JSON:
```json
[
  {
    "question": "Question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "Option A",
    "explanation": "Brief explanation of why this answer is correct"
  },
  ...
]
```"#;

pub const QUIZ_RESPONSE_RULES: &str = "IMPORTANT: Make sure to return valid JSON that can be parsed.
The value of \"correct_answer\" must be the full text of one of the four options.
Do not include any text outside the JSON array.
Include a brief explanation for each correct answer.";
