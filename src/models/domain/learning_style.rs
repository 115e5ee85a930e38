pub const DEFAULT_LEARNING_STYLE: &str = "Text-based";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningStyle {
    Visual,
    TextBased,
    HandsOn,
}

impl LearningStyle {
    /// Lenient parse of the free-form style string the UI sends.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "visual" => Some(LearningStyle::Visual),
            "text-based" | "text based" | "text" => Some(LearningStyle::TextBased),
            "hands-on" | "hands on" => Some(LearningStyle::HandsOn),
            _ => None,
        }
    }

    pub fn postscript(&self) -> Option<&'static str> {
        match self {
            LearningStyle::Visual => {
                Some("*Note: Visualize these concepts as you read for better retention.*")
            }
            LearningStyle::HandsOn => Some(
                "*Tip: Try working through the examples yourself to reinforce your learning.*",
            ),
            LearningStyle::TextBased => None,
        }
    }

    /// Appends the style's postscript, if any, to a tutor answer.
    pub fn decorate(style: &str, content: String) -> String {
        match Self::parse(style).and_then(|s| s.postscript()) {
            Some(note) => format!("{}\n\n{}", content, note),
            None => content,
        }
    }
}
