use serde::Deserialize;

const QUESTION_BANK: &str = include_str!("../../assets/questions.json");

/// Signed axis deltas carried by one answer choice. Positive `field` leans
/// field-independent; positive `tempo` leans reflective.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AxisWeights {
    #[serde(default)]
    pub field: i32,
    #[serde(default)]
    pub tempo: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub yes: AxisWeights,
    pub no: AxisWeights,
}

/// The questionnaire plus the per-axis maxima that anchor the percentage
/// mapping. Maxima are fixed at construction: per axis, the sum over
/// questions of the larger absolute answer weight.
pub struct QuestionBank {
    questions: Vec<Question>,
    max_field: i32,
    max_tempo: i32,
}

impl QuestionBank {
    /// The embedded 20-question bank.
    pub fn load() -> Self {
        let questions: Vec<Question> = serde_json::from_str(QUESTION_BANK).unwrap_or_default();
        Self::from_questions(questions)
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        let max_field = questions
            .iter()
            .map(|question| question.yes.field.abs().max(question.no.field.abs()))
            .sum();
        let max_tempo = questions
            .iter()
            .map(|question| question.yes.tempo.abs().max(question.no.tempo.abs()))
            .sum();
        Self {
            questions,
            max_field,
            max_tempo,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Panics on an out-of-bounds index; drivers walk questions in order
    /// and never past the end.
    pub fn question(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn max_field(&self) -> i32 {
        self.max_field
    }

    pub fn max_tempo(&self) -> i32 {
        self.max_tempo
    }
}
