use crate::diagnosis::profile::LearnerType;
use crate::diagnosis::question::QuestionBank;
use serde::{Deserialize, Serialize};

// --- Raw accumulation ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Accumulated axis totals. Positive `field` leans field-independent,
/// positive `tempo` leans reflective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawScore {
    pub field: i32,
    pub tempo: i32,
}

/// One fold step of the questionnaire: add the chosen answer's weights for
/// the question at `question_index`. Each question is applied exactly once,
/// in question order; an out-of-bounds index panics.
pub fn apply_answer(
    bank: &QuestionBank,
    prev: RawScore,
    question_index: usize,
    answer: Answer,
) -> RawScore {
    let question = bank.question(question_index);
    let delta = match answer {
        Answer::Yes => question.yes,
        Answer::No => question.no,
    };
    RawScore {
        field: prev.field + delta.field,
        tempo: prev.tempo + delta.tempo,
    }
}

// --- Percentage mapping ---

/// Linear map from [-max, +max] onto 0..=100 with round-half-up. An axis
/// with no weighted questions sits at the midpoint.
pub fn score_to_percent(score: i32, max: i32) -> u8 {
    if max == 0 {
        return 50;
    }
    let clamped = score.clamp(-max, max);
    (((clamped + max) * 100 + max) / (2 * max)) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub field_independent: u8,
    pub field_dependent: u8,
    pub reflective: u8,
    pub impulsive: u8,
    pub learner_type: LearnerType,
}

/// Map accumulated raw scores onto the result percentages and learner type.
/// Pure: calling it twice on the same input yields the same result.
pub fn to_result(bank: &QuestionBank, raw: RawScore) -> DiagnosisResult {
    let field_independent = score_to_percent(raw.field, bank.max_field());
    let reflective = score_to_percent(raw.tempo, bank.max_tempo());
    DiagnosisResult {
        field_independent,
        field_dependent: 100 - field_independent,
        reflective,
        impulsive: 100 - reflective,
        learner_type: LearnerType::from_axes(field_independent >= 50, reflective >= 50),
    }
}
