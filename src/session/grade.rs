use icu_normalizer::ComposingNormalizer;

// --- Grade state ---

/// Display state of one blank. `Idle` until its round's first grading pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradeState {
    #[default]
    Idle,
    Correct,
    Wrong,
}

impl GradeState {
    pub fn as_str(self) -> &'static str {
        match self {
            GradeState::Idle => "idle",
            GradeState::Correct => "correct",
            GradeState::Wrong => "wrong",
        }
    }
}

// --- Answer normalization ---

/// Canonical comparison form: NFC-composed, whitespace runs collapsed to a
/// single space, trimmed, lowercased. Composed and decomposed Hangul must
/// compare equal regardless of the IME that produced the input.
pub fn normalize_answer(input: &str) -> String {
    let composed = ComposingNormalizer::new_nfc().normalize(input);
    composed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn answers_match(user: &str, expected: &str) -> bool {
    normalize_answer(user) == normalize_answer(expected)
}
