use crate::diagnosis::question::{Question, QuestionBank};
use crate::diagnosis::scoring::{Answer, DiagnosisResult, RawScore, apply_answer, to_result};

/// Sequential questionnaire driver: presents questions in bank order and
/// applies each answer exactly once.
pub struct Quiz {
    bank: QuestionBank,
    index: usize,
    score: RawScore,
}

impl Quiz {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            index: 0,
            score: RawScore::default(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.index < self.bank.len() {
            Some(self.bank.question(self.index))
        } else {
            None
        }
    }

    pub fn answered_count(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.bank.len()
    }

    pub fn raw_score(&self) -> RawScore {
        self.score
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Apply an answer to the current question. Returns the final result
    /// when this was the last question; `None` while more remain. Answers
    /// after the quiz finished are ignored.
    pub fn answer(&mut self, answer: Answer) -> Option<DiagnosisResult> {
        if self.is_finished() {
            return None;
        }
        self.score = apply_answer(&self.bank, self.score, self.index, answer);
        self.index += 1;
        if self.is_finished() {
            Some(to_result(&self.bank, self.score))
        } else {
            None
        }
    }

    /// The final result once every question is answered.
    pub fn result(&self) -> Option<DiagnosisResult> {
        if self.is_finished() {
            Some(to_result(&self.bank, self.score))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_walks_questions_in_order() {
        let mut quiz = Quiz::new(QuestionBank::load());
        assert_eq!(quiz.total(), 20);
        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(quiz.current_question().map(|q| q.id), Some(1));

        assert!(quiz.answer(Answer::Yes).is_none());
        assert_eq!(quiz.answered_count(), 1);
        assert_eq!(quiz.current_question().map(|q| q.id), Some(2));
        assert!(quiz.result().is_none());
    }

    #[test]
    fn test_last_answer_produces_result() {
        let mut quiz = Quiz::new(QuestionBank::load());
        let mut final_result = None;
        for _ in 0..quiz.total() {
            final_result = quiz.answer(Answer::Yes);
        }
        assert!(quiz.is_finished());
        assert!(quiz.current_question().is_none());
        let result = final_result.expect("last answer yields the result");
        assert_eq!(quiz.result(), Some(result));
    }

    #[test]
    fn test_answers_after_finish_are_ignored() {
        let mut quiz = Quiz::new(QuestionBank::load());
        for _ in 0..quiz.total() {
            quiz.answer(Answer::No);
        }
        let score = quiz.raw_score();
        assert!(quiz.answer(Answer::Yes).is_none());
        assert_eq!(quiz.raw_score(), score);
        assert_eq!(quiz.answered_count(), quiz.total());
    }

    #[test]
    fn test_quiz_matches_manual_fold() {
        let answers = [
            Answer::Yes,
            Answer::No,
            Answer::Yes,
            Answer::Yes,
            Answer::No,
        ];
        let mut quiz = Quiz::new(QuestionBank::load());
        let mut expected = RawScore::default();
        for (index, &answer) in answers.iter().enumerate() {
            expected = apply_answer(quiz.bank(), expected, index, answer);
        }

        for &answer in &answers {
            quiz.answer(answer);
        }
        assert_eq!(quiz.raw_score(), expected);
    }

    #[test]
    fn test_empty_bank_is_finished_immediately() {
        let quiz = Quiz::new(QuestionBank::from_questions(Vec::new()));
        assert!(quiz.is_finished());
        assert!(quiz.current_question().is_none());
        // Both axes sit at the midpoint when nothing is weighted.
        let result = quiz.result().expect("empty quiz still maps a result");
        assert_eq!(result.field_independent, 50);
        assert_eq!(result.reflective, 50);
    }
}
