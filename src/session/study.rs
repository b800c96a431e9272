use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::session::grade::{GradeState, answers_match};
use crate::session::material::StudyMaterial;
use crate::session::result::AttemptRecord;
use crate::session::round::{Round, RoundPlan, SubStep};
use crate::submit::{AttemptSink, SaveTestRequest, SubmitError};
use crate::tokenizer::{KeywordInstance, Token, keyword_instances, tokenize};

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("all three rounds must be graded before saving")]
    NotFinished,
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Scaffolding flow over one study text: three rounds of reveal, fill-in,
/// and graded review over the keyword instances. Lives for exactly one
/// visit to the study screen; leaving and re-entering builds a fresh
/// session.
pub struct StudySession {
    material: StudyMaterial,
    plan: RoundPlan,
    tokens: Vec<Token>,
    instances: Vec<KeywordInstance>,
    round: Round,
    sub_step: SubStep,
    answers: HashMap<u32, String>,
    grades: HashMap<u32, GradeState>,
    correct_ids: HashSet<u32>,
    started_at: DateTime<Utc>,
    record: Option<AttemptRecord>,
}

impl StudySession {
    pub fn new(material: StudyMaterial, plan: RoundPlan) -> Self {
        let keywords = material.keyword_list();
        let tokens = tokenize(&material.extracted_text, &keywords);
        let instances = keyword_instances(&tokens);
        Self {
            material,
            plan,
            tokens,
            instances,
            round: Round::One,
            sub_step: SubStep::Reveal,
            answers: HashMap::new(),
            grades: HashMap::new(),
            correct_ids: HashSet::new(),
            started_at: Utc::now(),
            record: None,
        }
    }

    // --- State accessors ---

    pub fn material(&self) -> &StudyMaterial {
        &self.material
    }

    pub fn plan(&self) -> &RoundPlan {
        &self.plan
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn instances(&self) -> &[KeywordInstance] {
        &self.instances
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn sub_step(&self) -> SubStep {
        self.sub_step
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Instances belonging to the current round's partition. Shorter texts
    /// simply have shorter (possibly empty) partitions.
    pub fn round_instances(&self) -> &[KeywordInstance] {
        let span = self.plan.span(self.round);
        let start = span.start.min(self.instances.len());
        let end = span.end.min(self.instances.len());
        &self.instances[start..end]
    }

    pub fn answer(&self, instance_id: u32) -> &str {
        self.answers
            .get(&instance_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn grade_of(&self, instance_id: u32) -> GradeState {
        self.grades.get(&instance_id).copied().unwrap_or_default()
    }

    /// Membership in the cumulative correct set (the score ratchet).
    pub fn is_correct(&self, instance_id: u32) -> bool {
        self.correct_ids.contains(&instance_id)
    }

    pub fn correct_count(&self) -> usize {
        self.correct_ids.len()
    }

    // --- Transitions ---

    /// Reveal -> fill. Returns false outside the reveal sub-step.
    pub fn start_learning(&mut self) -> bool {
        if self.sub_step != SubStep::Reveal {
            return false;
        }
        self.sub_step = SubStep::Fill;
        true
    }

    /// Answers may change at any point; grading reads current values.
    pub fn set_answer(&mut self, instance_id: u32, text: impl Into<String>) {
        self.answers.insert(instance_id, text.into());
    }

    /// Run the grading pass over the current round's partition. Valid from
    /// the fill sub-step, and again from review to re-grade before
    /// advancing. Matching answers enter the cumulative correct set; the
    /// set never shrinks, so a flipped answer can read wrong while still
    /// counting toward the score.
    pub fn grade(&mut self) -> bool {
        if self.sub_step == SubStep::Reveal {
            return false;
        }
        let span = self.plan.span(self.round);
        let start = span.start.min(self.instances.len());
        let end = span.end.min(self.instances.len());

        let mut next = HashMap::new();
        for instance in &self.instances[start..end] {
            let user = self
                .answers
                .get(&instance.instance_id)
                .map(String::as_str)
                .unwrap_or("");
            if answers_match(user, &instance.word) {
                self.correct_ids.insert(instance.instance_id);
                next.insert(instance.instance_id, GradeState::Correct);
            } else {
                next.insert(instance.instance_id, GradeState::Wrong);
            }
        }
        self.grades = next;
        self.sub_step = SubStep::Review;
        true
    }

    /// Review -> next round's reveal. Answers and the cumulative set carry
    /// forward; the new round's instances start idle.
    pub fn advance_round(&mut self) -> bool {
        if self.sub_step != SubStep::Review {
            return false;
        }
        match self.round.next() {
            Some(next) => {
                self.round = next;
                self.sub_step = SubStep::Reveal;
                true
            }
            None => false,
        }
    }

    /// True once the final round has been graded.
    pub fn is_finished(&self) -> bool {
        self.round == Round::Three && self.sub_step == SubStep::Review
    }

    // --- Derived views ---

    /// Per-round progress bars: one slot per configured position in the
    /// current round, all idle until the round has been graded. Slots
    /// beyond the actual instance count stay idle.
    pub fn progress_bars(&self) -> Vec<GradeState> {
        let mut bars = vec![GradeState::Idle; self.plan.size(self.round)];
        if self.sub_step != SubStep::Review {
            return bars;
        }
        for (bar, instance) in bars.iter_mut().zip(self.round_instances()) {
            *bar = self.grade_of(instance.instance_id);
        }
        bars
    }

    /// Cumulative correct count over the configured total through the
    /// current round, capped at the instances that actually exist.
    pub fn score_display(&self) -> (usize, usize) {
        let denominator = self
            .plan
            .cumulative(self.round)
            .min(self.instances.len());
        (self.correct_ids.len(), denominator)
    }

    // --- Completion ---

    /// Answer strings for the first `plan.total()` instances in scan order,
    /// missing answers as empty strings.
    pub fn completion_answers(&self) -> Vec<String> {
        self.instances
            .iter()
            .take(self.plan.total())
            .map(|instance| self.answer(instance.instance_id).to_string())
            .collect()
    }

    /// Save payload for the persistence collaborator. Blank answers are
    /// filtered out; the backend treats absence as "not attempted".
    pub fn save_request(&self) -> SaveTestRequest {
        let answers = self
            .completion_answers()
            .into_iter()
            .filter(|answer| !answer.trim().is_empty())
            .collect();
        SaveTestRequest {
            subject_name: self.material.title.clone(),
            original: self.material.extracted_text.clone(),
            quiz: self.material.extracted_text.clone(),
            answers,
        }
    }

    /// Commit the attempt through the persistence collaborator. Only valid
    /// once `is_finished()`. A failed submit leaves every answer and grade
    /// in place so the caller can retry; a repeated call after success
    /// returns the recorded attempt without re-submitting.
    pub fn complete(&mut self, sink: &mut dyn AttemptSink) -> Result<AttemptRecord, CommitError> {
        if !self.is_finished() {
            return Err(CommitError::NotFinished);
        }
        if let Some(record) = &self.record {
            return Ok(record.clone());
        }
        sink.submit_attempt(&self.save_request())?;
        let record = AttemptRecord::from_session(self);
        self.record = Some(record.clone());
        Ok(record)
    }

    pub fn is_committed(&self) -> bool {
        self.record.is_some()
    }
}
