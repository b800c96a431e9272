use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::study::StudySession;

/// Summary of one committed study attempt, kept for the caller's history
/// views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub subject: String,
    pub correct: usize,
    pub total: usize,
    #[serde(default = "default_completion_percent")]
    pub completion_percent: f64,
    /// When the attempt began.
    pub timestamp: DateTime<Utc>,
}

fn default_completion_percent() -> f64 {
    100.0
}

impl AttemptRecord {
    pub fn from_session(session: &StudySession) -> Self {
        let (correct, total) = session.score_display();
        let completion_percent = if total == 0 {
            100.0
        } else {
            (correct as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        };
        Self {
            subject: session.material().title.clone(),
            correct,
            total,
            completion_percent,
            timestamp: session.started_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::material::{KeywordEntry, StudyMaterial};
    use crate::session::round::RoundPlan;

    #[test]
    fn test_from_session_stamps_attempt_start() {
        let material = StudyMaterial {
            title: "지구과학".to_string(),
            extracted_text: "판 구조론과 맨틀 대류".to_string(),
            blanks: vec![
                KeywordEntry {
                    id: 1,
                    word: "판 구조론".to_string(),
                    meaning_long: None,
                },
                KeywordEntry {
                    id: 2,
                    word: "맨틀".to_string(),
                    meaning_long: None,
                },
            ],
        };
        let session = StudySession::new(material, RoundPlan::default());
        let record = AttemptRecord::from_session(&session);
        assert_eq!(record.subject, "지구과학");
        assert_eq!(record.timestamp, session.started_at());
        assert_eq!(record.correct, 0);
        assert_eq!(record.total, 2);
        assert_eq!(record.completion_percent, 0.0);
    }

    #[test]
    fn test_record_serde_defaults_completion_percent() {
        // Records written before completion_percent existed still load.
        let json = r#"{
            "subject": "국사",
            "correct": 18,
            "total": 20,
            "timestamp": "2026-03-01T09:30:00Z"
        }"#;
        let record: AttemptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.correct, 18);
        assert_eq!(record.completion_percent, 100.0);
    }

    #[test]
    fn test_record_roundtrip() {
        let record = AttemptRecord {
            subject: "화학".to_string(),
            correct: 7,
            total: 20,
            completion_percent: 35.0,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let loaded: AttemptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.subject, record.subject);
        assert_eq!(loaded.correct, record.correct);
        assert_eq!(loaded.completion_percent, record.completion_percent);
        assert_eq!(loaded.timestamp, record.timestamp);
    }
}
