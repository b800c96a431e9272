use serde::{Deserialize, Serialize};

// --- Learner type ---

/// The four learner types spanned by the field-independence and tempo axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnerType {
    #[serde(rename = "FI_R")]
    IndependentReflective,
    #[serde(rename = "FD_R")]
    DependentReflective,
    #[serde(rename = "FI_I")]
    IndependentImpulsive,
    #[serde(rename = "FD_I")]
    DependentImpulsive,
}

impl LearnerType {
    pub fn from_axes(field_independent: bool, reflective: bool) -> Self {
        match (field_independent, reflective) {
            (true, true) => LearnerType::IndependentReflective,
            (false, true) => LearnerType::DependentReflective,
            (true, false) => LearnerType::IndependentImpulsive,
            (false, false) => LearnerType::DependentImpulsive,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            LearnerType::IndependentReflective => "FI_R",
            LearnerType::DependentReflective => "FD_R",
            LearnerType::IndependentImpulsive => "FI_I",
            LearnerType::DependentImpulsive => "FD_I",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "FI_R" => Some(LearnerType::IndependentReflective),
            "FD_R" => Some(LearnerType::DependentReflective),
            "FI_I" => Some(LearnerType::IndependentImpulsive),
            "FD_I" => Some(LearnerType::DependentImpulsive),
            _ => None,
        }
    }

    pub fn all() -> &'static [LearnerType] {
        &[
            LearnerType::IndependentReflective,
            LearnerType::DependentReflective,
            LearnerType::IndependentImpulsive,
            LearnerType::DependentImpulsive,
        ]
    }
}

// --- Profiles ---

/// Result-screen metadata for one learner type.
pub struct TypeProfile {
    pub key: LearnerType,
    pub label: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
}

pub const TYPE_PROFILES: &[TypeProfile] = &[
    TypeProfile {
        key: LearnerType::IndependentReflective,
        label: "장독립·숙고형",
        title: "분석형 학습자",
        tags: &["논리적", "자기주도", "탐구형"],
        summary: "논리적으로 구조를 이해하고, 근거를 따져보며 깊이 있게 공부하는 스타일이에요.",
    },
    TypeProfile {
        key: LearnerType::DependentReflective,
        label: "장의존·숙고형",
        title: "협력형 학습자",
        tags: &["협력적", "성실한", "계획형"],
        summary: "사람과 함께 공부할 때 더 안정감을 느끼고, 차분하게 과정을 따라가는 스타일이에요.",
    },
    TypeProfile {
        key: LearnerType::IndependentImpulsive,
        label: "장독립·충동형",
        title: "창의형 학습자",
        tags: &["아이디어", "실험적", "도전적"],
        summary: "새로운 시도와 실험을 좋아하고, 스스로 다양한 방법을 만들어 보는 스타일이에요.",
    },
    TypeProfile {
        key: LearnerType::DependentImpulsive,
        label: "장의존·충동형",
        title: "사회형 학습자",
        tags: &["사교적", "에너지", "참여형"],
        summary: "사람들과 어울리며 공부할 때 동기부여가 잘 되고, 활동적인 학습에서 힘을 발휘해요.",
    },
];

pub fn profile_for(learner_type: LearnerType) -> &'static TypeProfile {
    match learner_type {
        LearnerType::IndependentReflective => &TYPE_PROFILES[0],
        LearnerType::DependentReflective => &TYPE_PROFILES[1],
        LearnerType::IndependentImpulsive => &TYPE_PROFILES[2],
        LearnerType::DependentImpulsive => &TYPE_PROFILES[3],
    }
}
