use serde::Serialize;

pub type Score = f64;

/// One rubric rating with the collaborator's one-sentence reason for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RubricScore {
    pub score: Score,
    pub justification: String,
}

impl RubricScore {
    pub fn new(score: Score, justification: impl Into<String>) -> Self {
        Self {
            score,
            justification: justification.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricScores {
    pub emotion: RubricScore,
    pub clarity_and_impact: RubricScore,
    pub trend_relevance: RubricScore,
    pub shareability: RubricScore,
    pub cta_strength: RubricScore,
    pub subjective_fit: RubricScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Strong,
    Good,
    Weak,
}

impl Verdict {
    pub fn badge(self) -> &'static str {
        match self {
            Self::Strong => "✅ Strong potential to succeed",
            Self::Good => "⚠️ Good, but revise key elements",
            Self::Weak => "❌ Needs rework before launch",
        }
    }
}
