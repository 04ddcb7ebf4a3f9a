use crate::types::scoring::{RubricScores, Score, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub campaign_message: String,
    pub call_to_action: String,
}

impl CampaignInput {
    pub fn new(campaign_message: impl Into<String>, call_to_action: impl Into<String>) -> Self {
        Self {
            campaign_message: campaign_message.into(),
            call_to_action: call_to_action.into(),
        }
    }
}

/// Coaching authored by the collaborator, with the verdict recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategicRecommendation {
    pub verdict: Verdict,
    pub summary: String,
    /// Most important first.
    pub strengths: Vec<String>,
    /// Most important first.
    pub revisions: Vec<String>,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub campaign: CampaignInput,
    pub scores: RubricScores,
    pub confidence_score: Score,
    pub recommendation: StrategicRecommendation,
}
