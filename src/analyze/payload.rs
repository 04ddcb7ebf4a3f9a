use crate::analyze::scoring;
use crate::error::{Result, ScorerError};
use crate::types::campaign::{AnalysisRecord, CampaignInput, StrategicRecommendation};
use crate::types::scoring::{RubricScore, RubricScores};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    results: Vec<RawAnalysis>,
}

/// One result as sent by the collaborator.
///
/// Scores and justifications are optional here so a gap surfaces as
/// `MissingField` for that result instead of a payload-wide decode failure.
/// The collaborator's own confidence score and verdict are not read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    campaign_message: String,
    call_to_action: String,
    combined_emotion_score: Option<f64>,
    combined_emotion_score_justification: Option<String>,
    clarity_and_impact_score: Option<f64>,
    clarity_and_impact_score_justification: Option<String>,
    trend_relevance_score: Option<f64>,
    trend_relevance_score_justification: Option<String>,
    stepps_shareability_score: Option<f64>,
    stepps_shareability_score_justification: Option<String>,
    cta_strength_score: Option<f64>,
    cta_strength_score_justification: Option<String>,
    subjective_fit_score: Option<f64>,
    subjective_fit_score_justification: Option<String>,
    strategic_recommendation: RawRecommendation,
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    summary: String,
    strengths: Vec<String>,
    revisions: Vec<String>,
    suggestion: String,
}

/// Structural problems make the whole payload unusable; the cause is only logged.
pub fn decode(payload: &str) -> Result<Vec<RawAnalysis>> {
    match serde_json::from_str::<AnalysisPayload>(payload) {
        Ok(parsed) => Ok(parsed.results),
        Err(e) => {
            tracing::error!(error = %e, "analysis payload is structurally invalid");
            Err(ScorerError::AnalysisUnavailable)
        }
    }
}

impl RawAnalysis {
    pub fn into_record(self, index: usize) -> Result<AnalysisRecord> {
        let scores = RubricScores {
            emotion: rubric(
                index,
                self.combined_emotion_score,
                "combinedEmotionScore",
                self.combined_emotion_score_justification,
                "combinedEmotionScoreJustification",
            )?,
            clarity_and_impact: rubric(
                index,
                self.clarity_and_impact_score,
                "clarityAndImpactScore",
                self.clarity_and_impact_score_justification,
                "clarityAndImpactScoreJustification",
            )?,
            trend_relevance: rubric(
                index,
                self.trend_relevance_score,
                "trendRelevanceScore",
                self.trend_relevance_score_justification,
                "trendRelevanceScoreJustification",
            )?,
            shareability: rubric(
                index,
                self.stepps_shareability_score,
                "steppsShareabilityScore",
                self.stepps_shareability_score_justification,
                "steppsShareabilityScoreJustification",
            )?,
            cta_strength: rubric(
                index,
                self.cta_strength_score,
                "ctaStrengthScore",
                self.cta_strength_score_justification,
                "ctaStrengthScoreJustification",
            )?,
            subjective_fit: rubric(
                index,
                self.subjective_fit_score,
                "subjectiveFitScore",
                self.subjective_fit_score_justification,
                "subjectiveFitScoreJustification",
            )?,
        };

        let outcome = scoring::score(&scores)?;
        tracing::debug!(
            record = index,
            confidence = outcome.confidence,
            verdict = ?outcome.verdict,
            "scored campaign"
        );

        let recommendation = self.strategic_recommendation;
        Ok(AnalysisRecord {
            campaign: CampaignInput::new(self.campaign_message, self.call_to_action),
            scores,
            confidence_score: outcome.confidence,
            recommendation: StrategicRecommendation {
                verdict: outcome.verdict,
                summary: recommendation.summary,
                strengths: recommendation.strengths,
                revisions: recommendation.revisions,
                suggestion: recommendation.suggestion,
            },
        })
    }
}

fn rubric(
    record: usize,
    score: Option<f64>,
    score_field: &'static str,
    justification: Option<String>,
    justification_field: &'static str,
) -> Result<RubricScore> {
    let score = score.ok_or(ScorerError::MissingField {
        record,
        field: score_field,
    })?;
    let justification = justification.ok_or(ScorerError::MissingField {
        record,
        field: justification_field,
    })?;
    Ok(RubricScore::new(score, justification))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::scoring::Verdict;
    use serde_json::{json, Value};

    pub(crate) fn sample_result(message: &str, cta: &str) -> Value {
        json!({
            "campaignMessage": message,
            "callToAction": cta,
            "combinedEmotionScore": 4,
            "combinedEmotionScoreJustification": "Upbeat and positive.",
            "clarityAndImpactScore": 4,
            "clarityAndImpactScoreJustification": "Short and direct.",
            "trendRelevanceScore": 3,
            "trendRelevanceScoreJustification": "Touches one keyword.",
            "steppsShareabilityScore": 3,
            "steppsShareabilityScoreJustification": "Some practical value.",
            "ctaStrengthScore": 5,
            "ctaStrengthScoreJustification": "Clear and urgent.",
            "subjectiveFitScore": 4,
            "subjectiveFitScoreJustification": "Fits a conversion goal.",
            "weightedCampaignConfidenceScore": 4.8,
            "strategicRecommendation": {
                "verdict": "✅ Strong potential to succeed",
                "summary": "A clear offer with an urgent CTA.",
                "strengths": ["Concrete discount", "Strong verb"],
                "revisions": ["Add a deadline"],
                "suggestion": "Save 20% today only - Shop Now"
            }
        })
    }

    #[test]
    fn collaborator_confidence_and_verdict_are_recomputed() {
        let payload = json!({ "results": [sample_result("Save 20% today", "Shop Now")] });
        let results = decode(&payload.to_string()).expect("payload should decode");
        let record = results
            .into_iter()
            .next()
            .expect("one result")
            .into_record(0)
            .expect("record should build");

        assert_eq!(record.confidence_score, 3.95);
        assert_eq!(record.recommendation.verdict, Verdict::Good);
        assert_eq!(record.recommendation.strengths[0], "Concrete discount");
        assert_eq!(record.campaign.call_to_action, "Shop Now");
    }

    #[test]
    fn missing_score_is_a_missing_field_error() {
        let mut result = sample_result("Msg", "Go");
        result
            .as_object_mut()
            .expect("object")
            .remove("ctaStrengthScore");
        let payload = json!({ "results": [sample_result("Ok", "Go"), result] });

        let mut results = decode(&payload.to_string()).expect("payload should decode");
        let second = results.pop().expect("two results");
        let err = second.into_record(1).expect_err("missing score should fail");
        assert!(matches!(
            err,
            ScorerError::MissingField {
                record: 1,
                field: "ctaStrengthScore"
            }
        ));
    }

    #[test]
    fn missing_justification_is_a_missing_field_error() {
        let mut result = sample_result("Msg", "Go");
        result
            .as_object_mut()
            .expect("object")
            .remove("subjectiveFitScoreJustification");
        let payload = json!({ "results": [result] });

        let raw = decode(&payload.to_string())
            .expect("payload should decode")
            .remove(0);
        assert!(matches!(
            raw.into_record(0),
            Err(ScorerError::MissingField {
                field: "subjectiveFitScoreJustification",
                ..
            })
        ));
    }

    #[test]
    fn structural_gaps_make_the_analysis_unavailable() {
        assert!(matches!(
            decode("not json"),
            Err(ScorerError::AnalysisUnavailable)
        ));
        assert!(matches!(
            decode(r#"{"items": []}"#),
            Err(ScorerError::AnalysisUnavailable)
        ));

        let mut result = sample_result("Msg", "Go");
        result
            .as_object_mut()
            .expect("object")
            .remove("strategicRecommendation");
        let payload = json!({ "results": [result] });
        assert!(matches!(
            decode(&payload.to_string()),
            Err(ScorerError::AnalysisUnavailable)
        ));
    }
}
