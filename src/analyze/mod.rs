pub mod collaborator;
pub mod payload;
pub mod scoring;

use crate::error::{Result, ScorerError};
use crate::types::campaign::{AnalysisRecord, CampaignInput};
use collaborator::{AnalysisCollaborator, AnalysisRequest};

/// Rejects a submission before any collaborator is contacted.
pub fn validate_submission(campaigns: &[CampaignInput], keywords: &[String]) -> Result<()> {
    if campaigns.is_empty() {
        return Err(ScorerError::Validation(
            "please provide at least one campaign message and its call-to-action".to_string(),
        ));
    }
    if keywords.is_empty() {
        return Err(ScorerError::Validation(
            "please provide keywords for trend analysis".to_string(),
        ));
    }
    Ok(())
}

/// One collaborator round trip for the whole batch, then local scoring of every result.
///
/// Collaborator failures, including a result count that differs from the
/// campaign count, are logged in full and surface only as
/// `AnalysisUnavailable`. No partial results are returned.
pub fn analyze(
    collaborator: &dyn AnalysisCollaborator,
    request: &AnalysisRequest,
) -> Result<Vec<AnalysisRecord>> {
    let name = collaborator.name();
    tracing::info!(
        collaborator = %name,
        campaigns = request.campaigns.len(),
        "requesting campaign analysis"
    );

    let payload = collaborator.analyze(request).map_err(|e| {
        tracing::error!(collaborator = %name, error = %e, "analysis collaborator failed");
        ScorerError::AnalysisUnavailable
    })?;

    let results = payload::decode(&payload)?;
    if results.len() != request.campaigns.len() {
        tracing::error!(
            expected = request.campaigns.len(),
            received = results.len(),
            "collaborator returned a different number of results than campaigns sent"
        );
        return Err(ScorerError::AnalysisUnavailable);
    }

    let records = results
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_record(index))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(records = records.len(), "analysis complete");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::collaborator::CollaboratorError;
    use crate::analyze::payload::tests::sample_result;
    use crate::instructions::compile;
    use crate::types::goals::{CampaignGoalDetails, Objective};
    use crate::types::scoring::Verdict;
    use chrono::Utc;
    use serde_json::json;
    use std::cell::Cell;

    struct Canned {
        payload: std::result::Result<String, String>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn ok(payload: serde_json::Value) -> Self {
            Self {
                payload: Ok(payload.to_string()),
                calls: Cell::new(0),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                payload: Err(reason.to_string()),
                calls: Cell::new(0),
            }
        }
    }

    impl AnalysisCollaborator for Canned {
        fn name(&self) -> String {
            "canned".to_string()
        }

        fn analyze(
            &self,
            _request: &AnalysisRequest,
        ) -> std::result::Result<String, CollaboratorError> {
            self.calls.set(self.calls.get() + 1);
            self.payload.clone().map_err(|reason| CollaboratorError::Pipe {
                program: "canned".to_string(),
                reason,
            })
        }
    }

    fn request(campaigns: Vec<CampaignInput>) -> AnalysisRequest {
        AnalysisRequest {
            requested_at: Utc::now(),
            objective: Some(Objective::Sales),
            campaigns,
            keywords: vec!["sale".to_string()],
            instructions: compile(Some(Objective::Sales), &CampaignGoalDetails::default()),
            prompt: String::new(),
        }
    }

    #[test]
    fn validation_requires_campaigns_then_keywords() {
        let campaign = vec![CampaignInput::new("Msg", "Go")];
        let keywords = vec!["k".to_string()];

        let err = validate_submission(&[], &[]).expect_err("no campaigns");
        assert!(err.to_string().contains("at least one campaign"));
        let err = validate_submission(&campaign, &[]).expect_err("no keywords");
        assert!(err.to_string().contains("keywords"));
        assert!(validate_submission(&campaign, &keywords).is_ok());
    }

    #[test]
    fn batch_is_sent_once_and_scored_in_order() {
        let collaborator = Canned::ok(json!({
            "results": [
                sample_result("Save 20% today", "Shop Now"),
                sample_result("Second", "Try it"),
            ]
        }));
        let campaigns = vec![
            CampaignInput::new("Save 20% today", "Shop Now"),
            CampaignInput::new("Second", "Try it"),
        ];

        let records = analyze(&collaborator, &request(campaigns)).expect("analysis succeeds");
        assert_eq!(collaborator.calls.get(), 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].campaign.campaign_message, "Second");
        assert!(records
            .iter()
            .all(|record| record.recommendation.verdict == Verdict::Good));
    }

    #[test]
    fn collaborator_failure_is_generic() {
        let collaborator = Canned::failing("HTTP 500 from upstream with secret trace id");
        let err = analyze(&collaborator, &request(vec![CampaignInput::new("M", "C")]))
            .expect_err("failure should surface");
        assert!(matches!(err, ScorerError::AnalysisUnavailable));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn one_incomplete_result_fails_the_batch() {
        let mut broken = sample_result("Second", "Try it");
        broken
            .as_object_mut()
            .expect("object")
            .remove("trendRelevanceScore");
        let collaborator = Canned::ok(json!({
            "results": [sample_result("First", "Go"), broken]
        }));

        let err = analyze(
            &collaborator,
            &request(vec![
                CampaignInput::new("First", "Go"),
                CampaignInput::new("Second", "Try it"),
            ]),
        )
        .expect_err("missing field should fail");
        assert!(matches!(err, ScorerError::MissingField { record: 1, .. }));
    }

    #[test]
    fn result_count_mismatch_fails_the_batch() {
        let single = vec![CampaignInput::new("Save 20% today", "Shop Now")];

        let empty = Canned::ok(json!({ "results": [] }));
        let err = analyze(&empty, &request(single.clone())).expect_err("no results");
        assert!(matches!(err, ScorerError::AnalysisUnavailable));

        let surplus = Canned::ok(json!({
            "results": [
                sample_result("Save 20% today", "Shop Now"),
                sample_result("Unrequested", "Extra"),
            ]
        }));
        let err = analyze(&surplus, &request(single)).expect_err("extra result");
        assert!(matches!(err, ScorerError::AnalysisUnavailable));
    }
}
