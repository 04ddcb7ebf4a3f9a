pub mod grid;
pub mod json;
pub mod md;
pub mod xlsx;

use crate::error::{Result, ScorerError};
use crate::types::campaign::AnalysisRecord;
use crate::types::goals::Objective;
use crate::types::scoring::{Score, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// What an analysis run prints once the workbook is on disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub objective: Option<Objective>,
    pub report_path: String,
    pub sheet_name: String,
    pub campaigns: Vec<CampaignSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub campaign_message: String,
    pub call_to_action: String,
    pub confidence_score: Score,
    pub verdict: Verdict,
    pub badge: &'static str,
}

impl RunSummary {
    pub fn new(
        objective: Option<Objective>,
        report_path: impl Into<String>,
        sheet_name: impl Into<String>,
        records: &[AnalysisRecord],
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            objective,
            report_path: report_path.into(),
            sheet_name: sheet_name.into(),
            campaigns: records
                .iter()
                .map(|record| CampaignSummary {
                    campaign_message: record.campaign.campaign_message.clone(),
                    call_to_action: record.campaign.call_to_action.clone(),
                    confidence_score: record.confidence_score,
                    verdict: record.recommendation.verdict,
                    badge: record.recommendation.verdict.badge(),
                })
                .collect(),
        }
    }

    pub fn has_weak(&self) -> bool {
        self.campaigns
            .iter()
            .any(|campaign| campaign.verdict == Verdict::Weak)
    }
}

pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ScorerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(summary)),
    }
}
