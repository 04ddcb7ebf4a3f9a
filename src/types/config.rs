use crate::error::ScorerError;
use crate::types::goals::{Audience, BrandTone, CampaignGoalDetails, Objective};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_REPORT_FILE: &str = "Campaign_Confidence_Report.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Analysis Report";

const MAX_SHEET_NAME_LEN: usize = 31;
const ILLEGAL_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub report: Option<ReportConfig>,
    pub campaign: Option<CampaignConfig>,
    pub logging: Option<LoggingConfig>,
    pub collaborator: Option<CollaboratorConfig>,
    /// Files merged to build this config, lowest precedence first.
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_file_name() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignConfig {
    pub objective: Option<Objective>,
    #[serde(default)]
    pub target_audience: Audience,
    pub custom_target_audience: Option<String>,
    #[serde(default)]
    pub brand_tone: BrandTone,
    pub custom_brand_tone: Option<String>,
    pub key_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollaboratorConfig {
    pub command: Option<String>,
}

impl ScorerConfig {
    pub fn report_file_name(&self) -> &str {
        self.report
            .as_ref()
            .map(|report| report.file_name.as_str())
            .unwrap_or(DEFAULT_REPORT_FILE)
    }

    pub fn sheet_name(&self) -> &str {
        self.report
            .as_ref()
            .map(|report| report.sheet_name.as_str())
            .unwrap_or(DEFAULT_SHEET_NAME)
    }

    pub fn objective(&self) -> Option<Objective> {
        self.campaign.as_ref().and_then(|campaign| campaign.objective)
    }

    /// Goal details routed through the setters, so stale custom text never survives.
    pub fn goal_details(&self) -> CampaignGoalDetails {
        let Some(campaign) = &self.campaign else {
            return CampaignGoalDetails::default();
        };

        let mut details = CampaignGoalDetails::default()
            .with_target_audience(campaign.target_audience)
            .with_brand_tone(campaign.brand_tone);
        if let Some(text) = &campaign.custom_target_audience {
            details = details.with_custom_target_audience(text.clone());
        }
        if let Some(text) = &campaign.custom_brand_tone {
            details = details.with_custom_brand_tone(text.clone());
        }
        if let Some(text) = &campaign.key_message {
            details = details.with_key_message(text.clone());
        }
        details
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn collaborator_command(&self) -> Option<&str> {
        self.collaborator
            .as_ref()
            .and_then(|collaborator| collaborator.command.as_deref())
    }

    pub fn validate(&self) -> Result<(), ScorerError> {
        let file_name = self.report_file_name();
        if !file_name.to_ascii_lowercase().ends_with(".xlsx") {
            return Err(ScorerError::ConfigParse(format!(
                "report.file_name must end with .xlsx (found {file_name})"
            )));
        }

        let sheet_name = self.sheet_name();
        if sheet_name.trim().is_empty() || sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ScorerError::ConfigParse(format!(
                "report.sheet_name must be 1 to {MAX_SHEET_NAME_LEN} characters"
            )));
        }
        if let Some(illegal) = sheet_name
            .chars()
            .find(|ch| ILLEGAL_SHEET_CHARS.contains(ch))
        {
            return Err(ScorerError::ConfigParse(format!(
                "report.sheet_name contains illegal character '{illegal}'"
            )));
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ScorerError::ConfigParse(format!(
                    "logging.level must be one of {} (found {level})",
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        if let Some(command) = self.collaborator_command() {
            if command.trim().is_empty() {
                return Err(ScorerError::ConfigParse(
                    "collaborator.command cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
