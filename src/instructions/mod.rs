pub mod context;
pub mod objective;
pub mod prompt;

use crate::types::goals::{CampaignGoalDetails, Objective};
use serde::Serialize;

/// Instruction bundle handed to the analysis collaborator. It never affects scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionText {
    pub objective: &'static str,
    /// Empty when no campaign detail was supplied.
    pub details: String,
}

impl InstructionText {
    pub fn render(&self) -> String {
        if self.details.is_empty() {
            self.objective.to_string()
        } else {
            format!("{}\n\n{}", self.objective, self.details)
        }
    }
}

pub fn compile(objective: Option<Objective>, details: &CampaignGoalDetails) -> InstructionText {
    InstructionText {
        objective: objective::objective_instructions(objective),
        details: context::details_instructions(details),
    }
}
