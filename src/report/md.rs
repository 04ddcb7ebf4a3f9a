use super::RunSummary;
use crate::types::goals::Objective;

pub fn to_markdown(summary: &RunSummary) -> String {
    let mut output = String::new();
    output.push_str("# Campaign Confidence Report\n\n");
    output.push_str(&format!(
        "Workbook: {} (sheet \"{}\")\n",
        summary.report_path, summary.sheet_name
    ));
    if let Some(objective) = summary.objective {
        output.push_str(&format!("Objective: {}\n", objective_name(objective)));
    }
    output.push('\n');

    output.push_str("## Campaigns\n\n");
    if summary.campaigns.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for (index, campaign) in summary.campaigns.iter().enumerate() {
        output.push_str(&format!(
            "{}. {:.2} {}\n   \"{}\" -> {}\n",
            index + 1,
            campaign.confidence_score,
            campaign.badge,
            campaign.campaign_message,
            campaign.call_to_action
        ));
    }
    output
}

fn objective_name(objective: Objective) -> &'static str {
    match objective {
        Objective::Awareness => "awareness",
        Objective::Consideration => "consideration",
        Objective::Sales => "sales",
        Objective::Loyalty => "loyalty",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::campaign::fixtures::sample_record;

    #[test]
    fn markdown_lists_each_campaign_with_badge() {
        let summary = RunSummary::new(
            Some(Objective::Sales),
            "Campaign_Confidence_Report.xlsx",
            "Analysis Report",
            &[sample_record("Save 20% today", "Shop Now")],
        );

        let rendered = to_markdown(&summary);
        assert!(rendered.contains("# Campaign Confidence Report"));
        assert!(rendered.contains("Objective: sales"));
        assert!(rendered.contains("1. 3.95 ⚠️ Good, but revise key elements"));
        assert!(rendered.contains("\"Save 20% today\" -> Shop Now"));
    }

    #[test]
    fn markdown_without_campaigns_says_none() {
        let summary = RunSummary::new(None, "r.xlsx", "Analysis Report", &[]);
        let rendered = to_markdown(&summary);
        assert!(rendered.contains("- none"));
        assert!(!rendered.contains("Objective:"));
    }
}
