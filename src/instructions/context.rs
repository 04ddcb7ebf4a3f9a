use crate::types::goals::{Audience, BrandTone, CampaignGoalDetails};

pub(crate) const DETAILS_HEADER: &str = "**Optional Campaign Details for Deeper Analysis:**";
const DETAILS_DIRECTIVE: &str = "You MUST evaluate the campaign's fit against these specific details. The subjectiveFitScore should be heavily penalized if the message clashes with this context.";

/// Context directive block, or an empty string when no detail contributes text.
pub fn details_instructions(details: &CampaignGoalDetails) -> String {
    let mut lines = Vec::new();

    if let Some(audience) = audience_text(details) {
        lines.push(format!(
            "- **Target Audience:** \"{audience}\". The message should resonate with this specific group."
        ));
    }
    if let Some(tone) = brand_tone_text(details) {
        lines.push(format!(
            "- **Brand Tone/Voice:** \"{tone}\". The message's tone must be consistent with this brand voice."
        ));
    }
    if let Some(key_message) = details.key_message().filter(|text| !text.is_empty()) {
        lines.push(format!(
            "- **Key Message/USP:** \"{key_message}\". The message should clearly communicate or reinforce this core idea."
        ));
    }

    if lines.is_empty() {
        return String::new();
    }
    format!("{DETAILS_HEADER}\n{DETAILS_DIRECTIVE}\n{}\n", lines.join("\n"))
}

fn audience_text(details: &CampaignGoalDetails) -> Option<&str> {
    let text = match details.target_audience() {
        Audience::None => None,
        Audience::Custom => details.custom_target_audience(),
        preset => Some(preset.label()),
    };
    text.filter(|text| !text.is_empty())
}

fn brand_tone_text(details: &CampaignGoalDetails) -> Option<&str> {
    let text = match details.brand_tone() {
        BrandTone::None => None,
        BrandTone::Custom => details.custom_brand_tone(),
        preset => Some(preset.label()),
    };
    text.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_details_produce_no_block() {
        assert_eq!(details_instructions(&CampaignGoalDetails::default()), "");
    }

    #[test]
    fn empty_custom_audience_contributes_nothing() {
        let details = CampaignGoalDetails::default()
            .with_target_audience(Audience::Custom)
            .with_custom_target_audience("");
        assert_eq!(details_instructions(&details), "");
    }

    #[test]
    fn preset_contributes_its_label() {
        let details = CampaignGoalDetails::default().with_target_audience(Audience::Smb);
        let block = details_instructions(&details);
        assert!(block.starts_with(DETAILS_HEADER));
        assert!(block.contains("\"Small Business Owners\""));
        assert!(!block.contains("Brand Tone"));
    }

    #[test]
    fn custom_tone_and_key_message_are_verbatim() {
        let details = CampaignGoalDetails::default()
            .with_brand_tone(BrandTone::Custom)
            .with_custom_brand_tone("Calm, a little nerdy")
            .with_key_message("Battery lasts a week");
        let block = details_instructions(&details);

        assert!(block.contains("- **Brand Tone/Voice:** \"Calm, a little nerdy\"."));
        assert!(block.contains("- **Key Message/USP:** \"Battery lasts a week\"."));
        assert!(block.contains("heavily penalized"));
        assert!(!block.contains("Target Audience"));
    }

    #[test]
    fn lines_follow_audience_tone_key_message_order() {
        let details = CampaignGoalDetails::default()
            .with_key_message("Local farms")
            .with_brand_tone(BrandTone::Empathetic)
            .with_target_audience(Audience::Parents);
        let block = details_instructions(&details);

        let audience = block.find("Target Audience").expect("audience line");
        let tone = block.find("Brand Tone").expect("tone line");
        let key = block.find("Key Message").expect("key message line");
        assert!(audience < tone && tone < key);
    }
}
