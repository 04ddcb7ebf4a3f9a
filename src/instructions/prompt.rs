use super::InstructionText;
use crate::error::Result;
use crate::types::campaign::CampaignInput;

const ROLE: &str = "You are an expert marketing campaign analyst. Your task is to evaluate one or more campaign messages based on a rigorous set of criteria and the user's specified context. For each campaign object provided, you will return a corresponding analysis object. Return the analysis in a structured JSON format.";

const CRITERIA: &str = r#"**Analysis Criteria (Score from 1 to 5):**
For each of the 6 scores below, you MUST also provide a brief, one-sentence justification for the score you assigned in the corresponding '...Justification' field.

1. **combinedEmotionScore (1-5):** Analyze the raw emotional tone of the 'campaignMessage'. 1 is extremely negative, 3 is neutral, 5 is extremely positive.
2. **clarityAndImpactScore (1-5):** Evaluate the 'campaignMessage' quality. 1 is unclear and weak (passive voice, long sentences, jargon). 5 is crystal-clear and powerful (active voice, strong verbs, concise).
3. **trendRelevanceScore (1-5):** Assess relevance of the 'campaignMessage' to the provided "Trending Keywords". 1 is no relevance, 5 is highly relevant and well-integrated.
4. **steppsShareabilityScore (1-5):** Evaluate the 'campaignMessage' using Jonah Berger's STEPPS framework for virality (Social Currency, Triggers, Emotion, Public, Practical Value, Stories). Strong performance in 2-3 areas is excellent. 5 strongly incorporates several principles; 1 has no discernible viral triggers.
5. **ctaStrengthScore (1-5):** Analyze the specific 'callToAction' provided within each campaign object. 1 is weak, vague, or missing. 5 is clear, urgent, and persuasive.
6. **subjectiveFitScore (1-5):** This is the most important score. Based on the **Marketing Objective** and any provided **Optional Campaign Details**, how well does the message and its CTA fit the strategic goal? 1 is a complete mismatch, 5 is a perfect fit."#;

const RECOMMENDATION: &str = r#"**Final Calculations & Strategic Recommendation:**

1. **Calculate weightedCampaignConfidenceScore** as a weighted average: subjectiveFitScore 0.25, clarityAndImpactScore 0.20, combinedEmotionScore 0.20, ctaStrengthScore 0.15, trendRelevanceScore 0.10, steppsShareabilityScore 0.10. Round to two decimal places.
2. **Generate a strategicRecommendation object** acting as an expert marketing coach, with:
   * **verdict (string):** "✅ Strong potential to succeed" (score >= 4.0), "⚠️ Good, but revise key elements" (score >= 3.0 and < 4.0), or "❌ Needs rework before launch" (score < 3.0).
   * **summary (string):** 1-2 sentences explaining the core reason for the score in the context of the marketing objective.
   * **strengths (array of strings):** the top 1 or 2 strongest elements, phrased as positive takeaways.
   * **revisions (array of strings):** the top 1 or 2 most critical weaknesses, specific and actionable.
   * **suggestion (string):** one revised version of the campaign message that addresses those weaknesses."#;

const OUTPUT_FORMAT: &str = r#"**Output Format:**

Return a JSON object containing a single key "results" which is an array of JSON objects, one for each campaign object provided, in the same order. Ensure the 'campaignMessage' and 'callToAction' fields in the output match the input."#;

/// Full analysis prompt: instructions, the batch of campaigns, and the keywords.
pub fn build_prompt(
    instructions: &InstructionText,
    campaigns: &[CampaignInput],
    keywords: &[String],
) -> Result<String> {
    let campaigns_json = serde_json::to_string(campaigns)?;
    let keywords_json = serde_json::to_string(keywords)?;

    let mut prompt = String::new();
    prompt.push_str(ROLE);
    prompt.push_str("\n\n**Critical Context: Marketing Objective**\n");
    prompt.push_str(&instructions.render());
    prompt.push_str("\n\n**Input Data:**\n\n");
    prompt.push_str("1. **Campaigns to Analyze:** Each object contains a 'campaignMessage' and its corresponding 'callToAction'. Analyze them as a pair.\n```json\n");
    prompt.push_str(&campaigns_json);
    prompt.push_str("\n```\n\n");
    prompt.push_str("2. **Trending Keywords:** These keywords provide context for the 'trendRelevanceScore'.\n```json\n");
    prompt.push_str(&keywords_json);
    prompt.push_str("\n```\n\n");
    prompt.push_str(CRITERIA);
    prompt.push_str("\n\n");
    prompt.push_str(RECOMMENDATION);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT);
    prompt.push('\n');
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::compile;
    use crate::instructions::context::DETAILS_HEADER;
    use crate::types::goals::{CampaignGoalDetails, Objective};

    #[test]
    fn prompt_embeds_campaigns_and_keywords_as_json() {
        let instructions = compile(Some(Objective::Sales), &CampaignGoalDetails::default());
        let campaigns = vec![CampaignInput::new("Save 20% today", "Shop Now")];
        let keywords = vec!["summer sale".to_string()];

        let prompt = build_prompt(&instructions, &campaigns, &keywords).expect("prompt should build");
        assert!(prompt.contains(
            r#"[{"campaignMessage":"Save 20% today","callToAction":"Shop Now"}]"#
        ));
        assert!(prompt.contains(r#"["summer sale"]"#));
        assert!(prompt.contains("Drive Sales (Conversion)"));
        assert!(prompt.contains("\"results\""));
    }

    #[test]
    fn prompt_without_details_has_no_details_header() {
        let instructions = compile(None, &CampaignGoalDetails::default());
        let prompt = build_prompt(&instructions, &[], &[]).expect("prompt should build");
        assert!(!prompt.contains(DETAILS_HEADER));
        assert!(prompt.contains("balancing all factors equally"));
    }

    #[test]
    fn prompt_with_details_carries_details_header() {
        let details = CampaignGoalDetails::default().with_key_message("Free shipping");
        let instructions = compile(None, &details);
        let prompt = build_prompt(&instructions, &[], &[]).expect("prompt should build");
        assert_eq!(prompt.matches(DETAILS_HEADER).count(), 1);
        assert!(prompt.contains("\"Free shipping\""));
    }
}
