use crate::types::goals::Objective;

const AWARENESS: &str = "The user's goal is 'Create Awareness'. The main goal is to get attention and be memorable.
- **subjectiveFitScore**: Should be HIGHEST for messages that are simple, catchy, and have a strong emotional hook (positive like joy/surprise, or even negative if it's attention-grabbing). Prioritize high shareability and clarity.
- A message is a POOR FIT if it is too complex, boring, or lacks a strong emotional angle.";

const CONSIDERATION: &str = "The user's goal is 'Drive Consideration'. The main goal is to build trust and inform the user, helping them evaluate the product.
- **subjectiveFitScore**: Should be HIGHEST for messages that are informative, benefit-driven, and have a neutral-to-positive, trustworthy tone. Clarity and credibility are key.
- A message is a POOR FIT if it's overly emotional, vague, or sounds like high-pressure sales hype.";

const SALES: &str = "The user's goal is 'Drive Sales (Conversion)'. The main goal is to get the user to take a specific action NOW.
- **subjectiveFitScore**: Should be HIGHEST for messages with a very clear, strong Call-to-Action (CTA) that create urgency or scarcity (e.g., using fear of missing out). A slightly anxious or exciting tone is GOOD. The ctaStrengthScore is critical for this objective.
- A message is a POOR FIT if the CTA is weak/unclear, or if the tone is too passive and doesn't motivate action.";

const LOYALTY: &str = "The user's goal is 'Build Loyalty (Retention)'. The main goal is to make existing customers feel valued.
- **subjectiveFitScore**: Should be HIGHEST for messages with a warm, appreciative, and positive tone. Language of exclusivity (\"for our members\"), community, and gratitude should be rewarded.
- A message is a POOR FIT if it feels impersonal, generic, or is too focused on selling instead of thanking or rewarding.";

const BALANCED: &str =
    "No specific objective provided. Use a general-purpose analysis, balancing all factors equally.";

pub fn objective_instructions(objective: Option<Objective>) -> &'static str {
    match objective {
        Some(Objective::Awareness) => AWARENESS,
        Some(Objective::Consideration) => CONSIDERATION,
        Some(Objective::Sales) => SALES,
        Some(Objective::Loyalty) => LOYALTY,
        None => BALANCED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_objective_names_fit_and_poor_fit() {
        for objective in [
            Objective::Awareness,
            Objective::Consideration,
            Objective::Sales,
            Objective::Loyalty,
        ] {
            let text = objective_instructions(Some(objective));
            assert!(text.contains("subjectiveFitScore"));
            assert!(text.contains("POOR FIT"));
        }
    }

    #[test]
    fn sales_calls_out_cta_strength() {
        assert!(objective_instructions(Some(Objective::Sales)).contains("ctaStrengthScore"));
    }

    #[test]
    fn missing_objective_balances_all_factors() {
        assert!(objective_instructions(None).contains("balancing all factors equally"));
    }
}
