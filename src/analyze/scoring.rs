use crate::error::ScorerError;
use crate::types::scoring::{RubricScores, Score, Verdict};

pub const MIN_RUBRIC_SCORE: Score = 1.0;
pub const MAX_RUBRIC_SCORE: Score = 5.0;

pub const STRONG_THRESHOLD: Score = 4.0;
pub const GOOD_THRESHOLD: Score = 3.0;

// Weights in percent so the weighted sum lands directly in hundredths.
const SUBJECTIVE_FIT_WEIGHT: Score = 25.0;
const CLARITY_WEIGHT: Score = 20.0;
const EMOTION_WEIGHT: Score = 20.0;
const CTA_STRENGTH_WEIGHT: Score = 15.0;
const TREND_RELEVANCE_WEIGHT: Score = 10.0;
const SHAREABILITY_WEIGHT: Score = 10.0;

pub const WEIGHT_PERCENTS: [Score; 6] = [
    SUBJECTIVE_FIT_WEIGHT,
    CLARITY_WEIGHT,
    EMOTION_WEIGHT,
    CTA_STRENGTH_WEIGHT,
    TREND_RELEVANCE_WEIGHT,
    SHAREABILITY_WEIGHT,
];

// Absorbs binary representation error so decimal ties such as 1.025 round up.
const TIE_EPSILON: Score = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    pub confidence: Score,
    pub verdict: Verdict,
}

/// Weighted confidence (two decimals, half away from zero) and its verdict band.
///
/// Each rubric score is clamped to 1..=5 before weighting.
pub fn score(scores: &RubricScores) -> Result<ScoreOutcome, ScorerError> {
    let fit = clamped(scores.subjective_fit.score, "subjectiveFitScore")?;
    let clarity = clamped(scores.clarity_and_impact.score, "clarityAndImpactScore")?;
    let emotion = clamped(scores.emotion.score, "combinedEmotionScore")?;
    let cta = clamped(scores.cta_strength.score, "ctaStrengthScore")?;
    let trend = clamped(scores.trend_relevance.score, "trendRelevanceScore")?;
    let share = clamped(scores.shareability.score, "steppsShareabilityScore")?;

    // Same order as WEIGHT_PERCENTS.
    let ordered = [fit, clarity, emotion, cta, trend, share];
    let hundredths: Score = ordered
        .iter()
        .zip(WEIGHT_PERCENTS)
        .map(|(value, weight)| value * weight)
        .sum();
    let confidence = (hundredths + TIE_EPSILON).round() / 100.0;

    Ok(ScoreOutcome {
        confidence,
        verdict: verdict_for(confidence),
    })
}

/// Expects an already rounded confidence score.
pub fn verdict_for(confidence: Score) -> Verdict {
    if confidence >= STRONG_THRESHOLD {
        Verdict::Strong
    } else if confidence >= GOOD_THRESHOLD {
        Verdict::Good
    } else {
        Verdict::Weak
    }
}

/// Rubric score as shown in reports: clamped, then two decimals, half away from zero.
pub fn display_score(value: Score) -> String {
    let value = if value.is_finite() {
        value.clamp(MIN_RUBRIC_SCORE, MAX_RUBRIC_SCORE)
    } else {
        MIN_RUBRIC_SCORE
    };
    format!("{:.2}", (value * 100.0 + TIE_EPSILON).round() / 100.0)
}

fn clamped(value: Score, field: &'static str) -> Result<Score, ScorerError> {
    if !value.is_finite() {
        return Err(ScorerError::NonFiniteScore { field });
    }
    Ok(value.clamp(MIN_RUBRIC_SCORE, MAX_RUBRIC_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::RubricScore;

    fn scores(
        emotion: Score,
        clarity: Score,
        trend: Score,
        share: Score,
        cta: Score,
        fit: Score,
    ) -> RubricScores {
        RubricScores {
            emotion: RubricScore::new(emotion, "emotion"),
            clarity_and_impact: RubricScore::new(clarity, "clarity"),
            trend_relevance: RubricScore::new(trend, "trend"),
            shareability: RubricScore::new(share, "share"),
            cta_strength: RubricScore::new(cta, "cta"),
            subjective_fit: RubricScore::new(fit, "fit"),
        }
    }

    fn uniform(value: Score) -> RubricScores {
        scores(value, value, value, value, value, value)
    }

    #[test]
    fn weights_sum_to_one() {
        let total: Score = WEIGHT_PERCENTS.iter().sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn sales_example_lands_in_good_band() {
        let outcome = score(&scores(4.0, 4.0, 3.0, 3.0, 5.0, 4.0)).expect("scores are valid");
        assert_eq!(outcome.confidence, 3.95);
        assert_eq!(outcome.verdict, Verdict::Good);
    }

    #[test]
    fn extremes_stay_within_rubric_range() {
        assert_eq!(score(&uniform(1.0)).expect("valid").confidence, 1.0);
        assert_eq!(score(&uniform(5.0)).expect("valid").confidence, 5.0);
    }

    #[test]
    fn out_of_range_scores_are_clamped_before_weighting() {
        let valid = |scores: RubricScores| score(&scores).expect("valid");
        assert_eq!(valid(uniform(6.0)), valid(uniform(5.0)));
        assert_eq!(valid(uniform(0.0)), valid(uniform(1.0)));

        let mixed = score(&scores(-3.0, 4.0, 9.5, 3.0, 5.0, 4.0)).expect("valid");
        let clamped = score(&scores(1.0, 4.0, 5.0, 3.0, 5.0, 4.0)).expect("valid");
        assert_eq!(mixed, clamped);
    }

    #[test]
    fn verdict_bands_are_closed_below() {
        assert_eq!(score(&uniform(4.0)).expect("valid").verdict, Verdict::Strong);
        assert_eq!(score(&uniform(3.0)).expect("valid").verdict, Verdict::Good);
        assert_eq!(verdict_for(4.0), Verdict::Strong);
        assert_eq!(verdict_for(3.99), Verdict::Good);
        assert_eq!(verdict_for(3.0), Verdict::Good);
        assert_eq!(verdict_for(2.999), Verdict::Weak);
    }

    #[test]
    fn ties_round_half_away_from_zero() {
        // 25 * 1.1 + 75 = 102.5 hundredths
        let outcome = score(&scores(1.0, 1.0, 1.0, 1.0, 1.0, 1.1)).expect("valid");
        assert_eq!(outcome.confidence, 1.03);
    }

    #[test]
    fn unrounded_scores_are_accepted() {
        let outcome = score(&scores(3.7, 4.2, 2.9, 3.3, 4.8, 4.4)).expect("valid");
        // 110 + 84 + 74 + 72 + 29 + 33 = 402 hundredths
        assert_eq!(outcome.confidence, 4.02);
        assert_eq!(outcome.verdict, Verdict::Strong);
    }

    #[test]
    fn display_score_clamps_and_pads() {
        assert_eq!(display_score(4.0), "4.00");
        assert_eq!(display_score(3.95), "3.95");
        assert_eq!(display_score(4.125), "4.13");
        assert_eq!(display_score(6.0), "5.00");
        assert_eq!(display_score(0.5), "1.00");
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let err = score(&scores(Score::NAN, 4.0, 3.0, 3.0, 5.0, 4.0)).expect_err("nan rejected");
        assert!(matches!(
            err,
            ScorerError::NonFiniteScore {
                field: "combinedEmotionScore"
            }
        ));
    }
}
