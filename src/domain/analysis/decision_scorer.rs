//! Decision Scorer - Weighted-criteria composite score for a decision.

use crate::domain::records::Decision;

/// Weighted scoring over a decision's options and criteria.
pub struct DecisionScorer;

impl DecisionScorer {
    /// Computes the weighted composite score of a decision.
    ///
    /// # Algorithm
    /// For each criterion: sum `option.scores[criterion.id]` (missing -> 0)
    /// over ALL options, multiply by the criterion weight. Sum those
    /// products across criteria and divide by the total weight.
    ///
    /// The summation runs over every option, so the result is a single
    /// decision-level composite. It ranks decisions against each other,
    /// not options within a decision.
    ///
    /// # Edge Cases
    /// - No criteria: Returns 0.0
    /// - No options: Every criterion sums to 0, so the score is 0.0
    /// - Missing option scores: Treated as 0
    pub fn composite_score(decision: &Decision) -> f64 {
        let total_weight: f64 = decision.criteria.iter().map(|c| c.weight.as_f64()).sum();
        if total_weight == 0.0 {
            return 0.0;
        }

        let weighted_total: f64 = decision
            .criteria
            .iter()
            .map(|criterion| {
                let criterion_sum: f64 = decision
                    .options
                    .iter()
                    .map(|option| option.score_for(&criterion.id))
                    .sum();
                criterion_sum * criterion.weight.as_f64()
            })
            .sum();

        weighted_total / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::records::{DecisionCriterion, DecisionOption};

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800)
    }

    fn decision(options: Vec<DecisionOption>, criteria: Vec<DecisionCriterion>) -> Decision {
        Decision::new("test decision", "", options, criteria, now()).unwrap()
    }

    #[test]
    fn zero_criteria_scores_zero() {
        let d = decision(vec![DecisionOption::new("o1", "A", "")], vec![]);
        assert_eq!(DecisionScorer::composite_score(&d), 0.0);
    }

    #[test]
    fn zero_options_scores_zero() {
        let d = decision(vec![], vec![DecisionCriterion::new("c1", "Cost", 5).unwrap()]);
        assert_eq!(DecisionScorer::composite_score(&d), 0.0);
    }

    #[test]
    fn all_zero_scores_under_positive_weight_score_zero() {
        let d = decision(
            vec![
                DecisionOption::new("o1", "A", "").with_score("c1", 0.0),
                DecisionOption::new("o2", "B", ""),
            ],
            vec![DecisionCriterion::new("c1", "Cost", 8).unwrap()],
        );
        assert_eq!(DecisionScorer::composite_score(&d), 0.0);
    }

    #[test]
    fn single_criterion_averages_to_option_sum() {
        // One criterion: score = (sum * w) / w = sum over all options.
        let d = decision(
            vec![
                DecisionOption::new("o1", "A", "").with_score("c1", 3.0),
                DecisionOption::new("o2", "B", "").with_score("c1", 5.0),
            ],
            vec![DecisionCriterion::new("c1", "Cost", 4).unwrap()],
        );
        assert!((DecisionScorer::composite_score(&d) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn weights_bias_the_composite() {
        // c1 (w=1): sums to 2; c2 (w=3): sums to 10.
        // score = (2*1 + 10*3) / 4 = 8.0
        let d = decision(
            vec![
                DecisionOption::new("o1", "A", "")
                    .with_score("c1", 2.0)
                    .with_score("c2", 4.0),
                DecisionOption::new("o2", "B", "").with_score("c2", 6.0),
            ],
            vec![
                DecisionCriterion::new("c1", "Cost", 1).unwrap(),
                DecisionCriterion::new("c2", "Value", 3).unwrap(),
            ],
        );
        assert!((DecisionScorer::composite_score(&d) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn missing_entries_read_as_zero() {
        let d = decision(
            vec![
                DecisionOption::new("o1", "A", "").with_score("c1", 4.0),
                // o2 scores nothing at all.
                DecisionOption::new("o2", "B", ""),
            ],
            vec![
                DecisionCriterion::new("c1", "Cost", 2).unwrap(),
                DecisionCriterion::new("c2", "Value", 2).unwrap(),
            ],
        );
        // (4*2 + 0*2) / 4 = 2.0
        assert!((DecisionScorer::composite_score(&d) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn scores_not_tied_to_known_criteria_are_ignored() {
        let d = decision(
            vec![DecisionOption::new("o1", "A", "").with_score("ghost", 100.0)],
            vec![DecisionCriterion::new("c1", "Cost", 5).unwrap()],
        );
        assert_eq!(DecisionScorer::composite_score(&d), 0.0);
    }
}
