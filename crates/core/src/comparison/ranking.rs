use std::cmp::Ordering;

use super::types::{Confidence, LocationScore, Recommendation};

/// Lead over the runner-up needed for a high-confidence recommendation.
pub const HIGH_CONFIDENCE_MARGIN: f64 = 10.0;
/// Lead over the runner-up needed for a medium-confidence recommendation.
pub const MEDIUM_CONFIDENCE_MARGIN: f64 = 3.0;

fn compare_rates(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts scores best first and assigns 1-based ranks.
///
/// Equal totals are ordered by the cheaper daily rate (unknown rates last),
/// then by name, then by id, so the order is fully deterministic.
pub fn rank_scores(mut scores: Vec<LocationScore>) -> Vec<LocationScore> {
    scores.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| compare_rates(a.daily_rate, b.daily_rate))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.location_id.cmp(&b.location_id))
    });
    for (index, score) in scores.iter_mut().enumerate() {
        score.rank = index + 1;
    }
    scores
}

/// Picks the top entry of a ranked list.
///
/// Returns `None` for an empty ranking.
pub fn recommend(ranked: &[LocationScore]) -> Option<Recommendation> {
    let best = ranked.first()?;
    let margin = match ranked.get(1) {
        Some(runner_up) => best.total - runner_up.total,
        None => best.total,
    };
    let margin = (margin * 100.0).round() / 100.0;

    let confidence = if margin >= HIGH_CONFIDENCE_MARGIN {
        Confidence::High
    } else if margin >= MEDIUM_CONFIDENCE_MARGIN {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let mut contributions: Vec<_> = best
        .breakdown
        .iter()
        .filter(|entry| entry.contribution > 0.0)
        .collect();
    contributions.sort_by(|a, b| {
        b.contribution
            .total_cmp(&a.contribution)
            .then_with(|| a.criterion.cmp(&b.criterion))
    });
    let reasons = contributions
        .into_iter()
        .take(2)
        .map(|entry| {
            format!(
                "{} contributes {:.1} points (sub-score {:.2})",
                entry.criterion, entry.contribution, entry.score
            )
        })
        .collect();

    Some(Recommendation {
        location_id: best.location_id,
        name: best.name.clone(),
        score: best.total,
        margin,
        confidence,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{Criterion, CriterionScore};
    use uuid::Uuid;

    fn score(name: &str, total: f64, rate: Option<f64>) -> LocationScore {
        LocationScore {
            location_id: Uuid::new_v4(),
            name: name.to_string(),
            rank: 0,
            total,
            daily_rate: rate,
            breakdown: Vec::new(),
            missing: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn names(scores: &[LocationScore]) -> Vec<&str> {
        scores.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_rank_by_total_descending() {
        let ranked = rank_scores(vec![
            score("Pier", 40.0, None),
            score("Mill", 90.5, None),
            score("Barn", 62.0, None),
        ]);

        assert_eq!(names(&ranked), vec!["Mill", "Barn", "Pier"]);
        assert_eq!(
            ranked.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_tie_break_prefers_cheaper_then_name() {
        let ranked = rank_scores(vec![
            score("Unpriced", 70.0, None),
            score("Zeta", 70.0, Some(500.0)),
            score("Dear", 70.0, Some(900.0)),
            score("Alpha", 70.0, Some(500.0)),
        ]);

        assert_eq!(names(&ranked), vec!["Alpha", "Zeta", "Dear", "Unpriced"]);
    }

    #[test]
    fn test_recommend_empty() {
        assert_eq!(recommend(&[]), None);
    }

    #[test]
    fn test_recommend_confidence_levels() {
        let high = rank_scores(vec![score("A", 80.0, None), score("B", 65.0, None)]);
        let medium = rank_scores(vec![score("A", 80.0, None), score("B", 75.0, None)]);
        let low = rank_scores(vec![score("A", 80.0, None), score("B", 79.0, None)]);

        assert_eq!(recommend(&high).unwrap().confidence, Confidence::High);
        assert_eq!(recommend(&medium).unwrap().confidence, Confidence::Medium);
        let low = recommend(&low).unwrap();
        assert_eq!(low.confidence, Confidence::Low);
        assert_eq!(low.margin, 1.0);
    }

    #[test]
    fn test_single_location_margin_is_its_score() {
        let ranked = rank_scores(vec![score("Solo", 42.5, None)]);

        let recommendation = recommend(&ranked).unwrap();
        assert_eq!(recommendation.margin, 42.5);
        assert_eq!(recommendation.name, "Solo");
    }

    #[test]
    fn test_reasons_name_top_two_contributions() {
        let mut best = score("Mill", 75.0, None);
        best.breakdown = vec![
            CriterionScore {
                criterion: Criterion::Cost,
                score: 0.5,
                weight: 0.2,
                contribution: 10.0,
            },
            CriterionScore {
                criterion: Criterion::Logistics,
                score: 1.0,
                weight: 0.4,
                contribution: 40.0,
            },
            CriterionScore {
                criterion: Criterion::Weather,
                score: 0.625,
                weight: 0.4,
                contribution: 25.0,
            },
        ];

        let recommendation = recommend(&[best]).unwrap();

        assert_eq!(recommendation.reasons.len(), 2);
        assert!(recommendation.reasons[0].starts_with("logistics contributes 40.0"));
        assert!(recommendation.reasons[1].starts_with("weather contributes 25.0"));
    }
}
