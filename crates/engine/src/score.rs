use crate::dosha::DoshaCounts;

/// Score ceilings applied when one dosha reaches a count, checked highest first.
///
/// These share boundary numbers with the imbalance levels but are tuned separately.
pub const SCORE_CAPS: [(usize, f64); 3] = [(10, 30.0), (9, 40.0), (8, 50.0)];

/// Points lost per unit of pairwise spread
const SPREAD_PENALTY: f64 = 2.0;

/// Wellness score in `[0, 100]` for the current-state counts.
///
/// Starts from 100 minus twice the summed pairwise spread, then applies the
/// first matching ceiling from [`SCORE_CAPS`].
#[must_use]
pub fn balance_score(counts: &DoshaCounts) -> f64 {
    let DoshaCounts { vata, pitta, kapha } = *counts;
    let spread = vata.abs_diff(pitta) + pitta.abs_diff(kapha) + vata.abs_diff(kapha);

    let mut score = (100.0 - spread as f64 * SPREAD_PENALTY).max(0.0);
    let peak = counts.max();
    if let Some(&(_, cap)) = SCORE_CAPS.iter().find(|(threshold, _)| peak >= *threshold) {
        score = score.min(cap);
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(vata: usize, pitta: usize, kapha: usize) -> f64 {
        balance_score(&DoshaCounts::new(vata, pitta, kapha))
    }

    #[test]
    fn even_split_scores_full_marks() {
        assert_eq!(score(6, 6, 6), 100.0);
        assert_eq!(score(0, 0, 0), 100.0);
    }

    #[test]
    fn spread_costs_two_points_per_unit() {
        // spread = 1 + 1 + 2
        assert_eq!(score(7, 6, 5), 92.0);
        // spread = 2 + 0 + 2
        assert_eq!(score(5, 7, 5), 92.0);
    }

    #[test]
    fn caps_apply_by_peak_count() {
        // spread 6 -> 88, capped at 50
        assert_eq!(score(8, 5, 5), 50.0);
        // spread 12 -> 76, capped at 40
        assert_eq!(score(9, 6, 3), 40.0);
        // spread 14 -> 72, capped at 30
        assert_eq!(score(10, 5, 3), 30.0);
        // spread 36 -> 28, below every cap
        assert_eq!(score(18, 0, 0), 28.0);
    }

    #[test]
    fn cap_never_raises_a_lower_score() {
        // spread 34 -> 32, cap 30
        assert_eq!(score(17, 1, 0), 30.0);
        // spread 16 -> 68, cap 50
        assert_eq!(score(8, 8, 0), 50.0);
    }

    #[test]
    fn huge_spread_floors_at_zero() {
        assert_eq!(score(60, 0, 0), 0.0);
    }

    proptest! {
        #[test]
        fn proptest_score_in_range(vata in 0usize..40, pitta in 0usize..40, kapha in 0usize..40) {
            let s = score(vata, pitta, kapha);
            prop_assert!((0.0..=100.0).contains(&s));
        }

        #[test]
        fn proptest_widening_a_gap_never_raises_score(vata in 0usize..18, pitta in 0usize..18, kapha in 0usize..18) {
            // Moving one answer from the smallest bucket to the largest widens every gap it touches.
            let counts = DoshaCounts::new(vata, pitta, kapha);
            let min = vata.min(pitta).min(kapha);
            prop_assume!(min > 0);
            let mut wider = counts;
            if vata == counts.max() {
                wider.vata += 1;
            } else if pitta == counts.max() {
                wider.pitta += 1;
            } else {
                wider.kapha += 1;
            }
            if kapha == min {
                wider.kapha -= 1;
            } else if pitta == min {
                wider.pitta -= 1;
            } else {
                wider.vata -= 1;
            }
            prop_assert!(balance_score(&wider) <= balance_score(&counts));
        }
    }
}
