use crate::dosha::{Dosha, DoshaCounts, DualPair};
use crate::imbalance::{SummaryKey, IMBALANCE_PRIORITY};

/// Map a current-state summary to its canonical code (1-9).
///
/// Balanced and mild summaries have no code. For dual keys the pair is
/// identified by membership, then the member with more answers wins; equal
/// counts go to whichever member comes first in [`IMBALANCE_PRIORITY`].
#[must_use]
pub fn canonical_code(key: &SummaryKey, counts: &DoshaCounts) -> Option<u8> {
    if key.is_mild() {
        return None;
    }

    match *key {
        SummaryKey::Balanced => None,
        SummaryKey::Single { dosha, .. } => Some(single_code(dosha)),
        SummaryKey::Dual { .. } => {
            let pair = key.pair()?;
            Some(dual_code(pair, pair_winner(pair, counts)))
        }
    }
}

const fn single_code(dosha: Dosha) -> u8 {
    match dosha {
        Dosha::Vata => 1,
        Dosha::Pitta => 2,
        Dosha::Kapha => 3,
    }
}

fn pair_winner(pair: DualPair, counts: &DoshaCounts) -> Dosha {
    let (a, b) = pair.members();
    let (count_a, count_b) = (counts.get(a), counts.get(b));
    if count_a != count_b {
        return if count_a > count_b { a } else { b };
    }

    IMBALANCE_PRIORITY
        .into_iter()
        .find(|dosha| pair.contains(*dosha))
        .unwrap_or(a)
}

const fn dual_code(pair: DualPair, winner: Dosha) -> u8 {
    match (pair, winner) {
        (DualPair::VataPitta, Dosha::Vata) => 4,
        (DualPair::VataPitta, _) => 5,
        (DualPair::PittaKapha, Dosha::Pitta) => 6,
        (DualPair::PittaKapha, _) => 7,
        (DualPair::VataKapha, Dosha::Vata) => 8,
        (DualPair::VataKapha, _) => 9,
    }
}
