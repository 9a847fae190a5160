use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three classification categories, keyed by answer value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dosha {
    /// Answer value 1
    Vata,
    /// Answer value 2
    Pitta,
    /// Answer value 3
    Kapha,
}

impl Dosha {
    /// All doshas in answer-value order
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Map a raw answer value to its dosha
    #[must_use]
    pub const fn from_answer(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Vata),
            2 => Some(Self::Pitta),
            3 => Some(Self::Kapha),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Single-letter form used in facet report codes
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Vata => 'V',
            Self::Pitta => 'P',
            Self::Kapha => 'K',
        }
    }

    /// Case-insensitive lookup by display name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|dosha| dosha.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unordered pair of two distinct doshas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DualPair {
    VataPitta,
    PittaKapha,
    VataKapha,
}

impl DualPair {
    pub const ALL: [DualPair; 3] = [DualPair::VataPitta, DualPair::PittaKapha, DualPair::VataKapha];

    /// Pair containing both doshas, in either order. `None` when they are equal.
    #[must_use]
    pub fn from_members(a: Dosha, b: Dosha) -> Option<Self> {
        match (a.min(b), a.max(b)) {
            (Dosha::Vata, Dosha::Pitta) => Some(Self::VataPitta),
            (Dosha::Pitta, Dosha::Kapha) => Some(Self::PittaKapha),
            (Dosha::Vata, Dosha::Kapha) => Some(Self::VataKapha),
            _ => None,
        }
    }

    /// Members in answer-value order
    #[must_use]
    pub const fn members(self) -> (Dosha, Dosha) {
        match self {
            Self::VataPitta => (Dosha::Vata, Dosha::Pitta),
            Self::PittaKapha => (Dosha::Pitta, Dosha::Kapha),
            Self::VataKapha => (Dosha::Vata, Dosha::Kapha),
        }
    }

    #[must_use]
    pub fn contains(self, dosha: Dosha) -> bool {
        let (a, b) = self.members();
        a == dosha || b == dosha
    }

    /// Fixed-order name, e.g. `Vata-Pitta`
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::VataPitta => "Vata-Pitta",
            Self::PittaKapha => "Pitta-Kapha",
            Self::VataKapha => "Vata-Kapha",
        }
    }
}

impl fmt::Display for DualPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Per-dosha tally for one questionnaire section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoshaCounts {
    pub vata: usize,
    pub pitta: usize,
    pub kapha: usize,
}

impl DoshaCounts {
    #[must_use]
    pub const fn new(vata: usize, pitta: usize, kapha: usize) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Tally a section by linear scan
    #[must_use]
    pub fn from_section(section: &[Dosha]) -> Self {
        let mut counts = Self::default();
        for dosha in section {
            match dosha {
                Dosha::Vata => counts.vata += 1,
                Dosha::Pitta => counts.pitta += 1,
                Dosha::Kapha => counts.kapha += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, dosha: Dosha) -> usize {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.vata + self.pitta + self.kapha
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.vata.max(self.pitta).max(self.kapha)
    }

    /// Doshas with their counts, highest count first.
    ///
    /// Equal counts keep the order given by `priority`, so the first
    /// dosha in `priority` wins every tie.
    #[must_use]
    pub fn ranked(&self, priority: &[Dosha; 3]) -> [(Dosha, usize); 3] {
        let mut ranked = priority.map(|dosha| (dosha, self.get(dosha)));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn answer_values_map_to_doshas() {
        assert_eq!(Dosha::from_answer(1), Some(Dosha::Vata));
        assert_eq!(Dosha::from_answer(2), Some(Dosha::Pitta));
        assert_eq!(Dosha::from_answer(3), Some(Dosha::Kapha));
        assert_eq!(Dosha::from_answer(0), None);
        assert_eq!(Dosha::from_answer(4), None);
    }

    #[test]
    fn names_round_trip_case_insensitively() {
        assert_eq!(Dosha::from_name("pitta"), Some(Dosha::Pitta));
        assert_eq!(Dosha::from_name(" KAPHA "), Some(Dosha::Kapha));
        assert_eq!(Dosha::from_name("Ether"), None);
    }

    #[test]
    fn dual_pair_ignores_member_order() {
        assert_eq!(
            DualPair::from_members(Dosha::Pitta, Dosha::Vata),
            Some(DualPair::VataPitta)
        );
        assert_eq!(
            DualPair::from_members(Dosha::Kapha, Dosha::Pitta),
            Some(DualPair::PittaKapha)
        );
        assert_eq!(
            DualPair::from_members(Dosha::Kapha, Dosha::Vata),
            Some(DualPair::VataKapha)
        );
        assert_eq!(DualPair::from_members(Dosha::Kapha, Dosha::Kapha), None);
        assert!(DualPair::VataKapha.contains(Dosha::Kapha));
        assert!(!DualPair::VataKapha.contains(Dosha::Pitta));
    }

    #[test]
    fn ranking_uses_priority_for_ties() {
        let counts = DoshaCounts::new(4, 4, 4);
        let ranked = counts.ranked(&[Dosha::Pitta, Dosha::Vata, Dosha::Kapha]);
        assert_eq!(ranked.map(|(d, _)| d), [Dosha::Pitta, Dosha::Vata, Dosha::Kapha]);

        let ranked = counts.ranked(&Dosha::ALL);
        assert_eq!(ranked.map(|(d, _)| d), Dosha::ALL);

        let ranked = DoshaCounts::new(1, 2, 9).ranked(&Dosha::ALL);
        assert_eq!(ranked, [(Dosha::Kapha, 9), (Dosha::Pitta, 2), (Dosha::Vata, 1)]);
    }

    fn dosha_strategy() -> impl Strategy<Value = Dosha> {
        prop_oneof![Just(Dosha::Vata), Just(Dosha::Pitta), Just(Dosha::Kapha)]
    }

    proptest! {
        #[test]
        fn proptest_counts_sum_to_section_length(section in prop::collection::vec(dosha_strategy(), 1..40)) {
            let counts = DoshaCounts::from_section(&section);
            prop_assert_eq!(counts.total(), section.len());
        }

        #[test]
        fn proptest_counts_are_permutation_invariant(
            (section, shuffled) in prop::collection::vec(dosha_strategy(), 1..40)
                .prop_flat_map(|section| (Just(section.clone()), Just(section).prop_shuffle())),
        ) {
            prop_assert_eq!(
                DoshaCounts::from_section(&section),
                DoshaCounts::from_section(&shuffled)
            );
        }
    }
}
