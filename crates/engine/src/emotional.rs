use crate::dosha::{Dosha, DualPair};
use crate::error::EngineError;
use crate::imbalance::SummaryKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short empathetic sentence chosen from the current-state summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EmotionalLine {
    Single(Dosha),
    Dual(DualPair),
    MostlyBalanced,
    WellBalanced,
}

impl EmotionalLine {
    pub const ALL: [EmotionalLine; 8] = [
        EmotionalLine::Single(Dosha::Vata),
        EmotionalLine::Single(Dosha::Pitta),
        EmotionalLine::Single(Dosha::Kapha),
        EmotionalLine::Dual(DualPair::VataPitta),
        EmotionalLine::Dual(DualPair::PittaKapha),
        EmotionalLine::Dual(DualPair::VataKapha),
        EmotionalLine::MostlyBalanced,
        EmotionalLine::WellBalanced,
    ];

    /// Pick the line for a summary. Dual keys match in either order.
    #[must_use]
    pub fn for_summary(key: &SummaryKey) -> Self {
        if key.is_mild() {
            return Self::MostlyBalanced;
        }
        match *key {
            SummaryKey::Balanced => Self::WellBalanced,
            SummaryKey::Single { dosha, .. } => Self::Single(dosha),
            SummaryKey::Dual { .. } => key.pair().map_or(Self::MostlyBalanced, Self::Dual),
        }
    }

    /// Stable identifier stored with a snapshot
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Single(Dosha::Vata) => "vata",
            Self::Single(Dosha::Pitta) => "pitta",
            Self::Single(Dosha::Kapha) => "kapha",
            Self::Dual(DualPair::VataPitta) => "vata_pitta",
            Self::Dual(DualPair::PittaKapha) => "pitta_kapha",
            Self::Dual(DualPair::VataKapha) => "vata_kapha",
            Self::MostlyBalanced => "mostly_balanced",
            Self::WellBalanced => "well_balanced",
        }
    }

    #[must_use]
    pub const fn sentence(self) -> &'static str {
        match self {
            Self::Single(Dosha::Vata) => {
                "You may be feeling scattered, restless or anxious lately, as if your mind won't settle."
            }
            Self::Single(Dosha::Pitta) => {
                "You may be feeling irritable, driven or easily overheated, with little patience to spare."
            }
            Self::Single(Dosha::Kapha) => {
                "You may be feeling heavy, sluggish or unmotivated, finding it hard to get going."
            }
            Self::Dual(DualPair::VataPitta) => {
                "You may be swinging between restless worry and sharp frustration, running on nervous energy."
            }
            Self::Dual(DualPair::PittaKapha) => {
                "You may be pushing hard while feeling weighed down, caught between intensity and inertia."
            }
            Self::Dual(DualPair::VataKapha) => {
                "You may be alternating between anxious overthinking and low, foggy energy."
            }
            Self::MostlyBalanced => {
                "You seem mostly balanced, with a few gentle signs worth paying attention to."
            }
            Self::WellBalanced => {
                "You seem well balanced right now. Keep nurturing the habits that support you."
            }
        }
    }
}

impl fmt::Display for EmotionalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EmotionalLine {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|line| line.key() == key)
            .ok_or_else(|| EngineError::invalid_key(s))
    }
}

impl From<EmotionalLine> for String {
    fn from(line: EmotionalLine) -> Self {
        line.key().to_string()
    }
}

impl TryFrom<String> for EmotionalLine {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
