use crate::dosha::{Dosha, DoshaCounts, DualPair};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tie-break order for the current-state facet: Pitta, then Vata, then Kapha.
///
/// Distinct from [`crate::CONSTITUTION_PRIORITY`]; the two must not be merged.
pub const IMBALANCE_PRIORITY: [Dosha; 3] = [Dosha::Pitta, Dosha::Vata, Dosha::Kapha];

/// Minimum count for a dominant imbalance
pub const DOMINANT_LEVEL: usize = 8;

/// Minimum count for a secondary imbalance
pub const SECONDARY_LEVEL: usize = 6;

/// Minimum count for a mild imbalance; lower counts get no level
pub const MILD_LEVEL: usize = 4;

const MILD_SUFFIX: &str = " (mild)";
const BALANCED: &str = "Balanced";

/// Severity of a current-state imbalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImbalanceLevel {
    Dominant,
    Secondary,
    Mild,
}

impl ImbalanceLevel {
    #[must_use]
    pub const fn from_count(count: usize) -> Option<Self> {
        if count >= DOMINANT_LEVEL {
            Some(Self::Dominant)
        } else if count >= SECONDARY_LEVEL {
            Some(Self::Secondary)
        } else if count >= MILD_LEVEL {
            Some(Self::Mild)
        } else {
            None
        }
    }
}

/// A dosha with enough current-state answers to carry a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imbalance {
    pub dosha: Dosha,
    pub count: usize,
    pub level: ImbalanceLevel,
}

/// Human-readable summary of the current state.
///
/// Renders as `Pitta`, `Pitta-Vata`, `Kapha (mild)`, `Vata-Pitta (mild)` or `Balanced`.
/// Dual keys keep ranked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SummaryKey {
    Balanced,
    Single { dosha: Dosha, mild: bool },
    Dual { first: Dosha, second: Dosha, mild: bool },
}

impl SummaryKey {
    #[must_use]
    pub const fn is_mild(&self) -> bool {
        match self {
            Self::Balanced => false,
            Self::Single { mild, .. } | Self::Dual { mild, .. } => *mild,
        }
    }

    /// Unordered pair behind a dual key
    #[must_use]
    pub fn pair(&self) -> Option<DualPair> {
        match *self {
            Self::Dual { first, second, .. } => DualPair::from_members(first, second),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str(BALANCED),
            Self::Single { dosha, mild } => {
                write!(f, "{dosha}{}", if *mild { MILD_SUFFIX } else { "" })
            }
            Self::Dual {
                first,
                second,
                mild,
            } => write!(
                f,
                "{first}-{second}{}",
                if *mild { MILD_SUFFIX } else { "" }
            ),
        }
    }
}

impl FromStr for SummaryKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == BALANCED {
            return Ok(Self::Balanced);
        }

        let (body, mild) = match trimmed.strip_suffix(MILD_SUFFIX) {
            Some(body) => (body.trim_end(), true),
            None => (trimmed, false),
        };

        let names: Vec<&str> = body.split('-').collect();
        let doshas: Option<Vec<Dosha>> = names.iter().map(|name| Dosha::from_name(name)).collect();
        match doshas.as_deref() {
            Some([dosha]) => Ok(Self::Single {
                dosha: *dosha,
                mild,
            }),
            Some([first, second]) if first != second => Ok(Self::Dual {
                first: *first,
                second: *second,
                mild,
            }),
            _ => Err(EngineError::invalid_key(s)),
        }
    }
}

impl From<SummaryKey> for String {
    fn from(key: SummaryKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for SummaryKey {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Current-state classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImbalanceResult {
    pub summary_key: SummaryKey,
    /// Leveled doshas in ranked order
    pub imbalances: Vec<Imbalance>,
    pub counts: DoshaCounts,
}

/// Classify the current-state section.
///
/// Summary cases are checked top to bottom on the two highest ranked counts;
/// the first match wins.
#[must_use]
pub fn classify_imbalance(counts: &DoshaCounts) -> ImbalanceResult {
    let ranked = counts.ranked(&IMBALANCE_PRIORITY);

    let imbalances = ranked
        .iter()
        .filter_map(|&(dosha, count)| {
            ImbalanceLevel::from_count(count).map(|level| Imbalance { dosha, count, level })
        })
        .collect();

    let [(top, top_count), (second, second_count), _] = ranked;
    let summary_key = if top_count >= DOMINANT_LEVEL && second_count >= DOMINANT_LEVEL {
        SummaryKey::Dual {
            first: top,
            second,
            mild: false,
        }
    } else if top_count >= DOMINANT_LEVEL {
        SummaryKey::Single {
            dosha: top,
            mild: false,
        }
    } else if top_count >= SECONDARY_LEVEL && second_count >= SECONDARY_LEVEL {
        SummaryKey::Dual {
            first: top,
            second,
            mild: true,
        }
    } else if top_count >= MILD_LEVEL {
        // Covers a lone secondary top as well as a mild top.
        SummaryKey::Single {
            dosha: top,
            mild: true,
        }
    } else {
        SummaryKey::Balanced
    };

    log::debug!("Current-state counts {counts:?} summarised as '{summary_key}'");

    ImbalanceResult {
        summary_key,
        imbalances,
        counts: *counts,
    }
}
