use crate::dosha::{Dosha, DoshaCounts};
use serde::{Deserialize, Serialize};

/// Tie-break order for the body and mind facets: Vata, then Pitta, then Kapha.
///
/// Distinct from [`crate::IMBALANCE_PRIORITY`]; the two must not be merged.
pub const CONSTITUTION_PRIORITY: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

/// Dominant dosha of a constitutional facet plus its optional modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionResult {
    pub primary: Dosha,
    pub modifier: Option<Dosha>,
}

impl ConstitutionResult {
    /// Primary initial followed by the modifier initial, e.g. `VP` or `K`
    #[must_use]
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.primary.initial());
        if let Some(modifier) = self.modifier {
            code.push(modifier.initial());
        }
        code
    }
}

/// Classify a body or mind section.
///
/// The modifier is the runner-up and is only set when it was answered at least once.
#[must_use]
pub fn classify_constitution(counts: &DoshaCounts) -> ConstitutionResult {
    let [(primary, _), (runner_up, runner_up_count), _] = counts.ranked(&CONSTITUTION_PRIORITY);
    ConstitutionResult {
        primary,
        modifier: (runner_up_count >= 1).then_some(runner_up),
    }
}
