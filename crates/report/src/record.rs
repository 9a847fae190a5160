use prakriti_engine::{ClassificationSnapshot, ConstitutionResult};
use serde::{Deserialize, Serialize};

/// Snapshot-shaped merge input, as persisted by the surrounding application.
///
/// Every field is optional on the wire so partially stored records still merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub body_primary: String,
    pub body_modifier: Option<String>,
    pub mind_primary: String,
    pub mind_modifier: Option<String>,
    /// Current-state summary key, e.g. `Pitta-Vata (mild)`
    pub imbalance_key: String,
    pub body_code: Option<String>,
    pub mind_code: Option<String>,
    pub current_code: Option<String>,
}

impl From<&ClassificationSnapshot> for ProfileRecord {
    fn from(snapshot: &ClassificationSnapshot) -> Self {
        let name = |result: &ConstitutionResult| {
            (
                result.primary.to_string(),
                result.modifier.map(|m| m.to_string()),
            )
        };
        let (body_primary, body_modifier) = name(&snapshot.body);
        let (mind_primary, mind_modifier) = name(&snapshot.mind);

        Self {
            body_primary,
            body_modifier,
            mind_primary,
            mind_modifier,
            imbalance_key: snapshot.current.summary_key.to_string(),
            body_code: Some(snapshot.body.code()),
            mind_code: Some(snapshot.mind.code()),
            current_code: snapshot.canonical_code.map(|code| code.to_string()),
        }
    }
}
