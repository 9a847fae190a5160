use crate::answers::AnswerVector;
use crate::code::canonical_code;
use crate::constitution::{classify_constitution, ConstitutionResult};
use crate::emotional::EmotionalLine;
use crate::error::Result;
use crate::imbalance::{classify_imbalance, ImbalanceResult};
use crate::score::balance_score;
use serde::{Deserialize, Serialize};

/// Everything computed from one questionnaire response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSnapshot {
    /// Body facet (answers 1-6)
    pub body: ConstitutionResult,

    /// Mind facet (answers 7-18)
    pub mind: ConstitutionResult,

    /// Current-state facet (answers 19-36)
    pub current: ImbalanceResult,

    /// Canonical code 1-9, absent when balanced or only mildly imbalanced
    pub canonical_code: Option<u8>,

    /// Wellness score in `[0, 100]`
    pub balance_score: f64,

    pub emotional_line: EmotionalLine,
}

/// Validate raw answers and classify them
pub fn classify(raw: &[i64]) -> Result<ClassificationSnapshot> {
    let answers = AnswerVector::parse(raw)?;
    Ok(classify_answers(&answers))
}

/// Classify an already validated answer vector
#[must_use]
pub fn classify_answers(answers: &AnswerVector) -> ClassificationSnapshot {
    let counts = answers.sections().counts();

    let body = classify_constitution(&counts.body);
    let mind = classify_constitution(&counts.mind);
    let current = classify_imbalance(&counts.current);

    let canonical_code = canonical_code(&current.summary_key, &current.counts);
    let balance_score = balance_score(&current.counts);
    let emotional_line = EmotionalLine::for_summary(&current.summary_key);

    log::debug!(
        "Classified answers: body={}, mind={}, current='{}', code={:?}, score={:.1}",
        body.code(),
        mind.code(),
        current.summary_key,
        canonical_code,
        balance_score
    );

    ClassificationSnapshot {
        body,
        mind,
        current,
        canonical_code,
        balance_score,
        emotional_line,
    }
}
