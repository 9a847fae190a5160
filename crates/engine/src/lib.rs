//! # Prakriti Engine
//!
//! Deterministic classification and scoring of a 36-item dosha questionnaire.
//!
//! ## Architecture
//!
//! ```text
//! raw answers (36 × {1,2,3})
//!     │
//!     ├──> AnswerVector::parse (length + domain validation)
//!     │
//!     ├──> Sections: body [0,6) · mind [6,18) · current [18,36)
//!     │      └─ DoshaCounts per section
//!     │
//!     ├──> body, mind ──> classify_constitution (primary + modifier)
//!     │
//!     └──> current ─────> classify_imbalance (levels + summary key)
//!                           ├─ canonical_code   (1-9 or none)
//!                           ├─ balance_score    (0-100, capped)
//!                           └─ EmotionalLine
//! ```
//!
//! The engine owns no state and performs no I/O; every function is pure.
//!
//! ## Example
//!
//! ```rust
//! use prakriti_engine::{classify, Dosha};
//!
//! let snapshot = classify(&[1; 36]).unwrap();
//! assert_eq!(snapshot.body.primary, Dosha::Vata);
//! assert_eq!(snapshot.canonical_code, Some(1));
//! ```

mod answers;
mod code;
mod constitution;
mod dosha;
mod emotional;
mod error;
mod imbalance;
mod score;
mod snapshot;

pub use answers::{
    AnswerVector, SectionCounts, Sections, ANSWER_COUNT, BODY_RANGE, CURRENT_RANGE, MIND_RANGE,
};
pub use code::canonical_code;
pub use constitution::{classify_constitution, ConstitutionResult, CONSTITUTION_PRIORITY};
pub use dosha::{Dosha, DoshaCounts, DualPair};
pub use emotional::EmotionalLine;
pub use error::{EngineError, Result};
pub use imbalance::{
    classify_imbalance, Imbalance, ImbalanceLevel, ImbalanceResult, SummaryKey, DOMINANT_LEVEL,
    IMBALANCE_PRIORITY, MILD_LEVEL, SECONDARY_LEVEL,
};
pub use score::{balance_score, SCORE_CAPS};
pub use snapshot::{classify, classify_answers, ClassificationSnapshot};
