use crate::dosha::{Dosha, DoshaCounts};
use crate::error::{EngineError, Result};
use std::ops::Range;

/// Number of questionnaire items
pub const ANSWER_COUNT: usize = 36;

/// Body (constitution) questions
pub const BODY_RANGE: Range<usize> = 0..6;

/// Mind (temperament) questions
pub const MIND_RANGE: Range<usize> = 6..18;

/// Current-state questions
pub const CURRENT_RANGE: Range<usize> = 18..36;

/// A validated, immutable questionnaire response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerVector([Dosha; ANSWER_COUNT]);

impl AnswerVector {
    /// Validate raw answers.
    ///
    /// Fails on the wrong item count before looking at any value, then
    /// reports the first out-of-domain value with its index.
    pub fn parse(raw: &[i64]) -> Result<Self> {
        if raw.len() != ANSWER_COUNT {
            return Err(EngineError::InvalidLength {
                expected: ANSWER_COUNT,
                actual: raw.len(),
            });
        }

        let mut answers = [Dosha::Vata; ANSWER_COUNT];
        for (index, (&value, slot)) in raw.iter().zip(answers.iter_mut()).enumerate() {
            *slot = Dosha::from_answer(value).ok_or(EngineError::InvalidValue { index, value })?;
        }
        Ok(Self(answers))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Dosha] {
        &self.0
    }

    /// Split into the three fixed sections
    #[must_use]
    pub fn sections(&self) -> Sections<'_> {
        Sections {
            body: &self.0[BODY_RANGE],
            mind: &self.0[MIND_RANGE],
            current: &self.0[CURRENT_RANGE],
        }
    }
}

/// Borrowed views over the three questionnaire sections
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    pub body: &'a [Dosha],
    pub mind: &'a [Dosha],
    pub current: &'a [Dosha],
}

impl Sections<'_> {
    #[must_use]
    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            body: DoshaCounts::from_section(self.body),
            mind: DoshaCounts::from_section(self.mind),
            current: DoshaCounts::from_section(self.current),
        }
    }
}

/// Tallies for all three sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub body: DoshaCounts,
    pub mind: DoshaCounts,
    pub current: DoshaCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn section_ranges_cover_every_answer() {
        assert_eq!(BODY_RANGE.len(), 6);
        assert_eq!(MIND_RANGE.len(), 12);
        assert_eq!(CURRENT_RANGE.len(), 18);
        assert_eq!(BODY_RANGE.end, MIND_RANGE.start);
        assert_eq!(MIND_RANGE.end, CURRENT_RANGE.start);
        assert_eq!(BODY_RANGE.len() + MIND_RANGE.len() + CURRENT_RANGE.len(), ANSWER_COUNT);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            AnswerVector::parse(&[1; 35]),
            Err(EngineError::InvalidLength {
                expected: 36,
                actual: 35
            })
        );
        assert_eq!(
            AnswerVector::parse(&[]),
            Err(EngineError::InvalidLength {
                expected: 36,
                actual: 0
            })
        );
        assert!(AnswerVector::parse(&[1; 37]).is_err());
    }

    #[test]
    fn rejects_out_of_domain_value_with_index() {
        let mut raw = vec![2_i64; ANSWER_COUNT];
        raw[17] = 4;
        raw[20] = 0;
        assert_eq!(
            AnswerVector::parse(&raw),
            Err(EngineError::InvalidValue {
                index: 17,
                value: 4
            })
        );

        raw[17] = -1;
        assert_eq!(
            AnswerVector::parse(&raw),
            Err(EngineError::InvalidValue {
                index: 17,
                value: -1
            })
        );
    }

    #[test]
    fn partitions_by_fixed_offsets() {
        let mut raw = vec![1_i64; 6];
        raw.extend(std::iter::repeat(2).take(12));
        raw.extend(std::iter::repeat(3).take(18));
        let answers = AnswerVector::parse(&raw).expect("valid answers");
        let counts = answers.sections().counts();

        assert_eq!(counts.body, DoshaCounts::new(6, 0, 0));
        assert_eq!(counts.mind, DoshaCounts::new(0, 12, 0));
        assert_eq!(counts.current, DoshaCounts::new(0, 0, 18));
    }

    proptest! {
        #[test]
        fn proptest_section_totals_match_lengths(raw in prop::collection::vec(1i64..=3, ANSWER_COUNT)) {
            let answers = AnswerVector::parse(&raw).expect("valid answers");
            let counts = answers.sections().counts();
            prop_assert_eq!(counts.body.total(), 6);
            prop_assert_eq!(counts.mind.total(), 12);
            prop_assert_eq!(counts.current.total(), 18);
        }
    }
}
