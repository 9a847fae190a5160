use crate::record::ProfileRecord;
use crate::store::{Facet, TemplateSource};
use prakriti_engine::{Dosha, DualPair, EmotionalLine, SummaryKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BALANCED_KEY: &str = "Balanced";
const MILD_MARKER: &str = "(mild)";
const UNKNOWN_DOSHA: &str = "Unknown";

/// Resolved narrative for the body or mind facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetNarrative {
    pub primary: String,
    pub modifier: Option<String>,
    pub paragraph: String,
    pub strengths: Vec<String>,
    pub tip: String,
    pub modifier_line: Option<String>,
    /// True when any text above was generated instead of looked up
    pub fallback: bool,
}

/// Resolved narrative for the current-state facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentNarrative {
    pub summary_key: String,
    /// Key the store was queried with
    pub template_key: String,
    pub paragraph: String,
    pub quick_tip: String,
    pub empathy_line: String,
    pub fallback: bool,
}

/// Narrative content attached to one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedReport {
    pub body: FacetNarrative,
    pub mind: FacetNarrative,
    pub current: CurrentNarrative,
    pub body_report: Option<Value>,
    pub mind_report: Option<Value>,
    pub current_report: Option<Value>,
}

/// Attach narrative templates to a stored or freshly computed profile.
///
/// Never fails: missing template keys produce generated text, missing report
/// codes produce `None`.
pub fn merge<S>(record: &ProfileRecord, templates: &S) -> MergedReport
where
    S: TemplateSource + ?Sized,
{
    let report = |facet: Facet, code: &Option<String>| {
        code.as_deref()
            .and_then(|code| templates.report(facet, code))
            .cloned()
    };

    MergedReport {
        body: facet_narrative(
            templates,
            Facet::Body,
            &record.body_primary,
            record.body_modifier.as_deref(),
        ),
        mind: facet_narrative(
            templates,
            Facet::Mind,
            &record.mind_primary,
            record.mind_modifier.as_deref(),
        ),
        current: current_narrative(templates, &record.imbalance_key),
        body_report: report(Facet::Body, &record.body_code),
        mind_report: report(Facet::Mind, &record.mind_code),
        current_report: report(Facet::Current, &record.current_code),
    }
}

fn facet_narrative<S>(
    templates: &S,
    facet: Facet,
    primary: &str,
    modifier: Option<&str>,
) -> FacetNarrative
where
    S: TemplateSource + ?Sized,
{
    let primary = match primary.trim() {
        "" => UNKNOWN_DOSHA,
        name => name,
    };
    let modifier = modifier.map(str::trim).filter(|m| !m.is_empty());

    let mut fallback = false;
    let (paragraph, strengths, tip) = match templates.primary(facet, primary) {
        Some(template) if template.paragraph.trim().is_empty() => {
            log::warn!("Empty {facet} paragraph for '{primary}', using generated text");
            fallback = true;
            let tip = match template.tip.trim() {
                "" => generated_facet_tip(primary),
                _ => template.tip.clone(),
            };
            (generated_facet_paragraph(facet, primary), template.strengths.clone(), tip)
        }
        Some(template) => (
            template.paragraph.clone(),
            template.strengths.clone(),
            template.tip.clone(),
        ),
        None => {
            log::warn!("No {facet} template for '{primary}', using generated text");
            fallback = true;
            (
                generated_facet_paragraph(facet, primary),
                Vec::new(),
                generated_facet_tip(primary),
            )
        }
    };

    let modifier_line = modifier.map(|modifier| {
        match templates.modifier(facet, primary, modifier) {
            Some(line) => line.to_string(),
            None => {
                log::warn!("No {facet} modifier template for '{primary}' + '{modifier}'");
                fallback = true;
                format!("{primary} has a {modifier} modifier.")
            }
        }
    });

    FacetNarrative {
        primary: primary.to_string(),
        modifier: modifier.map(str::to_string),
        paragraph,
        strengths,
        tip,
        modifier_line,
        fallback,
    }
}

fn current_narrative<S>(templates: &S, summary_key: &str) -> CurrentNarrative
where
    S: TemplateSource + ?Sized,
{
    let template_key = canonical_imbalance_key(summary_key);

    if let Some(template) = templates.current(&template_key) {
        let fallback = template.paragraph.trim().is_empty();
        let paragraph = if fallback {
            log::warn!("Empty current-state paragraph for '{template_key}', using generated text");
            generated_current_paragraph(&template_key)
        } else {
            template.paragraph.clone()
        };
        return CurrentNarrative {
            summary_key: summary_key.to_string(),
            template_key,
            paragraph,
            quick_tip: template.quick_tip.clone(),
            empathy_line: template.empathy_line.clone(),
            fallback,
        };
    }

    log::warn!("No current-state template for '{template_key}', using generated text");
    let empathy_line = summary_key
        .parse::<SummaryKey>()
        .map_or(EmotionalLine::MostlyBalanced, |key| {
            EmotionalLine::for_summary(&key)
        })
        .sentence()
        .to_string();

    CurrentNarrative {
        summary_key: summary_key.to_string(),
        paragraph: generated_current_paragraph(&template_key),
        template_key,
        quick_tip: "Small, consistent changes to sleep, meals and movement help most imbalances settle.".to_string(),
        empathy_line,
        fallback: true,
    }
}

fn generated_facet_paragraph(facet: Facet, primary: &str) -> String {
    format!(
        "Your {facet} profile is predominantly {primary}. Detailed guidance for this type is not available yet, so treat this as a general summary rather than personal advice."
    )
}

fn generated_facet_tip(primary: &str) -> String {
    format!(
        "Keep a steady daily routine and consult a qualified practitioner for guidance specific to {primary}."
    )
}

fn generated_current_paragraph(template_key: &str) -> String {
    match template_key {
        "" => "No current-state result was recorded for this profile.".to_string(),
        BALANCED_KEY => {
            "Your answers show no strong imbalance right now. Detailed guidance is not available yet."
                .to_string()
        }
        key => format!(
            "Your current state leans toward {key}. Detailed guidance for this pattern is not available yet, so treat this as a general summary rather than personal advice."
        ),
    }
}

/// Normalize a current-state summary key to its store key.
///
/// The mild marker is dropped and any key naming two doshas becomes one of
/// `Vata-Pitta`, `Pitta-Kapha` or `Vata-Kapha`, whatever order it was ranked in.
/// Works on membership of dosha names only.
#[must_use]
pub fn canonical_imbalance_key(summary_key: &str) -> String {
    let trimmed = summary_key.trim();
    let base = trimmed
        .strip_suffix(MILD_MARKER)
        .map_or(trimmed, str::trim_end);

    let lowered = base.to_ascii_lowercase();
    let named: Vec<Dosha> = Dosha::ALL
        .into_iter()
        .filter(|dosha| lowered.contains(&dosha.as_str().to_ascii_lowercase()))
        .collect();

    match named.as_slice() {
        [a, b] => DualPair::ALL
            .into_iter()
            .find(|pair| pair.contains(*a) && pair.contains(*b))
            .map_or_else(|| base.to_string(), |pair| pair.canonical_name().to_string()),
        [single] if lowered == single.as_str().to_ascii_lowercase() => single.as_str().to_string(),
        _ if lowered == BALANCED_KEY.to_ascii_lowercase() => BALANCED_KEY.to_string(),
        _ => base.to_string(),
    }
}
