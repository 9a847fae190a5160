use crate::error::{ReportError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const TEMPLATE_SCHEMA_VERSION: u32 = 1;

const BUILTIN_TEMPLATES: &str = include_str!("../../../templates/default.json");

static BUILTIN: OnceCell<TemplateStore> = OnceCell::new();

/// Questionnaire facet a narrative belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Body,
    Mind,
    Current,
}

impl Facet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Mind => "mind",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only lookups the merger needs from a narrative store.
///
/// Every lookup may miss; callers decide how to fall back.
pub trait TemplateSource {
    /// Primary-dosha narrative for the body or mind facet
    fn primary(&self, facet: Facet, dosha: &str) -> Option<&PrimaryTemplate>;

    /// Sentence describing `modifier` layered on `primary`
    fn modifier(&self, facet: Facet, primary: &str, modifier: &str) -> Option<&str>;

    /// Current-state narrative for a canonical imbalance key
    fn current(&self, key: &str) -> Option<&CurrentTemplate>;

    /// Long-form structured report for a facet code
    fn report(&self, facet: Facet, code: &str) -> Option<&Value>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryTemplate {
    #[serde(default)]
    pub paragraph: String,
    #[serde(default, alias = "common_feeling")]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub tip: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentTemplate {
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub quick_tip: String,
    #[serde(default)]
    pub empathy_line: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstitutionTemplates {
    #[serde(default)]
    pub primary: BTreeMap<String, PrimaryTemplate>,
    /// primary -> modifier -> sentence
    #[serde(default)]
    pub modifiers: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportTemplates {
    #[serde(default)]
    pub body: BTreeMap<String, Value>,
    #[serde(default)]
    pub mind: BTreeMap<String, Value>,
    #[serde(default)]
    pub current: BTreeMap<String, Value>,
}

/// Static narrative content keyed by classification
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateStore {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub body: ConstitutionTemplates,
    #[serde(default)]
    pub mind: ConstitutionTemplates,
    #[serde(default)]
    pub current: BTreeMap<String, CurrentTemplate>,
    #[serde(default)]
    pub reports: ReportTemplates,
}

const fn default_schema_version() -> u32 {
    TEMPLATE_SCHEMA_VERSION
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self {
            schema_version: TEMPLATE_SCHEMA_VERSION,
            body: ConstitutionTemplates::default(),
            mind: ConstitutionTemplates::default(),
            current: BTreeMap::new(),
            reports: ReportTemplates::default(),
        }
    }
}

/// Entry counts per section of a store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateStats {
    pub body_primary: usize,
    pub body_modifiers: usize,
    pub mind_primary: usize,
    pub mind_modifiers: usize,
    pub current: usize,
    pub body_reports: usize,
    pub mind_reports: usize,
    pub current_reports: usize,
}

impl TemplateStore {
    /// Parse and validate a JSON asset. `source_name` only labels errors.
    pub fn from_json(source_name: &str, raw: &str) -> Result<Self> {
        let store: Self =
            serde_json::from_str(raw).map_err(|e| ReportError::template_load(source_name, e))?;
        store.validate()?;
        Ok(store)
    }

    /// Read a JSON asset from disk
    pub fn load(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ReportError::template_load(&source_name, e))?;
        let store = Self::from_json(&source_name, &raw)?;
        log::info!("Loaded templates from {source_name}: {:?}", store.stats());
        Ok(store)
    }

    /// Templates compiled into the crate, parsed once per process
    pub fn builtin() -> Result<&'static Self> {
        BUILTIN.get_or_try_init(|| {
            let store = Self::from_json("builtin templates", BUILTIN_TEMPLATES)?;
            log::info!("Loaded builtin templates: {:?}", store.stats());
            Ok(store)
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version != TEMPLATE_SCHEMA_VERSION {
            return Err(ReportError::UnsupportedSchema {
                found: self.schema_version,
                expected: TEMPLATE_SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> TemplateStats {
        let modifier_count = |templates: &ConstitutionTemplates| {
            templates.modifiers.values().map(BTreeMap::len).sum::<usize>()
        };
        TemplateStats {
            body_primary: self.body.primary.len(),
            body_modifiers: modifier_count(&self.body),
            mind_primary: self.mind.primary.len(),
            mind_modifiers: modifier_count(&self.mind),
            current: self.current.len(),
            body_reports: self.reports.body.len(),
            mind_reports: self.reports.mind.len(),
            current_reports: self.reports.current.len(),
        }
    }

    fn constitution(&self, facet: Facet) -> Option<&ConstitutionTemplates> {
        match facet {
            Facet::Body => Some(&self.body),
            Facet::Mind => Some(&self.mind),
            Facet::Current => None,
        }
    }
}

impl TemplateSource for TemplateStore {
    fn primary(&self, facet: Facet, dosha: &str) -> Option<&PrimaryTemplate> {
        self.constitution(facet)?.primary.get(dosha)
    }

    fn modifier(&self, facet: Facet, primary: &str, modifier: &str) -> Option<&str> {
        self.constitution(facet)?
            .modifiers
            .get(primary)?
            .get(modifier)
            .map(String::as_str)
    }

    fn current(&self, key: &str) -> Option<&CurrentTemplate> {
        self.current.get(key)
    }

    fn report(&self, facet: Facet, code: &str) -> Option<&Value> {
        let reports = match facet {
            Facet::Body => &self.reports.body,
            Facet::Mind => &self.reports.mind,
            Facet::Current => &self.reports.current,
        };
        reports.get(code)
    }
}
