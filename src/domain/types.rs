use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque stable key identifying a job posting.
///
/// Used as the cache key and as the positional ordering key for mapper
/// results. The backend assigns these as row indexes over the current
/// dataset; nothing here depends on that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One job's extracted skill list plus extraction provenance.
///
/// `source` and `text_column` describe how and from which field the skills
/// were derived; they are opaque to the aggregation core and carried through
/// unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPayload {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default, rename = "text_col")]
    pub text_column: String,
}

/// A search-result row from the jobs listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: JobId,
    #[serde(default)]
    pub job_title: String,
    #[serde(default, rename = "company_name_clean")]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_family: String,
    #[serde(default)]
    pub seniority: String,
}

/// Query parameters for the jobs search. Empty fields are omitted from the
/// request, matching the backend's treatment of blank params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFilters {
    pub q: Option<String>,
    pub job_family: Option<String>,
    pub seniority: Option<String>,
    pub location: Option<String>,
    pub limit: usize,
}

impl Default for JobFilters {
    fn default() -> Self {
        Self {
            q: None,
            job_family: None,
            seniority: None,
            location: None,
            limit: 100,
        }
    }
}

impl JobFilters {
    pub fn with_query(q: impl Into<String>) -> Self {
        let q = q.into();
        Self {
            q: (!q.trim().is_empty()).then_some(q),
            ..Self::default()
        }
    }
}

/// One ranked entry in the market skill table. `skill` is always the
/// normalized (lower-cased, trimmed, non-empty) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSkill {
    pub skill: String,
    pub count: u64,
}

/// Output of one market aggregation: every normalized mention in input order,
/// plus the ranked top table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketView {
    pub flattened: Vec<String>,
    pub top: Vec<AggregatedSkill>,
}

/// Backend health probe result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub jobs: Option<u64>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
