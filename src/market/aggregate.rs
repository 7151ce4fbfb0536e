use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::{AggregatedSkill, MarketView, SkillPayload};

/// Number of entries kept in the ranked table. Hard constant of the market
/// view, not a configuration knob.
pub const TOP_SKILLS_LIMIT: usize = 15;

/// Lower-case and trim a raw skill string; `None` if nothing remains.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Reduce an ordered list of per-job payloads into the market view.
///
/// `None` slots (failed fetches) are skipped. Skills are flattened in input
/// order, normalized, counted in first-seen order, then ranked by count
/// descending with ties broken by first occurrence. The stable sort over the
/// insertion-ordered table is what makes the output reproducible.
pub fn aggregate(payloads: &[Option<Arc<SkillPayload>>]) -> MarketView {
    let flattened: Vec<String> = payloads
        .iter()
        .flatten()
        .flat_map(|payload| payload.skills.iter())
        .filter_map(|raw| normalize_skill(raw))
        .collect();

    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for skill in &flattened {
        *counts.entry(skill.as_str()).or_insert(0) += 1;
    }

    let mut top: Vec<AggregatedSkill> = counts
        .into_iter()
        .map(|(skill, count)| AggregatedSkill {
            skill: skill.to_string(),
            count,
        })
        .collect();
    // Vec::sort_by is stable, so equal counts keep first-insertion order.
    top.sort_by(|a, b| b.count.cmp(&a.count));
    top.truncate(TOP_SKILLS_LIMIT);

    MarketView { flattened, top }
}
