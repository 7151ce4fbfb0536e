use std::sync::Arc;

use jobscope::domain::{AggregatedSkill, SkillPayload};
use jobscope::market::{TOP_SKILLS_LIMIT, aggregate};

fn payload(skills: &[&str]) -> Option<Arc<SkillPayload>> {
    Some(Arc::new(SkillPayload {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        source: "patterns".to_string(),
        text_column: "job_description".to_string(),
    }))
}

fn entry(skill: &str, count: u64) -> AggregatedSkill {
    AggregatedSkill {
        skill: skill.to_string(),
        count,
    }
}

// ========== Flatten/Normalize Tests ==========

#[test]
fn flattens_in_job_then_skill_order() {
    let view = aggregate(&[payload(&["a", "b"]), payload(&["c"]), payload(&["d", "e"])]);
    assert_eq!(view.flattened, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn normalization_merges_case_and_whitespace_variants() {
    let view = aggregate(&[payload(&["  Python ", "python", "SQL"])]);
    assert_eq!(view.flattened, vec!["python", "python", "sql"]);
    assert_eq!(view.top, vec![entry("python", 2), entry("sql", 1)]);
}

#[test]
fn empty_and_whitespace_skills_are_discarded() {
    let view = aggregate(&[payload(&["", "  ", "rust"])]);
    assert_eq!(view.flattened, vec!["rust"]);
    assert_eq!(view.top, vec![entry("rust", 1)]);
}

#[test]
fn missing_payloads_are_ignored() {
    let view = aggregate(&[payload(&["a"]), None, payload(&["b"])]);
    assert_eq!(view.flattened, vec!["a", "b"]);
    assert_eq!(view.top.len(), 2);
}

#[test]
fn empty_input_yields_empty_view() {
    let view = aggregate(&[]);
    assert!(view.flattened.is_empty());
    assert!(view.top.is_empty());
}

// ========== Ranking Tests ==========

#[test]
fn ties_break_by_first_occurrence() {
    let view = aggregate(&[payload(&["python", "sql", "python", "sql"])]);
    assert_eq!(view.top, vec![entry("python", 2), entry("sql", 2)]);
}

#[test]
fn ranks_by_count_descending() {
    let view = aggregate(&[payload(&["go", "rust", "rust", "sql", "sql", "sql"])]);
    assert_eq!(
        view.top,
        vec![entry("sql", 3), entry("rust", 2), entry("go", 1)]
    );
}

#[test]
fn truncates_to_top_fifteen_highest_counts() {
    // 20 distinct skills, skill-i mentioned (21 - i) times.
    let mut mentions: Vec<String> = Vec::new();
    for i in 1..=20u64 {
        for _ in 0..(21 - i) {
            mentions.push(format!("skill-{i:02}"));
        }
    }
    let refs: Vec<&str> = mentions.iter().map(String::as_str).collect();
    let view = aggregate(&[payload(&refs)]);

    assert_eq!(view.top.len(), TOP_SKILLS_LIMIT);
    let expected: Vec<AggregatedSkill> = (1..=15u64)
        .map(|i| entry(&format!("skill-{i:02}"), 21 - i))
        .collect();
    assert_eq!(view.top, expected);
}

// ========== Idempotence Tests ==========

#[test]
fn reaggregating_flattened_output_preserves_top() {
    let first = aggregate(&[
        payload(&["Python", "sql "]),
        None,
        payload(&["python", "docker"]),
    ]);

    let refs: Vec<&str> = first.flattened.iter().map(String::as_str).collect();
    let second = aggregate(&[payload(&refs)]);

    assert_eq!(first.top, second.top);
    assert_eq!(first.flattened, second.flattened);
}
