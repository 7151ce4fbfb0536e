use crate::domain::{JobRecord, MarketView, SkillPayload};

pub fn render_jobs(jobs: &[JobRecord]) -> String {
    if jobs.is_empty() {
        return "No jobs matched.".to_string();
    }

    let mut out = String::new();
    for job in jobs {
        out.push_str(&format!(
            "{:>6}  {}  ({} • {})",
            job.job_id, job.job_title, job.company, job.location
        ));
        if !job.job_family.is_empty() || !job.seniority.is_empty() {
            out.push_str(&format!("  [{} {}]", job.job_family, job.seniority));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} jobs", jobs.len()));
    out
}

pub fn render_skills(payload: &SkillPayload) -> String {
    if payload.skills.is_empty() {
        return format!("No skills detected (extraction: {})", payload.source);
    }

    let mut out = String::new();
    for skill in &payload.skills {
        out.push_str(&format!("  - {skill}\n"));
    }
    out.push_str(&format!(
        "extraction: {} (from {})",
        payload.source, payload.text_column
    ));
    out
}

pub fn render_market(view: &MarketView, job_count: usize) -> String {
    if view.top.is_empty() {
        return format!("No skills aggregated across {job_count} jobs.");
    }

    let mut out = format!(
        "Top skills across {} jobs ({} mentions):\n",
        job_count,
        view.flattened.len()
    );
    for entry in &view.top {
        out.push_str(&format!("  {:>4}  {}\n", entry.count, entry.skill));
    }
    out.trim_end().to_string()
}
