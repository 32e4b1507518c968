//! Skill-based job recommendation for the seeker dashboard.
//!
//! A pure, single-pass heuristic: a job is recommended when any of its
//! required skills and any of the user's skills match as case-insensitive
//! substrings of each other, in either direction. No hidden state.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use crate::net::types::Job;

/// Pick up to `limit` jobs matching the user's skills, preserving the
/// server's ordering. An empty skill list falls back to the first `limit`
/// jobs.
pub fn recommend_jobs(user_skills: &[String], jobs: &[Job], limit: usize) -> Vec<Job> {
    if user_skills.is_empty() {
        return jobs.iter().take(limit).cloned().collect();
    }
    jobs.iter()
        .filter(|job| {
            job.required_skills
                .iter()
                .any(|required| user_skills.iter().any(|skill| skills_match(skill, required)))
        })
        .take(limit)
        .cloned()
        .collect()
}

fn skills_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
