use super::*;

fn job(id: &str, required_skills: &[&str]) -> Job {
    Job {
        id: id.to_owned(),
        recruiter_id: None,
        title: format!("Job {id}"),
        description: None,
        company_name: None,
        location: None,
        employment_type: None,
        min_salary: None,
        max_salary: None,
        currency: None,
        required_skills: required_skills.iter().map(|s| (*s).to_owned()).collect(),
        min_years_of_experience: None,
        education_level: None,
        status: None,
        created_at: None,
        expires_at: None,
    }
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn matches_identical_skill_ignoring_case() {
    let jobs = vec![job("j1", &["RUST"]), job("j2", &["Go"])];
    let picked = recommend_jobs(&skills(&["rust"]), &jobs, 5);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].id, "j1");
}

#[test]
fn matches_substring_in_either_direction() {
    let jobs = vec![job("j1", &["PostgreSQL"]), job("j2", &["Java"])];
    // User skill is a substring of the required skill.
    assert_eq!(recommend_jobs(&skills(&["sql"]), &jobs, 5).len(), 1);
    // Required skill is a substring of the user skill.
    assert_eq!(recommend_jobs(&skills(&["Java Spring"]), &jobs, 5)[0].id, "j2");
}

#[test]
fn no_match_yields_empty_list() {
    let jobs = vec![job("j1", &["Rust"])];
    assert!(recommend_jobs(&skills(&["Haskell"]), &jobs, 5).is_empty());
}

#[test]
fn empty_user_skills_falls_back_to_leading_jobs() {
    let jobs = vec![job("j1", &["Rust"]), job("j2", &["Go"]), job("j3", &["C"])];
    let picked = recommend_jobs(&[], &jobs, 2);
    assert_eq!(picked.iter().map(|j| j.id.as_str()).collect::<Vec<_>>(), vec!["j1", "j2"]);
}

#[test]
fn jobs_without_required_skills_are_never_recommended() {
    let jobs = vec![job("j1", &[])];
    assert!(recommend_jobs(&skills(&["Rust"]), &jobs, 5).is_empty());
}

#[test]
fn limit_caps_matches_preserving_order() {
    let jobs = vec![
        job("j1", &["Rust"]),
        job("j2", &["Rust"]),
        job("j3", &["Rust"]),
    ];
    let picked = recommend_jobs(&skills(&["Rust"]), &jobs, 2);
    assert_eq!(picked.iter().map(|j| j.id.as_str()).collect::<Vec<_>>(), vec!["j1", "j2"]);
}
