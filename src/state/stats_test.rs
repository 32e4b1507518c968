use super::*;

fn application(id: &str, status: ApplicationStatus) -> Application {
    Application {
        id: id.to_owned(),
        job_id: None,
        job_seeker_id: None,
        status,
        match_score: None,
        match_breakdown: None,
        cover_letter: None,
        applied_at: None,
        job: None,
        job_seeker: None,
    }
}

#[test]
fn empty_list_yields_zero_stats() {
    assert_eq!(ApplicationStats::from_applications(&[]), ApplicationStats::default());
}

#[test]
fn counts_tracked_statuses() {
    let applications = vec![
        application("a1", ApplicationStatus::Pending),
        application("a2", ApplicationStatus::Pending),
        application("a3", ApplicationStatus::Shortlisted),
        application("a4", ApplicationStatus::Rejected),
    ];
    let stats = ApplicationStats::from_applications(&applications);
    assert_eq!(
        stats,
        ApplicationStats {
            total: 4,
            pending: 2,
            shortlisted: 1,
            rejected: 1,
        }
    );
}

#[test]
fn untracked_statuses_count_only_toward_total() {
    let applications = vec![
        application("a1", ApplicationStatus::Reviewing),
        application("a2", ApplicationStatus::InterviewScheduled),
        application("a3", ApplicationStatus::Accepted),
    ];
    let stats = ApplicationStats::from_applications(&applications);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.shortlisted, 0);
    assert_eq!(stats.rejected, 0);
}
