//! Aggregate application counts for the seeker dashboard charts.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{Application, ApplicationStatus};

/// Status counts over a seeker's applications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub shortlisted: usize,
    pub rejected: usize,
}

impl ApplicationStats {
    /// Single pass over the list as fetched; no local copy is retained.
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut stats = Self {
            total: applications.len(),
            ..Self::default()
        };
        for application in applications {
            match application.status {
                ApplicationStatus::Pending => stats.pending += 1,
                ApplicationStatus::Shortlisted => stats.shortlisted += 1,
                ApplicationStatus::Rejected => stats.rejected += 1,
                _ => {}
            }
        }
        stats
    }
}
