//! Per-activity statistics for the statistics view.
//!
//! Aggregates are computed client-side from the full training list; the
//! backend has no statistics endpoint.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Training;

/// Totals for one distinct activity label.
///
/// The label is grouped verbatim: two differently-cased labels form two
/// separate aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityAggregate {
    /// Activity label exactly as it appeared in the input.
    pub activity: String,
    /// Sum of member durations, missing/non-numeric counted as 0.
    pub total_minutes: i64,
    /// Number of sessions in the group.
    pub session_count: u32,
}

impl ActivityAggregate {
    /// Average minutes per session, derived at render time.
    ///
    /// A group always has at least one member, so the division is safe.
    pub fn average_minutes(&self) -> f64 {
        self.total_minutes as f64 / f64::from(self.session_count)
    }
}

/// Full statistics result: per-activity aggregates plus grand totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityStats {
    /// Aggregates sorted by total minutes descending; ties keep the order
    /// in which the activity first appeared in the input.
    pub activities: Vec<ActivityAggregate>,
    /// Grand total of minutes across all aggregates.
    pub total_minutes: i64,
}

impl ActivityStats {
    /// Total number of training sessions across all activities.
    pub fn total_sessions(&self) -> u32 {
        self.activities.iter().map(|a| a.session_count).sum()
    }

    /// Number of distinct activity labels.
    pub fn distinct_activities(&self) -> usize {
        self.activities.len()
    }
}

/// Group trainings by activity label and total their durations.
pub fn aggregate_by_activity(trainings: &[Training]) -> ActivityStats {
    let mut order: HashMap<String, usize> = HashMap::new();
    let mut activities: Vec<ActivityAggregate> = Vec::new();

    for training in trainings {
        let minutes = training.duration.unwrap_or(0);
        match order.get(&training.activity) {
            Some(&idx) => {
                activities[idx].total_minutes += minutes;
                activities[idx].session_count += 1;
            }
            None => {
                order.insert(training.activity.clone(), activities.len());
                activities.push(ActivityAggregate {
                    activity: training.activity.clone(),
                    total_minutes: minutes,
                    session_count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order within equal totals.
    activities.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));

    let total_minutes = activities.iter().map(|a| a.total_minutes).sum();

    ActivityStats {
        activities,
        total_minutes,
    }
}
