//! Weekly study-hour targets with automatic week-over-week progression.
//!
//! Each Monday gets at most one record. The first evaluation of a week
//! creates its record from the previous week's target (stepped up to the
//! cap) or from the baseline; after that the record is never regenerated
//! or mutated.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;

/// One target record per Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTarget {
    /// Monday of the week this target applies to.
    pub week_start: NaiveDate,
    /// Daily study-hour goal.
    pub target_hours: f64,
    /// Reserved: written as 0, never computed or read back.
    pub actual_hours: f64,
    /// Reserved: written as false, never computed or read back.
    pub met: bool,
}

/// Progression constants for the planner.
///
/// `Default` reproduces the stock behavior: a 5.0-hour baseline, 0.5-hour
/// weekly step, 10.0-hour cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPolicy {
    pub baseline_hours: f64,
    pub weekly_increment: f64,
    pub max_hours: f64,
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self {
            baseline_hours: 5.0,
            weekly_increment: 0.5,
            max_hours: 10.0,
        }
    }
}

/// Owned collection of weekly target records.
#[derive(Debug, Default)]
pub struct TargetPlanner {
    records: Vec<WeeklyTarget>,
    policy: TargetPolicy,
}

impl TargetPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<WeeklyTarget>) -> Self {
        Self {
            records,
            policy: TargetPolicy::default(),
        }
    }

    pub fn with_policy(records: Vec<WeeklyTarget>, policy: TargetPolicy) -> Self {
        Self { records, policy }
    }

    pub fn records(&self) -> &[WeeklyTarget] {
        &self.records
    }

    pub fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    /// The record for the week starting at `week_start`, if any.
    pub fn for_week(&self, week_start: NaiveDate) -> Option<&WeeklyTarget> {
        self.records.iter().find(|t| t.week_start == week_start)
    }

    /// Create the record for the week containing `reference` if missing.
    ///
    /// The new target derives from the immediately preceding week's record
    /// when one exists (`prev + increment`, capped), else from the
    /// baseline, rounded to one decimal. Returns the inserted record, or
    /// `None` when the week already had one (idempotent per week).
    pub fn ensure_current_week(&mut self, reference: NaiveDate) -> Option<WeeklyTarget> {
        let monday = dates::week_start(reference);
        if self.for_week(monday).is_some() {
            return None;
        }

        let hours = match self.for_week(monday - Duration::days(7)) {
            Some(prev) => (prev.target_hours + self.policy.weekly_increment).min(self.policy.max_hours),
            None => self.policy.baseline_hours,
        };
        let record = WeeklyTarget {
            week_start: monday,
            target_hours: (hours * 10.0).round() / 10.0,
            actual_hours: 0.0,
            met: false,
        };
        self.records.push(record.clone());
        Some(record)
    }

    /// The record for `reference`'s week, or a transient baseline default
    /// when [`ensure_current_week`](Self::ensure_current_week) has not run
    /// for it. The default is not persisted.
    pub fn current_week(&self, reference: NaiveDate) -> WeeklyTarget {
        let monday = dates::week_start(reference);
        self.for_week(monday).cloned().unwrap_or(WeeklyTarget {
            week_start: monday,
            target_hours: self.policy.baseline_hours,
            actual_hours: 0.0,
            met: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_week_starts_at_baseline() {
        let mut planner = TargetPlanner::new();
        let created = planner.ensure_current_week(d("2025-03-12")).unwrap();
        assert_eq!(created.week_start, d("2025-03-10"));
        assert_eq!(created.target_hours, 5.0);
        assert_eq!(created.actual_hours, 0.0);
        assert!(!created.met);
    }

    #[test]
    fn second_week_steps_up_from_the_previous_record() {
        let mut planner = TargetPlanner::new();
        planner.ensure_current_week(d("2025-03-10"));
        let next = planner.ensure_current_week(d("2025-03-17")).unwrap();
        // progression ignores met/actualHours entirely
        assert_eq!(next.target_hours, 5.5);
    }

    #[test]
    fn progression_caps_at_max_hours() {
        let mut planner = TargetPlanner::new();
        let mut monday = d("2025-01-06");
        for _ in 0..20 {
            planner.ensure_current_week(monday);
            monday = monday + Duration::days(7);
        }
        let last = planner.records().last().unwrap();
        assert_eq!(last.target_hours, 10.0);
        assert!(planner.records().iter().all(|t| t.target_hours <= 10.0));
    }

    #[test]
    fn ensure_is_idempotent_within_a_week() {
        let mut planner = TargetPlanner::new();
        assert!(planner.ensure_current_week(d("2025-03-10")).is_some());
        // any day of the same week maps to the same Monday record
        assert!(planner.ensure_current_week(d("2025-03-14")).is_none());
        assert_eq!(planner.records().len(), 1);
    }

    #[test]
    fn gap_week_without_record_restarts_at_baseline() {
        let mut planner = TargetPlanner::new();
        planner.ensure_current_week(d("2025-03-10"));
        // two weeks later: the immediately preceding week has no record
        let created = planner.ensure_current_week(d("2025-03-24")).unwrap();
        assert_eq!(created.target_hours, 5.0);
    }

    #[test]
    fn derived_target_is_rounded_to_one_decimal() {
        let policy = TargetPolicy {
            baseline_hours: 5.0,
            weekly_increment: 0.25,
            max_hours: 10.0,
        };
        let mut planner = TargetPlanner::with_policy(Vec::new(), policy);
        planner.ensure_current_week(d("2025-03-10"));
        let next = planner.ensure_current_week(d("2025-03-17")).unwrap();
        // 5.25 rounds half away from zero at the first decimal
        assert_eq!(next.target_hours, 5.3);
    }

    #[test]
    fn current_week_returns_persisted_record() {
        let mut planner = TargetPlanner::new();
        planner.ensure_current_week(d("2025-03-10"));
        planner.ensure_current_week(d("2025-03-17"));
        let current = planner.current_week(d("2025-03-19"));
        assert_eq!(current.week_start, d("2025-03-17"));
        assert_eq!(current.target_hours, 5.5);
    }

    #[test]
    fn current_week_default_is_transient() {
        let planner = TargetPlanner::new();
        let current = planner.current_week(d("2025-03-12"));
        assert_eq!(current.week_start, d("2025-03-10"));
        assert_eq!(current.target_hours, 5.0);
        // the defensive default is never stored
        assert!(planner.records().is_empty());
    }

    #[test]
    fn target_json_uses_schema_field_names() {
        let mut planner = TargetPlanner::new();
        let created = planner.ensure_current_week(d("2025-03-10")).unwrap();
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["weekStart"], "2025-03-10");
        assert_eq!(json["targetHours"], 5.0);
        assert_eq!(json["actualHours"], 0.0);
        assert_eq!(json["met"], false);
    }
}
