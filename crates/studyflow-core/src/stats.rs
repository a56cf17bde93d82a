//! Display-ready aggregate views over the three ledgers.
//!
//! Everything here is a pure read-combination: recomputed from current
//! ledger state on every call, nothing cached, no new invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::habits::{HabitLedger, HabitStreaks, MonthlyCompletion};
use crate::session::{SessionLedger, StudySession, WeeklyStats};
use crate::target::{TargetPlanner, WeeklyTarget};

/// One day of the trailing-week series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// Weekday abbreviation for display ("Mon").
    pub label: String,
    pub date: NaiveDate,
    /// Hours logged that day, rounded to two decimals.
    pub hours: f64,
    pub sessions: Vec<StudySession>,
}

/// The seven days ending at `reference`, oldest first.
pub fn last_7_days(sessions: &SessionLedger, reference: NaiveDate) -> Vec<DayActivity> {
    dates::trailing_days(reference, 7)
        .into_iter()
        .map(|date| DayActivity {
            label: date.format("%a").to_string(),
            date,
            hours: sessions.daily_total_hours(date),
            sessions: sessions.for_date(date).into_iter().cloned().collect(),
        })
        .collect()
}

/// Everything the dashboard shows, derived in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today_hours: f64,
    pub week: WeeklyStats,
    pub target: WeeklyTarget,
    pub streaks: HabitStreaks,
    pub monthly_habits: MonthlyCompletion,
    pub last_seven_days: Vec<DayActivity>,
}

/// Combine the three ledgers into one dashboard view for `reference`.
pub fn dashboard(
    sessions: &SessionLedger,
    habits: &HabitLedger,
    targets: &TargetPlanner,
    reference: NaiveDate,
) -> Dashboard {
    Dashboard {
        today_hours: sessions.daily_total_hours(reference),
        week: sessions.weekly_stats(dates::week_start(reference)),
        target: targets.current_week(reference),
        streaks: habits.streaks(),
        monthly_habits: habits.monthly_completion(reference),
        last_seven_days: last_7_days(sessions, reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::{DailyHabits, Habit};
    use crate::session::{EnergyLevel, SessionDraft};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn draft(date: &str, subject: &str, start: &str, end: &str) -> SessionDraft {
        SessionDraft {
            date: d(date),
            subject: subject.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            focus_quality: 4,
            distraction_count: 1,
            energy_level: EnergyLevel::High,
            notes: String::new(),
        }
    }

    #[test]
    fn last_7_days_runs_oldest_to_newest() {
        let ledger = SessionLedger::new();
        // 2025-03-16 is a Sunday
        let days = last_7_days(&ledger, d("2025-03-16"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, d("2025-03-10"));
        assert_eq!(days[0].label, "Mon");
        assert_eq!(days[6].date, d("2025-03-16"));
        assert_eq!(days[6].label, "Sun");
    }

    #[test]
    fn last_7_days_attaches_hours_and_sessions() {
        let mut ledger = SessionLedger::new();
        ledger.add(draft("2025-03-14", "math", "09:00", "10:30"));
        ledger.add(draft("2025-03-16", "physics", "09:00", "09:50"));

        let days = last_7_days(&ledger, d("2025-03-16"));
        let friday = &days[4];
        assert_eq!(friday.date, d("2025-03-14"));
        assert_eq!(friday.hours, 1.5);
        assert_eq!(friday.sessions.len(), 1);
        assert_eq!(friday.sessions[0].subject, "math");

        let sunday = &days[6];
        assert_eq!(sunday.hours, 0.83);
        // empty days carry empty session lists, not absent entries
        assert!(days[0].sessions.is_empty());
    }

    #[test]
    fn dashboard_combines_all_views() {
        let mut sessions = SessionLedger::new();
        sessions.add(draft("2025-03-12", "math", "14:00", "16:00"));

        let mut habits = HabitLedger::new();
        let mut day = DailyHabits::empty(d("2025-03-12"));
        day.set_flag(Habit::Exercise, true);
        habits.replace(day);

        let mut targets = TargetPlanner::new();
        targets.ensure_current_week(d("2025-03-12"));

        let view = dashboard(&sessions, &habits, &targets, d("2025-03-12"));
        assert_eq!(view.today_hours, 2.0);
        assert_eq!(view.week.session_count, 1);
        assert_eq!(view.target.week_start, d("2025-03-10"));
        assert_eq!(view.target.target_hours, 5.0);
        assert_eq!(view.streaks.exercise, 1);
        assert_eq!(view.monthly_habits.overall, 17);
        assert_eq!(view.last_seven_days.len(), 7);
    }

    #[test]
    fn dashboard_on_empty_ledgers_is_all_defaults() {
        let view = dashboard(
            &SessionLedger::new(),
            &HabitLedger::new(),
            &TargetPlanner::new(),
            d("2025-03-12"),
        );
        assert_eq!(view.today_hours, 0.0);
        assert_eq!(view.week.session_count, 0);
        // transient target default, since ensure never ran
        assert_eq!(view.target.target_hours, 5.0);
        assert_eq!(view.streaks.exercise, 0);
        assert_eq!(view.monthly_habits.overall, 0);
    }
}
