//! Study session ledger.
//!
//! Sessions are append-only: a record is built once from a draft, is never
//! edited afterward, and can only be removed wholesale by id. Duration is
//! derived from the draft's wall-clock strings at creation time and a
//! draft whose end is not strictly after its start is declined without an
//! error (the caller observes the absence).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates;

/// Self-reported energy level for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    /// Low energy (e.g., end of day)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (e.g., morning)
    High,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

/// One logged interval of focused work.
///
/// Persisted with the field spelling of the store's JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub date: NaiveDate,
    pub subject: String,
    /// Wall-clock start, `HH:MM` 24-hour.
    pub start_time: String,
    /// Wall-clock end, `HH:MM` 24-hour.
    pub end_time: String,
    /// Derived at creation; always strictly positive.
    pub duration_minutes: i64,
    /// Self-rated focus, 1 (scattered) to 5 (deep).
    pub focus_quality: u8,
    pub distraction_count: u32,
    pub energy_level: EnergyLevel,
    pub notes: String,
}

/// Caller-supplied fields for a new session.
///
/// The id and duration are assigned by the ledger, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub focus_quality: u8,
    pub distraction_count: u32,
    pub energy_level: EnergyLevel,
    pub notes: String,
}

/// Total minutes logged for one subject within a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTotal {
    pub subject: String,
    pub minutes: i64,
}

/// Aggregates over one Monday-start week.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Unrounded sum of session hours in the week.
    pub total_hours: f64,
    /// Mean focus quality, 0 when the week has no sessions.
    pub avg_focus: f64,
    /// Per-subject minute totals, ordered by first occurrence.
    pub subjects: Vec<SubjectTotal>,
    pub session_count: usize,
}

/// Owned, ordered collection of study sessions.
#[derive(Debug, Default)]
pub struct SessionLedger {
    records: Vec<StudySession>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<StudySession>) -> Self {
        Self { records }
    }

    /// All sessions in insertion order.
    pub fn records(&self) -> &[StudySession] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a session built from `draft`.
    ///
    /// Duration is `end - start` in minutes against an implicit shared
    /// day. A draft whose end is not strictly after its start, or whose
    /// times fail to parse, is declined: `None` is returned and the
    /// ledger is unchanged. Overnight spans are not supported.
    pub fn add(&mut self, draft: SessionDraft) -> Option<&StudySession> {
        let minutes = dates::minutes_between(&draft.start_time, &draft.end_time)?;
        if minutes <= 0 {
            return None;
        }
        self.records.push(StudySession {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            subject: draft.subject,
            start_time: draft.start_time,
            end_time: draft.end_time,
            duration_minutes: minutes,
            focus_quality: draft.focus_quality,
            distraction_count: draft.distraction_count,
            energy_level: draft.energy_level,
            notes: draft.notes,
        });
        self.records.last()
    }

    /// Remove the session with `id`.
    ///
    /// Returns false when no such record exists, so a repeated delete is
    /// a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|s| s.id != id);
        self.records.len() != before
    }

    /// Sessions logged on `date`, in insertion order (not time-sorted).
    pub fn for_date(&self, date: NaiveDate) -> Vec<&StudySession> {
        self.records.iter().filter(|s| s.date == date).collect()
    }

    /// Hours logged on `date`, rounded to two decimals.
    pub fn daily_total_hours(&self, date: NaiveDate) -> f64 {
        let minutes: i64 = self
            .records
            .iter()
            .filter(|s| s.date == date)
            .map(|s| s.duration_minutes)
            .sum();
        (minutes as f64 / 60.0 * 100.0).round() / 100.0
    }

    /// Aggregates over `[week_start, week_start + 6]` inclusive.
    pub fn weekly_stats(&self, week_start: NaiveDate) -> WeeklyStats {
        let week_end = week_start + Duration::days(6);
        let mut total_minutes = 0i64;
        let mut focus_sum = 0u32;
        let mut session_count = 0usize;
        let mut subjects: Vec<SubjectTotal> = Vec::new();

        for s in self
            .records
            .iter()
            .filter(|s| s.date >= week_start && s.date <= week_end)
        {
            total_minutes += s.duration_minutes;
            focus_sum += u32::from(s.focus_quality);
            session_count += 1;
            match subjects.iter_mut().find(|t| t.subject == s.subject) {
                Some(t) => t.minutes += s.duration_minutes,
                None => subjects.push(SubjectTotal {
                    subject: s.subject.clone(),
                    minutes: s.duration_minutes,
                }),
            }
        }

        WeeklyStats {
            total_hours: total_minutes as f64 / 60.0,
            avg_focus: if session_count == 0 {
                0.0
            } else {
                f64::from(focus_sum) / session_count as f64
            },
            subjects,
            session_count,
        }
    }
}
