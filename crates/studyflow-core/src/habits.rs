//! Daily habit ledger: one record per calendar date, six boolean flags.
//!
//! The upsert contract is a whole-record replace keyed by date. Callers
//! that want to change a single flag without clobbering the rest of the
//! day must go through [`HabitLedger::mark`], which reads the existing
//! record (or an all-false default) before replacing it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;

/// The six tracked habit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Habit {
    WakeUpOnTime,
    SleepEnough,
    Exercise,
    EnglishPractice,
    NoPorn,
    NoSocialMedia,
}

impl Habit {
    pub const ALL: [Habit; 6] = [
        Habit::WakeUpOnTime,
        Habit::SleepEnough,
        Habit::Exercise,
        Habit::EnglishPractice,
        Habit::NoPorn,
        Habit::NoSocialMedia,
    ];

    /// Keyword used on the command line and in display output.
    pub fn keyword(&self) -> &'static str {
        match self {
            Habit::WakeUpOnTime => "wake-up-on-time",
            Habit::SleepEnough => "sleep-enough",
            Habit::Exercise => "exercise",
            Habit::EnglishPractice => "english-practice",
            Habit::NoPorn => "no-porn",
            Habit::NoSocialMedia => "no-social-media",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Habit> {
        Habit::ALL.iter().copied().find(|h| h.keyword() == s)
    }
}

/// One day's habit record.
///
/// Persisted with the field spelling of the store's JSON schema. A date
/// with no record reads as all-false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHabits {
    pub date: NaiveDate,
    pub wake_up_on_time: bool,
    pub sleep_enough: bool,
    pub exercise: bool,
    pub english_practice: bool,
    pub no_porn: bool,
    pub no_social_media: bool,
}

impl DailyHabits {
    /// All-false record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            wake_up_on_time: false,
            sleep_enough: false,
            exercise: false,
            english_practice: false,
            no_porn: false,
            no_social_media: false,
        }
    }

    pub fn flag(&self, habit: Habit) -> bool {
        match habit {
            Habit::WakeUpOnTime => self.wake_up_on_time,
            Habit::SleepEnough => self.sleep_enough,
            Habit::Exercise => self.exercise,
            Habit::EnglishPractice => self.english_practice,
            Habit::NoPorn => self.no_porn,
            Habit::NoSocialMedia => self.no_social_media,
        }
    }

    pub fn set_flag(&mut self, habit: Habit, value: bool) {
        match habit {
            Habit::WakeUpOnTime => self.wake_up_on_time = value,
            Habit::SleepEnough => self.sleep_enough = value,
            Habit::Exercise => self.exercise = value,
            Habit::EnglishPractice => self.english_practice = value,
            Habit::NoPorn => self.no_porn = value,
            Habit::NoSocialMedia => self.no_social_media = value,
        }
    }

    /// How many of the six flags are set.
    pub fn completed_count(&self) -> usize {
        Habit::ALL.iter().filter(|h| self.flag(**h)).count()
    }
}

/// Current streak length per habit, counted over recorded dates from the
/// most recent backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreaks {
    pub wake_up_on_time: u32,
    pub sleep_enough: u32,
    pub exercise: u32,
    pub english_practice: u32,
    pub no_porn: u32,
    pub no_social_media: u32,
}

impl HabitStreaks {
    pub fn get(&self, habit: Habit) -> u32 {
        match habit {
            Habit::WakeUpOnTime => self.wake_up_on_time,
            Habit::SleepEnough => self.sleep_enough,
            Habit::Exercise => self.exercise,
            Habit::EnglishPractice => self.english_practice,
            Habit::NoPorn => self.no_porn,
            Habit::NoSocialMedia => self.no_social_media,
        }
    }
}

/// Completion percentages for one calendar month, both 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCompletion {
    /// Share of all six flags set across the month's records.
    pub overall: u32,
    /// Share of the month's records with english practice done.
    pub english: u32,
}

/// Owned collection of daily habit records, at most one per date.
#[derive(Debug, Default)]
pub struct HabitLedger {
    records: Vec<DailyHabits>,
}

impl HabitLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<DailyHabits>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyHabits] {
        &self.records
    }

    /// Replace the record for `record.date` wholesale, appending when the
    /// date is new. Flags absent from the caller's record are stored as
    /// the caller left them, not merged with prior values.
    pub fn replace(&mut self, record: DailyHabits) {
        match self.records.iter_mut().find(|r| r.date == record.date) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Set one flag for `date`, preserving the date's other flags.
    ///
    /// Reads the existing record (or an all-false default), flips the one
    /// flag, and replaces. Returns the stored record.
    pub fn mark(&mut self, date: NaiveDate, habit: Habit, value: bool) -> DailyHabits {
        let mut record = self
            .for_date(date)
            .copied()
            .unwrap_or_else(|| DailyHabits::empty(date));
        record.set_flag(habit, value);
        self.replace(record);
        record
    }

    /// The record for `date`, if one was logged.
    pub fn for_date(&self, date: NaiveDate) -> Option<&DailyHabits> {
        self.records.iter().find(|r| r.date == date)
    }

    /// Consecutive `true` run for `habit` over recorded dates, newest
    /// backward, stopping at the first recorded `false`.
    ///
    /// Only dates that have a record participate: a missing day does not
    /// break the run the way a logged `false` does.
    pub fn streak_for(&self, habit: Habit) -> u32 {
        let mut by_date: Vec<&DailyHabits> = self.records.iter().collect();
        by_date.sort_by_key(|r| r.date);

        let mut streak = 0;
        for record in by_date.iter().rev() {
            if !record.flag(habit) {
                break;
            }
            streak += 1;
        }
        streak
    }

    /// Streaks for all six habits.
    pub fn streaks(&self) -> HabitStreaks {
        HabitStreaks {
            wake_up_on_time: self.streak_for(Habit::WakeUpOnTime),
            sleep_enough: self.streak_for(Habit::SleepEnough),
            exercise: self.streak_for(Habit::Exercise),
            english_practice: self.streak_for(Habit::EnglishPractice),
            no_porn: self.streak_for(Habit::NoPorn),
            no_social_media: self.streak_for(Habit::NoSocialMedia),
        }
    }

    /// Completion percentages over records in `reference`'s calendar
    /// month. Both percentages are 0 when the month has no records.
    pub fn monthly_completion(&self, reference: NaiveDate) -> MonthlyCompletion {
        let month: Vec<&DailyHabits> = self
            .records
            .iter()
            .filter(|r| dates::same_month(r.date, reference))
            .collect();
        if month.is_empty() {
            return MonthlyCompletion {
                overall: 0,
                english: 0,
            };
        }

        let flags_set: usize = month.iter().map(|r| r.completed_count()).sum();
        let flags_possible = month.len() * Habit::ALL.len();
        let english_days = month.iter().filter(|r| r.english_practice).count();

        MonthlyCompletion {
            overall: (flags_set as f64 / flags_possible as f64 * 100.0).round() as u32,
            english: (english_days as f64 / month.len() as f64 * 100.0).round() as u32,
        }
    }
}
