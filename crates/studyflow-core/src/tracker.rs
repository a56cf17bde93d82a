//! Host-side coordinator over the store and the three ledgers.
//!
//! The tracker owns the database handle plus the session, habit and
//! target ledgers, and persists the affected collection immediately after
//! every mutation. Reads are delegated to the ledgers and recomputed on
//! every call. All derivations take their reference date explicitly;
//! nothing here reads the ambient clock.

use chrono::NaiveDate;

use crate::error::Result;
use crate::habits::{DailyHabits, Habit, HabitLedger};
use crate::session::{SessionDraft, SessionLedger, StudySession};
use crate::stats::{self, Dashboard};
use crate::storage::database::{HABITS_KEY, SESSIONS_KEY, TARGETS_KEY};
use crate::storage::{Config, Database};
use crate::target::{TargetPlanner, TargetPolicy, WeeklyTarget};

/// Application state: one store handle, three independent ledgers.
pub struct Tracker {
    db: Database,
    sessions: SessionLedger,
    habits: HabitLedger,
    targets: TargetPlanner,
}

impl Tracker {
    /// Open the default on-disk store and load all three collections,
    /// with the target policy taken from the config file.
    pub fn open() -> Result<Self> {
        let config = Config::load_or_default();
        Self::with_database(Database::open()?, config.target_policy())
    }

    /// Build a tracker over an already-open store (tests use the
    /// in-memory database here). Collections that are missing or fail to
    /// parse load as empty.
    pub fn with_database(db: Database, policy: TargetPolicy) -> Result<Self> {
        let sessions = SessionLedger::from_records(db.load_collection(SESSIONS_KEY)?);
        let habits = HabitLedger::from_records(db.load_collection(HABITS_KEY)?);
        let targets = TargetPlanner::with_policy(db.load_collection(TARGETS_KEY)?, policy);
        Ok(Self {
            db,
            sessions,
            habits,
            targets,
        })
    }

    pub fn sessions(&self) -> &SessionLedger {
        &self.sessions
    }

    pub fn habits(&self) -> &HabitLedger {
        &self.habits
    }

    pub fn targets(&self) -> &TargetPlanner {
        &self.targets
    }

    /// Add a session and persist the collection.
    ///
    /// A declined draft (end not strictly after start) leaves memory and
    /// store untouched and yields `Ok(None)`; the caller observes the
    /// absence, not an error.
    pub fn add_session(&mut self, draft: SessionDraft) -> Result<Option<StudySession>> {
        let created = self.sessions.add(draft).cloned();
        if created.is_some() {
            self.db.save_collection(SESSIONS_KEY, self.sessions.records())?;
        }
        Ok(created)
    }

    /// Delete a session by id, persisting afterward. Returns whether a
    /// record was removed; deleting an unknown id is a no-op.
    pub fn delete_session(&mut self, id: &str) -> Result<bool> {
        let removed = self.sessions.delete(id);
        self.db.save_collection(SESSIONS_KEY, self.sessions.records())?;
        Ok(removed)
    }

    /// Replace (or insert) the habit record for its date and persist.
    pub fn update_habits(&mut self, record: DailyHabits) -> Result<()> {
        self.habits.replace(record);
        self.db.save_collection(HABITS_KEY, self.habits.records())
    }

    /// Set a single habit flag for `date`, keeping the date's other
    /// flags, and persist. Returns the stored record.
    pub fn mark_habit(&mut self, date: NaiveDate, habit: Habit, value: bool) -> Result<DailyHabits> {
        let record = self.habits.mark(date, habit, value);
        self.db.save_collection(HABITS_KEY, self.habits.records())?;
        Ok(record)
    }

    /// Make sure the week containing `reference` has a target record,
    /// persisting when one is created. Returns the week's record either
    /// way.
    pub fn ensure_current_week_target(&mut self, reference: NaiveDate) -> Result<WeeklyTarget> {
        if let Some(created) = self.targets.ensure_current_week(reference) {
            self.db.save_collection(TARGETS_KEY, self.targets.records())?;
            return Ok(created);
        }
        Ok(self.targets.current_week(reference))
    }

    /// Dashboard view for `reference` (pure read, no persistence).
    pub fn dashboard(&self, reference: NaiveDate) -> Dashboard {
        stats::dashboard(&self.sessions, &self.habits, &self.targets, reference)
    }
}
