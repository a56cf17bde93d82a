//! # Studyflow Core Library
//!
//! This library provides the core business logic for Studyflow, a personal
//! productivity tracker for timed study sessions, daily habits and a
//! self-adjusting weekly study-hour goal. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI shell being a thin layer over the same core
//! library.
//!
//! ## Architecture
//!
//! - **Ledgers**: three independent in-memory collections (sessions,
//!   habits, weekly targets), each mirrored wholesale to the key-value
//!   store after every mutation
//! - **Storage**: SQLite-backed key-value store for the collections and
//!   TOML-based configuration
//! - **Views**: stateless aggregation (daily totals, weekly stats,
//!   streaks, monthly completion, trailing-week series), recomputed from
//!   ledger state on every read
//! - **Time**: every derivation takes its reference date explicitly, so
//!   results are deterministic under test
//!
//! ## Key Components
//!
//! - [`Tracker`]: store handle plus the three ledgers, with
//!   persist-after-mutate wiring
//! - [`SessionLedger`], [`HabitLedger`], [`TargetPlanner`]: the owned
//!   collections and their derivations
//! - [`Database`]: key-value persistence
//! - [`Config`]: application configuration management

pub mod dates;
pub mod error;
pub mod habits;
pub mod session;
pub mod stats;
pub mod storage;
pub mod target;
pub mod tracker;

pub use error::{ConfigError, CoreError, DatabaseError, Result};
pub use habits::{DailyHabits, Habit, HabitLedger, HabitStreaks, MonthlyCompletion};
pub use session::{
    EnergyLevel, SessionDraft, SessionLedger, StudySession, SubjectTotal, WeeklyStats,
};
pub use stats::{dashboard, last_7_days, Dashboard, DayActivity};
pub use storage::{Config, Database};
pub use target::{TargetPlanner, TargetPolicy, WeeklyTarget};
pub use tracker::Tracker;
