//! End-to-end persistence tests: mutate through a tracker, reopen the
//! store, and verify the collections survive the restart.

use chrono::NaiveDate;
use tempfile::TempDir;

use studyflow_core::storage::database::{HABITS_KEY, SESSIONS_KEY};
use studyflow_core::{
    DailyHabits, Database, EnergyLevel, Habit, SessionDraft, TargetPolicy, Tracker,
};

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
        distraction_count: 2,
        energy_level: EnergyLevel::High,
        notes: "chapter 3".to_string(),
    }
}

fn open_tracker(dir: &TempDir) -> Tracker {
    let db = Database::open_at(&dir.path().join("studyflow.db")).unwrap();
    Tracker::with_database(db, TargetPolicy::default()).unwrap()
}

#[test]
fn sessions_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let created = {
        let mut t = open_tracker(&dir);
        t.add_session(draft("2025-03-10", "math", "09:00", "10:30"))
            .unwrap()
            .unwrap()
    };

    let reopened = open_tracker(&dir);
    assert_eq!(reopened.sessions().records().len(), 1);
    let stored = &reopened.sessions().records()[0];
    assert_eq!(stored, &created);
    assert_eq!(stored.duration_minutes, 90);
    assert_eq!(stored.notes, "chapter 3");
}

#[test]
fn deletes_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut t = open_tracker(&dir);
        let id = t
            .add_session(draft("2025-03-10", "math", "09:00", "10:00"))
            .unwrap()
            .unwrap()
            .id;
        t.add_session(draft("2025-03-10", "physics", "11:00", "12:00"))
            .unwrap();
        t.delete_session(&id).unwrap();
    }

    let reopened = open_tracker(&dir);
    assert_eq!(reopened.sessions().records().len(), 1);
    assert_eq!(reopened.sessions().records()[0].subject, "physics");
}

#[test]
fn habit_replacement_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut t = open_tracker(&dir);
        let mut day = DailyHabits::empty(d("2025-03-10"));
        day.set_flag(Habit::Exercise, true);
        t.update_habits(day).unwrap();
        // second write for the same date replaces wholesale
        let mut replacement = DailyHabits::empty(d("2025-03-10"));
        replacement.set_flag(Habit::SleepEnough, true);
        t.update_habits(replacement).unwrap();
    }

    let reopened = open_tracker(&dir);
    let stored = reopened.habits().for_date(d("2025-03-10")).unwrap();
    assert!(stored.sleep_enough);
    assert!(!stored.exercise);
    assert_eq!(reopened.habits().records().len(), 1);
}

#[test]
fn target_progression_continues_after_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut t = open_tracker(&dir);
        let first = t.ensure_current_week_target(d("2025-03-10")).unwrap();
        assert_eq!(first.target_hours, 5.0);
    }

    // next week, fresh process: derives from last week's stored record
    let mut reopened = open_tracker(&dir);
    let next = reopened.ensure_current_week_target(d("2025-03-17")).unwrap();
    assert_eq!(next.target_hours, 5.5);
    assert_eq!(reopened.targets().records().len(), 2);
}

#[test]
fn corrupt_collection_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyflow.db");

    {
        let db = Database::open_at(&path).unwrap();
        db.kv_set(SESSIONS_KEY, "{definitely not json").unwrap();
        db.kv_set(HABITS_KEY, "42").unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let t = Tracker::with_database(db, TargetPolicy::default()).unwrap();
    assert!(t.sessions().is_empty());
    assert!(t.habits().records().is_empty());
}

#[test]
fn corrupt_collection_is_overwritten_by_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyflow.db");

    {
        let db = Database::open_at(&path).unwrap();
        db.kv_set(SESSIONS_KEY, "{definitely not json").unwrap();
    }

    {
        let db = Database::open_at(&path).unwrap();
        let mut t = Tracker::with_database(db, TargetPolicy::default()).unwrap();
        t.add_session(draft("2025-03-10", "math", "09:00", "10:00"))
            .unwrap();
    }

    let reopened = open_tracker(&dir);
    assert_eq!(reopened.sessions().records().len(), 1);
}

#[test]
fn camel_case_store_payload_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyflow.db");

    // a session row as the documented persisted layout spells it
    let raw = r#"[{
        "id": "abc-123",
        "date": "2025-03-10",
        "subject": "math",
        "startTime": "09:00",
        "endTime": "10:00",
        "durationMinutes": 60,
        "focusQuality": 5,
        "distractionCount": 0,
        "energyLevel": "high",
        "notes": ""
    }]"#;

    {
        let db = Database::open_at(&path).unwrap();
        db.kv_set(SESSIONS_KEY, raw).unwrap();
    }

    let t = open_tracker(&dir);
    assert_eq!(t.sessions().records().len(), 1);
    let stored = &t.sessions().records()[0];
    assert_eq!(stored.id, "abc-123");
    assert_eq!(stored.duration_minutes, 60);
    assert_eq!(stored.energy_level, EnergyLevel::High);
}
