//! SQLite-backed application state.
//!
//! A single `kv` table holds JSON-serialized values under fixed keys:
//! today's completion ledger and the full stats history. Malformed stored
//! JSON is treated as absent and replaced by the default value; no error
//! ever surfaces from a read.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::data_dir;
use crate::ledger::DayLedger;
use crate::stats::StatsHistory;

const COMPLETED_SESSIONS_KEY: &str = "completed-sessions";
const STATS_HISTORY_KEY: &str = "stats-history";

/// SQLite database for mutable application state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/pausa/pausa.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("pausa.db");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Today's completion ledger. A stored record from another day, or an
    /// unparseable one, yields a fresh empty ledger.
    pub fn ledger(&self, today: NaiveDate) -> Result<DayLedger, rusqlite::Error> {
        let stored = self
            .kv_get(COMPLETED_SESSIONS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Ok(DayLedger::for_today(stored, today))
    }

    pub fn save_ledger(&self, ledger: &DayLedger) -> Result<(), Box<dyn std::error::Error>> {
        let raw = serde_json::to_string(ledger)?;
        self.kv_set(COMPLETED_SESSIONS_KEY, &raw)?;
        Ok(())
    }

    /// Full completion history; malformed data reads back empty.
    pub fn stats_history(&self) -> Result<StatsHistory, rusqlite::Error> {
        Ok(self
            .kv_get(STATS_HISTORY_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default())
    }

    pub fn save_stats_history(&self, history: &StatsHistory) -> Result<(), Box<dyn std::error::Error>> {
        let raw = serde_json::to_string(history)?;
        self.kv_set(STATS_HISTORY_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Zone;
    use crate::stats::CompletedExercise;
    use chrono::Local;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn ledger_roundtrip_and_rollover() {
        let db = Database::open_memory().unwrap();

        let mut ledger = db.ledger(day("2024-03-11")).unwrap();
        ledger.mark_completed(1);
        ledger.mark_completed(3);
        db.save_ledger(&ledger).unwrap();

        let same_day = db.ledger(day("2024-03-11")).unwrap();
        assert_eq!(same_day.session_ids, vec![1, 3]);

        // Yesterday's record reads back empty once today advances.
        let next_day = db.ledger(day("2024-03-12")).unwrap();
        assert!(next_day.session_ids.is_empty());
    }

    #[test]
    fn malformed_ledger_json_is_treated_as_absent() {
        let db = Database::open_memory().unwrap();
        db.kv_set(COMPLETED_SESSIONS_KEY, "{ not json").unwrap();
        let ledger = db.ledger(day("2024-03-11")).unwrap();
        assert!(ledger.session_ids.is_empty());
    }

    #[test]
    fn stats_history_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert!(db.stats_history().unwrap().days.is_empty());

        let mut history = StatsHistory::default();
        history.record(
            CompletedExercise {
                id: 1,
                name: "Rotación de cuello".into(),
                zone: Zone::Cuello,
                duration_seconds: 45,
                completed_at: Local::now(),
            },
            day("2024-03-11"),
        );
        db.save_stats_history(&history).unwrap();
        assert_eq!(db.stats_history().unwrap(), history);
    }

    #[test]
    fn malformed_history_reads_back_empty() {
        let db = Database::open_memory().unwrap();
        db.kv_set(STATS_HISTORY_KEY, "42").unwrap();
        // An integer is valid JSON but not a history; treated as absent.
        assert!(db.stats_history().unwrap().days.is_empty());
    }
}
