//! Per-day completion ledger.
//!
//! The ledger is scoped to a single calendar day. The stored record keeps
//! its date; loading it for a different "today" yields an empty ledger, so
//! the daily reset needs no explicit archival step. Callers supply `today`
//! rather than the ledger reading the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completed session ids for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLedger {
    pub date: NaiveDate,
    #[serde(default)]
    pub session_ids: Vec<u32>,
}

impl DayLedger {
    /// Fresh, empty ledger for `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            session_ids: Vec::new(),
        }
    }

    /// Interpret a stored record relative to `today`. A record from any
    /// other day is stale and reads back as empty.
    pub fn for_today(stored: Option<DayLedger>, today: NaiveDate) -> Self {
        match stored {
            Some(ledger) if ledger.date == today => ledger,
            _ => Self::new(today),
        }
    }

    /// Record a session as done. Idempotent: re-marking is a no-op.
    pub fn mark_completed(&mut self, session_id: u32) {
        if !self.session_ids.contains(&session_id) {
            self.session_ids.push(session_id);
        }
    }

    pub fn is_completed(&self, session_id: u32) -> bool {
        self.session_ids.contains(&session_id)
    }

    pub fn completed_count(&self) -> usize {
        self.session_ids.len()
    }
}
