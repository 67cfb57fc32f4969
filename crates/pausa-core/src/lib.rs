//! # Pausa Core Library
//!
//! Core business logic for Pausa, a single-user offline-first micro-break
//! reminder. It schedules recurring "active pause" sessions across a
//! workday, picks a guided exercise for each session, and records
//! completion history for weekly summaries. All operations are available
//! via the `pausa` CLI binary; any GUI is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Schedule**: evenly spaced session slots generated from a work-window
//!   configuration, plus a pure session clock (next session, tolerance
//!   checks, quiet hours)
//! - **Exercises**: a fixed native catalog merged with optional extras and
//!   user-authored custom exercises, and a selector biased toward
//!   under-worked body zones
//! - **Ledger / Stats**: per-day completion tracking and weekly aggregation
//! - **Storage**: SQLite key-value state and TOML-based configuration
//!
//! Everything in the core is synchronous and single-writer; persistence is
//! confined to the [`storage`] module so the domain logic stays pure and
//! testable with plain values.

pub mod error;
pub mod exercise;
pub mod export;
pub mod ledger;
pub mod reminder;
pub mod schedule;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, ImportError, StorageError, ValidationError};
pub use exercise::{Exercise, Posture, PosturePrefs, Zone};
pub use ledger::DayLedger;
pub use schedule::{generate_sessions, NotificationScheduleConfig, Session, WorkScheduleConfig};
pub use stats::{CompletedExercise, DailyStats, StatsHistory};
pub use storage::{Config, Database};
