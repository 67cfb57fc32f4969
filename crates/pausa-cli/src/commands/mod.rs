pub mod config;
pub mod custom;
pub mod data;
pub mod exercise;
pub mod extra;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod watch;
