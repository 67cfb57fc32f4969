//! TOML-based application configuration.
//!
//! Stores user preferences (posture filter, notifications, sound) and the
//! advanced settings block (work schedule, notification quiet hours,
//! enabled extra exercises, custom exercises). Loading uses serde defaults
//! throughout, so missing keys shallow-merge with the defaults and old
//! config files keep working.
//!
//! Stored at `~/.config/pausa/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::exercise::custom::CustomExercise;
use crate::exercise::PosturePrefs;
use crate::schedule::{generate_sessions, NotificationScheduleConfig, Session, WorkScheduleConfig};

/// Basic user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub postures: PosturePrefs,
    /// Master reminder flag.
    #[serde(default)]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            postures: PosturePrefs::default(),
            notifications: false,
            sound: true,
        }
    }
}

/// Advanced settings block, gated by a master toggle. With the toggle off
/// the default work schedule applies and quiet hours are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdvancedSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub work_schedule: WorkScheduleConfig,
    #[serde(default)]
    pub notification_schedule: NotificationScheduleConfig,
    #[serde(default)]
    pub enabled_extra_exercises: Vec<u32>,
    #[serde(default)]
    pub custom_exercises: Vec<CustomExercise>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pausa/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub advanced: AdvancedSettings,
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_true() -> bool {
    true
}
fn default_theme() -> String {
    "auto".into()
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns an error for unknown
    /// keys or unparseable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// The work schedule currently in force: the advanced one when the
    /// master toggle is on, the default window otherwise.
    pub fn effective_work_schedule(&self) -> WorkScheduleConfig {
        if self.advanced.enabled {
            self.advanced.work_schedule
        } else {
            WorkScheduleConfig::default()
        }
    }

    /// Quiet hours in force; disabled unless advanced settings are on.
    pub fn effective_notification_schedule(&self) -> NotificationScheduleConfig {
        if self.advanced.enabled {
            self.advanced.notification_schedule
        } else {
            NotificationScheduleConfig {
                enabled: false,
                ..Default::default()
            }
        }
    }

    /// Today's session slots under the effective schedule.
    pub fn sessions(&self) -> Vec<Session> {
        generate_sessions(&self.effective_work_schedule())
    }

    /// Whether the user has ever touched the advanced block; import only
    /// adopts incoming settings when this is false.
    pub fn has_custom_settings(&self) -> bool {
        let defaults = AdvancedSettings::default();
        self.advanced.enabled
            || self.advanced.work_schedule != defaults.work_schedule
            || self.advanced.notification_schedule != defaults.notification_schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert!(parsed.preferences.postures.sitting);
        assert!(!parsed.preferences.notifications);
        assert!(parsed.preferences.sound);
    }

    #[test]
    fn missing_keys_merge_with_defaults() {
        let parsed: Config = toml::from_str("[preferences]\nnotifications = true\n").unwrap();
        assert!(parsed.preferences.notifications);
        // Untouched sections fall back to defaults.
        assert!(parsed.preferences.sound);
        assert_eq!(parsed.advanced.work_schedule, WorkScheduleConfig::default());
        assert_eq!(parsed.theme, "auto");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("preferences.sound").as_deref(), Some("true"));
        assert_eq!(
            cfg.get("advanced.work_schedule.startHour").as_deref(),
            Some("10")
        );
        assert!(cfg.get("preferences.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_bool() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "preferences.notifications", "true").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "preferences.notifications").unwrap(),
            &serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "advanced.work_schedule.sessionCount", "8")
            .unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "advanced.work_schedule.sessionCount").unwrap(),
            &serde_json::Value::Number(8.into())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(Config::set_json_value_by_path(&mut json, "preferences.nope", "1").is_err());
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(
            Config::set_json_value_by_path(&mut json, "preferences.sound", "not_a_bool").is_err()
        );
    }

    #[test]
    fn effective_schedule_ignores_advanced_until_enabled() {
        let mut cfg = Config::default();
        cfg.advanced.work_schedule.start_hour = 8;
        assert_eq!(cfg.effective_work_schedule(), WorkScheduleConfig::default());

        cfg.advanced.enabled = true;
        assert_eq!(cfg.effective_work_schedule().start_hour, 8);
    }

    #[test]
    fn custom_settings_detection() {
        let mut cfg = Config::default();
        assert!(!cfg.has_custom_settings());
        cfg.advanced.work_schedule.end_hour = 18;
        assert!(cfg.has_custom_settings());
    }
}
