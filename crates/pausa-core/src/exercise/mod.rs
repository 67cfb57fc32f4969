//! Exercise records and the closed zone/posture enumerations.

pub mod catalog;
pub mod custom;
pub mod selector;

use serde::{Deserialize, Serialize};

/// Body region targeted by an exercise. Closed enumeration; wire names are
/// the Spanish labels of the original catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Cuello,
    Hombros,
    Espalda,
    Cadera,
    Piernas,
    DePie,
}

impl Zone {
    /// Enumeration order; used as the stable tie-break everywhere zones are
    /// sorted.
    pub const ALL: [Zone; 6] = [
        Zone::Cuello,
        Zone::Hombros,
        Zone::Espalda,
        Zone::Cadera,
        Zone::Piernas,
        Zone::DePie,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Cuello => "Cuello",
            Zone::Hombros => "Hombros",
            Zone::Espalda => "Espalda",
            Zone::Cadera => "Cadera",
            Zone::Piernas => "Piernas",
            Zone::DePie => "De Pie",
        }
    }

    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Cuello => "cuello",
            Zone::Hombros => "hombros",
            Zone::Espalda => "espalda",
            Zone::Cadera => "cadera",
            Zone::Piernas => "piernas",
            Zone::DePie => "de_pie",
        }
    }
}

/// Sitting or standing context filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    Sitting,
    Standing,
}

/// Which postures the user wants exercises for. The preference editor
/// keeps at least one flag on; with both off every catalog read is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosturePrefs {
    pub sitting: bool,
    pub standing: bool,
}

impl Default for PosturePrefs {
    fn default() -> Self {
        Self {
            sitting: true,
            standing: true,
        }
    }
}

impl PosturePrefs {
    pub fn allows(&self, posture: Posture) -> bool {
        match posture {
            Posture::Sitting => self.sitting,
            Posture::Standing => self.standing,
        }
    }
}

/// A named variant of an exercise (pace, hold, amplitude).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseVariant {
    pub id: String,
    pub name: String,
}

/// One guided exercise.
///
/// Ids are globally unique across the three sources: native 1-18, extra
/// 101+, custom remapped into 1000-10999. The selector's recency filter
/// relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub zone: Zone,
    pub posture: Posture,
    pub duration_seconds: u32,
    pub movement: String,
    pub objective: String,
    #[serde(default)]
    pub variants: Vec<ExerciseVariant>,
    /// Material icon name.
    pub icon: String,
    /// Path to the exercise illustration.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_serializes_to_spanish_wire_names() {
        assert_eq!(serde_json::to_string(&Zone::DePie).unwrap(), "\"de_pie\"");
        assert_eq!(serde_json::to_string(&Zone::Cuello).unwrap(), "\"cuello\"");
        let z: Zone = serde_json::from_str("\"hombros\"").unwrap();
        assert_eq!(z, Zone::Hombros);
    }

    #[test]
    fn zone_order_matches_enumeration() {
        let mut sorted = Zone::ALL;
        sorted.sort();
        assert_eq!(sorted, Zone::ALL);
    }

    #[test]
    fn posture_prefs_filter() {
        let prefs = PosturePrefs {
            sitting: true,
            standing: false,
        };
        assert!(prefs.allows(Posture::Sitting));
        assert!(!prefs.allows(Posture::Standing));
    }
}
