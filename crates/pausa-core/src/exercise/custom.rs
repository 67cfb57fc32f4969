//! User-authored custom exercises.
//!
//! Customs carry a string id (uuid) to stay clear of the numeric catalogs;
//! they are validated when created, never at catalog-read time, so an
//! invalid record can never reach the catalog.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{Exercise, Posture, Zone};

/// Form limits, enforced on save.
pub const NAME_LEN: (usize, usize) = (3, 50);
pub const MOVEMENT_LEN: (usize, usize) = (10, 200);
pub const OBJECTIVE_LEN: (usize, usize) = (10, 100);
pub const DURATION_SECONDS: (u32, u32) = (15, 45);
pub const MAX_CUSTOM_EXERCISES: usize = 20;

/// Fallback icon per zone (customs have no illustration of their own).
fn zone_icon(zone: Zone) -> &'static str {
    match zone {
        Zone::Cuello => "self_improvement",
        Zone::Hombros => "accessibility",
        Zone::Espalda => "airline_seat_recline_normal",
        Zone::Cadera => "directions_walk",
        Zone::Piernas => "directions_run",
        Zone::DePie => "accessibility_new",
    }
}

/// Fallback image per zone, reusing a native illustration of the same zone.
fn zone_image(zone: Zone) -> &'static str {
    match zone {
        Zone::Cuello => "/exercises/exercise_1.png",
        Zone::Hombros => "/exercises/exercise_4.png",
        Zone::Espalda => "/exercises/exercise_7.png",
        Zone::Cadera => "/exercises/exercise_10.png",
        Zone::Piernas => "/exercises/exercise_13.png",
        Zone::DePie => "/exercises/exercise_16.png",
    }
}

/// A user-created exercise as persisted in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomExercise {
    /// String id, unique among customs.
    pub id: String,
    pub name: String,
    pub zone: Zone,
    pub posture: Posture,
    pub duration_seconds: u32,
    pub movement: String,
    pub objective: String,
    pub created_at: DateTime<Local>,
}

impl CustomExercise {
    /// Build and validate a new custom exercise. Returns the full list of
    /// validation problems at once; nothing is saved on failure.
    pub fn new(
        name: &str,
        zone: Zone,
        posture: Posture,
        duration_seconds: u32,
        movement: &str,
        objective: &str,
    ) -> Result<Self, ValidationError> {
        let exercise = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            zone,
            posture,
            duration_seconds,
            movement: movement.trim().to_string(),
            objective: objective.trim().to_string(),
            created_at: Local::now(),
        };
        exercise.validate()?;
        Ok(exercise)
    }

    /// Re-run the creation-time checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_len(&mut errors, "el nombre", &self.name, NAME_LEN);
        check_len(&mut errors, "la descripción del movimiento", &self.movement, MOVEMENT_LEN);
        check_len(&mut errors, "el objetivo", &self.objective, OBJECTIVE_LEN);

        if self.duration_seconds < DURATION_SECONDS.0 {
            errors.push(format!("La duración mínima es {} segundos", DURATION_SECONDS.0));
        }
        if self.duration_seconds > DURATION_SECONDS.1 {
            errors.push(format!("La duración máxima es {} segundos", DURATION_SECONDS.1));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidExercise(errors))
        }
    }

    /// Numeric id in the 1000-10999 range, derived from the string id.
    ///
    /// Two different customs can hash to the same numeric id; the original
    /// app does not guard against this and neither do we (known gap).
    pub fn numeric_id(&self) -> u32 {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        1000 + (hasher.finish() % 10000) as u32
    }

    /// Convert into the catalog representation.
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            id: self.numeric_id(),
            name: self.name.clone(),
            zone: self.zone,
            posture: self.posture,
            duration_seconds: self.duration_seconds,
            movement: self.movement.clone(),
            objective: self.objective.clone(),
            variants: Vec::new(),
            icon: zone_icon(self.zone).into(),
            image: zone_image(self.zone).into(),
        }
    }
}

fn check_len(errors: &mut Vec<String>, field: &str, value: &str, (min, max): (usize, usize)) {
    let len = value.chars().count();
    if len < min {
        errors.push(format!("{} debe tener al menos {} caracteres", capitalize(field), min));
    }
    if len > max {
        errors.push(format!("{} no puede exceder {} caracteres", capitalize(field), max));
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Enforce the per-user custom exercise cap before adding another.
pub fn can_add_more(existing: &[CustomExercise]) -> bool {
    existing.len() < MAX_CUSTOM_EXERCISES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomExercise {
        CustomExercise::new(
            "Estiramiento de prueba",
            Zone::Cuello,
            Posture::Sitting,
            30,
            "Movimiento suave de prueba para el cuello.",
            "Probar la validación de ejercicios.",
        )
        .unwrap()
    }

    #[test]
    fn valid_exercise_passes() {
        let e = valid();
        assert!(e.validate().is_ok());
    }

    #[test]
    fn collects_all_errors_at_once() {
        let result = CustomExercise::new("ab", Zone::Cuello, Posture::Sitting, 5, "corto", "x");
        match result {
            Err(ValidationError::InvalidExercise(errors)) => {
                // name too short, movement too short, objective too short,
                // duration below minimum
                assert_eq!(errors.len(), 4);
            }
            other => panic!("expected InvalidExercise, got {other:?}"),
        }
    }

    #[test]
    fn duration_bounds_inclusive() {
        for secs in [15, 45] {
            assert!(CustomExercise::new(
                "Estiramiento válido",
                Zone::Piernas,
                Posture::Standing,
                secs,
                "Movimiento válido de prueba.",
                "Objetivo válido de prueba.",
            )
            .is_ok());
        }
        assert!(CustomExercise::new(
            "Estiramiento inválido",
            Zone::Piernas,
            Posture::Standing,
            46,
            "Movimiento válido de prueba.",
            "Objetivo válido de prueba.",
        )
        .is_err());
    }

    #[test]
    fn numeric_id_lands_in_custom_range() {
        let e = valid();
        let id = e.numeric_id();
        assert!((1000..11000).contains(&id));
        // Deterministic for a fixed string id.
        assert_eq!(id, e.numeric_id());
    }

    #[test]
    fn to_exercise_uses_zone_fallbacks() {
        let e = valid().to_exercise();
        assert_eq!(e.icon, "self_improvement");
        assert_eq!(e.image, "/exercises/exercise_1.png");
        assert!(e.variants.is_empty());
    }

    #[test]
    fn cap_at_twenty() {
        let many: Vec<CustomExercise> = (0..MAX_CUSTOM_EXERCISES).map(|_| valid()).collect();
        assert!(!can_add_more(&many));
        assert!(can_add_more(&many[..MAX_CUSTOM_EXERCISES - 1]));
    }
}
