//! Smart exercise selection.
//!
//! Candidates are scored (lower is better): zone position in the
//! least-worked ordering weighs 10 per step, a recently shown exercise is
//! penalized by 50, and a jitter in [0, 5) breaks ties so back-to-back
//! picks do not go stale. The jitter source is injected so tests can pin
//! it to zero.

use rand::Rng;

use super::{Exercise, Zone};

/// How many recent completions feed the recency penalty.
pub const RECENT_LIMIT: usize = 5;

/// Zone-ordering weight per position.
const ZONE_WEIGHT: f64 = 10.0;
/// Penalty for an exercise shown recently.
const RECENCY_PENALTY: f64 = 50.0;
/// Upper bound (exclusive) of the tie-break jitter.
const JITTER_MAX: f64 = 5.0;

/// Injected randomness for the tie-break term.
pub trait JitterSource {
    /// A value in [0, 5).
    fn jitter(&mut self) -> f64;
}

/// Production jitter backed by a rand RNG.
pub struct RandomJitter<R: Rng>(pub R);

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn jitter(&mut self) -> f64 {
        self.0.gen_range(0.0..JITTER_MAX)
    }
}

/// Zero jitter: selection becomes fully deterministic.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&mut self) -> f64 {
        0.0
    }
}

/// Convenience constructor for the default thread-RNG jitter.
pub fn thread_jitter() -> RandomJitter<rand::rngs::ThreadRng> {
    RandomJitter(rand::thread_rng())
}

/// Pick the next exercise to show.
///
/// `exclude_id` drops the exercise currently on screen; if that empties
/// the pool the unfiltered catalog's first element is returned instead.
/// `None` only for an empty catalog (the caller keeps whatever it has).
pub fn pick_next(
    catalog: &[Exercise],
    exclude_id: Option<u32>,
    least_worked_zones: &[Zone],
    recent_ids: &[u32],
    jitter: &mut impl JitterSource,
) -> Option<Exercise> {
    let available: Vec<&Exercise> = catalog
        .iter()
        .filter(|e| Some(e.id) != exclude_id)
        .collect();

    if available.is_empty() {
        return catalog.first().cloned();
    }

    let scored = available.into_iter().map(|exercise| {
        let zone_index = least_worked_zones
            .iter()
            .position(|z| *z == exercise.zone)
            .unwrap_or(least_worked_zones.len());
        let mut score = zone_index as f64 * ZONE_WEIGHT;
        if recent_ids.contains(&exercise.id) {
            score += RECENCY_PENALTY;
        }
        score += jitter.jitter();
        (exercise, score)
    });

    scored
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(exercise, _)| exercise.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::catalog::native_exercises;
    use crate::exercise::{Posture, Zone};
    use rand::SeedableRng;

    fn ex(id: u32, zone: Zone) -> Exercise {
        Exercise {
            id,
            name: format!("Ejercicio {id}"),
            zone,
            posture: Posture::Sitting,
            duration_seconds: 30,
            movement: String::new(),
            objective: String::new(),
            variants: Vec::new(),
            icon: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn prefers_least_worked_zone() {
        let catalog = vec![ex(1, Zone::Espalda), ex(2, Zone::Cuello)];
        let zones = [Zone::Cuello, Zone::Hombros, Zone::Espalda];
        let picked = pick_next(&catalog, None, &zones, &[], &mut NoJitter).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn recency_penalty_outweighs_zone_bias() {
        // Identical zones; only recency differs.
        let catalog = vec![ex(1, Zone::Cuello), ex(2, Zone::Cuello)];
        let zones = Zone::ALL;
        let picked = pick_next(&catalog, None, &zones, &[1], &mut NoJitter).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn recent_exercise_in_best_zone_loses_to_fresh_mid_zone() {
        // Zone steps cost 10 each, recency costs 50: even the last of six
        // zones (50) ties no worse than a recent pick in the first (0+50),
        // so a fresh candidate a few zones down must win.
        let catalog = vec![ex(1, Zone::Cuello), ex(2, Zone::Cadera)];
        let picked = pick_next(&catalog, None, &Zone::ALL, &[1], &mut NoJitter).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn exclude_current_exercise() {
        let catalog = vec![ex(1, Zone::Cuello), ex(2, Zone::Cuello)];
        let picked = pick_next(&catalog, Some(1), &Zone::ALL, &[], &mut NoJitter).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn exclusion_emptying_pool_falls_back_to_first() {
        let catalog = vec![ex(7, Zone::Espalda)];
        let picked = pick_next(&catalog, Some(7), &Zone::ALL, &[], &mut NoJitter).unwrap();
        assert_eq!(picked.id, 7);
    }

    #[test]
    fn empty_catalog_yields_none() {
        assert!(pick_next(&[], None, &Zone::ALL, &[], &mut NoJitter).is_none());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let catalog = native_exercises();
        let zones = Zone::ALL;
        let pick = |seed: u64| {
            let mut jitter = RandomJitter(rand_pcg::Pcg64::seed_from_u64(seed));
            pick_next(&catalog, None, &zones, &[], &mut jitter).unwrap().id
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn jitter_stays_below_zone_step() {
        let mut jitter = thread_jitter();
        for _ in 0..100 {
            let j = jitter.jitter();
            assert!((0.0..5.0).contains(&j));
        }
    }
}
