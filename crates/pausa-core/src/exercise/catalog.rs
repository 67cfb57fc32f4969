//! Built-in exercise catalogs and catalog assembly.
//!
//! Three sources feed the catalog, concatenated in order: the fixed native
//! set (ids 1-18, three per zone), the fixed extra set (ids 101+, enabled
//! per id in settings), and user-authored custom exercises (ids remapped
//! into 1000-10999). Each source is filtered by posture preference.

use super::custom::CustomExercise;
use super::{Exercise, ExerciseVariant, Posture, PosturePrefs, Zone};

fn ex(
    id: u32,
    name: &str,
    zone: Zone,
    posture: Posture,
    duration_seconds: u32,
    movement: &str,
    objective: &str,
    variants: &[(&str, &str)],
    icon: &str,
) -> Exercise {
    Exercise {
        id,
        name: name.into(),
        zone,
        posture,
        duration_seconds,
        movement: movement.into(),
        objective: objective.into(),
        variants: variants
            .iter()
            .map(|(id, name)| ExerciseVariant {
                id: (*id).into(),
                name: (*name).into(),
            })
            .collect(),
        icon: icon.into(),
        image: format!("/exercises/exercise_{id}.png"),
    }
}

/// The fixed native catalog.
pub fn native_exercises() -> Vec<Exercise> {
    use Posture::{Sitting, Standing};
    vec![
        // Cuello
        ex(
            1,
            "Inclinación lateral de cuello",
            Zone::Cuello,
            Sitting,
            40,
            "Oreja hacia hombro, alternando lados.",
            "Liberar tensión cervical lateral.",
            &[("suave", "Suave (sostener 5s)"), ("fluida", "Fluida (movimiento continuo)")],
            "swap_horiz",
        ),
        ex(
            2,
            "Flexión cervical frontal",
            Zone::Cuello,
            Sitting,
            30,
            "Mentón hacia pecho.",
            "Descomprimir cervical posterior.",
            &[("estatica", "Estática"), ("pulsos", "Pulsos cortos")],
            "vertical_align_bottom",
        ),
        ex(
            3,
            "Rotación de cuello",
            Zone::Cuello,
            Sitting,
            45,
            "Girar cabeza derecha/izquierda.",
            "Movilidad cervical global.",
            &[("lenta", "Lenta"), ("pausa", "Con pausa final")],
            "rotate_right",
        ),
        // Hombros
        ex(
            4,
            "Elevación y caída de hombros",
            Zone::Hombros,
            Sitting,
            35,
            "Subir hombros a orejas y soltar.",
            "Liberar trapecios.",
            &[("lento", "Lento"), ("ritmico", "Rítmico")],
            "unfold_more",
        ),
        ex(
            5,
            "Rotación de hombros",
            Zone::Hombros,
            Sitting,
            40,
            "Círculos hacia atrás.",
            "Activar cintura escapular.",
            &[("amplio", "Amplio"), ("reducido", "Reducido")],
            "sync",
        ),
        ex(
            6,
            "Retracción escapular",
            Zone::Hombros,
            Sitting,
            45,
            "Juntar omóplatos suavemente.",
            "Contrarrestar postura encorvada.",
            &[("sosten", "Sostén"), ("pulsos", "Pulsos")],
            "compress",
        ),
        // Espalda
        ex(
            7,
            "Extensión torácica sentada",
            Zone::Espalda,
            Sitting,
            40,
            "Abrir pecho, llevar brazos atrás.",
            "Movilidad dorsal.",
            &[("estatica", "Estática"), ("fluida", "Fluida")],
            "open_in_full",
        ),
        ex(
            8,
            "Gato–vaca sentado",
            Zone::Espalda,
            Sitting,
            45,
            "Redondear y extender columna.",
            "Lubricar columna.",
            &[("lento", "Lento"), ("continuo", "Continuo")],
            "waves",
        ),
        ex(
            9,
            "Rotación torácica",
            Zone::Espalda,
            Sitting,
            35,
            "Girar torso desde la cintura.",
            "Liberar rigidez dorsal.",
            &[("alternada", "Alternada"), ("pausa", "Con pausa")],
            "autorenew",
        ),
        // Cadera
        ex(
            10,
            "Apertura de cadera sentada",
            Zone::Cadera,
            Sitting,
            40,
            "Rodilla hacia afuera.",
            "Movilidad de cadera.",
            &[("estatica", "Estática"), ("pulsos", "Pulsos")],
            "open_with",
        ),
        ex(
            11,
            "Flexión de cadera alterna",
            Zone::Cadera,
            Sitting,
            35,
            "Elevar rodilla.",
            "Activar flexores.",
            &[("alternada", "Alternada"), ("sosten", "Sostén")],
            "keyboard_arrow_up",
        ),
        ex(
            12,
            "Balanceo pélvico",
            Zone::Cadera,
            Sitting,
            45,
            "Basculación adelante/atrás.",
            "Descomprimir zona lumbar.",
            &[("lento", "Lento"), ("fluido", "Fluido")],
            "swap_vert",
        ),
        // Piernas
        ex(
            13,
            "Elevación de talones",
            Zone::Piernas,
            Sitting,
            30,
            "Subir y bajar talones.",
            "Activar circulación.",
            &[("bilateral", "Bilateral"), ("alternada", "Alternada")],
            "height",
        ),
        ex(
            14,
            "Extensión de rodilla",
            Zone::Piernas,
            Sitting,
            40,
            "Extender pierna al frente.",
            "Activar cuádriceps.",
            &[("alternada", "Alternada"), ("sosten", "Sostén")],
            "straighten",
        ),
        ex(
            15,
            "Movilidad de tobillos",
            Zone::Piernas,
            Sitting,
            30,
            "Círculos con el pie.",
            "Lubricar articulación.",
            &[("amplio", "Amplio"), ("reducido", "Reducido")],
            "rotate_90_degrees_ccw",
        ),
        // De pie (complementarios)
        ex(
            16,
            "Estiramiento de columna de pie",
            Zone::DePie,
            Standing,
            35,
            "Brazos arriba, elongar.",
            "Descompresión global.",
            &[("sosten", "Sostén"), ("balanceo", "Balanceo suave")],
            "expand",
        ),
        ex(
            17,
            "Bisagra de cadera corta",
            Zone::DePie,
            Standing,
            30,
            "Inclinar torso manteniendo espalda neutra.",
            "Activar cadena posterior.",
            &[("corto", "Corto"), ("controlado", "Controlado")],
            "turn_right",
        ),
        ex(
            18,
            "Sentadilla parcial",
            Zone::DePie,
            Standing,
            45,
            "Flexión leve de rodillas.",
            "Activar piernas sin fatiga.",
            &[("pulsos", "Pulsos"), ("sosten", "Sostén")],
            "download",
        ),
    ]
}

/// The fixed extra catalog, opt-in per id.
pub fn extra_exercises() -> Vec<Exercise> {
    use Posture::{Sitting, Standing};
    vec![
        ex(
            101,
            "Estiramiento de muñecas",
            Zone::Hombros,
            Sitting,
            30,
            "Extender brazo, tirar suavemente de los dedos hacia atrás.",
            "Aliviar tensión de antebrazo y muñeca.",
            &[("palma", "Palma arriba"), ("dorso", "Dorso arriba")],
            "back_hand",
        ),
        ex(
            102,
            "Abrazo de rodilla al pecho",
            Zone::Cadera,
            Sitting,
            40,
            "Llevar una rodilla al pecho y sostener.",
            "Estirar glúteo y lumbar baja.",
            &[("alternada", "Alternada"), ("sosten", "Sostén largo")],
            "accessibility",
        ),
        ex(
            103,
            "Inclinación lateral de tronco",
            Zone::Espalda,
            Standing,
            35,
            "Brazo sobre la cabeza, inclinar el tronco al lado contrario.",
            "Elongar cadena lateral.",
            &[("estatica", "Estática"), ("fluida", "Fluida")],
            "align_horizontal_left",
        ),
        ex(
            104,
            "Círculos de cadera",
            Zone::Cadera,
            Standing,
            40,
            "Manos en la cintura, dibujar círculos amplios.",
            "Movilidad pélvica global.",
            &[("amplio", "Amplio"), ("reducido", "Reducido")],
            "incomplete_circle",
        ),
        ex(
            105,
            "Marcha en el sitio",
            Zone::Piernas,
            Standing,
            45,
            "Elevar rodillas alternando, ritmo cómodo.",
            "Reactivar circulación general.",
            &[("suave", "Suave"), ("energica", "Enérgica")],
            "directions_walk",
        ),
        ex(
            106,
            "Doble mentón",
            Zone::Cuello,
            Sitting,
            30,
            "Retraer la cabeza manteniendo la mirada al frente.",
            "Corregir proyección anterior de cabeza.",
            &[("sosten", "Sostén"), ("pulsos", "Pulsos")],
            "face_retouching_natural",
        ),
    ]
}

/// Extra exercises whose id appears in `enabled_ids`.
pub fn enabled_extra_exercises(enabled_ids: &[u32]) -> Vec<Exercise> {
    extra_exercises()
        .into_iter()
        .filter(|e| enabled_ids.contains(&e.id))
        .collect()
}

/// Assemble the full catalog: native, then enabled extras, then customs,
/// each filtered by posture preference. Invalid customs never reach this
/// point; validation happens at creation time.
pub fn all_exercises(
    prefs: PosturePrefs,
    enabled_extra_ids: &[u32],
    customs: &[CustomExercise],
) -> Vec<Exercise> {
    let mut result: Vec<Exercise> = native_exercises()
        .into_iter()
        .filter(|e| prefs.allows(e.posture))
        .collect();

    result.extend(
        enabled_extra_exercises(enabled_extra_ids)
            .into_iter()
            .filter(|e| prefs.allows(e.posture)),
    );

    result.extend(
        customs
            .iter()
            .filter(|c| prefs.allows(c.posture))
            .map(CustomExercise::to_exercise),
    );

    result
}

/// Lookup by id across all three sources, ignoring posture preferences.
pub fn find_exercise(id: u32, enabled_extra_ids: &[u32], customs: &[CustomExercise]) -> Option<Exercise> {
    native_exercises()
        .into_iter()
        .chain(enabled_extra_exercises(enabled_extra_ids))
        .chain(customs.iter().map(CustomExercise::to_exercise))
        .find(|e| e.id == id)
}
