// Núcleo algorítmico: normalización de horas, detección de conflictos,
// enumeración de combinaciones y selección por preferencias. Todo es
// cómputo puro sobre valores en memoria — sin I/O ni estado compartido —
// así que una invocación completa es segura en cualquier hilo.
pub mod conflict;
pub mod generator;
pub mod score;
pub mod selector;
pub mod time;

// Reexportar sólo la API que el resto del crate usa
pub use conflict::sections_conflict;
pub use generator::{generate_schedules, GenerationResult};
pub use score::{score_schedule, BACK_TO_BACK_TOLERANCE};
pub use selector::select_best;
pub use time::{parse_time, parse_time_opt};

use crate::catalog::Catalog;
use crate::models::{PreferenceConfig, ScoredSchedule};

/// Resultado completo de una consulta: el conjunto empatado de mejores
/// horarios, cuántas combinaciones válidas se consideraron y qué códigos
/// seleccionados no tenían secciones en el catálogo.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub best: Vec<ScoredSchedule>,
    pub valid_count: usize,
    pub missing: Vec<String>,
}

/// Orquesta el flujo completo (generar -> puntuar -> seleccionar) sobre
/// un catálogo ya construido. Es la frontera que llama la capa HTTP,
/// normalmente dentro de un `spawn_blocking`.
pub fn solve(catalog: &Catalog, selected: &[String], prefs: &PreferenceConfig) -> SolveOutcome {
    let generated = generate_schedules(catalog, selected);
    let valid_count = generated.schedules.len();
    let best = select_best(generated.schedules, prefs);
    SolveOutcome {
        best,
        valid_count,
        missing: generated.missing,
    }
}
