use crate::algorithm::score::score_schedule;
use crate::models::{PreferenceConfig, ScoredSchedule, Section};

/// Devuelve todos los horarios que logran la penalización mínima.
/// Los empates se incluyen completos y en el orden de llegada: el
/// front-end los pagina para que el estudiante elija, no se descarta
/// ninguno arbitrariamente.
///
/// Una sola pasada: se mantiene el mínimo actual y la lista de empatados,
/// que se vacía al aparecer un puntaje estrictamente menor (nada de
/// puntuar dos veces). Entrada vacía -> salida vacía, sin error.
pub fn select_best(schedules: Vec<Vec<Section>>, prefs: &PreferenceConfig) -> Vec<ScoredSchedule> {
    let mut best: Vec<ScoredSchedule> = Vec::new();
    let mut min_score: Option<u32> = None;

    for sched in schedules {
        let s = score_schedule(&sched, prefs);
        match min_score {
            None => {
                min_score = Some(s);
                best.push(ScoredSchedule { score: s, sections: sched });
            }
            Some(ms) => {
                if s == ms {
                    best.push(ScoredSchedule { score: s, sections: sched });
                } else if s < ms {
                    min_score = Some(s);
                    best.clear();
                    best.push(ScoredSchedule { score: s, sections: sched });
                }
            }
        }
    }

    best
}
