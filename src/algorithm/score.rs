// Puntaje de penalización de un horario contra las preferencias.
// Cada regla aporta un conteo independiente y sólo si su flag está
// activo; el total es la suma (menor == mejor, 0 == perfecto).

use std::collections::{HashMap, HashSet};

use crate::models::{PreferenceConfig, Section};

/// Holgura para considerar dos clases "pegadas": 1.5 minutos en horas
/// fraccionarias. El margen absorbe ruido de coma flotante en pares
/// realmente consecutivos (termina 11:00 / empieza 11:00).
pub const BACK_TO_BACK_TOLERANCE: f64 = 1.5 / 60.0;

/// Suma de penalizaciones de todas las reglas habilitadas.
pub fn score_schedule(schedule: &[Section], prefs: &PreferenceConfig) -> u32 {
    let mut score = 0u32;
    if prefs.no_before {
        score += count_early_starts(schedule, prefs.before_cutoff);
    }
    if prefs.no_after {
        score += count_late_starts(schedule, prefs.after_cutoff);
    }
    if prefs.avoid_friday {
        score += count_friday_slots(schedule);
    }
    if prefs.avoid_back_to_back {
        score += count_back_to_back(schedule);
    }
    if prefs.minimize_days {
        score += count_days_used(schedule);
    }
    score
}

/// Bloques que empiezan antes del cutoff (estricto).
fn count_early_starts(schedule: &[Section], cutoff: f64) -> u32 {
    schedule
        .iter()
        .flat_map(|sec| sec.timeslots.iter())
        .filter(|t| t.start < cutoff)
        .count() as u32
}

/// Bloques que empiezan después del cutoff (estricto). Se compara el
/// inicio, no el fin: así lo hacía el formulario original.
fn count_late_starts(schedule: &[Section], cutoff: f64) -> u32 {
    schedule
        .iter()
        .flat_map(|sec| sec.timeslots.iter())
        .filter(|t| t.start > cutoff)
        .count() as u32
}

fn count_friday_slots(schedule: &[Section]) -> u32 {
    schedule
        .iter()
        .flat_map(|sec| sec.timeslots.iter())
        .filter(|t| t.day == 'F')
        .count() as u32
}

/// Pares consecutivos por día: se agrupan los bloques por día, se
/// ordenan por inicio y se cuenta cada par adyacente cuyo hueco sea
/// menor que la holgura. Los solapes ya fueron filtrados por el
/// generador, así que un hueco negativo sólo puede venir de bloques de
/// una misma sección; cuenta igual.
fn count_back_to_back(schedule: &[Section]) -> u32 {
    let mut per_day: HashMap<char, Vec<(f64, f64)>> = HashMap::new();
    for sec in schedule {
        for t in &sec.timeslots {
            per_day.entry(t.day).or_default().push((t.start, t.end));
        }
    }

    let mut count = 0u32;
    for times in per_day.values_mut() {
        if times.len() < 2 {
            continue;
        }
        times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in times.windows(2) {
            let prev_end = pair[0].1;
            let next_start = pair[1].0;
            if next_start - prev_end < BACK_TO_BACK_TOLERANCE {
                count += 1;
            }
        }
    }
    count
}

/// Días distintos con al menos una clase. Se suma directo: menos días
/// ocupados == menor penalización.
fn count_days_used(schedule: &[Section]) -> u32 {
    let dias: HashSet<char> = schedule
        .iter()
        .flat_map(|sec| sec.timeslots.iter())
        .map(|t| t.day)
        .collect();
    dias.len() as u32
}
