// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Un bloque semanal recurrente: día (letra del portal: M,T,W,R,F),
/// inicio y fin en horas fraccionarias (ej: 9.5 == 09:30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeslot {
    pub day: char,
    pub start: f64,
    pub end: f64,
}

/// Una sección concreta de un curso, con sus bloques semanales ya
/// normalizados. Inmutable una vez construido el catálogo.
/// Los campos extra (instructor, sala, cupos...) se arrastran tal cual
/// para que el front-end los muestre; el núcleo no los consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub course_code: String,
    pub section_id: String,
    pub timeslots: Vec<Timeslot>,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub credits: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub max_enrollment: String,
    #[serde(default)]
    pub total_enrollment: String,
}

/// Preferencias del estudiante. El núcleo no infiere defaults: los
/// cutoffs llegan siempre del caller (la capa API aplica los del
/// formulario original cuando el campo viene ausente).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceConfig {
    pub no_before: bool,
    pub before_cutoff: f64,
    pub no_after: bool,
    pub after_cutoff: f64,
    pub avoid_friday: bool,
    pub avoid_back_to_back: bool,
    pub minimize_days: bool,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        // Estado "sin marcar" del formulario: 0.0 / 24.0 nunca penalizan.
        PreferenceConfig {
            no_before: false,
            before_cutoff: 0.0,
            no_after: false,
            after_cutoff: 24.0,
            avoid_friday: false,
            avoid_back_to_back: false,
            minimize_days: false,
        }
    }
}

/// Un horario candidato junto a su penalización total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSchedule {
    pub score: u32,
    pub sections: Vec<Section>,
}

/// Una fila cruda del CSV de oferta (una fila por reunión semanal de una
/// sección). Los nombres de columna son los que escribe el scraper del
/// portal; columnas desconocidas ("No.") se ignoran al deserializar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingRow {
    #[serde(rename = "Course", default)]
    pub course: String,
    #[serde(rename = "Course Name", default)]
    pub course_name: String,
    #[serde(rename = "Credits", default)]
    pub credits: String,
    #[serde(rename = "Instructor", default)]
    pub instructor: String,
    #[serde(rename = "Room", default)]
    pub room: String,
    #[serde(rename = "Days", default)]
    pub days: String,
    #[serde(rename = "Start Time", default)]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: String,
    #[serde(rename = "Max Enrollment", default)]
    pub max_enrollment: String,
    #[serde(rename = "Total Enrollment", default)]
    pub total_enrollment: String,
}
