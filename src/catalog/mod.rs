//! Construcción del catálogo de oferta a partir de las filas crudas del
//! CSV del portal. El builder es un fold puro: filas -> secciones
//! agrupadas por código base, sin acumuladores mutables visibles fuera.

use std::collections::HashMap;

use serde::Serialize;

use crate::algorithm::time::parse_time_opt;
use crate::models::{MeetingRow, Section, Timeslot};

pub mod cache;
pub mod changes;
pub mod csv_io;

pub use cache::{catalog_cached, invalidate};
pub use changes::check_timing_changes;
pub use csv_io::read_catalog_csv;

/// Catálogo inmutable: código base -> secciones en orden de aparición.
/// Se construye una vez por archivo y después sólo se consulta.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    order: Vec<String>,
    groups: HashMap<String, Vec<Section>>,
}

impl Catalog {
    /// Secciones de un curso, en el orden del CSV de origen.
    pub fn sections_for(&self, code: &str) -> Option<&[Section]> {
        self.groups.get(code).map(|v| v.as_slice())
    }

    /// Códigos base en orden de primera aparición.
    pub fn course_codes(&self) -> &[String] {
        &self.order
    }

    pub fn course_count(&self) -> usize {
        self.order.len()
    }

    pub fn section_count(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Una hora que no se pudo interpretar en una fila concreta. El build
/// sigue adelante (la política es de éxito parcial); el problema queda
/// registrado para quien quiera un tratamiento más estricto.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseIssue {
    pub section_id: String,
    pub field: &'static str,
    pub raw: String,
}

/// Salida del builder: el catálogo más lo que se perdió por el camino.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub issues: Vec<ParseIssue>,
    /// Secciones descartadas por quedarse sin ningún bloque utilizable.
    pub dropped: Vec<String>,
}

/// Código base de un curso: corrida inicial de letras seguida de dígitos
/// ("CS101-02" -> "CS101"). Si el identificador no calza con ese patrón
/// se usa entero tal cual.
pub fn base_code(full: &str) -> String {
    let s = full.trim();
    let letters = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if letters == 0 {
        return s.to_string();
    }
    let digits = s[letters..].chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return s.to_string();
    }
    // sólo ASCII hasta aquí, el corte por bytes es seguro
    s[..letters + digits].to_string()
}

/// Agrupa filas crudas en secciones y secciones en cursos.
///
/// - Las filas se agrupan por identificador completo de sección (columna
///   `Course` ya forward-filled por el lector CSV).
/// - Cada carácter del campo de días (quitando comas y espacios) produce
///   un `Timeslot` con las horas normalizadas de la fila.
/// - Un bloque cuyo inicio o fin normalizado sea 0 se descarta; una
///   sección que se queda sin bloques se elimina del catálogo y queda
///   anotada en `dropped` — nunca es un error.
pub fn build_catalog(rows: &[MeetingRow]) -> CatalogBuild {
    // agrupar por id de sección conservando orden de primera aparición
    let mut section_order: Vec<String> = Vec::new();
    let mut by_section: HashMap<String, Vec<&MeetingRow>> = HashMap::new();
    for row in rows {
        let id = row.course.trim();
        if id.is_empty() {
            continue;
        }
        if !by_section.contains_key(id) {
            section_order.push(id.to_string());
        }
        by_section.entry(id.to_string()).or_default().push(row);
    }

    let mut build = CatalogBuild::default();

    for section_id in &section_order {
        let group = &by_section[section_id];

        let mut timeslots: Vec<Timeslot> = Vec::new();
        for row in group {
            let start_opt = parse_time_opt(&row.start_time);
            let end_opt = parse_time_opt(&row.end_time);
            if start_opt.is_none() {
                build.issues.push(ParseIssue {
                    section_id: section_id.clone(),
                    field: "Start Time",
                    raw: row.start_time.clone(),
                });
            }
            if end_opt.is_none() {
                build.issues.push(ParseIssue {
                    section_id: section_id.clone(),
                    field: "End Time",
                    raw: row.end_time.clone(),
                });
            }
            // frontera legado: hora inválida == 0.0, y un bound en 0
            // invalida el bloque completo de esa fila
            let start = start_opt.unwrap_or(0.0);
            let end = end_opt.unwrap_or(0.0);
            if start == 0.0 || end == 0.0 {
                continue;
            }
            for day in row.days.chars() {
                if day == ',' || day.is_whitespace() {
                    continue;
                }
                timeslots.push(Timeslot { day, start, end });
            }
        }

        if timeslots.is_empty() {
            build.dropped.push(section_id.clone());
            continue;
        }

        // los metadatos de despliegue salen de la primera fila del grupo
        let first = group[0];
        let section = Section {
            course_code: base_code(section_id),
            section_id: section_id.clone(),
            timeslots,
            course_name: first.course_name.clone(),
            credits: first.credits.clone(),
            instructor: first.instructor.clone(),
            room: first.room.clone(),
            max_enrollment: first.max_enrollment.clone(),
            total_enrollment: first.total_enrollment.clone(),
        };

        let code = section.course_code.clone();
        if !build.catalog.groups.contains_key(&code) {
            build.catalog.order.push(code.clone());
        }
        build.catalog.groups.entry(code).or_default().push(section);
    }

    if !build.dropped.is_empty() {
        eprintln!(
            "WARN: {} seccion(es) descartadas por no tener bloques utilizables",
            build.dropped.len()
        );
    }

    build
}
