// Detección de cambios de horario entre el CSV vivo y su respaldo.
//
// El respaldo es un único archivo por semestre (`backup_<nombre>.csv`)
// junto al CSV vivo: la primera ejecución lo crea y no reporta nada;
// las siguientes comparan sesión a sesión y lo sobreescriben después.

use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::catalog::csv_io::read_catalog_csv;
use crate::models::MeetingRow;

fn backup_path_for(csv_path: &Path) -> PathBuf {
    let file_name = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    csv_path.with_file_name(format!("backup_{}", file_name))
}

/// Agrupa filas por código de curso conservando el orden de aparición.
fn group_by_course(rows: &[MeetingRow]) -> (Vec<String>, HashMap<String, Vec<&MeetingRow>>) {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&MeetingRow>> = HashMap::new();
    for row in rows {
        let code = row.course.trim().to_string();
        if code.is_empty() {
            continue;
        }
        if !groups.contains_key(&code) {
            order.push(code.clone());
        }
        groups.entry(code).or_default().push(row);
    }
    (order, groups)
}

/// Compara el CSV vivo contra su respaldo y devuelve una línea por
/// cambio detectado (horas de inicio/fin modificadas o sesiones nuevas).
/// Sin respaldo previo: lo crea y devuelve lista vacía. Al final el
/// respaldo se sobreescribe con el estado actual para la próxima vuelta.
pub fn check_timing_changes<P: AsRef<Path>>(csv_path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let csv_path = csv_path.as_ref();
    if !csv_path.exists() {
        return Err(format!("catalog file '{}' not found", csv_path.display()).into());
    }

    let current_rows = read_catalog_csv(csv_path)?;
    let backup_path = backup_path_for(csv_path);

    // primera ejecución: crear respaldo y salir sin reportes
    if !backup_path.exists() {
        std::fs::copy(csv_path, &backup_path)?;
        return Ok(Vec::new());
    }

    let backup_rows = read_catalog_csv(&backup_path)?;

    let (current_order, current_groups) = group_by_course(&current_rows);
    let (_, backup_groups) = group_by_course(&backup_rows);

    let mut changes: Vec<String> = Vec::new();
    for code in &current_order {
        let cur_sessions = &current_groups[code];
        let empty: Vec<&MeetingRow> = Vec::new();
        let back_sessions = backup_groups.get(code).unwrap_or(&empty);
        for (idx, cur) in cur_sessions.iter().enumerate() {
            let cur_start = cur.start_time.trim();
            let cur_end = cur.end_time.trim();
            match back_sessions.get(idx) {
                Some(back) => {
                    let back_start = back.start_time.trim();
                    let back_end = back.end_time.trim();
                    if cur_start != back_start || cur_end != back_end {
                        changes.push(format!(
                            "Course {} session {} changed: new {}-{}, was {}-{}",
                            code,
                            idx + 1,
                            cur_start,
                            cur_end,
                            back_start,
                            back_end
                        ));
                    }
                }
                None => {
                    changes.push(format!(
                        "Course {} session {} is new: {}-{}",
                        code,
                        idx + 1,
                        cur_start,
                        cur_end
                    ));
                }
            }
        }
    }

    // dejar el respaldo al día para la próxima comparación
    std::fs::copy(csv_path, &backup_path)?;

    Ok(changes)
}
