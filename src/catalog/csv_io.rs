// Lectura del CSV de oferta que produce el scraper del portal.
use std::error::Error;
use std::path::PathBuf;

use crate::models::MeetingRow;

/// Directorio donde viven los CSV de oferta. Configurable con
/// `CATALOG_DIR`; por defecto `data/catalogs`.
pub fn catalog_dir() -> PathBuf {
    let _ = dotenv::dotenv();
    match std::env::var("CATALOG_DIR") {
        Ok(d) if !d.trim().is_empty() => PathBuf::from(d),
        _ => PathBuf::from("data/catalogs"),
    }
}

/// Nombre de archivo por defecto (el que escribe el scraper).
pub const DEFAULT_CATALOG_FILE: &str = "course_offerings.csv";

/// Resuelve un nombre de archivo dentro del directorio de catálogos.
/// Nombres con ".." se rechazan.
pub fn resolve_catalog_path(name: &str) -> Result<PathBuf, Box<dyn Error>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("catalog file name is empty".into());
    }
    if trimmed.contains("..") {
        return Err(format!("invalid catalog file name '{}'", trimmed).into());
    }
    Ok(catalog_dir().join(trimmed))
}

/// Lista los CSV disponibles en el directorio de catálogos (sólo nombres).
pub fn list_catalog_files() -> Result<Vec<String>, Box<dyn Error>> {
    let dir = catalog_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_lowercase().ends_with(".csv") && !name.starts_with("backup_") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Lee las filas crudas de un CSV de oferta.
///
/// El scraper escribe el identificador del curso sólo en la primera fila
/// de cada sección y deja las siguientes en blanco, así que la columna
/// `Course` se forward-fillea con el último valor no vacío. Filas que no
/// logran resolver un identificador se saltan con un aviso; columnas
/// desconocidas ("No.") se ignoran.
pub fn read_catalog_csv<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<MeetingRow>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut rows: Vec<MeetingRow> = Vec::new();
    let mut last_code = String::new();

    for (idx, result) in rdr.deserialize::<MeetingRow>().enumerate() {
        let mut row = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("WARN: fila {} inválida en el CSV, se salta: {}", idx + 2, e);
                continue;
            }
        };
        if row.course.trim().is_empty() {
            row.course = last_code.clone();
        } else {
            last_code = row.course.trim().to_string();
            row.course = last_code.clone();
        }
        if row.course.is_empty() {
            // fila huérfana antes del primer curso con código
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}
