use rusqlite::{params, Connection};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// load .env at module init if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Ruta del archivo SQLite de analytics. Honra ANALITHICS_DB_PATH.
pub fn analytics_db_path() -> PathBuf {
    load_dotenv();
    match std::env::var("ANALITHICS_DB_PATH") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("analithics/analytics.db"),
    }
}

fn open_conn() -> Result<Connection, Box<dyn Error>> {
    let db_path = analytics_db_path();
    if let Some(dir) = db_path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(Connection::open(db_path)?)
}

/// Crea la tabla de consultas si no existe. Se llama una vez al arrancar;
/// si falla, el servidor sigue (se pierde el log, no el servicio).
pub fn init_db() -> Result<(), Box<dyn Error>> {
    let conn = open_conn()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS queries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            duration_ms INTEGER,
            selected_course_codes TEXT,
            schedules_count INTEGER,
            request_json TEXT,
            response_json TEXT,
            client_ip TEXT
        )",
        [],
    )?;
    Ok(())
}

/// Registra una consulta de horarios resuelta. Pensada para llamarse
/// desde `spawn_blocking`: nunca debe frenar una respuesta.
pub fn log_query(
    request_json: &str,
    response_json: &str,
    duration_ms: i64,
    client_ip: &str,
) -> Result<(), Box<dyn Error>> {
    // extraer campos cómodos de consultar sin deserializar todo después
    let (selected, count) = match serde_json::from_str::<serde_json::Value>(request_json) {
        Ok(v) => {
            let selected = v
                .get("selectedCourseCodes")
                .and_then(|s| s.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|x| x.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .unwrap_or_default();
            let count = serde_json::from_str::<serde_json::Value>(response_json)
                .ok()
                .and_then(|r| r.get("validCount").and_then(|c| c.as_i64()))
                .unwrap_or(-1);
            (selected, count)
        }
        Err(_) => (String::new(), -1),
    };

    let conn = open_conn()?;
    conn.execute(
        "INSERT INTO queries (ts, duration_ms, selected_course_codes, schedules_count, request_json, response_json, client_ip)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            chrono::Utc::now().to_rfc3339(),
            duration_ms,
            selected,
            count,
            request_json,
            response_json,
            client_ip,
        ],
    )?;
    Ok(())
}

/// Últimas consultas registradas, más recientes primero. Para el
/// endpoint de inspección; no expone los JSON completos.
pub fn recent_queries(limit: usize) -> Result<Vec<serde_json::Value>, Box<dyn Error>> {
    let conn = open_conn()?;
    let mut stmt = conn.prepare(
        "SELECT ts, duration_ms, selected_course_codes, schedules_count, client_ip
         FROM queries ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(serde_json::json!({
            "ts": row.get::<_, String>(0)?,
            "duration_ms": row.get::<_, i64>(1)?,
            "selected_course_codes": row.get::<_, String>(2)?,
            "schedules_count": row.get::<_, i64>(3)?,
            "client_ip": row.get::<_, String>(4)?,
        }))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
