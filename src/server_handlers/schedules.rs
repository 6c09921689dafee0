use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use std::sync::{Arc, OnceLock};
use tokio::sync::Semaphore;

use crate::algorithm::{solve, SolveOutcome};
use crate::api_json::{normalize_codes, parse_json_input, suggest_code, ScheduleRequest};
use crate::catalog::csv_io::DEFAULT_CATALOG_FILE;
use crate::catalog::{catalog_cached, CatalogBuild};
use crate::models::ScoredSchedule;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse {
    valid_count: usize,
    best_score: Option<u32>,
    schedules: Vec<ScoredSchedule>,
}

/// Arma la respuesta HTTP para un outcome ya resuelto. Cursos sin
/// secciones -> 400 con sugerencias; lista vacía de horarios -> 200
/// normal (no existe combinación sin choques, no es un error).
fn outcome_response(outcome: SolveOutcome, build: &CatalogBuild) -> (HttpResponse, String) {
    if !outcome.missing.is_empty() {
        let mut suggestions = serde_json::Map::new();
        for code in &outcome.missing {
            if let Some(sug) = suggest_code(&build.catalog, code) {
                suggestions.insert(code.clone(), json!(sug));
            }
        }
        let body = json!({
            "error": "no sections available for selected course(s)",
            "missing": outcome.missing,
            "suggestions": suggestions,
        });
        let serial = body.to_string();
        return (HttpResponse::BadRequest().json(body), serial);
    }

    let resp = ScheduleResponse {
        valid_count: outcome.valid_count,
        best_score: outcome.best.first().map(|s| s.score),
        schedules: outcome.best,
    };
    let serial = serde_json::to_string(&resp).unwrap_or_else(|_| String::from("{}"));
    (HttpResponse::Ok().json(resp), serial)
}

/// POST /schedules
/// Genera todas las combinaciones sin conflicto para los cursos pedidos
/// y devuelve el conjunto empatado de menor penalización. El trabajo
/// pesado corre en `spawn_blocking` con un semáforo global (un permiso
/// por core) para no tumbar el reactor con búsquedas combinatorias.
pub async fn schedules_handler(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let request = match parse_json_input(&json_str) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    let codes = normalize_codes(&request.selected_course_codes);
    if codes.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "selectedCourseCodes is required"}));
    }

    let catalog_name = request
        .catalog
        .clone()
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());
    let build = match catalog_cached(&catalog_name) {
        Ok(b) => b,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();
    let start = std::time::Instant::now();

    static GLOBAL_SEM: OnceLock<Arc<Semaphore>> = OnceLock::new();
    let sem = GLOBAL_SEM
        .get_or_init(|| Arc::new(Semaphore::new(std::cmp::max(1, num_cpus::get()))))
        .clone();

    let permit = match sem.acquire_owned().await {
        Ok(p) => p,
        Err(_) => return HttpResponse::InternalServerError().json(json!({"error": "failed to acquire semaphore"})),
    };

    let build_block = Arc::clone(&build);
    let codes_block = codes.clone();
    let prefs_block = request.preferences.clone();
    let blocking_handle = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        solve(&build_block.catalog, &codes_block, &prefs_block)
    });

    let outcome = match blocking_handle.await {
        Ok(o) => o,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    };

    eprintln!(
        "✅ [schedules] {} cursos, {} combinaciones válidas, {} en el empate mínimo",
        codes.len(),
        outcome.valid_count,
        outcome.best.len()
    );

    let (response, resp_serial) = outcome_response(outcome, &build);
    let duration_ms = start.elapsed().as_millis() as i64;

    // registrar la consulta sin frenar la respuesta
    let req_clone = json_str.clone();
    let ip_clone = client_ip.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = crate::analithics::log_query(&req_clone, &resp_serial, duration_ms, &ip_clone) {
            eprintln!("WARN: no se pudo registrar la consulta: {}", e);
        }
    });

    response
}

/// GET /schedules — versión ligera con parámetros en query string.
/// `courses` es una lista separada por comas; las preferencias llegan
/// como flags sueltos (`no_before=true&before_cutoff=11`).
pub async fn schedules_get_handler(query: web::Query<std::collections::HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();

    let split_list = |s_opt: Option<&String>| -> Vec<String> {
        match s_opt {
            Some(s) if !s.trim().is_empty() => s
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    };
    let flag = |key: &str| -> bool {
        matches!(qm.get(key).map(|s| s.trim()), Some("true") | Some("1"))
    };
    let hour = |key: &str, fallback: f64| -> f64 {
        qm.get(key).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(fallback)
    };

    let selected = split_list(qm.get("courses"));
    let codes = normalize_codes(&selected);
    if codes.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "courses is required in query"}));
    }

    let request = ScheduleRequest {
        selected_course_codes: codes.clone(),
        preferences: crate::models::PreferenceConfig {
            no_before: flag("no_before"),
            before_cutoff: hour("before_cutoff", 0.0),
            no_after: flag("no_after"),
            after_cutoff: hour("after_cutoff", 24.0),
            avoid_friday: flag("avoid_friday"),
            avoid_back_to_back: flag("avoid_back_to_back"),
            minimize_days: flag("minimize_days"),
        },
        catalog: qm.get("catalog").filter(|s| !s.trim().is_empty()).cloned(),
    };

    let catalog_name = request
        .catalog
        .clone()
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());
    let build = match catalog_cached(&catalog_name) {
        Ok(b) => b,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let outcome = solve(&build.catalog, &codes, &request.preferences);
    let (response, _serial) = outcome_response(outcome, &build);
    response
}
