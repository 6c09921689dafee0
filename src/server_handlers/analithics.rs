use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /analithics/recent?limit=20
/// Últimas consultas de horarios registradas (sin los JSON completos).
pub async fn queries_recent_handler(query: web::Query<std::collections::HashMap<String, String>>) -> impl Responder {
    let limit = query
        .get("limit")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(20);

    match crate::analithics::recent_queries(limit) {
        Ok(rows) => HttpResponse::Ok().json(json!({"count": rows.len(), "queries": rows})),
        Err(e) => {
            eprintln!("error fetching recent queries: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "error fetching recent queries"}))
        }
    }
}
