use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ScheduleRequest;
use crate::models::PreferenceConfig;

pub async fn help_handler() -> impl Responder {
    let example = ScheduleRequest {
        selected_course_codes: vec!["CS101".to_string(), "MA201".to_string()],
        preferences: PreferenceConfig {
            no_before: true,
            before_cutoff: 11.0,
            no_after: false,
            after_cutoff: 17.0,
            avoid_friday: true,
            avoid_back_to_back: false,
            minimize_days: false,
        },
        catalog: Some("course_offerings.csv".to_string()),
    };

    let help = json!({
        "description": "API para generar horarios sin choques a partir de la oferta de cursos. POST /schedules acepta un JSON (ver 'post_example') y devuelve todos los horarios empatados con menor penalización. GET /schedules acepta parámetros simples en query (lista separada por comas).",
        "post_example": example,
        "get_example_query": "/schedules?courses=CS101,MA201&avoid_friday=true&no_before=true&before_cutoff=11",
        "note": "GET es una versión ligera para pruebas rápidas. Para preferencias completas use POST con body JSON.",
        "routes": {
            "POST /schedules": "genera y selecciona horarios",
            "GET /schedules": "ídem con query params",
            "GET /courses": "cursos disponibles en el catálogo",
            "GET /courses/{code}": "secciones de un curso",
            "GET /catalog": "archivos CSV de oferta disponibles",
            "GET /catalog/content": "resumen y problemas de parseo de un CSV",
            "POST /catalog/upload": "sube un CSV nuevo (multipart)",
            "GET /catalog/changes": "cambios de horario contra el respaldo",
            "GET /analithics/recent": "últimas consultas registradas"
        }
    });

    HttpResponse::Ok().json(help)
}
