use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

use crate::api_json::suggest_code;
use crate::catalog::csv_io::DEFAULT_CATALOG_FILE;
use crate::catalog::{catalog_cached, CatalogBuild};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct CourseDto {
    code: String,
    name: String,
    sections: usize,
    /// Etiqueta lista para el selector del front ("CS101 — Intro to CS")
    label: String,
}

fn catalog_name_from(query: &HashMap<String, String>) -> String {
    query
        .get("catalog")
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string())
}

fn load_build(name: &str) -> Result<std::sync::Arc<CatalogBuild>, String> {
    catalog_cached(name).map_err(|e| format!("{}", e))
}

/// GET /courses
/// Códigos base disponibles, en el orden del CSV de origen, con nombre
/// y cantidad de secciones. Es la lista que alimenta el multiselect.
pub async fn courses_list_handler(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let name = catalog_name_from(&qm);

    match load_build(&name) {
        Ok(build) => {
            let cat = &build.catalog;
            let cursos: Vec<CourseDto> = cat
                .course_codes()
                .iter()
                .filter_map(|code| {
                    cat.sections_for(code).map(|secs| {
                        let display = secs
                            .first()
                            .map(|s| s.course_name.clone())
                            .unwrap_or_default();
                        CourseDto {
                            code: code.clone(),
                            name: display.clone(),
                            sections: secs.len(),
                            label: if display.is_empty() {
                                code.clone()
                            } else {
                                format!("{} — {}", code, display)
                            },
                        }
                    })
                })
                .collect();
            HttpResponse::Ok().json(json!({
                "catalog": name,
                "courseCount": cursos.len(),
                "courses": cursos,
            }))
        }
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e})),
    }
}

/// GET /courses/{code}
/// Las secciones de un curso con sus bloques ya normalizados. 404 con
/// sugerencia si el código no está en el catálogo.
pub async fn course_sections_handler(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let code = path.into_inner().trim().to_uppercase();
    let qm = query.into_inner();
    let name = catalog_name_from(&qm);

    let build = match load_build(&name) {
        Ok(b) => b,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    match build.catalog.sections_for(&code) {
        Some(secs) => HttpResponse::Ok().json(json!({
            "catalog": name,
            "code": code,
            "sections": secs,
        })),
        None => {
            let mut body = json!({"error": format!("course '{}' not found in catalog", code)});
            if let Some(sug) = suggest_code(&build.catalog, &code) {
                body["suggestion"] = json!(sug);
            }
            HttpResponse::NotFound().json(body)
        }
    }
}
