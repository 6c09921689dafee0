use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::json;
use std::collections::HashMap;
use tokio::io::AsyncWriteExt;

use crate::catalog::csv_io::{catalog_dir, list_catalog_files, resolve_catalog_path, DEFAULT_CATALOG_FILE};
use crate::catalog::{catalog_cached, check_timing_changes, invalidate};

/// GET /catalog
/// Lista los CSV de oferta disponibles en el directorio de catálogos.
pub async fn catalog_list_handler() -> impl Responder {
    match list_catalog_files() {
        Ok(files) => HttpResponse::Ok().json(json!({
            "files": files,
            "default": DEFAULT_CATALOG_FILE,
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to list catalogs: {}", e)})),
    }
}

/// GET /catalog/content?catalog=oferta.csv
/// Resumen del catálogo construido: conteos, problemas de parseo y
/// secciones descartadas. Útil para revisar qué tan sano vino el scrape.
pub async fn catalog_content_handler(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let name = qm
        .get("catalog")
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());

    match catalog_cached(&name) {
        Ok(build) => HttpResponse::Ok().json(json!({
            "catalog": name,
            "courseCount": build.catalog.course_count(),
            "sectionCount": build.catalog.section_count(),
            "parseIssues": build.issues,
            "droppedSections": build.dropped,
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// POST /catalog/upload
/// Recibe por multipart el CSV que produjo el scraper y lo deja en el
/// directorio de catálogos, invalidando la entrada cacheada.
pub async fn catalog_upload_handler(mut payload: Multipart) -> impl Responder {
    let base = catalog_dir();
    if let Err(e) = std::fs::create_dir_all(&base) {
        return HttpResponse::InternalServerError().json(json!({"error": format!("failed to create catalog dir: {}", e)}));
    }

    let mut saved: Vec<String> = Vec::new();
    while let Some(field_res) = payload.next().await {
        match field_res {
            Ok(mut field) => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("upload-{}.csv", chrono::Utc::now().timestamp_millis()));

                // nada de rutas raras ni formatos que no sean CSV
                if filename.contains("..") || !filename.to_lowercase().ends_with(".csv") {
                    continue;
                }

                let filepath = base.join(&filename);
                match tokio::fs::File::create(&filepath).await {
                    Ok(mut f) => {
                        let mut ok = true;
                        while let Some(chunk) = field.next().await {
                            match chunk {
                                Ok(bytes) => {
                                    if let Err(e) = f.write_all(&bytes).await {
                                        eprintln!("failed to write upload chunk: {}", e);
                                        ok = false;
                                        break;
                                    }
                                }
                                Err(e) => {
                                    eprintln!("upload stream error: {}", e);
                                    ok = false;
                                    break;
                                }
                            }
                        }
                        if ok {
                            invalidate(&filename);
                            saved.push(filename);
                        }
                    }
                    Err(e) => {
                        eprintln!("failed to create upload file: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("multipart field error: {}", e);
            }
        }
    }

    HttpResponse::Ok().json(json!({"status": "ok", "saved": saved}))
}

/// GET /catalog/changes?catalog=oferta.csv
/// Compara el CSV vivo contra su respaldo de semestre y reporta los
/// horarios que cambiaron desde el último scrape.
pub async fn catalog_changes_handler(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let name = qm
        .get("catalog")
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());

    let path = match resolve_catalog_path(&name) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    match check_timing_changes(&path) {
        Ok(changes) => HttpResponse::Ok().json(json!({
            "catalog": name,
            "changeCount": changes.len(),
            "changes": changes,
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}
