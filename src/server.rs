use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::server_handlers::{
    catalog_changes_handler, catalog_content_handler, catalog_list_handler,
    catalog_upload_handler, course_sections_handler, courses_list_handler, help_handler,
    queries_recent_handler, schedules_get_handler, schedules_handler,
};

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        // el front corre en otro origen (dev server), CORS abierto
        App::new()
            .wrap(Cors::permissive())
            .route("/schedules", web::post().to(schedules_handler))
            .route("/schedules", web::get().to(schedules_get_handler))
            .route("/courses", web::get().to(courses_list_handler))
            .route("/courses/{code}", web::get().to(course_sections_handler))
            .route("/catalog", web::get().to(catalog_list_handler))
            .route("/catalog/content", web::get().to(catalog_content_handler))
            .route("/catalog/upload", web::post().to(catalog_upload_handler))
            .route("/catalog/changes", web::get().to(catalog_changes_handler))
            .route("/analithics/recent", web::get().to(queries_recent_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
