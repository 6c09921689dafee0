// Biblioteca raíz del crate `askademic`.
// Reexporta los módulos principales y la función de conveniencia
// `run_server` que levanta la API HTTP.
pub mod algorithm;
pub mod analithics;
pub mod api_json;
pub mod catalog;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
