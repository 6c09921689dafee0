// Registro local de consultas (SQLite).
mod db;

pub use db::{analytics_db_path, init_db, log_query, recent_queries};
