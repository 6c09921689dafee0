// --- ASKADEMIC - Generador de horarios - Archivo principal ---

use askademic::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== ASKADEMIC - Generador de Horarios (API) ===");
    let _ = dotenv::dotenv();

    // el log de consultas es opcional: si no se puede crear, se avisa y
    // el servicio arranca igual
    if let Err(e) = askademic::analithics::init_db() {
        eprintln!("WARN: analytics deshabilitado: {}", e);
    }

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("Iniciando servidor en http://{}", bind);
    run_server(&bind).await
}
