// --- Sistema de Turnos de Vuelo - Archivo principal ---

use aeroturnos::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv::dotenv();
    println!("=== Sistema de Turnos de Vuelo (API) ===");
    let bind = std::env::var("TURNOS_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("Iniciando servidor en http://{}", bind);
    run_server(&bind).await
}
