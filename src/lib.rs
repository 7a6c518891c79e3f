// Biblioteca raíz del crate `aeroturnos`.
// Reexporta los módulos principales y la función `run_server` que levanta
// la API de turnos.
pub mod api_json;
pub mod auth;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;
pub mod store;
pub mod turnos;

pub use error::ErrorTurnos;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
