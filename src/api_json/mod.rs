//! Tipos de entrada/salida JSON de la API y sus handlers.
//!
//! Los cuerpos usan las mismas claves que el cliente persiste
//! (`promocionId`, `promoId`, `flownHours`), así el front consume las
//! respuestas sin traducción.

use serde::{Deserialize, Serialize};

use crate::models::Clase;

pub mod handlers;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Respuesta del login: el token acompaña a cada pedido posterior en la
/// cabecera `Authorization`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub promocion_id: i32,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct PromocionDatos {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PromocionEdicion {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnoEdicion {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub dni: Option<String>,
    pub promocion_id: Option<i32>,
    pub clase: Option<Clase>,
}

/// Horas a registrar al marcar un turno como volado.
#[derive(Debug, Deserialize)]
pub struct HorasVoladas {
    pub horas: f64,
}
