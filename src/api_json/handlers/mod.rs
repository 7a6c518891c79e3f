pub mod alumnos;
pub mod auth;
pub mod promociones;
pub mod turnos;

pub use alumnos::*;
pub use auth::*;
pub use promociones::*;
pub use turnos::*;

use actix_web::{HttpRequest, HttpResponse, http::header};
use serde_json::json;

use crate::models::Usuario;
use crate::server::AppState;

pub(crate) fn token_de_cabecera(req: &HttpRequest) -> Option<String> {
    let valor = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = valor.trim_start_matches("Bearer").trim();
    if token.is_empty() { None } else { Some(token.to_string()) }
}

/// Resuelve la sesión del pedido. Sin token o con token desconocido: 401.
pub fn sesion(req: &HttpRequest, state: &AppState) -> Result<Usuario, HttpResponse> {
    let Some(token) = token_de_cabecera(req) else {
        return Err(HttpResponse::Unauthorized().json(json!({"error": "sesión requerida"})));
    };
    match state.sesiones.lock().unwrap().resolver(&token) {
        Some(usuario) => Ok(usuario.clone()),
        None => Err(HttpResponse::Unauthorized().json(json!({"error": "sesión requerida"}))),
    }
}

/// Sesión con rol de administración. Autenticado sin rol: 403.
pub fn sesion_admin(req: &HttpRequest, state: &AppState) -> Result<Usuario, HttpResponse> {
    let usuario = sesion(req, state)?;
    if !usuario.is_admin {
        return Err(HttpResponse::Forbidden().json(json!({"error": "solo administración"})));
    }
    Ok(usuario)
}

/// Sesión de alumno. La administración no reserva turnos a nombre de nadie.
pub fn sesion_alumno(req: &HttpRequest, state: &AppState) -> Result<Usuario, HttpResponse> {
    let usuario = sesion(req, state)?;
    if usuario.is_admin {
        return Err(HttpResponse::Forbidden().json(json!({"error": "solo alumnos"})));
    }
    Ok(usuario)
}
