use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde_json::json;

use crate::api_json::{LoginRequest, LoginResponse};
use crate::auth;
use crate::error::ErrorTurnos;
use crate::server::AppState;

/// POST /auth/login
/// Única operación externa con validación de entrada: usuario y contraseña
/// no vacíos después de recortar espacios. El fallo de credenciales es
/// genérico a propósito.
pub async fn login_handler(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    let datos = body.into_inner();

    let resultado = {
        let alumnos = state.alumnos.lock().unwrap();
        auth::login(alumnos.listar(), &datos.username, &datos.password)
    };

    match resultado {
        Ok(usuario) => {
            let token = state.sesiones.lock().unwrap().abrir(usuario.clone());
            HttpResponse::Ok().json(LoginResponse {
                token,
                username: usuario.username,
                promocion_id: usuario.promocion_id,
                is_admin: usuario.is_admin,
            })
        }
        Err(ErrorTurnos::Validacion(mensaje)) => {
            HttpResponse::BadRequest().json(json!({"error": mensaje}))
        }
        Err(_) => HttpResponse::Unauthorized().json(json!({"error": "Credenciales inválidas"})),
    }
}

/// POST /auth/logout
/// Idempotente: cerrar una sesión ya cerrada (o un token desconocido)
/// también responde ok.
pub async fn logout_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    if let Some(token) = super::token_de_cabecera(&req) {
        state.sesiones.lock().unwrap().cerrar(&token);
    }
    HttpResponse::Ok().json(json!({"status": "ok"}))
}
