use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde_json::json;

use crate::api_json::handlers::sesion_admin;
use crate::api_json::{PromocionDatos, PromocionEdicion};
use crate::server::AppState;

/// GET /promociones
pub async fn listar_promociones_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let promociones = state.promociones.lock().unwrap();
    HttpResponse::Ok().json(promociones.listar())
}

/// POST /promociones
pub async fn crear_promocion_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<PromocionDatos>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let datos = body.into_inner();
    let promocion = state.promociones.lock().unwrap().alta(datos.name, datos.color);
    HttpResponse::Ok().json(promocion)
}

/// PUT /promociones/{id}
pub async fn editar_promocion_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PromocionEdicion>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    let cambios = body.into_inner();
    state.promociones.lock().unwrap().actualizar(&id, |p| {
        if let Some(name) = cambios.name {
            p.name = name;
        }
        if let Some(color) = cambios.color {
            p.color = color;
        }
    });
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// DELETE /promociones/{id}
/// Sin borrado en cascada: los alumnos y turnos que referencien la
/// promoción quedan huérfanos.
pub async fn eliminar_promocion_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    state.promociones.lock().unwrap().eliminar(&id);
    HttpResponse::Ok().json(json!({"status": "ok"}))
}
