use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde_json::json;

use crate::api_json::HorasVoladas;
use crate::api_json::handlers::{sesion, sesion_admin, sesion_alumno};
use crate::server::AppState;
use crate::turnos::{TurnoEdicion, TurnoNuevo};

/// GET /turnos
/// La administración ve el calendario completo; un alumno solo los turnos
/// de su promoción.
pub async fn listar_turnos_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let usuario = match sesion(&req, &state) {
        Ok(u) => u,
        Err(rechazo) => return rechazo,
    };
    let gestor = state.turnos.lock().unwrap();
    if usuario.is_admin {
        HttpResponse::Ok().json(gestor.listar())
    } else {
        HttpResponse::Ok().json(gestor.por_promocion(usuario.promocion_id))
    }
}

/// POST /turnos
pub async fn crear_turno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<TurnoNuevo>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let turno = state.turnos.lock().unwrap().crear(body.into_inner());
    HttpResponse::Ok().json(turno)
}

/// PUT /turnos/{id}
/// Corrección administrativa. Los campos de reserva y vuelo no se pueden
/// tocar por acá; para eso están reservar y volado.
pub async fn editar_turno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<TurnoEdicion>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    state.turnos.lock().unwrap().editar(&id, body.into_inner());
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// DELETE /turnos/{id}
pub async fn eliminar_turno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    state.turnos.lock().unwrap().eliminar(&id);
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// POST /turnos/{id}/reservar
/// Solo alumnos, y siempre a su propio nombre.
pub async fn reservar_turno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let usuario = match sesion_alumno(&req, &state) {
        Ok(u) => u,
        Err(rechazo) => return rechazo,
    };
    let id = path.into_inner();
    match state.turnos.lock().unwrap().reservar(&id, &usuario.username) {
        Ok(()) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// POST /turnos/{id}/volado
pub async fn marcar_volado_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<HorasVoladas>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    match state.turnos.lock().unwrap().marcar_volado(&id, body.horas) {
        Ok(()) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// GET /turnos/volados
/// Reporte de horas voladas por alumno y clase.
pub async fn turnos_volados_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let gestor = state.turnos.lock().unwrap();
    HttpResponse::Ok().json(gestor.volados())
}
