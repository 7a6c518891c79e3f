use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use crate::api_json::handlers::{
    crear_alumno_handler, crear_promocion_handler, crear_turno_handler, editar_alumno_handler,
    editar_promocion_handler, editar_turno_handler, eliminar_alumno_handler,
    eliminar_promocion_handler, eliminar_turno_handler, importar_alumnos_handler,
    listar_alumnos_handler, listar_promociones_handler, listar_turnos_handler, login_handler,
    logout_handler, marcar_volado_handler, reservar_turno_handler, turnos_volados_handler,
};
use crate::auth::Sesiones;
use crate::models::{Alumno, Promocion};
use crate::store::{Coleccion, JsonFileStore};
use crate::turnos::GestorTurnos;

/// Estado de la aplicación: las tres colecciones persistidas más las
/// sesiones en memoria. Se construye una sola vez al arrancar y viaja a los
/// handlers por `web::Data`; no hay estado de módulo.
pub struct AppState {
    pub dir_datos: PathBuf,
    pub promociones: Mutex<Coleccion<Promocion>>,
    pub alumnos: Mutex<Coleccion<Alumno>>,
    pub turnos: Mutex<GestorTurnos>,
    pub sesiones: Mutex<Sesiones>,
}

impl AppState {
    /// Carga las colecciones desde el directorio de datos configurado.
    pub fn cargar() -> Self {
        Self::con_sustrato(JsonFileStore::desde_env())
    }

    pub fn con_sustrato(sustrato: JsonFileStore) -> Self {
        AppState {
            dir_datos: sustrato.base().to_path_buf(),
            promociones: Mutex::new(Coleccion::cargar(sustrato.clone(), "promociones")),
            alumnos: Mutex::new(Coleccion::cargar(sustrato.clone(), "alumnos")),
            turnos: Mutex::new(GestorTurnos::nuevo(Coleccion::cargar(sustrato, "turnos"))),
            sesiones: Mutex::new(Sesiones::default()),
        }
    }
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let state = web::Data::new(AppState::cargar());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .route("/auth/login", web::post().to(login_handler))
            .route("/auth/logout", web::post().to(logout_handler))
            .route("/promociones", web::get().to(listar_promociones_handler))
            .route("/promociones", web::post().to(crear_promocion_handler))
            .route("/promociones/{id}", web::put().to(editar_promocion_handler))
            .route("/promociones/{id}", web::delete().to(eliminar_promocion_handler))
            .route("/alumnos", web::get().to(listar_alumnos_handler))
            .route("/alumnos", web::post().to(crear_alumno_handler))
            .route("/alumnos/importar", web::post().to(importar_alumnos_handler))
            .route("/alumnos/{id}", web::put().to(editar_alumno_handler))
            .route("/alumnos/{id}", web::delete().to(eliminar_alumno_handler))
            .route("/turnos", web::get().to(listar_turnos_handler))
            .route("/turnos", web::post().to(crear_turno_handler))
            .route("/turnos/volados", web::get().to(turnos_volados_handler))
            .route("/turnos/{id}", web::put().to(editar_turno_handler))
            .route("/turnos/{id}", web::delete().to(eliminar_turno_handler))
            .route("/turnos/{id}/reservar", web::post().to(reservar_turno_handler))
            .route("/turnos/{id}/volado", web::post().to(marcar_volado_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
