use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures_util::stream::StreamExt;
use serde_json::json;
use tokio::io::AsyncWriteExt;

use crate::api_json::AlumnoEdicion;
use crate::api_json::handlers::sesion_admin;
use crate::excel;
use crate::models::{Alumno, AlumnoDatos};
use crate::server::AppState;
use crate::store::nuevo_id;

/// GET /alumnos
pub async fn listar_alumnos_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let alumnos = state.alumnos.lock().unwrap();
    HttpResponse::Ok().json(alumnos.listar())
}

/// POST /alumnos
pub async fn crear_alumno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<AlumnoDatos>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let datos = body.into_inner();
    let alumno = Alumno {
        id: nuevo_id(),
        nombre: datos.nombre,
        apellido: datos.apellido,
        dni: datos.dni,
        promocion_id: datos.promocion_id,
        clase: datos.clase,
    };
    state.alumnos.lock().unwrap().agregar(alumno.clone());
    HttpResponse::Ok().json(alumno)
}

/// PUT /alumnos/{id}
pub async fn editar_alumno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AlumnoEdicion>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    let cambios = body.into_inner();
    state.alumnos.lock().unwrap().actualizar(&id, |a| {
        if let Some(nombre) = cambios.nombre {
            a.nombre = nombre;
        }
        if let Some(apellido) = cambios.apellido {
            a.apellido = apellido;
        }
        if let Some(dni) = cambios.dni {
            a.dni = dni;
        }
        if let Some(promocion_id) = cambios.promocion_id {
            a.promocion_id = promocion_id;
        }
        if let Some(clase) = cambios.clase {
            a.clase = clase;
        }
    });
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// DELETE /alumnos/{id}
pub async fn eliminar_alumno_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }
    let id = path.into_inner();
    state.alumnos.lock().unwrap().eliminar(&id);
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// POST /alumnos/importar
/// Recibe la planilla por multipart, la baja a un archivo temporal bajo el
/// directorio de datos, la parsea y da de alta todos los candidatos con ids
/// frescos. Una planilla sin cabecera "nombre" importa cero alumnos y
/// también responde ok.
pub async fn importar_alumnos_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> impl Responder {
    if let Err(rechazo) = sesion_admin(&req, &state) {
        return rechazo;
    }

    let base = state.dir_datos.clone();
    if let Err(e) = std::fs::create_dir_all(&base) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("no se pudo crear el directorio de datos: {}", e)}));
    }

    let mut archivo: Option<std::path::PathBuf> = None;
    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => {
                eprintln!("error de multipart: {}", e);
                continue;
            }
        };

        let destino = base.join(format!("subida-{}.xlsx", chrono::Utc::now().timestamp_millis()));
        match tokio::fs::File::create(&destino).await {
            Ok(mut f) => {
                let mut completo = true;
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => {
                            if let Err(e) = f.write_all(&bytes).await {
                                eprintln!("no se pudo escribir la planilla subida: {}", e);
                                completo = false;
                                break;
                            }
                        }
                        Err(e) => {
                            eprintln!("error leyendo la planilla subida: {}", e);
                            completo = false;
                            break;
                        }
                    }
                }
                if completo {
                    archivo = Some(destino);
                    break;
                }
                let _ = tokio::fs::remove_file(&destino).await;
            }
            Err(e) => {
                eprintln!("no se pudo crear el archivo temporal: {}", e);
            }
        }
    }

    let Some(ruta) = archivo else {
        return HttpResponse::BadRequest().json(json!({"error": "falta el archivo de la planilla"}));
    };

    // Promoción por defecto: la primera existente, o 0 si no hay ninguna
    let promo_defecto = state
        .promociones
        .lock()
        .unwrap()
        .listar()
        .first()
        .map(|p| p.id)
        .unwrap_or(0);

    let candidatos = match excel::leer_alumnos_excel(&ruta, promo_defecto) {
        Ok(c) => c,
        Err(e) => {
            let _ = tokio::fs::remove_file(&ruta).await;
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("no se pudo leer la planilla: {}", e)}));
        }
    };
    let _ = tokio::fs::remove_file(&ruta).await;

    let nuevos: Vec<Alumno> = candidatos
        .into_iter()
        .map(|datos| Alumno {
            id: nuevo_id(),
            nombre: datos.nombre,
            apellido: datos.apellido,
            dni: datos.dni,
            promocion_id: datos.promocion_id,
            clase: datos.clase,
        })
        .collect();
    let importados = nuevos.len();
    state.alumnos.lock().unwrap().agregar_varios(nuevos);

    HttpResponse::Ok().json(json!({"status": "ok", "importados": importados}))
}
