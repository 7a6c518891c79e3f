//! Módulo `auth`: resolución de credenciales y sesiones en memoria.
//!
//! Hay dos formas de entrar: la credencial fija de administración y el
//! usuario derivado de cada alumno (inicial del nombre + apellido, en
//! minúsculas) con su DNI como contraseña. Las credenciales se comparan en
//! claro contra la colección persistida; no hay hashing, bloqueo ni límite
//! de intentos.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::ErrorTurnos;
use crate::models::{Alumno, Usuario};

const ADMIN_USUARIO: &str = "admin";
const ADMIN_CLAVE: &str = "admin";

/// Promoción centinela para la sesión de administración.
pub const PROMOCION_ADMIN: i32 = -1;

/// Usuario de login derivado de un alumno: inicial del nombre + apellido,
/// todo en minúsculas. No se garantiza unicidad; en el login gana el primer
/// alumno que coincida, en orden de colección.
pub fn usuario_derivado(alumno: &Alumno) -> String {
    let inicial = alumno.nombre.chars().next().map(String::from).unwrap_or_default();
    format!("{}{}", inicial, alumno.apellido).to_lowercase()
}

/// Resuelve credenciales a una identidad de sesión.
///
/// El fallo es genérico a propósito: no se revela si falló el usuario o la
/// contraseña.
pub fn login(alumnos: &[Alumno], username: &str, clave: &str) -> Result<Usuario, ErrorTurnos> {
    let username = username.trim();
    let clave = clave.trim();
    if username.is_empty() || clave.is_empty() {
        return Err(ErrorTurnos::Validacion(
            "usuario y contraseña son obligatorios".to_string(),
        ));
    }

    if username == ADMIN_USUARIO && clave == ADMIN_CLAVE {
        return Ok(Usuario {
            username: ADMIN_USUARIO.to_string(),
            promocion_id: PROMOCION_ADMIN,
            is_admin: true,
        });
    }

    let buscado = username.to_lowercase();
    for alumno in alumnos {
        if usuario_derivado(alumno) == buscado && alumno.dni == clave {
            return Ok(Usuario {
                username: format!("{} {}", alumno.nombre, alumno.apellido),
                promocion_id: alumno.promocion_id,
                is_admin: false,
            });
        }
    }

    Err(ErrorTurnos::CredencialesInvalidas)
}

/// Sesiones activas del proceso: token opaco → identidad. Se pierden al
/// reiniciar; volver a entrar exige credenciales.
#[derive(Default)]
pub struct Sesiones {
    activas: HashMap<String, Usuario>,
}

impl Sesiones {
    pub fn abrir(&mut self, usuario: Usuario) -> String {
        let token = Uuid::new_v4().to_string();
        self.activas.insert(token.clone(), usuario);
        token
    }

    pub fn resolver(&self, token: &str) -> Option<&Usuario> {
        self.activas.get(token)
    }

    /// Cierre incondicional e idempotente.
    pub fn cerrar(&mut self, token: &str) {
        self.activas.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Clase;

    fn alumno(nombre: &str, apellido: &str, dni: &str, promocion_id: i32) -> Alumno {
        Alumno {
            id: format!("{}-{}", nombre, apellido),
            nombre: nombre.to_string(),
            apellido: apellido.to_string(),
            dni: dni.to_string(),
            promocion_id,
            clase: Clase::A,
        }
    }

    #[test]
    fn admin_entra_siempre() {
        let usuario = login(&[], "admin", "admin").expect("Debe entrar el admin");
        assert!(usuario.is_admin);
        assert_eq!(usuario.promocion_id, PROMOCION_ADMIN);

        // También con alumnos cargados
        let alumnos = vec![alumno("Ana", "Gomez", "123", 1)];
        let usuario = login(&alumnos, "admin", "admin").expect("Debe entrar el admin");
        assert!(usuario.is_admin);
    }

    #[test]
    fn alumno_entra_con_usuario_derivado_y_dni() {
        let alumnos = vec![alumno("Ana", "Gomez", "12345", 2)];
        let usuario = login(&alumnos, "agomez", "12345").expect("Debe entrar el alumno");
        assert!(!usuario.is_admin);
        assert_eq!(usuario.promocion_id, 2);
        assert_eq!(usuario.username, "Ana Gomez");
    }

    #[test]
    fn usuario_no_distingue_mayusculas_pero_dni_si_es_exacto() {
        let alumnos = vec![alumno("Ana", "Gomez", "12345", 1)];
        assert!(login(&alumnos, "AGomez", "12345").is_ok());
        assert_eq!(
            login(&alumnos, "agomez", "12345 6"),
            Err(ErrorTurnos::CredencialesInvalidas)
        );
    }

    #[test]
    fn credenciales_sin_coincidencia_fallan_generico() {
        let alumnos = vec![alumno("Ana", "Gomez", "12345", 1)];
        assert_eq!(
            login(&alumnos, "agomez", "99999"),
            Err(ErrorTurnos::CredencialesInvalidas)
        );
        assert_eq!(
            login(&alumnos, "nadie", "12345"),
            Err(ErrorTurnos::CredencialesInvalidas)
        );
    }

    #[test]
    fn campos_vacios_son_error_de_validacion() {
        assert!(matches!(
            login(&[], "  ", "algo"),
            Err(ErrorTurnos::Validacion(_))
        ));
        assert!(matches!(
            login(&[], "alguien", ""),
            Err(ErrorTurnos::Validacion(_))
        ));
    }

    #[test]
    fn con_usuarios_derivados_duplicados_gana_el_primero() {
        // Dos alumnos distintos que derivan el mismo usuario "agomez"
        let alumnos = vec![
            alumno("Ana", "Gomez", "111", 1),
            alumno("Alberto", "Gomez", "222", 2),
        ];
        let usuario = login(&alumnos, "agomez", "111").expect("Debe entrar la primera");
        assert_eq!(usuario.username, "Ana Gomez");
        // El segundo sigue pudiendo entrar con su propio DNI
        let usuario = login(&alumnos, "agomez", "222").expect("Debe entrar el segundo");
        assert_eq!(usuario.username, "Alberto Gomez");
    }

    #[test]
    fn sesiones_abren_resuelven_y_cierran() {
        let mut sesiones = Sesiones::default();
        let usuario = Usuario {
            username: "Ana Gomez".to_string(),
            promocion_id: 1,
            is_admin: false,
        };
        let token = sesiones.abrir(usuario);
        assert!(sesiones.resolver(&token).is_some());

        sesiones.cerrar(&token);
        assert!(sesiones.resolver(&token).is_none());
        // Cerrar de nuevo no molesta
        sesiones.cerrar(&token);
    }
}
