//! Módulo `excel`: importación masiva de alumnos desde planillas.
//!
//! Submódulos:
//! - `io`: lectura de workbooks con calamine y conversión de celdas a texto
//! - `alumnos`: localización de la cabecera y armado de candidatos de alumno

/// Helpers de IO para leer la planilla
mod io;

/// Núcleo del importador a nivel de filas
mod alumnos;

pub use alumnos::alumnos_desde_filas;
pub use io::leer_primera_hoja;

use std::error::Error;
use std::path::Path;

use crate::models::AlumnoDatos;

/// Lee la primera hoja del workbook y devuelve los candidatos de alumno que
/// encuentre. Una planilla sin fila "nombre" produce cero candidatos, no un
/// error.
pub fn leer_alumnos_excel<P: AsRef<Path>>(
    path: P,
    promo_defecto: i32,
) -> Result<Vec<AlumnoDatos>, Box<dyn Error>> {
    let filas = io::leer_primera_hoja(path)?;
    Ok(alumnos_desde_filas(&filas, promo_defecto))
}
