// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Clase de vuelo (A-D). Determina el máximo de horas que un turno puede registrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clase {
    A,
    B,
    C,
    D,
}

impl Clase {
    /// Máximo de horas por clase
    pub fn max_horas(self) -> f64 {
        match self {
            Clase::A | Clase::B | Clase::C => 5.0,
            Clase::D => 10.0,
        }
    }

    /// Coerción desde una celda de planilla. Cualquier valor no reconocido cae en A.
    pub fn desde_celda(texto: &str) -> Clase {
        match texto.trim().to_uppercase().as_str() {
            "B" => Clase::B,
            "C" => Clase::C,
            "D" => Clase::D,
            _ => Clase::A,
        }
    }
}

/// Promoción: agrupación de alumnos con nombre y color para el calendario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promocion {
    pub id: i32,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumno {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub promocion_id: i32,
    pub clase: Clase,
}

/// Datos de alumno sin id asignado (alta individual o importación masiva).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnoDatos {
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub promocion_id: i32,
    pub clase: Clase,
}

/// Turno de vuelo. `start`/`end` son fechas ISO tal como las entrega el calendario.
///
/// Invariantes del ciclo de vida: `available=false` implica `student` presente;
/// `flown=true` implica `available=false` y `flown_hours` dentro del tope de la clase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turno {
    pub id: String,
    pub start: String,
    pub end: String,
    pub title: String,
    pub promo_id: i32,
    pub clase: Clase,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flown_hours: Option<f64>,
}

/// Identidad de sesión. Vive solo en memoria mientras el proceso corre;
/// nunca se persiste ni se restaura automáticamente.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub username: String,
    pub promocion_id: i32,
    pub is_admin: bool,
}
