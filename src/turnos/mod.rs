//! Módulo `turnos`: ciclo de vida de los turnos de vuelo.
//!
//! Un turno nace libre, un alumno lo reserva y la administración registra
//! después las horas voladas. `reservar` y `marcar_volado` son los únicos
//! puntos de entrada que tocan `available`/`student`/`flown`; la edición
//! administrativa queda restringida a título, promoción y clase para que no
//! pueda pisar una reserva existente.

use serde::Deserialize;

use crate::error::ErrorTurnos;
use crate::models::{Clase, Turno};
use crate::store::{Coleccion, nuevo_id};

/// Estado de un turno dentro del ciclo Libre → Reservado → Volado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estado {
    Libre,
    Reservado,
    Volado,
}

impl Turno {
    pub fn estado(&self) -> Estado {
        if self.flown.unwrap_or(false) {
            Estado::Volado
        } else if !self.available {
            Estado::Reservado
        } else {
            Estado::Libre
        }
    }
}

/// Datos para crear un turno. Siempre nace libre.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoNuevo {
    pub start: String,
    pub end: String,
    pub title: String,
    pub promo_id: i32,
    pub clase: Clase,
}

/// Corrección administrativa: solo título, promoción y clase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoEdicion {
    pub title: Option<String>,
    pub promo_id: Option<i32>,
    pub clase: Option<Clase>,
}

/// Dueño de la colección de turnos y de sus transiciones de estado.
pub struct GestorTurnos {
    coleccion: Coleccion<Turno>,
}

impl GestorTurnos {
    pub fn nuevo(coleccion: Coleccion<Turno>) -> Self {
        GestorTurnos { coleccion }
    }

    pub fn listar(&self) -> &[Turno] {
        self.coleccion.listar()
    }

    pub fn buscar(&self, id: &str) -> Option<&Turno> {
        self.coleccion.buscar(&id.to_string())
    }

    /// Turnos visibles para un alumno: solo los de su promoción.
    pub fn por_promocion(&self, promo_id: i32) -> Vec<Turno> {
        self.coleccion
            .listar()
            .iter()
            .filter(|t| t.promo_id == promo_id)
            .cloned()
            .collect()
    }

    /// Turnos ya volados, para el reporte de horas.
    pub fn volados(&self) -> Vec<Turno> {
        self.coleccion
            .listar()
            .iter()
            .filter(|t| t.estado() == Estado::Volado)
            .cloned()
            .collect()
    }

    pub fn crear(&mut self, datos: TurnoNuevo) -> Turno {
        let turno = Turno {
            id: nuevo_id(),
            start: datos.start,
            end: datos.end,
            title: datos.title,
            promo_id: datos.promo_id,
            clase: datos.clase,
            available: true,
            student: None,
            flown: None,
            flown_hours: None,
        };
        self.coleccion.agregar(turno.clone());
        turno
    }

    /// Reserva un turno libre a nombre de `alumno`. Reservar un turno que ya
    /// no está libre se rechaza: es la guarda contra la doble reserva. Id
    /// ausente: no-op.
    pub fn reservar(&mut self, id: &str, alumno: &str) -> Result<(), ErrorTurnos> {
        let id = id.to_string();
        let estado = match self.coleccion.buscar(&id) {
            Some(turno) => turno.estado(),
            None => return Ok(()),
        };
        if estado != Estado::Libre {
            return Err(ErrorTurnos::TurnoNoDisponible);
        }
        self.coleccion.actualizar(&id, |t| {
            t.available = false;
            t.student = Some(alumno.to_string());
        });
        Ok(())
    }

    /// Registra las horas voladas de un turno reservado. Conserva el alumno
    /// y deja el turno fuera de disponibilidad. Horas fuera de
    /// `[0, max_horas(clase)]` se rechazan sin tocar el estado. Id ausente:
    /// no-op.
    pub fn marcar_volado(&mut self, id: &str, horas: f64) -> Result<(), ErrorTurnos> {
        let id = id.to_string();
        let (estado, maximo) = match self.coleccion.buscar(&id) {
            Some(turno) => (turno.estado(), turno.clase.max_horas()),
            None => return Ok(()),
        };
        match estado {
            Estado::Libre => return Err(ErrorTurnos::SinReserva),
            Estado::Volado => {
                return Err(ErrorTurnos::Validacion(
                    "el turno ya figura como volado".to_string(),
                ));
            }
            Estado::Reservado => {}
        }
        if !(0.0..=maximo).contains(&horas) {
            return Err(ErrorTurnos::HorasFueraDeRango { horas, maximo });
        }
        self.coleccion.actualizar(&id, |t| {
            t.flown = Some(true);
            t.flown_hours = Some(horas);
            t.available = false;
        });
        Ok(())
    }

    /// Corrección administrativa de título/promoción/clase, en cualquier
    /// estado. Los campos del ciclo de vida no pasan por acá. Id ausente:
    /// no-op.
    pub fn editar(&mut self, id: &str, cambios: TurnoEdicion) {
        self.coleccion.actualizar(&id.to_string(), |t| {
            if let Some(title) = cambios.title {
                t.title = title;
            }
            if let Some(promo_id) = cambios.promo_id {
                t.promo_id = promo_id;
            }
            if let Some(clase) = cambios.clase {
                t.clase = clase;
            }
        });
    }

    /// Baja definitiva, desde cualquier estado. Id ausente: no-op.
    pub fn eliminar(&mut self, id: &str) {
        self.coleccion.eliminar(&id.to_string());
    }
}
