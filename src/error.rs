//! Errores de dominio del sistema de turnos.

use thiserror::Error;

/// Fallos que las operaciones de dominio devuelven al borde HTTP.
///
/// Las mutaciones sobre ids inexistentes no figuran acá: son no-ops
/// silenciosos, nunca errores.
#[derive(Debug, Error, PartialEq)]
pub enum ErrorTurnos {
    #[error("Credenciales inválidas")]
    CredencialesInvalidas,

    #[error("{0}")]
    Validacion(String),

    #[error("el turno ya no está disponible")]
    TurnoNoDisponible,

    #[error("el turno no tiene reserva")]
    SinReserva,

    #[error("horas fuera de rango: {horas} (máximo {maximo})")]
    HorasFueraDeRango { horas: f64, maximo: f64 },
}
