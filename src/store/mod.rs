//! Módulo `store`: colecciones en memoria con espejo durable.
//!
//! Cada colección (promociones, alumnos, turnos) se carga entera desde el
//! sustrato al arrancar y se reescribe completa después de cada mutación.
//! La escritura no es transaccional con la mutación en memoria: si el
//! proceso muere entre ambas, el sustrato queda desfasado hasta la próxima
//! carga y el estado en memoria sigue siendo el autoritativo.

mod substrato;

pub use substrato::JsonFileStore;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{Alumno, Promocion, Turno};

/// Registro con id propio dentro de una colección homogénea.
pub trait Registro: Clone + Serialize + DeserializeOwned {
    type Id: PartialEq + Clone;

    fn id(&self) -> Self::Id;
}

impl Registro for Promocion {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Registro for Alumno {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Registro for Turno {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Colección homogénea con espejo en el sustrato, en orden de inserción.
pub struct Coleccion<T: Registro> {
    clave: &'static str,
    items: Vec<T>,
    sustrato: JsonFileStore,
}

impl<T: Registro> Coleccion<T> {
    /// Carga la colección guardada bajo `clave`. Contenido ausente o
    /// malformado nunca es fatal: se arranca con la colección vacía.
    pub fn cargar(sustrato: JsonFileStore, clave: &'static str) -> Self {
        let items = match sustrato.get(clave) {
            Some(contenido) => match serde_json::from_str::<Vec<T>>(&contenido) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("⚠️  Contenido inválido en '{}', se arranca vacío: {}", clave, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Coleccion { clave, items, sustrato }
    }

    pub fn listar(&self) -> &[T] {
        &self.items
    }

    pub fn buscar(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|r| r.id() == *id)
    }

    pub fn agregar(&mut self, item: T) {
        self.items.push(item);
        self.persistir();
    }

    pub fn agregar_varios(&mut self, items: Vec<T>) {
        if items.is_empty() {
            return;
        }
        self.items.extend(items);
        self.persistir();
    }

    /// Aplica `cambios` sobre el registro con ese id. Id ausente: no-op.
    pub fn actualizar(&mut self, id: &T::Id, cambios: impl FnOnce(&mut T)) {
        if let Some(item) = self.items.iter_mut().find(|r| r.id() == *id) {
            cambios(item);
            self.persistir();
        }
    }

    /// Quita el registro con ese id. Id ausente: no-op.
    pub fn eliminar(&mut self, id: &T::Id) {
        let antes = self.items.len();
        self.items.retain(|r| r.id() != *id);
        if self.items.len() != antes {
            self.persistir();
        }
    }

    fn persistir(&self) {
        match serde_json::to_string_pretty(&self.items) {
            Ok(contenido) => {
                if let Err(e) = self.sustrato.set(self.clave, &contenido) {
                    eprintln!("no se pudo escribir '{}': {}", self.clave, e);
                }
            }
            Err(e) => eprintln!("no se pudo serializar '{}': {}", self.clave, e),
        }
    }
}

impl Coleccion<Promocion> {
    /// Alta de promoción con id monotónico: máximo existente + 1, o 1 si la
    /// colección está vacía. Borrar la primera promoción no reusa su id.
    pub fn alta(&mut self, name: String, color: String) -> Promocion {
        let id = self.items.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let promocion = Promocion { id, name, color };
        self.agregar(promocion.clone());
        promocion
    }
}

static SECUENCIA: AtomicU64 = AtomicU64::new(0);

/// Token de id opaco para alumnos y turnos: milisegundos de reloj más una
/// secuencia local al proceso, para que las altas masivas no colisionen.
pub fn nuevo_id() -> String {
    let seq = SECUENCIA.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}
