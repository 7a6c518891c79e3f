use std::fs;
use std::path::{Path, PathBuf};

/// Sustrato de persistencia: un archivo JSON por clave bajo el directorio de datos.
///
/// El directorio sale de `TURNOS_DATA_DIR` (se honra `.env`) y por defecto es
/// `data`, relativo al directorio de trabajo.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base: PathBuf,
}

impl JsonFileStore {
    pub fn desde_env() -> Self {
        let _ = dotenv::dotenv();
        let base = std::env::var("TURNOS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::en(base)
    }

    pub fn en<P: AsRef<Path>>(base: P) -> Self {
        JsonFileStore { base: base.as_ref().to_path_buf() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn ruta(&self, clave: &str) -> PathBuf {
        self.base.join(format!("{}.json", clave))
    }

    /// Devuelve el contenido guardado bajo `clave`, o `None` si no existe
    /// o está vacío.
    pub fn get(&self, clave: &str) -> Option<String> {
        match fs::read_to_string(self.ruta(clave)) {
            Ok(contenido) if !contenido.trim().is_empty() => Some(contenido),
            _ => None,
        }
    }

    /// Sobrescribe el contenido guardado bajo `clave`, creando el directorio
    /// si hace falta.
    pub fn set(&self, clave: &str, contenido: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.ruta(clave), contenido)
    }
}
