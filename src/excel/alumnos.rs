use crate::models::{AlumnoDatos, Clase};

/// Columnas que el importador reconoce en la fila de cabecera.
const COL_NOMBRE: &str = "nombre";
const COL_APELLIDO: &str = "apellido";
const COL_DNI: &str = "dni";
const COL_PROMOCION: &str = "promocion";
const COL_CLASE: &str = "clase";

/// La cabecera es la primera fila que contenga una celda "nombre", sin
/// distinguir mayúsculas.
fn fila_cabecera(filas: &[Vec<String>]) -> Option<usize> {
    filas
        .iter()
        .position(|fila| fila.iter().any(|c| c.trim().to_lowercase() == COL_NOMBRE))
}

fn indice_columna(cabecera: &[String], nombre: &str) -> Option<usize> {
    cabecera.iter().position(|c| c.trim().to_lowercase() == nombre)
}

fn texto(fila: &[String], columna: Option<usize>) -> String {
    columna
        .and_then(|i| fila.get(i))
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
}

/// Núcleo del importador, sobre filas ya convertidas a texto. Separado de la
/// lectura del workbook para poder probarlo sin un archivo Excel real.
///
/// Cada fila de datos con columnas suficientes produce un candidato: los
/// campos de texto se copian tal cual, la promoción cae en `promo_defecto`
/// si no es numérica y la clase cae en A si no es A-D.
pub fn alumnos_desde_filas(filas: &[Vec<String>], promo_defecto: i32) -> Vec<AlumnoDatos> {
    let Some(idx_cabecera) = fila_cabecera(filas) else {
        return Vec::new();
    };
    let cabecera = &filas[idx_cabecera];

    let col_nombre = indice_columna(cabecera, COL_NOMBRE);
    let col_apellido = indice_columna(cabecera, COL_APELLIDO);
    let col_dni = indice_columna(cabecera, COL_DNI);
    let col_promocion = indice_columna(cabecera, COL_PROMOCION);
    let col_clase = indice_columna(cabecera, COL_CLASE);

    // La fila debe llegar al menos hasta la columna resuelta más alta
    let max_indice = [col_nombre, col_apellido, col_dni, col_promocion, col_clase]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);

    filas[idx_cabecera + 1..]
        .iter()
        .filter(|fila| fila.len() > max_indice)
        .map(|fila| AlumnoDatos {
            nombre: texto(fila, col_nombre),
            apellido: texto(fila, col_apellido),
            dni: texto(fila, col_dni),
            promocion_id: texto(fila, col_promocion)
                .parse::<i32>()
                .unwrap_or(promo_defecto),
            clase: Clase::desde_celda(&texto(fila, col_clase)),
        })
        .collect()
}
