use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Convierte un `Data` de calamine a String. Los floats enteros (como los
/// DNI o los ids de promoción que Excel guarda como número) se imprimen sin
/// decimales.
pub fn celda_a_texto(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Lee la primera hoja del workbook como matriz de Strings. Un workbook sin
/// hojas o una hoja ilegible devuelven una matriz vacía.
pub fn leer_primera_hoja<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let mut workbook = open_workbook_auto(path)?;

    let nombres = workbook.sheet_names().to_owned();
    let hoja = match nombres.first() {
        Some(h) => h.clone(),
        None => return Ok(Vec::new()),
    };

    match workbook.worksheet_range(&hoja) {
        Ok(range) => {
            let mut filas: Vec<Vec<String>> = Vec::new();
            for fila in range.rows() {
                filas.push(fila.iter().map(celda_a_texto).collect());
            }
            Ok(filas)
        }
        Err(_) => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celda_float_entera_queda_sin_decimales() {
        assert_eq!(celda_a_texto(&Data::Float(12345.0)), "12345");
        assert_eq!(celda_a_texto(&Data::Float(1.5)), "1.5");
    }

    #[test]
    fn celdas_vacias_y_con_error_quedan_en_blanco() {
        assert_eq!(celda_a_texto(&Data::Empty), "");
        assert_eq!(celda_a_texto(&Data::String("  Ana  ".to_string())), "Ana");
    }
}
