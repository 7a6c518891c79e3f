use aeroturnos::auth;
use aeroturnos::excel::alumnos_desde_filas;
use aeroturnos::models::{Alumno, Clase};
use aeroturnos::store::{Coleccion, JsonFileStore, nuevo_id};

fn fila(celdas: &[&str]) -> Vec<String> {
    celdas.iter().map(|c| c.to_string()).collect()
}

#[test]
fn importar_y_entrar_con_el_usuario_derivado() {
    let filas = vec![
        fila(&["Nombre", "Apellido", "DNI", "Promocion", "Clase"]),
        fila(&["Ana", "Gomez", "12345", "1", "B"]),
        fila(&["Luis", "Perez", "67890", "2", "D"]),
    ];
    let candidatos = alumnos_desde_filas(&filas, 1);
    assert_eq!(candidatos.len(), 2);

    // El alta masiva asigna ids frescos, como el alta individual
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let mut alumnos: Coleccion<Alumno> = Coleccion::cargar(JsonFileStore::en(dir.path()), "alumnos");
    alumnos.agregar_varios(
        candidatos
            .into_iter()
            .map(|datos| Alumno {
                id: nuevo_id(),
                nombre: datos.nombre,
                apellido: datos.apellido,
                dni: datos.dni,
                promocion_id: datos.promocion_id,
                clase: datos.clase,
            })
            .collect(),
    );

    let ids: Vec<&str> = alumnos.listar().iter().map(|a| a.id.as_str()).collect();
    let mut unicos = ids.clone();
    unicos.sort();
    unicos.dedup();
    assert_eq!(unicos.len(), ids.len());

    // Todo alumno importado puede entrar con inicial+apellido y su DNI
    for alumno in alumnos.listar() {
        let usuario = auth::login(alumnos.listar(), &auth::usuario_derivado(alumno), &alumno.dni)
            .expect("Debe entrar el alumno importado");
        assert!(!usuario.is_admin);
        assert_eq!(usuario.promocion_id, alumno.promocion_id);
    }
}

#[test]
fn una_planilla_sin_cabecera_importa_cero() {
    let filas = vec![
        fila(&["Planilla de asistencia"]),
        fila(&["Ana", "Gomez", "12345", "1", "B"]),
    ];
    assert!(alumnos_desde_filas(&filas, 1).is_empty());
}

#[test]
fn la_clase_y_la_promocion_se_corrigen_al_importar() {
    let filas = vec![
        fila(&["Nombre", "Apellido", "DNI", "Promocion", "Clase"]),
        fila(&["Ana", "Gomez", "12345", "", "e"]),
    ];
    let candidatos = alumnos_desde_filas(&filas, 4);
    assert_eq!(candidatos[0].promocion_id, 4);
    assert_eq!(candidatos[0].clase, Clase::A);
}
