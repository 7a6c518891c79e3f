use aeroturnos::models::{Alumno, Clase};
use aeroturnos::store::{Coleccion, JsonFileStore};

fn alumno(id: &str, nombre: &str, apellido: &str, dni: &str, promocion_id: i32) -> Alumno {
    Alumno {
        id: id.to_string(),
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
        dni: dni.to_string(),
        promocion_id,
        clase: Clase::B,
    }
}

#[test]
fn recargar_la_coleccion_devuelve_la_misma_lista() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());

    let mut alumnos: Coleccion<Alumno> = Coleccion::cargar(store.clone(), "alumnos");
    alumnos.agregar(alumno("a1", "Ana", "Gomez", "12345", 1));
    alumnos.agregar(alumno("a2", "Luis", "Perez", "67890", 2));
    alumnos.actualizar(&"a2".to_string(), |a| a.clase = Clase::D);

    let recargados: Coleccion<Alumno> = Coleccion::cargar(store, "alumnos");
    let lista = recargados.listar();
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0].id, "a1");
    assert_eq!(lista[0].dni, "12345");
    assert_eq!(lista[1].id, "a2");
    assert_eq!(lista[1].clase, Clase::D);
}

#[test]
fn el_archivo_guardado_usa_las_claves_del_cliente() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());

    let mut alumnos: Coleccion<Alumno> = Coleccion::cargar(store.clone(), "alumnos");
    alumnos.agregar(alumno("a1", "Ana", "Gomez", "12345", 1));

    let contenido = store.get("alumnos").expect("Debe existir el archivo");
    assert!(contenido.contains("\"promocionId\""));
    assert!(contenido.contains("\"dni\""));
    assert!(!contenido.contains("promocion_id"));
}

#[test]
fn sustrato_malformado_arranca_vacio_y_se_recupera_al_escribir() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());
    store.set("alumnos", "{esto no es un array}").expect("Debe escribir");

    let mut alumnos: Coleccion<Alumno> = Coleccion::cargar(store.clone(), "alumnos");
    assert!(alumnos.listar().is_empty());

    // La próxima mutación deja el sustrato sano de nuevo
    alumnos.agregar(alumno("a1", "Ana", "Gomez", "12345", 1));
    let recargados: Coleccion<Alumno> = Coleccion::cargar(store, "alumnos");
    assert_eq!(recargados.listar().len(), 1);
}
