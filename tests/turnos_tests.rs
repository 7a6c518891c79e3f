use aeroturnos::ErrorTurnos;
use aeroturnos::models::Clase;
use aeroturnos::store::{Coleccion, JsonFileStore};
use aeroturnos::turnos::{Estado, GestorTurnos, TurnoNuevo};

fn turno(promo_id: i32, clase: Clase) -> TurnoNuevo {
    TurnoNuevo {
        start: "2024-03-01T09:00:00".to_string(),
        end: "2024-03-01T11:00:00".to_string(),
        title: "Instrucción".to_string(),
        promo_id,
        clase,
    }
}

#[test]
fn el_ciclo_completo_sobrevive_una_recarga() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());

    let id = {
        let mut gestor = GestorTurnos::nuevo(Coleccion::cargar(store.clone(), "turnos"));
        let creado = gestor.crear(turno(1, Clase::D));
        gestor.reservar(&creado.id, "Ana Gomez").expect("Debe reservar");
        gestor.marcar_volado(&creado.id, 8.5).expect("Debe marcar volado");
        creado.id
    };

    // Proceso nuevo: se recarga desde el sustrato
    let gestor = GestorTurnos::nuevo(Coleccion::cargar(store, "turnos"));
    let guardado = gestor.buscar(&id).expect("Debe seguir existiendo");
    assert_eq!(guardado.estado(), Estado::Volado);
    assert_eq!(guardado.student.as_deref(), Some("Ana Gomez"));
    assert_eq!(guardado.flown_hours, Some(8.5));
    assert!(!guardado.available);
}

#[test]
fn la_guarda_de_doble_reserva_sigue_despues_de_recargar() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());

    let id = {
        let mut gestor = GestorTurnos::nuevo(Coleccion::cargar(store.clone(), "turnos"));
        let creado = gestor.crear(turno(1, Clase::A));
        gestor.reservar(&creado.id, "Ana Gomez").expect("Debe reservar");
        creado.id
    };

    let mut gestor = GestorTurnos::nuevo(Coleccion::cargar(store, "turnos"));
    assert_eq!(
        gestor.reservar(&id, "Luis Perez"),
        Err(ErrorTurnos::TurnoNoDisponible)
    );
}

#[test]
fn eliminar_un_turno_reservado_es_definitivo() {
    let dir = tempfile::tempdir().expect("Debe crear directorio temporal");
    let store = JsonFileStore::en(dir.path());

    let mut gestor = GestorTurnos::nuevo(Coleccion::cargar(store.clone(), "turnos"));
    let creado = gestor.crear(turno(1, Clase::A));
    gestor.reservar(&creado.id, "Ana Gomez").expect("Debe reservar");
    gestor.eliminar(&creado.id);

    let recargado = GestorTurnos::nuevo(Coleccion::cargar(store, "turnos"));
    assert!(recargado.buscar(&creado.id).is_none());
    assert!(recargado.listar().is_empty());
}
