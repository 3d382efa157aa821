//! Entity store semantics over a file-backed fixture service.

use horarios_admin::domain::{EspacioFilters, EspacioPayload};
use horarios_admin::service::{EspaciosResource, FixtureService};
use horarios_admin::store::EntityStore;
use std::path::Path;
use std::sync::Arc;

fn payload(nombre: &str, tipo: &str) -> EspacioPayload {
    EspacioPayload {
        codigo: None,
        nombre: nombre.to_string(),
        tipo: tipo.to_string(),
        capacidad: 30,
        equipamiento: None,
        escuela_id: 2,
        estado: 1,
    }
}

fn store(path: &Path) -> EntityStore<EspaciosResource> {
    let service = FixtureService::<EspaciosResource>::open(path.to_path_buf()).unwrap();
    EntityStore::new(Arc::new(service))
}

#[tokio::test]
async fn create_update_delete_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("espacios.json");
    let mut espacios = store(&path);
    espacios.load(None).await.unwrap();

    let first = espacios.save(&payload("Lab 101", "laboratorio"), None).await.unwrap();
    let second = espacios.save(&payload("Aula 12", "salon"), None).await.unwrap();
    assert_eq!(espacios.items()[0].id, second.id);
    assert_eq!(espacios.items()[1].id, first.id);

    let mut renamed = payload("Lab 101 B", "laboratorio");
    renamed.capacidad = 45;
    espacios.save(&renamed, Some(first.id)).await.unwrap();
    let matching: Vec<_> = espacios.items().iter().filter(|e| e.id == first.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].nombre, "Lab 101 B");
    assert_eq!(matching[0].capacidad, 45);

    espacios.remove(second.id).await.unwrap();
    assert_eq!(espacios.items().len(), 2);
    assert_eq!(espacios.active_count(), 1);
    assert_eq!(espacios.inactive_count(), 1);

    let mut reopened = store(&path);
    reopened.load(None).await.unwrap();
    assert_eq!(reopened.items().len(), 2);
    assert_eq!(reopened.find(second.id).map(|e| e.estado), Some(0));
    assert_eq!(reopened.find(first.id).map(|e| e.capacidad), Some(45));
}

#[tokio::test]
async fn reload_reapplies_last_filters() {
    let dir = tempfile::tempdir().unwrap();
    let mut espacios = store(&dir.path().join("espacios.json"));

    espacios.save(&payload("Lab 101", "laboratorio"), None).await.unwrap();
    espacios.save(&payload("Aula 12", "salon"), None).await.unwrap();

    let solo_salones = EspacioFilters {
        tipo: Some("salon".to_string()),
        ..EspacioFilters::default()
    };
    espacios.load(Some(solo_salones.clone())).await.unwrap();
    assert_eq!(espacios.items().len(), 1);

    espacios.save(&payload("Aula 14", "salon"), None).await.unwrap();
    espacios.save(&payload("Lab 102", "laboratorio"), None).await.unwrap();
    espacios.reload().await.unwrap();

    assert_eq!(espacios.current_filters(), Some(&solo_salones));
    assert!(espacios.items().iter().all(|e| e.tipo == "salon"));
    assert_eq!(espacios.items().len(), 2);
}

#[tokio::test]
async fn corrupt_fixture_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("espacios.json");
    std::fs::write(&path, "{ no es json").unwrap();

    assert!(FixtureService::<EspaciosResource>::open(path).is_err());
}
