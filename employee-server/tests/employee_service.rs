//! Service behaviour over the in-memory store

mod common;

use common::{MemoryStore, service};
use employee_server::ServiceError;
use serde_json::{Map, Value, json};
use shared::models::EmployeeCreate;

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn create_payload(name: &str, position: &str, salary: i64) -> EmployeeCreate {
    EmployeeCreate {
        name: name.into(),
        position: position.into(),
        salary,
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let store = MemoryStore::new();
    let svc = service(&store);

    let employee = svc
        .create(create_payload("  Alice ", " Engineer ", 1000))
        .await
        .unwrap();

    assert!(employee.id > 0);
    assert_eq!(employee.name, "Alice");
    assert_eq!(employee.position, "Engineer");
    assert_eq!(employee.created_at, employee.updated_at);
    assert!(employee.deleted_at.is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let store = MemoryStore::new();
    let svc = service(&store);

    let err = svc.create(create_payload("  ", "", 0)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref m) if m == "name is required"));

    let err = svc.create(create_payload("Bob", "", -1)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref m) if m == "salary must be >= 0"));

    assert!(svc.list(20, 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_or_deleted_is_not_found() {
    let store = MemoryStore::new();
    let svc = service(&store);

    assert!(matches!(svc.get(404).await, Err(ServiceError::NotFound)));

    let employee = svc.create(create_payload("Ann", "", 1)).await.unwrap();
    svc.delete(employee.id).await.unwrap();
    assert!(matches!(svc.get(employee.id).await, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn test_update_with_empty_map_returns_current_record() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "Dev", 10)).await.unwrap();

    let same = svc.update(employee.id, Map::new()).await.unwrap();
    assert_eq!(same, employee);
}

#[tokio::test]
async fn test_update_trims_name_and_advances_updated_at() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "Dev", 10)).await.unwrap();

    let updated = svc
        .update(employee.id, fields(json!({ "name": "  Bob  " })))
        .await
        .unwrap();

    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.position, "Dev");
    assert_eq!(updated.salary, 10);
    assert!(updated.updated_at > employee.updated_at);
    assert_eq!(updated.created_at, employee.created_at);
}

#[tokio::test]
async fn test_update_negative_salary_leaves_record_unmodified() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "Dev", 10)).await.unwrap();

    let err = svc
        .update(employee.id, fields(json!({ "name": "Zed", "salary": -5 })))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref m) if m == "salary must be >= 0"));
    assert_eq!(store.raw(employee.id).unwrap(), employee);
}

#[tokio::test]
async fn test_update_unknown_fields_only_is_noop() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "Dev", 10)).await.unwrap();

    let same = svc
        .update(employee.id, fields(json!({ "hacked": "x" })))
        .await
        .unwrap();
    assert_eq!(same, employee);
    assert_eq!(store.raw(employee.id).unwrap().updated_at, employee.updated_at);
}

#[tokio::test]
async fn test_update_coerces_salary_and_null_position() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "Dev", 10)).await.unwrap();

    let updated = svc
        .update(
            employee.id,
            fields(json!({ "salary": 2500.75, "position": null })),
        )
        .await
        .unwrap();
    assert_eq!(updated.salary, 2500);
    assert_eq!(updated.position, "");
}

#[tokio::test]
async fn test_update_missing_employee_is_not_found() {
    let store = MemoryStore::new();
    let svc = service(&store);

    let err = svc
        .update(9, fields(json!({ "name": "Bob" })))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let store = MemoryStore::new();
    let svc = service(&store);
    let employee = svc.create(create_payload("Ann", "", 0)).await.unwrap();

    svc.delete(employee.id).await.unwrap();
    assert!(matches!(svc.delete(employee.id).await, Err(ServiceError::NotFound)));

    let row = store.raw(employee.id).unwrap();
    assert!(row.is_deleted());
    assert_eq!(row.deleted_at, Some(row.updated_at));
}

#[tokio::test]
async fn test_list_excludes_deleted_and_orders_by_id_desc() {
    let store = MemoryStore::new();
    let svc = service(&store);

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        ids.push(svc.create(create_payload(name, "", 0)).await.unwrap().id);
    }
    svc.delete(ids[1]).await.unwrap();

    let listed: Vec<i64> = svc
        .list(20, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(listed, vec![ids[2], ids[0]]);

    let paged = svc.list(1, 1).await.unwrap();
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].id, ids[0]);
}

#[tokio::test]
async fn test_storage_failure_passes_through() {
    let store = MemoryStore::new();
    let svc = service(&store);
    store.fail_all();

    assert!(matches!(svc.get(1).await, Err(ServiceError::Storage(_))));
    assert!(matches!(svc.list(20, 0).await, Err(ServiceError::Storage(_))));
}
