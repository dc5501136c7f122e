use quote_core::{
    backup,
    budget::{Budget, ServiceSelection},
    query,
    store::{JsonStore, RecordStore},
};
use tempfile::tempdir;

fn quote_for(name: &str) -> Budget {
    let mut budget = Budget::new();
    budget.client_data.name = name.to_string();
    budget.created_at = 1_700_000_000_000;
    budget
}

#[test]
fn first_saves_walk_through_ids_and_totals() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let mut first = quote_for("Ana");
    first.services.insert(
        "Capô".to_string(),
        ServiceSelection {
            funil: true,
            part_price: Some(150.0),
            ..ServiceSelection::default()
        },
    );
    let first = store.upsert(first).expect("first save");
    assert_eq!(first.id, Some(1));
    assert_eq!(first.total_value, 150.0);

    let second = store.upsert(quote_for("Bruno")).expect("second save");
    assert_eq!(second.id, Some(2));

    let mut all = store.list_all().expect("list");
    query::sort_newest_first(&mut all);
    let ids: Vec<_> = all.iter().map(|b| b.id.unwrap()).collect();
    assert_eq!(ids, vec![2, 1]);

    let hits = query::filter(&all, "ana");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, Some(1));
}

#[test]
fn import_overwrites_by_id_and_inserts_new_ids() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let existing = store.upsert(quote_for("Ana")).expect("seed record");
    assert_eq!(existing.id, Some(1));

    let blob = r#"[
        {"id": 1, "clientData": {"name": "Ana"}, "services": {}, "observations": "",
         "createdAt": 1700000000000, "totalValue": 999},
        {"id": 5, "clientData": {"name": "Edu"}, "services": {}, "observations": "",
         "createdAt": 1700000000001, "totalValue": 40}
    ]"#;
    let count = backup::import_records(&store, blob).expect("import");
    assert_eq!(count, 2);

    let overwritten = store.get_by_id(1).expect("get").expect("still present");
    assert_eq!(overwritten.total_value, 999.0);
    assert!(store.get_by_id(5).expect("get").is_some());

    // Import is additive: nothing outside the blob was deleted.
    assert_eq!(store.list_all().expect("list").len(), 2);
}

#[test]
fn edits_keep_id_and_created_at() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let saved = store.upsert(quote_for("Ana")).expect("first save");
    let mut edited = saved.clone();
    edited.client_data.vehicle = "Gol".to_string();
    let edited = store.upsert(edited).expect("edit save");

    assert_eq!(edited.id, saved.id);
    assert_eq!(edited.created_at, saved.created_at);
    let reloaded = store.get_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(reloaded.client_data.vehicle, "Gol");
}

#[test]
fn deleted_record_is_gone_and_its_id_stays_retired() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let first = store.upsert(quote_for("Ana")).expect("save");
    let id = first.id.unwrap();
    store.delete(id).expect("delete");
    assert!(store.get_by_id(id).expect("get").is_none());

    let replacement = store.upsert(quote_for("Bruno")).expect("save");
    assert!(replacement.id.unwrap() > id);
}
