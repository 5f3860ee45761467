use super::helpers::spawn_store;
use cityweather::domain::city::{entity::NewFavoriteCity, repository::CityRepository};
use uuid::Uuid;

// The table is shared with other runs, so every test works on rows it created itself.
fn city(tag: &str, name: &str, latitude: f64) -> NewFavoriteCity {
    NewFavoriteCity {
        name: format!("{} {}", name, tag),
        latitude,
        longitude: 2.35,
        country: "France".to_string(),
        admin1: None,
    }
}

#[tokio::test]
async fn list_returns_added_favorites_in_insertion_order() {
    let Some(store) = spawn_store().await else {
        return;
    };
    let tag = Uuid::now_v7().to_string();

    let mut added = Vec::new();
    for (name, lat) in [("Paris", 48.85), ("Lyon", 45.76), ("Nice", 43.7)] {
        added.push(store.add(city(&tag, name, lat)).await.expect("add"));
    }

    let listed: Vec<_> = store
        .list()
        .await
        .expect("list")
        .into_iter()
        .filter(|c| c.name.ends_with(&tag))
        .collect();

    assert_eq!(listed, added);
    assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(listed[1].latitude, 45.76);
    assert_eq!(listed[1].admin1, None);
}

#[tokio::test]
async fn identical_favorites_are_stored_separately() {
    let Some(store) = spawn_store().await else {
        return;
    };
    let tag = Uuid::now_v7().to_string();

    let first = store.add(city(&tag, "Paris", 48.85)).await.expect("add");
    let second = store.add(city(&tag, "Paris", 48.85)).await.expect("add");

    assert_ne!(first.id, second.id);
    assert_eq!(store.get(first.id).await.expect("get"), Some(first));
    assert_eq!(store.get(second.id).await.expect("get"), Some(second));
}

#[tokio::test]
async fn removed_ids_are_not_handed_out_again() {
    let Some(store) = spawn_store().await else {
        return;
    };
    let tag = Uuid::now_v7().to_string();

    let removed = store.add(city(&tag, "Berlin", 52.52)).await.expect("add");
    store.remove(removed.id).await.expect("remove");
    assert_eq!(store.get(removed.id).await.expect("get"), None);

    let next = store.add(city(&tag, "Berlin", 52.52)).await.expect("add");
    assert!(next.id > removed.id);
}

#[tokio::test]
async fn removing_or_fetching_unknown_id_changes_nothing() {
    let Some(store) = spawn_store().await else {
        return;
    };
    let tag = Uuid::now_v7().to_string();
    let kept = store.add(city(&tag, "Rome", 41.9)).await.expect("add");

    // SERIAL ids start at 1, so -1 is never assigned.
    store.remove(-1).await.expect("unknown id is not an error");
    assert_eq!(store.get(-1).await.expect("get"), None);
    assert_eq!(store.get(kept.id).await.expect("get"), Some(kept));
    store.ping().await.expect("ping");
}
